//! jq filtering of JSON responses.

use jaq_core::load::{Arena, File, Loader};
use jaq_core::{Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Run the jq `query` over `input`, returning every result in order.
pub fn apply(query: &str, input: Value) -> Result<Vec<Value>> {
    let program = File {
        code: query,
        path: (),
    };

    let loader = Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = Arena::default();
    let modules = loader
        .load(&arena, program)
        .map_err(|errs| ClientError::Query(format!("cannot parse {:?}: {:?}", query, errs)))?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(|errs| ClientError::Query(format!("cannot compile {:?}: {:?}", query, errs)))?;

    let inputs = RcIter::new(core::iter::empty());
    filter
        .run((Ctx::new([], &inputs), Val::from(input)))
        .map(|out| {
            out.map(Value::from)
                .map_err(|e| ClientError::Query(format!("{:?}", e)))
        })
        .collect()
}

/// Render one result: strings raw, everything else as compact JSON.
pub fn render_value(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string(other)?),
    }
}
