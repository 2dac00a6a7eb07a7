//! Response output: raw passthrough or jq-filtered JSON lines.

pub mod query;

use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Where and how to print a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Destination file. `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// jq expression applied to the response.
    pub query: Option<String>,
}

impl OutputOptions {
    pub fn new(output: Option<PathBuf>, query: Option<String>) -> Self {
        Self {
            output,
            query: query.filter(|q| !q.is_empty()),
        }
    }
}

/// Turn a response body into the bytes to print.
pub fn render(body: &[u8], options: &OutputOptions) -> Result<Vec<u8>> {
    let Some(expression) = options.query.as_deref() else {
        return Ok(body.to_vec());
    };

    let input: serde_json::Value = serde_json::from_slice(body)?;
    let mut rendered = Vec::new();
    for value in query::apply(expression, input)? {
        rendered.extend_from_slice(query::render_value(&value)?.as_bytes());
        rendered.push(b'\n');
    }
    Ok(rendered)
}

/// Write rendered bytes to the output file, or stdout.
pub fn write_output(bytes: &[u8], options: &OutputOptions) -> Result<()> {
    match &options.output {
        Some(path) => std::fs::write(path, bytes)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Print the outcome of one vendor call.
///
/// Call and rendering failures are logged and produce no output. Only a
/// failure to write the output is returned.
pub fn emit(
    vendor: &str,
    operation: &str,
    result: Result<Vec<u8>>,
    options: &OutputOptions,
) -> Result<()> {
    let body = match result {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(vendor, operation, error = %e, "Request failed");
            return Ok(());
        }
    };

    let rendered = match render(&body, options) {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::error!(vendor, operation, error = %e, "Cannot render response");
            return Ok(());
        }
    };

    tracing::debug!(
        vendor,
        operation,
        received = body.len(),
        written = rendered.len(),
        "Writing response"
    );
    write_output(&rendered, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_new_drops_empty_query() {
        let options = OutputOptions::new(None, Some(String::new()));
        assert_eq!(options.query, None);
    }

    #[test]
    fn test_render_passthrough() {
        let body = br#"{"ok": false, "error": "not_authed"}"#;
        let rendered = render(body, &OutputOptions::default()).unwrap();
        assert_eq!(rendered, body);
    }

    #[test]
    fn test_render_passthrough_non_json() {
        let rendered = render(b"<html>", &OutputOptions::default()).unwrap();
        assert_eq!(rendered, b"<html>");
    }

    #[test]
    fn test_render_query_raw_string() {
        let options = OutputOptions::new(None, Some(".ts".to_string()));
        let rendered = render(br#"{"ok":true,"ts":"1234.5678"}"#, &options).unwrap();
        assert_eq!(rendered, b"1234.5678\n");
    }

    #[test]
    fn test_render_query_json_lines() {
        let options = OutputOptions::new(None, Some(".items[]".to_string()));
        let rendered = render(br#"{"items":[{"id":1},{"id":2}]}"#, &options).unwrap();
        assert_eq!(rendered, b"{\"id\":1}\n{\"id\":2}\n");
    }

    #[test]
    fn test_render_query_needs_json() {
        let options = OutputOptions::new(None, Some(".".to_string()));
        let err = render(b"not json", &options).unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[test]
    fn test_emit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let options = OutputOptions::new(Some(path.clone()), None);

        emit("slack", "send", Ok(br#"{"ok":true}"#.to_vec()), &options).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), br#"{"ok":true}"#);
    }

    #[test]
    fn test_emit_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let options = OutputOptions::new(Some(path.clone()), None);

        let result = Err(ClientError::Connection("refused".to_string()));
        emit("slack", "send", result, &options).unwrap();

        assert!(!path.exists());
    }
}
