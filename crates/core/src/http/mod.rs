//! Vendor-neutral description of one HTTP round trip.

mod form;
mod request;

pub use form::{FormBody, FormPart};
pub use request::{bearer, Body, HttpRequest, Method, JSON_CONTENT_TYPE};
