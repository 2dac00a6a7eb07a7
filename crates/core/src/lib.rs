//! herald_core - request builders for the herald vendor clients.
//!
//! Everything in this crate is pure: option values go in, fully-described
//! [`HttpRequest`] values come out. Sending them is the client crate's job.

pub mod error;
pub mod google;
pub mod http;
pub mod slack;
pub mod telegram;

pub use error::{AuthError, CoreError, Result, ValidationError};
pub use http::{bearer, Body, FormBody, FormPart, HttpRequest, Method};
