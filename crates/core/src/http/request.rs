use super::FormBody;

/// Content type used for JSON bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP method. Only the two verbs the vendors need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    Json(Vec<u8>),
    Multipart(FormBody),
}

impl Body {
    /// Serialize `value` into a JSON body.
    pub fn json<T: serde::Serialize>(value: &T) -> crate::Result<Self> {
        Ok(Body::Json(serde_json::to_vec(value)?))
    }

    /// Payload size in bytes, ignoring multipart framing.
    pub fn len(&self) -> usize {
        match self {
            Body::Empty => 0,
            Body::Json(bytes) => bytes.len(),
            Body::Multipart(form) => form.payload_len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The multipart form, if this is a multipart body.
    pub fn as_form(&self) -> Option<&FormBody> {
        match self {
            Body::Multipart(form) => Some(form),
            _ => None,
        }
    }

    /// The raw JSON bytes, if this is a JSON body.
    pub fn as_json(&self) -> Option<&[u8]> {
        match self {
            Body::Json(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// A fully described HTTP request, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    /// Verbatim `Authorization` header value. `None` omits the header,
    /// `Some("")` sends it empty.
    pub authorization: Option<String>,
    pub body: Body,
}

impl HttpRequest {
    /// GET request without body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            query: Vec::new(),
            authorization: None,
            body: Body::Empty,
        }
    }

    /// POST request with the given body.
    pub fn post(url: impl Into<String>, body: Body) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            query: Vec::new(),
            authorization: None,
            body,
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append all query parameters.
    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set the `Authorization` header value.
    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    /// Value of the first query parameter called `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Resolve the `Authorization` header value for a call.
///
/// The per-call token wins over the client default. Without any token the
/// header is sent empty and the vendor rejects the call.
pub fn bearer(call_token: &str, default_token: &str) -> String {
    let token = if call_token.is_empty() {
        default_token
    } else {
        call_token
    };

    if token.is_empty() {
        String::new()
    } else {
        format!("Bearer {}", token)
    }
}
