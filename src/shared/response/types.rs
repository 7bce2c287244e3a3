use serde_json::Value;
use std::fmt;

/// HTTP-style status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    InternalError,
}

impl StatusCode {
    pub fn code(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalError => 500,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalError => "Internal Error",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub message: String,
    /// Body serialized verbatim when present; errors render a status envelope.
    pub body: Option<Value>,
}

impl Response {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::Ok,
            message: "OK".to_string(),
            body: Some(body),
        }
    }

    pub fn ok_empty() -> Self {
        Self {
            status: StatusCode::Ok,
            message: "OK".to_string(),
            body: None,
        }
    }

    pub fn error(code: StatusCode, message: impl ToString) -> Self {
        Self {
            status: code,
            message: message.to_string(),
            body: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::Ok
    }
}
