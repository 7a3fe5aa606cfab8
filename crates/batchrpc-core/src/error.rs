//! Shared error type across batchrpc crates.

use thiserror::Error;

use crate::protocol::envelope::ErrorObject;

/// JSON-RPC 2.0 error kinds (stable wire codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Body is not syntactically valid.
    ParseError,
    /// Envelope is not a valid request object.
    InvalidRequest,
    /// Method is not registered.
    MethodNotFound,
    /// Params do not fit the declared argument shape.
    InvalidParams,
    /// Server-side failure outside the handler.
    InternalError,
    /// Handler returned an error without its own code.
    ServerError,
}

impl ErrorCode {
    /// Integer value used on the wire.
    pub fn code(self) -> i64 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
            ErrorCode::ServerError => -32000,
        }
    }

    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::MethodNotFound => "METHOD_NOT_FOUND",
            ErrorCode::InvalidParams => "INVALID_PARAMS",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServerError => "SERVER_ERROR",
        }
    }

    /// Reverse lookup from a wire code. Codes outside the taxonomy return `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -32700 => Some(ErrorCode::ParseError),
            -32600 => Some(ErrorCode::InvalidRequest),
            -32601 => Some(ErrorCode::MethodNotFound),
            -32602 => Some(ErrorCode::InvalidParams),
            -32603 => Some(ErrorCode::InternalError),
            -32000 => Some(ErrorCode::ServerError),
            _ => None,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RpcError>;

/// Unified RPC error used by the codec, the dispatcher and method handlers.
#[derive(Debug, Clone, Error)]
pub enum RpcError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("method not found: {0}")]
    MethodNotFound(String),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("internal: {0}")]
    Internal(String),
    /// Plain handler failure; reported as a generic server error.
    #[error("{0}")]
    Server(String),
    /// Error that already carries its wire code (and optional data).
    #[error("{}", .0.message)]
    Object(ErrorObject),
}

impl RpcError {
    /// Build a structured error with an application-defined code.
    pub fn with_code(code: i64, message: impl Into<String>) -> Self {
        RpcError::Object(ErrorObject::new(code, message))
    }

    /// Wire code of this error.
    pub fn code(&self) -> i64 {
        match self {
            RpcError::Parse(_) => ErrorCode::ParseError.code(),
            RpcError::InvalidRequest(_) => ErrorCode::InvalidRequest.code(),
            RpcError::MethodNotFound(_) => ErrorCode::MethodNotFound.code(),
            RpcError::InvalidParams(_) => ErrorCode::InvalidParams.code(),
            RpcError::Internal(_) => ErrorCode::InternalError.code(),
            RpcError::Server(_) => ErrorCode::ServerError.code(),
            RpcError::Object(obj) => obj.code,
        }
    }

    /// Taxonomy kind, if the code belongs to it.
    pub fn kind(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.code())
    }

    /// Convert into the wire error object.
    pub fn into_error_object(self) -> ErrorObject {
        match self {
            RpcError::Object(obj) => obj,
            other => ErrorObject::new(other.code(), other.to_string()),
        }
    }
}

impl From<ErrorObject> for RpcError {
    fn from(obj: ErrorObject) -> Self {
        RpcError::Object(obj)
    }
}
