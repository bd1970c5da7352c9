use std::fmt::Formatter;


/// Failures surfaced by the request path.
///
/// Only `InvalidEndpoint` and `InvalidResponse` are produced by
/// [`ReqwestApiClient`](crate::api_client::reqwest::ReqwestApiClient); the
/// remaining kinds are part of the public vocabulary for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorResponse {
    ApiError,
    InvalidEndpoint,
    InvalidResponse,
    NoData,
    SerializationError,
}

impl ErrorResponse {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorResponse::ApiError => "Ooops, there is something problem with the api",
            ErrorResponse::InvalidEndpoint => "Ooops, there is something problem with the endpoint",
            ErrorResponse::InvalidResponse => "Ooops, there is something problem with the response",
            ErrorResponse::NoData => "Ooops, there is something problem with the data",
            ErrorResponse::SerializationError => {
                "Ooops, there is something problem with the serialization process"
            }
        }
    }

    /// Stable identifier of the kind, suitable for logs and matching.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorResponse::ApiError => "apiError",
            ErrorResponse::InvalidEndpoint => "invalidEndpoint",
            ErrorResponse::InvalidResponse => "invalidResponse",
            ErrorResponse::NoData => "noData",
            ErrorResponse::SerializationError => "serializationError",
        }
    }
}

impl std::error::Error for ErrorResponse {}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(self.message())
    }
}

/// Failures of a storage instance. Kept apart from [`ErrorResponse`]; the
/// HTTP path never produces these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseError {
    InvalidInstance,
    RequestFailed,
}

impl DatabaseError {
    pub fn message(&self) -> &'static str {
        match self {
            DatabaseError::InvalidInstance => "Database can't instance.",
            DatabaseError::RequestFailed => "Your request failed.",
        }
    }
}

impl std::error::Error for DatabaseError {}

impl std::fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(self.message())
    }
}
