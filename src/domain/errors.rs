use std::fmt::{Display, Formatter, Result as FmtResult};

/// Domain layer specific errors
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidPair(String),
}

/// Infrastructure layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum InfrastructureError {
    Network(NetworkError),
    Decode(String),
    External(ExternalServiceError),
}

/// Network-related errors
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    HttpRequestFailed(String),
    HttpStatus { status: u16, text: String },
    Timeout { after_ms: u32 },
}

/// Failures reported by browser APIs (canvas, DOM)
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalServiceError {
    BrowserApiError(String),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    InvalidParameter(String),
    MalformedDocument(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidPair(msg) => write!(f, "Invalid pair: {}", msg),
        }
    }
}

impl Display for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Network(e) => write!(f, "Network: {}", e),
            InfrastructureError::Decode(msg) => write!(f, "Decode: {}", msg),
            InfrastructureError::External(e) => write!(f, "External: {}", e),
        }
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NetworkError::HttpRequestFailed(msg) => write!(f, "HTTP request failed: {}", msg),
            NetworkError::HttpStatus { status, text } => write!(f, "HTTP error: {} - {}", status, text),
            NetworkError::Timeout { after_ms } => write!(f, "request timed out after {} ms", after_ms),
        }
    }
}

impl Display for ExternalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ExternalServiceError::BrowserApiError(msg) => write!(f, "Browser API error: {}", msg),
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ConfigurationError::MalformedDocument(msg) => write!(f, "Malformed config: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
impl std::error::Error for InfrastructureError {}
impl std::error::Error for ConfigurationError {}

impl From<NetworkError> for InfrastructureError {
    fn from(error: NetworkError) -> Self {
        InfrastructureError::Network(error)
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(error: serde_json::Error) -> Self {
        InfrastructureError::Decode(error.to_string())
    }
}

pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
