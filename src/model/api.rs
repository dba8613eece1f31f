use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthDto {
    pub status: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
}

/// Body returned once an application has been relayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubmittedDto {
    pub status: String,
}
