use crate::model::EmployeeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Failed to load employee data: {0}")]
    Fetch(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    #[error("Invalid employee id: {0}")]
    InvalidId(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for DashError {
    fn from(err: reqwest::Error) -> Self {
        DashError::Fetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
