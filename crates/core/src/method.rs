use std::fmt;

use crate::error::CoreError;

/// The two write operations a batch can perform, selected by HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    /// `POST`: insert new variations.
    Create,
    /// `PATCH`: update existing variations matched on `(id, sku)`.
    Update,
}

impl WriteMethod {
    pub fn from_http(method: &str) -> Result<Self, CoreError> {
        match method {
            "POST" => Ok(WriteMethod::Create),
            "PATCH" => Ok(WriteMethod::Update),
            other => Err(CoreError::UnsupportedMethod(other.to_string())),
        }
    }

    pub fn as_http(&self) -> &'static str {
        match self {
            WriteMethod::Create => "POST",
            WriteMethod::Update => "PATCH",
        }
    }
}

impl fmt::Display for WriteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_http())
    }
}
