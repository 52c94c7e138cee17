use crate::{Error, Value};
use thiserror::Error;

/// Failure kinds raised by the data types.
///
/// They travel inside [`crate::Error`], use `downcast_ref::<DataTypeError>()`
/// to tell them apart. Context attached on the way up does not hide the kind.
#[derive(Debug, Error)]
pub enum DataTypeError {
    /// The value does not belong to the domain of the type.
    #[error("{message}")]
    Validation { message: String, value: Value },
    /// Structurally invalid options or usage, detected at construction or attachment.
    #[error("{0}")]
    Configuration(String),
    /// The dialect does not support the type or one of its options.
    #[error("{dialect} does not support the {feature} data type")]
    Capability {
        dialect: &'static str,
        feature: String,
    },
    /// The value has a shape no sanitizer could ever normalize.
    #[error("{0}")]
    TypeMismatch(String),
}

impl DataTypeError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DataTypeError::Validation { .. })
    }
    pub fn is_configuration(&self) -> bool {
        matches!(self, DataTypeError::Configuration(..))
    }
    pub fn is_capability(&self) -> bool {
        matches!(self, DataTypeError::Capability { .. })
    }
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, DataTypeError::TypeMismatch(..))
    }
}

pub fn validation_error(message: impl Into<String>, value: &Value) -> Error {
    Error::new(DataTypeError::Validation {
        message: message.into(),
        value: value.clone(),
    })
}

pub fn configuration_error(message: impl Into<String>) -> Error {
    Error::new(DataTypeError::Configuration(message.into()))
}

pub fn capability_error(dialect: &'static str, feature: impl Into<String>) -> Error {
    Error::new(DataTypeError::Capability {
        dialect,
        feature: feature.into(),
    })
}

pub fn type_mismatch_error(message: impl Into<String>) -> Error {
    Error::new(DataTypeError::TypeMismatch(message.into()))
}

/// Kind of the error, if it was raised by a data type.
pub fn data_type_error(error: &Error) -> Option<&DataTypeError> {
    error.downcast_ref::<DataTypeError>()
}
