//! Error taxonomy shared by the validation contract, registry, geometry,
//! widget factory and font configurator.
//!
//! Every failure is raised synchronously to the immediate caller and aborts
//! the operation before any state is touched.

/// Coarse classification of a [`FormError`].
///
/// `Type` covers values of the wrong kind; everything else is a `Value`
/// failure (right kind, unacceptable content).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Value,
    Type,
}

/// Errors raised by the form framework.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("'{0}' must not be None")]
    NullValue(String),
    #[error("'{0}' must not be an empty string")]
    EmptyString(String),
    #[error("'{0}' must not be empty")]
    EmptyCollection(String),
    #[error("'{property}' must be {expected}")]
    WrongType { property: String, expected: &'static str },
    #[error("'{property}' is out of range: {message}")]
    ValueOutOfRange { property: String, message: String },
    #[error("invalid '{property}' format: {message}")]
    InvalidFormat { property: String, message: String },
    #[error("'{property}' must have {expected} element(s), got {actual}")]
    InvalidLength {
        property: String,
        expected: &'static str,
        actual: usize,
    },
    #[error("invalid style at position {position}: '{value}' (expected one of {allowed:?})")]
    InvalidStyle {
        position: usize,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("unknown font family: '{0}'")]
    UnknownFontFamily(String),
    #[error("no component named '{0}'")]
    UnknownComponent(String),
    #[error("component '{name}' ({widget_type}) does not support {operation}")]
    UnsupportedWidgetType {
        name: String,
        widget_type: &'static str,
        operation: &'static str,
    },
}

impl FormError {
    /// Classify this error as a value or type failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormError::WrongType { .. } => ErrorKind::Type,
            _ => ErrorKind::Value,
        }
    }

    pub(crate) fn wrong_type(property: &str, expected: &'static str) -> Self {
        FormError::WrongType {
            property: property.to_owned(),
            expected,
        }
    }

    pub(crate) fn out_of_range(property: &str, message: impl Into<String>) -> Self {
        FormError::ValueOutOfRange {
            property: property.to_owned(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_format(property: &str, message: impl Into<String>) -> Self {
        FormError::InvalidFormat {
            property: property.to_owned(),
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FormError>;
