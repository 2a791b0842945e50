//! Error types for layout compilation, lookup, binding, reading and writing.

use std::fmt;

/// Errors produced when compiling declared [crate::field::Field]s into a [crate::layout::Layout].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Field name is empty.
    InvalidFieldName,
    /// Two fields share the same name.
    DuplicateFieldName(String),
    /// Type tag is not one of `u8`, `u16`, `u32`.
    UnknownFieldType(String),
}

/// Errors produced when a field name is looked up in a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No field with this name is declared.
    FieldNotFound(String),
}

/// Errors produced when binding a buffer to a layout (see [crate::layout::Layout::create]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// Buffer length differs from the layout's total size.
    SizeMismatch { expected: usize, actual: usize },
}

/// Errors produced when decoding bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// Input does not have the exact number of bytes required.
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// Output slice does not have the exact number of bytes required.
    LengthMismatch { expected: usize, actual: usize },
    /// Value does not fit in the field's width.
    ValueOutOfRange { value: u64, max: u64 },
    MissingField(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidFieldName => write!(f, "field name must not be empty"),
            CompileError::DuplicateFieldName(name) => {
                write!(f, "field `{}` is declared more than once", name)
            }
            CompileError::UnknownFieldType(tag) => {
                write!(f, "unknown field type `{}` (expected u8, u16 or u32)", tag)
            }
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::FieldNotFound(name) => write!(f, "no field named `{}`", name),
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::SizeMismatch { expected, actual } => write!(
                f,
                "buffer has wrong size: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::LengthMismatch { expected, actual } => {
                write!(f, "expected {} bytes to decode, got {}", expected, actual)
            }
        }
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::LengthMismatch { expected, actual } => {
                write!(f, "expected {} bytes to encode into, got {}", expected, actual)
            }
            WriteError::ValueOutOfRange { value, max } => {
                write!(f, "value {} exceeds field maximum {}", value, max)
            }
            WriteError::MissingField(name) => write!(f, "missing field `{}`", name),
        }
    }
}

impl std::error::Error for CompileError {}
impl std::error::Error for LookupError {}
impl std::error::Error for BindError {}
impl std::error::Error for ReadError {}
impl std::error::Error for WriteError {}

impl From<LookupError> for WriteError {
    fn from(value: LookupError) -> Self {
        match value {
            LookupError::FieldNotFound(name) => WriteError::MissingField(name),
        }
    }
}
