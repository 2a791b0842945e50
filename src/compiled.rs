use std::ops::Range;

use crate::{
    codec::FieldCodec,
    errors::{CompileError, ReadError, WriteError},
    field::Field,
};

/// A declared field with its byte offset resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledField {
    pub name: String,
    pub codec: FieldCodec,
    pub offset: usize,
}

impl CompiledField {
    /// Places `field` at `offset`. Fails if the field has no name.
    pub fn compile(field: &Field, offset: usize) -> Result<Self, CompileError> {
        if field.name.is_empty() {
            return Err(CompileError::InvalidFieldName);
        }

        Ok(CompiledField {
            name: field.name.clone(),
            codec: field.codec,
            offset,
        })
    }

    pub fn width(&self) -> usize {
        self.codec.width()
    }

    /// Byte range the field occupies within a record.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width()
    }

    /// Decodes this field from a whole record.
    pub fn read(&self, record: &[u8]) -> Result<u64, ReadError> {
        let bytes = record
            .get(self.range())
            .ok_or(ReadError::LengthMismatch {
                expected: self.range().end,
                actual: record.len(),
            })?;

        self.codec.decode(bytes)
    }

    /// Encodes `value` over this field's bytes within a whole record, truncating to the field width.
    pub fn write(&self, record: &mut [u8], value: u64) -> Result<(), WriteError> {
        let actual = record.len();
        let bytes = record
            .get_mut(self.range())
            .ok_or(WriteError::LengthMismatch {
                expected: self.range().end,
                actual,
            })?;

        self.codec.encode_into(value, bytes)
    }
}
