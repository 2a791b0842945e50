//! Views binding a [Layout] to a concrete byte buffer.
//!
//! A [StructView] never copies the buffer: getters decode straight from it and setters
//! overwrite exactly the bytes of the target field. With `B = &mut [u8]` the caller keeps
//! ownership and sees every write once the view is dropped.

use tracing::trace;

use crate::{
    codec::FieldCodec,
    compiled::CompiledField,
    errors::{LookupError, WriteError},
    layout::Layout,
};

/// A buffer of exactly [`Layout::size`] bytes, read and written field by field.
///
/// Created with [`Layout::create`]. `B` is any byte container; writes need `B: AsMut<[u8]>`.
#[derive(Debug)]
pub struct StructView<'l, B> {
    layout: &'l Layout,
    bytes: B,
}

impl<'l, B: AsRef<[u8]>> StructView<'l, B> {
    /// Caller has checked `bytes.len() == layout.size()`.
    pub(crate) fn new(layout: &'l Layout, bytes: B) -> Self {
        Self { layout, bytes }
    }

    pub fn layout(&self) -> &'l Layout {
        self.layout
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// Releases the buffer.
    pub fn into_inner(self) -> B {
        self.bytes
    }

    /// Decodes the field called `name`.
    pub fn get(&self, name: &str) -> Result<u64, LookupError> {
        self.field(name).map(|field| field.get())
    }

    /// Read accessor for the field called `name`.
    pub fn field(&self, name: &str) -> Result<FieldRef<'_>, LookupError> {
        let field = self.layout.lookup(name)?;

        Ok(FieldRef {
            field,
            bytes: &self.bytes.as_ref()[field.range()],
        })
    }

    /// Every field's name and value, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.layout.fields().iter().map(move |field| {
            let bytes = &self.bytes.as_ref()[field.range()];
            (field.name.as_str(), field.codec.decode_exact(bytes))
        })
    }
}

impl<'l, B: AsRef<[u8]> + AsMut<[u8]>> StructView<'l, B> {
    /// Overwrites the field called `name` in place. Out-of-range values are truncated to the
    /// field's width; use [`set_checked`](StructView::set_checked) to reject them instead.
    pub fn set(&mut self, name: &str, value: u64) -> Result<(), LookupError> {
        self.field_mut(name)?.set(value);
        Ok(())
    }

    /// Like [`set`](StructView::set), but leaves the buffer untouched if `value` does not fit.
    pub fn set_checked(&mut self, name: &str, value: u64) -> Result<(), WriteError> {
        let mut field = self.field_mut(name)?;
        let value = field.codec().check(value)?;
        field.set(value);
        Ok(())
    }

    /// Read/write accessor for the field called `name`.
    pub fn field_mut(&mut self, name: &str) -> Result<FieldMut<'_>, LookupError> {
        let layout = self.layout;
        let field = layout.lookup(name)?;

        Ok(FieldMut {
            field,
            bytes: &mut self.bytes.as_mut()[field.range()],
        })
    }
}

/// Read accessor for one field of a [StructView].
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    field: &'a CompiledField,
    bytes: &'a [u8],
}

impl<'a> FieldRef<'a> {
    pub fn name(&self) -> &'a str {
        &self.field.name
    }

    pub fn offset(&self) -> usize {
        self.field.offset
    }

    pub fn codec(&self) -> FieldCodec {
        self.field.codec
    }

    /// Raw bytes of the field.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn get(&self) -> u64 {
        self.field.codec.decode_exact(self.bytes)
    }
}

/// Read/write accessor for one field of a [StructView].
#[derive(Debug)]
pub struct FieldMut<'a> {
    field: &'a CompiledField,
    bytes: &'a mut [u8],
}

impl<'a> FieldMut<'a> {
    pub fn name(&self) -> &'a str {
        &self.field.name
    }

    pub fn offset(&self) -> usize {
        self.field.offset
    }

    pub fn codec(&self) -> FieldCodec {
        self.field.codec
    }

    pub fn get(&self) -> u64 {
        self.field.codec.decode_exact(&*self.bytes)
    }

    /// Encodes `value`, truncated to the field width, over the field's bytes.
    pub fn set(&mut self, value: u64) {
        trace!(field = %self.field.name, offset = self.field.offset, value, "set field");
        self.field.codec.encode_exact(value, &mut *self.bytes);
    }
}
