//! Layout: frozen, ordered set of fields with resolved offsets.
//!
//! Fields are packed contiguously in declaration order, with no padding. A field's offset
//! is the sum of the widths of every field declared before it.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::{
    codec::FieldCodec,
    compiled::CompiledField,
    errors::{BindError, CompileError, LookupError, ReadError, WriteError},
    field::Field,
    view::StructView,
};

/// Accumulates field declarations until [`finalize`](LayoutBuilder::finalize) freezes them into a [Layout].
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    fields: Vec<Field>,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field after every field declared so far.
    pub fn field(&mut self, name: impl Into<String>, codec: FieldCodec) -> &mut Self {
        self.fields.push(Field::new(name, codec));
        self
    }

    pub fn u8(&mut self, name: impl Into<String>) -> &mut Self {
        self.field(name, FieldCodec::U8)
    }

    pub fn u16(&mut self, name: impl Into<String>) -> &mut Self {
        self.field(name, FieldCodec::U16)
    }

    pub fn u32(&mut self, name: impl Into<String>) -> &mut Self {
        self.field(name, FieldCodec::U32)
    }

    /// Freezes the declared fields. See [Layout::compile].
    pub fn finalize(&self) -> Result<Layout, CompileError> {
        Layout::compile(&self.fields)
    }
}

/// A compiled record layout. Use [Layout::builder] or [Layout::compile] to build one, then
/// [Layout::create] to bind it to buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    size: usize,
    fields: Vec<CompiledField>,
}

impl Layout {
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder::new()
    }

    /// Compiles an ordered slice of [Field]s. Fails on an empty or repeated field name.
    pub fn compile(fields: &[Field]) -> Result<Self, CompileError> {
        let mut compiled_fields: Vec<CompiledField> = Vec::with_capacity(fields.len());
        let mut seen: HashSet<&str> = HashSet::with_capacity(fields.len());
        let mut offset = 0;

        for field in fields {
            if !seen.insert(field.name.as_str()) {
                return Err(CompileError::DuplicateFieldName(field.name.clone()));
            }

            let compiled_field = CompiledField::compile(field, offset)?;
            offset += compiled_field.width();

            compiled_fields.push(compiled_field);
        }

        debug!(fields = compiled_fields.len(), size = offset, "compiled layout");

        Ok(Self {
            size: offset,
            fields: compiled_fields,
        })
    }

    /// Compiles `(name, type tag)` pairs, where the tag is one of `u8`, `u16`, `u32`.
    pub fn from_tags<N, T>(declarations: &[(N, T)]) -> Result<Self, CompileError>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        let fields = declarations
            .iter()
            .map(|(name, tag)| -> Result<Field, CompileError> {
                Ok(Field::new(name.as_ref(), tag.as_ref().parse()?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::compile(&fields)
    }

    /// Total record size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Byte offset of the field called `name`.
    pub fn offset(&self, name: &str) -> Result<usize, LookupError> {
        self.lookup(name).map(|field| field.offset)
    }

    pub fn field(&self, name: &str) -> Option<&CompiledField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Compiled fields in declaration order.
    pub fn fields(&self) -> &[CompiledField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<&CompiledField, LookupError> {
        self.field(name)
            .ok_or_else(|| LookupError::FieldNotFound(name.to_string()))
    }

    /// Binds `bytes` to this layout. The buffer must be exactly [`size`](Layout::size) bytes long.
    ///
    /// The view borrows or wraps the buffer; writes through the view land in it directly.
    pub fn create<B: AsRef<[u8]>>(&self, bytes: B) -> Result<StructView<'_, B>, BindError> {
        let actual = bytes.as_ref().len();
        if actual != self.size {
            debug!(expected = self.size, actual, "rejected buffer binding");
            return Err(BindError::SizeMismatch {
                expected: self.size,
                actual,
            });
        }

        Ok(StructView::new(self, bytes))
    }

    /// Decodes every field of `data`, which must be exactly one record long.
    pub fn parse(&self, data: &[u8]) -> Result<BTreeMap<String, u64>, ReadError> {
        if data.len() != self.size {
            return Err(ReadError::LengthMismatch {
                expected: self.size,
                actual: data.len(),
            });
        }

        let mut map: BTreeMap<String, u64> = BTreeMap::new();

        for field in &self.fields {
            map.insert(field.name.clone(), field.read(data)?);
        }

        Ok(map)
    }

    /// Encodes a full record. Every field must have a value that fits its width.
    pub fn serialize(&self, values: &HashMap<String, u64>) -> Result<Vec<u8>, WriteError> {
        let mut out = vec![0u8; self.size];

        for field in &self.fields {
            let value = values
                .get(&field.name)
                .copied()
                .ok_or_else(|| WriteError::MissingField(field.name.clone()))?;

            field.write(&mut out, field.codec.check(value)?)?;
        }

        Ok(out)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::LayoutDef> for Layout {
    type Error = CompileError;

    fn try_from(value: crate::serde::LayoutDef) -> Result<Self, Self::Error> {
        let fields: Vec<Field> = value.fields.into_iter().map(Into::into).collect();
        Layout::compile(&fields)
    }
}
