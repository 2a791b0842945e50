//! Declared fields used to build a [crate::layout::Layout].

use crate::codec::FieldCodec;

/// A single named, fixed-width field as declared by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Name used for offset lookups and view accessors.
    pub name: String,
    /// Primitive type, which fixes the field's width.
    pub codec: FieldCodec,
}

impl Field {
    pub fn new(name: impl Into<String>, codec: FieldCodec) -> Self {
        Field {
            name: name.into(),
            codec,
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            name: value.name,
            codec: value.codec,
        }
    }
}
