//! Serde-deserializable layout description.
//!
//! Describes a record as an ordered list of named fields, for example from a JSON file:
//!
//! ```json
//! { "fields": [ { "name": "id", "type": "u16" }, { "name": "flags", "type": "u8" } ] }
//! ```
//!
//! Convert with `Layout::try_from(def)`.

use serde::{Deserialize, Serialize};

use crate::codec::FieldCodec;

/// Top-level layout definition: fields in record order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LayoutDef {
    pub fields: Vec<FieldDef>,
}

/// Description of a single field.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name; must be unique within the layout.
    pub name: String,
    /// One of `u8`, `u16`, `u32`.
    #[serde(rename = "type")]
    pub codec: FieldCodec,
}
