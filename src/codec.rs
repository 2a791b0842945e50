//! Field type codecs: byte width and little-endian encode/decode per primitive type.

use std::{fmt, str::FromStr};

use crate::errors::{CompileError, ReadError, WriteError};

/// Primitive field type. All multi-byte types are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FieldCodec {
    U8,
    U16,
    U32,
}

impl FieldCodec {
    /// Number of bytes a field of this type occupies.
    pub const fn width(self) -> usize {
        match self {
            FieldCodec::U8 => 1,
            FieldCodec::U16 => 2,
            FieldCodec::U32 => 4,
        }
    }

    /// Largest value representable in [`width`](FieldCodec::width) bytes.
    pub const fn max_value(self) -> u64 {
        match self {
            FieldCodec::U8 => u8::MAX as u64,
            FieldCodec::U16 => u16::MAX as u64,
            FieldCodec::U32 => u32::MAX as u64,
        }
    }

    /// Decodes exactly `width()` bytes as a little-endian unsigned integer.
    ///
    /// Any other slice length is rejected with [`ReadError::LengthMismatch`].
    pub fn decode(self, bytes: &[u8]) -> Result<u64, ReadError> {
        if bytes.len() != self.width() {
            return Err(ReadError::LengthMismatch {
                expected: self.width(),
                actual: bytes.len(),
            });
        }

        Ok(self.decode_exact(bytes))
    }

    /// Decodes without checking the length; `bytes` must hold at least `width()` bytes.
    pub(crate) fn decode_exact(self, bytes: &[u8]) -> u64 {
        match self {
            FieldCodec::U8 => u64::from(bytes[0]),
            FieldCodec::U16 => u64::from(u16::from_le_bytes([bytes[0], bytes[1]])),
            FieldCodec::U32 => {
                u64::from(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            }
        }
    }

    /// Encodes `value` into exactly `width()` little-endian bytes.
    ///
    /// Bits above `width() * 8` are dropped: `U16.encode(0x1_0005)` is `[5, 0]`.
    pub fn encode(self, value: u64) -> Vec<u8> {
        value.to_le_bytes()[..self.width()].to_vec()
    }

    /// Like [`encode`](FieldCodec::encode) but writes into `out`, which must be exactly `width()` bytes.
    pub fn encode_into(self, value: u64, out: &mut [u8]) -> Result<(), WriteError> {
        if out.len() != self.width() {
            return Err(WriteError::LengthMismatch {
                expected: self.width(),
                actual: out.len(),
            });
        }

        self.encode_exact(value, out);
        Ok(())
    }

    /// Encodes without checking the length; `out` must be exactly `width()` bytes.
    pub(crate) fn encode_exact(self, value: u64, out: &mut [u8]) {
        out.copy_from_slice(&value.to_le_bytes()[..self.width()]);
    }

    /// Returns `value` unchanged if it fits, otherwise [`WriteError::ValueOutOfRange`].
    pub fn check(self, value: u64) -> Result<u64, WriteError> {
        if value > self.max_value() {
            return Err(WriteError::ValueOutOfRange {
                value,
                max: self.max_value(),
            });
        }

        Ok(value)
    }

    /// Type tag used in declarations.
    pub const fn tag(self) -> &'static str {
        match self {
            FieldCodec::U8 => "u8",
            FieldCodec::U16 => "u16",
            FieldCodec::U32 => "u32",
        }
    }
}

impl fmt::Display for FieldCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldCodec {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u8" => Ok(FieldCodec::U8),
            "u16" => Ok(FieldCodec::U16),
            "u32" => Ok(FieldCodec::U32),
            other => Err(CompileError::UnknownFieldType(other.to_string())),
        }
    }
}
