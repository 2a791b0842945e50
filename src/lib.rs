//! # binstruct
//!
//! Fixed binary record layouts: declare an ordered list of named `u8`/`u16`/`u32` fields,
//! then read and write them in place on byte buffers.
//!
//! Fields are packed with no padding, in declaration order. Multi-byte fields are
//! little-endian. A [Layout] is immutable once built and can be bound to any number of
//! buffers; each binding checks the buffer length once.
//!
//! ## Example
//!
//! ```
//! use binstruct::Layout;
//!
//! let layout = Layout::builder()
//!     .u16("foo")
//!     .u8("bar")
//!     .finalize()
//!     .unwrap();
//! assert_eq!(layout.size(), 3);
//! assert_eq!(layout.offset("bar"), Ok(2));
//!
//! let mut bytes = [1, 2, 3];
//! let mut view = layout.create(&mut bytes[..]).unwrap();
//! assert_eq!(view.get("foo"), Ok(513));
//! view.set("bar", 4).unwrap();
//! assert_eq!(bytes, [1, 2, 4]);
//! ```

pub mod codec;
pub mod compiled;
pub mod errors;
pub mod field;
pub mod layout;
#[cfg(feature = "serde")]
pub mod serde;
pub mod view;

pub use codec::FieldCodec;
pub use errors::{BindError, CompileError, LookupError, ReadError, WriteError};
pub use field::Field;
pub use layout::{Layout, LayoutBuilder};
pub use view::{FieldMut, FieldRef, StructView};
