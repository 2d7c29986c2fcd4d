//! # bitrec
//!
//! A compiler for schemas describing densely bit-packed binary records, plus
//! zero-copy readers for the layouts it produces.
//!
//! Structs declare ordered fields of fixed-width integer or boolean types,
//! optionally narrowed to fewer bits; the layout engine assigns each field an
//! exact bit offset with no padding or alignment. Enums declare members with
//! decimal or hex literals (or none, auto-incrementing from 0), resolved and
//! range-checked against an underlying integer type. Bit numbering is
//! little-bit-endian (bit 0 of byte 0 is that byte's lowest-order bit) and
//! records are packed back-to-back, which together define the persisted
//! format.
//!
//! ## Example
//!
//! ```
//! use bitrec::layout::RecordLayout;
//! use bitrec::record::{RecordRef, Value};
//! use bitrec::schema::{FieldDecl, StructDecl};
//!
//! let decl = StructDecl {
//!     name: "Cell".to_string(),
//!     namespace: "grid".to_string(),
//!     fields: vec![
//!         FieldDecl::with_width("kind", "u8", 3),
//!         FieldDecl::new("elevation", "i16"),
//!         FieldDecl::new("blocked", "bool"),
//!     ],
//! };
//!
//! let layout = RecordLayout::compile(&decl).unwrap();
//! assert_eq!(layout.total_bits, 20);
//!
//! // kind = 5, elevation = -1, blocked = true, packed into 20 bits.
//! let data = [0b1111_1101, 0xFF, 0b0000_1111];
//! let record = RecordRef::new(&layout, &data, 0).unwrap();
//! assert_eq!(record.get("kind"), Some(Value::U64(5)));
//! assert_eq!(record.get("elevation"), Some(Value::I64(-1)));
//! assert_eq!(record.get("blocked"), Some(Value::Bool(true)));
//! ```

pub mod bits;
pub mod enums;
pub mod errors;
pub mod layout;
pub mod record;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serde;
pub mod types;
