//! Zero-copy views over records stored back-to-back in a byte buffer.
//!
//! A [RecordRef] binds a compiled [RecordLayout] to a buffer and one record
//! position; [Records] is the whole-buffer view. Neither owns or copies the
//! buffer, and neither mutates it, so any number of views over the same bytes
//! may be used concurrently.

use std::fmt;

use crate::{errors::ReadError, layout::RecordLayout};

/// A decoded field value. Signed fields are sign-extended to `i64`, unsigned
/// fields zero-extended to `u64`, and 1-bit `bool` fields collapsed to a
/// boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    U64(u64),
    I64(i64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U64(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// One record bound to its position in a buffer.
///
/// Construction checks that the whole record lies within the buffer, so field
/// reads afterwards cannot go out of bounds.
#[derive(Clone, Copy)]
pub struct RecordRef<'a> {
    layout: &'a RecordLayout,
    data: &'a [u8],
    start_bit: usize,
}

impl<'a> RecordRef<'a> {
    /// Binds record number `index`. Records are packed back-to-back, so the
    /// record starts at `index * layout.total_bits`.
    pub fn new(layout: &'a RecordLayout, data: &'a [u8], index: usize) -> Result<Self, ReadError> {
        let start_bit = index
            .checked_mul(layout.total_bits)
            .ok_or(ReadError::OutOfBounds)?;

        let end = start_bit
            .checked_add(layout.total_bits)
            .ok_or(ReadError::OutOfBounds)?;
        if end > data.len() * 8 {
            return Err(ReadError::OutOfBounds);
        }

        Ok(RecordRef {
            layout,
            data,
            start_bit,
        })
    }

    pub fn layout(&self) -> &'a RecordLayout {
        self.layout
    }

    /// Decodes the named field. `None` if the layout has no such field.
    pub fn get(&self, field: &str) -> Option<Value> {
        let field = self.layout.field(field)?;
        // In-bounds since construction checked the full record.
        field.read_at(self.data, self.start_bit).ok()
    }

    /// Decoded values of every field, in declaration order.
    pub fn values(&self) -> Vec<(&'a str, Value)> {
        self.layout
            .fields
            .iter()
            .filter_map(|f| {
                f.read_at(self.data, self.start_bit)
                    .ok()
                    .map(|v| (f.name.as_str(), v))
            })
            .collect()
    }
}

impl fmt::Debug for RecordRef<'_> {
    /// JSON-like rendering of every field in declaration order, e.g.
    /// `{"x": 5, "flag": true}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.values().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\": {}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// View over a buffer holding consecutive records of one layout.
#[derive(Clone, Copy)]
pub struct Records<'a> {
    layout: &'a RecordLayout,
    data: &'a [u8],
}

impl<'a> Records<'a> {
    pub fn new(layout: &'a RecordLayout, data: &'a [u8]) -> Self {
        Records { layout, data }
    }

    /// Number of whole records the buffer holds. Trailing bits that do not
    /// make up a full record are ignored.
    pub fn len(&self) -> usize {
        if self.layout.total_bits == 0 {
            0
        } else {
            self.data.len() * 8 / self.layout.total_bits
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn at(&self, index: usize) -> Option<RecordRef<'a>> {
        RecordRef::new(self.layout, self.data, index).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordRef<'a>> + '_ {
        (0..self.len()).filter_map(|i| self.at(i))
    }
}
