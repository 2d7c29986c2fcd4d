//! Catalog of the built-in underlying types fields and enums can use.

/// One of the nine built-in underlying types: `bool`, `i8`..`i64`, `u8`..`u64`.
///
/// `bool` is a 1-bit unsigned integer at this level; readers surface it as a
/// distinct boolean value (see [crate::record::Value]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl Primitive {
    /// Looks up a primitive by its schema-level name. Returns `None` for
    /// anything outside the fixed built-in set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(Primitive::Bool),
            "i8" => Some(Primitive::I8),
            "u8" => Some(Primitive::U8),
            "i16" => Some(Primitive::I16),
            "u16" => Some(Primitive::U16),
            "i32" => Some(Primitive::I32),
            "u32" => Some(Primitive::U32),
            "i64" => Some(Primitive::I64),
            "u64" => Some(Primitive::U64),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::I8 => "i8",
            Primitive::U8 => "u8",
            Primitive::I16 => "i16",
            Primitive::U16 => "u16",
            Primitive::I32 => "i32",
            Primitive::U32 => "u32",
            Primitive::I64 => "i64",
            Primitive::U64 => "u64",
        }
    }

    /// Storage width in bits. `bool` occupies a single bit.
    pub fn bit_width(&self) -> usize {
        match self {
            Primitive::Bool => 1,
            Primitive::I8 | Primitive::U8 => 8,
            Primitive::I16 | Primitive::U16 => 16,
            Primitive::I32 | Primitive::U32 => 32,
            Primitive::I64 | Primitive::U64 => 64,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Primitive::I8 | Primitive::I16 | Primitive::I32 | Primitive::I64
        )
    }

    /// Whether `value` lies within this type's representable range, boundaries
    /// included. Used by the enum resolver; values are carried as `i64`, so
    /// for `u64` every non-negative `i64` is accepted.
    pub fn contains(&self, value: i64) -> bool {
        let width = self.bit_width();
        if self.is_signed() {
            if width == 64 {
                return true;
            }
            let min = -(1i64 << (width - 1));
            let max = (1i64 << (width - 1)) - 1;
            min <= value && value <= max
        } else {
            if value < 0 {
                return false;
            }
            if width >= 63 {
                return true;
            }
            value < (1i64 << width)
        }
    }
}
