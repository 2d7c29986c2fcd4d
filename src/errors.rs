//! Error types for schema compilation and bit-level reads and writes.

use thiserror::Error;

/// Errors produced while compiling struct and enum declarations. All carry
/// enough context to locate the offending schema element; the first failing
/// declaration aborts compilation with no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Type name is not one of the fixed built-ins.
    #[error("unknown type `{type_name}` in `{owner}`")]
    UnknownType { type_name: String, owner: String },

    /// Two fields in the same struct share a name.
    #[error("duplicate field `{field}` in struct `{record}`")]
    DuplicateFieldName { record: String, field: String },

    /// Explicit field width is zero or wider than the underlying type.
    #[error(
        "field `{field}` of struct `{record}` declares width {width}, \
         but its type supports 1..={type_bits}"
    )]
    FieldWidthExceedsType {
        record: String,
        field: String,
        width: usize,
        type_bits: usize,
    },

    /// Enum member literal is not a decimal or `0x` hexadecimal integer.
    #[error("member `{member}` of enum `{enum_name}` has malformed literal `{literal}`")]
    InvalidEnumLiteral {
        enum_name: String,
        member: String,
        literal: String,
    },

    /// Explicit or auto-incremented member value falls outside the
    /// underlying type's representable range.
    #[error(
        "member `{member}` of enum `{enum_name}` resolves to {value}, \
         outside its underlying type"
    )]
    EnumValueOutOfRange {
        enum_name: String,
        member: String,
        value: i128,
    },
}

/// Errors produced when reading bits from a byte slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// Requested bit range extends beyond the end of the data.
    #[error("bit range extends past the end of the buffer")]
    OutOfBounds,
    /// More than 64 bits were requested in a single read.
    #[error("more than 64 bits requested in a single read")]
    TooManyBitsRead,
}

/// Errors produced when writing bits into a byte slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// Target bit range extends beyond the end of the buffer.
    #[error("bit range extends past the end of the buffer")]
    OutOfBounds,
    /// More than 64 bits were supplied for a single write.
    #[error("more than 64 bits supplied in a single write")]
    TooManyBitsWritten,
}
