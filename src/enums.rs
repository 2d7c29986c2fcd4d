//! Enum value resolution: literal parsing, range validation, auto-increment.

use crate::{
    errors::SchemaError,
    schema::{EnumDecl, qualify},
    types::Primitive,
};

/// A member with its concrete value resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    pub name: String,
    pub value: i64,
}

/// An enum with every member value resolved and range-checked against the
/// underlying type. Members stay in declaration order.
///
/// Resolved values need not be unique or contiguous: aliases are allowed, and
/// values claimed by no member remain decodable (callers decide how to surface
/// an unnamed value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnum {
    pub name: String,
    pub namespace: String,
    pub underlying: Primitive,
    pub members: Vec<ResolvedMember>,
}

impl ResolvedEnum {
    /// Resolves an enum declaration. Explicit literals are parsed as decimal
    /// or `0x` hexadecimal, optionally negated; members without a literal get
    /// the previous value plus one, starting at 0. Every value must lie
    /// within the underlying type's range, `MIN` and `MAX` included. Fails on
    /// the first invalid member; no partial enum is returned.
    pub fn resolve(decl: &EnumDecl) -> Result<Self, SchemaError> {
        let enum_name = decl.qualified_name();

        let underlying = Primitive::from_name(&decl.underlying_type).ok_or_else(|| {
            SchemaError::UnknownType {
                type_name: decl.underlying_type.clone(),
                owner: enum_name.clone(),
            }
        })?;

        let mut members = Vec::with_capacity(decl.members.len());
        let mut previous: i64 = -1;

        for member in &decl.members {
            let value = match &member.literal {
                Some(literal) => {
                    parse_literal(literal).ok_or_else(|| SchemaError::InvalidEnumLiteral {
                        enum_name: enum_name.clone(),
                        member: member.name.clone(),
                        literal: literal.clone(),
                    })?
                }
                None => previous.checked_add(1).ok_or_else(|| {
                    SchemaError::EnumValueOutOfRange {
                        enum_name: enum_name.clone(),
                        member: member.name.clone(),
                        value: previous as i128 + 1,
                    }
                })?,
            };

            if !underlying.contains(value) {
                return Err(SchemaError::EnumValueOutOfRange {
                    enum_name,
                    member: member.name.clone(),
                    value: value as i128,
                });
            }

            members.push(ResolvedMember {
                name: member.name.clone(),
                value,
            });
            previous = value;
        }

        Ok(ResolvedEnum {
            name: decl.name.clone(),
            namespace: decl.namespace.clone(),
            underlying,
            members,
        })
    }

    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    pub fn value_of(&self, member: &str) -> Option<i64> {
        self.members.iter().find(|m| m.name == member).map(|m| m.value)
    }

    /// Name of the first declared member carrying `value`, if any. With
    /// aliases the earliest declaration wins; a decoded value no member
    /// claims yields `None`.
    pub fn member_for(&self, value: i64) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.value == value)
            .map(|m| m.name.as_str())
    }
}

/// Parses an enum member literal: optional leading `-`, then decimal digits or
/// `0x`/`0X` hex digits, to a signed 64-bit value. The magnitude is read as
/// unsigned first, so `-0x7f` is -127 and `-9223372036854775808` round-trips.
fn parse_literal(text: &str) -> Option<i64> {
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let parsed = if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16).ok()?
    } else {
        magnitude.parse::<u64>().ok()?
    };

    if negative {
        if parsed > (i64::MAX as u64) + 1 {
            return None;
        }
        Some((parsed as i64).wrapping_neg())
    } else {
        if parsed > i64::MAX as u64 {
            return None;
        }
        Some(parsed as i64)
    }
}
