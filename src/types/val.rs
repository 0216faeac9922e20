//! The generic contract value model.
//!
//! Arguments and return values cross the invocation pipeline as [`Val`],
//! a small self-describing variant type with a canonical Borsh encoding.
//! On the wire a value travels as base64 of that encoding. Typed decoding
//! is caller-supplied through [`FromVal`]; contract-specific schemas are
//! out of scope here.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::error::ValError;

use super::Address;

/// A contract value.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Val {
    /// The unit value, returned by methods with no result.
    Void,
    /// A boolean.
    Bool(bool),
    /// An unsigned 32-bit integer.
    U32(u32),
    /// A signed 64-bit integer.
    I64(i64),
    /// An unsigned 64-bit integer.
    U64(u64),
    /// A signed 128-bit integer (token amounts).
    I128(i128),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// A short method/enum identifier.
    Symbol(String),
    /// A UTF-8 string.
    Str(String),
    /// An address (account or contract).
    Address(Address),
    /// An ordered list of values.
    Vec(Vec<Val>),
    /// An ordered map of values.
    Map(BTreeMap<String, Val>),
}

impl Val {
    /// Canonical encoding of this value.
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("value serialization should never fail")
    }

    /// Base64 of the canonical encoding, as carried in RPC responses.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decode a value from its base64 wire form.
    pub fn from_base64(s: &str) -> Result<Self, ValError> {
        let bytes = STANDARD
            .decode(s)
            .map_err(|e| ValError::Decode(e.to_string()))?;
        borsh::from_slice(&bytes).map_err(|e| ValError::Decode(e.to_string()))
    }

    fn type_name(&self) -> &'static str {
        match self {
            Val::Void => "void",
            Val::Bool(_) => "bool",
            Val::U32(_) => "u32",
            Val::I64(_) => "i64",
            Val::U64(_) => "u64",
            Val::I128(_) => "i128",
            Val::Bytes(_) => "bytes",
            Val::Symbol(_) => "symbol",
            Val::Str(_) => "string",
            Val::Address(_) => "address",
            Val::Vec(_) => "vec",
            Val::Map(_) => "map",
        }
    }
}

impl Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::Void => write!(f, "void"),
            Val::Bool(v) => write!(f, "{v}"),
            Val::U32(v) => write!(f, "{v}"),
            Val::I64(v) => write!(f, "{v}"),
            Val::U64(v) => write!(f, "{v}"),
            Val::I128(v) => write!(f, "{v}"),
            Val::Bytes(v) => write!(f, "{}", hex::encode(v)),
            Val::Symbol(v) | Val::Str(v) => write!(f, "{v}"),
            Val::Address(v) => write!(f, "{v}"),
            Val::Vec(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Val::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

macro_rules! impl_from_for_val {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Val {
                fn from(v: $ty) -> Self {
                    Val::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_val! {
    bool => Bool,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    i128 => I128,
    Vec<u8> => Bytes,
    String => Str,
    Address => Address,
}

impl From<&str> for Val {
    fn from(v: &str) -> Self {
        Val::Str(v.to_string())
    }
}

impl From<()> for Val {
    fn from(_: ()) -> Self {
        Val::Void
    }
}

/// Caller-supplied decoding of a [`Val`] into a concrete type.
///
/// This is the seam the invocation pipeline uses to turn tentative and
/// confirmed return values into application types.
pub trait FromVal: Sized {
    /// Convert from a value, failing on a type mismatch.
    fn from_val(val: &Val) -> Result<Self, ValError>;
}

impl FromVal for Val {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        Ok(val.clone())
    }
}

impl FromVal for () {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::Void => Ok(()),
            other => Err(ValError::type_mismatch("void", other.type_name())),
        }
    }
}

impl FromVal for bool {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::Bool(v) => Ok(*v),
            other => Err(ValError::type_mismatch("bool", other.type_name())),
        }
    }
}

impl FromVal for u32 {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::U32(v) => Ok(*v),
            other => Err(ValError::type_mismatch("u32", other.type_name())),
        }
    }
}

impl FromVal for i64 {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::I64(v) => Ok(*v),
            Val::U32(v) => Ok(i64::from(*v)),
            other => Err(ValError::type_mismatch("i64", other.type_name())),
        }
    }
}

impl FromVal for u64 {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::U64(v) => Ok(*v),
            Val::U32(v) => Ok(u64::from(*v)),
            other => Err(ValError::type_mismatch("u64", other.type_name())),
        }
    }
}

impl FromVal for i128 {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::I128(v) => Ok(*v),
            Val::I64(v) => Ok(i128::from(*v)),
            Val::U64(v) => Ok(i128::from(*v)),
            Val::U32(v) => Ok(i128::from(*v)),
            other => Err(ValError::type_mismatch("i128", other.type_name())),
        }
    }
}

impl FromVal for String {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::Str(v) | Val::Symbol(v) => Ok(v.clone()),
            other => Err(ValError::type_mismatch("string", other.type_name())),
        }
    }
}

impl FromVal for Vec<u8> {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::Bytes(v) => Ok(v.clone()),
            other => Err(ValError::type_mismatch("bytes", other.type_name())),
        }
    }
}

impl<T: FromVal> FromVal for Vec<T> {
    fn from_val(val: &Val) -> Result<Self, ValError> {
        match val {
            Val::Vec(items) => items.iter().map(T::from_val).collect(),
            other => Err(ValError::type_mismatch("vec", other.type_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountId;

    #[test]
    fn test_base64_roundtrip() {
        let val = Val::Vec(vec![Val::Symbol("Hello".into()), Val::Str("world".into())]);
        let decoded = Val::from_base64(&val.to_base64()).unwrap();
        assert_eq!(decoded, val);
    }

    #[test]
    fn test_from_val_integers() {
        assert_eq!(i128::from_val(&Val::I128(10)).unwrap(), 10);
        assert_eq!(i128::from_val(&Val::I64(-3)).unwrap(), -3);
        assert_eq!(i64::from_val(&Val::U32(7)).unwrap(), 7);
        assert!(u64::from_val(&Val::I64(1)).is_err());
    }

    #[test]
    fn test_from_val_type_mismatch_message() {
        let err = bool::from_val(&Val::Str("yes".into())).unwrap_err();
        assert!(err.to_string().contains("expected bool"));
    }

    #[test]
    fn test_vec_conversion() {
        let val = Val::Vec(vec![Val::U64(1), Val::U64(2)]);
        let nums: Vec<u64> = Vec::from_val(&val).unwrap();
        assert_eq!(nums, vec![1, 2]);
    }

    #[test]
    fn test_display() {
        let val = Val::Vec(vec![
            Val::I128(1000),
            Val::Address(Address::Account(AccountId::from_bytes([1u8; 32]))),
        ]);
        let s = val.to_string();
        assert!(s.starts_with("[1000,G"));
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Val::from(true), Val::Bool(true));
        assert_eq!(Val::from("hi"), Val::Str("hi".into()));
        assert_eq!(Val::from(42i128), Val::I128(42));
        assert_eq!(Val::from(()), Val::Void);
    }
}
