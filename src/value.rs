use std::convert::TryFrom;
use std::fmt;

use crate::error::SymbolError;

//////////////////////////////////////////////////////////////////////////////

/// A value captured alongside a symbol name.
///
/// The set of variants is closed: every value a table can hold is promoted into one of these
/// kinds when it is captured, so two integers of different widths share the `Int` tag while
/// still being stored as separate instances.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    // bool - Boolean values
    Bool(bool),
    // int - Signed integers up to 64 bits
    Int(i64),
    // uint - Unsigned integers up to 64 bits
    UInt(u64),
    // float - IEEE 64-bit floating point numbers
    Float(f64),
    // char - A single Unicode scalar value
    Char(char),
    // str - Unicode text
    Str(String),
}

/// The tag of a [`Value`], without its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    UInt,
    Float,
    Char,
    Str,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Char(_) => ValueKind::Char,
            Value::Str(_) => ValueKind::Str,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> SymbolError {
        SymbolError::KindMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::UInt(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Char(value) => write!(f, "{}", value),
            Value::Str(value) => f.write_str(value),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Char => "char",
            ValueKind::Str => "str",
        };
        f.write_str(name)
    }
}

macro_rules! value_promotions {
    ($variant:path, $target:ty; $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    $variant(value as $target)
                }
            }
        )+
    };
}

value_promotions!(Value::Int, i64; i8, i16, i32, i64, isize);
value_promotions!(Value::UInt, u64; u8, u16, u32, u64, usize);
value_promotions!(Value::Float, f64; f32, f64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

macro_rules! value_extractions {
    ($target:ty, $variant:path, $kind:expr) => {
        impl TryFrom<&Value> for $target {
            type Error = SymbolError;

            fn try_from(value: &Value) -> Result<Self, Self::Error> {
                match value {
                    $variant(inner) => Ok(*inner),
                    other => Err(other.mismatch($kind)),
                }
            }
        }
    };
}

value_extractions!(bool, Value::Bool, ValueKind::Bool);
value_extractions!(i64, Value::Int, ValueKind::Int);
value_extractions!(u64, Value::UInt, ValueKind::UInt);
value_extractions!(f64, Value::Float, ValueKind::Float);
value_extractions!(char, Value::Char, ValueKind::Char);

impl<'v> TryFrom<&'v Value> for &'v str {
    type Error = SymbolError;

    fn try_from(value: &'v Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(inner) => Ok(inner.as_str()),
            other => Err(other.mismatch(ValueKind::Str)),
        }
    }
}
