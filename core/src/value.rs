//! Property values.
//!
//! An absent property reads as [`Value::Null`], so `Null` doubles as the
//! "no such key" marker in every comparison.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// A property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Lists compare by equality only.
    List(Vec<Value>),
}

/// Property storage of a vertex or an edge.
pub type Properties = HashMap<String, Value>;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Lower-case name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Order two values for the ordered comparison operators.
    ///
    /// Numbers compare numerically and may mix `Int` and `Float`. Strings
    /// compare lexicographically, booleans with `false < true`. Any other
    /// pairing is incomparable, as is anything involving `Null`, a list
    /// or `NaN`.
    pub fn try_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ if self.is_numeric() && other.is_numeric() => {
                self.to_f64()?.partial_cmp(&other.to_f64()?)
            }
            _ => None,
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(i) => Some(i as f64),
            Value::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

macro_rules! value_from {
    ($($source:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    Value::$variant(v.into())
                }
            }
        )+
    };
}

value_from! {
    bool => Bool,
    i64 => Int,
    i32 => Int,
    u32 => Int,
    f64 => Float,
    f32 => Float,
    String => String,
    &str => String,
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Build a [`Properties`] map from `key => value` pairs.
#[macro_export]
macro_rules! props {
    () => {
        $crate::Properties::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut properties = $crate::Properties::new();
        $(
            properties.insert($key.to_string(), $crate::Value::from($value));
        )+
        properties
    }};
}
