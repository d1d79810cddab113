//! Property conditions.
//!
//! A condition constrains one property key with a comparison operator and
//! one or more operands. An absent property reads as `Null`.

use sift_core::{Element, Value};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::{QueryError, QueryResult};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compare {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
}

impl Compare {
    /// Returns true for the operators that need a total order.
    pub fn is_ordered(self) -> bool {
        !matches!(self, Compare::Equal | Compare::NotEqual)
    }

    /// The operator whose result is the negation of this one.
    pub fn opposite(self) -> Self {
        match self {
            Compare::Equal => Compare::NotEqual,
            Compare::NotEqual => Compare::Equal,
            Compare::GreaterThan => Compare::LessThanEqual,
            Compare::GreaterThanEqual => Compare::LessThan,
            Compare::LessThan => Compare::GreaterThanEqual,
            Compare::LessThanEqual => Compare::GreaterThan,
        }
    }

    /// Whether `actual <op> operand` holds, given how `actual` orders against `operand`.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Compare::Equal => ordering == Ordering::Equal,
            Compare::NotEqual => ordering != Ordering::Equal,
            Compare::GreaterThan => ordering == Ordering::Greater,
            Compare::GreaterThanEqual => ordering != Ordering::Less,
            Compare::LessThan => ordering == Ordering::Less,
            Compare::LessThanEqual => ordering != Ordering::Greater,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Compare::Equal => "=",
            Compare::NotEqual => "<>",
            Compare::GreaterThan => ">",
            Compare::GreaterThanEqual => ">=",
            Compare::LessThan => "<",
            Compare::LessThanEqual => "<=",
        }
    }
}

impl fmt::Display for Compare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown operator symbol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown comparison operator: {0}")]
pub struct ParseCompareError(pub String);

impl FromStr for Compare {
    type Err = ParseCompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" | "==" => Ok(Compare::Equal),
            "<>" | "!=" => Ok(Compare::NotEqual),
            ">" => Ok(Compare::GreaterThan),
            ">=" => Ok(Compare::GreaterThanEqual),
            "<" => Ok(Compare::LessThan),
            "<=" => Ok(Compare::LessThanEqual),
            other => Err(ParseCompareError(other.to_string())),
        }
    }
}

/// A single constraint on one property key.
///
/// `Equal` with several operands matches any of them; `NotEqual` with
/// several operands matches none of them. Ordered operators take exactly
/// one operand. Malformed conditions are reported when evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    key: String,
    compare: Compare,
    values: Vec<Value>,
}

impl Condition {
    /// Create a condition.
    pub fn new<V: Into<Value>>(
        key: impl Into<String>,
        compare: Compare,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            key: key.into(),
            compare,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `key = value`.
    pub fn equal(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(key, Compare::Equal, [value.into()])
    }

    /// `key <> value`.
    pub fn not_equal(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(key, Compare::NotEqual, [value.into()])
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn compare(&self) -> Compare {
        self.compare
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns true if any operand is `Null`.
    pub fn has_null_operand(&self) -> bool {
        self.values.iter().any(Value::is_null)
    }

    /// Evaluate this condition against an element.
    pub fn evaluate<E: Element + ?Sized>(&self, element: &E) -> QueryResult<bool> {
        let actual = element.property(&self.key).unwrap_or(&Value::Null);

        match self.compare {
            Compare::Equal | Compare::NotEqual if self.values.is_empty() => Err(
                QueryError::invalid_operand_count(&self.key, self.compare, 0),
            ),
            Compare::Equal => Ok(self.values.iter().any(|value| value == actual)),
            Compare::NotEqual => Ok(self.values.iter().all(|value| value != actual)),
            ordered => {
                let [operand] = self.values.as_slice() else {
                    return Err(QueryError::invalid_operand_count(
                        &self.key,
                        ordered,
                        self.values.len(),
                    ));
                };
                if actual.is_null() || operand.is_null() {
                    return Err(QueryError::null_comparison(&self.key, ordered));
                }
                let ordering = actual.try_cmp(operand).ok_or_else(|| {
                    QueryError::incomparable(
                        &self.key,
                        ordered,
                        actual.type_name(),
                        operand.type_name(),
                    )
                })?;
                Ok(ordered.accepts(ordering))
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.key, self.compare)?;
        match self.values.as_slice() {
            [single] => write!(f, "{}", single),
            values => write!(f, "{}", Value::List(values.to_vec())),
        }
    }
}
