//! Entry payloads.
//!
//! An [`Entry`] is what a component materializes at one index: a plain
//! [`Value`], an opaque [`Expression`], or an [`Entry::Unconstructed`]
//! placeholder that reserves the index without giving it data yet.

use std::fmt;
use std::sync::Arc;

/// A data value held by a component entry.
///
/// Deserialized sets drop repeated members the same way [`Value::set`] does.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    /// Unordered collection of distinct values.
    Set(Vec<Value>),
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    Set(Vec<Value>),
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Bool(v) => Value::Bool(v),
            RawValue::Int(v) => Value::Int(v),
            RawValue::Float(v) => Value::Float(v),
            RawValue::Str(s) => Value::Str(s),
            RawValue::Set(items) => Value::set(items),
        })
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => {
                (a - b).abs() < f64::EPSILON || (a.is_nan() && b.is_nan())
            }
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64 - b).abs() < f64::EPSILON
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => {
                // Order-independent
                a.len() == b.len() && a.iter().all(|item| b.contains(item))
            }
            _ => false,
        }
    }
}

impl Value {
    /// Builds a set value, dropping repeated members.
    pub fn set<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut members: Vec<Value> = Vec::new();
        for item in items {
            let item = item.into();
            if !members.contains(&item) {
                members.push(item);
            }
        }
        Value::Set(members)
    }

    /// Drops repeated members from this value and any nested sets.
    pub fn normalized(self) -> Self {
        match self {
            Value::Set(items) => Value::set(items.into_iter().map(Value::normalized)),
            other => other,
        }
    }

    /// Attempts to read the value as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Attempts to extract an i64 value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the members of a set value.
    pub fn as_set(&self) -> Option<&[Value]> {
        match self {
            Value::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Str(s) => write!(f, "'{s}'"),
            Value::Set(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

/// Opaque symbolic expression body.
///
/// Expressions are stored and reported as given; nothing here evaluates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    body: Arc<str>,
}

impl Expression {
    pub fn new(body: impl Into<Arc<str>>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

/// The payload bound to one index of a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Value(Value),
    Expression(Expression),
    /// Reserved index with no data yet.
    Unconstructed,
}

impl Entry {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Entry::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Entry::Expression(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_constructed(&self) -> bool {
        !matches!(self, Entry::Unconstructed)
    }

    /// Normalizes a held value; see [`Value::normalized`].
    pub fn normalized(self) -> Self {
        match self {
            Entry::Value(v) => Entry::Value(v.normalized()),
            other => other,
        }
    }
}

impl From<Value> for Entry {
    fn from(v: Value) -> Self {
        Entry::Value(v)
    }
}

macro_rules! impl_entry_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Entry {
                fn from(v: $t) -> Self {
                    Entry::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_entry_from!(f64, i64, i32, bool, &str, String);

impl From<Expression> for Entry {
    fn from(e: Expression) -> Self {
        Entry::Expression(e)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Value(v) => write!(f, "{v}"),
            Entry::Expression(e) => write!(f, "{e}"),
            Entry::Unconstructed => write!(f, "<unconstructed>"),
        }
    }
}

/// Admissible values for a component's entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Domain {
    #[default]
    Any,
    Reals,
    NonNegativeReals,
    Integers,
    NonNegativeIntegers,
    Binary,
    Boolean,
}

impl Domain {
    /// Returns true if `value` lies in this domain.
    pub fn contains(&self, value: &Value) -> bool {
        match self {
            Domain::Any => true,
            Domain::Reals => value.as_f64().is_some_and(f64::is_finite),
            Domain::NonNegativeReals => value.as_f64().is_some_and(|v| v.is_finite() && v >= 0.0),
            Domain::Integers => integral(value).is_some(),
            Domain::NonNegativeIntegers => integral(value).is_some_and(|v| v >= 0),
            Domain::Binary => integral(value).is_some_and(|v| v == 0 || v == 1),
            Domain::Boolean => matches!(value, Value::Bool(_)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Domain::Any => "Any",
            Domain::Reals => "Reals",
            Domain::NonNegativeReals => "NonNegativeReals",
            Domain::Integers => "Integers",
            Domain::NonNegativeIntegers => "NonNegativeIntegers",
            Domain::Binary => "Binary",
            Domain::Boolean => "Boolean",
        }
    }
}

fn integral(value: &Value) -> Option<i64> {
    match value {
        Value::Int(v) => Some(*v),
        Value::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
        _ => None,
    }
}
