//! Element values held by an `Ary`.
//!
//! Comparisons follow the loose/strict split of dynamically typed host
//! languages: loose equality treats numeric strings and numbers as equal,
//! strict equality requires the same variant.

use crate::ary::Ary;
use std::cmp::Ordering;
use std::fmt;

/// A dynamically typed element.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Ary(Ary),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Ary(_) => "ary",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ary(&self) -> Option<&Ary> {
        match self {
            Value::Ary(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_ary_mut(&mut self) -> Option<&mut Ary> {
        match self {
            Value::Ary(a) => Some(a),
            _ => None,
        }
    }

    /// Falsy values are `null`, `false`, `0`, `0.0`, `""`, `"0"` and an
    /// empty `Ary`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !(s.is_empty() || s == "0"),
            Value::Ary(a) => !a.is_empty(),
        }
    }

    /// Numeric reading of the value, if it has one. Strings count when they
    /// are numeric after trimming surrounding whitespace.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => numeric_str(s),
            _ => None,
        }
    }

    /// String conversion used by `join`, string sorting and loose comparison.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null | Value::Bool(false) => String::new(),
            Value::Bool(true) => "1".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
            Value::Ary(_) => "Ary".to_string(),
        }
    }

    /// Same variant and same content; nested `Ary` values must match in order.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Ary(a), Value::Ary(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va.strict_eq(vb))
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            _ => self == other,
        }
    }

    /// Equality after type juggling: `1 == "1" == 1.0`, `null == false == ""`.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Ary(a), Value::Ary(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .all(|(k, va)| b.get(k).is_some_and(|vb| va.loose_eq(vb)))
            }
            _ => self.cmp_regular(other) == Ordering::Equal,
        }
    }

    /// Equality selected by the `strict` flag.
    pub fn equals(&self, other: &Value, strict: bool) -> bool {
        if strict {
            self.strict_eq(other)
        } else {
            self.loose_eq(other)
        }
    }

    /// The "regular" ordering: numbers and numeric strings compare
    /// numerically, other strings bytewise, booleans and null by truthiness.
    pub fn cmp_regular(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, Value::Str(s)) => "".cmp(s.as_str()),
            (Value::Str(s), Value::Null) => s.as_str().cmp(""),
            (Value::Bool(_), _) | (_, Value::Bool(_)) | (Value::Null, _) | (_, Value::Null) => {
                self.is_truthy().cmp(&other.is_truthy())
            }
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => cmp_f64(
                self.to_number().unwrap_or_default(),
                other.to_number().unwrap_or_default(),
            ),
            (Value::Int(_) | Value::Float(_), Value::Str(s)) => match numeric_str(s) {
                Some(n) => cmp_f64(self.to_number().unwrap_or_default(), n),
                None => self.to_text().as_str().cmp(s.as_str()),
            },
            (Value::Str(s), Value::Int(_) | Value::Float(_)) => match numeric_str(s) {
                Some(n) => cmp_f64(n, other.to_number().unwrap_or_default()),
                None => s.as_str().cmp(other.to_text().as_str()),
            },
            (Value::Str(a), Value::Str(b)) => match (numeric_str(a), numeric_str(b)) {
                (Some(x), Some(y)) => cmp_f64(x, y),
                _ => a.as_bytes().cmp(b.as_bytes()),
            },
            (Value::Ary(a), Value::Ary(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.values_iter()
                    .zip(b.values_iter())
                    .map(|(x, y)| x.cmp_regular(y))
                    .find(|ord| *ord != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            }),
            (Value::Ary(_), _) => Ordering::Greater,
            (_, Value::Ary(_)) => Ordering::Less,
        }
    }

    /// Nesting depth: scalars are 0, an `Ary` is one more than its deepest
    /// element.
    pub fn depth(&self) -> usize {
        match self {
            Value::Ary(a) => a.depth(),
            _ => 0,
        }
    }
}

pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Parse a numeric string: optional surrounding whitespace, optional sign,
/// decimal digits with an optional fraction and exponent.
pub(crate) fn numeric_str(s: &str) -> Option<f64> {
    let t = s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));
    let body = t.strip_prefix(['+', '-']).unwrap_or(t);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (mantissa, None),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return None;
    }
    if int_part.is_empty() && frac_part.is_none_or(str::is_empty) {
        return None;
    }
    if let Some(exp) = exponent {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
    }
    t.parse().ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
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

impl From<Ary> for Value {
    fn from(value: Ary) -> Self {
        Value::Ary(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Ary(Ary::from(value))
    }
}
