//! The `Ary` wrapper: construction, access, in-place mutation, aggregates.
//!
//! Mutation methods take `&mut self` and return `&mut Self` so calls chain
//! on the same instance. Transformation methods take `&self` and return a
//! fresh `Ary` that shares this instance's configuration.

use crate::config::{AryConfig, DEFAULT_MAX_FILL};
use crate::error::AryError;
use crate::key::Key;
use crate::value::Value;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Insertion-ordered map from `Key` to `Value` with chainable methods.
#[derive(Clone)]
pub struct Ary {
    pub(crate) items: IndexMap<Key, Value>,
    /// Key assigned by the next `push`: one past the largest integer key.
    pub(crate) next_index: i64,
    pub(crate) config: Arc<AryConfig>,
}

fn shared_default_config() -> Arc<AryConfig> {
    static DEFAULT: OnceLock<Arc<AryConfig>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(AryConfig::default()))
        .clone()
}

fn next_index_of(items: &IndexMap<Key, Value>) -> i64 {
    items
        .keys()
        .filter_map(Key::as_int)
        .max()
        .map_or(0, |max| max.saturating_add(1).max(0))
}

/// Renumber integer keys from 0 in order, keeping string keys.
pub(crate) fn renumber(entries: impl IntoIterator<Item = (Key, Value)>) -> IndexMap<Key, Value> {
    let mut next = 0i64;
    let mut out = IndexMap::new();
    for (key, value) in entries {
        match key {
            Key::Int(_) => {
                out.insert(Key::Int(next), value);
                next += 1;
            }
            Key::Str(_) => {
                out.insert(key, value);
            }
        }
    }
    out
}

/// Resolve an offset/length pair against `len` into a `start..end` range.
/// Negative offsets count from the end; a negative length stops that many
/// elements before the end.
pub(crate) fn resolve_range(len: usize, offset: i64, length: Option<i64>) -> (usize, usize) {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let start = if offset < 0 {
        (len_i + offset).max(0)
    } else {
        offset.min(len_i)
    };
    let end = match length {
        None => len_i,
        Some(l) if l < 0 => (len_i + l).max(start),
        Some(l) => start.saturating_add(l).min(len_i),
    };
    (start as usize, end as usize)
}

impl Ary {
    pub fn new() -> Self {
        Self::with_config(shared_default_config())
    }

    pub fn with_config(config: Arc<AryConfig>) -> Self {
        Self {
            items: IndexMap::new(),
            next_index: 0,
            config,
        }
    }

    /// Build from key/value pairs; later duplicates overwrite earlier ones.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let mut ary = Self::new();
        for (key, value) in pairs {
            ary.set(key, value);
        }
        ary
    }

    /// A new instance sharing this instance's configuration.
    pub(crate) fn derive(&self, items: IndexMap<Key, Value>) -> Ary {
        Ary {
            next_index: next_index_of(&items),
            items,
            config: Arc::clone(&self.config),
        }
    }

    pub(crate) fn derive_list(&self, values: impl IntoIterator<Item = Value>) -> Ary {
        self.derive(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::from(i), v))
                .collect(),
        )
    }

    pub fn config(&self) -> &AryConfig {
        &self.config
    }

    /// Swap the configuration used for omitted arguments.
    pub fn set_config(&mut self, config: Arc<AryConfig>) -> &mut Self {
        self.config = config;
        self
    }

    pub fn val(&self) -> &IndexMap<Key, Value> {
        &self.items
    }

    pub fn set_val(&mut self, items: IndexMap<Key, Value>) -> &mut Self {
        self.next_index = next_index_of(&items);
        self.items = items;
        self
    }

    pub fn into_inner(self) -> IndexMap<Key, Value> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias of `len`.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .enumerate()
            .all(|(i, key)| key.as_int() == i64::try_from(i).ok())
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.items.iter()
    }

    pub fn keys_iter(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.items.keys()
    }

    pub fn values_iter(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.items.values()
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.items.get(&key.into())
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.items.get_mut(&key.into())
    }

    pub fn has_key(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Insert or overwrite; an existing key keeps its position.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if let Key::Int(i) = key {
            self.next_index = self.next_index.max(i.saturating_add(1));
        }
        self.items.insert(key, value.into());
        self
    }

    /// Remove a key, keeping the order of the rest.
    pub fn unset(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.items.shift_remove(&key.into())
    }

    /// Entry at a position.
    pub fn at(&self, index: usize) -> Result<(&Key, &Value), AryError> {
        self.items.get_index(index).ok_or(AryError::OutOfRange {
            requested: index,
            size: self.items.len(),
        })
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.first().map(|(_, v)| v)
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.last().map(|(_, v)| v)
    }

    pub fn first_key(&self) -> Option<&Key> {
        self.items.first().map(|(k, _)| k)
    }

    pub fn last_key(&self) -> Option<&Key> {
        self.items.last().map(|(k, _)| k)
    }

    /// Values renumbered from 0.
    pub fn values(&self) -> Ary {
        self.derive_list(self.items.values().cloned())
    }

    /// All keys, or the keys whose value equals `search`.
    pub fn keys(&self, search: Option<&Value>, strict: Option<bool>) -> Ary {
        let strict = strict.unwrap_or(self.config.keys_strict);
        let keys = self
            .items
            .iter()
            .filter(|(_, v)| search.is_none_or(|s| v.equals(s, strict)))
            .map(|(k, _)| k.to_value());
        self.derive_list(keys)
    }

    pub fn has(&self, value: &Value, strict: Option<bool>) -> bool {
        self.search(value, strict).is_some()
    }

    /// Key of the first element equal to `value`.
    pub fn search(&self, value: &Value, strict: Option<bool>) -> Option<Key> {
        let strict = strict.unwrap_or(self.config.keys_strict);
        self.items
            .iter()
            .find(|(_, v)| v.equals(value, strict))
            .map(|(k, _)| k.clone())
    }

    pub(crate) fn position_of_value(&self, value: &Value, strict: bool) -> Option<usize> {
        self.items.values().position(|v| v.equals(value, strict))
    }

    // ── In-place mutation ──

    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        let key = Key::Int(self.next_index);
        self.next_index = self.next_index.saturating_add(1);
        self.items.insert(key, value.into());
        self
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<Value> {
        let (_, value) = self.items.pop()?;
        self.next_index = next_index_of(&self.items);
        Some(value)
    }

    /// Remove and return the first element; integer keys are renumbered.
    pub fn shift(&mut self) -> Option<Value> {
        let (_, value) = self.items.shift_remove_index(0)?;
        let items = std::mem::take(&mut self.items);
        self.set_val(renumber(items));
        Some(value)
    }

    /// Prepend a value; integer keys are renumbered.
    pub fn unshift(&mut self, value: impl Into<Value>) -> &mut Self {
        let items = std::mem::take(&mut self.items);
        let entries = std::iter::once((Key::Int(0), value.into())).chain(items);
        self.set_val(renumber(entries))
    }

    /// Append `other`: integer keys get fresh indices, string keys overwrite.
    pub fn merge(&mut self, other: &Ary) -> &mut Self {
        let items = std::mem::take(&mut self.items);
        let entries = items
            .into_iter()
            .chain(other.items.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.set_val(renumber(entries))
    }

    /// Every key of `other` overwrites or appends.
    pub fn replace(&mut self, other: &Ary) -> &mut Self {
        for (key, value) in &other.items {
            self.set(key.clone(), value.clone());
        }
        self
    }

    pub fn map(&mut self, mut f: impl FnMut(Value) -> Value) -> &mut Self {
        for value in self.items.values_mut() {
            *value = f(std::mem::take(value));
        }
        self
    }

    pub fn each(&mut self, mut f: impl FnMut(&mut Value, &Key)) -> &mut Self {
        for (key, value) in self.items.iter_mut() {
            f(value, key);
        }
        self
    }

    /// Remove `offset..offset+length` and insert `replacement` there.
    /// Returns the removed elements; integer keys are renumbered.
    pub fn splice(
        &mut self,
        offset: i64,
        length: Option<i64>,
        replacement: impl IntoIterator<Item = Value>,
    ) -> Ary {
        let (start, end) = resolve_range(self.items.len(), offset, length);
        let mut entries: Vec<(Key, Value)> = std::mem::take(&mut self.items).into_iter().collect();
        let inserted = replacement.into_iter().map(|v| (Key::Int(0), v));
        let removed: Vec<(Key, Value)> = entries.splice(start..end, inserted).collect();
        self.set_val(renumber(entries));
        self.derive_list(removed.into_iter().map(|(_, v)| v))
    }

    // ── Derived collections ──

    /// Entries for which `predicate` holds; keys are kept.
    pub fn filter(&self, mut predicate: impl FnMut(&Value, &Key) -> bool) -> Ary {
        self.derive(
            self.items
                .iter()
                .filter(|(k, v)| predicate(v, k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Drop falsy values; keys are kept.
    pub fn clean(&self) -> Ary {
        self.filter(|v, _| v.is_truthy())
    }

    /// First occurrence of each distinct value (compared as text); keys are kept.
    pub fn unique(&self) -> Ary {
        let mut seen = HashSet::new();
        self.filter(|v, _| seen.insert(v.to_text()))
    }

    /// Swap keys and values. Every value must be a string or integer.
    pub fn flip(&self) -> Result<Ary, AryError> {
        let mut items = IndexMap::new();
        for (key, value) in &self.items {
            items.insert(Key::try_from(value)?, key.to_value());
        }
        Ok(self.derive(items))
    }

    /// Occurrence count per value. Every value must be a string or integer.
    pub fn count_values(&self) -> Result<Ary, AryError> {
        let mut counts: IndexMap<Key, Value> = IndexMap::new();
        for value in self.items.values() {
            let slot = counts.entry(Key::try_from(value)?).or_insert(Value::Int(0));
            if let Value::Int(n) = slot {
                *n += 1;
            }
        }
        Ok(self.derive(counts))
    }

    /// Pad to `|size|` elements with `value`: on the right for a positive
    /// size, on the left for a negative one. Integer keys are renumbered.
    /// Fails with `TooLarge` past the configured `max_fill`.
    pub fn pad(&self, size: i64, value: impl Into<Value>) -> Result<Ary, AryError> {
        let target = usize::try_from(size.unsigned_abs()).unwrap_or(usize::MAX);
        let len = self.items.len();
        if target <= len {
            return Ok(self.clone());
        }
        let limit = self.config.max_fill;
        if target > limit {
            return Err(AryError::TooLarge {
                requested: target,
                limit,
            });
        }
        let value = value.into();
        let padding = std::iter::repeat_n(value, target - len).map(|v| (Key::Int(0), v));
        let current = self.items.iter().map(|(k, v)| (k.clone(), v.clone()));
        let items = if size > 0 {
            renumber(current.chain(padding))
        } else {
            renumber(padding.chain(current))
        };
        Ok(self.derive(items))
    }

    /// `num` copies of `value` keyed `start, start+1, ...`. Fails with
    /// `TooLarge` past `DEFAULT_MAX_FILL`, or when the keys would overflow.
    pub fn fill(start: i64, num: usize, value: impl Into<Value>) -> Result<Ary, AryError> {
        let limit = DEFAULT_MAX_FILL;
        let last_fits = i64::try_from(num.saturating_sub(1))
            .ok()
            .and_then(|n| start.checked_add(n))
            .is_some();
        if num > limit || !last_fits {
            return Err(AryError::TooLarge {
                requested: num,
                limit,
            });
        }
        let value = value.into();
        let mut ary = Ary::new();
        for key in (start..).take(num) {
            ary.set(key, value.clone());
        }
        Ok(ary)
    }

    /// Every value of `keys` becomes a key mapped to `value`.
    pub fn fill_keys(keys: &Ary, value: impl Into<Value>) -> Result<Ary, AryError> {
        let value = value.into();
        let mut items = IndexMap::new();
        for key in keys.items.values() {
            items.insert(Key::try_from(key)?, value.clone());
        }
        Ok(keys.derive(items))
    }

    /// Pair the values of `keys` with the values of `values`.
    pub fn combine(keys: &Ary, values: &Ary) -> Result<Ary, AryError> {
        if keys.len() != values.len() {
            return Err(AryError::LengthMismatch {
                left: keys.len(),
                right: values.len(),
            });
        }
        let mut items = IndexMap::new();
        for (key, value) in keys.items.values().zip(values.items.values()) {
            items.insert(Key::try_from(key)?, value.clone());
        }
        Ok(keys.derive(items))
    }

    // ── Aggregates ──

    pub fn reduce<T>(&self, mut f: impl FnMut(T, &Value) -> T, initial: T) -> T {
        self.items.values().fold(initial, |acc, v| f(acc, v))
    }

    /// Sum of numeric readings. Booleans count as 0 or 1, null and
    /// non-numeric strings as 0, nested collections are skipped. Stays an
    /// integer until a float appears or the sum overflows.
    pub fn sum(&self) -> Value {
        self.fold_numeric(0, i64::checked_add, |a, b| a + b)
    }

    /// Product of numeric readings, with the same operand rules as `sum`.
    pub fn product(&self) -> Value {
        self.fold_numeric(1, i64::checked_mul, |a, b| a * b)
    }

    fn fold_numeric(
        &self,
        identity: i64,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Value {
        let acc = self
            .items
            .values()
            .filter_map(Operand::of)
            .fold(Operand::Int(identity), |acc, operand| match (acc, operand) {
                (Operand::Int(a), Operand::Int(b)) => match int_op(a, b) {
                    Some(n) => Operand::Int(n),
                    None => Operand::Float(float_op(a as f64, b as f64)),
                },
                (a, b) => Operand::Float(float_op(a.as_f64(), b.as_f64())),
            });
        match acc {
            Operand::Int(n) => Value::Int(n),
            Operand::Float(f) => Value::Float(f),
        }
    }

    pub fn min(&self) -> Option<&Value> {
        self.items.values().min_by(|a, b| a.cmp_regular(b))
    }

    /// Largest value; the first one wins among equals.
    pub fn max(&self) -> Option<&Value> {
        self.items.values().fold(None, |best, value| match best {
            Some(current) if value.cmp_regular(current) != Ordering::Greater => Some(current),
            _ => Some(value),
        })
    }

    /// Values as text joined by `glue`.
    pub fn join(&self, glue: &str) -> String {
        self.items
            .values()
            .map(Value::to_text)
            .collect::<Vec<_>>()
            .join(glue)
    }

    pub(crate) fn depth(&self) -> usize {
        1 + self.items.values().map(Value::depth).max().unwrap_or(0)
    }
}

/// Arithmetic reading of a value for `sum` and `product`.
#[derive(Clone, Copy)]
enum Operand {
    Int(i64),
    Float(f64),
}

impl Operand {
    fn of(value: &Value) -> Option<Operand> {
        Some(match value {
            Value::Null => Operand::Int(0),
            Value::Bool(b) => Operand::Int(i64::from(*b)),
            Value::Int(i) => Operand::Int(*i),
            Value::Float(f) => Operand::Float(*f),
            Value::Str(s) => match s.trim().parse::<i64>() {
                Ok(i) => Operand::Int(i),
                Err(_) => value.to_number().map_or(Operand::Int(0), Operand::Float),
            },
            Value::Ary(_) => return None,
        })
    }

    fn as_f64(self) -> f64 {
        match self {
            Operand::Int(i) => i as f64,
            Operand::Float(f) => f,
        }
    }
}

impl Default for Ary {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Ary {
    /// Same entries in the same order; configuration is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl fmt::Debug for Ary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items.iter()).finish()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Ary {
    fn from(values: Vec<T>) -> Self {
        let mut ary = Ary::new();
        for value in values {
            ary.push(value);
        }
        ary
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Ary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Ary::from_pairs(iter)
    }
}

impl IntoIterator for Ary {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ary {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Ary {
        Ary::from(vec!["a", "b", "c"])
    }

    #[test]
    fn new_and_val() {
        assert!(Ary::new().val().is_empty());

        let ary = Ary::from(vec![1, 2, 3]);
        assert_eq!(ary.len(), 3);
        assert_eq!(ary.get(1), Some(&Value::Int(2)));

        let mut ary = Ary::from(vec![Value::Int(1), Value::from("4")]);
        let replacement = Ary::from(vec![1, 2, 3, 4]).into_inner();
        ary.set_val(replacement);
        assert_eq!(ary, Ary::from(vec![1, 2, 3, 4]));
    }

    #[test]
    fn push_uses_next_integer_key() {
        let mut ary = Ary::from_pairs([(Key::Int(5), "x")]);
        ary.set("name", "y").push("z");
        assert_eq!(ary.last_key(), Some(&Key::Int(6)));

        let mut negative = Ary::from_pairs([(Key::Int(-5), "x")]);
        negative.push("y");
        assert_eq!(negative.last_key(), Some(&Key::Int(0)));
    }

    #[test]
    fn pop_and_shift_return_elements() {
        let mut ary = abc();
        assert_eq!(ary.pop(), Some(Value::from("c")));
        assert_eq!(ary.shift(), Some(Value::from("a")));
        assert_eq!(ary, Ary::from(vec!["b"]));
        ary.push("d");
        assert_eq!(ary.get(1), Some(&Value::from("d")));

        let mut empty = Ary::new();
        assert_eq!(empty.pop(), None);
        assert_eq!(empty.shift(), None);
    }

    #[test]
    fn unshift_renumbers_integer_keys() {
        let mut ary = Ary::from_pairs([(Key::Int(3), Value::from("a")), (Key::from("k"), Value::from("b"))]);
        ary.unshift("z");
        let keys: Vec<Key> = ary.keys_iter().cloned().collect();
        assert_eq!(keys, vec![Key::Int(0), Key::Int(1), Key::from("k")]);
    }

    #[test]
    fn at_reports_out_of_range() {
        let ary = abc();
        assert_eq!(ary.at(2).expect("in range").1, &Value::from("c"));
        let err = ary.at(3).expect_err("index 3 is past the end");
        assert!(matches!(err, AryError::OutOfRange { requested: 3, size: 3 }));
    }

    #[test]
    fn keys_filter_by_value_with_configured_strictness() {
        let ary = Ary::from(vec![Value::Int(1), Value::from("1"), Value::Int(2)]);
        assert_eq!(ary.keys(None, None), Ary::from(vec![0, 1, 2]));
        assert_eq!(ary.keys(Some(&Value::Int(1)), None), Ary::from(vec![0]));
        assert_eq!(ary.keys(Some(&Value::Int(1)), Some(false)), Ary::from(vec![0, 1]));

        let loose = Arc::new(AryConfig {
            keys_strict: false,
            ..AryConfig::default()
        });
        let mut configured = Ary::with_config(loose);
        configured.set_val(ary.into_inner());
        assert_eq!(configured.keys(Some(&Value::Int(1)), None).len(), 2);
    }

    #[test]
    fn merge_renumbers_and_overwrites_strings() {
        let mut left = Ary::from_pairs([
            (Key::from("color"), Value::from("red")),
            (Key::Int(7), Value::Int(2)),
        ]);
        let right = Ary::from_pairs([
            (Key::from("color"), Value::from("green")),
            (Key::Int(9), Value::Int(4)),
        ]);
        left.merge(&right);
        assert_eq!(
            left,
            Ary::from_pairs([
                (Key::from("color"), Value::from("green")),
                (Key::Int(0), Value::Int(2)),
                (Key::Int(1), Value::Int(4)),
            ])
        );
    }

    #[test]
    fn replace_overwrites_by_key() {
        let mut base = abc();
        base.replace(&Ary::from_pairs([(0, "x"), (5, "y")]));
        assert_eq!(base.get(0), Some(&Value::from("x")));
        assert_eq!(base.get(5), Some(&Value::from("y")));
        assert_eq!(base.len(), 4);
    }

    #[test]
    fn map_and_each_mutate_in_place() {
        let mut ary = Ary::from(vec![1, 2, 3]);
        let same: *const Ary = ary.map(|v| Value::Int(v.as_int().unwrap_or(0) * 10));
        assert!(std::ptr::eq(same, &ary));
        assert_eq!(ary, Ary::from(vec![10, 20, 30]));

        ary.each(|v, k| {
            if k.as_int() == Some(0) {
                *v = Value::Null;
            }
        });
        assert_eq!(ary.first(), Some(&Value::Null));
    }

    #[test]
    fn splice_removes_and_inserts() {
        let mut ary = Ary::from(vec!["red", "green", "blue", "yellow"]);
        let removed = ary.splice(1, Some(-1), vec![Value::from("orange")]);
        assert_eq!(removed, Ary::from(vec!["green", "blue"]));
        assert_eq!(ary, Ary::from(vec!["red", "orange", "yellow"]));

        let removed = ary.splice(-1, None, Vec::new());
        assert_eq!(removed, Ary::from(vec!["yellow"]));
        assert_eq!(ary.len(), 2);
    }

    #[test]
    fn transformations_leave_original_untouched() {
        let ary = Ary::from(vec![Value::Int(0), Value::Int(1), Value::from("1"), Value::Null]);
        let cleaned = ary.clean();
        let unique = ary.unique();
        assert_eq!(ary.len(), 4);
        assert_eq!(cleaned.keys(None, None), Ary::from(vec![1, 2]));
        assert_eq!(unique.keys(None, None), Ary::from(vec![0, 1, 3]));
    }

    #[test]
    fn flip_rejects_non_key_values() {
        let flipped = abc().flip().expect("strings flip");
        assert_eq!(flipped.get("b"), Some(&Value::Int(1)));

        let err = Ary::from(vec![Value::Float(1.5)]).flip().expect_err("floats cannot be keys");
        assert!(matches!(err, AryError::KeyType { .. }));
    }

    #[test]
    fn count_values_tallies_occurrences() {
        let ary = Ary::from(vec![Value::Int(1), Value::from("hello"), Value::Int(1), Value::from("1")]);
        let counts = ary.count_values().expect("keyable values");
        assert_eq!(counts.get(1), Some(&Value::Int(3)));
        assert_eq!(counts.get("hello"), Some(&Value::Int(1)));
    }

    #[test]
    fn combine_and_fill() {
        let keys = Ary::from(vec!["a", "b"]);
        let values = Ary::from(vec![1, 2]);
        let combined = Ary::combine(&keys, &values).expect("same length");
        assert_eq!(combined.get("b"), Some(&Value::Int(2)));

        let err = Ary::combine(&keys, &Ary::from(vec![1])).expect_err("length differs");
        assert!(matches!(err, AryError::LengthMismatch { left: 2, right: 1 }));

        let filled = Ary::fill(5, 3, "x").expect("small fill");
        assert_eq!(filled.first_key(), Some(&Key::Int(5)));
        assert_eq!(filled.last_key(), Some(&Key::Int(7)));

        let keyed = Ary::fill_keys(&keys, 0).expect("string keys");
        assert_eq!(keyed.get("a"), Some(&Value::Int(0)));
    }

    #[test]
    fn pad_left_and_right() {
        let ary = Ary::from(vec![1, 2]);
        assert_eq!(ary.pad(4, 0).expect("pad"), Ary::from(vec![1, 2, 0, 0]));
        assert_eq!(ary.pad(-3, 0).expect("pad"), Ary::from(vec![0, 1, 2]));
        assert_eq!(ary.pad(1, 0).expect("pad"), ary);
    }

    #[test]
    fn oversized_pad_and_fill_are_rejected() {
        let ary = Ary::from(vec![1, 2]);
        assert!(matches!(
            ary.pad(i64::MIN, 0),
            Err(AryError::TooLarge { limit: DEFAULT_MAX_FILL, .. })
        ));
        assert!(matches!(
            Ary::fill(0, usize::MAX, 0),
            Err(AryError::TooLarge { requested: usize::MAX, .. })
        ));
        assert!(matches!(
            Ary::fill(i64::MAX, 2, 0),
            Err(AryError::TooLarge { requested: 2, .. })
        ));
        let edge = Ary::fill(i64::MAX, 1, "x").expect("the last key fits");
        assert_eq!(edge.first_key(), Some(&Key::Int(i64::MAX)));

        let config = Arc::new(AryConfig {
            max_fill: 3,
            ..AryConfig::default()
        });
        let mut small = Ary::from(vec![1]);
        small.set_config(config);
        assert_eq!(small.pad(3, 0).expect("at the limit").len(), 3);
        assert!(matches!(
            small.pad(4, 0),
            Err(AryError::TooLarge { requested: 4, limit: 3 })
        ));
    }

    #[test]
    fn aggregates() {
        let ary = Ary::from(vec![Value::Int(2), Value::from("3"), Value::Float(0.5)]);
        assert_eq!(ary.sum(), Value::Float(5.5));
        assert_eq!(Ary::from(vec![2, 3]).sum(), Value::Int(5));
        assert_eq!(Ary::from(vec![2, 3]).product(), Value::Int(6));
        assert_eq!(Ary::new().product(), Value::Int(1));
        assert_eq!(Ary::from(vec![Value::Int(i64::MAX), Value::Int(1)]).sum().type_name(), "float");
        assert_eq!(ary.max(), Some(&Value::from("3")));
        assert_eq!(ary.min(), Some(&Value::Float(0.5)));
        assert_eq!(Ary::from(vec![1, 2, 3]).reduce(|acc, v| acc + v.as_int().unwrap_or(0), 10i64), 16);
        assert_eq!(abc().join(","), "a,b,c");
    }

    #[test]
    fn sum_and_product_read_booleans_and_null_as_integers() {
        let with_true = Ary::from(vec![Value::Int(1), Value::Bool(true)]);
        assert_eq!(with_true.sum(), Value::Int(2));
        let with_null = Ary::from(vec![Value::Int(1), Value::Null]);
        assert_eq!(with_null.sum(), Value::Int(1));
        let with_word = Ary::from(vec![Value::Int(1), Value::from("abc")]);
        assert_eq!(with_word.sum(), Value::Int(1));
        let with_float_text = Ary::from(vec![Value::Int(1), Value::from("1.5")]);
        assert_eq!(with_float_text.sum(), Value::Float(2.5));

        let product = Ary::from(vec![Value::Int(2), Value::Bool(true)]).product();
        assert_eq!(product, Value::Int(2));
        assert_eq!(
            Ary::from(vec![Value::Int(2), Value::Bool(false)]).product(),
            Value::Int(0)
        );
        let nested = Ary::from(vec![Value::Int(3), Value::from(Ary::from(vec![9]))]);
        assert_eq!(nested.sum(), Value::Int(3));
    }

    #[test]
    fn max_and_min_keep_the_first_of_equal_values() {
        let ary = Ary::from(vec![Value::Int(1), Value::from("1")]);
        assert_eq!(ary.max(), Some(&Value::Int(1)));
        assert_eq!(ary.min(), Some(&Value::Int(1)));
        let reversed = Ary::from(vec![Value::from("1"), Value::Int(1)]);
        assert_eq!(reversed.max(), Some(&Value::from("1")));
        assert_eq!(Ary::new().max(), None);
    }
}
