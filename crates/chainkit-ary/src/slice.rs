//! Positional slicing: `slice`, `chunk`, `reverse` and the four
//! search-bounded variants.
//!
//! The boundary of `before`/`after` is the position of the first element
//! equal to the needle; for `before_key`/`after_key` it is the position of
//! the key. The `include` flag decides whether the boundary element is part
//! of the result.

use crate::ary::{Ary, renumber, resolve_range};
use crate::error::AryError;
use crate::key::Key;
use crate::value::Value;
use indexmap::IndexMap;

impl Ary {
    fn entries_in(&self, start: usize, end: usize, preserve_keys: bool) -> Ary {
        let entries = self
            .items
            .iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|(k, v)| (k.clone(), v.clone()));
        let items: IndexMap<Key, Value> = if preserve_keys {
            entries.collect()
        } else {
            renumber(entries)
        };
        self.derive(items)
    }

    /// Elements `offset..offset+length`. Negative offsets count from the
    /// end; a negative length stops that many elements before the end.
    /// String keys are always kept; integer keys are renumbered unless
    /// `preserve_keys`.
    pub fn slice(&self, offset: i64, length: Option<i64>, preserve_keys: Option<bool>) -> Ary {
        let (start, end) = resolve_range(self.items.len(), offset, length);
        let preserve = preserve_keys.unwrap_or(self.config.preserve_keys);
        self.entries_in(start, end, preserve)
    }

    /// Elements in reverse order.
    pub fn reverse(&self, preserve_keys: Option<bool>) -> Ary {
        let preserve = preserve_keys.unwrap_or(self.config.preserve_keys);
        let entries = self
            .items
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()));
        let items: IndexMap<Key, Value> = if preserve {
            entries.collect()
        } else {
            renumber(entries)
        };
        self.derive(items)
    }

    /// Split into a list of `Ary` chunks of `size` elements.
    pub fn chunk(&self, size: usize, preserve_keys: Option<bool>) -> Result<Ary, AryError> {
        if size == 0 {
            return Err(AryError::OutOfRange {
                requested: 0,
                size: self.items.len(),
            });
        }
        let preserve = preserve_keys.unwrap_or(self.config.preserve_keys);
        let len = self.items.len();
        let chunks = (0..len)
            .step_by(size)
            .map(|start| Value::Ary(self.entries_in(start, (start + size).min(len), preserve)));
        Ok(self.derive_list(chunks))
    }

    /// Everything before the first element equal to `value`, or `None`
    /// when no element matches.
    pub fn before(&self, value: &Value, include: Option<bool>, strict: Option<bool>) -> Option<Ary> {
        let strict = strict.unwrap_or(self.config.keys_strict);
        let pos = self.position_of_value(value, strict)?;
        Some(self.before_position(pos, include))
    }

    /// Everything after the first element equal to `value`, or `None`
    /// when no element matches.
    pub fn after(&self, value: &Value, include: Option<bool>, strict: Option<bool>) -> Option<Ary> {
        let strict = strict.unwrap_or(self.config.keys_strict);
        let pos = self.position_of_value(value, strict)?;
        Some(self.after_position(pos, include))
    }

    /// Everything before `key`, or `None` when the key is absent.
    pub fn before_key(&self, key: impl Into<Key>, include: Option<bool>) -> Option<Ary> {
        let pos = self.items.get_index_of(&key.into())?;
        Some(self.before_position(pos, include))
    }

    /// Everything after `key`, or `None` when the key is absent.
    pub fn after_key(&self, key: impl Into<Key>, include: Option<bool>) -> Option<Ary> {
        let pos = self.items.get_index_of(&key.into())?;
        Some(self.after_position(pos, include))
    }

    fn before_position(&self, pos: usize, include: Option<bool>) -> Ary {
        let end = if include.unwrap_or(self.config.before_include) {
            pos + 1
        } else {
            pos
        };
        self.entries_in(0, end, self.config.preserve_keys)
    }

    fn after_position(&self, pos: usize, include: Option<bool>) -> Ary {
        let start = if include.unwrap_or(self.config.after_include) {
            pos
        } else {
            pos + 1
        };
        self.entries_in(start, self.items.len(), self.config.preserve_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AryConfig;
    use std::sync::Arc;

    fn letters() -> Ary {
        Ary::from(vec!["a", "b", "c", "d", "e"])
    }

    #[test]
    fn slice_offsets_and_lengths() {
        let ary = letters();
        assert_eq!(ary.slice(2, None, None), Ary::from(vec!["c", "d", "e"]));
        assert_eq!(ary.slice(-2, Some(1), None), Ary::from(vec!["d"]));
        assert_eq!(ary.slice(0, Some(3), None), Ary::from(vec!["a", "b", "c"]));
        assert_eq!(ary.slice(1, Some(-2), None), Ary::from(vec!["b", "c"]));
        assert!(ary.slice(9, None, None).is_empty());
        assert_eq!(ary.slice(-9, Some(1), None), Ary::from(vec!["a"]));
    }

    #[test]
    fn slice_preserves_keys_on_request() {
        let kept = letters().slice(2, Some(2), Some(true));
        let keys: Vec<Key> = kept.keys_iter().cloned().collect();
        assert_eq!(keys, vec![Key::Int(2), Key::Int(3)]);
    }

    #[test]
    fn reverse_returns_new_instance() {
        let ary = letters();
        let reversed = ary.reverse(None);
        assert_eq!(reversed.first(), Some(&Value::from("e")));
        assert_eq!(reversed.first_key(), Some(&Key::Int(0)));
        assert_eq!(ary.first(), Some(&Value::from("a")));

        let kept = ary.reverse(Some(true));
        assert_eq!(kept.first_key(), Some(&Key::Int(4)));
    }

    #[test]
    fn chunk_splits_evenly_with_remainder() {
        let chunks = letters().chunk(2, None).expect("non-zero chunk size");
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.last(), Some(&Value::Ary(Ary::from(vec!["e"]))));

        let err = letters().chunk(0, None).expect_err("zero chunk size");
        assert!(matches!(err, AryError::OutOfRange { requested: 0, .. }));
    }

    #[test]
    fn before_and_after_value() {
        let ary = letters();
        let c = Value::from("c");
        assert_eq!(ary.before(&c, None, None), Some(Ary::from(vec!["a", "b"])));
        assert_eq!(ary.before(&c, Some(true), None), Some(Ary::from(vec!["a", "b", "c"])));
        assert_eq!(ary.after(&c, None, None), Some(Ary::from(vec!["d", "e"])));
        assert_eq!(ary.after(&c, Some(true), None), Some(Ary::from(vec!["c", "d", "e"])));
        assert_eq!(ary.before(&Value::from("z"), None, None), None);
        assert_eq!(ary.after(&Value::from("z"), Some(true), None), None);
    }

    #[test]
    fn before_uses_strictness() {
        let ary = Ary::from(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        let needle = Value::from("2");
        assert_eq!(ary.before(&needle, None, None), None);
        assert_eq!(ary.before(&needle, None, Some(false)), Some(Ary::from(vec![1])));
    }

    #[test]
    fn before_and_after_key() {
        let ary = Ary::from_pairs([("id", 1), ("name", 2), ("email", 3)]);
        let before = ary.before_key("name", None).expect("key exists");
        assert_eq!(before, Ary::from_pairs([("id", 1)]));
        let after = ary.after_key("name", Some(true)).expect("key exists");
        assert_eq!(after, Ary::from_pairs([("name", 2), ("email", 3)]));
        assert!(ary.after_key("missing", None).is_none());
    }

    #[test]
    fn include_defaults_come_from_config() {
        let config = Arc::new(AryConfig {
            before_include: true,
            after_include: true,
            ..AryConfig::default()
        });
        let mut ary = Ary::with_config(config);
        ary.push("a").push("b").push("c");
        let b = Value::from("b");
        assert_eq!(ary.before(&b, None, None), Some(Ary::from(vec!["a", "b"])));
        assert_eq!(ary.after(&b, None, None), Some(Ary::from(vec!["b", "c"])));
    }
}
