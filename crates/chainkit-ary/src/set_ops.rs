//! Set-like operations and row queries over nested `Ary` values.
//!
//! Value membership compares text forms, so `1` and `"1"` are the same
//! member. Keys compare exactly.

use crate::ary::Ary;
use crate::key::Key;
use crate::value::Value;
use std::collections::HashSet;

impl Ary {
    fn text_set(&self) -> HashSet<String> {
        self.values_iter().map(Value::to_text).collect()
    }

    /// Entries whose value does not occur in `other`; keys are kept.
    pub fn diff(&self, other: &Ary) -> Ary {
        let members = other.text_set();
        self.filter(|v, _| !members.contains(&v.to_text()))
    }

    /// Entries whose key does not occur in `other`.
    pub fn diff_key(&self, other: &Ary) -> Ary {
        self.filter(|_, k| !other.has_key(k))
    }

    /// Entries whose key/value pair does not occur in `other`.
    pub fn diff_assoc(&self, other: &Ary) -> Ary {
        self.filter(|v, k| {
            other
                .get(k)
                .is_none_or(|theirs| theirs.to_text() != v.to_text())
        })
    }

    /// Entries whose value also occurs in `other`; keys are kept.
    pub fn intersect(&self, other: &Ary) -> Ary {
        let members = other.text_set();
        self.filter(|v, _| members.contains(&v.to_text()))
    }

    /// Entries whose key also occurs in `other`.
    pub fn intersect_key(&self, other: &Ary) -> Ary {
        self.filter(|_, k| other.has_key(k))
    }

    /// Entries whose key/value pair also occurs in `other`.
    pub fn intersect_assoc(&self, other: &Ary) -> Ary {
        self.filter(|v, k| {
            other
                .get(k)
                .is_some_and(|theirs| theirs.to_text() == v.to_text())
        })
    }

    /// Pick one column out of a list of rows.
    ///
    /// With no `column_key` the whole row is taken. With an `index_key` the
    /// result is keyed by that column when it holds a string or integer;
    /// other rows are appended. Rows that are not `Ary` values, or lack the
    /// column, are skipped.
    pub fn column(&self, column_key: Option<&Key>, index_key: Option<&Key>) -> Ary {
        let mut out = self.derive(Default::default());
        for row in self.values_iter().filter_map(Value::as_ary) {
            let picked = match column_key {
                Some(column) => match row.get(column) {
                    Some(value) => value.clone(),
                    None => continue,
                },
                None => Value::Ary(row.clone()),
            };
            let index = index_key
                .and_then(|ik| row.get(ik))
                .and_then(|v| Key::try_from(v).ok());
            match index {
                Some(key) => out.set(key, picked),
                None => out.push(picked),
            };
        }
        out
    }

    /// Rows whose `column_key` equals `value`; keys are kept.
    pub fn where_eq(&self, column_key: &Key, value: &Value, strict: Option<bool>) -> Ary {
        let strict = strict.unwrap_or(self.config.keys_strict);
        self.where_fn(column_key, |v| v.equals(value, strict))
    }

    /// Rows whose `column_key` satisfies `predicate`; keys are kept.
    pub fn where_fn(&self, column_key: &Key, mut predicate: impl FnMut(&Value) -> bool) -> Ary {
        self.filter(|row, _| {
            row.as_ary()
                .and_then(|r| r.get(column_key))
                .is_some_and(&mut predicate)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Ary {
        let row = |id: i64, name: &str, role: &str| {
            Value::Ary(Ary::from_pairs([
                ("id", Value::Int(id)),
                ("name", Value::from(name)),
                ("role", Value::from(role)),
            ]))
        };
        Ary::from(vec![
            row(3, "ann", "admin"),
            row(5, "bob", "user"),
            row(8, "cat", "admin"),
        ])
    }

    #[test]
    fn diff_and_intersect_by_value() {
        let left = Ary::from(vec![Value::from("a"), Value::Int(1), Value::from("b")]);
        let right = Ary::from(vec![Value::from("1"), Value::from("b")]);
        assert_eq!(left.diff(&right), Ary::from(vec!["a"]));
        let common = left.intersect(&right);
        assert_eq!(common.keys(None, None), Ary::from(vec![1, 2]));
    }

    #[test]
    fn key_and_assoc_variants() {
        let left = Ary::from_pairs([("a", "green"), ("b", "brown"), ("c", "blue")]);
        let right = Ary::from_pairs([("a", "green"), ("b", "yellow"), ("d", "blue")]);
        assert_eq!(left.diff_key(&right), Ary::from_pairs([("c", "blue")]));
        assert_eq!(
            left.diff_assoc(&right),
            Ary::from_pairs([("b", "brown"), ("c", "blue")])
        );
        assert_eq!(
            left.intersect_key(&right),
            Ary::from_pairs([("a", "green"), ("b", "brown")])
        );
        assert_eq!(left.intersect_assoc(&right), Ary::from_pairs([("a", "green")]));
    }

    #[test]
    fn column_picks_and_indexes() {
        let rows = users();
        let names = rows.column(Some(&Key::from("name")), None);
        assert_eq!(names, Ary::from(vec!["ann", "bob", "cat"]));

        let by_id = rows.column(Some(&Key::from("name")), Some(&Key::from("id")));
        assert_eq!(by_id.get(5), Some(&Value::from("bob")));
        assert_eq!(by_id.first_key(), Some(&Key::Int(3)));

        let whole = rows.column(None, Some(&Key::from("name")));
        assert!(whole.get("cat").and_then(Value::as_ary).is_some());

        assert!(rows.column(Some(&Key::from("missing")), None).is_empty());
    }

    #[test]
    fn where_filters_rows() {
        let rows = users();
        let admins = rows.where_eq(&Key::from("role"), &Value::from("admin"), None);
        assert_eq!(admins.len(), 2);
        assert_eq!(admins.keys(None, None), Ary::from(vec![0, 2]));

        let loose = rows.where_eq(&Key::from("id"), &Value::from("5"), Some(false));
        assert_eq!(loose.len(), 1);
        assert!(rows.where_eq(&Key::from("id"), &Value::from("5"), None).is_empty());

        let big = rows.where_fn(&Key::from("id"), |v| v.as_int().is_some_and(|id| id > 4));
        assert_eq!(big.len(), 2);
    }
}
