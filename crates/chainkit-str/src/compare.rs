//! Ordering and equality between strings.

use crate::str::Str;
use chainkit_ary::natural_cmp;
use std::cmp::Ordering;

impl Str {
    /// Character-wise comparison of at most `length` characters.
    pub fn comp(
        &self,
        other: impl AsRef<str>,
        case_sensitive: Option<bool>,
        length: Option<usize>,
    ) -> Ordering {
        let take = length.unwrap_or(usize::MAX);
        let left = self.str.chars().take(take);
        let right = other.as_ref().chars().take(take);
        if case_sensitive.unwrap_or(self.config.case_sensitive) {
            left.cmp(right)
        } else {
            left.flat_map(char::to_lowercase)
                .cmp(right.flat_map(char::to_lowercase))
        }
    }

    /// Natural-order comparison, so `"img2"` sorts before `"img12"`.
    pub fn nat_comp(&self, other: impl AsRef<str>, case_sensitive: Option<bool>) -> Ordering {
        let case_sensitive = case_sensitive.unwrap_or(self.config.case_sensitive);
        natural_cmp(&self.str, other.as_ref(), !case_sensitive)
    }

    /// Exact, case-sensitive equality.
    pub fn equals(&self, other: impl AsRef<str>) -> bool {
        self.str == other.as_ref()
    }
}
