//! Substring search, search-bounded slicing and replacement.
//!
//! Positions are character indices. An empty needle is never located, but
//! `contains`, `starts_with` and `ends_with` all report it as present.

use crate::str::Str;

fn chars_eq(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
}

fn matches_at(hay: &[char], needle: &[char], at: usize, case_sensitive: bool) -> bool {
    hay[at..at + needle.len()]
        .iter()
        .zip(needle)
        .all(|(a, b)| chars_eq(*a, *b, case_sensitive))
}

/// First (or last, when `reverse`) index `>= from` where `needle` occurs.
pub(crate) fn find_chars(
    hay: &[char],
    needle: &[char],
    from: usize,
    case_sensitive: bool,
    reverse: bool,
) -> Option<usize> {
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    let last = hay.len() - needle.len();
    if from > last {
        return None;
    }
    let mut candidates = from..=last;
    let hit = |at: &usize| matches_at(hay, needle, *at, case_sensitive);
    if reverse {
        candidates.rev().find(hit)
    } else {
        candidates.find(hit)
    }
}

impl Str {
    pub(crate) fn chars_vec(&self) -> Vec<char> {
        self.str.chars().collect()
    }

    fn case_sensitive_or_default(&self, case_sensitive: Option<bool>) -> bool {
        case_sensitive.unwrap_or(self.config.case_sensitive)
    }

    /// Character index of `needle`, searching from `offset`. With `reverse`
    /// the last occurrence at or after `offset` is returned.
    pub fn position(
        &self,
        needle: impl AsRef<str>,
        offset: Option<usize>,
        case_sensitive: Option<bool>,
        reverse: Option<bool>,
    ) -> Option<usize> {
        let needle: Vec<char> = needle.as_ref().chars().collect();
        find_chars(
            &self.chars_vec(),
            &needle,
            offset.unwrap_or(0),
            self.case_sensitive_or_default(case_sensitive),
            reverse.unwrap_or(self.config.reverse_search),
        )
    }

    /// The part before `needle` (`before`), or from `needle` to the end
    /// (`!before`). `None` when the needle is absent.
    pub fn search(
        &self,
        needle: impl AsRef<str>,
        before: Option<bool>,
        case_sensitive: Option<bool>,
        reverse: Option<bool>,
    ) -> Option<Str> {
        let pos = self.position(needle, None, case_sensitive, reverse)? as i64;
        if before.unwrap_or(self.config.search_before) {
            Some(self.substring(0, Some(pos)))
        } else {
            Some(self.substring(pos, None))
        }
    }

    /// Text before the first `needle`; `include` keeps the needle itself.
    pub fn before(&self, needle: impl AsRef<str>, include: Option<bool>) -> Option<Str> {
        let needle = needle.as_ref();
        let pos = self.position(needle, None, None, Some(false))?;
        let end = if include.unwrap_or(self.config.before_include) {
            pos + needle.chars().count()
        } else {
            pos
        };
        Some(self.substring(0, Some(end as i64)))
    }

    /// Text after the first `needle`; `include` keeps the needle itself.
    pub fn after(&self, needle: impl AsRef<str>, include: Option<bool>) -> Option<Str> {
        let needle = needle.as_ref();
        let pos = self.position(needle, None, None, Some(false))?;
        let start = if include.unwrap_or(self.config.after_include) {
            pos
        } else {
            pos + needle.chars().count()
        };
        Some(self.substring(start as i64, None))
    }

    /// Non-overlapping occurrences of `needle`.
    pub fn substring_count(&self, needle: impl AsRef<str>, case_sensitive: Option<bool>) -> usize {
        let hay = self.chars_vec();
        let needle: Vec<char> = needle.as_ref().chars().collect();
        let case_sensitive = self.case_sensitive_or_default(case_sensitive);
        let mut count = 0;
        let mut from = 0;
        while let Some(at) = find_chars(&hay, &needle, from, case_sensitive, false) {
            count += 1;
            from = at + needle.len();
        }
        count
    }

    /// An empty needle is contained in every string, matching
    /// [`starts_with`](Self::starts_with) and [`ends_with`](Self::ends_with).
    pub fn contains(&self, needle: impl AsRef<str>, case_sensitive: Option<bool>) -> bool {
        let needle = needle.as_ref();
        needle.is_empty() || self.position(needle, None, case_sensitive, Some(false)).is_some()
    }

    pub fn starts_with(&self, needle: impl AsRef<str>, case_sensitive: Option<bool>) -> bool {
        let hay = self.chars_vec();
        let needle: Vec<char> = needle.as_ref().chars().collect();
        needle.len() <= hay.len()
            && matches_at(&hay, &needle, 0, self.case_sensitive_or_default(case_sensitive))
    }

    pub fn ends_with(&self, needle: impl AsRef<str>, case_sensitive: Option<bool>) -> bool {
        let hay = self.chars_vec();
        let needle: Vec<char> = needle.as_ref().chars().collect();
        needle.len() <= hay.len()
            && matches_at(
                &hay,
                &needle,
                hay.len() - needle.len(),
                self.case_sensitive_or_default(case_sensitive),
            )
    }

    /// Replace every occurrence of `search` with `replace`.
    pub fn replace(
        &self,
        search: impl AsRef<str>,
        replace: impl AsRef<str>,
        case_sensitive: Option<bool>,
    ) -> Str {
        let (search, replace) = (search.as_ref(), replace.as_ref());
        if search.is_empty() {
            return self.clone();
        }
        if self.case_sensitive_or_default(case_sensitive) {
            return self.derive(self.str.replace(search, replace));
        }
        let hay = self.chars_vec();
        let needle: Vec<char> = search.chars().collect();
        let mut out = String::with_capacity(self.str.len());
        let mut from = 0;
        while let Some(at) = find_chars(&hay, &needle, from, false, false) {
            out.extend(&hay[from..at]);
            out.push_str(replace);
            from = at + needle.len();
        }
        out.extend(&hay[from..]);
        self.derive(out)
    }
}
