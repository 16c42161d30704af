//! Splitting into `Ary` lists.

use crate::error::StrError;
use crate::str::Str;
use chainkit_ary::Ary;
use regex::Regex;

impl Str {
    /// Split on `delimiter`.
    ///
    /// A positive `limit` caps the number of elements, the last one holding
    /// the rest of the text. A negative `limit` drops that many trailing
    /// elements. A zero `limit` counts as 1. An empty delimiter yields the
    /// whole text as a single element.
    pub fn explode(&self, delimiter: impl AsRef<str>, limit: Option<i64>) -> Ary {
        let delimiter = delimiter.as_ref();
        if delimiter.is_empty() {
            return Ary::from(vec![self.str.clone()]);
        }
        let parts: Vec<&str> = match limit.or(self.config.explode_limit) {
            None => self.str.split(delimiter).collect(),
            Some(n) if n >= 0 => {
                let n = usize::try_from(n.max(1)).unwrap_or(usize::MAX);
                self.str.splitn(n, delimiter).collect()
            }
            Some(n) => {
                let mut all: Vec<&str> = self.str.split(delimiter).collect();
                let keep = all
                    .len()
                    .saturating_sub(usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX));
                all.truncate(keep);
                all
            }
        };
        Ary::from(parts)
    }

    /// Split on matches of the regular expression `pattern`. A `limit` of
    /// 0 (or none configured) means no limit.
    pub fn split(&self, pattern: &str, limit: Option<usize>) -> Result<Ary, StrError> {
        let regex = Regex::new(pattern)?;
        let parts: Vec<&str> = match limit.or(self.config.split_limit) {
            None | Some(0) => regex.split(&self.str).collect(),
            Some(n) => regex.splitn(&self.str, n).collect(),
        };
        Ok(Ary::from(parts))
    }

    /// One string per character.
    pub fn to_array(&self) -> Vec<String> {
        self.str.chars().map(String::from).collect()
    }

    pub fn to_ary(&self) -> Ary {
        Ary::from(self.to_array())
    }
}
