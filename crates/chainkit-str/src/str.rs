//! The `Str` wrapper: construction, access, case mapping and transforms.
//!
//! Lengths, offsets and positions count characters, not bytes.

use crate::config::StrConfig;
use crate::error::StrError;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Owned UTF-8 text with chainable, character-oriented methods.
#[derive(Clone)]
pub struct Str {
    pub(crate) str: String,
    pub(crate) config: Arc<StrConfig>,
}

fn shared_default_config() -> Arc<StrConfig> {
    static DEFAULT: OnceLock<Arc<StrConfig>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(StrConfig::default()))
        .clone()
}

/// Resolve a character offset/length pair against `len`. Negative offsets
/// count from the end; a negative length stops that many characters before
/// the end.
pub(crate) fn char_range(len: usize, start: i64, length: Option<i64>) -> (usize, usize) {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let from = if start < 0 {
        (len_i + start).max(0)
    } else {
        start.min(len_i)
    };
    let to = match length {
        None => len_i,
        Some(l) if l < 0 => (len_i + l).max(from),
        Some(l) => from.saturating_add(l).min(len_i),
    };
    (from as usize, to as usize)
}

impl Str {
    pub fn new(str: impl Into<String>) -> Self {
        Self::with_config(str, shared_default_config())
    }

    pub fn with_config(str: impl Into<String>, config: Arc<StrConfig>) -> Self {
        Self {
            str: str.into(),
            config,
        }
    }

    /// A new instance sharing this instance's configuration.
    pub(crate) fn derive(&self, str: impl Into<String>) -> Str {
        Str {
            str: str.into(),
            config: Arc::clone(&self.config),
        }
    }

    pub fn config(&self) -> &StrConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: Arc<StrConfig>) -> &mut Self {
        self.config = config;
        self
    }

    pub fn str(&self) -> &str {
        &self.str
    }

    pub fn into_string(self) -> String {
        self.str
    }

    pub fn set(&mut self, str: impl Into<String>) -> &mut Self {
        self.str = str.into();
        self
    }

    /// Replace the content with `bytes`, which must be valid UTF-8.
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self, StrError> {
        let text = std::str::from_utf8(bytes).map_err(|_| StrError::utf8())?;
        self.str = text.to_string();
        Ok(self)
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.str.chars().count()
    }

    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.str.is_empty()
    }

    // ── Case ──

    pub fn to_upper_case(&self) -> Str {
        self.derive(self.str.to_uppercase())
    }

    pub fn to_lower_case(&self) -> Str {
        self.derive(self.str.to_lowercase())
    }

    /// Upper-case the first letter of every word and lower-case the rest.
    pub fn to_title_case(&self) -> Str {
        let mut out = String::with_capacity(self.str.len());
        let mut in_word = false;
        for c in self.str.chars() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = c.is_alphanumeric() || c == '\'';
        }
        self.derive(out)
    }

    pub fn upper_first(&self) -> Str {
        let mut chars = self.str.chars();
        match chars.next() {
            Some(first) => self.derive(first.to_uppercase().chain(chars).collect::<String>()),
            None => self.clone(),
        }
    }

    pub fn lower_first(&self) -> Str {
        let mut chars = self.str.chars();
        match chars.next() {
            Some(first) => self.derive(first.to_lowercase().chain(chars).collect::<String>()),
            None => self.clone(),
        }
    }

    // ── Transforms ──

    /// Characters `start..start+length`, with negative `start`/`length`
    /// counting from the end.
    pub fn substring(&self, start: i64, length: Option<i64>) -> Str {
        let (from, to) = char_range(self.len(), start, length);
        self.derive(
            self.str
                .chars()
                .skip(from)
                .take(to - from)
                .collect::<String>(),
        )
    }

    /// Cut to `length` characters, adding `append` only when something was
    /// cut.
    pub fn truncate(&self, length: usize, append: Option<&str>) -> Str {
        if self.len() <= length {
            return self.clone();
        }
        let append = append.unwrap_or(&self.config.truncate_append);
        let mut out: String = self.str.chars().take(length).collect();
        out.push_str(append);
        self.derive(out)
    }

    /// `times` copies joined by `separator`. Fails with `TooLarge` when the
    /// result would pass the configured `max_length`.
    pub fn repeat(&self, times: usize, separator: Option<&str>) -> Result<Str, StrError> {
        let separator = separator.unwrap_or(&self.config.repeat_separator);
        if times == 0 || (self.str.is_empty() && separator.is_empty()) {
            return Ok(self.derive(String::new()));
        }
        let requested = self
            .len()
            .checked_mul(times)
            .and_then(|body| {
                let gaps = times.saturating_sub(1);
                separator.chars().count().checked_mul(gaps)?.checked_add(body)
            })
            .unwrap_or(usize::MAX);
        self.within_limit(requested)?;
        let mut out = String::with_capacity(self.str.len().saturating_mul(times));
        for i in 0..times {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&self.str);
        }
        Ok(self.derive(out))
    }

    pub fn reverse(&self) -> Str {
        self.derive(self.str.chars().rev().collect::<String>())
    }

    /// Strip `chars` (or the configured set) from both ends.
    pub fn trim(&self, chars: Option<&str>) -> Str {
        let set = chars.unwrap_or(&self.config.trim_chars);
        self.derive(self.str.trim_matches(|c: char| set.contains(c)))
    }

    pub fn ltrim(&self, chars: Option<&str>) -> Str {
        let set = chars.unwrap_or(&self.config.trim_chars);
        self.derive(self.str.trim_start_matches(|c: char| set.contains(c)))
    }

    pub fn rtrim(&self, chars: Option<&str>) -> Str {
        let set = chars.unwrap_or(&self.config.trim_chars);
        self.derive(self.str.trim_end_matches(|c: char| set.contains(c)))
    }

    /// Pad on the left to `length` characters, cycling through `pad`
    /// (a space when omitted).
    pub fn pad_left(&self, length: usize, pad: Option<&str>) -> Result<Str, StrError> {
        let padding = self.padding(length, pad)?;
        Ok(self.derive(padding + &self.str))
    }

    pub fn pad_right(&self, length: usize, pad: Option<&str>) -> Result<Str, StrError> {
        let padding = self.padding(length, pad)?;
        Ok(self.derive(self.str.clone() + &padding))
    }

    fn padding(&self, length: usize, pad: Option<&str>) -> Result<String, StrError> {
        let pad = pad.unwrap_or(" ");
        let missing = length.saturating_sub(self.len());
        if missing == 0 || pad.is_empty() {
            return Ok(String::new());
        }
        self.within_limit(length)?;
        Ok(pad.chars().cycle().take(missing).collect())
    }

    fn within_limit(&self, requested: usize) -> Result<(), StrError> {
        let limit = self.config.max_length;
        if requested > limit {
            return Err(StrError::TooLarge { requested, limit });
        }
        Ok(())
    }
}

impl Default for Str {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl PartialEq for Str {
    fn eq(&self, other: &Self) -> bool {
        self.str == other.str
    }
}

impl Eq for Str {}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.str == other
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.str == *other
    }
}

impl AsRef<str> for Str {
    fn as_ref(&self) -> &str {
        &self.str
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Str").field(&self.str).finish()
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.str)
    }
}

impl From<&str> for Str {
    fn from(value: &str) -> Self {
        Str::new(value)
    }
}

impl From<String> for Str {
    fn from(value: String) -> Self {
        Str::new(value)
    }
}

impl From<Str> for String {
    fn from(value: Str) -> Self {
        value.str
    }
}
