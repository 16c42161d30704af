//! Defaults applied when an optional argument is omitted.

use crate::encoding::decodes_as;
use serde::{Deserialize, Serialize};

/// Encodings tried by `Str::detect_encoding`, in order.
pub const DEFAULT_ENCODING_LIST: [&str; 4] = ["ASCII", "UTF-8", "GB2312", "GBK"];

/// Default cap on characters built by `repeat` and the pad methods.
pub const DEFAULT_MAX_LENGTH: usize = 1 << 28;

/// Default argument values for `Str` methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrConfig {
    pub encoding_list: Vec<String>,
    pub case_sensitive: bool,
    /// `search` returns the part before the needle.
    pub search_before: bool,
    /// `search` matches the last occurrence.
    pub reverse_search: bool,
    pub before_include: bool,
    pub after_include: bool,
    /// Characters stripped by `trim`, `ltrim` and `rtrim`.
    pub trim_chars: String,
    pub truncate_append: String,
    pub repeat_separator: String,
    pub explode_limit: Option<i64>,
    pub split_limit: Option<usize>,
    /// bcrypt work factor for `password_hash`.
    pub password_cost: u32,
    /// `md5_digest` returns the raw digest instead of hex text.
    pub md5_raw_output: bool,
    pub sha1_raw_output: bool,
    /// Longest result, in characters, that `repeat` and the pad methods
    /// will build.
    pub max_length: usize,
}

impl Default for StrConfig {
    fn default() -> Self {
        Self {
            encoding_list: DEFAULT_ENCODING_LIST.iter().map(ToString::to_string).collect(),
            case_sensitive: true,
            search_before: true,
            reverse_search: false,
            before_include: false,
            after_include: false,
            trim_chars: " \t\n\r\0\x0B".to_string(),
            truncate_append: String::new(),
            repeat_separator: String::new(),
            explode_limit: None,
            split_limit: None,
            password_cost: bcrypt::DEFAULT_COST,
            md5_raw_output: false,
            sha1_raw_output: false,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl StrConfig {
    /// First entry of `encoding_list` that decodes `bytes` without errors.
    pub fn detect_encoding(&self, bytes: &[u8]) -> Option<&str> {
        self.encoding_list
            .iter()
            .map(String::as_str)
            .find(|label| decodes_as(bytes, label))
    }
}
