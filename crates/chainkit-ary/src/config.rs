//! Defaults applied when an optional argument is omitted.

use crate::sort::SortFlags;
use serde::{Deserialize, Serialize};

/// Default cap on elements built by `pad` and `Ary::fill`.
pub const DEFAULT_MAX_FILL: usize = 1 << 20;

/// Default argument values for `Ary` methods.
///
/// Every `Ary` carries a shared handle to one of these; instances derived
/// from it inherit the same handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AryConfig {
    /// Strict comparison for `keys`, `has` and `search`.
    pub keys_strict: bool,
    pub json_pretty: bool,
    pub json_depth: usize,
    pub sort_flags: SortFlags,
    /// Keep integer keys in `slice`, `reverse` and `chunk`.
    pub preserve_keys: bool,
    /// Include the matched element in `before` / `before_key`.
    pub before_include: bool,
    /// Include the matched element in `after` / `after_key`.
    pub after_include: bool,
    /// Most elements `pad` will produce.
    pub max_fill: usize,
}

impl Default for AryConfig {
    fn default() -> Self {
        Self {
            keys_strict: true,
            json_pretty: true,
            json_depth: 512,
            sort_flags: SortFlags::default(),
            preserve_keys: false,
            before_include: false,
            after_include: false,
            max_fill: DEFAULT_MAX_FILL,
        }
    }
}
