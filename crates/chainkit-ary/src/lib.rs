//! # Chainkit Ary
//!
//! An insertion-ordered associative collection with a chainable API.
//!
//! Keys are integers or strings. A string that is the canonical form of an
//! integer (`"7"`, `"-3"`, not `"07"` or `"+3"`) is stored as the integer,
//! so `set("7", ..)` and `set(7, ..)` address the same slot. Appending
//! without a key uses one more than the largest integer key seen so far.
//!
//! ## Shape of the API
//!
//! ```text
//! Ary                     ← IndexMap<Key, Value> + next index + Arc<AryConfig>
//!   │
//!   ├─ mutation           → &mut Ary     (push, set, sort, map, merge, …)
//!   ├─ transformation     → Ary          (filter, slice, chunk, diff, column, …)
//!   ├─ extraction         → Value / Key  (first, search, sum, reduce, …)
//!   └─ json               ⇄ String       (to_json, from_json)
//! ```
//!
//! Optional arguments are `Option<_>`; `None` falls back to the instance's
//! `AryConfig`. Derived collections share the config handle of their source.

pub mod ary;
pub mod config;
pub mod error;
pub mod json;
pub mod key;
pub mod random;
pub mod set_ops;
pub mod slice;
pub mod sort;
pub mod value;

pub use ary::Ary;
pub use config::{AryConfig, DEFAULT_MAX_FILL};
pub use error::AryError;
pub use indexmap::IndexMap;
pub use key::Key;
pub use sort::{SortFlags, SortKind, natural_cmp};
pub use value::Value;
