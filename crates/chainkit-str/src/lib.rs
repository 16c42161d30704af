//! # Chainkit Str
//!
//! A string wrapper that always holds valid UTF-8 and measures everything in
//! characters. Byte input from other encodings is decoded on construction;
//! bytes that do not decode are rejected with `StrError::Encoding`.
//!
//! Transformations return a new `Str` carrying the same `StrConfig`;
//! `set`/`set_bytes` mutate in place and chain. Splitting returns a
//! `chainkit_ary::Ary` list.

pub mod compare;
pub mod config;
pub mod encoding;
pub mod error;
pub mod search;
pub mod split;
pub mod str;

pub use config::{DEFAULT_ENCODING_LIST, DEFAULT_MAX_LENGTH, StrConfig};
pub use error::StrError;
pub use str::Str;
