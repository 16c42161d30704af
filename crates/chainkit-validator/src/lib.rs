//! # Chainkit Validator
//!
//! Stateless string predicates plus a registry that resolves validators by
//! name.
//!
//! ```text
//! "int_between:1,5" ──► Rule::parse ──► Rule::IntBetween(1, 5) ──► check(input)
//!          │
//!          └─ not built-in ──► ValidatorRegistry (custom) ──► NotFound
//! ```
//!
//! Every predicate takes the input as `&str` and returns `bool`; none of
//! them panic on user input. `active_domain` is the only one that touches
//! the network.

pub mod error;
pub mod id_card;
pub mod network;
pub mod predicates;
pub mod registry;
pub mod rule;

pub use error::ValidatorError;
pub use id_card::{
    id_card, id_card_between, id_card_between_on, id_card_max_age, id_card_max_age_on,
    id_card_min_age, id_card_min_age_on,
};
pub use network::{active_domain, domain, email, ip, ipv4, ipv6, phone, url};
pub use predicates::{
    accepted, alpha, alpha_num, boolean, float, float_between, float_max, float_min, int,
    int_between, int_max, int_min, json, num, numeric,
};
pub use registry::{Predicate, ValidatorRegistry, call, get, global, set};
pub use rule::Rule;
