//! Built-in rules addressed by name.
//!
//! A rule string is `name` or `name:arg1,arg2`. Names match ignoring case,
//! `_` and `-`, so `intBetween`, `int_between` and `IntBetween` are the same
//! rule.

use crate::error::ValidatorError;
use crate::{id_card, network, predicates};

/// A built-in validator with its arguments bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Accepted,
    Boolean,
    Alpha,
    AlphaNum,
    Num(Option<usize>),
    Numeric,
    Int,
    IntMax(i64),
    IntMin(i64),
    IntBetween(i64, i64),
    Float,
    FloatMax(f64),
    FloatMin(f64),
    FloatBetween(f64, f64),
    Json,
    Ip,
    Ipv4,
    Ipv6,
    Domain,
    ActiveDomain,
    Url(Vec<String>),
    Email,
    Phone,
    IdCard,
    IdCardMaxAge(i32),
    IdCardMinAge(i32),
    IdCardBetween(i32, i32),
}

/// Canonical built-in names and how many arguments each takes
/// (`min..=max`; `usize::MAX` for "any number").
const BUILTINS: &[(&str, usize, usize)] = &[
    ("accepted", 0, 0),
    ("boolean", 0, 0),
    ("alpha", 0, 0),
    ("alphanum", 0, 0),
    ("num", 0, 1),
    ("numeric", 0, 0),
    ("int", 0, 0),
    ("intmax", 1, 1),
    ("intmin", 1, 1),
    ("intbetween", 2, 2),
    ("float", 0, 0),
    ("floatmax", 1, 1),
    ("floatmin", 1, 1),
    ("floatbetween", 2, 2),
    ("json", 0, 0),
    ("ip", 0, 0),
    ("ipv4", 0, 0),
    ("ipv6", 0, 0),
    ("domain", 0, 0),
    ("activedomain", 0, 0),
    ("url", 0, usize::MAX),
    ("email", 0, 0),
    ("phone", 0, 0),
    ("idcard", 0, 0),
    ("idcardmaxage", 1, 1),
    ("idcardminage", 1, 1),
    ("idcardbetween", 2, 2),
];

fn canonical(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Whether `name` (without arguments) is a built-in rule.
pub fn is_builtin(name: &str) -> bool {
    let name = canonical(name);
    BUILTINS.iter().any(|(builtin, _, _)| *builtin == name)
}

/// Canonical names of every built-in rule.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _, _)| *name)
}

struct Args<'a> {
    rule: &'a str,
    values: Vec<&'a str>,
}

impl Args<'_> {
    fn invalid(&self, reason: impl Into<String>) -> ValidatorError {
        ValidatorError::InvalidRule {
            rule: self.rule.to_string(),
            reason: reason.into(),
        }
    }

    fn parse<T: std::str::FromStr>(&self, index: usize) -> Result<T, ValidatorError> {
        let raw = self.values.get(index).copied().unwrap_or_default();
        raw.parse()
            .map_err(|_| self.invalid(format!("argument {} `{raw}` is not a number", index + 1)))
    }
}

impl Rule {
    /// Parse `name[:args]`. Returns `Ok(None)` when the name is not a
    /// built-in rule.
    pub fn parse(text: &str) -> Result<Option<Rule>, ValidatorError> {
        let (name, raw_args) = match text.split_once(':') {
            Some((name, args)) => (name.trim(), Some(args)),
            None => (text.trim(), None),
        };
        let key = canonical(name);
        let Some(&(_, min, max)) = BUILTINS.iter().find(|(builtin, _, _)| *builtin == key) else {
            return Ok(None);
        };
        let values: Vec<&str> = raw_args
            .map(|raw| raw.split(',').map(str::trim).filter(|a| !a.is_empty()).collect())
            .unwrap_or_default();
        let args = Args { rule: text, values };
        if args.values.len() < min || args.values.len() > max {
            let expected = if min == max {
                format!("{min}")
            } else if max == usize::MAX {
                format!("at least {min}")
            } else {
                format!("{min} to {max}")
            };
            return Err(args.invalid(format!(
                "expected {expected} argument(s), got {}",
                args.values.len()
            )));
        }

        let rule = match key.as_str() {
            "accepted" => Rule::Accepted,
            "boolean" => Rule::Boolean,
            "alpha" => Rule::Alpha,
            "alphanum" => Rule::AlphaNum,
            "num" => Rule::Num(if args.values.is_empty() {
                None
            } else {
                Some(args.parse(0)?)
            }),
            "numeric" => Rule::Numeric,
            "int" => Rule::Int,
            "intmax" => Rule::IntMax(args.parse(0)?),
            "intmin" => Rule::IntMin(args.parse(0)?),
            "intbetween" => Rule::IntBetween(args.parse(0)?, args.parse(1)?),
            "float" => Rule::Float,
            "floatmax" => Rule::FloatMax(args.parse(0)?),
            "floatmin" => Rule::FloatMin(args.parse(0)?),
            "floatbetween" => Rule::FloatBetween(args.parse(0)?, args.parse(1)?),
            "json" => Rule::Json,
            "ip" => Rule::Ip,
            "ipv4" => Rule::Ipv4,
            "ipv6" => Rule::Ipv6,
            "domain" => Rule::Domain,
            "activedomain" => Rule::ActiveDomain,
            "url" => Rule::Url(args.values.iter().map(ToString::to_string).collect()),
            "email" => Rule::Email,
            "phone" => Rule::Phone,
            "idcard" => Rule::IdCard,
            "idcardmaxage" => Rule::IdCardMaxAge(args.parse(0)?),
            "idcardminage" => Rule::IdCardMinAge(args.parse(0)?),
            "idcardbetween" => Rule::IdCardBetween(args.parse(0)?, args.parse(1)?),
            _ => return Ok(None),
        };
        Ok(Some(rule))
    }

    pub fn check(&self, input: &str) -> bool {
        match self {
            Rule::Accepted => predicates::accepted(input),
            Rule::Boolean => predicates::boolean(input),
            Rule::Alpha => predicates::alpha(input),
            Rule::AlphaNum => predicates::alpha_num(input),
            Rule::Num(len) => predicates::num(input, *len),
            Rule::Numeric => predicates::numeric(input),
            Rule::Int => predicates::int(input),
            Rule::IntMax(max) => predicates::int_max(input, *max),
            Rule::IntMin(min) => predicates::int_min(input, *min),
            Rule::IntBetween(min, max) => predicates::int_between(input, *min, *max),
            Rule::Float => predicates::float(input),
            Rule::FloatMax(max) => predicates::float_max(input, *max),
            Rule::FloatMin(min) => predicates::float_min(input, *min),
            Rule::FloatBetween(min, max) => predicates::float_between(input, *min, *max),
            Rule::Json => predicates::json(input),
            Rule::Ip => network::ip(input),
            Rule::Ipv4 => network::ipv4(input),
            Rule::Ipv6 => network::ipv6(input),
            Rule::Domain => network::domain(input),
            Rule::ActiveDomain => network::active_domain(input),
            Rule::Url(schemes) if schemes.is_empty() => network::url(input, None),
            Rule::Url(schemes) => {
                let schemes: Vec<&str> = schemes.iter().map(String::as_str).collect();
                network::url(input, Some(schemes.as_slice()))
            }
            Rule::Email => network::email(input),
            Rule::Phone => network::phone(input),
            Rule::IdCard => id_card::id_card(input),
            Rule::IdCardMaxAge(max) => id_card::id_card_max_age(input, *max),
            Rule::IdCardMinAge(min) => id_card::id_card_min_age(input, *min),
            Rule::IdCardBetween(min, max) => id_card::id_card_between(input, *min, *max),
        }
    }
}
