//! Format predicates over plain strings: booleans, character classes and
//! numbers.

use regex::Regex;
use std::sync::OnceLock;

const TRUTHY: [&str; 4] = ["1", "true", "on", "yes"];
const FALSY: [&str; 4] = ["0", "false", "off", "no"];

fn trimmed(input: &str) -> &str {
    input.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\0'))
}

fn float_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("float regex must compile")
    })
}

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("numeric regex must compile")
    })
}

/// `1`, `true`, `on` or `yes`, ignoring case and surrounding whitespace.
pub fn accepted(input: &str) -> bool {
    let value = trimmed(input);
    TRUTHY.iter().any(|t| value.eq_ignore_ascii_case(t))
}

/// Any accepted value, or `0`, `false`, `off`, `no`. Empty (or
/// whitespace-only) input reads as false and so counts as a boolean.
pub fn boolean(input: &str) -> bool {
    let value = trimmed(input);
    value.is_empty() || accepted(value) || FALSY.iter().any(|f| value.eq_ignore_ascii_case(f))
}

/// Non-empty, ASCII letters only.
pub fn alpha(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Non-empty, ASCII letters and digits only.
pub fn alpha_num(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Non-empty, ASCII digits only, optionally of exactly `len` digits.
pub fn num(input: &str, len: Option<usize>) -> bool {
    let digits = !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit());
    digits && len.is_none_or(|len| input.len() == len)
}

/// Decimal number with optional sign, fraction and exponent. Leading
/// whitespace is allowed, trailing whitespace is not.
pub fn numeric(input: &str) -> bool {
    numeric_re().is_match(input)
}

fn parse_int(input: &str) -> Option<i64> {
    let value = trimmed(input);
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    value.parse().ok()
}

/// Integer that fits in 64 bits, without leading zeros. Surrounding
/// whitespace is ignored.
pub fn int(input: &str) -> bool {
    parse_int(input).is_some()
}

pub fn int_max(input: &str, max: i64) -> bool {
    parse_int(input).is_some_and(|n| n <= max)
}

pub fn int_min(input: &str, min: i64) -> bool {
    parse_int(input).is_some_and(|n| n >= min)
}

pub fn int_between(input: &str, min: i64, max: i64) -> bool {
    parse_int(input).is_some_and(|n| (min..=max).contains(&n))
}

fn parse_float(input: &str) -> Option<f64> {
    let value = trimmed(input);
    if !float_re().is_match(value) {
        return None;
    }
    value.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Finite decimal number; integers qualify. Surrounding whitespace is
/// ignored.
pub fn float(input: &str) -> bool {
    parse_float(input).is_some()
}

pub fn float_max(input: &str, max: f64) -> bool {
    parse_float(input).is_some_and(|f| f <= max)
}

pub fn float_min(input: &str, min: f64) -> bool {
    parse_float(input).is_some_and(|f| f >= min)
}

pub fn float_between(input: &str, min: f64, max: f64) -> bool {
    parse_float(input).is_some_and(|f| f >= min && f <= max)
}

/// Well-formed JSON text of any type.
pub fn json(input: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_values() {
        for ok in ["yes", "Yes", "yEs", "true", "on", "1", " yes "] {
            assert!(accepted(ok), "{ok:?} should be accepted");
        }
        for bad in [" y e s ", "off", "0", "other", ""] {
            assert!(!accepted(bad), "{bad:?} should not be accepted");
        }
    }

    #[test]
    fn boolean_values() {
        for ok in ["yes", "Yes", "true", "on", "1", " yes ", "off", "no", "false", "0"] {
            assert!(boolean(ok), "{ok:?} should be boolean");
        }
        assert!(!boolean(" y e s "));
        assert!(!boolean("other"));
        assert!(boolean(""));
        assert!(boolean("  \t"));
        assert!(!accepted(""));
    }

    #[test]
    fn character_classes() {
        assert!(alpha("test"));
        assert!(alpha("TEST"));
        assert!(!alpha(" test "));
        assert!(!alpha("test1"));
        assert!(!alpha("测试test"));
        assert!(!alpha("\\test\\"));
        assert!(!alpha(""));

        assert!(alpha_num("test1"));
        assert!(alpha_num("1test1"));
        assert!(!alpha_num(" test "));
        assert!(!alpha_num("测试test"));
    }

    #[test]
    fn digit_strings() {
        assert!(num("123", None));
        assert!(num("01239716526350713274912465110000", None));
        assert!(!num("9527.0", None));
        assert!(!num("-12", None));
        assert!(!num(" 12 ", None));
        assert!(!num("1ABC", None));
        assert!(num("123", Some(3)));
        assert!(num("0123", Some(4)));
        assert!(!num("1234", Some(3)));
    }

    #[test]
    fn numeric_strings() {
        assert!(numeric("123"));
        assert!(numeric("-123"));
        assert!(numeric("00000"));
        assert!(numeric("999999999999999999999999999999999999"));
        assert!(numeric("09527.0"));
        assert!(numeric(" 1e3"));
        assert!(!numeric("1.0.2.3.4"));
        assert!(!numeric("1ABC"));
        assert!(!numeric(" 123 "));
    }

    #[test]
    fn integers() {
        assert!(int("123"));
        assert!(int("-123"));
        assert!(int(" 123 "));
        assert!(int("0"));
        assert!(!int("0123"));
        assert!(!int("123-"));
        assert!(!int("123.1"));
        assert!(!int("9223372036854775808"));
        assert!(!int("other"));

        assert!(int_max("123", 124));
        assert!(int_max("123", 123));
        assert!(int_max("-123", 123));
        assert!(!int_max("123", -123));
        assert!(!int_max("123", 122));

        assert!(int_min("124", 123));
        assert!(int_min("123", 123));
        assert!(!int_min("122", 123));
        assert!(!int_min("-122", 123));

        assert!(int_between("123", 123, 123));
        assert!(int_between("123", 122, 124));
        assert!(!int_between("123", 124, 122));
        assert!(!int_between("256", 124, 255));
        assert!(!int_between("123.9", 124, 255));
    }

    #[test]
    fn floats() {
        for ok in ["123", "-123", " 123 ", "123.0", "0123", ".5", "1e3"] {
            assert!(float(ok), "{ok:?} should be a float");
        }
        for bad in ["123-", "other", "inf", "NaN", "1e999", ""] {
            assert!(!float(bad), "{bad:?} should not be a float");
        }

        assert!(float_max("123.5", 123.5));
        assert!(float_max("123", 123.0));
        assert!(!float_max("124", 123.9));
        assert!(float_min("123.5", 123.5));
        assert!(!float_min("122", 123.9));
        assert!(float_between("123", 123.0, 123.0));
        assert!(float_between("123.0", 122.9, 123.1));
        assert!(!float_between("123", 123.0, 122.0));
        assert!(!float_between("255.1", 124.0, 255.0));
    }

    #[test]
    fn json_documents() {
        let doc = r#"{
    "name": "zane",
    "email": "pi@0php.net"
}"#;
        assert!(json(doc));
        assert!(json("[1, 2]"));
        assert!(!json("other"));
    }
}
