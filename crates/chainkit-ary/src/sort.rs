//! Sort flags and the comparisons behind the sort family.

use crate::ary::Ary;
use crate::key::Key;
use crate::value::{Value, cmp_f64};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// How two elements are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    /// Type-juggling comparison (see `Value::cmp_regular`).
    #[default]
    Regular,
    /// Both sides read as numbers; non-numeric reads as 0.
    Numeric,
    /// Both sides converted to text and compared bytewise.
    String,
    /// Text compared with embedded digit runs ordered by value.
    Natural,
}

/// A sort kind plus the case flag, which only affects `String` and `Natural`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortFlags {
    pub kind: SortKind,
    pub case_insensitive: bool,
}

impl SortFlags {
    pub const REGULAR: SortFlags = SortFlags::new(SortKind::Regular);
    pub const NUMERIC: SortFlags = SortFlags::new(SortKind::Numeric);
    pub const STRING: SortFlags = SortFlags::new(SortKind::String);
    pub const NATURAL: SortFlags = SortFlags::new(SortKind::Natural);

    pub const fn new(kind: SortKind) -> Self {
        Self {
            kind,
            case_insensitive: false,
        }
    }

    /// Same kind, case-insensitive.
    pub const fn ignore_case(self) -> Self {
        Self {
            kind: self.kind,
            case_insensitive: true,
        }
    }

    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match self.kind {
            SortKind::Regular => a.cmp_regular(b),
            SortKind::Numeric => cmp_f64(
                a.to_number().unwrap_or_default(),
                b.to_number().unwrap_or_default(),
            ),
            SortKind::String => {
                if self.case_insensitive {
                    a.to_text().to_lowercase().cmp(&b.to_text().to_lowercase())
                } else {
                    a.to_text().cmp(&b.to_text())
                }
            }
            SortKind::Natural => natural_cmp(&a.to_text(), &b.to_text(), self.case_insensitive),
        }
    }
}

/// Natural-order comparison: `"img2" < "img12"`.
///
/// Whitespace is skipped. Digit runs compare by numeric value unless one of
/// them has a leading zero, in which case they compare left-aligned as
/// fractional parts.
pub fn natural_cmp(a: &str, b: &str, case_insensitive: bool) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        skip_whitespace(&mut left);
        skip_whitespace(&mut right);

        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digits(&mut left);
                let run_b = take_digits(&mut right);
                let ord = if run_a.starts_with('0') || run_b.starts_with('0') {
                    run_a.cmp(&run_b)
                } else {
                    run_a.len().cmp(&run_b.len()).then_with(|| run_a.cmp(&run_b))
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = if case_insensitive {
                    x.to_lowercase().cmp(y.to_lowercase())
                } else {
                    x.cmp(&y)
                };
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

impl SortFlags {
    fn compare_keys(&self, a: &Key, b: &Key) -> Ordering {
        match self.kind {
            SortKind::Regular => a.cmp_regular(b),
            _ => self.compare(&a.to_value(), &b.to_value()),
        }
    }
}

/// The sort family. `sort`/`rsort`/`usort` discard keys and renumber;
/// the `a*`/`k*` variants keep each key with its value. All sorts are
/// stable.
impl Ary {
    fn flags_or_default(&self, flags: Option<SortFlags>) -> SortFlags {
        flags.unwrap_or(self.config.sort_flags)
    }

    fn sort_values_by(&mut self, mut cmp: impl FnMut(&Value, &Value) -> Ordering) -> &mut Self {
        let mut values: Vec<Value> = std::mem::take(&mut self.items).into_values().collect();
        values.sort_by(|a, b| cmp(a, b));
        let items = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v))
            .collect();
        self.set_val(items)
    }

    /// Sort values ascending and renumber.
    pub fn sort(&mut self, flags: Option<SortFlags>) -> &mut Self {
        let flags = self.flags_or_default(flags);
        self.sort_values_by(|a, b| flags.compare(a, b))
    }

    /// Sort values descending and renumber.
    pub fn rsort(&mut self, flags: Option<SortFlags>) -> &mut Self {
        let flags = self.flags_or_default(flags);
        self.sort_values_by(|a, b| flags.compare(b, a))
    }

    /// Sort by value ascending, keeping keys.
    pub fn asort(&mut self, flags: Option<SortFlags>) -> &mut Self {
        let flags = self.flags_or_default(flags);
        self.items.sort_by(|_, a, _, b| flags.compare(a, b));
        self
    }

    /// Sort by value descending, keeping keys.
    pub fn arsort(&mut self, flags: Option<SortFlags>) -> &mut Self {
        let flags = self.flags_or_default(flags);
        self.items.sort_by(|_, a, _, b| flags.compare(b, a));
        self
    }

    /// Sort by key ascending.
    pub fn ksort(&mut self, flags: Option<SortFlags>) -> &mut Self {
        let flags = self.flags_or_default(flags);
        self.items.sort_by(|a, _, b, _| flags.compare_keys(a, b));
        self
    }

    /// Sort by key descending.
    pub fn krsort(&mut self, flags: Option<SortFlags>) -> &mut Self {
        let flags = self.flags_or_default(flags);
        self.items.sort_by(|a, _, b, _| flags.compare_keys(b, a));
        self
    }

    /// Sort values with a user comparator and renumber.
    pub fn usort(&mut self, cmp: impl FnMut(&Value, &Value) -> Ordering) -> &mut Self {
        self.sort_values_by(cmp)
    }

    /// Sort by value with a user comparator, keeping keys.
    pub fn uasort(&mut self, mut cmp: impl FnMut(&Value, &Value) -> Ordering) -> &mut Self {
        self.items.sort_by(|_, a, _, b| cmp(a, b));
        self
    }

    /// Sort by key with a user comparator.
    pub fn uksort(&mut self, mut cmp: impl FnMut(&Key, &Key) -> Ordering) -> &mut Self {
        self.items.sort_by(|a, _, b, _| cmp(a, b));
        self
    }
}
