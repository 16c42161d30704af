//! Mainland resident identity numbers and age checks derived from them.
//!
//! An identity number is 17 digits followed by a check character. Digits
//! 7-14 hold the birth date as `YYYYMMDD`.

use chrono::{Datelike, Local, NaiveDate};

const FACTORS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const CHECK_CODES: [u8; 11] = *b"10X98765432";

/// Valid length, digits and check character.
pub fn id_card(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 18 || !bytes[..17].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let checksum: u32 = bytes[..17]
        .iter()
        .zip(FACTORS)
        .map(|(digit, factor)| u32::from(digit - b'0') * factor)
        .sum();
    bytes[17] == CHECK_CODES[(checksum % 11) as usize]
}

/// Whole years since birth plus the signed month-day difference
/// (`MMDD` today minus `MMDD` of birth).
fn age_parts(input: &str, today: NaiveDate) -> Option<(i32, i32)> {
    if !id_card(input) {
        return None;
    }
    let birth_year: i32 = input[6..10].parse().ok()?;
    let birth_month_day: i32 = input[10..14].parse().ok()?;
    let today_month_day = (today.month() * 100 + today.day()) as i32;
    Some((today.year() - birth_year, today_month_day - birth_month_day))
}

fn at_most(years: i32, month_day: i32, max_age: i32) -> bool {
    years < max_age || (years == max_age && month_day <= 0)
}

fn at_least(years: i32, month_day: i32, min_age: i32) -> bool {
    years > min_age || (years == min_age && month_day >= 0)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn id_card_max_age(input: &str, max_age: i32) -> bool {
    id_card_max_age_on(input, max_age, today())
}

pub fn id_card_max_age_on(input: &str, max_age: i32, today: NaiveDate) -> bool {
    age_parts(input, today).is_some_and(|(years, md)| at_most(years, md, max_age))
}

pub fn id_card_min_age(input: &str, min_age: i32) -> bool {
    id_card_min_age_on(input, min_age, today())
}

pub fn id_card_min_age_on(input: &str, min_age: i32, today: NaiveDate) -> bool {
    age_parts(input, today).is_some_and(|(years, md)| at_least(years, md, min_age))
}

pub fn id_card_between(input: &str, min_age: i32, max_age: i32) -> bool {
    id_card_between_on(input, min_age, max_age, today())
}

pub fn id_card_between_on(input: &str, min_age: i32, max_age: i32, today: NaiveDate) -> bool {
    age_parts(input, today)
        .is_some_and(|(years, md)| at_least(years, md, min_age) && at_most(years, md, max_age))
}
