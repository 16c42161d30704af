use crate::cli::{BoundArgs, DigestArgs, NeedleArgs, OtherArgs, PadArgs, StrCommand, TextArgs, TrimArgs};
use crate::support::{fail, print_result, write_raw};
use chainkit_ary::Value;
use chainkit_str::{Str, StrConfig};
use std::cmp::Ordering;
use std::sync::Arc;

pub fn run(op: &str, command: StrCommand, config: Arc<StrConfig>, json_output: bool) {
    let result = match command {
        StrCommand::Md5(DigestArgs { text, raw }) if raw || config.md5_raw_output => {
            write_raw(&Str::with_config(text, config).to_md5_raw());
            return;
        }
        StrCommand::Sha1(DigestArgs { text, raw }) if raw || config.sha1_raw_output => {
            write_raw(&Str::with_config(text, config).to_sha1_raw());
            return;
        }
        command => apply(command, &config),
    };
    tracing::debug!(op, "str operation finished");
    print_result(op, &result, json_output);
}

fn apply(command: StrCommand, config: &Arc<StrConfig>) -> Value {
    let s = |text: String| Str::with_config(text, Arc::clone(config));
    let case = |ignore_case: bool| ignore_case.then_some(false);
    match command {
        StrCommand::Len(TextArgs { text }) => count(s(text).len()),
        StrCommand::Upper(TextArgs { text }) => string(s(text).to_upper_case()),
        StrCommand::Lower(TextArgs { text }) => string(s(text).to_lower_case()),
        StrCommand::Title(TextArgs { text }) => string(s(text).to_title_case()),
        StrCommand::UpperFirst(TextArgs { text }) => string(s(text).upper_first()),
        StrCommand::LowerFirst(TextArgs { text }) => string(s(text).lower_first()),
        StrCommand::Reverse(TextArgs { text }) => string(s(text).reverse()),
        StrCommand::Trim(TrimArgs { text, chars }) => string(s(text).trim(chars.as_deref())),
        StrCommand::Ltrim(TrimArgs { text, chars }) => string(s(text).ltrim(chars.as_deref())),
        StrCommand::Rtrim(TrimArgs { text, chars }) => string(s(text).rtrim(chars.as_deref())),
        StrCommand::Substring {
            text,
            start,
            length,
        } => string(s(text).substring(start, length)),
        StrCommand::Truncate {
            text,
            length,
            append,
        } => string(s(text).truncate(length, append.as_deref())),
        StrCommand::Repeat {
            text,
            times,
            separator,
        } => string(
            s(text)
                .repeat(times, separator.as_deref())
                .unwrap_or_else(|e| fail(e, 1)),
        ),
        StrCommand::Replace {
            text,
            search,
            replace,
            ignore_case,
        } => string(s(text).replace(search, replace, case(ignore_case))),
        StrCommand::PadLeft(PadArgs { text, length, pad }) => string(
            s(text)
                .pad_left(length, pad.as_deref())
                .unwrap_or_else(|e| fail(e, 1)),
        ),
        StrCommand::PadRight(PadArgs { text, length, pad }) => string(
            s(text)
                .pad_right(length, pad.as_deref())
                .unwrap_or_else(|e| fail(e, 1)),
        ),
        StrCommand::Explode {
            text,
            delimiter,
            limit,
        } => Value::from(s(text).explode(delimiter, limit)),
        StrCommand::Split {
            text,
            pattern,
            limit,
        } => Value::from(s(text).split(&pattern, limit).unwrap_or_else(|e| fail(e, 1))),
        StrCommand::Chars(TextArgs { text }) => Value::from(s(text).to_ary()),
        StrCommand::Position {
            text,
            needle,
            offset,
            ignore_case,
            last,
        } => s(text)
            .position(needle, offset, case(ignore_case), last.then_some(true))
            .map_or(Value::Null, count),
        StrCommand::Search(NeedleArgs {
            text,
            needle,
            ignore_case,
        }) => found(s(text).search(needle, None, case(ignore_case), None)),
        StrCommand::Before(BoundArgs {
            text,
            needle,
            include,
        }) => found(s(text).before(needle, include.then_some(true))),
        StrCommand::After(BoundArgs {
            text,
            needle,
            include,
        }) => found(s(text).after(needle, include.then_some(true))),
        StrCommand::Count(NeedleArgs {
            text,
            needle,
            ignore_case,
        }) => count(s(text).substring_count(needle, case(ignore_case))),
        StrCommand::Contains(NeedleArgs {
            text,
            needle,
            ignore_case,
        }) => Value::Bool(s(text).contains(needle, case(ignore_case))),
        StrCommand::StartsWith(NeedleArgs {
            text,
            needle,
            ignore_case,
        }) => Value::Bool(s(text).starts_with(needle, case(ignore_case))),
        StrCommand::EndsWith(NeedleArgs {
            text,
            needle,
            ignore_case,
        }) => Value::Bool(s(text).ends_with(needle, case(ignore_case))),
        StrCommand::Equals(OtherArgs { text, other }) => Value::Bool(s(text).equals(other)),
        StrCommand::Comp {
            text,
            other,
            length,
            ignore_case,
        } => ordering(s(text).comp(other, case(ignore_case), length)),
        StrCommand::NatComp(OtherArgs { text, other }) => ordering(s(text).nat_comp(other, None)),
        StrCommand::Base64(TextArgs { text }) => string(s(text).to_base64()),
        StrCommand::Unbase64(TextArgs { text }) => {
            string(s(text).from_base64().unwrap_or_else(|e| fail(e, 1)))
        }
        StrCommand::Md5(DigestArgs { text, .. }) => Value::from(s(text).to_md5()),
        StrCommand::Sha1(DigestArgs { text, .. }) => Value::from(s(text).to_sha1()),
        StrCommand::Sha256(TextArgs { text }) => Value::from(s(text).to_sha256()),
        StrCommand::PasswordHash { text, cost } => {
            Value::from(s(text).password_hash(cost).unwrap_or_else(|e| fail(e, 1)))
        }
        StrCommand::PasswordVerify { text, hash } => Value::Bool(s(text).password_verify(&hash)),
    }
}

fn string(s: Str) -> Value {
    Value::from(s.into_string())
}

fn found(s: Option<Str>) -> Value {
    s.map_or(Value::Null, string)
}

fn count(n: usize) -> Value {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

fn ordering(order: Ordering) -> Value {
    Value::Int(order as i64)
}
