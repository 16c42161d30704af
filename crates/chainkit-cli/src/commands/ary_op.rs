use crate::cli::{
    AryCommand, BoundValueArgs, DocArgs, KeysArgs, OtherDocArgs, PickArgs, SortArgs, ValueArgs,
};
use crate::support::{fail, print_result};
use chainkit_ary::{Ary, AryConfig, Key, SortFlags, Value};
use std::sync::Arc;

pub fn run(op: &str, command: AryCommand, config: Arc<AryConfig>, json_output: bool) {
    let result = apply(command, &config);
    tracing::debug!(op, "ary operation finished");
    print_result(op, &result, json_output);
}

fn apply(command: AryCommand, config: &Arc<AryConfig>) -> Value {
    let parse = |name: &str, document: &str| {
        Ary::from_json_with(document, Arc::clone(config))
            .unwrap_or_else(|e| fail(format!("invalid {name}: {e}"), 1))
    };
    let doc = |document: String| parse("document", &document);
    let strict = |strict: bool| strict.then_some(true);
    match command {
        AryCommand::Count(DocArgs { document }) => {
            Value::Int(i64::try_from(doc(document).count()).unwrap_or(i64::MAX))
        }
        AryCommand::Keys(DocArgs { document }) => Value::from(doc(document).keys(None, None)),
        AryCommand::Values(DocArgs { document }) => Value::from(doc(document).values()),
        AryCommand::First(DocArgs { document }) => {
            doc(document).first().cloned().unwrap_or_default()
        }
        AryCommand::Last(DocArgs { document }) => doc(document).last().cloned().unwrap_or_default(),
        AryCommand::Sort(args) => sorted(doc(args.document.clone()), &args, Ary::sort),
        AryCommand::Rsort(args) => sorted(doc(args.document.clone()), &args, Ary::rsort),
        AryCommand::Asort(args) => sorted(doc(args.document.clone()), &args, Ary::asort),
        AryCommand::Arsort(args) => sorted(doc(args.document.clone()), &args, Ary::arsort),
        AryCommand::Ksort(args) => sorted(doc(args.document.clone()), &args, Ary::ksort),
        AryCommand::Krsort(args) => sorted(doc(args.document.clone()), &args, Ary::krsort),
        AryCommand::Shuffle(DocArgs { document }) => chained(doc(document).shuffle()),
        AryCommand::Reverse(KeysArgs {
            document,
            preserve_keys,
        }) => Value::from(doc(document).reverse(preserve_keys.then_some(true))),
        AryCommand::Slice {
            document,
            offset,
            length,
            preserve_keys,
        } => Value::from(doc(document).slice(offset, length, preserve_keys.then_some(true))),
        AryCommand::Chunk {
            document,
            size,
            preserve_keys,
        } => Value::from(
            doc(document)
                .chunk(size, preserve_keys.then_some(true))
                .unwrap_or_else(|e| fail(e, 1)),
        ),
        AryCommand::Unique(DocArgs { document }) => Value::from(doc(document).unique()),
        AryCommand::Clean(DocArgs { document }) => Value::from(doc(document).clean()),
        AryCommand::Flip(DocArgs { document }) => {
            Value::from(doc(document).flip().unwrap_or_else(|e| fail(e, 1)))
        }
        AryCommand::CountValues(DocArgs { document }) => {
            Value::from(doc(document).count_values().unwrap_or_else(|e| fail(e, 1)))
        }
        AryCommand::Sum(DocArgs { document }) => doc(document).sum(),
        AryCommand::Product(DocArgs { document }) => doc(document).product(),
        AryCommand::Min(DocArgs { document }) => doc(document).min().cloned().unwrap_or_default(),
        AryCommand::Max(DocArgs { document }) => doc(document).max().cloned().unwrap_or_default(),
        AryCommand::Join { document, glue } => Value::from(doc(document).join(&glue)),
        AryCommand::Column {
            document,
            column,
            index,
        } => {
            let index = index.map(Key::from);
            Value::from(doc(document).column(Some(&Key::from(column)), index.as_ref()))
        }
        AryCommand::Where {
            document,
            column,
            value,
            strict: is_strict,
        } => Value::from(doc(document).where_eq(&Key::from(column), &value, strict(is_strict))),
        AryCommand::Diff(OtherDocArgs { document, other }) => {
            Value::from(doc(document).diff(&parse("other", &other)))
        }
        AryCommand::Intersect(OtherDocArgs { document, other }) => {
            Value::from(doc(document).intersect(&parse("other", &other)))
        }
        AryCommand::Merge(OtherDocArgs { document, other }) => {
            chained(doc(document).merge(&parse("other", &other)))
        }
        AryCommand::Replace(OtherDocArgs { document, other }) => {
            chained(doc(document).replace(&parse("other", &other)))
        }
        AryCommand::Search(ValueArgs {
            document,
            value,
            strict: is_strict,
        }) => doc(document)
            .search(&value, strict(is_strict))
            .map_or(Value::Null, |key| key.to_value()),
        AryCommand::Has(ValueArgs {
            document,
            value,
            strict: is_strict,
        }) => Value::Bool(doc(document).has(&value, strict(is_strict))),
        AryCommand::Before(BoundValueArgs {
            document,
            value,
            strict: is_strict,
            include,
        }) => doc(document)
            .before(&value, include.then_some(true), strict(is_strict))
            .map_or(Value::Null, Value::from),
        AryCommand::After(BoundValueArgs {
            document,
            value,
            strict: is_strict,
            include,
        }) => doc(document)
            .after(&value, include.then_some(true), strict(is_strict))
            .map_or(Value::Null, Value::from),
        AryCommand::Pad {
            document,
            size,
            value,
        } => Value::from(doc(document).pad(size, value).unwrap_or_else(|e| fail(e, 1))),
        AryCommand::Random(PickArgs { document, num }) => {
            Value::from(doc(document).random(num).unwrap_or_else(|e| fail(e, 1)))
        }
        AryCommand::Rand(PickArgs { document, num }) => {
            Value::from(doc(document).rand(num).unwrap_or_else(|e| fail(e, 1)))
        }
        AryCommand::Encode(DocArgs { document }) => Value::from(doc(document)),
    }
}

fn sorted(
    mut ary: Ary,
    args: &SortArgs,
    sort: fn(&mut Ary, Option<SortFlags>) -> &mut Ary,
) -> Value {
    chained(sort(&mut ary, args.flags()))
}

fn chained(ary: &mut Ary) -> Value {
    Value::from(ary.clone())
}
