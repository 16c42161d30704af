use chainkit_ary::{SortFlags, SortKind, Value};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::convert::Infallible;

#[derive(Parser)]
#[command(
    name = "chainkit",
    about = "chainkit: ordered-map and text helpers, plus input validators",
    version
)]
pub struct Cli {
    /// TOML file with [ary] and [str] tables overriding method defaults
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check inputs against a validator rule, e.g. `int_between:1,10`
    Validate {
        /// Rule name with optional `:arg1,arg2` arguments
        rule: String,

        /// Inputs to check
        #[arg(required = true, allow_negative_numbers = true)]
        inputs: Vec<String>,
    },

    /// Run a string operation and print the result
    #[command(subcommand)]
    Str(StrCommand),

    /// Run an Ary operation on a JSON array or object
    #[command(subcommand)]
    Ary(AryCommand),
}

/// A JSON value, or the raw text as a string when it is not valid JSON.
fn json_value(raw: &str) -> Result<Value, Infallible> {
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw)))
}

#[derive(Subcommand)]
pub enum StrCommand {
    /// Length in characters
    Len(TextArgs),
    Upper(TextArgs),
    Lower(TextArgs),
    Title(TextArgs),
    UpperFirst(TextArgs),
    LowerFirst(TextArgs),
    Reverse(TextArgs),
    Trim(TrimArgs),
    Ltrim(TrimArgs),
    Rtrim(TrimArgs),
    /// Characters from `start` (negative counts from the end)
    Substring {
        #[arg(allow_negative_numbers = true)]
        text: String,
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        length: Option<i64>,
    },
    Truncate {
        #[arg(allow_negative_numbers = true)]
        text: String,
        length: usize,
        /// Appended when the text is cut
        append: Option<String>,
    },
    Repeat {
        #[arg(allow_negative_numbers = true)]
        text: String,
        times: usize,
        separator: Option<String>,
    },
    Replace {
        #[arg(allow_negative_numbers = true)]
        text: String,
        search: String,
        replace: String,
        #[arg(long)]
        ignore_case: bool,
    },
    PadLeft(PadArgs),
    PadRight(PadArgs),
    Explode {
        #[arg(allow_negative_numbers = true)]
        text: String,
        delimiter: String,
        #[arg(allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Split on a regular expression
    Split {
        #[arg(allow_negative_numbers = true)]
        text: String,
        pattern: String,
        limit: Option<usize>,
    },
    Chars(TextArgs),
    /// Character index of the needle, or null
    Position {
        #[arg(allow_negative_numbers = true)]
        text: String,
        needle: String,
        offset: Option<usize>,
        #[arg(long)]
        ignore_case: bool,
        /// Last occurrence instead of the first
        #[arg(long)]
        last: bool,
    },
    Search(NeedleArgs),
    Before(BoundArgs),
    After(BoundArgs),
    Count(NeedleArgs),
    Contains(NeedleArgs),
    StartsWith(NeedleArgs),
    EndsWith(NeedleArgs),
    Equals(OtherArgs),
    /// -1, 0 or 1, optionally over the first `length` characters
    Comp {
        #[arg(allow_negative_numbers = true)]
        text: String,
        #[arg(allow_negative_numbers = true)]
        other: String,
        length: Option<usize>,
        #[arg(long)]
        ignore_case: bool,
    },
    NatComp(OtherArgs),
    Base64(TextArgs),
    Unbase64(TextArgs),
    Md5(DigestArgs),
    Sha1(DigestArgs),
    Sha256(TextArgs),
    PasswordHash {
        #[arg(allow_negative_numbers = true)]
        text: String,
        #[arg(long)]
        cost: Option<u32>,
    },
    PasswordVerify {
        #[arg(allow_negative_numbers = true)]
        text: String,
        hash: String,
    },
}

#[derive(Args)]
pub struct TextArgs {
    #[arg(allow_negative_numbers = true)]
    pub text: String,
}

#[derive(Args)]
pub struct TrimArgs {
    #[arg(allow_negative_numbers = true)]
    pub text: String,
    /// Characters to strip instead of whitespace
    pub chars: Option<String>,
}

#[derive(Args)]
pub struct PadArgs {
    #[arg(allow_negative_numbers = true)]
    pub text: String,
    pub length: usize,
    pub pad: Option<String>,
}

#[derive(Args)]
pub struct NeedleArgs {
    #[arg(allow_negative_numbers = true)]
    pub text: String,
    #[arg(allow_negative_numbers = true)]
    pub needle: String,
    #[arg(long)]
    pub ignore_case: bool,
}

#[derive(Args)]
pub struct BoundArgs {
    #[arg(allow_negative_numbers = true)]
    pub text: String,
    #[arg(allow_negative_numbers = true)]
    pub needle: String,
    /// Keep the needle in the result
    #[arg(long)]
    pub include: bool,
}

#[derive(Args)]
pub struct OtherArgs {
    #[arg(allow_negative_numbers = true)]
    pub text: String,
    #[arg(allow_negative_numbers = true)]
    pub other: String,
}

#[derive(Args)]
pub struct DigestArgs {
    #[arg(allow_negative_numbers = true)]
    pub text: String,
    /// Write the binary digest to stdout instead of hex
    #[arg(long)]
    pub raw: bool,
}

#[derive(Subcommand)]
pub enum AryCommand {
    Count(DocArgs),
    Keys(DocArgs),
    Values(DocArgs),
    First(DocArgs),
    Last(DocArgs),
    Sort(SortArgs),
    Rsort(SortArgs),
    Asort(SortArgs),
    Arsort(SortArgs),
    Ksort(SortArgs),
    Krsort(SortArgs),
    Shuffle(DocArgs),
    Reverse(KeysArgs),
    Slice {
        document: String,
        #[arg(allow_negative_numbers = true)]
        offset: i64,
        #[arg(allow_negative_numbers = true)]
        length: Option<i64>,
        #[arg(long)]
        preserve_keys: bool,
    },
    Chunk {
        document: String,
        size: usize,
        #[arg(long)]
        preserve_keys: bool,
    },
    Unique(DocArgs),
    /// Drop falsy values
    Clean(DocArgs),
    Flip(DocArgs),
    CountValues(DocArgs),
    Sum(DocArgs),
    Product(DocArgs),
    Min(DocArgs),
    Max(DocArgs),
    Join {
        document: String,
        #[arg(default_value = ",")]
        glue: String,
    },
    /// Values of one column from a list of rows
    Column {
        document: String,
        column: String,
        /// Column whose values become the result keys
        index: Option<String>,
    },
    /// Rows whose `column` equals `value`
    Where {
        document: String,
        column: String,
        #[arg(value_parser = json_value, allow_negative_numbers = true)]
        value: Value,
        #[arg(long)]
        strict: bool,
    },
    Diff(OtherDocArgs),
    Intersect(OtherDocArgs),
    Merge(OtherDocArgs),
    Replace(OtherDocArgs),
    /// Key of the first matching value, or null
    Search(ValueArgs),
    Has(ValueArgs),
    Before(BoundValueArgs),
    After(BoundValueArgs),
    /// Pad to `size` entries; a negative size pads at the front
    Pad {
        document: String,
        #[arg(allow_negative_numbers = true)]
        size: i64,
        #[arg(value_parser = json_value, allow_negative_numbers = true)]
        value: Value,
    },
    Random(PickArgs),
    Rand(PickArgs),
    Encode(DocArgs),
}

#[derive(Args)]
pub struct DocArgs {
    /// JSON array or object
    pub document: String,
}

#[derive(Args)]
pub struct KeysArgs {
    pub document: String,
    #[arg(long)]
    pub preserve_keys: bool,
}

#[derive(Args)]
pub struct SortArgs {
    pub document: String,
    #[arg(long, value_enum)]
    pub kind: Option<SortKindArg>,
    #[arg(long)]
    pub ignore_case: bool,
}

impl SortArgs {
    /// `None` leaves the configured default in place.
    pub fn flags(&self) -> Option<SortFlags> {
        if self.kind.is_none() && !self.ignore_case {
            return None;
        }
        let flags = SortFlags::new(self.kind.map(SortKind::from).unwrap_or_default());
        Some(if self.ignore_case { flags.ignore_case() } else { flags })
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortKindArg {
    Regular,
    Numeric,
    String,
    Natural,
}

impl From<SortKindArg> for SortKind {
    fn from(kind: SortKindArg) -> Self {
        match kind {
            SortKindArg::Regular => SortKind::Regular,
            SortKindArg::Numeric => SortKind::Numeric,
            SortKindArg::String => SortKind::String,
            SortKindArg::Natural => SortKind::Natural,
        }
    }
}

#[derive(Args)]
pub struct OtherDocArgs {
    pub document: String,
    /// Second JSON array or object
    pub other: String,
}

#[derive(Args)]
pub struct ValueArgs {
    pub document: String,
    #[arg(value_parser = json_value, allow_negative_numbers = true)]
    pub value: Value,
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct BoundValueArgs {
    pub document: String,
    #[arg(value_parser = json_value, allow_negative_numbers = true)]
    pub value: Value,
    #[arg(long)]
    pub strict: bool,
    /// Keep the matched entry in the result
    #[arg(long)]
    pub include: bool,
}

#[derive(Args)]
pub struct PickArgs {
    pub document: String,
    #[arg(default_value_t = 1)]
    pub num: usize,
}
