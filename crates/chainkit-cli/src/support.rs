use chainkit_ary::{AryConfig, Value};
use chainkit_str::StrConfig;
use serde::Deserialize;
use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Exit code for malformed invocations.
pub const USAGE_EXIT: i32 = 2;

/// Method defaults loaded from `--config`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub ary: AryConfig,
    pub str: StrConfig,
}

pub struct LoadedConfig {
    pub ary: Arc<AryConfig>,
    pub str: Arc<StrConfig>,
}

pub fn load_config_or_exit(path: Option<&str>) -> LoadedConfig {
    let file = match path {
        None => ConfigFile::default(),
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                fail(format!("failed to read config {path}: {e}"), 1);
            });
            toml::from_str::<ConfigFile>(&text).unwrap_or_else(|e| {
                fail(format!("failed to parse config {path}: {e}"), 1);
            })
        }
    };
    tracing::debug!(?path, "loaded config");
    LoadedConfig {
        ary: Arc::new(file.ary),
        str: Arc::new(file.str),
    }
}

/// Install a stderr subscriber when `CHAINKIT_LOG` (or `RUST_LOG`) is set.
/// `CHAINKIT_LOG` wins when both are present.
pub fn init_tracing() {
    let filter = match std::env::var("CHAINKIT_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
        Err(_) => return,
    };
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("warning: logging disabled: {e}");
    }
}

pub fn fail(message: impl Display, code: i32) -> ! {
    eprintln!("error: {message}");
    std::process::exit(code);
}

/// Write bytes to stdout unchanged, for binary digests.
pub fn write_raw(bytes: &[u8]) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(bytes).and_then(|()| stdout.flush()) {
        fail(format!("failed to write output: {e}"), 1);
    }
}

/// Print an operation result: strings verbatim, collections as JSON, other
/// scalars as JSON literals. `--json` wraps it in an envelope.
pub fn print_result(op: &str, result: &Value, json_output: bool) {
    if json_output {
        let payload = serde_json::json!({
            "op": op,
            "result": result,
        });
        println!("{}", to_pretty_json(&payload));
        return;
    }
    match result {
        Value::Str(text) => println!("{text}"),
        Value::Ary(ary) => {
            let text = ary
                .to_json(None)
                .unwrap_or_else(|e| fail(format!("failed to encode result: {e}"), 1));
            println!("{text}");
        }
        other => {
            let text = serde_json::to_string(other)
                .unwrap_or_else(|e| fail(format!("failed to encode result: {e}"), 1));
            println!("{text}");
        }
    }
}

pub fn to_pretty_json(payload: &serde_json::Value) -> String {
    serde_json::to_string_pretty(payload)
        .unwrap_or_else(|e| fail(format!("json serialization: {e}"), 1))
}
