use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, AuthConfig, CatalogService, Clock, CodeRunner, SessionStore};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://sde-prep.sqlite3";
const DB_URL_ENV: &str = "SDE_PREP_DB_URL";
const LATENCY_ENV: &str = "SDE_PREP_LATENCY_MS";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    InvalidLatency { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidLatency { raw } => write!(f, "invalid --latency-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn session(&self) -> Arc<SessionStore> {
        self.services.session()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn code_runner(&self) -> Arc<CodeRunner> {
        self.services.code_runner()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    latency: Duration,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>] [--latency-ms <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --latency-ms 1000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_ENV}, {LATENCY_ENV}, RUST_LOG");
}

fn parse_latency(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidLatency { raw })
}

impl Args {
    fn parse_ui(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    /// Flags win over environment values, which win over defaults.
    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut db_url = env(DB_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut latency = match env(LATENCY_ENV) {
            Some(raw) => parse_latency(raw)?,
            None => AuthConfig::DEFAULT_LATENCY,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--latency-ms" => {
                    latency = parse_latency(require_value(args, "--latency-ms")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, latency })
    }
}

/// Drop the optional leading `ui` subcommand; reject any other word.
fn strip_subcommand(mut argv: Vec<String>) -> Result<Vec<String>, ArgsError> {
    match argv.first().map(String::as_str) {
        Some("ui") => {
            argv.remove(0);
            Ok(argv)
        }
        Some(first) if !first.starts_with('-') => Err(ArgsError::UnknownCommand(first.to_string())),
        _ => Ok(argv),
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = log_fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing init failed: {err}");
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = strip_subcommand(argv)
        .and_then(|argv| Args::parse_ui(&mut argv.into_iter()))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    // Open + migrate SQLite at startup so a bad database fails before the window opens.
    prepare_sqlite_file(&parsed.db_url)?;
    let config = AuthConfig::with_latency(parsed.latency);
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::default_clock(), config).await?;
    info!(db = %parsed.db_url, latency = ?parsed.latency, "storage ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("SDE Prep")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    info!("desktop window closed");
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn parse(items: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Args::parse_with_env(&mut args(items).into_iter(), |key| {
            env.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let parsed = parse(&[], &[]).unwrap();
        assert_eq!(parsed.db_url, DEFAULT_DB_URL);
        assert_eq!(parsed.latency, AuthConfig::DEFAULT_LATENCY);
    }

    #[test]
    fn flags_override_environment() {
        let parsed = parse(
            &["--db", "sqlite::memory:", "--latency-ms", "0"],
            &[(DB_URL_ENV, "sqlite://env.sqlite3"), (LATENCY_ENV, "250")],
        )
        .unwrap();
        assert_eq!(parsed.db_url, "sqlite::memory:");
        assert_eq!(parsed.latency, Duration::ZERO);
    }

    #[test]
    fn environment_used_when_flags_absent() {
        let parsed = parse(&[], &[(DB_URL_ENV, "sqlite://env.sqlite3"), (LATENCY_ENV, "250")])
            .unwrap();
        assert_eq!(parsed.db_url, "sqlite://env.sqlite3");
        assert_eq!(parsed.latency, Duration::from_millis(250));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert_eq!(
            parse(&["--latency-ms", "soon"], &[]),
            Err(ArgsError::InvalidLatency { raw: "soon".into() })
        );
        assert_eq!(
            parse(&["--db"], &[]),
            Err(ArgsError::MissingValue { flag: "--db" })
        );
        assert_eq!(
            parse(&["--db", "  "], &[]),
            Err(ArgsError::InvalidDbUrl { raw: "  ".into() })
        );
        assert_eq!(
            parse(&["--port", "8080"], &[]),
            Err(ArgsError::UnknownArg("--port".into()))
        );
    }

    #[test]
    fn ui_subcommand_is_optional() {
        assert_eq!(strip_subcommand(args(&["ui", "--db", "x"])).unwrap(), args(&["--db", "x"]));
        assert_eq!(strip_subcommand(args(&["--db", "x"])).unwrap(), args(&["--db", "x"]));
        assert_eq!(
            strip_subcommand(args(&["seed"])),
            Err(ArgsError::UnknownCommand("seed".into()))
        );
    }

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:data/prep.sqlite3".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/prep.sqlite3"), "{url}");
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }
}
