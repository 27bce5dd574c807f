use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{CategoryFilter, QuizMode};
use services::{AppServices, SessionOptions};
use storage::{EmbeddedSource, JsonFileSource, QuestionSource};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidMode { raw: String },
    InvalidCategory { raw: String },
    InvalidSeed { raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidMode { raw } => write!(f, "invalid --mode value: {raw}"),
            ArgsError::InvalidCategory { raw } => write!(f, "invalid --category value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} cannot be empty"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--questions <path>] [--category <key|all>]");
    eprintln!("                            [--mode <browse|quiz>] [--seed <n>]");
    eprintln!("  cargo run -p app -- check [--questions <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question bank, --category all, --mode browse, random order");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_CATEGORY, QUIZ_MODE, QUIZ_SEED, QUIZ_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    questions: Option<PathBuf>,
    category: CategoryFilter,
    mode: QuizMode,
    seed: Option<u64>,
}

fn parse_mode(raw: String) -> Result<QuizMode, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidMode { raw })
}

fn parse_category(raw: String) -> Result<CategoryFilter, ArgsError> {
    CategoryFilter::parse(&raw).map_err(|_| ArgsError::InvalidCategory { raw })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_path(raw: String, flag: &'static str) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(raw))
}

impl Args {
    /// Flags override environment values, which override defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut questions = env("QUIZ_QUESTIONS")
            .map(|value| parse_path(value, "QUIZ_QUESTIONS"))
            .transpose()?;
        let mut category = env("QUIZ_CATEGORY")
            .map(parse_category)
            .transpose()?
            .unwrap_or_default();
        let mut mode = env("QUIZ_MODE").map(parse_mode).transpose()?.unwrap_or_default();
        let mut seed = env("QUIZ_SEED").map(parse_seed).transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let raw = require_value(args, "--questions")?;
                    questions = Some(parse_path(raw, "--questions")?);
                }
                "--category" => category = parse_category(require_value(args, "--category")?)?,
                "--mode" => mode = parse_mode(require_value(args, "--mode")?)?,
                "--seed" => seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions,
            category,
            mode,
            seed,
        })
    }

    fn source(&self) -> Box<dyn QuestionSource> {
        match &self.questions {
            Some(path) => Box::new(JsonFileSource::new(path.clone())),
            None => Box::new(EmbeddedSource),
        }
    }

    fn session_options(&self) -> SessionOptions {
        SessionOptions {
            mode: self.mode,
            category: self.category.clone(),
            seed: self.seed,
            ..SessionOptions::default()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_check_report(services: &AppServices) {
    let store = services.store();
    let catalog = store.catalog();
    println!("{} questions", store.len());
    for key in store.categories() {
        let filter = CategoryFilter::Only(key.clone());
        println!(
            "  {:<16} {:>4}  {}",
            key.as_str(),
            store.count(&filter),
            catalog.label_for(&filter)
        );
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let source = parsed.source();
    tracing::info!(source = %source.describe(), command = ?cmd, "starting");
    let services = AppServices::load(source.as_ref(), parsed.session_options())?;

    match cmd {
        Command::Check => {
            print_check_report(&services);
            Ok(())
        }
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::CategoryKey;
    use std::collections::HashMap;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter, |key| env.get(key).cloned())
    }

    #[test]
    fn defaults_use_embedded_bank_in_browse_mode() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.questions, None);
        assert_eq!(args.category, CategoryFilter::All);
        assert_eq!(args.mode, QuizMode::Browse);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--mode", "quiz", "--category", "network", "--seed", "9"],
            &[
                ("QUIZ_MODE", "browse"),
                ("QUIZ_CATEGORY", "database"),
                ("QUIZ_QUESTIONS", "bank.json"),
            ],
        )
        .unwrap();
        assert_eq!(args.mode, QuizMode::Quiz);
        assert_eq!(
            args.category,
            CategoryFilter::Only(CategoryKey::new("network").unwrap())
        );
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.questions, Some(PathBuf::from("bank.json")));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            parse(&["--mode", "exam"], &[]),
            Err(ArgsError::InvalidMode { .. })
        ));
        assert!(matches!(
            parse(&["--seed", "-1"], &[]),
            Err(ArgsError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse(&["--category", " "], &[]),
            Err(ArgsError::InvalidCategory { .. })
        ));
        assert!(matches!(
            parse(&["--questions"], &[]),
            Err(ArgsError::MissingValue { flag: "--questions" })
        ));
        assert!(matches!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg(_))
        ));
    }
}
