//! CLI command handlers.
//!
//! Handlers return `Ok(true)` when the command succeeded, `Ok(false)` when
//! the input was rejected, and `Err` only for I/O or serialization problems.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use anyhow::Result;
use chrono::Utc;
use greeter_core::sanitize::default_sanitizer;
use greeter_core::{
    BatchReport, Either, GreeterConfig, GreetingStyle, Language, Outcome, Session,
    StyleRegistry, TimeOfDay, ValidatedName, welcome_batch,
};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Commands, OutputFormat};

/// Longest raw input kept by `--sanitize`.
pub const SANITIZE_LIMIT: usize = 200;

/// Everything a handler needs besides its arguments.
#[derive(Debug)]
pub struct Context {
    pub config: GreeterConfig,
    pub format: OutputFormat,
    pub registry: StyleRegistry,
}

impl Context {
    pub fn new(config: GreeterConfig, format: OutputFormat) -> Self {
        Self {
            config,
            format,
            registry: StyleRegistry::new(),
        }
    }
}

/// Execute a CLI command.
pub fn execute_command(command: Commands, ctx: &Context) -> Result<bool> {
    match command {
        Commands::Greet {
            name,
            style,
            language,
            time,
            sanitize,
        } => cmd_greet(ctx, &name, style.as_deref(), language, time, sanitize),

        Commands::Check { name, all } => cmd_check(ctx, &name, all),

        Commands::Batch { names } => cmd_batch(ctx, &names),

        Commands::Styles => cmd_styles(ctx),
    }
}

fn cmd_greet(
    ctx: &Context,
    raw: &str,
    style: Option<&str>,
    language: Option<Language>,
    time: bool,
    sanitize: bool,
) -> Result<bool> {
    let input = if sanitize {
        default_sanitizer(SANITIZE_LIMIT)(raw)
    } else {
        raw.to_owned()
    };

    let style = style.map_or(Outcome::success(ctx.config.style), |name| {
        ctx.registry.resolve(name)
    });

    let rules = &ctx.config.rules;
    let language = preferred_language(ctx, language);
    let greeting = style.bind(|style| {
        if time || language.is_some() {
            rules
                .validate(&input)
                .bind(|name| render(ctx, &name, style, language, time))
        } else {
            ctx.registry.welcome(rules, style, &input)
        }
    });

    debug!(success = greeting.is_success(), "greet finished");
    emit_outcome(ctx.format, &greeting)
}

/// The requested language, else the configured one when it is not English.
fn preferred_language(ctx: &Context, requested: Option<Language>) -> Option<Language> {
    requested.or_else(|| {
        (ctx.config.language != Language::English).then_some(ctx.config.language)
    })
}

/// Time of day wins over language, language over style.
fn render(
    ctx: &Context,
    name: &ValidatedName,
    style: GreetingStyle,
    language: Option<Language>,
    time: bool,
) -> Either<String> {
    let features = &ctx.config.features;

    if time {
        features.gate("time_greeting", || TimeOfDay::now().greet(name))
    } else if let Some(language) = language {
        features.gate("multi_language", || language.greet(name))
    } else {
        ctx.registry.render(style, name)
    }
}

fn cmd_check(ctx: &Context, raw: &str, all: bool) -> Result<bool> {
    let rules = &ctx.config.rules;
    if all {
        emit_outcome(ctx.format, &rules.validate_all(raw))
    } else {
        emit_outcome(ctx.format, &rules.validate(raw).map_failure(|error| vec![error]))
    }
}

fn cmd_batch(ctx: &Context, names: &[String]) -> Result<bool> {
    let report = welcome_batch(names, &ctx.config.rules);
    let session = report
        .accepted
        .iter()
        .cloned()
        .fold(Session::start(Utc::now()), |session, name| {
            session.record(name, Utc::now())
        });

    debug!(
        total = report.total,
        unique = session.unique_users(),
        "batch finished"
    );

    match ctx.format {
        OutputFormat::Json => print_json(&BatchOutput {
            report: &report,
            unique_users: session.unique_users(),
        })?,
        OutputFormat::Text => println!("{}", batch_text(&report, session.unique_users())),
    }
    Ok(true)
}

#[derive(Serialize)]
struct BatchOutput<'a> {
    #[serde(flatten)]
    report: &'a BatchReport,
    unique_users: usize,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn batch_text(report: &BatchReport, unique_users: usize) -> String {
    let percent = (report.success_rate * 100.0).round() as u64;
    report
        .greetings
        .iter()
        .cloned()
        .chain(
            report
                .rejected
                .iter()
                .map(|rejection| format!("Rejected '{}': {}", rejection.input, rejection.reason)),
        )
        .chain(std::iter::once(format!(
            "{}/{} valid ({percent}%), {unique_users} unique",
            report.valid_count(),
            report.total
        )))
        .collect::<Vec<_>>()
        .join("\n")
}

fn cmd_styles(ctx: &Context) -> Result<bool> {
    let styles = ctx.registry.styles();
    match ctx.format {
        OutputFormat::Json => print_json(&styles)?,
        OutputFormat::Text => styles.iter().for_each(|style| println!("{style}")),
    }
    Ok(true)
}

/// Print an outcome: successes to stdout, failures to stderr in text mode,
/// both to stdout as JSON.
fn emit_outcome<T, E>(format: OutputFormat, outcome: &Outcome<T, E>) -> Result<bool>
where
    T: Serialize + std::fmt::Display,
    E: Serialize + Messages,
{
    match format {
        OutputFormat::Json => print_json(outcome)?,
        OutputFormat::Text => match outcome {
            Outcome::Success(value) => println!("{value}"),
            Outcome::Failure(error) => error.messages().iter().for_each(|line| eprintln!("{line}")),
        },
    }
    Ok(outcome.is_success())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Failure payloads that print as one message per line.
trait Messages {
    fn messages(&self) -> Vec<&str>;
}

impl Messages for String {
    fn messages(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl Messages for Vec<String> {
    fn messages(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}
