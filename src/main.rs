use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use serde_json::json;

use fieldmask::mask::canonical_patterns;
use fieldmask::{
    MaskConfig, MaskError, MaskKind, MaskPattern, apply_mask, process_input, remove_mask,
    validate,
};

#[derive(Parser, Debug)]
#[command(name = "fieldmask", version, about = "Format, unformat and validate masked text")]
struct Args {
    /// Log debug output (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML or JSON file with named custom patterns.
    #[arg(short, long, global = true, env = "FIELDMASK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct CustomArgs {
    /// Inline pattern for the `custom` kind (9 digit, a letter, * either).
    #[arg(long, conflicts_with = "custom")]
    pattern: Option<String>,

    /// Named pattern from the config file for the `custom` kind.
    #[arg(long)]
    custom: Option<String>,

    /// Render unfilled slots of an inline pattern with `_`.
    #[arg(long, requires = "pattern")]
    placeholder: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a value with the mask of KIND.
    Apply {
        kind: MaskKind,
        value: String,
        #[command(flatten)]
        custom: CustomArgs,
    },
    /// Filter or format a value the way a field does on every keystroke.
    Process {
        kind: MaskKind,
        value: String,
        #[command(flatten)]
        custom: CustomArgs,
    },
    /// Strip the formatting of KIND from a value.
    Remove { kind: MaskKind, value: String },
    /// Check a value against the rule of KIND; exits with 1 when invalid.
    Validate { kind: MaskKind, value: String },
    /// List the built-in and configured patterns.
    Patterns {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<ExitCode, MaskError> {
    let config = match &args.config {
        Some(path) => {
            debug!("loading patterns from {}", path.display());
            MaskConfig::load(path)?
        }
        None => MaskConfig::default(),
    };

    match args.command {
        Command::Apply {
            kind,
            value,
            custom,
        } => {
            let pattern = resolve_custom(&config, &custom)?;
            println!("{}", apply_mask(value.as_str(), kind, pattern.as_ref())?);
        }
        Command::Process {
            kind,
            value,
            custom,
        } => {
            let pattern = resolve_custom(&config, &custom)?;
            println!("{}", process_input(value.as_str(), kind, pattern.as_ref())?);
        }
        Command::Remove { kind, value } => {
            println!("{}", remove_mask(value.as_str(), kind));
        }
        Command::Validate { kind, value } => {
            if validate(value.as_str(), kind) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::from(1));
            }
        }
        Command::Patterns { json } => print_patterns(&config, json)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn resolve_custom(
    config: &MaskConfig,
    args: &CustomArgs,
) -> Result<Option<MaskPattern>, MaskError> {
    if let Some(pattern) = &args.pattern {
        return Ok(Some(
            MaskPattern::new(pattern.as_str()).always_show_placeholder(args.placeholder),
        ));
    }
    args.custom
        .as_deref()
        .map(|name| config.pattern(name))
        .transpose()
}

fn print_patterns(config: &MaskConfig, as_json: bool) -> Result<(), MaskError> {
    if as_json {
        let builtin: Vec<_> = canonical_patterns()
            .map(|(kind, pattern)| {
                json!({
                    "kind": kind,
                    "pattern": pattern.source(),
                    "always_show_placeholder": pattern.shows_placeholder(),
                })
            })
            .collect();
        let output = json!({
            "builtin": builtin,
            "custom": config.patterns,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (kind, pattern) in canonical_patterns() {
        let placeholder = if pattern.shows_placeholder() {
            " (placeholder)"
        } else {
            ""
        };
        println!("{:<14}{}{}", kind.as_str(), pattern.source(), placeholder);
    }
    for name in config.names() {
        let pattern = config.pattern(name)?;
        println!("{:<14}{}", name, pattern.source());
    }
    Ok(())
}
