//! jsmask: Lexical masking for JavaScript/TypeScript from the command line.
//!
//! Usage:
//!   jsmask [options] <command> [file...]
//!
//! Extraction commands print one JSON document per file; `uncomment` and
//! `correct` print (or with `--write`, rewrite) the transformed text; `check`
//! reports unterminated literals and comments.

mod commands;
mod error;
mod logger;

use clap::{Args, Parser as ClapParser, Subcommand};
use commands::{Action, Output};
use error::{CliError, Result};
use jsmask_diagnostics::Diagnostic;
use jsmask_options::{find_config_file, parse_config_file, JsmaskConfig};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;

#[derive(ClapParser, Debug)]
#[command(name = "jsmask", about = "jsmask - Lexical masking for JavaScript and TypeScript", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to jsmask.json (default: ./jsmask.json if present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print compact JSON instead of pretty JSON.
    #[arg(long, global = true)]
    compact: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List string and template literals.
    Strings(Inputs),
    /// List line and block comments.
    Comments(Inputs),
    /// List documentation comments and the declarations they document.
    Symbols(Inputs),
    /// List exported names.
    Exports(Inputs),
    /// List referenced module paths.
    Imports(Inputs),
    /// Strip comments.
    Uncomment {
        /// Collapse runs of blank lines into one.
        #[arg(long, overrides_with = "no_collapse_blank_lines")]
        collapse_blank_lines: bool,

        /// Keep runs of blank lines, even when jsmask.json collapses them.
        #[arg(long, overrides_with = "collapse_blank_lines")]
        no_collapse_blank_lines: bool,

        #[command(flatten)]
        output: Rewrite,
    },
    /// Normalize generated .d.ts declarations.
    Correct {
        /// Rename every `declare module "..."` to this name.
        #[arg(long = "module")]
        module_name: Option<String>,

        #[command(flatten)]
        output: Rewrite,
    },
    /// Report unterminated literals and comments.
    Check(Inputs),
}

#[derive(Args, Debug)]
struct Inputs {
    /// Source files; `-` or none reads standard input.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct Rewrite {
    /// Rewrite the files in place instead of printing.
    #[arg(short, long)]
    write: bool,

    #[command(flatten)]
    inputs: Inputs,
}

/// Effective settings: config file values overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    action: Action,
    pretty: bool,
    write: bool,
}

impl Cli {
    fn inputs(&self) -> &Inputs {
        match &self.command {
            Command::Strings(inputs)
            | Command::Comments(inputs)
            | Command::Symbols(inputs)
            | Command::Exports(inputs)
            | Command::Imports(inputs)
            | Command::Check(inputs) => inputs,
            Command::Uncomment { output, .. } | Command::Correct { output, .. } => &output.inputs,
        }
    }

    fn settings(&self, config: &JsmaskConfig) -> Settings {
        let (action, write) = match &self.command {
            Command::Strings(_) => (Action::Strings, false),
            Command::Comments(_) => (Action::Comments, false),
            Command::Symbols(_) => (Action::Symbols, false),
            Command::Exports(_) => (Action::Exports, false),
            Command::Imports(_) => (Action::Imports, false),
            Command::Check(_) => (Action::Check, false),
            Command::Uncomment {
                collapse_blank_lines,
                no_collapse_blank_lines,
                output,
            } => (
                Action::Uncomment {
                    collapse_blank_lines: match (*collapse_blank_lines, *no_collapse_blank_lines) {
                        (true, _) => true,
                        (_, true) => false,
                        _ => config.collapse_blank_lines(),
                    },
                },
                output.write,
            ),
            Command::Correct { module_name, output } => (
                Action::Correct {
                    module_name: module_name.clone().or_else(|| config.module_name().map(str::to_string)),
                },
                output.write,
            ),
        };
        Settings {
            action,
            pretty: config.pretty() && !self.compact,
            write,
        }
    }
}

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet, !use_color());

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            1
        }
    };
    process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    let settings = cli.settings(&config);
    let files = &cli.inputs().files;
    if settings.write && (files.is_empty() || files.iter().any(|f| f.as_os_str() == "-")) {
        return Err(CliError::WriteStdin);
    }

    let sources = commands::read_sources(files)?;
    let outputs = commands::run_all(&settings.action, &sources)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut diagnostic_count = 0;
    for (source, output) in sources.iter().zip(outputs) {
        match output {
            Output::Json(value) => {
                let json = if settings.pretty {
                    serde_json::to_string_pretty(&value)?
                } else {
                    serde_json::to_string(&value)?
                };
                writeln!(out, "{}", json)?;
            }
            Output::Text(text) => match (&source.path, settings.write) {
                (Some(path), true) => {
                    debug!(file = %path.display(), "rewriting");
                    commands::write_back(path, &text)?;
                }
                _ => write!(out, "{}", text)?,
            },
            Output::Diagnostics(diagnostics) => {
                let use_color = use_color();
                for diagnostic in diagnostics.diagnostics() {
                    print_diagnostic(diagnostic, use_color);
                }
                diagnostic_count += diagnostics.len();
            }
        }
    }
    out.flush()?;

    if diagnostic_count > 0 {
        eprintln!();
        eprintln!("Found {} problem{}.", diagnostic_count, if diagnostic_count == 1 { "" } else { "s" });
        return Ok(2);
    }
    Ok(0)
}

fn load_config(cli: &Cli) -> Result<JsmaskConfig> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => std::env::current_dir().ok().and_then(|dir| find_config_file(&dir)),
    };
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Ok(parse_config_file(&path)?)
        }
        None => Ok(JsmaskConfig::default()),
    }
}

fn print_diagnostic(diag: &Diagnostic, use_color: bool) {
    if use_color {
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}({}): ", CYAN, file, RESET, diag.span.start);
        }
        eprintln!(
            "{}{}warning{} {}JM{}{}: {}",
            BOLD, YELLOW, RESET, CYAN, diag.code, RESET, diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsmask_options::parse_config;

    #[test]
    fn test_parse_extraction_command() {
        let cli = Cli::try_parse_from(["jsmask", "exports", "a.ts", "b.ts"]).unwrap();
        assert_eq!(cli.inputs().files, vec![PathBuf::from("a.ts"), PathBuf::from("b.ts")]);
        let settings = cli.settings(&JsmaskConfig::default());
        assert_eq!(settings.action, Action::Exports);
        assert!(settings.pretty);
        assert!(!settings.write);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["jsmask", "strings", "--compact", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.inputs().files.is_empty());
        assert!(!cli.settings(&JsmaskConfig::default()).pretty);
    }

    #[test]
    fn test_config_supplies_defaults() {
        let config =
            parse_config(r#"{ "uncomment": { "collapseBlankLines": true }, "declarations": { "moduleName": "pkg" } }"#)
                .unwrap();

        let cli = Cli::try_parse_from(["jsmask", "uncomment", "a.js"]).unwrap();
        assert_eq!(
            cli.settings(&config).action,
            Action::Uncomment {
                collapse_blank_lines: true
            }
        );

        let cli = Cli::try_parse_from(["jsmask", "correct", "a.d.ts"]).unwrap();
        assert_eq!(
            cli.settings(&config).action,
            Action::Correct {
                module_name: Some("pkg".to_string())
            }
        );
    }

    #[test]
    fn test_flags_override_config() {
        let config = parse_config(r#"{ "declarations": { "moduleName": "pkg" }, "pretty": true }"#).unwrap();
        let cli = Cli::try_parse_from(["jsmask", "correct", "--module", "other", "--write", "--compact", "a.d.ts"])
            .unwrap();
        let settings = cli.settings(&config);
        assert_eq!(
            settings.action,
            Action::Correct {
                module_name: Some("other".to_string())
            }
        );
        assert!(settings.write);
        assert!(!settings.pretty);
    }

    #[test]
    fn test_no_collapse_flag_overrides_config() {
        let config = parse_config(r#"{ "uncomment": { "collapseBlankLines": true } }"#).unwrap();
        let cli = Cli::try_parse_from(["jsmask", "uncomment", "--no-collapse-blank-lines", "a.js"]).unwrap();
        assert_eq!(
            cli.settings(&config).action,
            Action::Uncomment {
                collapse_blank_lines: false
            }
        );

        let cli = Cli::try_parse_from([
            "jsmask",
            "uncomment",
            "--no-collapse-blank-lines",
            "--collapse-blank-lines",
            "a.js",
        ])
        .unwrap();
        assert_eq!(
            cli.settings(&JsmaskConfig::default()).action,
            Action::Uncomment {
                collapse_blank_lines: true
            }
        );
    }

    #[test]
    fn test_write_from_stdin_is_rejected() {
        let cli = Cli::try_parse_from(["jsmask", "uncomment", "--write"]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::WriteStdin)));
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["jsmask", "format"]).is_err());
    }
}
