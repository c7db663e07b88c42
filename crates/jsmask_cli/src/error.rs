//! Errors reported by the jsmask binary.

use jsmask_options::ConfigError;
use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(jsmask::config), help("check the JSON syntax and field names of jsmask.json"))]
    Config(#[from] ConfigError),

    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(jsmask::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(jsmask::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("--write needs file arguments; standard input cannot be rewritten")]
    #[diagnostic(code(jsmask::args))]
    WriteStdin,

    #[error("failed to write output")]
    #[diagnostic(code(jsmask::output))]
    Output(#[from] io::Error),

    #[error("failed to serialize output")]
    #[diagnostic(code(jsmask::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
