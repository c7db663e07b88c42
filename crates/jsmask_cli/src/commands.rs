//! Per-file command execution.

use crate::error::{CliError, Result};
use jsmask_core::LineMap;
use jsmask_diagnostics::DiagnosticCollection;
use jsmask_scanner::Lexeme;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a command does to one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Strings,
    Comments,
    Symbols,
    Exports,
    Imports,
    Uncomment { collapse_blank_lines: bool },
    Correct { module_name: Option<String> },
    Check,
}

/// One input text.
#[derive(Debug, Clone)]
pub struct Source {
    /// Display name: the path, or `<stdin>`.
    pub name: String,
    /// The file the text came from, if any.
    pub path: Option<PathBuf>,
    pub text: String,
}

impl Source {
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            text: text.into(),
        }
    }
}

/// The result of running an action on one source.
#[derive(Debug)]
pub enum Output {
    Json(Value),
    Text(String),
    Diagnostics(DiagnosticCollection),
}

/// A positional span in JSON output. `line` and `column` are 1-based.
#[derive(Debug, Serialize)]
struct SpanRecord<'a> {
    start: u32,
    end: u32,
    line: u32,
    column: u32,
    text: &'a str,
}

fn span_records<'a>(text: &'a str, lexemes: &[Lexeme]) -> Vec<SpanRecord<'a>> {
    let line_map = LineMap::new(text);
    lexemes
        .iter()
        .map(|lexeme| {
            let position = line_map.line_and_column_of(lexeme.span.start);
            SpanRecord {
                start: lexeme.span.start,
                end: lexeme.span.end(),
                line: position.line + 1,
                column: position.character + 1,
                text: lexeme.text(text),
            }
        })
        .collect()
}

fn report<T: Serialize>(file: &str, key: &str, items: &T) -> Result<Value> {
    let mut map = Map::new();
    map.insert("file".to_string(), Value::String(file.to_string()));
    map.insert(key.to_string(), serde_json::to_value(items)?);
    Ok(Value::Object(map))
}

/// Read every input. No files, or `-`, means standard input.
pub fn read_sources(files: &[PathBuf]) -> Result<Vec<Source>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    files
        .par_iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                return read_stdin();
            }
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            Ok(Source {
                name: path.display().to_string(),
                path: Some(path.clone()),
                text,
            })
        })
        .collect()
}

fn read_stdin() -> Result<Source> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| CliError::Read {
            path: PathBuf::from("-"),
            source,
        })?;
    Ok(Source::from_text("<stdin>", text))
}

/// Run `action` on one source.
pub fn run_action(action: &Action, source: &Source) -> Result<Output> {
    debug!(file = %source.name, bytes = source.text.len(), action = ?action, "processing");
    let text = source.text.as_str();
    let output = match action {
        Action::Strings => {
            let spans = jsmask_mask::string_spans(text);
            Output::Json(report(&source.name, "strings", &span_records(text, &spans))?)
        }
        Action::Comments => {
            let spans = jsmask_mask::comment_spans(text);
            Output::Json(report(&source.name, "comments", &span_records(text, &spans))?)
        }
        Action::Symbols => Output::Json(report(&source.name, "symbols", &jsmask_extract::jsdoc_symbols(text))?),
        Action::Exports => Output::Json(report(&source.name, "exports", &jsmask_extract::export_symbols(text))?),
        Action::Imports => Output::Json(report(&source.name, "imports", &jsmask_extract::import_symbols(text))?),
        Action::Uncomment { collapse_blank_lines } => Output::Text(jsmask_mask::uncomment(text, *collapse_blank_lines)),
        Action::Correct { module_name } => {
            Output::Text(jsmask_declarations::correct_declarations(text, module_name.as_deref()))
        }
        Action::Check => {
            let mut diagnostics = jsmask_scanner::lexical_diagnostics(text);
            diagnostics.set_file(&source.name);
            Output::Diagnostics(diagnostics)
        }
    };
    Ok(output)
}

/// Run `action` on every source in parallel. Results keep input order.
pub fn run_all(action: &Action, sources: &[Source]) -> Result<Vec<Output>> {
    sources.par_iter().map(|source| run_action(action, source)).collect()
}

/// Replace a file's contents with rewritten text.
pub fn write_back(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
