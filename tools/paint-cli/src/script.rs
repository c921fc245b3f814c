//! Session scripts: one storefront event per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! category Rock Master
//! search stone
//! clear
//! add 3
//! qty 3 -1
//! remove 3
//! show
//! ```

use paint_commerce::ProductId;
use thiserror::Error;

/// A storefront event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Category(String),
    Search(String),
    Clear,
    Add(ProductId),
    Remove(ProductId),
    Quantity(ProductId, i64),
    Show,
}

/// An action with the script line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub action: Action,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: '{value}' is not a valid {expected}")]
    InvalidNumber {
        line: usize,
        value: String,
        expected: &'static str,
    },
}

/// Parse a whole script. Stops at the first bad line.
pub fn parse(source: &str) -> Result<Vec<Step>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                None
            } else {
                Some(parse_line(i + 1, text).map(|action| Step { line: i + 1, action }))
            }
        })
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<Action, ScriptError> {
    let (command, rest) = match text.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (text, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "category" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: "category",
                    expected: "a category name",
                });
            }
            Ok(Action::Category(rest.to_string()))
        }
        // An empty query is valid and shows everything.
        "search" => Ok(Action::Search(rest.to_string())),
        "clear" => Ok(Action::Clear),
        "show" => Ok(Action::Show),
        "add" => Ok(Action::Add(product_id(line, "add", rest)?)),
        "remove" => Ok(Action::Remove(product_id(line, "remove", rest)?)),
        "qty" => {
            let mut parts = rest.split_whitespace();
            let id = product_id(line, "qty", parts.next().unwrap_or(""))?;
            let delta = parts.next().ok_or(ScriptError::MissingArgument {
                line,
                command: "qty",
                expected: "a product id and a delta",
            })?;
            let delta = delta.parse::<i64>().map_err(|_| ScriptError::InvalidNumber {
                line,
                value: delta.to_string(),
                expected: "quantity delta",
            })?;
            Ok(Action::Quantity(id, delta))
        }
        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}

fn product_id(line: usize, command: &'static str, value: &str) -> Result<ProductId, ScriptError> {
    if value.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "a product id",
        });
    }
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
        expected: "product id",
    })
}
