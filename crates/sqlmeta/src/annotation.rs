//! Parsing a single `-- name: <Name> :<mode>` header line.

use crate::comment::{CommentSyntax, Dialect};
use crate::error::{AnnotationError, AnnotationResult};
use crate::ident::validate_query_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How generated code should execute a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecMode {
    /// Returns exactly one row.
    #[serde(rename = ":one")]
    One,
    /// Returns any number of rows.
    #[serde(rename = ":many")]
    Many,
    /// Executes without returning rows.
    #[serde(rename = ":exec")]
    Exec,
    /// Executes and reports the affected row count.
    #[serde(rename = ":execrows", alias = ":exec-rows")]
    ExecRows,
    /// Executes and hands back the driver's raw result.
    #[serde(rename = ":execresult", alias = ":exec-result")]
    ExecResult,
}

impl ExecMode {
    pub const ALL: [ExecMode; 5] = [
        ExecMode::One,
        ExecMode::Many,
        ExecMode::Exec,
        ExecMode::ExecRows,
        ExecMode::ExecResult,
    ];

    /// The canonical header token, e.g. `:one`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => ":one",
            Self::Many => ":many",
            Self::Exec => ":exec",
            Self::ExecRows => ":execrows",
            Self::ExecResult => ":execresult",
        }
    }

    /// Whether generated code expects rows back.
    pub const fn returns_rows(self) -> bool {
        matches!(self, Self::One | Self::Many)
    }
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecMode {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ":one" => Ok(Self::One),
            ":many" => Ok(Self::Many),
            ":exec" => Ok(Self::Exec),
            ":execrows" | ":exec-rows" => Ok(Self::ExecRows),
            ":execresult" | ":exec-result" => Ok(Self::ExecResult),
            other => Err(AnnotationError::invalid_mode(other)),
        }
    }
}

/// A parsed annotation header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    pub name: &'a str,
    pub mode: ExecMode,
}

/// Parse one line as an annotation header.
///
/// Returns `Ok(None)` when the line is not an annotation at all: no enabled
/// opener, or the opener is not followed by the literal `name:` marker.
///
/// ```
/// use sqlmeta::{CommentSyntax, ExecMode, parse_annotation};
///
/// let a = parse_annotation("-- name: GetUser :one", CommentSyntax::all())?.unwrap();
/// assert_eq!((a.name, a.mode), ("GetUser", ExecMode::One));
/// assert!(parse_annotation("-- just a comment", CommentSyntax::all())?.is_none());
/// # Ok::<(), sqlmeta::AnnotationError>(())
/// ```
pub fn parse_annotation(line: &str, syntax: CommentSyntax) -> AnnotationResult<Option<Annotation<'_>>> {
    let Some(dialect) = Dialect::annotation_candidate(line, syntax) else {
        return Ok(None);
    };

    let mut parts: Vec<&str> = line.split_whitespace().collect();
    if let Some(closer) = dialect.closer() {
        if parts.last() != Some(&closer) {
            return Err(AnnotationError::malformed(line));
        }
        parts.pop();
    }

    // `--` `name:` <name> <mode>
    let (name, mode) = match parts.as_slice() {
        [_, _] | [_, _, _] => return Err(AnnotationError::missing_mode(line)),
        [_, _, name, mode] => (*name, *mode),
        _ => return Err(AnnotationError::malformed(line)),
    };

    let mode = mode.parse::<ExecMode>()?;
    validate_query_name(name)?;

    Ok(Some(Annotation { name, mode }))
}

/// Parse the first annotation candidate line found in `text`.
///
/// Useful for reading the header of a single statement that still carries its
/// comment. Lines that are not annotation candidates are skipped; the first
/// candidate decides the result.
pub fn find_annotation(text: &str, syntax: CommentSyntax) -> AnnotationResult<Option<Annotation<'_>>> {
    match text
        .split('\n')
        .find(|line| Dialect::annotation_candidate(line, syntax).is_some())
    {
        Some(line) => parse_annotation(line, syntax),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests;
