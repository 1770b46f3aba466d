//! Splitting a query file into statement blocks.
//!
//! Each annotation line opens a block; every following line up to the next
//! annotation is that block's SQL text. Malformed annotations are collected as
//! [`LineError`]s and the text after them is dropped until the next good one.

use crate::annotation::{ExecMode, parse_annotation};
use crate::comment::{CommentSyntax, Dialect};
use crate::error::LineError;
use serde::{Deserialize, Serialize};

/// One extracted statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRecord {
    pub name: String,
    pub mode: ExecMode,
    /// Lines after the annotation, each prefixed with a single space.
    ///
    /// Line breaks are not preserved.
    pub sql_text: String,
    /// Zero-based index of the annotation line.
    pub start_line: usize,
}

/// What to do with the block still open when input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBlock {
    /// Drop it. A block is only emitted when a later annotation closes it.
    #[default]
    Discard,
    /// Emit it like any other block.
    Keep,
}

/// Result of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub statements: Vec<StatementRecord>,
    pub errors: Vec<LineError>,
}

impl ScanOutput {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<StatementRecord>, Vec<LineError>) {
        (self.statements, self.errors)
    }
}

#[derive(Debug)]
struct Pending {
    // `None` after a malformed annotation: text is discarded until the next one.
    head: Option<(String, ExecMode)>,
    sql_text: String,
    start_line: usize,
}

impl Pending {
    fn into_record(self) -> Option<StatementRecord> {
        let (name, mode) = self.head?;
        if name.is_empty() || self.sql_text.is_empty() {
            return None;
        }
        Some(StatementRecord {
            name,
            mode,
            sql_text: self.sql_text,
            start_line: self.start_line,
        })
    }
}

/// Line-at-a-time block scanner.
///
/// ```
/// use sqlmeta::{CommentSyntax, Scanner, TrailingBlock};
///
/// let out = Scanner::new(CommentSyntax::dash_only())
///     .trailing(TrailingBlock::Keep)
///     .scan("-- name: GetUser :one\nSELECT 1;");
/// assert_eq!(out.statements[0].sql_text, " SELECT 1;");
/// ```
#[derive(Debug)]
pub struct Scanner {
    syntax: CommentSyntax,
    trailing: TrailingBlock,
    pending: Option<Pending>,
    out: ScanOutput,
}

impl Scanner {
    pub fn new(syntax: CommentSyntax) -> Self {
        Self {
            syntax,
            trailing: TrailingBlock::default(),
            pending: None,
            out: ScanOutput::default(),
        }
    }

    pub fn trailing(mut self, trailing: TrailingBlock) -> Self {
        self.trailing = trailing;
        self
    }

    /// Feed the line at zero-based `index`.
    pub fn push_line(&mut self, index: usize, line: &str) {
        if Dialect::annotation_candidate(line, self.syntax).is_some() {
            let head = match parse_annotation(line, self.syntax) {
                Ok(Some(a)) => Some((a.name.to_string(), a.mode)),
                Ok(None) => None,
                Err(error) => {
                    tracing::debug!(line = index, %error, "skipping malformed annotation");
                    self.out.errors.push(LineError { line: index, error });
                    None
                }
            };
            self.flush();
            self.pending = Some(Pending {
                head,
                sql_text: String::new(),
                start_line: index,
            });
            return;
        }

        if let Some(pending) = self.pending.as_mut().filter(|p| p.head.is_some()) {
            pending.sql_text.push(' ');
            pending.sql_text.push_str(line);
        }
    }

    /// Feed every `\n`-separated line of `src` and finish.
    pub fn scan(mut self, src: &str) -> ScanOutput {
        for (index, line) in src.split('\n').enumerate() {
            self.push_line(index, line);
        }
        self.finish()
    }

    pub fn finish(mut self) -> ScanOutput {
        match self.trailing {
            TrailingBlock::Keep => self.flush(),
            TrailingBlock::Discard => {
                if let Some(Pending { head: Some((name, _)), start_line, .. }) = &self.pending {
                    tracing::trace!(%name, line = *start_line, "discarding trailing block");
                }
            }
        }
        self.out
    }

    fn flush(&mut self) {
        if let Some(record) = self.pending.take().and_then(Pending::into_record) {
            tracing::trace!(name = %record.name, line = record.start_line, "statement");
            self.out.statements.push(record);
        }
    }
}

/// Split `src` into statement records and annotation errors.
///
/// A block is emitted only when a later annotation line closes it, so the
/// block still open at end of input is not returned. Use
/// [`Scanner::trailing`] with [`TrailingBlock::Keep`] to keep it.
///
/// ```
/// use sqlmeta::{CommentSyntax, scan};
///
/// let out = scan("-- name: A :one\nSELECT 1;\n-- name: B :many\nSELECT 2;\n", CommentSyntax::all());
/// assert_eq!(out.statements.len(), 1);
/// assert_eq!(out.statements[0].name, "A");
/// ```
pub fn scan(src: &str, syntax: CommentSyntax) -> ScanOutput {
    Scanner::new(syntax).scan(src)
}
