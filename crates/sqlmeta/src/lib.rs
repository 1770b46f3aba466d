//! sqlmeta
//!
//! Splits a SQL file holding several statements into named, typed blocks. Each
//! statement is preceded by an annotation comment naming it and declaring how
//! generated code should execute it:
//!
//! ```sql
//! -- name: GetUser :one
//! SELECT id, email FROM users WHERE id = $1;
//!
//! -- name: ListUsers :many
//! SELECT id, email FROM users;
//! ```
//!
//! The SQL itself is opaque here: it is collected verbatim (space-joined) and
//! handed to whatever parses SQL downstream.
//!
//! # Comment dialects
//!
//! | Dialect | Annotation                  | Enabled by                 |
//! |---------|-----------------------------|----------------------------|
//! | dash    | `-- name: Q :one`           | [`CommentSyntax::dash`]    |
//! | hash    | `# name: Q :one`            | [`CommentSyntax::hash`]    |
//! | block   | `/* name: Q :one */`        | [`CommentSyntax::slash_star`] |
//!
//! [`Engine::comment_syntax`] gives the usual set per database engine.
//!
//! # Example
//!
//! ```
//! use sqlmeta::{Engine, ExecMode, Scanner, TrailingBlock};
//!
//! let src = "-- name: GetUser :one\nSELECT 1;\n-- name: bad-name :many\nSELECT 2;\n";
//! let out = Scanner::new(Engine::Postgresql.comment_syntax())
//!     .trailing(TrailingBlock::Keep)
//!     .scan(src);
//!
//! assert_eq!(out.statements.len(), 1);
//! assert_eq!(out.statements[0].mode, ExecMode::One);
//! assert_eq!(out.errors[0].line, 2);
//! ```

pub mod annotation;
pub mod comment;
pub mod error;
pub mod ident;
pub mod scan;

pub use annotation::{Annotation, ExecMode, find_annotation, parse_annotation};
pub use comment::{CommentSyntax, Dialect, Engine, annotation_prefix};
pub use error::{AnnotationError, AnnotationResult, LineError};
pub use ident::validate_query_name;
pub use scan::{ScanOutput, Scanner, StatementRecord, TrailingBlock, scan};
