//! Comment dialects that may open an annotation line.
//!
//! Dialect gating lives here only; the parser and the scanner both go through
//! [`Dialect::annotation_candidate`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which comment forms are recognized as annotation openers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSyntax {
    /// `-- name: ...`
    pub dash: bool,
    /// `# name: ...`
    pub hash: bool,
    /// `/* name: ... */`
    pub slash_star: bool,
}

impl CommentSyntax {
    /// Every dialect enabled.
    pub const fn all() -> Self {
        Self {
            dash: true,
            hash: true,
            slash_star: true,
        }
    }

    /// Only `--` comments.
    pub const fn dash_only() -> Self {
        Self {
            dash: true,
            hash: false,
            slash_star: false,
        }
    }

    pub const fn is_enabled(self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::Dash => self.dash,
            Dialect::SlashStar => self.slash_star,
            Dialect::Hash => self.hash,
        }
    }
}

/// One of the supported comment-opener styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Dash,
    SlashStar,
    Hash,
}

impl Dialect {
    /// Openers in match priority order.
    pub const ALL: [Dialect; 3] = [Dialect::Dash, Dialect::SlashStar, Dialect::Hash];

    pub const fn opener(self) -> &'static str {
        match self {
            Self::Dash => "--",
            Self::SlashStar => "/*",
            Self::Hash => "#",
        }
    }

    /// The literal prefix an annotation line of this dialect starts with.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Dash => "-- name:",
            Self::SlashStar => "/* name:",
            Self::Hash => "# name:",
        }
    }

    /// The token closing the comment on the same line, if the dialect has one.
    pub const fn closer(self) -> Option<&'static str> {
        match self {
            Self::SlashStar => Some("*/"),
            Self::Dash | Self::Hash => None,
        }
    }

    /// The dialect whose opener starts `line`, provided `syntax` enables it.
    ///
    /// A line opening with a disabled dialect yields `None`; it is plain SQL.
    pub fn detect(line: &str, syntax: CommentSyntax) -> Option<Self> {
        let dialect = Self::ALL
            .into_iter()
            .find(|d| line.starts_with(d.opener()))?;
        syntax.is_enabled(dialect).then_some(dialect)
    }

    /// The dialect of `line` when it is an annotation candidate: an enabled
    /// opener immediately followed by the `name:` marker.
    pub fn annotation_candidate(line: &str, syntax: CommentSyntax) -> Option<Self> {
        Self::detect(line, syntax).filter(|d| line.starts_with(d.marker()))
    }
}

/// The marker `line` must start with to be an annotation, or `None` when its
/// opener is unknown or disabled.
///
/// ```
/// use sqlmeta::{CommentSyntax, annotation_prefix};
///
/// assert_eq!(annotation_prefix("-- anything", CommentSyntax::all()), Some("-- name:"));
/// assert_eq!(annotation_prefix("# name: x :one", CommentSyntax::dash_only()), None);
/// ```
pub fn annotation_prefix(line: &str, syntax: CommentSyntax) -> Option<&'static str> {
    Dialect::detect(line, syntax).map(Dialect::marker)
}

/// SQL engines with a default comment syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    #[serde(alias = "postgres")]
    Postgresql,
    Mysql,
    Sqlite,
}

impl Engine {
    pub const fn comment_syntax(self) -> CommentSyntax {
        match self {
            Self::Postgresql => CommentSyntax::dash_only(),
            Self::Mysql => CommentSyntax::all(),
            Self::Sqlite => CommentSyntax {
                dash: true,
                hash: false,
                slash_star: true,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" | "postgres" => Ok(Self::Postgresql),
            "mysql" => Ok(Self::Mysql),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("unsupported engine: {other}")),
        }
    }
}
