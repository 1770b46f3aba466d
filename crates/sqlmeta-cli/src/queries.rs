use crate::cli::SourceArgs;
use crate::config::ProjectConfig;
use sqlmeta::{CommentSyntax, LineError, Scanner, StatementRecord, TrailingBlock};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// 1-based.
    pub line: usize,
}

impl SourceLocation {
    fn new(file: &Path, zero_based_line: usize) -> Self {
        Self {
            file: file.to_path_buf(),
            line: zero_based_line + 1,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    pub syntax: CommentSyntax,
    pub trailing: TrailingBlock,
}

/// A set of query files scanned with the same settings.
#[derive(Debug, Clone)]
pub struct QuerySet {
    pub name: String,
    pub settings: ScanSettings,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct QueryFile {
    pub file: PathBuf,
    pub statements: Vec<StatementRecord>,
    pub errors: Vec<LineError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: SourceLocation,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Work out which files to scan and how.
///
/// Explicit files win over the config's packages. Without a config file the
/// engine defaults to PostgreSQL.
pub fn resolve_query_sets(args: &SourceArgs) -> anyhow::Result<Vec<QuerySet>> {
    let project = if args.config.exists() {
        Some(ProjectConfig::load(&args.config)?)
    } else {
        None
    };

    if !args.files.is_empty() {
        let settings = match &project {
            Some(p) => ScanSettings {
                syntax: p.file.comment_syntax(args.engine),
                trailing: p.file.trailing_block,
            },
            None => ScanSettings {
                syntax: args.engine.unwrap_or_default().comment_syntax(),
                trailing: TrailingBlock::default(),
            },
        };
        return Ok(vec![QuerySet {
            name: "files".to_string(),
            settings,
            files: args.files.clone(),
        }]);
    }

    let Some(project) = project else {
        anyhow::bail!(
            "config file {} not found; pass query files explicitly or create one",
            args.config.display()
        );
    };

    let settings = ScanSettings {
        syntax: project.file.comment_syntax(args.engine),
        trailing: project.file.trailing_block,
    };
    tracing::debug!(
        engine = %args.engine.unwrap_or(project.file.engine),
        ?settings,
        "loaded {}",
        args.config.display()
    );

    project
        .file
        .packages
        .iter()
        .map(|pkg| {
            Ok(QuerySet {
                name: pkg.name.clone(),
                settings,
                files: expand_globs(&project, &pkg.queries)?,
            })
        })
        .collect()
}

fn expand_globs(project: &ProjectConfig, patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    for p in patterns {
        let abs = project.resolve_path(p);
        let pattern = abs
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("invalid glob pattern: {}", abs.display()))?;

        let mut matched_any = false;
        for entry in glob::glob(pattern).map_err(|e| anyhow::anyhow!("invalid glob {pattern}: {e}"))? {
            let path = entry.map_err(|e| anyhow::anyhow!("glob error for {pattern}: {e}"))?;
            if path.is_file() {
                matched_any = true;
                files.insert(path);
            }
        }

        if !matched_any {
            anyhow::bail!("glob pattern matched no files: {p}");
        }
    }

    Ok(files.into_iter().collect())
}

pub fn load_query_set(set: &QuerySet) -> anyhow::Result<Vec<QueryFile>> {
    let mut out = Vec::with_capacity(set.files.len());
    for f in &set.files {
        let content = std::fs::read_to_string(f)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", f.display()))?;
        let qf = scan_query_file(f, &content, set.settings);
        tracing::debug!(
            file = %f.display(),
            statements = qf.statements.len(),
            errors = qf.errors.len(),
            "scanned"
        );
        out.push(qf);
    }
    Ok(out)
}

pub fn scan_query_file(path: &Path, content: &str, settings: ScanSettings) -> QueryFile {
    let (statements, errors) = Scanner::new(settings.syntax)
        .trailing(settings.trailing)
        .scan(content)
        .into_parts();
    QueryFile {
        file: path.to_path_buf(),
        statements,
        errors,
    }
}

/// Annotation errors of every file, followed by query names declared more
/// than once across the set.
pub fn diagnostics(files: &[QueryFile]) -> Vec<Diagnostic> {
    let mut out: Vec<Diagnostic> = files
        .iter()
        .flat_map(|qf| {
            qf.errors.iter().map(move |e| Diagnostic {
                location: SourceLocation::new(&qf.file, e.line),
                message: e.error.to_string(),
            })
        })
        .collect();

    let mut seen: BTreeMap<&str, SourceLocation> = BTreeMap::new();
    for qf in files {
        for s in &qf.statements {
            let location = SourceLocation::new(&qf.file, s.start_line);
            if let Some(prev) = seen.get(s.name.as_str()) {
                out.push(Diagnostic {
                    message: format!("duplicate query name: {} previously defined at {prev}", s.name),
                    location,
                });
            } else {
                seen.insert(&s.name, location);
            }
        }
    }

    out
}
