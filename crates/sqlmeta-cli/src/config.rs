use serde::Deserialize;
use sqlmeta::{CommentSyntax, Engine, TrailingBlock};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub config_dir: PathBuf,
    pub file: ConfigFile,
}

impl ProjectConfig {
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(config_path).map_err(|e| {
            anyhow::anyhow!("failed to read config file {}: {e}", config_path.display())
        })?;
        Self::from_toml(config_path, &raw)
    }

    pub fn from_toml(config_path: &Path, raw: &str) -> anyhow::Result<Self> {
        let config_dir = config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let file: ConfigFile = toml::from_str(raw).map_err(|e| {
            anyhow::anyhow!("failed to parse config file {}: {e}", config_path.display())
        })?;
        file.validate()?;

        Ok(Self { config_dir, file })
    }

    pub fn resolve_path(&self, p: impl AsRef<Path>) -> PathBuf {
        let p = p.as_ref();
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.config_dir.join(p)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub engine: Engine,

    #[serde(default)]
    pub trailing_block: TrailingBlock,

    #[serde(default)]
    pub comments: CommentOverrides,

    #[serde(default)]
    pub packages: Vec<PackageConfig>,
}

/// Per-dialect switches layered over the engine's default comment syntax.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CommentOverrides {
    pub dash: Option<bool>,
    pub hash: Option<bool>,
    pub slash_star: Option<bool>,
}

impl CommentOverrides {
    pub fn apply(self, base: CommentSyntax) -> CommentSyntax {
        CommentSyntax {
            dash: self.dash.unwrap_or(base.dash),
            hash: self.hash.unwrap_or(base.hash),
            slash_star: self.slash_star.unwrap_or(base.slash_star),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageConfig {
    pub name: String,
    pub queries: Vec<String>,
}

impl ConfigFile {
    /// Comment syntax for this project, with `engine` taking precedence over
    /// the configured one.
    pub fn comment_syntax(&self, engine: Option<Engine>) -> CommentSyntax {
        let engine = engine.unwrap_or(self.engine);
        self.comments.apply(engine.comment_syntax())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.version.trim() != "1" {
            anyhow::bail!("unsupported config version: {}", self.version);
        }

        let syntax = self.comment_syntax(None);
        if !(syntax.dash || syntax.hash || syntax.slash_star) {
            anyhow::bail!("[comments] disables every comment dialect");
        }

        if self.packages.is_empty() {
            anyhow::bail!("at least one [[packages]] entry is required");
        }

        let mut seen = std::collections::HashSet::<&str>::new();
        for p in &self.packages {
            if p.name.trim().is_empty() {
                anyhow::bail!("packages.name must not be empty");
            }
            if !seen.insert(p.name.as_str()) {
                anyhow::bail!("duplicate packages.name: {}", p.name);
            }
            if p.queries.is_empty() {
                anyhow::bail!("packages.queries must not be empty (package: {})", p.name);
            }
        }

        Ok(())
    }
}
