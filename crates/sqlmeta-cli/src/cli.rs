use sqlmeta::Engine;
use std::path::PathBuf;

pub const DEFAULT_CONFIG: &str = "sqlmeta.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Check,
    List,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Check(CheckArgs),
    List(ListArgs),
}

/// Where query files come from: the config's packages, or explicit files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    pub config: PathBuf,
    pub engine: Option<Engine>,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub source: SourceArgs,
}

#[derive(Debug, Clone)]
pub struct ListArgs {
    pub source: SourceArgs,
    pub json: bool,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "check" => parse_source_command(HelpTopic::Check, it.map(|s| s.as_str())),
        "list" => parse_source_command(HelpTopic::List, it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_source_command<'a>(
    topic: HelpTopic,
    mut it: impl Iterator<Item = &'a str>,
) -> anyhow::Result<Command> {
    let mut config = PathBuf::from(DEFAULT_CONFIG);
    let mut engine: Option<Engine> = None;
    let mut json = false;
    let mut files: Vec<PathBuf> = Vec::new();

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(topic)),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                config = PathBuf::from(v);
            }
            _ if token.starts_with("--config=") => {
                config = PathBuf::from(token.trim_start_matches("--config="));
            }
            "--engine" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--engine requires a value");
                };
                engine = Some(parse_engine(v)?);
            }
            _ if token.starts_with("--engine=") => {
                engine = Some(parse_engine(token.trim_start_matches("--engine="))?);
            }
            "--json" if topic == HelpTopic::List => json = true,
            other if other.starts_with('-') => anyhow::bail!("unknown argument: {other}"),
            other => files.push(PathBuf::from(other)),
        }
    }

    let source = SourceArgs {
        config,
        engine,
        files,
    };

    Ok(match topic {
        HelpTopic::List => Command::List(ListArgs { source, json }),
        HelpTopic::Check | HelpTopic::Root => Command::Check(CheckArgs { source }),
    })
}

fn parse_engine(v: &str) -> anyhow::Result<Engine> {
    v.parse::<Engine>().map_err(anyhow::Error::msg)
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqlmeta - inspect annotated SQL query files

USAGE:
  sqlmeta <COMMAND> [OPTIONS] [FILES...]

COMMANDS:
  check         Report malformed `-- name:` annotations and duplicate names
  list          Print the statements found in each file

Run `sqlmeta <command> --help` for more."
            );
        }
        HelpTopic::Check => {
            println!(
                "\
USAGE:
  sqlmeta check [OPTIONS] [FILES...]

OPTIONS:
  --config <FILE>       Config file path (default: sqlmeta.toml)
  --engine <ENGINE>     postgresql | mysql | sqlite (overrides config)
  -h, --help            Print help

FILES replace the config's [[packages]] when given."
            );
        }
        HelpTopic::List => {
            println!(
                "\
USAGE:
  sqlmeta list [OPTIONS] [FILES...]

OPTIONS:
  --config <FILE>       Config file path (default: sqlmeta.toml)
  --engine <ENGINE>     postgresql | mysql | sqlite (overrides config)
  --json                Print statements as a JSON array
  -h, --help            Print help

FILES replace the config's [[packages]] when given."
            );
        }
    }
}
