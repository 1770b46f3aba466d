mod check;
mod cli;
mod config;
mod list;
mod queries;

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let cmd = cli::parse_args(&args)?;
    match cmd {
        cli::Command::Help(topic) => {
            cli::print_help(topic);
            Ok(())
        }
        cli::Command::Check(args) => check::run(args),
        cli::Command::List(args) => list::run(args),
    }
}
