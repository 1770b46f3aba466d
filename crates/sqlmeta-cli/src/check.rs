use crate::cli::CheckArgs;
use crate::queries::{diagnostics, load_query_set, resolve_query_sets};

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let sets = resolve_query_sets(&args.source)?;

    let mut had_error = false;
    let mut statements = 0usize;

    for set in &sets {
        let files = load_query_set(set)?;
        statements += files.iter().map(|f| f.statements.len()).sum::<usize>();

        let diags = diagnostics(&files);
        if diags.is_empty() {
            tracing::info!(package = %set.name, files = files.len(), "ok");
        }
        for d in diags {
            had_error = true;
            eprintln!("[ERROR] {d}");
        }
    }

    if had_error {
        anyhow::bail!("query check failed");
    }

    println!("{statements} statements ok");
    Ok(())
}
