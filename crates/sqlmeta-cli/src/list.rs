use crate::cli::ListArgs;
use crate::queries::{QueryFile, load_query_set, resolve_query_sets};
use serde::Serialize;
use sqlmeta::StatementRecord;

#[derive(Debug, Serialize)]
struct ListedStatement<'a> {
    package: &'a str,
    file: String,
    #[serde(flatten)]
    record: &'a StatementRecord,
    returns_rows: bool,
}

fn listed_statements<'a>(
    package: &'a str,
    qf: &'a QueryFile,
) -> impl Iterator<Item = ListedStatement<'a>> + 'a {
    qf.statements.iter().map(move |record| ListedStatement {
        package,
        file: qf.file.display().to_string(),
        record,
        returns_rows: record.mode.returns_rows(),
    })
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let sets = resolve_query_sets(&args.source)?;

    let mut loaded = Vec::with_capacity(sets.len());
    for set in &sets {
        loaded.push((set, load_query_set(set)?));
    }

    let listed: Vec<ListedStatement<'_>> = loaded
        .iter()
        .flat_map(|(set, files)| {
            files
                .iter()
                .flat_map(move |qf| listed_statements(set.name.as_str(), qf))
        })
        .collect();

    if args.json {
        let out = serde_json::to_string_pretty(&listed)
            .map_err(|e| anyhow::anyhow!("failed to serialize statements: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    for s in &listed {
        println!(
            "{}:{} {} {}{}",
            s.file,
            s.record.start_line + 1,
            s.record.name,
            s.record.mode,
            if s.returns_rows { " (rows)" } else { "" }
        );
    }

    let errors: usize = loaded
        .iter()
        .flat_map(|(_, files)| files.iter())
        .map(|f| f.errors.len())
        .sum();
    if errors > 0 {
        eprintln!("[WARN] {errors} malformed annotations skipped; run `sqlmeta check` for details");
    }

    Ok(())
}
