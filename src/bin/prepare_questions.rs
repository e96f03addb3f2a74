use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cyber_arena::question::cleaning::{self, Curation, RawRecord};

#[derive(Parser)]
#[command(
    name = "prepare_questions",
    about = "Clean scraped exam records into a cyber-arena question bank"
)]
struct Cli {
    /// Raw records (JSON array with alternativas/respostaCorreta)
    input: PathBuf,

    #[arg(short, long, default_value = "assets/data/questions.json")]
    output: PathBuf,

    /// TOML file with `drop_ids` and an `[answer_overrides]` table
    #[arg(short, long)]
    curation: Option<PathBuf>,

    /// Only report, do not write the output file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let records: Vec<RawRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    println!("Analyzing {} records...", records.len());

    let mut report = cleaning::clean_all(&records);

    if let Some(path) = &cli.curation {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let curation = Curation::from_toml(&text)
            .with_context(|| format!("parsing curation {}", path.display()))?;
        let outcome = curation.apply(&mut report.accepted);
        println!("Curation: dropped {} questions", outcome.dropped);
        for (id, old, new) in &outcome.corrected {
            println!("  corrected {id}: \"{old}\" -> \"{new}\"");
        }
    }

    let numeric = cleaning::numeric_answers(&report.accepted);
    if numeric.is_empty() {
        println!("No numeric answers found.");
    } else {
        println!("{} answers contain digits:", numeric.len());
        for q in numeric {
            let preview: String = q.hint.chars().take(50).collect();
            println!("  {} [{}] \"{preview}...\" -> {}", q.id, q.discipline, q.answer);
        }
    }

    println!("---------------------------------------------------");
    println!("Rejected, answer too long or short: {}", report.long_text);
    println!("Rejected, markdown table in hint:   {}", report.bad_table);
    println!("Rejected, no correct answer:        {}", report.no_answer);
    println!("Accepted:                           {}", report.accepted.len());
    println!("---------------------------------------------------");

    if !cli.dry_run {
        let json = serde_json::to_string_pretty(&report.accepted)?;
        if let Some(parent) = cli.output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&cli.output, json)
            .with_context(|| format!("writing {}", cli.output.display()))?;
        println!("Wrote {}", cli.output.display());
    }

    Ok(())
}
