//! CLI for ranking a decision matrix supplied as JSON.
//!
//! Reads a JSON array of `{"row": alternative, "column": criterion,
//! "value": score}` entries from a file path argument (or stdin when no
//! path is given), runs the pipeline, and prints the ranking. With
//! `--trace`, every intermediate table is rendered to stderr.

use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use topsis_rank::domain::ranking::render::WriteSink;
use topsis_rank::{run, run_with_trace, DecisionMatrix, LabeledEntry, Ranking, TopsisError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut trace = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--trace" {
            trace = true;
        } else {
            path = Some(arg);
        }
    }

    match execute(path.as_deref(), trace) {
        Ok(ranking) => {
            print_ranking(&ranking);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn execute(path: Option<&str>, trace: bool) -> Result<Ranking, String> {
    let entries = read_entries(path)?;
    let matrix = DecisionMatrix::from_entries(entries).map_err(describe)?;

    let pipeline = if trace {
        let mut sink = WriteSink::new(io::stderr());
        run_with_trace(&matrix, &mut sink)
    } else {
        run(&matrix)
    }
    .map_err(describe)?;

    pipeline.ranking().map_err(describe)
}

fn read_entries(path: Option<&str>) -> Result<Vec<LabeledEntry>, String> {
    let mut input = String::new();
    match path {
        Some(path) => {
            let mut file =
                File::open(path).map_err(|e| format!("cannot open '{}': {}", path, e))?;
            file.read_to_string(&mut input)
                .map_err(|e| format!("cannot read '{}': {}", path, e))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
        }
    }
    serde_json::from_str(&input).map_err(|e| format!("invalid JSON input: {}", e))
}

fn describe(err: TopsisError) -> String {
    format!("[{}] {}", err.kind(), err)
}

fn print_ranking(ranking: &Ranking) {
    println!("Best alternative: {}", ranking.best);
    println!();
    println!("Rank\tAlternative\tCloseness");
    for entry in &ranking.alternatives {
        println!(
            "{}\t{}\t{:.3}",
            entry.rank, entry.alternative, entry.closeness
        );
    }
}
