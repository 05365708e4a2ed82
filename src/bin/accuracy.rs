use clap::Parser;
use rangebench::formats::{read_results, read_truth};
use rangebench::scoring::{score_results, write_report};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "accuracy")]
#[command(about = "Score an engine's result file against a ground-truth file")]
struct Args {
    /// Truth file produced by gen_truth
    truth: PathBuf,

    /// Result file produced by the engine under test
    results: PathBuf,

    /// Optional report destination; prints to the console when omitted
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let truth = read_truth(&args.truth)?;
    let results = read_results(&args.results)?;
    log::info!(
        "Scoring {} result entries against {} truth entries",
        results.entries.len(),
        truth.len()
    );

    let report = score_results(&truth, &results)?;
    write_report(&report, args.output.as_deref())?;

    println!("[FINISH] Compute Query Accuracy");
    Ok(())
}
