use clap::Parser;
use rangebench::formats::{read_circles, read_datasets, write_truth};
use rangebench::oracle::compute_truth;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gen_truth")]
#[command(about = "Compute brute-force ground truth for a query file over one or more datasets")]
struct Args {
    /// Dataset file(s); point IDs must be unique across all of them
    #[arg(required = true)]
    data: Vec<PathBuf>,

    /// Query file
    #[arg(short, long)]
    query: PathBuf,

    /// Output truth file path
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let points = read_datasets(&args.data)?;
    log::info!(
        "Loaded {} points from {} dataset file(s)",
        points.len(),
        args.data.len()
    );

    let circles = read_circles(&args.query)?;
    log::info!("Loaded {} queries from {}", circles.len(), args.query.display());

    let truth = compute_truth(&points, &circles);
    write_truth(&args.output, &truth)?;

    log::info!("Truth file written to {}", args.output.display());
    println!("[FINISH] Generate Ground Truth");
    Ok(())
}
