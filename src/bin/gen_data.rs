use clap::Parser;
use rangebench::formats::write_points;
use rangebench::gen::{generate_points, make_rng};
use rangebench::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gen_data")]
#[command(about = "Generate a random 2D point dataset file")]
struct Args {
    /// Number of points to generate
    n: usize,

    /// Output dataset file path
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load()?;

    let mut rng = make_rng(&config.generator);
    let points = generate_points(args.n, &config.generator, &mut rng);
    write_points(&args.output, &points)?;

    log::info!("Wrote {} points to {}", points.len(), args.output.display());
    println!("[FINISH] Generate Data");
    Ok(())
}
