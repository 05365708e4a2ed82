use clap::Parser;
use rangebench::formats::write_circles;
use rangebench::gen::{generate_circles, make_rng};
use rangebench::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gen_query")]
#[command(about = "Generate a random circular range-query file")]
struct Args {
    /// Number of queries to generate
    n: usize,

    /// Output query file path
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load()?;

    let mut rng = make_rng(&config.generator);
    let circles = generate_circles(args.n, &config.generator, &mut rng);
    write_circles(&args.output, &circles)?;

    log::info!(
        "Wrote {} queries to {}",
        circles.len(),
        args.output.display()
    );
    println!("[FINISH] Generate Query");
    Ok(())
}
