//! gridsearch-bench: send an agent around a random obstacle grid with one
//! search strategy, or with all of them on the same layout.

use std::env;
use std::error::Error;
use std::process;

use env_logger::Env;
use gridsearch::Pathfinder;
use gridsearch_bench::{Args, BenchConfig, Layout, Session, Summary, USAGE};
use gridsearch_core::Bounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            process::exit(1);
        }
    };

    let mut config = match &args.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let bounds = Bounds::new(config.rows, config.cols);
    let layout = Layout::generate(args.level, bounds, config.rounds, &mut rng);
    log::info!(
        "{}: {} grid, {} obstacles, {} open cells, {} targets",
        args.level,
        bounds,
        layout.grid.obstacles().len(),
        layout.grid.open_count(),
        layout.targets.len()
    );

    let strategies = args.selection.strategies();
    let mut summaries = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let mut search = config.search;
        if search.seed.is_none() {
            search.seed = Some(rng.random());
        }
        let finder = Pathfinder::with_config(strategy, search);
        let mut session = Session::new(&layout.grid, finder, layout.agent, config.retries);
        summaries.push(session.run(&layout.targets)?);
    }

    match summaries.as_slice() {
        [summary] => println!("Score: {}", summary.score),
        _ => print_table(&summaries, layout.targets.len()),
    }
    Ok(())
}

fn print_table(summaries: &[Summary], rounds: usize) {
    println!(
        "{:<12} {:>7} {:>8} {:>7} {:>9} {:>12}",
        "algorithm", "score", "searches", "moves", "expanded", "seconds"
    );
    for s in summaries {
        println!(
            "{:<12} {:>3}/{:<3} {:>8} {:>7} {:>9} {:>12.6}",
            s.strategy.name(),
            s.score,
            rounds,
            s.searches,
            s.moves,
            s.expanded,
            s.elapsed.as_secs_f64()
        );
    }
}
