use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use u_tsp::city::CityRegistry;
use u_tsp::error::TspResult;
use u_tsp::ga::GaConfig;
use u_tsp::logging::{self, LogLevel};
use u_tsp::random::rng_from_seed;
use u_tsp::report;
use u_tsp::solver::TspSolver;
use u_tsp::two_opt::TwoOptConfig;

/// Approximate a Euclidean TSP tour with a genetic algorithm and 2-opt.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// City file, one `x,y` pair per line. Defaults to the 20-city demo.
    #[arg(long, conflicts_with = "random_cities")]
    cities: Option<PathBuf>,

    /// Generate this many random cities on a 200 x 200 grid instead.
    #[arg(long)]
    random_cities: Option<usize>,

    #[arg(long, default_value_t = 50)]
    population_size: usize,

    #[arg(long, default_value_t = 100)]
    generations: usize,

    #[arg(long, default_value_t = 0.015)]
    mutation_rate: f64,

    #[arg(long, default_value_t = 5)]
    tournament_size: usize,

    /// Disable carrying the fittest tour into the next generation.
    #[arg(long)]
    no_elitism: bool,

    #[arg(long)]
    seed: Option<u64>,

    /// Cap on 2-opt passes; unbounded when omitted.
    #[arg(long)]
    max_two_opt_passes: Option<usize>,

    /// Directory for the SVG report. No report is written when omitted.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    log_timestamp: bool,
}

impl Args {
    fn ga_config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            generations: self.generations,
            mutation_rate: self.mutation_rate,
            tournament_size: self.tournament_size,
            elitism: !self.no_elitism,
            seed: self.seed,
        }
    }

    fn two_opt_config(&self) -> TwoOptConfig {
        TwoOptConfig {
            max_passes: self.max_two_opt_passes,
        }
    }

    fn registry(&self) -> TspResult<CityRegistry> {
        if let Some(path) = &self.cities {
            let text = std::fs::read_to_string(path)?;
            return CityRegistry::parse(&text);
        }
        if let Some(n) = self.random_cities {
            // Offset so city layout and GA draws differ for the same seed.
            let mut rng = rng_from_seed(self.seed.map(|s| s.wrapping_add(1)));
            return CityRegistry::random(n, 200, &mut rng);
        }
        Ok(CityRegistry::classic_twenty())
    }
}

fn run(args: &Args) -> TspResult<()> {
    let now = Instant::now();
    let registry = args.registry()?;
    let solution = TspSolver::run(&registry, &args.ga_config(), &args.two_opt_config())?;

    println!("Initial distance: {:.3}", solution.initial_best.distance());
    println!("GA distance: {:.3}", solution.ga_best.distance());
    println!("Final distance: {:.3}", solution.distance());
    println!("Solution:");
    println!("{}", solution.refined);

    if let Some(dir) = &args.out_dir {
        let initial: Vec<_> = solution.initial_best.cities().copied().collect();
        report::write_report(dir, &initial, &solution.route(), &solution.distance_history)?;
    }

    info!(
        "done: n={} generations={} time={:.2}s",
        registry.count(),
        solution.generations,
        now.elapsed().as_secs_f32()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::init_logger(args.log_level, args.log_timestamp) {
        eprintln!("failed to initialise logger: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
