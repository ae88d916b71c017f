//! Solves the catalog systems by fixed-point iteration, logging each iterate.
//!
//! ```sh
//! cargo run -p rootline-examples --example fixed_point_system
//! ```

use log::{Level, LevelFilter, Log, Metadata, Record};
use rootline_examples::{CatalogError, system_examples};
use rootline_observers::LogObserver;
use rootline_solve::{system::fixed_point, trace::TableFormat};

const PRECISION: f64 = 1e-4;

/// Writes `info` and above to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> Result<(), CatalogError> {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }

    for example in system_examples()? {
        println!("\n{}", example.system);

        let observer = LogObserver::new(example.system.label()).with_level(Level::Info);
        let solution = match fixed_point::solve(
            &example.system,
            &example.intervals,
            &example.start,
            PRECISION,
            &fixed_point::Config::default(),
            observer,
        ) {
            Ok(solution) => solution,
            Err(error) => {
                println!("failed: {error}");
                continue;
            }
        };

        println!("{}", solution.trace.table(TableFormat::new().decimals(6).numbered()));

        let answer = solution.answer();
        for (i, x) in answer.iter().enumerate() {
            println!("x_{i} = {x}");
        }
        println!("iterations: {}", solution.iters);

        if let Ok(residuals) = example.system.residuals(&answer) {
            for (i, residual) in residuals.iter().enumerate() {
                println!("residual {i}: {residual}");
            }
        }
    }

    Ok(())
}
