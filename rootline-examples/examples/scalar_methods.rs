//! Runs every single-variable method on every catalog bracket and prints the
//! iteration tables.
//!
//! ```sh
//! cargo run -p rootline-examples --example scalar_methods
//! ```

use rootline_examples::{CatalogFunction, scalar_examples};
use rootline_solve::{
    equation::{Bisection, Chord, Newton, RootFinder, Secant, SimpleIteration},
    trace::TableFormat,
};

const PRECISION: f64 = 1e-6;

fn report<M: RootFinder>(method: &M, function: &CatalogFunction, bracket: [f64; 2]) {
    println!("\n{} on [{}, {}]", method.name(), bracket[0], bracket[1]);

    match method.evaluate_root(function, bracket, PRECISION) {
        Ok(trace) => {
            println!("{}", trace.table(TableFormat::new().decimals(8).numbered()));
            println!("x = {}", method.extract_answer(&trace));
        }
        Err(error) => println!("failed: {error}"),
    }
}

fn main() {
    for example in scalar_examples() {
        let function = &example.function;
        println!("\n=== f(x) = {function} ===");

        for &bracket in &example.brackets {
            match function.has_one_root_on_interval(bracket[0], bracket[1]) {
                Ok(true) => {}
                Ok(false) => {
                    println!("[{}, {}] may hold more than one root", bracket[0], bracket[1]);
                }
                Err(error) => println!("cannot check [{}, {}]: {error}", bracket[0], bracket[1]),
            }

            report(&Bisection::default(), function, bracket);
            report(&Chord::default(), function, bracket);
            report(&Newton::default(), function, bracket);
            report(&Secant::default(), function, bracket);
            report(&SimpleIteration::default(), function, bracket);
        }
    }
}
