//! Basic usage: direct calls, NaN skipping, and selection by name.
//!
//! ```sh
//! cargo run --example basic_ops -- Correlation
//! ```

use pairwise::{norm, StdMetric, StdNorm};

fn main() {
    let a = [1.0_f64, 2.0, 3.0, 4.0];
    let b = [1.5_f64, 1.5, 3.5, 5.0];

    println!("a = {a:?}");
    println!("b = {b:?}\n");

    println!("{:<16} {:>10}", "metric", "value");
    for kind in StdMetric::ALL {
        println!("{:<16} {:>10.4}", kind, kind.func64()(&a, &b));
    }

    println!("\n{:<16} {:>10}", "norm(a)", "value");
    for kind in StdNorm::ALL {
        println!("{:<16} {:>10.4}", kind, kind.func64()(&a));
    }

    // A missing reading in one vector removes only that position.
    let with_gap = [1.0_f64, f64::NAN, 3.0, 4.0];
    println!(
        "\nsum_squares with a NaN at index 1: {} (norm::sum of that vector: {})",
        pairwise::sum_squares(&with_gap, &b),
        norm::sum(&with_gap),
    );

    let name = std::env::args().nth(1).unwrap_or_else(|| "Cosine".to_string());
    match name.parse::<StdMetric>() {
        Ok(kind) => println!("\n{kind}(a, b) = {}", kind.func64()(&a, &b)),
        Err(e) => eprintln!("\n{e}; expected one of {:?}", StdMetric::ALL),
    }
}
