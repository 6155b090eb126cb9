use std::time::{Duration, Instant};

use primefactor_core::{BigInt, FactorList, Factorizer, PrimeFactor, Result};

pub fn run(number: &str, loops: usize) {
    let n = super::parse_or_exit(number);
    let loops = loops.max(1);

    println!("Factoring {n} x{loops}...");

    let (factors, total) = match time_loops(&n, loops) {
        Ok(timed) => timed,
        Err(e) => super::fail(&e),
    };
    let record = PrimeFactor {
        number: n,
        factors: factors.joined(),
        duration: total.as_secs_f64(),
    };
    println!();
    for line in report(&record, total, loops) {
        println!("{line}");
    }
}

/// Factor `n` `loops` times (at least once) with one reused [`Factorizer`].
/// Returns the last result and the total time.
fn time_loops(n: &BigInt, loops: usize) -> Result<(FactorList, Duration)> {
    let mut factorizer = Factorizer::new();
    let start = Instant::now();
    for _ in 1..loops.max(1) {
        factorizer.factor(n)?;
    }
    let factors = factorizer.factor(n)?;
    Ok((factors, start.elapsed()))
}

fn report(record: &PrimeFactor, total: Duration, loops: usize) -> [String; 3] {
    [
        format!("Result: {record}"),
        format!("Duration: {}", super::format_duration(total)),
        format!(
            "Per loop: {}",
            super::format_duration(total.div_f64(loops.max(1) as f64))
        ),
    ]
}
