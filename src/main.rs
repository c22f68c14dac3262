use anyhow::Context;

use shor_rsa_break::{BreakReport, Pipeline};

fn print_report(report: &BreakReport) {
    println!("[RSA] n={}, e={}", report.public_key.n, report.public_key.e);
    println!("Message: {}  Ciphertext: {}", report.message, report.ciphertext);
    println!(
        "[{}] Factors: p={}, q={}",
        report.source, report.factors.a, report.factors.b
    );
    println!("Reconstructed private exponent: d={}", report.d);
    println!("Recovered message: {}", report.recovered);
    println!(
        "Verification: {}",
        if report.verified { "SUCCESS" } else { "FAILED" }
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut pipeline = Pipeline::default();
    let report = pipeline.run().context("break pipeline aborted")?;
    print_report(&report);

    Ok(())
}
