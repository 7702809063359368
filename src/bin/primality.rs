use micro_algos::primality::OddityCandidate;
use micro_algos::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let candidate = OddityCandidate::new(29);
    println!("{}", candidate.report());
    Ok(())
}
