use micro_algos::digits::DigitHolder;
use micro_algos::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let holder = DigitHolder::try_from(12345_i64)?;
    println!("{}", holder.report());
    Ok(())
}
