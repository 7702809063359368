use micro_algos::sequence::SequenceState;
use micro_algos::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let state = SequenceState::try_from(10_i64)?;
    println!("{}", state.report());
    Ok(())
}
