use micro_algos::telemetry;
use micro_algos::transform::IntegerBatch;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let batch = IntegerBatch::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    println!("{}", batch.report());
    Ok(())
}
