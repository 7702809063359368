use micro_algos::reverser::TwistableText;
use micro_algos::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let text = TwistableText::new("hello");
    println!("{}", text.report());
    Ok(())
}
