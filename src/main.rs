use numeric_processing::processing::{transform, DataProcessor};
use numeric_processing::types::Number;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Diagnostics go to stderr so stdout stays a single stats line.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("numeric_processing=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    tracing::info!("starting numeric-processing driver");

    let output = transform(Number::Int64(5), Number::Int64(3), Number::Int64(2))?;
    tracing::debug!(result = ?output.result, "transform output not consumed further");

    let mut processor = DataProcessor::new("test");
    for value in [5, -3, 15, 0, 8] {
        processor.add(Number::Int64(value));
    }

    processor.process()?;
    let stats = processor.stats();
    tracing::info!(cnt = stats.cnt, "run complete");

    println!("{}", serde_json::to_string(&stats)?);

    Ok(())
}
