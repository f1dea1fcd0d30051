use kassa::{Granularity, Kassa};
use kassa_demos::common::{get_source, reference_now};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,kassa=trace,kassa_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Create source (mock in CI when KASSA_DEMOS_USE_MOCK is set) and build the facade
    let kassa = Kassa::builder().with_source(get_source("shop")).build()?;

    // Snapshot
    let orders = kassa.snapshot().await?;

    // Weekly series (logs the undated order that gets skipped)
    let _ = kassa.series(&orders, Granularity::Weekly);

    // Dashboard
    let _ = kassa.dashboard(&orders, reference_now());

    // Insights (logs an alert if the next month crosses the threshold)
    let _ = kassa.insights(&orders)?;

    Ok(())
}
