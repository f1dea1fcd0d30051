use kassa::{Granularity, Kassa, Metric};
use kassa_demos::common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Monthly history, three-step projection and the default revenue alert.
    let kassa = Kassa::builder()
        .with_source(get_source("growth"))
        .forecast_granularity(Granularity::Monthly)
        .forecast_horizon(3)
        .alert_threshold(10_000.0)
        .build()?;

    let orders = kassa.snapshot().await?;

    // 2. Compute insights. The alert is recomputed on every call.
    let report = kassa.insights(&orders)?;

    println!("## History ({})", report.granularity);
    for b in &report.historical {
        println!("{:<10} {:>12.2}", b.key, b.revenue);
    }

    for fc in &report.forecasts {
        println!("\n## {} forecast", fc.metric.label());
        if fc.points.is_empty() {
            println!("(not enough history)");
        }
        for p in &fc.points {
            println!("{:<12} {:>12.2}", p.label, p.value);
        }
    }

    match &report.alert {
        Some(alert) => println!("\nALERT: {}", alert.message),
        None => println!("\nNo alert."),
    }

    // 3. The same revenue projection at quarterly resolution.
    let trend = kassa.revenue_trend(&orders, Granularity::Quarterly)?;
    println!("\n## Quarterly {} trend", Metric::Revenue.label());
    for p in &trend.points {
        println!("{:<12} {:>12.2}", p.label, p.value);
    }

    Ok(())
}
