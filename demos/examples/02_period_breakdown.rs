use kassa::{Granularity, Kassa, RelativePeriod, Tz};
use kassa_demos::common::{get_source, reference_now};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup kassa with the shop's calendar. Periods are evaluated in this zone.
    let kassa = Kassa::builder()
        .with_source(get_source("shop"))
        .timezone(Tz::Europe__Berlin)
        .build()?;

    let orders = kassa.snapshot().await?;
    let now = reference_now();
    println!("Reference instant: {now}");

    // 2. Dashboard tiles and the nested period breakdown.
    let report = kassa.dashboard(&orders, now);
    println!(
        "\nAll time: {:.2} revenue, {} orders, {} customers",
        report.totals.revenue, report.totals.order_count, report.totals.customer_count
    );
    for entry in &report.breakdown {
        println!(
            "  {:<8} {:>10.2} {:>4} orders {:>3} customers",
            entry.period.as_str(),
            entry.totals.revenue,
            entry.totals.order_count,
            entry.totals.customer_count
        );
    }

    // 3. Drill down into this month day by day.
    println!("\n## Daily revenue this month");
    for b in kassa.series_in_period(&orders, Granularity::Daily, now, RelativePeriod::Month) {
        println!("{} {:>10.2}", b.key, b.revenue);
    }

    Ok(())
}
