use kassa::{Granularity, Kassa};
use kassa_demos::common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create source (mock in CI when KASSA_DEMOS_USE_MOCK is set).
    let source = get_source("shop");

    // 2. Build the facade and register the source.
    let kassa = Kassa::builder().with_source(source).build()?;

    // 3. Take a snapshot of the order collection.
    let orders = kassa.snapshot().await?;
    println!("Fetched {} orders.", orders.len());

    // 4. Print one table per granularity.
    for granularity in [Granularity::Monthly, Granularity::Quarterly, Granularity::Yearly] {
        let series = kassa.series(&orders, granularity);
        println!("\n## {granularity} ({} buckets)", series.len());
        println!("{:<12} | {:>10} | {:>6} | {:>9}", "Bucket", "Revenue", "Orders", "Customers");
        println!("{:-<13}|{:-<12}|{:-<8}|{:-<10}", "", "", "", "");
        for b in &series {
            println!(
                "{:<12} | {:>10.2} | {:>6} | {:>9}",
                b.key, b.revenue, b.order_count, b.customer_count
            );
        }
    }

    Ok(())
}
