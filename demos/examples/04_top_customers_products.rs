use kassa::Kassa;
use kassa_demos::common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let kassa = Kassa::builder().with_source(get_source("shop")).build()?;
    let orders = kassa.snapshot().await?;

    println!("## Top customers");
    for (rank, c) in kassa.top_customers(&orders, 5).iter().enumerate() {
        println!(
            "{:>2}. {:<22} {:>10.2} ({} orders)",
            rank + 1,
            c.email,
            c.total,
            c.order_count
        );
    }

    println!("\n## Top products");
    for (rank, p) in kassa.top_products(&orders, 5).iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:>10.2} ({} sold)",
            rank + 1,
            p.title,
            p.revenue,
            p.quantity_sold
        );
    }

    Ok(())
}
