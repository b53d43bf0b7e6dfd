use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use billfold_cli::init_tracing;
use billfold_services::ListingService;
use billfold_store::RemoteStore;

#[derive(Parser, Debug)]
#[command(name = "list_bills")]
#[command(about = "List the connected employee's expense bills")]
struct Args {
    /// Output format: json or table (default: table)
    #[arg(long, default_value = "table")]
    format: String,

    /// Keep the store order instead of sorting newest first
    #[arg(long)]
    unsorted: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let store = Arc::new(RemoteStore::from_env()?);
    let service = ListingService::new(store);

    let bills = if args.unsorted {
        service.get_bills().await?
    } else {
        service.get_bills_sorted().await?
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&bills)?),
        _ => {
            println!(
                "{:<12} {:<24} {:<28} {:>10} {:<12}",
                "Date", "Type", "Nom", "Montant", "Statut"
            );
            for bill in &bills {
                println!(
                    "{:<12} {:<24} {:<28} {:>10.2} {:<12}",
                    bill.date, bill.bill_type, bill.name, bill.amount, bill.status
                );
            }
            println!("\n{} bill(s)", bills.len());
        }
    }

    Ok(())
}
