use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use billfold_cli::{init_tracing, session_from_env};
use billfold_core::format::format_date;
use billfold_core::models::{BillForm, ReceiptFile, EXPENSE_TYPES};
use billfold_core::validation::validate_receipt_extension;
use billfold_services::{Navigator, Route, SubmissionPipeline};
use billfold_store::RemoteStore;

#[derive(Parser, Debug)]
#[command(name = "submit_bill")]
#[command(about = "Submit an expense bill with its receipt image")]
struct Args {
    /// Path to the receipt image (jpg, jpeg or png)
    #[arg(long, value_name = "PATH")]
    receipt: String,

    /// Expense category
    #[arg(long = "type", value_name = "TYPE")]
    bill_type: String,

    /// Expense name
    #[arg(long)]
    name: String,

    /// Amount (TTC)
    #[arg(long)]
    amount: String,

    /// Date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// VAT amount, kept as entered
    #[arg(long, default_value = "")]
    vat: String,

    /// VAT percentage
    #[arg(long, default_value = "20")]
    pct: String,

    /// Free-text commentary
    #[arg(long, default_value = "")]
    commentary: String,
}

/// Navigation is a log line here; there is no view layer to switch.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = route.path(), "navigating");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    if !EXPENSE_TYPES.contains(&args.bill_type.as_str()) {
        return Err(anyhow::anyhow!(
            "Invalid expense type. Must be one of: {}",
            EXPENSE_TYPES.join(", ")
        ));
    }

    format_date(&args.date).context("Invalid date, expected YYYY-MM-DD")?;

    let path = std::path::Path::new(&args.receipt);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Invalid receipt path")?
        .to_string();

    let extension = validate_receipt_extension(&file_name)?;
    let content_type = match extension {
        "png" => "image/png",
        _ => "image/jpeg",
    }
    .to_string();

    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read receipt: {}", args.receipt))?;

    let session = session_from_env()?;
    let store = Arc::new(RemoteStore::from_env()?);
    let navigator = Arc::new(LoggingNavigator);
    let mut pipeline = SubmissionPipeline::new(store, navigator, session);

    pipeline
        .handle_file_selection(ReceiptFile {
            name: file_name,
            content_type,
            data,
        })
        .await?;

    let bill = pipeline
        .handle_submit(BillForm {
            bill_type: args.bill_type,
            name: args.name,
            amount: args.amount,
            date: args.date,
            vat: args.vat,
            pct: args.pct,
            commentary: args.commentary,
        })
        .await?;

    println!(
        "Submitted bill {} ({:.2} €, {})",
        bill.id.as_deref().unwrap_or("?"),
        bill.amount,
        bill.status
    );

    Ok(())
}
