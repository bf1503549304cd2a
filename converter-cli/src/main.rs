//! Converter CLI
//!
//! Command-line interface for the Currency Converter API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use converter_client::ConverterClient;

#[derive(Parser)]
#[command(name = "converter")]
#[command(author, version, about = "Currency Converter API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Currency Converter API
    #[arg(
        long,
        env = "CONVERTER_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// List supported currencies
    Currencies,
    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        #[arg(long, default_value = "1")]
        amount: Decimal,
        /// Input currency code or symbol
        #[arg(long, default_value = "CZK")]
        from: String,
        /// Output currency codes or symbols (comma-separated, empty for all)
        #[arg(long, value_delimiter = ',')]
        to: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ConverterClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Currencies => {
            let currencies = client.supported_currencies().await?;
            println!("{}", serde_json::to_string_pretty(&currencies)?);
        }

        Commands::Convert { amount, from, to } => {
            let to: Vec<&str> = to
                .iter()
                .map(String::as_str)
                .filter(|c| !c.is_empty())
                .collect();
            let response = client.convert(amount, &from, &to).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
