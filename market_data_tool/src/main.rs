use std::error::Error;

use clap::Parser;
use market_data_tool::{
    cli::{Cli, Commands},
    providers::alpaca_rest::AlpacaProvider,
    tool::{
        BarsTool, NewsTool,
        schema::{GetBarsParams, GetNewsParams},
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Credentials may live in a local .env during development.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Fatal if APCA_API_KEY_ID / APCA_API_SECRET_KEY are unset.
    let provider = AlpacaProvider::new()?;

    match cli.command {
        Commands::Bars {
            symbol,
            start,
            end,
            amount,
            unit,
        } => {
            let tool = BarsTool::new(provider);
            let payload = tool
                .get_bars(GetBarsParams {
                    symbol,
                    start,
                    end,
                    timeframe_amount: amount,
                    timeframe_unit: unit,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }

        Commands::News {
            symbol,
            start,
            end,
            limit,
        } => {
            let tool = NewsTool::new(provider);
            let payload = tool
                .get_news(GetNewsParams {
                    symbol,
                    start,
                    end,
                    limit,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
