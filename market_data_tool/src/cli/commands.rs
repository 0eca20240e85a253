use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch OHLCV bars and print the shaped JSON payload
    Bars {
        /// Stock ticker symbol (e.g. "NVDA")
        #[arg(long)]
        symbol: String,

        /// Start: ISO-8601 (e.g. "2025-01-01T09:30:00Z") or "<N> days ago"
        #[arg(long)]
        start: String,

        /// End: ISO-8601 or "now"
        #[arg(short, long, default_value = "now")]
        end: String,

        /// Timeframe amount (numeric value)
        #[arg(long, default_value_t = 1)]
        amount: u32,

        /// Timeframe unit: minute, hour, day, week, month
        #[arg(long, default_value = "Minute")]
        unit: String,
    },

    /// Fetch recent news headlines for a symbol
    News {
        /// Stock ticker symbol
        #[arg(long)]
        symbol: String,

        /// Start: ISO-8601 or "<N> days ago"
        #[arg(long)]
        start: String,

        /// End: ISO-8601 or "now"
        #[arg(short, long, default_value = "now")]
        end: String,

        /// Maximum number of articles
        #[arg(long, default_value_t = 5)]
        limit: u32,
    },
}
