use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "investlens", version, about = "Investlens analytics CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Risk assessment wizard and classification
    Risk {
        #[command(subcommand)]
        action: commands::risk::RiskAction,
    },
    /// Price forecast for a ticker
    Forecast {
        /// Ticker symbol (defaults to the configured ticker)
        ticker: Option<String>,
        /// Raw historical series instead of the model forecast
        #[arg(long)]
        historical: bool,
        /// Latest quote instead of the model forecast
        #[arg(long, conflicts_with_all = ["historical", "period"])]
        live: bool,
        /// Series period, e.g. 1y (defaults to the configured period)
        #[arg(long, requires = "historical")]
        period: Option<String>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
    /// News with sentiment for a ticker
    News {
        /// Ticker symbol (defaults to the configured ticker)
        ticker: Option<String>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Portfolio optimization and local aggregation
    Portfolio {
        #[command(subcommand)]
        action: commands::portfolio::PortfolioAction,
    },
    /// Model explainability
    Explain {
        #[command(subcommand)]
        action: commands::explain::ExplainAction,
    },
    /// Backend system status
    Status {
        /// Section to show; the full document when omitted
        #[command(subcommand)]
        action: Option<commands::status::StatusAction>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Risk { action } => commands::risk::run(action),
        Commands::Forecast {
            ticker,
            historical,
            live,
            period,
            json,
        } => commands::forecast::run(ticker, historical, live, period, json),
        Commands::News { ticker, json } => commands::news::run(ticker, json),
        Commands::Portfolio { action } => commands::portfolio::run(action),
        Commands::Explain { action } => commands::explain::run(action),
        Commands::Status { action } => commands::status::run(
            action.unwrap_or(commands::status::StatusAction::Show { json: false }),
        ),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
