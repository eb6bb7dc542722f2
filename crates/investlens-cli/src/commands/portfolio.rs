//! Portfolio commands: backend optimization plus local holdings aggregation.

use std::error::Error;

use clap::Subcommand;
use investlens_core::api::portfolio::{OptimizeRequest, OptimizedPortfolio, Scenario};
use investlens_core::format::{format_currency, format_signed_pct};
use investlens_core::{summarize, Holding};

#[derive(Subcommand)]
pub enum PortfolioAction {
    /// Ask the backend for an optimized allocation
    Optimize {
        /// Ticker symbols
        #[arg(required = true)]
        tickers: Vec<String>,
        /// Market scenario: bull, bear or volatile
        #[arg(long)]
        scenario: Option<Scenario>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Optimizations under bull, bear and volatile scenarios
    Scenarios {
        /// Ticker symbols
        #[arg(required = true)]
        tickers: Vec<String>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Aggregate local holdings into portfolio totals
    Summary {
        /// Positions as SYMBOL:SHARES:AVG_PRICE:CURRENT_PRICE
        #[arg(long = "holding", value_name = "SYM:SHARES:AVG:CURRENT", required = true)]
        holdings: Vec<String>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PortfolioAction) -> Result<(), Box<dyn Error>> {
    match action {
        PortfolioAction::Optimize {
            tickers,
            scenario,
            json,
        } => optimize(tickers, scenario, json),
        PortfolioAction::Scenarios { tickers, json } => scenarios(tickers, json),
        PortfolioAction::Summary { holdings, json } => summary(&holdings, json),
    }
}

fn optimize(tickers: Vec<String>, scenario: Option<Scenario>, json: bool) -> Result<(), Box<dyn Error>> {
    let tickers: Vec<String> = tickers.iter().map(|t| t.to_uppercase()).collect();
    let client = super::client()?;
    tracing::debug!(?tickers, ?scenario, "requesting portfolio optimization");
    let request = OptimizeRequest { tickers, scenario };
    let portfolio = super::runtime()?.block_on(client.optimize_portfolio(&request))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&portfolio)?);
    } else {
        print_allocation(&portfolio);
    }
    Ok(())
}

fn scenarios(tickers: Vec<String>, json: bool) -> Result<(), Box<dyn Error>> {
    let tickers: Vec<String> = tickers.iter().map(|t| t.to_uppercase()).collect();
    let client = super::client()?;
    let analysis = super::runtime()?.block_on(client.fetch_scenarios(&tickers))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }
    for (name, portfolio) in [
        ("Bull", &analysis.bull),
        ("Bear", &analysis.bear),
        ("Volatile", &analysis.volatile),
    ] {
        println!("=== {name} ===");
        print_allocation(portfolio);
        println!();
    }
    Ok(())
}

fn print_allocation(portfolio: &OptimizedPortfolio) {
    for allocation in &portfolio.allocations {
        println!(
            "  {:<6} {:>6.1}%  expected return {:>6.2}%  risk {:>6.2}%",
            allocation.ticker,
            allocation.weight * 100.0,
            allocation.expected_return * 100.0,
            allocation.risk * 100.0,
        );
    }
    println!(
        "  expected return {:.2}%, risk {:.2}%, Sharpe {:.2}",
        portfolio.total_expected_return * 100.0,
        portfolio.total_risk * 100.0,
        portfolio.sharpe_ratio,
    );
}

fn summary(specs: &[String], json: bool) -> Result<(), Box<dyn Error>> {
    let holdings = specs
        .iter()
        .map(|s| parse_holding(s))
        .collect::<Result<Vec<_>, _>>()?;
    let summary = summarize(&holdings);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{:<8} {:>10} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "Symbol", "Shares", "Avg Price", "Current", "Value", "Gain/Loss", "Perf"
    );
    for holding in &holdings {
        println!(
            "{:<8} {:>10} {:>12} {:>12} {:>12} {:>12} {:>10}",
            holding.symbol,
            holding.shares,
            format_currency(holding.avg_price),
            format_currency(holding.current_price),
            format_currency(holding.value()),
            format_currency(holding.gain()),
            format_signed_pct(holding.gain_pct()),
        );
    }
    println!();
    println!("Total value: {}", format_currency(summary.total_value));
    println!(
        "Total gain:  {} ({})",
        format_currency(summary.total_gain),
        format_signed_pct(summary.gain_pct)
    );
    println!("Diversification: {}/100", summary.diversification_score);
    Ok(())
}

fn parse_holding(spec: &str) -> Result<Holding, Box<dyn Error>> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 4 {
        return Err(format!("expected SYM:SHARES:AVG:CURRENT, got '{spec}'").into());
    }
    Ok(Holding {
        symbol: parts[0].to_uppercase(),
        shares: parts[1].parse().map_err(|_| format!("bad share count in '{spec}'"))?,
        avg_price: parts[2].parse().map_err(|_| format!("bad avg price in '{spec}'"))?,
        current_price: parts[3].parse().map_err(|_| format!("bad current price in '{spec}'"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_holding() {
        let holding = parse_holding("aapl:10:150:175.5").unwrap();
        assert_eq!(holding.symbol, "AAPL");
        assert_eq!(holding.shares, 10.0);
        assert_eq!(holding.current_price, 175.5);
    }

    #[test]
    fn test_parse_holding_rejects_short_spec() {
        assert!(parse_holding("AAPL:10").is_err());
        assert!(parse_holding("AAPL:x:1:2").is_err());
    }
}
