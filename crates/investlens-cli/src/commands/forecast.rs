//! Price forecast view, with raw historical and live-quote variants.

use std::error::Error;

use investlens_core::api::stock::Trend;
use investlens_core::format::format_currency;
use investlens_core::Config;

pub fn run(
    ticker: Option<String>,
    historical: bool,
    live: bool,
    period: Option<String>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let ticker = super::resolve_ticker(ticker)?;
    let client = super::client()?;
    let runtime = super::runtime()?;

    if live {
        tracing::debug!(%ticker, "requesting live quote");
        let quote = runtime.block_on(client.fetch_live_price(&ticker))?;
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    if historical {
        let period = match period {
            Some(p) => p,
            None => Config::load()?.dashboard.default_period,
        };
        tracing::debug!(%ticker, %period, "requesting historical series");
        let series = runtime.block_on(client.fetch_historical(&ticker, &period))?;
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    tracing::debug!(%ticker, "requesting forecast");
    let prediction = runtime.block_on(client.fetch_prediction(&ticker))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    let trend = match prediction.trend {
        Trend::Up => "UP",
        Trend::Down => "DOWN",
    };
    println!("{} forecast (trend: {trend})", prediction.ticker);
    println!("Last price: {}", format_currency(prediction.last_price));
    println!();
    println!("{:>4}  {:>12}  {:>12}  {:>12}", "Day", "Price", "Lower", "Upper");
    for point in &prediction.forecast {
        println!(
            "{:>4}  {:>12}  {:>12}  {:>12}",
            point.day,
            format_currency(point.price),
            format_currency(point.lower),
            format_currency(point.upper),
        );
    }
    Ok(())
}
