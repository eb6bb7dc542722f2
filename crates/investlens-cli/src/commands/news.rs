//! News feed view.

use std::error::Error;

use investlens_core::format::sentiment_label;

pub fn run(ticker: Option<String>, json: bool) -> Result<(), Box<dyn Error>> {
    let ticker = super::resolve_ticker(ticker)?;
    let client = super::client()?;

    tracing::debug!(%ticker, "requesting news");
    let items = super::runtime()?.block_on(client.fetch_news(&ticker))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No news for {ticker}.");
        return Ok(());
    }
    println!("News for {ticker}:");
    println!();
    for item in &items {
        println!(
            "[{}] {} ({:+.2})",
            sentiment_label(item.sentiment),
            item.title,
            item.sentiment
        );
        println!("  {} -- {}", item.published, item.link);
    }
    Ok(())
}
