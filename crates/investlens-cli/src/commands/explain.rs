//! Explainability commands.

use std::error::Error;

use clap::Subcommand;
use investlens_core::api::explain::{
    rank_by_magnitude, ExplainRequest, FeatureContribution, PortfolioExplainRequest,
    WhyAssetRequest,
};

#[derive(Subcommand)]
pub enum ExplainAction {
    /// SHAP feature importances for one feature vector
    Shap {
        /// Feature values, repeatable
        #[arg(long = "feature", value_name = "VALUE", required = true)]
        features: Vec<f64>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
    /// SHAP importances across a portfolio (one row per asset)
    PortfolioShap {
        /// Comma-separated feature row per asset, repeatable
        #[arg(long = "row", value_name = "V1,V2,...", required = true)]
        rows: Vec<String>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
    /// LIME contributions for one feature vector
    Lime {
        /// Feature values, repeatable
        #[arg(long = "feature", value_name = "VALUE", required = true)]
        features: Vec<f64>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Why the model favors a specific asset
    WhyAsset {
        /// Asset name
        asset: String,
        /// Feature values, repeatable
        #[arg(long = "feature", value_name = "VALUE", required = true)]
        features: Vec<f64>,
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ExplainAction) -> Result<(), Box<dyn Error>> {
    let client = super::client()?;
    let runtime = super::runtime()?;

    match action {
        ExplainAction::Shap { features, json } => {
            let response =
                runtime.block_on(client.fetch_shap(&ExplainRequest { features }))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_importances(&response.feature_importance);
            }
        }
        ExplainAction::PortfolioShap { rows, json } => {
            let portfolio_features = rows
                .iter()
                .map(|row| parse_row(row))
                .collect::<Result<Vec<_>, _>>()?;
            let response = runtime.block_on(
                client.fetch_portfolio_shap(&PortfolioExplainRequest { portfolio_features }),
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_importances(&response.feature_importance);
            }
        }
        ExplainAction::Lime { features, json } => {
            let mut response =
                runtime.block_on(client.fetch_lime(&ExplainRequest { features }))?;
            rank_by_magnitude(&mut response.feature_contributions);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_contributions(&response.feature_contributions);
            }
        }
        ExplainAction::WhyAsset { asset, features, json } => {
            let mut response = runtime.block_on(client.fetch_why_asset(&WhyAssetRequest {
                features,
                asset_name: asset,
            }))?;
            rank_by_magnitude(&mut response.contributions);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("Why {}:", response.asset);
                for reason in &response.reasons {
                    println!("  - {reason}");
                }
                println!();
                print_contributions(&response.contributions);
            }
        }
    }
    Ok(())
}

fn parse_row(row: &str) -> Result<Vec<f64>, Box<dyn Error>> {
    row.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| format!("'{v}' is not a number").into())
        })
        .collect()
}

fn print_importances(importance: &std::collections::BTreeMap<String, f64>) {
    // Display strongest features first.
    let mut ranked: Vec<FeatureContribution> = importance
        .iter()
        .map(|(feature, value)| FeatureContribution {
            feature: feature.clone(),
            contribution: *value,
        })
        .collect();
    rank_by_magnitude(&mut ranked);
    print_contributions(&ranked);
}

fn print_contributions(contributions: &[FeatureContribution]) {
    for c in contributions {
        println!("  {:<24} {:+.4}", c.feature, c.contribution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row() {
        assert_eq!(parse_row("1, 2.5, -3").unwrap(), vec![1.0, 2.5, -3.0]);
        assert!(parse_row("1,x").is_err());
    }
}
