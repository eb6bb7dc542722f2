//! System status commands.

use std::error::Error;

use clap::Subcommand;
use investlens_core::api::status::{ApiHealth, MlServices, SystemMetrics, VendorStatus};
use investlens_core::format::{health_color, model_color, vendor_color};

#[derive(Subcommand)]
pub enum StatusAction {
    /// Full status document
    Show {
        /// Emit raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Backend API health only
    Health,
    /// ML service state only
    Ml,
    /// External data vendor state only
    External,
    /// Backend resource metrics only
    Metrics,
}

pub fn run(action: StatusAction) -> Result<(), Box<dyn Error>> {
    let client = super::client()?;
    let runtime = super::runtime()?;

    match action {
        StatusAction::Show { json } => {
            let status = runtime.block_on(client.fetch_status())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
                return Ok(());
            }
            print_api_health(&status.api_health);
            print_ml(&status.ml_services);
            print_vendor("Alpha Vantage", &status.external_apis.alpha_vantage);
            if let Some(metrics) = &status.system_metrics {
                print_metrics(metrics);
            }
        }
        StatusAction::Health => {
            let health = runtime.block_on(client.fetch_api_health())?;
            print_api_health(&health);
        }
        StatusAction::Ml => {
            let ml = runtime.block_on(client.fetch_ml_status())?;
            print_ml(&ml);
        }
        StatusAction::External => {
            let external = runtime.block_on(client.fetch_external_status())?;
            print_vendor("Alpha Vantage", &external.alpha_vantage);
        }
        StatusAction::Metrics => {
            match runtime.block_on(client.fetch_system_metrics())? {
                Some(metrics) => print_metrics(&metrics),
                None => println!("Metrics are not available."),
            }
        }
    }
    Ok(())
}

fn print_api_health(health: &ApiHealth) {
    println!(
        "API:      {:?} [{}], latency {:.0}ms",
        health.status,
        health_color(health.status),
        health.latency
    );
}

fn print_ml(ml: &MlServices) {
    let version = if ml.model_version.is_empty() {
        "unknown"
    } else {
        &ml.model_version
    };
    println!(
        "ML:       {:?} [{}], model {version}",
        ml.model_status,
        model_color(ml.model_status)
    );
}

fn print_vendor(name: &str, vendor: &VendorStatus) {
    println!(
        "{name}: {:?} [{}], {} requests remaining",
        vendor.status,
        vendor_color(vendor.status),
        vendor.rate_limit_remaining
    );
}

fn print_metrics(metrics: &SystemMetrics) {
    if let Some(cpu) = metrics.cpu_usage {
        println!("CPU:      {cpu:.1}%");
    }
    if let Some(mem) = metrics.memory_usage {
        println!("Memory:   {mem:.1}%");
    }
    if let Some(uptime) = metrics.uptime {
        println!("Uptime:   {:.0}h {:.0}m", uptime / 3600.0, (uptime % 3600.0) / 60.0);
    }
}
