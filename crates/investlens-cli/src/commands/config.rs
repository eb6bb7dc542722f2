//! Configuration commands.

use std::error::Error;

use clap::Subcommand;
use investlens_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a single value
    Get {
        /// Dotted key, e.g. api.base_url
        key: String,
    },
    /// Set a value
    Set {
        /// Dotted key, e.g. dashboard.default_ticker
        key: String,
        value: String,
    },
    /// Print the whole configuration
    List,
    /// Restore the defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key '{key}'").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("ok");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
