//! Risk assessment commands.
//!
//! `run` walks the built-in questionnaire (interactive, or scripted via
//! `--answer id=value` pairs) and scores it locally. `predict` sends the
//! richer form to the backend classifier instead.

use std::error::Error;
use std::io::Write;

use clap::Subcommand;
use investlens_core::wizard::{classify, RiskWizard, WizardPhase};
use investlens_core::RiskForm;

#[derive(Subcommand)]
pub enum RiskAction {
    /// Run the questionnaire and compute the risk score locally
    Run {
        /// Scripted answers as id=value pairs (e.g. --answer 1=short)
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Map a 0-100 score to its risk band
    Classify {
        /// Normalized risk score
        score: u8,
    },
    /// Classify via the backend clustering model
    Predict {
        /// Age in years
        #[arg(long, default_value_t = 30)]
        age: u32,
        /// Annual income in USD
        #[arg(long, default_value_t = 60_000)]
        income: u32,
        /// Volatility tolerance, 1-10
        #[arg(long, default_value_t = 5)]
        tolerance: u8,
        /// Investment horizon in years
        #[arg(long, default_value_t = 10)]
        horizon: u8,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RiskAction) -> Result<(), Box<dyn Error>> {
    match action {
        RiskAction::Run { answers, json } => {
            if answers.is_empty() {
                run_interactive(json)
            } else {
                run_scripted(&answers, json)
            }
        }
        RiskAction::Classify { score } => {
            if score > 100 {
                return Err(format!("score {score} is outside 0..=100").into());
            }
            let band = classify(score);
            println!("{} Investor ({})", band.label(), band.color());
            Ok(())
        }
        RiskAction::Predict {
            age,
            income,
            tolerance,
            horizon,
            json,
        } => predict(age, income, tolerance, horizon, json),
    }
}

fn run_interactive(json: bool) -> Result<(), Box<dyn Error>> {
    let mut wizard = RiskWizard::default();
    let stdin = std::io::stdin();

    while wizard.phase() == WizardPhase::InProgress {
        let question = wizard.current_question().clone();
        println!();
        println!(
            "Question {} of {}: {}",
            wizard.active_step() + 1,
            wizard.num_questions(),
            question.text
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option.label);
        }
        if wizard.active_step() > 0 {
            print!("Choose 1-{} (b = back): ", question.options.len());
        } else {
            print!("Choose 1-{}: ", question.options.len());
        }
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Err("input ended before the questionnaire was complete".into());
        }
        let input = line.trim();

        if input.eq_ignore_ascii_case("b") {
            wizard.retreat();
            continue;
        }
        let choice = match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= question.options.len() => n,
            _ => {
                println!("Please enter a number between 1 and {}.", question.options.len());
                continue;
            }
        };
        wizard.answer(question.id, &question.options[choice - 1].value)?;
        wizard.advance()?;
    }

    println!();
    println!("Calculating...");
    let score = wizard.finish_local()?;
    report(score, json)
}

fn run_scripted(answers: &[String], json: bool) -> Result<(), Box<dyn Error>> {
    let mut wizard = RiskWizard::default();
    for pair in answers {
        let (id, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected id=value, got '{pair}'"))?;
        let id: u32 = id
            .trim()
            .parse()
            .map_err(|_| format!("'{id}' is not a question id"))?;
        wizard.answer(id, value.trim())?;
    }
    loop {
        match wizard.advance()? {
            WizardPhase::Calculating => break,
            _ => continue,
        }
    }
    let score = wizard.finish_local()?;
    report(score, json)
}

fn report(score: u8, json: bool) -> Result<(), Box<dyn Error>> {
    let band = classify(score);
    if json {
        let out = serde_json::json!({
            "score": score,
            "band": band.label(),
            "color": band.color(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Risk score: {score}/100");
        println!("{} Investor", band.label());
    }
    Ok(())
}

fn predict(age: u32, income: u32, tolerance: u8, horizon: u8, json: bool) -> Result<(), Box<dyn Error>> {
    let form = RiskForm {
        age,
        income,
        volatility_tolerance: tolerance,
        investment_horizon: horizon,
    };
    form.validate()?;

    let client = super::client()?;
    tracing::debug!(age, income, tolerance, horizon, "requesting remote risk classification");
    let result = super::runtime()?.block_on(client.predict_risk_profile(&form));

    let result = match result {
        Ok(r) => r,
        Err(e) => {
            // Recoverable: the form inputs are all on the command line, so a
            // retry is just re-running the command.
            eprintln!("classification request failed; re-run to retry");
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Risk profile: {}", result.risk_profile);
        println!("Cluster: {}", result.cluster);
        println!("Confidence: {:.1}%", result.confidence * 100.0);
    }
    Ok(())
}
