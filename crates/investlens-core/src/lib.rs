//! # Investlens Core Library
//!
//! Core business logic for the Investlens investment dashboard. It follows
//! a CLI-first philosophy: every operation is available through the
//! standalone CLI binary, with any richer front end expected to be a thin
//! layer over this same library.
//!
//! ## Architecture
//!
//! - **Risk Wizard**: an ordered questionnaire state machine that reduces
//!   answers to a normalized 0-100 score and a risk band; scoring is local
//!   and deterministic, with optional delegation to the backend classifier
//! - **API Client**: typed async client for the backend analytics service
//!   (prediction, news, explainability, optimization, status) -- no
//!   analytics are computed client-side
//! - **Configuration**: TOML-based settings for the backend endpoint and
//!   dashboard defaults
//!
//! ## Key Components
//!
//! - [`RiskWizard`]: questionnaire state machine
//! - [`ApiClient`]: backend analytics client
//! - [`Config`]: application configuration
//! - [`AppContext`]: explicitly threaded view context

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod portfolio;
pub mod profile;
pub mod wizard;

pub use api::ApiClient;
pub use config::Config;
pub use context::AppContext;
pub use error::{ApiError, ConfigError, CoreError, ValidationError};
pub use portfolio::{diversification_score, summarize, Holding, PortfolioSummary};
pub use profile::{RiskForm, RiskResult};
pub use wizard::{classify, default_questions, Question, RiskBand, RiskWizard, WizardError, WizardPhase};
