//! moneychanger: a conversational currency converter.
//!
//! A language model reads a free-text request, calls the
//! `exchange_rate_function` tool with structured parameters, the rate is looked
//! up from ExchangeRate-API, and the model phrases the answer.
//!
//! # Quick Start
//!
//! ```no_run
//! use moneychanger::prelude::*;
//!
//! # async fn example() -> moneychanger::error::Result<()> {
//! let config = MoneyChangerConfig::from_env()?;
//! let orchestrator = Orchestrator::from_config(&config);
//! println!("{}", orchestrator.run("convert 50 USD to EUR").await);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod prelude;
pub mod provider;
pub mod rates;
pub mod tools;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
