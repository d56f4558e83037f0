//! unibudget - Budget tracking with a spending rubric
//!
//! This library provides the core functionality for the unibudget command
//! line application. It tracks income and expenses, grades each spending
//! category against percentage-of-income thresholds, classifies overall
//! budget health, and generates spending recommendations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (profiles, expenses, categories, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic (grading, classification, recommendations)
//! - `reports`: Monthly summary reports and CSV export
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use unibudget::config::{paths::AppPaths, settings::Settings};
//!
//! let paths = AppPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::BudgetError;
