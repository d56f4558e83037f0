//! Service layer for unibudget
//!
//! Business logic on top of the storage layer. The rubric and
//! recommendation modules are pure functions; the rest are thin services
//! handling validation and persistence.

pub mod expense;
pub mod import;
pub mod profile;
pub mod recommend;
pub mod rubric;
pub mod summary;

pub use expense::ExpenseService;
pub use import::{import_expenses_csv, ColumnMapping, ImportResult};
pub use profile::ProfileService;
pub use rubric::CategoryGrade;
pub use summary::SummaryService;
