//! # Model Eval - Evaluation Metrics for CSV Prediction Columns
//!
//! This library evaluates model predictions stored alongside ground-truth
//! labels in CSV datasets. It covers the common comparison workflow:
//!
//! - Classification metrics (accuracy, weighted precision/recall/F1)
//! - Regression error (mean absolute error) with scatter plots
//! - A cumulative results log shared across evaluated models
//! - Comparison charts: histograms, confusion matrices, bar charts, heatmaps

pub mod data;
pub mod eval;
pub mod plot;

pub use data::loader::DatasetLoader;
pub use data::table::Table;
pub use data::{DataError, DataResult};
pub use eval::evaluator::Evaluator;
pub use eval::metrics::{CrossTab, Metrics};
pub use eval::report::{EvaluationRecord, ResultsLog};
