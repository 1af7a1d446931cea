//! Evaluation: metrics, the results log, and the evaluator façade

pub mod evaluator;
pub mod metrics;
pub mod report;

pub use evaluator::Evaluator;
pub use metrics::{CrossTab, Metrics};
pub use report::{EvaluationRecord, ResultsLog};
