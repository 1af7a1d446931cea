//! Evaluation metrics for model predictions
//!
//! Includes metrics for:
//! - Classification: accuracy, per-class and weighted precision/recall/F1
//! - Regression: mean absolute error
//! - Categorical structure: confusion matrix, cross-tabulation

use ndarray::Array1;

/// Cross-tabulation of two categorical columns
///
/// Row and column labels are sorted; `counts[r][c]` is the number of rows
/// where the first column equals `row_labels[r]` and the second equals
/// `col_labels[c]`. Backs the confusion matrix and all categorical charts.
#[derive(Debug, Clone)]
pub struct CrossTab {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    /// Build a cross-tabulation from two parallel label columns
    pub fn from_columns(rows: &[String], cols: &[String]) -> Self {
        let row_labels = sorted_unique(rows);
        let col_labels = sorted_unique(cols);

        let mut counts = vec![vec![0usize; col_labels.len()]; row_labels.len()];
        for (r, c) in rows.iter().zip(cols.iter()) {
            let ri = row_labels.iter().position(|l| l == r);
            let ci = col_labels.iter().position(|l| l == c);
            if let (Some(ri), Some(ci)) = (ri, ci) {
                counts[ri][ci] += 1;
            }
        }

        Self {
            row_labels,
            col_labels,
            counts,
        }
    }

    /// Total count in row `r`
    pub fn row_total(&self, r: usize) -> usize {
        self.counts[r].iter().sum()
    }

    /// Largest cell count (0 for an empty table)
    pub fn max_count(&self) -> usize {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Row-wise percentages, each row summing to 100
    pub fn row_percentages(&self) -> Vec<Vec<f64>> {
        self.counts
            .iter()
            .map(|row| {
                let total: usize = row.iter().sum();
                row.iter()
                    .map(|&c| {
                        if total == 0 {
                            0.0
                        } else {
                            c as f64 * 100.0 / total as f64
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

fn sorted_unique(labels: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = labels.to_vec();
    unique.sort();
    unique.dedup();
    unique
}

/// Per-class metric row: (class, precision, recall, f1, support)
pub type ClassReport = Vec<(String, f64, f64, f64, usize)>;

/// Metrics calculator
pub struct Metrics;

impl Metrics {
    // ==================== Classification Metrics ====================

    /// Calculate accuracy: (matching labels) / (total rows)
    pub fn accuracy(y_true: &[String], y_pred: &[String]) -> f64 {
        if y_true.is_empty() {
            return 0.0;
        }

        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t == p)
            .count();

        correct as f64 / y_true.len() as f64
    }

    /// Calculate precision for one class
    /// precision = TP / (TP + FP)
    pub fn precision(y_true: &[String], y_pred: &[String], class: &str) -> f64 {
        let (tp, fp, _) = Self::class_counts(y_true, y_pred, class);

        if tp + fp == 0 {
            0.0
        } else {
            tp as f64 / (tp + fp) as f64
        }
    }

    /// Calculate recall for one class
    /// recall = TP / (TP + FN)
    pub fn recall(y_true: &[String], y_pred: &[String], class: &str) -> f64 {
        let (tp, _, fn_) = Self::class_counts(y_true, y_pred, class);

        if tp + fn_ == 0 {
            0.0
        } else {
            tp as f64 / (tp + fn_) as f64
        }
    }

    /// Calculate F1 score for one class
    /// F1 = 2 * (precision * recall) / (precision + recall)
    pub fn f1_score(y_true: &[String], y_pred: &[String], class: &str) -> f64 {
        let precision = Self::precision(y_true, y_pred, class);
        let recall = Self::recall(y_true, y_pred, class);

        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }

    /// Count (TP, FP, FN) for one class
    fn class_counts(y_true: &[String], y_pred: &[String], class: &str) -> (usize, usize, usize) {
        let mut tp = 0;
        let mut fp = 0;
        let mut fn_ = 0;

        for (t, p) in y_true.iter().zip(y_pred.iter()) {
            match (t == class, p == class) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (true, false) => fn_ += 1,
                (false, false) => {}
            }
        }

        (tp, fp, fn_)
    }

    /// Per-class precision/recall/F1 with support, over classes observed in
    /// the ground-truth column
    pub fn classification_report(y_true: &[String], y_pred: &[String]) -> ClassReport {
        sorted_unique(y_true)
            .into_iter()
            .map(|class| {
                let precision = Self::precision(y_true, y_pred, &class);
                let recall = Self::recall(y_true, y_pred, &class);
                let f1 = Self::f1_score(y_true, y_pred, &class);
                let support = y_true.iter().filter(|t| **t == class).count();
                (class, precision, recall, f1, support)
            })
            .collect()
    }

    /// Support-weighted average precision across the observed classes
    pub fn weighted_precision(y_true: &[String], y_pred: &[String]) -> f64 {
        Self::weighted_average(y_true, y_pred, |report| report.1)
    }

    /// Support-weighted average recall across the observed classes
    pub fn weighted_recall(y_true: &[String], y_pred: &[String]) -> f64 {
        Self::weighted_average(y_true, y_pred, |report| report.2)
    }

    /// Support-weighted average F1 across the observed classes
    pub fn weighted_f1(y_true: &[String], y_pred: &[String]) -> f64 {
        Self::weighted_average(y_true, y_pred, |report| report.3)
    }

    fn weighted_average<F>(y_true: &[String], y_pred: &[String], pick: F) -> f64
    where
        F: Fn(&(String, f64, f64, f64, usize)) -> f64,
    {
        let total = y_true.len();
        if total == 0 {
            return 0.0;
        }

        Self::classification_report(y_true, y_pred)
            .iter()
            .map(|row| pick(row) * row.4 as f64 / total as f64)
            .sum()
    }

    /// Generate a full confusion matrix: ground truth as rows, predictions
    /// as columns
    pub fn confusion_matrix(y_true: &[String], y_pred: &[String]) -> CrossTab {
        CrossTab::from_columns(y_true, y_pred)
    }

    // ==================== Regression Metrics ====================

    /// Mean Absolute Error
    pub fn mae(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        assert_eq!(y_true.len(), y_pred.len(), "Arrays must have same length");

        if y_true.is_empty() {
            return 0.0;
        }

        y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(t, p)| (t - p).abs())
            .sum::<f64>()
            / y_true.len() as f64
    }
}
