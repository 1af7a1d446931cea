//! The evaluation façade
//!
//! `Evaluator` ties everything together: it holds a dataset loader plus the
//! shared results log, and exposes one method per evaluation or chart. Every
//! method reloads the CSV from disk, so the evaluator always reflects the
//! current file contents.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::data::{DataError, DataResult, DatasetLoader};
use crate::eval::metrics::{CrossTab, Metrics};
use crate::eval::report::{EvaluationRecord, ResultsLog};
use crate::plot;
use crate::plot::HeatmapPalette;

/// File name of the cumulative results log inside the base directory
pub const RESULTS_FILE: &str = "evaluation-results.csv";

/// Subdirectory of the base directory where charts are saved
pub const PLOTS_DIR: &str = "plots";

/// Evaluation and charting over one CSV dataset
pub struct Evaluator {
    loader: DatasetLoader,
    results: ResultsLog,
}

impl Evaluator {
    /// Create an evaluator for `dataset_path` relative to `base_dir`
    ///
    /// Results go to `<base_dir>/evaluation-results.csv` and charts to
    /// `<base_dir>/plots/`.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(base_dir: P, dataset_path: Q) -> Self {
        let results = ResultsLog::new(base_dir.as_ref().join(RESULTS_FILE));
        let loader = DatasetLoader::new(base_dir, dataset_path);
        Self { loader, results }
    }

    /// Path of the cumulative results log
    pub fn results_file(&self) -> &Path {
        self.results.path()
    }

    fn plot_path(&self, file_name: &str) -> DataResult<PathBuf> {
        let dir = self.loader.base_dir().join(PLOTS_DIR);
        fs::create_dir_all(&dir)?;
        Ok(dir.join(file_name))
    }

    fn label_columns(
        &self,
        original: &str,
        prediction: &str,
    ) -> DataResult<(Vec<String>, Vec<String>)> {
        let table = self.loader.load()?;
        let y_true = table.column(original)?;
        let y_pred = table.column(prediction)?;
        Ok((y_true, y_pred))
    }

    // ==================== Metrics ====================

    /// Compute accuracy and weighted precision/recall/F1 between two label
    /// columns, append the record to the results log, and return it
    pub fn evaluate_results(
        &self,
        original: &str,
        prediction: &str,
        model_name: &str,
    ) -> DataResult<EvaluationRecord> {
        let (y_true, y_pred) = self.label_columns(original, prediction)?;
        if y_true.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let record = EvaluationRecord::new(
            model_name,
            Metrics::accuracy(&y_true, &y_pred),
            Metrics::weighted_precision(&y_true, &y_pred),
            Metrics::weighted_recall(&y_true, &y_pred),
            Metrics::weighted_f1(&y_true, &y_pred),
        );

        self.results.append(&record)?;

        info!(
            "{}: accuracy={:.4} precision={:.4} recall={:.4} f1={:.4}",
            record.model, record.accuracy, record.precision, record.recall, record.f1
        );

        Ok(record)
    }

    /// Count rows where the two columns hold exactly the same value
    pub fn count_matching_rows(&self, original: &str, prediction: &str) -> DataResult<usize> {
        let (y_true, y_pred) = self.label_columns(original, prediction)?;
        Ok(y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t == p)
            .count())
    }

    // ==================== Charts ====================

    /// Scatter plot of predictions against originals with a regression line,
    /// saved as `<plots>/<prediction>.png`; returns the mean absolute error
    pub fn scatterplot(&self, original: &str, prediction: &str) -> DataResult<f64> {
        let table = self.loader.load()?;
        let y_true = table.numeric_column(original)?;
        let y_pred = table.numeric_column(prediction)?;
        if y_true.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        let mae = Metrics::mae(&y_true, &y_pred);

        let path = self.plot_path(&format!("{}.png", prediction))?;
        plot::scatter_with_regression(&path, &y_true, &y_pred, original, prediction)?;
        info!("Saved scatter plot to {:?} (MAE {:.4})", path, mae);

        Ok(mae)
    }

    /// Side-by-side histograms of the prediction column split by ground-truth
    /// class 0/1; returns the saved image path
    pub fn plot_histograms(&self, original: &str, prediction: &str) -> DataResult<PathBuf> {
        let table = self.loader.load()?;
        let classes = table.numeric_column(original)?;
        let predictions = table.numeric_column(prediction)?;

        let split = |class: f64| -> Vec<f64> {
            classes
                .iter()
                .zip(predictions.iter())
                .filter(|(c, _)| (**c - class).abs() < 1e-10)
                .map(|(_, p)| *p)
                .collect()
        };
        let class0 = split(0.0);
        let class1 = split(1.0);

        let path = self.plot_path(&format!("histograms-{}.png", prediction))?;
        plot::class_split_histograms(&path, &class0, &class1, "Probability")?;
        info!("Saved histograms to {:?}", path);

        Ok(path)
    }

    /// Annotated confusion-matrix heatmap (truth as rows, predictions as
    /// columns); returns the saved image path
    pub fn plot_confusion_matrix(&self, original: &str, prediction: &str) -> DataResult<PathBuf> {
        let (y_true, y_pred) = self.label_columns(original, prediction)?;
        let matrix = Metrics::confusion_matrix(&y_true, &y_pred);

        let path = self.plot_path(&format!("confusion-matrix-{}.png", prediction))?;
        plot::annotated_heatmap(
            &path,
            &matrix,
            &format!("Confusion Matrix ({})", prediction),
            "Predicted",
            "True",
            HeatmapPalette::Blues,
            (800, 600),
        )?;
        info!("Saved confusion matrix to {:?}", path);

        Ok(path)
    }

    /// 100%-stacked bar chart of the two columns' cross-tab, with percentage
    /// labels on each segment; returns the saved image path
    pub fn plot_stacked_bar_chart(&self, original: &str, prediction: &str) -> DataResult<PathBuf> {
        let tab = self.crosstab(original, prediction)?;

        let path = self.plot_path(&format!("stacked-bars-{}.png", prediction))?;
        plot::stacked_bar_chart(
            &path,
            &tab,
            &format!("Stacked Bar Chart of {} vs. {}", original, prediction),
            original,
        )?;
        info!("Saved stacked bar chart to {:?}", path);

        Ok(path)
    }

    /// Grouped bar chart of cross-tab counts; returns the saved image path
    pub fn plot_grouped_bar_chart(&self, original: &str, prediction: &str) -> DataResult<PathBuf> {
        let tab = self.crosstab(original, prediction)?;

        let path = self.plot_path(&format!("grouped-bars-{}.png", prediction))?;
        plot::grouped_bar_chart(
            &path,
            &tab,
            &format!("Relationship between {} and {}", original, prediction),
            original,
        )?;
        info!("Saved grouped bar chart to {:?}", path);

        Ok(path)
    }

    /// Annotated cross-tab heatmap; returns the saved image path
    pub fn plot_heatmap(&self, original: &str, prediction: &str) -> DataResult<PathBuf> {
        let tab = self.crosstab(original, prediction)?;

        let path = self.plot_path(&format!("heatmap-{}.png", prediction))?;
        plot::annotated_heatmap(
            &path,
            &tab,
            &format!("Heatmap of {} vs. {}", original, prediction),
            prediction,
            original,
            HeatmapPalette::YlGnBu,
            (1000, 800),
        )?;
        info!("Saved heatmap to {:?}", path);

        Ok(path)
    }

    fn crosstab(&self, original: &str, prediction: &str) -> DataResult<CrossTab> {
        let (rows, cols) = self.label_columns(original, prediction)?;
        Ok(CrossTab::from_columns(&rows, &cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_dataset(dir: &Path, contents: &str) {
        fs::write(dir.join("test_set.csv"), contents).unwrap();
    }

    #[test]
    fn test_perfect_predictions_score_one() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "Category,Prediction\nspam,spam\nham,ham\nspam,spam\nham,ham\n",
        );

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let record = evaluator
            .evaluate_results("Category", "Prediction", "perfect-model")
            .unwrap();

        assert!((record.accuracy - 1.0).abs() < 1e-12);
        assert!((record.precision - 1.0).abs() < 1e-12);
        assert!((record.recall - 1.0).abs() < 1e-12);
        assert!((record.f1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_results_log_accumulates_under_one_header() {
        let dir = tempdir().unwrap();
        write_dataset(dir.path(), "Category,Prediction\n1,1\n0,1\n1,1\n0,0\n");

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        evaluator
            .evaluate_results("Category", "Prediction", "model-a")
            .unwrap();
        evaluator
            .evaluate_results("Category", "Prediction", "model-b")
            .unwrap();

        let contents = fs::read_to_string(evaluator.results_file()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Model,Accuracy,Precision,Recall,F1");
    }

    #[test]
    fn test_matching_rows_equals_rows_times_accuracy() {
        let dir = tempdir().unwrap();
        write_dataset(dir.path(), "Category,Prediction\n1,1\n0,1\n1,1\n0,0\n1,0\n");

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let matching = evaluator.count_matching_rows("Category", "Prediction").unwrap();
        let record = evaluator
            .evaluate_results("Category", "Prediction", "model")
            .unwrap();

        assert_eq!(matching, 3);
        assert!(matching <= 5);
        assert!((record.accuracy * 5.0 - matching as f64).abs() < 1e-12);
    }

    #[test]
    fn test_scatterplot_returns_mae_and_saves_png() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "Spam,score\n0.0,0.5\n1.0,1.0\n2.0,1.5\n3.0,3.0\n",
        );

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let mae = evaluator.scatterplot("Spam", "score").unwrap();

        // (0.5 + 0 + 0.5 + 0) / 4
        assert!((mae - 0.25).abs() < 1e-12);

        let plot = dir.path().join(PLOTS_DIR).join("score.png");
        assert!(plot.exists());
        assert!(fs::metadata(&plot).unwrap().len() > 0);
    }

    #[test]
    fn test_confusion_matrix_chart_is_saved() {
        let dir = tempdir().unwrap();
        write_dataset(dir.path(), "Category,Prediction\n1,1\n0,1\n1,0\n0,0\n1,1\n");

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let path = evaluator
            .plot_confusion_matrix("Category", "Prediction")
            .unwrap();

        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_histograms_chart_is_saved() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "Category,score\n0,0.12\n1,0.91\n0,0.33\n1,0.84\n1,0.45\n0,0.08\n",
        );

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let path = evaluator.plot_histograms("Category", "score").unwrap();

        assert_eq!(path, dir.path().join(PLOTS_DIR).join("histograms-score.png"));
        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_histograms_with_one_empty_class() {
        // All ground-truth labels are 1, so the class-0 panel has no data
        let dir = tempdir().unwrap();
        write_dataset(dir.path(), "Category,score\n1,0.9\n1,0.8\n1,0.7\n");

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let path = evaluator.plot_histograms("Category", "score").unwrap();

        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_stacked_bar_chart_is_saved() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "sentiment,predicted\npositive,positive\nnegative,positive\nneutral,neutral\npositive,negative\n",
        );

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let path = evaluator
            .plot_stacked_bar_chart("sentiment", "predicted")
            .unwrap();

        assert_eq!(
            path,
            dir.path().join(PLOTS_DIR).join("stacked-bars-predicted.png")
        );
        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_grouped_bar_chart_is_saved() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "sentiment,predicted\npositive,positive\nnegative,positive\nneutral,neutral\npositive,negative\n",
        );

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let path = evaluator
            .plot_grouped_bar_chart("sentiment", "predicted")
            .unwrap();

        assert_eq!(
            path,
            dir.path().join(PLOTS_DIR).join("grouped-bars-predicted.png")
        );
        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_heatmap_is_saved() {
        let dir = tempdir().unwrap();
        write_dataset(
            dir.path(),
            "sentiment,predicted\npositive,positive\nnegative,positive\nneutral,neutral\npositive,negative\n",
        );

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let path = evaluator.plot_heatmap("sentiment", "predicted").unwrap();

        assert_eq!(path, dir.path().join(PLOTS_DIR).join("heatmap-predicted.png"));
        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_missing_column_propagates() {
        let dir = tempdir().unwrap();
        write_dataset(dir.path(), "Category,Prediction\n1,1\n");

        let evaluator = Evaluator::new(dir.path(), "test_set.csv");
        let err = evaluator
            .evaluate_results("Category", "Missing", "model")
            .unwrap_err();

        assert!(matches!(err, DataError::ColumnNotFound(name) if name == "Missing"));
    }
}
