//! Example: Evaluating Model Predictions
//!
//! Builds a small labeled dataset with two prediction columns, then walks
//! through the full evaluation workflow:
//! 1. Accuracy/precision/recall/F1 appended to the results log
//! 2. Matching-row counts
//! 3. Scatter plot with MAE
//! 4. Histograms, confusion matrix, bar charts, and heatmap
//!
//! Run with: cargo run --example evaluate_predictions

use model_eval::Evaluator;
use std::fs;

fn main() -> anyhow::Result<()> {
    println!("=== Model Evaluation Example ===\n");

    // Build a demo dataset: ground truth plus two model prediction columns
    let base_dir = std::env::temp_dir().join("model_eval_demo");
    fs::create_dir_all(&base_dir)?;
    fs::write(
        base_dir.join("test_set.csv"),
        "Category,gpt_prediction,resnet_prediction,gpt_score\n\
         1,1,1,0.91\n\
         0,0,1,0.12\n\
         1,1,1,0.84\n\
         0,0,0,0.33\n\
         1,0,1,0.45\n\
         0,0,0,0.08\n\
         1,1,0,0.77\n\
         0,1,0,0.52\n",
    )?;

    let evaluator = Evaluator::new(&base_dir, "test_set.csv");

    // Evaluate both models; each call appends a row to the results log
    for model in ["gpt_prediction", "resnet_prediction"] {
        let record = evaluator.evaluate_results("Category", model, model)?;
        println!(
            "{:20} accuracy={:.4} precision={:.4} recall={:.4} f1={:.4}",
            record.model, record.accuracy, record.precision, record.recall, record.f1
        );
    }
    println!("\nResults log: {:?}", evaluator.results_file());

    // Count exact matches
    let matching = evaluator.count_matching_rows("Category", "gpt_prediction")?;
    println!("Matching rows (gpt): {}", matching);

    // Scatter plot of predicted scores against the labels
    let mae = evaluator.scatterplot("Category", "gpt_score")?;
    println!("MAE (gpt_score): {:.4}", mae);

    // Comparison charts
    evaluator.plot_histograms("Category", "gpt_score")?;
    evaluator.plot_confusion_matrix("Category", "gpt_prediction")?;
    evaluator.plot_stacked_bar_chart("Category", "gpt_prediction")?;
    evaluator.plot_grouped_bar_chart("Category", "gpt_prediction")?;
    evaluator.plot_heatmap("Category", "gpt_prediction")?;

    println!("Charts saved under {:?}", base_dir.join("plots"));

    Ok(())
}
