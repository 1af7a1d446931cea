//! Model Eval - Evaluation Metrics for CSV Prediction Columns
//!
//! Command-line front end over the [`Evaluator`]: one subcommand per metric
//! or chart. All subcommands share the dataset arguments.
//!
//! ```bash
//! model_eval --base-dir datasets --data test_set.csv \
//!     evaluate --original Category --prediction gpt-4o --model gpt-4o
//! ```

use clap::{Parser, Subcommand};
use model_eval::Evaluator;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "model_eval")]
#[command(about = "Evaluation metrics and comparison charts for CSV prediction columns")]
struct Cli {
    /// Directory holding the dataset, results log, and plots
    #[arg(short, long, default_value = "datasets")]
    base_dir: PathBuf,

    /// Dataset file name, relative to the base directory
    #[arg(short, long)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute accuracy/precision/recall/F1 and append to the results log
    Evaluate {
        /// Ground-truth label column
        #[arg(short, long)]
        original: String,

        /// Prediction column
        #[arg(short, long)]
        prediction: String,

        /// Model name recorded in the results log
        #[arg(short, long)]
        model: String,
    },

    /// Scatter plot with regression line; prints the mean absolute error
    Scatter {
        /// Ground-truth numeric column
        #[arg(short, long)]
        original: String,

        /// Prediction column
        #[arg(short, long)]
        prediction: String,
    },

    /// Count rows where the two columns hold the same value
    Matching {
        /// Ground-truth label column
        #[arg(short, long)]
        original: String,

        /// Prediction column
        #[arg(short, long)]
        prediction: String,
    },

    /// Histograms of predictions split by ground-truth class 0/1
    Histograms {
        /// Ground-truth class column (0/1)
        #[arg(short, long)]
        original: String,

        /// Predicted probability column
        #[arg(short, long)]
        prediction: String,
    },

    /// Annotated confusion-matrix heatmap
    Confusion {
        /// Ground-truth label column
        #[arg(short, long)]
        original: String,

        /// Prediction column
        #[arg(short, long)]
        prediction: String,
    },

    /// 100%-stacked bar chart of the two columns' cross-tab
    Stacked {
        /// First label column (bar groups)
        #[arg(short, long)]
        original: String,

        /// Second label column (segments)
        #[arg(short, long)]
        prediction: String,
    },

    /// Grouped bar chart of cross-tab counts
    Grouped {
        /// First label column (bar groups)
        #[arg(short, long)]
        original: String,

        /// Second label column (bars within a group)
        #[arg(short, long)]
        prediction: String,
    },

    /// Annotated heatmap of the two columns' cross-tab
    Heatmap {
        /// First label column (rows)
        #[arg(short, long)]
        original: String,

        /// Second label column (columns)
        #[arg(short, long)]
        prediction: String,
    },
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let evaluator = Evaluator::new(&cli.base_dir, &cli.data);

    match cli.command {
        Commands::Evaluate {
            original,
            prediction,
            model,
        } => {
            let record = evaluator.evaluate_results(&original, &prediction, &model)?;

            println!("\nModel Performance: {}", record.model);
            println!("==================");
            println!("Accuracy:  {:.4}", record.accuracy);
            println!("Precision: {:.4}", record.precision);
            println!("Recall:    {:.4}", record.recall);
            println!("F1 Score:  {:.4}", record.f1);
            println!("\nAppended to {:?}", evaluator.results_file());
        }

        Commands::Scatter {
            original,
            prediction,
        } => {
            let mae = evaluator.scatterplot(&original, &prediction)?;
            println!("MAE ({} vs {}): {:.4}", original, prediction, mae);
        }

        Commands::Matching {
            original,
            prediction,
        } => {
            let matching = evaluator.count_matching_rows(&original, &prediction)?;
            println!("Matching rows: {}", matching);
        }

        Commands::Histograms {
            original,
            prediction,
        } => {
            let path = evaluator.plot_histograms(&original, &prediction)?;
            println!("Saved {:?}", path);
        }

        Commands::Confusion {
            original,
            prediction,
        } => {
            let path = evaluator.plot_confusion_matrix(&original, &prediction)?;
            println!("Saved {:?}", path);
        }

        Commands::Stacked {
            original,
            prediction,
        } => {
            let path = evaluator.plot_stacked_bar_chart(&original, &prediction)?;
            println!("Saved {:?}", path);
        }

        Commands::Grouped {
            original,
            prediction,
        } => {
            let path = evaluator.plot_grouped_bar_chart(&original, &prediction)?;
            println!("Saved {:?}", path);
        }

        Commands::Heatmap {
            original,
            prediction,
        } => {
            let path = evaluator.plot_heatmap(&original, &prediction)?;
            println!("Saved {:?}", path);
        }
    }

    Ok(())
}
