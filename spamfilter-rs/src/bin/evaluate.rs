//! Batch accuracy evaluator
//!
//! Loads the labeled corpus, trains on a shuffled split and reports
//! held-out accuracy.
//!
//! # Usage
//!
//! ```bash
//! # Default 80/20 split over spam_ham_dataset.csv
//! evaluate
//!
//! # Custom corpus and split
//! evaluate --corpus data/messages.csv --train-fraction 0.9
//! ```

use clap::Parser;
use spamfilter_rs::classifier::{evaluate, NaiveBayesModel};
use spamfilter_rs::corpus::{load_corpus, shuffle_split};

/// Fixed smoke-check inputs classified before the held-out run.
const SAMPLE_MESSAGES: [&str; 3] = [
    "WINNER!! As a valued network customer you have been selected to receive a £900 prize reward!",
    "Hey, are we still on for the meeting tomorrow at 10am? Let me know.",
    "URGENT! You have won a 1 week FREE membership in our £100,000 Prize Jackpot!",
];

#[derive(Parser)]
#[command(name = "evaluate")]
#[command(about = "Train on a corpus split and report held-out accuracy", long_about = None)]
struct Cli {
    /// Path to the labeled corpus file
    #[arg(short, long, default_value = "spam_ham_dataset.csv")]
    corpus: String,

    /// Fraction of the corpus used for training
    #[arg(short, long, default_value_t = 0.8)]
    train_fraction: f64,

    /// Skip the fixed sample-message predictions
    #[arg(long)]
    no_samples: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("Loading corpus: {}", cli.corpus);
    let messages = load_corpus(&cli.corpus)?;
    if messages.is_empty() {
        eprintln!("Error: no usable records in {}", cli.corpus);
        std::process::exit(1);
    }
    println!("Loaded {} labeled messages", messages.len());

    let (train_set, test_set) =
        shuffle_split(messages, cli.train_fraction, &mut rand::thread_rng());

    let model = NaiveBayesModel::train(&train_set);
    let summary = model.summary();
    println!("\nTraining complete");
    println!(
        "  Spam messages: {} | Ham messages: {}",
        summary.spam_count, summary.ham_count
    );
    println!("  Vocabulary size: {}", summary.vocabulary_size);

    if !model.is_trained() {
        println!("\nWarning: the model saw only one class; accuracy will be poor");
    }

    if !cli.no_samples {
        println!("\n--- Sample predictions ---");
        for sample in SAMPLE_MESSAGES {
            println!("  [{}] {}", model.predict(sample), sample);
        }
    }

    let report = evaluate(&model, &test_set);
    println!("\n--- Evaluation on held-out split ---");
    println!("Total test messages: {}", report.total);
    println!("Correct predictions: {}", report.correct);
    println!("Accuracy: {:.2}%", report.accuracy());

    Ok(())
}
