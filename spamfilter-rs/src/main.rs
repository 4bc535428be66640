use spamfilter_rs::api::ApiServer;
use spamfilter_rs::classifier::NaiveBayesModel;
use spamfilter_rs::config::Config;
use spamfilter_rs::corpus::load_corpus;
use spamfilter_rs::error::SpamFilterError;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging
    let level = config.logging.level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting spamfilter-rs server");
    info!("Configuration loaded");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Corpus path: {}", config.corpus.path);

    // Load the corpus and train once; the model is immutable afterwards
    let messages = load_corpus(&config.corpus.path)?;
    if messages.is_empty() {
        return Err(Box::new(SpamFilterError::Corpus(format!(
            "no usable records in {}",
            config.corpus.path
        ))) as Box<dyn std::error::Error>);
    }
    info!("Loaded {} labeled messages", messages.len());

    let model = NaiveBayesModel::train(&messages);
    let summary = model.summary();
    info!("Training complete");
    info!(
        "  Spam messages: {} | Ham messages: {}",
        summary.spam_count, summary.ham_count
    );
    info!("  Vocabulary size: {}", summary.vocabulary_size);

    if !model.is_trained() {
        warn!("Model was trained on a single class; classification quality will be poor");
    }

    let server = ApiServer::new(
        Arc::new(model),
        config.classifier.strict_untrained,
        config.server.listen_addr.clone(),
    );
    server.run().await?;

    Ok(())
}
