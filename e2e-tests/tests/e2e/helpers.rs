//! Shared helpers for end-to-end tests

use spamfilter_rs::api::ApiServer;
use spamfilter_rs::classifier::{Label, LabeledMessage, NaiveBayesModel};
use std::net::SocketAddr;
use std::sync::Arc;

/// A small balanced corpus, enough for unambiguous predictions.
pub fn sample_corpus() -> Vec<LabeledMessage> {
    vec![
        LabeledMessage::new(
            "WINNER!! You have been selected for a free prize reward",
            Label::Spam,
        ),
        LabeledMessage::new(
            "URGENT! Claim your free cash prize in our jackpot now",
            Label::Spam,
        ),
        LabeledMessage::new("win money now with this exclusive free offer", Label::Spam),
        LabeledMessage::new("are we still on for the meeting tomorrow morning", Label::Ham),
        LabeledMessage::new("see you at lunch if you are not running late", Label::Ham),
        LabeledMessage::new("the quarterly report is attached thanks for reviewing", Label::Ham),
    ]
}

/// Train on the given corpus and serve the API on an ephemeral local port.
pub async fn spawn_service_with(
    messages: Vec<LabeledMessage>,
    strict_untrained: bool,
) -> SocketAddr {
    let model = Arc::new(NaiveBayesModel::train(&messages));
    let server = ApiServer::new(model, strict_untrained, "127.0.0.1:0".to_string());
    let router = server.router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test API");
    });

    addr
}

/// Train on the sample corpus and serve the API on an ephemeral local port.
pub async fn spawn_service() -> SocketAddr {
    spawn_service_with(sample_corpus(), false).await
}
