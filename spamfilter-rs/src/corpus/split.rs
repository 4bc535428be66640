//! Train/test partitioning

use rand::seq::SliceRandom;
use rand::Rng;

use crate::classifier::types::LabeledMessage;

/// Shuffle the corpus and split it at `train_fraction`.
///
/// The boundary index is `floor(len * train_fraction)`, clamped to the
/// corpus size; every message lands in exactly one partition.
pub fn shuffle_split<R: Rng>(
    mut messages: Vec<LabeledMessage>,
    train_fraction: f64,
    rng: &mut R,
) -> (Vec<LabeledMessage>, Vec<LabeledMessage>) {
    messages.shuffle(rng);

    let boundary = (messages.len() as f64 * train_fraction) as usize;
    let boundary = boundary.min(messages.len());
    let test = messages.split_off(boundary);

    (messages, test)
}
