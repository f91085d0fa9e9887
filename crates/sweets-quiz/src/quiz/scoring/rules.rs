use super::config::ScoringWeights;
use super::{ScoreComponent, ScoredItem};
use crate::quiz::domain::{Answer, Item, MatchDimension};

/// Applies every answer to `item`. Contributions are additive per answer, so a repeated
/// matching answer counts twice.
pub(crate) fn score_item<'c>(
    item: &'c Item,
    answers: &[Answer],
    weights: &ScoringWeights,
) -> ScoredItem<'c> {
    let mut components = Vec::new();
    let mut score: u32 = 0;

    for answer in answers {
        let Some(dimension) = MatchDimension::for_question(answer.question_id) else {
            continue;
        };

        if !dimension.matches(item, &answer.value) {
            continue;
        }

        let points = weight_for(dimension, weights);
        score = score.saturating_add(points);
        components.push(ScoreComponent {
            dimension,
            question_id: answer.question_id,
            value: answer.value.clone(),
            points,
        });
    }

    ScoredItem {
        item,
        score,
        components,
    }
}

fn weight_for(dimension: MatchDimension, weights: &ScoringWeights) -> u32 {
    match dimension {
        MatchDimension::Mood => weights.mood,
        MatchDimension::TimeOfDay => weights.time,
        MatchDimension::Texture => weights.texture,
        MatchDimension::Sweetness => weights.sweetness,
    }
}
