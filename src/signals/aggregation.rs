//! Aggregation of technical and news signals into a composite decision.
//!
//! An unweighted vote: each of the 7 signals (6 technical + 1 news)
//! contributes {Buy: +1, Sell: -1, Neutral: 0}, with wider bands at the
//! extremes of the mapping.

use crate::config::AggregationThresholds;
use crate::models::signal::{
    CompositeSignal, Decision, SentimentOutcome, Signal, TechnicalSignals,
};

/// Mean sentiment score of up to `sample` most-recent news outcomes.
///
/// Outcomes where scoring was unavailable contribute 0 (indistinguishable
/// from neutral at this level, by contract). No qualifying news yields 0.
pub fn mean_news_score(outcomes: &[SentimentOutcome], sample: usize) -> f64 {
    let taken: Vec<f64> = outcomes.iter().take(sample).map(|o| o.score()).collect();
    if taken.is_empty() {
        return 0.0;
    }
    taken.iter().sum::<f64>() / taken.len() as f64
}

/// Map a mean news score to a signal. Strict inequalities: a score exactly
/// at the cutoff stays Neutral.
pub fn news_signal(score: f64, thresholds: &AggregationThresholds) -> Signal {
    if score > thresholds.news_cutoff {
        Signal::Buy
    } else if score < -thresholds.news_cutoff {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Map a total score to its decision category, first match wins.
pub fn decide(total_score: i32, thresholds: &AggregationThresholds) -> Decision {
    if total_score >= thresholds.strong_score {
        Decision::StrongBuy
    } else if total_score >= thresholds.mild_score {
        Decision::Buy
    } else if total_score <= -thresholds.strong_score {
        Decision::StrongSell
    } else if total_score <= -thresholds.mild_score {
        Decision::Sell
    } else {
        Decision::Hold
    }
}

/// Join the six technical signals with the news outcomes into a composite
/// verdict. Pure function, no I/O.
pub fn aggregate(
    technical: &TechnicalSignals,
    news: &[SentimentOutcome],
    thresholds: &AggregationThresholds,
    sample: usize,
) -> CompositeSignal {
    let news_score = mean_news_score(news, sample);
    let news_signal = news_signal(news_score, thresholds);
    let total_score = technical.vote_sum() + news_signal.vote();

    CompositeSignal {
        total_score,
        decision: decide(total_score, thresholds),
        news_signal,
        news_score,
    }
}
