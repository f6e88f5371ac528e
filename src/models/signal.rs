use serde::{Deserialize, Serialize};

/// Discrete verdict of a single indicator for the most recent bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

impl Signal {
    /// Vote contributed to the composite score.
    pub fn vote(self) -> i32 {
        match self {
            Signal::Buy => 1,
            Signal::Sell => -1,
            Signal::Neutral => 0,
        }
    }
}

/// Sentiment label supplied by the external scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Neutral,
}

/// Scored sentiment for one news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentScore {
    pub sentiment: SentimentLabel,
    /// In [-1.0, 1.0].
    pub score: f64,
    pub one_liner: String,
}

/// Outcome of scoring one news item.
///
/// `Unavailable` is kept distinct from a genuinely neutral score so callers
/// can tell "the market shrugged" from "the scorer was down"; the aggregator
/// treats both as score 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SentimentOutcome {
    Scored(SentimentScore),
    Unavailable { reason: String },
}

impl SentimentOutcome {
    /// Score contributed to the news aggregate; unavailable items count as 0.
    pub fn score(&self) -> f64 {
        match self {
            SentimentOutcome::Scored(s) => s.score,
            SentimentOutcome::Unavailable { .. } => 0.0,
        }
    }
}

/// Final composite verdict category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

/// The six latest-bar technical signals, one per indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSignals {
    pub macd: Signal,
    pub rsi: Signal,
    pub bollinger: Signal,
    pub cci: Signal,
    pub stochastic: Signal,
    pub momentum: Signal,
}

impl TechnicalSignals {
    pub fn all() -> [&'static str; 6] {
        ["macd", "rsi", "bollinger", "cci", "stochastic", "momentum"]
    }

    /// Signals in the same order as [`TechnicalSignals::all`].
    pub fn as_array(&self) -> [Signal; 6] {
        [
            self.macd,
            self.rsi,
            self.bollinger,
            self.cci,
            self.stochastic,
            self.momentum,
        ]
    }

    /// Sum of the six technical votes, in [-6, 6].
    pub fn vote_sum(&self) -> i32 {
        self.as_array().iter().map(|s| s.vote()).sum()
    }
}

/// Full per-indicator series aligned index-for-index with the input price
/// series. Entries before an indicator's lookback window are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSeriesSet {
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub bollinger_upper: Vec<Option<f64>>,
    pub bollinger_middle: Vec<Option<f64>>,
    pub bollinger_lower: Vec<Option<f64>>,
    pub cci: Vec<Option<f64>>,
    pub stochastic_k: Vec<Option<f64>>,
    pub momentum: Vec<Option<f64>>,
}

/// Latest-bar indicator values, for API responses and debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub rsi: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_middle: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub cci: Option<f64>,
    pub stochastic_k: Option<f64>,
    pub momentum: Option<f64>,
}

/// Output of one engine evaluation over a full price series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReport {
    pub signals: TechnicalSignals,
    pub latest: IndicatorSnapshot,
    pub series: IndicatorSeriesSet,
}

/// Composite verdict after joining technical and news signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeSignal {
    /// Sum of the 7 votes (6 technical + 1 news), in [-7, 7].
    pub total_score: i32,
    pub decision: Decision,
    pub news_signal: Signal,
    /// Mean sentiment score of the sampled news items.
    pub news_score: f64,
}
