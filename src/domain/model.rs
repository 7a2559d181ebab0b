use std::fmt;
use thiserror::Error;

/// A sanitized line. The sanitizer is the only way to construct one, so
/// holding a `SafeText` means the markup allow-list and whitespace policy
/// have already run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeText(String);

impl SafeText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Character count, used by the remote engine's length precheck.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for SafeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static description of one engine's metric: label, numeric range, and
/// what each end of the range means. Column titles derive from this so
/// results stay self-describing.
#[derive(Debug, Clone)]
pub struct EngineInfo {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub min_meaning: &'static str,
    pub max_meaning: &'static str,
}

impl EngineInfo {
    pub fn column_title(&self) -> String {
        format!(
            "{}: {:+.1} ({}) to {:+.1} ({})",
            self.label, self.min, self.min_meaning, self.max, self.max_meaning
        )
    }
}

/// One engine's outcome for one line: a value on the engine's scale, or
/// the captured failure text. A failure never aborts its row.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreResult {
    Value(f64),
    Failed(String),
}

impl ScoreResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v:.3}"),
            Self::Failed(message) => f.write_str(message),
        }
    }
}

/// Round a raw engine value to the 3 decimal places carried in result cells.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone)]
pub struct ResultRow {
    /// 1-based display index, equal to the line's position in the input.
    pub index: usize,
    pub text: SafeText,
    /// One cell per enabled engine, in registry order.
    pub cells: Vec<ScoreResult>,
}

/// Ordered rows with a stable, self-describing column set. Row order is
/// input line order, independent of scoring completion order.
#[derive(Debug, Clone)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Request-level rejection: terminal for the whole submission, no scoring
/// work starts. Engine-level failures are `ScoreResult::Failed` cells, not
/// rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("verification failed: please complete the human check")]
    VerificationFailed,

    #[error("{actual} lines submitted, the limit is {max}")]
    TooManyLines { actual: usize, max: usize },

    #[error("{actual} bytes submitted, the limit is {max}")]
    TooLarge { actual: usize, max: usize },
}
