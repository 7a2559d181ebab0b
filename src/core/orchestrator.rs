use crate::domain::model::{round3, ResultRow, SafeText, ScoreResult};
use crate::domain::ports::Scorer;
use futures::future;
use std::sync::Arc;

/// Scores one sanitized line against every enabled engine, concurrently.
/// Each engine gets exactly one cell: a rounded value on success, the
/// captured error text on failure. A failing engine never touches the
/// other cells, the row, or the batch. No retries here; any retry policy
/// belongs to the engine's own transport.
pub async fn score_line(engines: &[Arc<dyn Scorer>], index: usize, text: SafeText) -> ResultRow {
    let outcomes = engines.iter().map(|engine| {
        let text = &text;
        async move {
            match engine.score(text).await {
                Ok(value) => ScoreResult::Value(round3(value)),
                Err(err) => {
                    tracing::warn!(
                        "line {}: engine '{}' failed: {}",
                        index,
                        engine.info().label,
                        err
                    );
                    ScoreResult::Failed(format!("ERROR: {err}"))
                }
            }
        }
    });

    let cells = future::join_all(outcomes).await;
    ResultRow { index, text, cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sanitize::Sanitizer;
    use crate::domain::model::EngineInfo;
    use crate::utils::error::{Result, ScoreError};
    use async_trait::async_trait;

    struct FixedScorer {
        info: EngineInfo,
        value: f64,
    }

    struct BrokenScorer {
        info: EngineInfo,
    }

    #[async_trait]
    impl Scorer for FixedScorer {
        fn info(&self) -> &EngineInfo {
            &self.info
        }

        async fn score(&self, _text: &SafeText) -> Result<f64> {
            Ok(self.value)
        }
    }

    #[async_trait]
    impl Scorer for BrokenScorer {
        fn info(&self) -> &EngineInfo {
            &self.info
        }

        async fn score(&self, _text: &SafeText) -> Result<f64> {
            Err(ScoreError::EngineError {
                engine: "broken",
                message: "service unavailable".to_string(),
            })
        }
    }

    fn info(label: &'static str) -> EngineInfo {
        EngineInfo {
            label,
            min: 0.0,
            max: 1.0,
            min_meaning: "low",
            max_meaning: "high",
        }
    }

    #[tokio::test]
    async fn test_every_engine_contributes_exactly_one_cell() {
        let engines: Vec<Arc<dyn Scorer>> = vec![
            Arc::new(FixedScorer {
                info: info("a"),
                value: 0.25,
            }),
            Arc::new(FixedScorer {
                info: info("b"),
                value: 0.75,
            }),
        ];

        let row = score_line(&engines, 1, Sanitizer::new().sanitize("some text")).await;

        assert_eq!(row.index, 1);
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[0], ScoreResult::Value(0.25));
        assert_eq!(row.cells[1], ScoreResult::Value(0.75));
    }

    #[tokio::test]
    async fn test_failure_is_isolated_to_its_own_cell() {
        let engines: Vec<Arc<dyn Scorer>> = vec![
            Arc::new(FixedScorer {
                info: info("ok"),
                value: 0.5,
            }),
            Arc::new(BrokenScorer { info: info("broken") }),
        ];

        let row = score_line(&engines, 3, Sanitizer::new().sanitize("some text")).await;

        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[0], ScoreResult::Value(0.5));
        assert_eq!(
            row.cells[1],
            ScoreResult::Failed("ERROR: service unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn test_values_are_rounded_to_three_decimals() {
        let engines: Vec<Arc<dyn Scorer>> = vec![Arc::new(FixedScorer {
            info: info("a"),
            value: 0.66974,
        })];

        let row = score_line(&engines, 1, Sanitizer::new().sanitize("x")).await;
        assert_eq!(row.cells[0], ScoreResult::Value(0.67));
    }
}
