use crate::core::orchestrator;
use crate::core::sanitize::Sanitizer;
use crate::core::validate;
use crate::domain::model::{Rejection, ResultTable};
use crate::domain::ports::ConfigProvider;
use crate::engines::EngineSet;
use futures::stream::{self, StreamExt};
use std::time::Instant;

/// Batch entry point: validates one submission, fans each line out to the
/// enabled engines, and assembles one row per line in input order.
pub struct BatchScorer<C: ConfigProvider> {
    engines: EngineSet,
    sanitizer: Sanitizer,
    config: C,
}

impl<C: ConfigProvider> BatchScorer<C> {
    pub fn new(engines: EngineSet, config: C) -> Self {
        Self {
            engines,
            sanitizer: Sanitizer::new(),
            config,
        }
    }

    /// Scores every line of `raw_text`. Rejection is terminal: no line is
    /// sanitized or scored. On success the table has exactly one row per
    /// input line, 1-indexed, in input order; lines are never reordered,
    /// dropped, or deduplicated even when identical or fully failed.
    pub async fn run(
        &self,
        raw_text: &str,
        verification_passed: bool,
        remote_opt_in: bool,
    ) -> Result<ResultTable, Rejection> {
        validate::check_submission(raw_text, verification_passed, &self.config)?;

        let enabled = self.engines.enabled(remote_opt_in);
        let columns: Vec<String> = enabled.iter().map(|e| e.info().column_title()).collect();

        let line_count = raw_text.lines().count();
        tracing::info!("scoring {} lines with {} engines", line_count, enabled.len());
        let started = Instant::now();

        // Lines run concurrently up to the configured limit; `buffered`
        // yields in submission order, so assembly order is input order no
        // matter which line finishes first.
        let concurrency = self.config.concurrent_lines().max(1);
        let rows = stream::iter(raw_text.lines().enumerate())
            .map(|(i, line)| {
                let engines = &enabled;
                let safe = self.sanitizer.sanitize(line);
                async move { orchestrator::score_line(engines, i + 1, safe).await }
            })
            .buffered(concurrency)
            .collect::<Vec<_>>()
            .await;

        tracing::info!("scored {} lines in {:?}", rows.len(), started.elapsed());

        Ok(ResultTable { columns, rows })
    }
}
