use crate::domain::model::{EngineInfo, ResultTable, SafeText};
use crate::utils::error::Result;
use async_trait::async_trait;

/// One scoring capability. Engines are registered into an `EngineSet` and
/// iterated; nothing downstream branches on a concrete engine type.
#[async_trait]
pub trait Scorer: Send + Sync {
    fn info(&self) -> &EngineInfo;

    /// Remote, quota-limited engines return true and only participate when
    /// the request sets the remote opt-in flag.
    fn opt_in_only(&self) -> bool {
        false
    }

    async fn score(&self, text: &SafeText) -> Result<f64>;
}

/// Human-verification collaborator, consulted once before validation.
pub trait Verifier: Send + Sync {
    fn verify(&self) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn max_lines(&self) -> usize;
    fn max_bytes(&self) -> usize;
    fn concurrent_lines(&self) -> usize;
}

/// Rendering collaborator: turns a finished table into a display surface.
pub trait TableRenderer {
    fn render(&self, table: &ResultTable) -> Result<String>;
}
