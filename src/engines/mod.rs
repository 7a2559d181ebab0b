pub mod pattern;
pub mod perspective;
pub mod vader;

use crate::domain::ports::Scorer;
use std::sync::Arc;

/// Registry of scoring engines. Everything downstream iterates this set;
/// adding an engine means registering it here, never branching elsewhere.
#[derive(Clone, Default)]
pub struct EngineSet {
    engines: Vec<Arc<dyn Scorer>>,
}

impl EngineSet {
    /// The always-available local engines.
    pub fn standard() -> Self {
        let mut set = Self::default();
        set.register(Arc::new(vader::VaderScorer::new()));
        set.register(Arc::new(pattern::PolarityScorer::new()));
        set.register(Arc::new(pattern::SubjectivityScorer::new()));
        set
    }

    pub fn register(&mut self, engine: Arc<dyn Scorer>) {
        self.engines.push(engine);
    }

    /// Engines participating in one request: opt-in (remote) engines are
    /// included only when the request asked for them.
    pub fn enabled(&self, remote_opt_in: bool) -> Vec<Arc<dyn Scorer>> {
        self.engines
            .iter()
            .filter(|engine| remote_opt_in || !engine.opt_in_only())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
