pub mod batch;
pub mod orchestrator;
pub mod sanitize;
pub mod validate;

pub use crate::domain::model::{ResultRow, ResultTable};
pub use crate::domain::ports::{ConfigProvider, Scorer};
pub use crate::utils::error::Result;
