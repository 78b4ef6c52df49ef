pub mod engine;
pub mod pipeline;
pub mod schema;

pub use crate::domain::model::{ProcessedRecord, TaskRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
