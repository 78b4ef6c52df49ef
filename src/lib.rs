pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, Command, ProcessArgs};
pub use core::{engine::PipelineEngine, pipeline::TaskPipeline};
pub use utils::error::{Result, TaskError};
