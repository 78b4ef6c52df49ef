use crate::core::schema;
use crate::core::{ConfigProvider, Pipeline, ProcessedRecord, Storage, TaskRecord};
use crate::utils::error::{Result, TaskError};
use serde_json::Value;
use std::io::ErrorKind;

/// Derive output records from validated tasks. Total: empty in, empty out;
/// order preserved.
pub fn enrich(records: &[TaskRecord]) -> Vec<ProcessedRecord> {
    records.iter().map(ProcessedRecord::from_task).collect()
}

pub struct TaskPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> TaskPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn read_failure(&self, err: TaskError) -> TaskError {
        let path = self.config.input_path();
        let message = match &err {
            TaskError::Io(io) => match io.kind() {
                ErrorKind::NotFound => format!("Input file not found: {path}"),
                ErrorKind::PermissionDenied => format!("Permission denied reading file: {path}"),
                _ => format!("Error reading input file: {io}"),
            },
            other => format!("Error reading input file: {other}"),
        };
        TaskError::Input { message }
    }

    fn write_failure(&self, err: TaskError) -> TaskError {
        let path = self.config.output_path();
        let message = match &err {
            TaskError::Io(io) if io.kind() == ErrorKind::PermissionDenied => {
                format!("Permission denied writing to file: {path}")
            }
            other => format!("Error writing output file: {other}"),
        };
        TaskError::Output { message }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for TaskPipeline<S, C> {
    fn extract(&self) -> Result<Value> {
        let path = self.config.input_path();
        tracing::debug!("Reading input file: {}", path);

        let bytes = self
            .storage
            .read_file(path)
            .map_err(|e| self.read_failure(e))?;

        let data = serde_json::from_slice(&bytes).map_err(|e| TaskError::Input {
            message: format!("Invalid JSON in input file: {e}"),
        })?;

        tracing::info!("Successfully read input file: {}", path);
        Ok(data)
    }

    fn transform(&self, data: Value) -> Result<Vec<ProcessedRecord>> {
        let validated = schema::validate_collection(&data)?;
        let processed = enrich(&validated);

        tracing::info!("Successfully processed {} records", processed.len());
        Ok(processed)
    }

    fn load(&self, records: &[ProcessedRecord]) -> Result<String> {
        let path = self.config.output_path();
        tracing::debug!("Writing {} records to: {}", records.len(), path);

        let json = serde_json::to_vec_pretty(records).map_err(|e| TaskError::Output {
            message: format!("Error writing output file: {e}"),
        })?;

        self.storage
            .write_file(path, &json)
            .map_err(|e| self.write_failure(e))?;

        tracing::info!("Successfully wrote output file: {}", path);
        Ok(path.to_string())
    }
}
