use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs the pipeline stages in order. Any stage failure short-circuits the
/// rest and surfaces as a typed error; nothing is written once a stage fails.
pub struct PipelineEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PipelineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the number of processed records on success.
    pub fn run(&self) -> Result<usize> {
        tracing::debug!("Extracting data...");
        let raw_data = self.pipeline.extract()?;

        tracing::debug!("Transforming data...");
        let records = self.pipeline.transform(raw_data)?;
        let count = records.len();

        tracing::debug!("Loading data...");
        let output_path = self.pipeline.load(&records)?;
        tracing::debug!("Output saved to: {}", output_path);

        Ok(count)
    }
}
