use crate::domain::model::ProcessedRecord;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<serde_json::Value>;
    fn transform(&self, data: serde_json::Value) -> Result<Vec<ProcessedRecord>>;
    fn load(&self, records: &[ProcessedRecord]) -> Result<String>;
}
