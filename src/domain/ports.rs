use crate::domain::model::{Record, RenderResult};
use crate::utils::error::Result;

pub trait Io {
    fn read_input(&self, path: &str) -> Result<Vec<u8>>;
    fn write_output(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, data: Vec<Record>) -> Result<RenderResult>;
    fn load(&self, result: RenderResult) -> Result<String>;
}
