pub mod engine;
pub mod pipeline;
pub mod template;

pub use crate::domain::model::{Record, RenderResult};
pub use crate::domain::ports::{ConfigProvider, Io, Pipeline};
pub use crate::utils::error::Result;
