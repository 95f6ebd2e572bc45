pub mod pipeline;

pub use pipeline::{ColumnPipeline, StandardizedColumn};
