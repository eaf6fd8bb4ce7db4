pub mod config;
pub mod error;
pub mod splice;
pub mod version;

pub use error::PipelineError;
