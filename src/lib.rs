pub mod capability;
pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod probe;
pub mod report;
pub mod runner;

pub use capability::{Diagnosable, StructuralCheck, VideoPipeline};
pub use components::{ExtractorCore, FrontendController};
pub use config::SubcheckConfig;
pub use errors::{Result, SubcheckError};
pub use probe::ToolProbe;
pub use report::RunSummary;
pub use runner::{Runner, SuiteSelection};
