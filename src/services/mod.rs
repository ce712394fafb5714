// Laesbarhed Core Services

pub mod analysis;
pub mod config_store;
pub mod text_processor;

pub use analysis::report::format_summary;
pub use analysis::{rank_description, TextAnalysis};
pub use config_store::*;
pub use text_processor::*;
