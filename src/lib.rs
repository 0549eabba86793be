pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use engine::{filter_by_keyword, outline, MAX_DEPTH};
pub use error::{HelpError, Result};
pub use index::{loader::FsLoader, loader::TextLoader, Document, DocumentIndex};
pub use parser::types::{Markers, Node};
