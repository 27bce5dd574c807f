#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{EmbeddedSource, JsonFileSource, parse_bank};
pub use repository::{InMemorySource, QuestionSource, StorageError};
