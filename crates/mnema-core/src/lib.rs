pub mod language;
pub mod parse;
pub mod preprocess;
pub mod prompt;
pub mod safety;
pub mod service;

pub use language::LanguageHinter;
pub use service::{HintService, HintSettings};
