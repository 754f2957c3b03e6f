pub mod source;
pub mod trivia_api;
pub mod types;

pub use source::{QuestionSource, SourceError};
pub use trivia_api::{DEFAULT_TRIVIA_API_URL, TriviaApiSource, TriviaQuery};
pub use types::QuestionRecord;
