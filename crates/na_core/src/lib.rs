pub mod error;
pub mod storage;
pub mod types;

pub use error::Error;
pub use storage::NewsStorage;
pub use types::{Article, Category, RawNewsRecord, Sentiment, ViewRecord};

pub type Result<T> = std::result::Result<T, Error>;
