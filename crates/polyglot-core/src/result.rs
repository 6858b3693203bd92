use crate::error::PolyglotError;

pub type Result<T> = std::result::Result<T, PolyglotError>;
