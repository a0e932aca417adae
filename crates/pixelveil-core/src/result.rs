use crate::error::PixelveilError;

pub type Result<T> = std::result::Result<T, PixelveilError>;
