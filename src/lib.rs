use std::error::Error;

pub mod dispatch;
pub mod error;
pub mod find;

pub type MyResult<T> = Result<T, Box<dyn Error>>;
