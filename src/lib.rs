pub mod cli;
pub mod dictation;
pub mod error;
pub mod models;
pub mod output;
pub mod score;
pub mod storage;
pub mod store;
