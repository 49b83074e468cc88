pub mod cli;
pub mod json;
pub mod logger;
pub mod output;
