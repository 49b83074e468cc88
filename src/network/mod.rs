pub mod error;
pub mod prefix;
pub mod subnet;
pub mod types;
pub mod util;
