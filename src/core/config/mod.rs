pub mod data;
pub mod io;
pub mod printing;


pub use data::{Config, DEFAULT_WEBHOOK_URL};
pub use io::ConfigError;
