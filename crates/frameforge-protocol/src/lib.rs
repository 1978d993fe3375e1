pub mod config;
pub mod fps;
pub mod hardware;
pub mod prediction;
