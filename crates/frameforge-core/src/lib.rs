// Re-export types from the protocol crate so they are accessible via frameforge_core::*
pub use frameforge_protocol::config;
pub use frameforge_protocol::fps;
pub use frameforge_protocol::hardware;
pub use frameforge_protocol::prediction;

// Internal Modules
pub mod api;
pub mod catalog;
pub mod consts;
pub mod engine;
pub mod error;
