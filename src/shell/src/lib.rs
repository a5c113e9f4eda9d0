pub mod config;
pub mod http_client;
pub mod input;
pub mod render;
pub mod session_storage;
pub mod shell;

pub use shell::Shell;
