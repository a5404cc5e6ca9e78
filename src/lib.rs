pub mod config;
pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod server;
pub mod shared_main;
pub mod state;
