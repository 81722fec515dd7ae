pub mod cache;
pub mod config;
pub mod db;
pub mod logging;
pub mod routes;
pub mod types;
pub mod utils;
