pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;

pub use db::establish_connection;
