pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pagination;

pub use db::create_pool;
pub use pagination::PageInfo;
