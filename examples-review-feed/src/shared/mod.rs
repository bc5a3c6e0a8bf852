pub mod contexts;
pub mod date;
pub mod repository;
pub mod styles;
pub mod types;
