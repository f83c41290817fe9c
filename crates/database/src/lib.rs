pub mod db;
pub mod entities;
pub mod error;
pub mod schema;
pub mod services;
