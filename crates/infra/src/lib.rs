pub mod db;
pub mod models;
pub mod repos;
pub mod seed;

pub use db::Db;
