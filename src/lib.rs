pub mod cert;
pub mod config;
pub mod db;
pub mod pdf;
pub mod routes;
pub mod state;
