pub mod errors;
pub mod filters;
pub mod search;

pub mod database;
pub mod server;
pub mod services;
