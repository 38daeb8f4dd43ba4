pub mod commands;
pub mod config;
pub mod logging;
pub mod query;
pub mod response;
pub mod router;
