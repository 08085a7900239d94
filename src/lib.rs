//! A single-page exercise log: sign in, record sets, reps and weight for
//! upper- and lower-body work, and see your most recent attempt at an
//! exercise while you type the next one.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod history;
pub mod middleware;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod version;
