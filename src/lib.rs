#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
mod routes;
pub mod startup;
