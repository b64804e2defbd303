pub mod config;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod services;
pub mod startup;
