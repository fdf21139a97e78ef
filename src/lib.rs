// src/lib.rs

pub mod certificate;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod quiz;
pub mod routes;
pub mod source;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;

pub use routes::create_router;
