// src/views/mod.rs

pub mod panel;
pub mod render;
