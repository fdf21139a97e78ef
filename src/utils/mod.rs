// src/utils/mod.rs

pub mod clock;
pub mod credentials;
pub mod hash;
