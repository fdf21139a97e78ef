// src/quiz/mod.rs

pub mod scoring;
pub mod session;
pub mod shuffle;
pub mod timer;
