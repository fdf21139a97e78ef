// src/handlers/mod.rs

pub mod admin;
pub mod certificate;
pub mod leaderboard;
pub mod page;
pub mod quiz;
