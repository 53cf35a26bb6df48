// src/services/mod.rs
pub mod echo;
pub mod prediction;
pub mod scorer;
