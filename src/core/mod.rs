// src/core/mod.rs

pub mod loader;
pub mod runner;
pub mod selector;
pub mod session;
