//! # System Interaction Layer
//!
//! Boundary between the core application logic and the operating system.
//!
//! - **`executor`**: spawns a single command line through the platform shell
//!   and reports whether it exited successfully.

pub mod executor;
