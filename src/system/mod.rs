//! # System Interaction Layer
//!
//! The boundary between the crate and the operating system's process API.
//!
//! ## Modules
//!
//! - **`executor`**: Spawns an external program, blocks until it exits and hands back
//!   what it wrote, either with stdout and stderr merged into one buffer or kept apart.
//!   Failures (spawn errors, non-zero exits) come back as `ExecutionError`, with any
//!   captured output attached.

pub mod executor;
