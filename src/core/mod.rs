// src/core/mod.rs

//! Command-line handling on top of the process layer: whitespace tokenization,
//! dispatch of whole command lines, and named commands loaded from TOML.

pub mod config_loader;
pub mod dispatcher;
pub mod tokenizer;
