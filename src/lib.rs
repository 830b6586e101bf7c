//! Anonymize and shrink BAM files for expression-level analysis.
//!
//! Every distinct read name is replaced by a short sequential surrogate
//! (`0`, `1`, ...) and every base quality is set to Phred 0. Record order and
//! all other fields are preserved.
pub mod cli;
pub mod commands;
pub mod config;
pub mod ghost;
pub mod utils;
