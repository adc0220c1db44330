//! # Terminal Shell
//!
//! One of the two front ends. This is the only place that parses arguments,
//! writes to stdout/stderr and decides exit codes; everything else goes
//! through [`versenote::api::VerseApi`].

pub mod commands;
mod print;
pub mod setup;
