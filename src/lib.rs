//! fbscope library crate.
//!
//! Reads a Linux framebuffer and renders it as ANSI-colored text art. The
//! binary wires these pieces together; they are exposed here for integration
//! testing.

pub mod capture;
pub mod cli;
pub mod config;
pub mod framebuffer;
pub mod render;
pub mod terminal;
