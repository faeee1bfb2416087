//! Container Packager - builds projects living inside running containers
//!
//! This crate provides functionality for:
//! - Copying a source tree out of a container and back in
//! - Detecting the project type (C#, Java, Electron) from its file names
//! - Running the matching build tool and locating the artifact
//! - Serving the whole flow over HTTP

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod packager;
pub mod server;
pub mod transfer;

// Re-export commonly used types
pub use config::Config;
pub use error::{PackagerError, Result};
