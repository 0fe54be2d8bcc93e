//! Ferry Gateway Server Library
//!
//! This library exposes the server's internal modules for integration testing.

pub mod args;
pub mod config;
pub mod credentials;
pub mod error;
pub mod ftp;
pub mod handlers;
pub mod transfer;
