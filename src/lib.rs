//! Little Lemon Library
//!
//! This module exposes the menu cache, data models and CLI parsing for use in
//! integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod profile;
pub mod ui;
