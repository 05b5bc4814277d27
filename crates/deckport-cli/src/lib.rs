//! Command-line front end for deckport.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod types;
