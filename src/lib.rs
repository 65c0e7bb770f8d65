//! packget: install and manage CMSIS software packs in a local pack root

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod ui;
pub mod utils;
pub mod xml;
