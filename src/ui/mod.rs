//! Interactive prompts

pub mod license;

pub use license::{prompt_license, LicenseChoice};
