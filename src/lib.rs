//! easectl - asset probe and locale key merger
//!
//! Two independent batch jobs for the TravelEase client:
//!
//! - `probe` sends a HEAD request to each asset URL and prints status code,
//!   content type and content length, isolating failures per URL.
//! - `merge` adds a configured table of translation keys to every JSON locale
//!   file in a directory without touching existing values.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: The probe and merge jobs themselves

pub mod cli;
pub mod config;
pub mod core;
