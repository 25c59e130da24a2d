// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitlint.
//!
//! This module handles loading, validating and saving configuration, and
//! building a [`Linter`](crate::rules::Linter) from it.

pub mod default;
mod lint;
mod loader;
mod schema;
mod version;

pub use default::default_config;
pub use lint::{enabled_rules, get_formatter, new_linter, validate_config};
pub use loader::{
    config_to_string, find_config_file, find_config_file_in, load_config, load_config_from,
    parse_config, write_config, CONFIG_ENV, CONFIG_FILES,
};
pub use schema::*;
pub use version::{check_min_version, check_version};
