//! Integration test suite modules

mod config_file;
mod focus;
mod scenarios;
