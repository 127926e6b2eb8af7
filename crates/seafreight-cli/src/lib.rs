//! Seafreight CLI library.
//!
//! This crate provides command-line interface utilities for seafreight
//! scenarios, chiefly output formatting shared by the subcommands.

pub mod output;
