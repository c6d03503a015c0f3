//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: shared layer composition utilities
//! - `precedence`: layer precedence
//! - `operation_mode`: mode flag resolution
//! - `field_resolution`: derived settings (sort, dates, endpoints, timeout)
//! - `cli_parsing`: flags parsed through the generated command line

mod helpers;
