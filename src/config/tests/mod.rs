//! Unit tests for configuration loading and validation.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `validation`: Conversion into list options and input parsing

mod helpers;
