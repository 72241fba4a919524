//! Rendering of finished tables.
//!
//! Emitters perform no validation: the table and blob they receive are
//! already final. This module handles:
//! - C literals with registry static assertions (`CEmitter`)
//! - decoded JSON for tooling and review (`JsonEmitter`)
//! - C string literal escaping

mod c;
mod config;
mod escape;
mod json;

#[cfg(test)]
mod c_tests;
#[cfg(test)]
mod escape_tests;

pub use c::CEmitter;
pub use config::{DEFAULT_TABLE_NAME, EmitConfig};
pub use escape::escape_c_string;
pub use json::JsonEmitter;
