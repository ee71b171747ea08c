//! Core types and utilities shared by the Atlas export crates.

pub mod types;
pub mod config;
pub mod error;
pub mod naming;
pub mod notation;
pub mod view;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
pub use naming::{file_extension, group_prefix, maximal_filename, representation_filename};
pub use notation::{escape_html, extract_first_math_fragment, strip_math_delimiters};
pub use view::view_page;
