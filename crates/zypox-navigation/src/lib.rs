//! Zypox Navigation
//!
//! Address bar input resolution:
//!   1. `http://` / `https://` address → navigate verbatim
//!   2. bare domain (contains a dot, no whitespace) → navigate over https
//!   3. anything else → web search
//!
//! Also owns the process-wide visit history shared by normal tabs.

mod error;
mod history;
mod input;
mod search;

pub use error::NavigationError;
pub use history::History;
pub use input::{is_web_address, parse_address, InputResolution, InputResolver};
pub use search::SearchEngine;

pub type Result<T> = std::result::Result<T, NavigationError>;
