//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(String),

    #[error("Tab index out of range: {0}")]
    IndexOutOfRange(usize),

    #[error("Engine view error: {0}")]
    Engine(String),

    #[error("Navigation error: {0}")]
    Navigation(#[from] zypox_navigation::NavigationError),
}
