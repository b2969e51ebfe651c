//! Outbound reply models

use std::path::PathBuf;

/// What a handler wants sent back to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// A local file sent as an attachment
    Document(PathBuf),
}
