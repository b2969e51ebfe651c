use std::path::Path;

use tracing::info;

use crate::models::{Invocation, Reply};
use crate::services::log_service;

/// Send the log file to holders of the log secret. Anyone else gets nothing.
pub fn execute(log_secret: Option<&str>, log_file: &Path, inv: &Invocation) -> Option<Reply> {
    if !log_service::is_authorized(log_secret, inv.raw_argument.as_deref()) {
        return None;
    }

    info!("User {} requested logs", inv.sender_id);
    Some(Reply::Document(log_file.to_path_buf()))
}
