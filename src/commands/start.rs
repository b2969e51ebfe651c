use tracing::info;

use crate::models::{Invocation, Reply};

pub const GREETING: &str = "Hello! This bot was created to receive information on world currency rates";

/// Greet the user. Any argument is ignored.
pub fn execute(inv: &Invocation) -> Reply {
    info!("User {} issued /start command", inv.sender_id);
    Reply::Text(GREETING.to_string())
}
