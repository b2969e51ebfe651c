use tracing::{info, warn};

use crate::api::exchangerate::RateLookup;
use crate::models::{CurrencyRequest, Invocation, Reply, DEFAULT_TARGET_CURRENCY};
use crate::services::currency_service::{
    format_rate_reply, parse_currency_argument, truncate_timestamp, USAGE_HINT,
};

fn usage_hint(user_id: u64) -> Reply {
    warn!("User {} did not provide a currency code", user_id);
    Reply::Text(USAGE_HINT.to_string())
}

pub async fn execute(lookup: &dyn RateLookup, inv: &Invocation) -> Reply {
    let user_id = inv.sender_id;

    let result = match parse_currency_argument(inv.raw_argument.as_deref()) {
        CurrencyRequest::Missing | CurrencyRequest::Malformed => return usage_hint(user_id),
        CurrencyRequest::Pair(base, target) => {
            let result = lookup.lookup(&base, &target).await;
            info!("User {} requested currency: {}, {}", user_id, base, target);
            result
        }
        CurrencyRequest::Single(code) => {
            let result = lookup.lookup(&code, DEFAULT_TARGET_CURRENCY).await;
            // Logged before the presence check; a failed lookup shows as None
            info!(
                "User {} requested currency: {}\nLast update: {}",
                user_id,
                code,
                result.updated_at.as_deref().map_or("None", truncate_timestamp)
            );
            result
        }
    };

    match result.rate {
        Some(rate) => Reply::Text(format_rate_reply(rate, result.updated_at.as_deref())),
        None => usage_hint(user_id),
    }
}
