use crate::models::CurrencyRequest;

/// Reply for a missing argument or a failed lookup
pub const USAGE_HINT: &str =
    "Please enter a currency code after the command, e.g., /currency USD or /currency USD EUR.";

/// Length of the ` HH:MM:SS +0000` suffix cut from API timestamps
const TIMESTAMP_SUFFIX_LEN: usize = 15;

/// Interpret the `/currency` argument. Codes are upper-cased, nothing else is checked.
pub fn parse_currency_argument(raw_argument: Option<&str>) -> CurrencyRequest {
    let Some(arg) = raw_argument.map(str::trim).filter(|a| !a.is_empty()) else {
        return CurrencyRequest::Missing;
    };

    let codes: Vec<String> = arg.split_whitespace().map(str::to_uppercase).collect();
    match codes.as_slice() {
        [single] => CurrencyRequest::Single(single.clone()),
        [base, target] => CurrencyRequest::Pair(base.clone(), target.clone()),
        _ => CurrencyRequest::Malformed,
    }
}

/// Drop the last 15 characters of `timestamp`.
///
/// `"Fri, 27 Mar 2020 00:00:00 +0000"` becomes `"Fri, 27 Mar 2020"`.
/// Shorter input yields an empty string.
pub fn truncate_timestamp(timestamp: &str) -> &str {
    let keep = timestamp.chars().count().saturating_sub(TIMESTAMP_SUFFIX_LEN);
    match timestamp.char_indices().nth(keep) {
        Some((idx, _)) => &timestamp[..idx],
        None => timestamp,
    }
}

/// Reply text for a successful lookup
pub fn format_rate_reply(rate: f64, updated_at: Option<&str>) -> String {
    format!(
        "You've entered currency: {}\nLast update: {}",
        rate,
        updated_at.map(truncate_timestamp).unwrap_or_default()
    )
}
