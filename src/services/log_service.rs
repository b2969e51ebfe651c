/// Whether `candidate` unlocks the log file.
///
/// Both values must be present and equal. An unset secret never matches.
pub fn is_authorized(secret: Option<&str>, candidate: Option<&str>) -> bool {
    match (secret, candidate) {
        (Some(secret), Some(candidate)) => !secret.is_empty() && secret == candidate,
        _ => false,
    }
}
