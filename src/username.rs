//! Username format validation
//!
//! Instagram handles: letters, digits, dots and underscores, 1 to 30
//! characters. Format check only, no live lookup against any service.

use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._]{1,30}$").expect("username pattern must compile"));

/// Whether `username` is a well-formed Instagram handle
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}
