//! Client-side URL validity check.
//!
//! Runs before any network call so obviously broken input never reaches the
//! shortening service.

use url::Url;

/// Returns `true` if `input` is an absolute URL with a scheme and a host authority.
///
/// # Rules
///
/// 1. **Parse**: must parse as an absolute URL (relative paths fail)
/// 2. **Authority**: must carry a `//authority` part
/// 3. **Host**: the authority must name a non-empty host
///
/// Scheme-only URLs such as `mailto:` or `data:` have no authority and are
/// rejected, as are `file:///` URLs with an empty host.
///
/// The check is pure and does not trim; callers trim first.
///
/// # Examples
///
/// ```
/// use shortener_client::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com"));
/// assert!(!is_valid_url("not a url"));
/// assert!(!is_valid_url("example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    let Ok(url) = Url::parse(input) else {
        return false;
    };

    url.has_authority() && url.host_str().is_some_and(|host| !host.is_empty())
}
