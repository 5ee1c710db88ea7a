//! Link service: the create flow and the derived-URL builders.

use std::time::Duration;

use tracing::debug;
use ureq::Agent;
use url::Url;

use crate::alloc;
use crate::config::Config;
use crate::errors::{Result, ShortlyError};
use crate::store::LinkStore;

/// HTTP timeout for the QR image download
const HTTP_TIMEOUT_SECS: u64 = 10;

/// Outcome of a successful create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub id: String,
    pub target: String,
    pub short_url: String,
    /// True when no scheme was recognized and `https://` was prefixed
    pub scheme_corrected: bool,
}

/// Create a short link from raw user input.
///
/// Empty input is rejected. Input with an explicit scheme is stored
/// verbatim; anything else gets `https://` prefixed and the outcome
/// notes the correction so hosts can tell the user. The identifier is
/// allocated against the freshly loaded table and the whole table is
/// flushed back in one save.
pub fn create(store: &LinkStore, config: &Config, input: &str) -> Result<Created> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ShortlyError::validation("Enter a valid URL"));
    }

    let (target, scheme_corrected) = normalize_target(input);
    if Url::parse(&target).is_err() {
        debug!("Stored target does not parse as an absolute URL: {}", target);
    }

    let mut table = store.load();
    let id = alloc::allocate(|candidate| table.contains(candidate))?;
    table.put(id.as_str(), target.as_str());
    store.save(&table)?;

    Ok(Created {
        short_url: short_url_for(config, &id),
        id,
        target,
        scheme_corrected,
    })
}

/// Short URL for an identifier, `<base>#/<id>`
pub fn short_url_for(config: &Config, id: &str) -> String {
    format!("{}#/{}", config.base_url, id)
}

/// QR image URL for a short URL
pub fn qr_url_for(config: &Config, short_url: &str) -> String {
    format!(
        "{}?size={size}x{size}&data={data}",
        config.qr_endpoint,
        size = config.qr_size,
        data = urlencoding::encode(short_url)
    )
}

/// Download the QR image for a short URL
pub fn fetch_qr(config: &Config, short_url: &str) -> Result<Vec<u8>> {
    let url = qr_url_for(config, short_url);
    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
        .build()
        .into();

    let resp = agent
        .get(&url)
        .call()
        .map_err(|e| ShortlyError::http(format!("QR request to \"{}\" failed: {}", url, e)))?;
    resp.into_body()
        .read_to_vec()
        .map_err(|e| ShortlyError::http(format!("QR response read failed: {}", e)))
}

/// Keep input with an explicit scheme verbatim, prefix `https://`
/// otherwise. Recognized forms are `<scheme>://`, protocol-relative
/// `//`, `mailto:` and `tel:` (both case-sensitive).
fn normalize_target(input: &str) -> (String, bool) {
    if has_explicit_scheme(input) {
        (input.to_string(), false)
    } else {
        (format!("https://{}", input), true)
    }
}

fn has_explicit_scheme(input: &str) -> bool {
    if input.starts_with("mailto:") || input.starts_with("tel:") {
        return true;
    }
    let rest = match input.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => input,
    };
    rest.starts_with("//")
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_schemes_are_kept_verbatim() {
        for input in [
            "https://example.com",
            "http://example.com/path?q=1",
            "ftp://files.example.com",
            "//cdn.example.com/lib.js",
            "mailto:someone@example.com",
            "tel:+15551234567",
        ] {
            assert_eq!(normalize_target(input), (input.to_string(), false));
        }
    }

    #[test]
    fn missing_scheme_gets_https_prefixed() {
        assert_eq!(
            normalize_target("example.com"),
            ("https://example.com".to_string(), true)
        );
        assert_eq!(
            normalize_target("www.example.com/page"),
            ("https://www.example.com/page".to_string(), true)
        );
        // a scheme without slashes is not recognized
        assert_eq!(
            normalize_target("foo:bar"),
            ("https://foo:bar".to_string(), true)
        );
        // the mailto/tel checks are case-sensitive
        assert_eq!(
            normalize_target("MAILTO:x@example.com"),
            ("https://MAILTO:x@example.com".to_string(), true)
        );
    }

    #[test]
    fn short_url_joins_base_and_fragment() {
        let config = Config {
            base_url: "https://example.com/links".to_string(),
            ..Config::default()
        };
        assert_eq!(
            short_url_for(&config, "abc123"),
            "https://example.com/links#/abc123"
        );
    }

    #[test]
    fn qr_url_percent_encodes_the_payload() {
        let config = Config::default();
        let url = qr_url_for(&config, "https://example.com/x#/abc123");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=https%3A%2F%2Fexample.com%2Fx%23%2Fabc123"
        );
    }
}
