//! Rewrite of old hash-style links (`/#/chat`) to real paths.

#[cfg(test)]
#[path = "legacy_hash_test.rs"]
mod legacy_hash_test;

/// Map a `location.hash` value to the path it used to address.
///
/// Only hashes of the form `#/...` are routes; plain anchors return `None`.
pub fn resolve(hash: &str) -> Option<String> {
    let route = hash.strip_prefix('#')?;
    if !route.starts_with('/') {
        return None;
    }
    let trimmed = route.trim_end_matches('/');
    Some(if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() })
}

/// Read the current hash and return the path to navigate to, if any.
pub fn pending_redirect() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        resolve(&hash)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
