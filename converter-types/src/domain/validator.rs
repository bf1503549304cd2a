//! Conditional-request validator tokens.

use serde::{Deserialize, Serialize};

/// Tokens from the last successful symbols response, replayed on the next
/// request so the provider can answer `304 Not Modified`.
///
/// `etag` comes from the `Etag` response header and is sent back as
/// `If-None-Match`; `last_modified` comes from the `Date` response header and
/// is sent back as `If-Modified-Since`. Either may be missing, in which case
/// the matching request header is simply not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheValidator {
    pub etag: Option<String>,
    pub last_modified: Option<String>,
}

impl CacheValidator {
    pub fn new(etag: Option<String>, last_modified: Option<String>) -> Self {
        Self {
            etag,
            last_modified,
        }
    }

    /// True when neither token is present, i.e. the request is unconditional.
    pub fn is_empty(&self) -> bool {
        self.etag.is_none() && self.last_modified.is_none()
    }
}
