//! Deriving chapter keys from requests.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::extract::{Query, Request};
use percent_encoding::percent_decode_str;

/// Key served when a request targets the root path.
pub const DEFAULT_KEY: &str = "intro";

/// Maps an inbound request to the key of the chapter it asks for.
///
/// Derivation never fails: any request yields a key, even one that no
/// chapter is stored under. Implemented for closures taking a `&Request`.
pub trait KeyDeriver: Send + Sync {
    /// Returns the chapter key requested by `request`.
    fn derive_key(&self, request: &Request) -> String;
}

impl<F> KeyDeriver for F
where
    F: Fn(&Request) -> String + Send + Sync,
{
    fn derive_key(&self, request: &Request) -> String {
        self(request)
    }
}

/// The default policy: the percent-decoded request path without its
/// leading `/`, or the root key when the path is empty.
///
/// A path that does not decode to UTF-8 is used as-is. Case is kept.
#[derive(Debug, Clone)]
pub struct PathKey {
    root_key: String,
}

impl PathKey {
    /// Same policy, serving `root_key` for `/`.
    #[must_use]
    pub fn with_root_key(root_key: impl Into<String>) -> Self {
        Self {
            root_key: root_key.into(),
        }
    }

    /// Derives the key for a raw path.
    #[must_use]
    pub fn key_for_path(&self, path: &str) -> String {
        let key = path.strip_prefix('/').unwrap_or(path);
        if key.is_empty() {
            return self.root_key.clone();
        }
        percent_decode_str(key)
            .decode_utf8()
            .map_or_else(|_| key.to_owned(), Cow::into_owned)
    }
}

impl Default for PathKey {
    fn default() -> Self {
        Self::with_root_key(DEFAULT_KEY)
    }
}

impl KeyDeriver for PathKey {
    fn derive_key(&self, request: &Request) -> String {
        self.key_for_path(request.uri().path())
    }
}

/// Reads the key from a query parameter, e.g. `/?chapter=intro`.
///
/// Requests without the parameter, or with an empty value, fall back to
/// the default path policy.
#[derive(Debug, Clone)]
pub struct QueryKey {
    param: String,
    fallback: PathKey,
}

impl QueryKey {
    /// Reads the key from the query parameter named `param`.
    #[must_use]
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            fallback: PathKey::default(),
        }
    }
}

impl KeyDeriver for QueryKey {
    fn derive_key(&self, request: &Request) -> String {
        Query::<HashMap<String, String>>::try_from_uri(request.uri())
            .ok()
            .and_then(|Query(mut params)| params.remove(&self.param))
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| self.fallback.derive_key(request))
    }
}
