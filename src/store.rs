use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use time::OffsetDateTime;
use tower_cookies::{Cookie, Cookies};

use crate::{Error, config::SessionConfig, format};

/// Request-scoped session state backed by prefixed cookies.
///
/// One `Session` exists per request/response pair. Construction eagerly decodes every
/// cookie whose name starts with the configured prefix into an in-memory map; mutations
/// update that map and are mirrored onto the response immediately as cookie operations
/// through the shared [`Cookies`] jar. Nothing is retained across requests: all durability
/// comes from the cookies the client sends back.
///
/// The handle is cheaply cloneable and is inserted into request extensions by
/// [`SessionManagerLayer`](crate::SessionManagerLayer).
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cookies: Cookies,
    config: SessionConfig,
    expires_at: OffsetDateTime,
    data: Mutex<HashMap<String, Value>>,
}

impl Session {
    pub(crate) fn new(cookies: Cookies, config: SessionConfig) -> Self {
        let prefix: &str = &config.prefix;
        let mut data = HashMap::new();
        for cookie in cookies.list() {
            if let Some(key) = cookie.name().strip_prefix(prefix) {
                data.insert(key.to_owned(), format::decode_value(cookie.value()));
            }
        }

        let expires_at = OffsetDateTime::now_utc() + config.max_age;

        Self {
            inner: Arc::new(Inner {
                cookies,
                config,
                expires_at,
                data: Mutex::new(data),
            }),
        }
    }

    fn data(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        self.inner.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of all session entries, keyed without the cookie prefix.
    pub fn entries(&self) -> HashMap<String, Value> {
        self.data().clone()
    }

    /// Returns the raw session value for `key`, or `None` if the key is not present.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.data().get(key).cloned()
    }

    /// Returns the session value for `key` deserialized into `T`.
    ///
    /// `None` when the key is absent or the stored value does not deserialize into `T`;
    /// a type mismatch is treated as "no session value", never an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_value(key)
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// Stores `value` under `key` and adds the cookie `{prefix}{key}` to the response.
    ///
    /// Strings travel as-is in the cookie; every other value travels as compact JSON. The
    /// in-memory entry keeps the structured value, so a round-trip within the same request
    /// preserves the original type.
    ///
    /// A value that serializes to `null`, `false`, `0`, or `""` is treated as "no value
    /// supplied": the session and the response are left untouched.
    pub fn insert(&self, key: &str, value: impl Serialize) -> Result<(), Error> {
        let value = serde_json::to_value(value)?;
        if format::is_empty_value(&value) {
            return Ok(());
        }

        let cookie = self.inner.config.build_cookie(
            self.inner.config.cookie_name(key),
            format::encode_value(&value),
            self.inner.expires_at,
        );
        self.inner.cookies.add(cookie);
        self.data().insert(key.to_owned(), value);

        Ok(())
    }

    /// Removes `key` from the session and adds a removal cookie for `{prefix}{key}`.
    ///
    /// The removal cookie is issued whether or not the key was present, so clearing a key
    /// that was never set is safe and still instructs the client to drop any stale cookie.
    pub fn remove(&self, key: &str) {
        self.data().remove(key);
        self.remove_cookie(key);
    }

    /// Removes every key in `keys`, as [`remove`](Self::remove) applied in order.
    pub fn clear<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.remove(key.as_ref());
        }
    }

    /// Removes every entry currently in the session, issuing one removal cookie per key.
    ///
    /// A second call on an already-empty session issues nothing.
    pub fn flush(&self) {
        let keys: Vec<String> = self.data().drain().map(|(key, _)| key).collect();
        for key in &keys {
            self.remove_cookie(key);
        }
    }

    /// Returns the number of session entries.
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns `true` if the session holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    fn remove_cookie(&self, key: &str) {
        let mut cookie = Cookie::new(self.inner.config.cookie_name(key), "");
        self.inner.config.apply_removal_attributes(&mut cookie);
        self.inner.cookies.remove(cookie);
    }
}
