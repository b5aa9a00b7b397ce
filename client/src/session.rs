use gloo_storage::Storage;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use portal_shared::User;

const TOKEN_KEY: &str = "authToken";
const USER_KEY: &str = "user";

/// Session store: the authenticated user plus a loading flag that stays true
/// until the one-shot initialization has run. Written only by
/// `init`/`login`/`logout`; read everywhere via context.
#[derive(Clone, Copy)]
pub struct Auth {
    pub user: RwSignal<Option<User>>,
    pub loading: RwSignal<bool>,
}

impl Auth {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    pub fn expect() -> Self {
        expect_context::<Auth>()
    }

    pub fn is_authenticated(self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// One-shot session bootstrap.
    ///
    /// A backend OAuth redirect lands on any route with `?token=...&user=...`;
    /// capture it, persist it, and strip the query without reloading.
    /// Otherwise rehydrate from local storage, discarding anything that no
    /// longer parses. No network call is made: the stored token is trusted
    /// until logout, even if the backend has expired it.
    pub fn init(self) {
        let Some(window) = web_sys::window() else {
            self.loading.set(false);
            return;
        };
        let location = window.location();
        let query = location.search().unwrap_or_default();

        if let Some((token, user_json)) = callback_params(&query) {
            match decode_user(&user_json) {
                Some(user) => {
                    persist(&token, &user_json);
                    self.user.set(Some(user));
                    if let Ok(path) = location.pathname()
                        && let Ok(history) = window.history()
                    {
                        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
                    }
                }
                None => {
                    web_sys::console::error_1(
                        &"Failed to parse user data from callback URL".into(),
                    );
                }
            }
            self.loading.set(false);
            return;
        }

        let storage = gloo_storage::LocalStorage::raw();
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let stored_user = storage.get_item(USER_KEY).ok().flatten();
        if let (Some(_), Some(stored_user)) = (token, stored_user) {
            match decode_user(&stored_user) {
                Some(user) => self.user.set(Some(user)),
                None => clear_persisted(),
            }
        }
        self.loading.set(false);
    }

    pub fn login(self, token: &str, user: User) {
        match serde_json::to_string(&user) {
            Ok(json) => persist(token, &json),
            Err(_) => persist(token, ""),
        }
        self.user.set(Some(user));
    }

    pub fn logout(self) {
        clear_persisted();
        self.user.set(None);
    }
}

/// Bearer token for authenticated requests, if any.
pub fn auth_token() -> Option<String> {
    gloo_storage::LocalStorage::raw()
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
}

fn persist(token: &str, user_json: &str) {
    let storage = gloo_storage::LocalStorage::raw();
    let _ = storage.set_item(TOKEN_KEY, token);
    let _ = storage.set_item(USER_KEY, user_json);
}

fn clear_persisted() {
    let storage = gloo_storage::LocalStorage::raw();
    let _ = storage.remove_item(TOKEN_KEY);
    let _ = storage.remove_item(USER_KEY);
}

/// Split a URL query string (with or without the leading '?') into decoded
/// key/value pairs. Pairs that fail to decode are dropped.
pub(crate) fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((percent_decode(key)?, percent_decode(value)?))
        })
        .collect()
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = bytes.get(i + 1..i + 3)?;
                let hi = (hex[0] as char).to_digit(16)?;
                let lo = (hex[1] as char).to_digit(16)?;
                out.push((hi * 16 + lo) as u8);
                i += 3;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

/// First value of a named query parameter.
pub(crate) fn query_param(query: &str, name: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Both parameters of a backend OAuth redirect, or `None` if either is absent.
pub(crate) fn callback_params(query: &str) -> Option<(String, String)> {
    let token = query_param(query, "token")?;
    let user = query_param(query, "user")?;
    Some((token, user))
}

pub(crate) fn decode_user(json: &str) -> Option<User> {
    serde_json::from_str(json).ok()
}

#[cfg(test)]
mod tests {
    use super::{callback_params, decode_user, parse_query, query_param};
    use portal_shared::Role;

    #[test]
    fn parse_query_decodes_percent_escapes_and_plus() {
        let pairs = parse_query("?a=1&name=dark+wall&json=%7B%22x%22%3A1%7D");
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("name".to_string(), "dark wall".to_string()),
                ("json".to_string(), r#"{"x":1}"#.to_string()),
            ]
        );
    }

    #[test]
    fn parse_query_handles_empty_and_valueless_pairs() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
        assert_eq!(
            parse_query("flag&x=2"),
            vec![
                ("flag".to_string(), String::new()),
                ("x".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn callback_params_requires_both_token_and_user() {
        assert!(callback_params("?token=abc").is_none());
        assert!(callback_params("?user=%7B%7D").is_none());
        let (token, user) = callback_params("?token=abc&user=%7B%22id%22%3A%221%22%7D").unwrap();
        assert_eq!(token, "abc");
        assert_eq!(user, r#"{"id":"1"}"#);
    }

    #[test]
    fn query_param_returns_first_match() {
        assert_eq!(query_param("?code=xyz&state=s", "code").as_deref(), Some("xyz"));
        assert_eq!(query_param("?code=xyz", "missing"), None);
    }

    #[test]
    fn decode_user_rejects_garbage() {
        assert!(decode_user("not json").is_none());
        assert!(decode_user(r#"{"id":"1"}"#).is_none());

        let user = decode_user(
            r#"{"id":"1","username":"dw","email":"","avatar":"","role":"owner",
                "joinedAt":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Owner);
    }
}
