// Response header rewriting for services behind the gateway.
//
// Responsibilities
// - Point `Set-Cookie` domains at the gateway host.
// - Re-prefix relative auth redirects and send the login success redirect to the frontend.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{LOCATION, SET_COOKIE},
};

use crate::modules::gateway::core::routes::ResponseRewrite;

pub const COOKIE_DOMAIN: &str = "localhost";
const USERS_PREFIX: &str = "/api/users";
const GATEWAY_ORIGIN: &str = "http://localhost:3000";

pub fn rewrite_location(location: &str, frontend_url: &str) -> Option<String> {
    if location.starts_with("/auth") {
        Some(format!("{USERS_PREFIX}{location}"))
    } else if location.contains("/auth/success") {
        Some(location.replacen(GATEWAY_ORIGIN, frontend_url, 1))
    } else {
        None
    }
}

/// Replaces the value of a `Domain=` attribute; cookies without one are left alone.
pub fn rewrite_cookie_domain(cookie: &str, domain: &str) -> String {
    cookie
        .split(';')
        .enumerate()
        .map(|(index, part)| {
            let trimmed = part.trim_start();
            // Index 0 is the cookie's own name=value pair.
            let is_domain = index > 0
                && trimmed
                    .split_once('=')
                    .is_some_and(|(key, _)| key.trim().eq_ignore_ascii_case("domain"));
            if is_domain {
                let indent = &part[..part.len() - trimmed.len()];
                format!("{indent}Domain={domain}")
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

pub fn rewrite_response_headers(
    headers: &mut HeaderMap,
    rewrite: ResponseRewrite,
    frontend_url: &str,
) {
    if rewrite == ResponseRewrite::None {
        return;
    }

    let cookies: Vec<HeaderValue> = headers
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| {
            // Values that are not visible ASCII pass through unchanged.
            value
                .to_str()
                .ok()
                .map(|cookie| rewrite_cookie_domain(cookie, COOKIE_DOMAIN))
                .and_then(|cookie| HeaderValue::from_str(&cookie).ok())
                .unwrap_or_else(|| value.clone())
        })
        .collect();
    if !cookies.is_empty() {
        headers.remove(SET_COOKIE);
        for cookie in cookies {
            headers.append(SET_COOKIE, cookie);
        }
    }

    let location = headers
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|location| rewrite_location(location, frontend_url))
        .and_then(|location| HeaderValue::from_str(&location).ok());
    if let Some(location) = location {
        headers.insert(LOCATION, location);
    }
}
