//! One-shot flash messages carried in a cookie.
//!
//! A mutating handler sets the cookie on its redirect; the next rendered
//! view reads it and clears it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const FLASH_COOKIE: &str = "flash";

pub fn success(jar: CookieJar, message: impl Into<String>) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, message.into());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Pending message, if any, and the jar with the cookie removed.
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    let Some(message) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, Some(message).filter(|m| !m.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_returns_and_clears_message() {
        let jar = success(CookieJar::new(), "Computer ACE has been created");
        let (jar, message) = take(jar);
        assert_eq!(message.as_deref(), Some("Computer ACE has been created"));
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn take_without_cookie_is_none() {
        let (_, message) = take(CookieJar::new());
        assert!(message.is_none());
    }
}
