//! Session cookie construction.
//!
//! The session token travels in an HTTP-only cookie rather than the JSON
//! body. In production the cookie is Secure and SameSite=None so the web
//! client can call the API cross-origin; elsewhere it stays SameSite=Strict.

use actix_web::cookie::{time::Duration, Cookie, SameSite};

use mailauth_shared::config::SessionConfig;

/// Build the session cookie carrying a freshly issued token
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(config))
        .max_age(Duration::seconds(config.max_age_secs))
        .finish()
}

/// Build a removal cookie that expires the session immediately
pub fn clear_session_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.cookie_name.clone(), "")
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(config))
        .finish();
    cookie.make_removal();
    cookie
}

fn same_site(config: &SessionConfig) -> SameSite {
    if config.cross_site {
        SameSite::None
    } else {
        SameSite::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let config = SessionConfig::default();
        let cookie = session_cookie(&config, "jwt".to_string());
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "jwt");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
    }

    #[test]
    fn test_cross_site_cookie_is_secure_none() {
        let config = SessionConfig {
            secure: true,
            cross_site: true,
            ..SessionConfig::default()
        };
        let cookie = session_cookie(&config, "jwt".to_string());
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn test_clear_cookie_empties_value() {
        let config = SessionConfig::default();
        let cookie = clear_session_cookie(&config);
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "");
    }
}
