use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

const FLASH_KEY: &str = "flash";

/// Kind of flash message, rendered as the alert style in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashLevel::Success => "alert-success",
            FlashLevel::Error => "alert-error",
        }
    }
}

/// One-shot message carried across a redirect.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

pub fn set_flash(session: &Session, level: FlashLevel, message: impl Into<String>) {
    let flash = Flash { level, message: message.into() };
    if let Err(e) = session.insert(FLASH_KEY, &flash) {
        log::warn!("Failed to store flash message: {e}");
    }
}

pub fn flash_success(session: &Session, message: impl Into<String>) {
    set_flash(session, FlashLevel::Success, message);
}

pub fn flash_error(session: &Session, message: impl Into<String>) {
    set_flash(session, FlashLevel::Error, message);
}

pub fn take_flash(session: &Session) -> Option<Flash> {
    let flash = session.get::<Flash>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// Session signing key from `SESSION_KEY`; a random key when unset or too short.
pub fn load_key(secret: Option<&str>) -> Key {
    match secret {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

/// Cookie-backed session store carrying flash messages and the CSRF token.
pub fn middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}
