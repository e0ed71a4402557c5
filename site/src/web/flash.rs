//! One-shot flash messages carried across the post-submit redirect.
//!
//! The message rides on a short-lived cookie; the support page renders it and
//! clears the cookie client-side.

use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Cookie holding the pending flash message.
pub const FLASH_COOKIE: &str = "kitchio_flash";

/// User-facing notices set by the contact form handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// Submission accepted
    Success,
    /// reCAPTCHA gate rejected the submission
    CaptchaRequired,
}

impl Flash {
    /// Alert style the page applies when rendering the notice.
    pub fn category(self) -> &'static str {
        match self {
            Flash::Success => "success",
            Flash::CaptchaRequired => "danger",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::Success => {
                "Success! A Kitchio expert will contact you within 24 business hours."
            }
            Flash::CaptchaRequired => "Please complete the reCAPTCHA verification.",
        }
    }
}

/// Attach a flash notice to the response jar.
pub fn set_flash(jar: CookieJar, flash: Flash) -> CookieJar {
    let value = format!("{}:{}", flash.category(), flash.message());
    let cookie = Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(false)
        .build();
    jar.add(cookie)
}
