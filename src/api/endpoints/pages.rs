//! Static page handlers.
//!
//! Pages are embedded in the binary with `include_str!` so the
//! server runs from a single executable with no asset directory.

use axum::response::{Html, Redirect};

const LOGIN_PAGE: &str = include_str!("../../../resources/pages/login.html");
const REGISTER_PAGE: &str = include_str!("../../../resources/pages/register.html");
const EXTRA_PAGE: &str = include_str!("../../../resources/pages/extra.html");
const HOME_PAGE: &str = include_str!("../../../resources/pages/home.html");

/// `GET /` redirects to the login page.
pub async fn index() -> Redirect {
    Redirect::to("/login")
}

/// `GET /login`
pub async fn login() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// `GET /register`
pub async fn register() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

/// `GET /extra`
pub async fn extra() -> Html<&'static str> {
    Html(EXTRA_PAGE)
}

/// `GET /home`
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}
