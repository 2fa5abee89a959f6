//! Login and registration form handlers.

use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    // Accepted from the form but not compared against anything:
    // accounts carry no credential beyond the email itself.
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    // Missing keys deserialize as blank and fall to the required-field check.
    #[serde(rename = "first-name", default)]
    pub first_name: String,
    #[serde(rename = "last-name", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// `POST /login` checks the email against registered accounts.
pub async fn login(
    State(ctx): State<ApiContext>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, ApiError> {
    match ctx.accounts.find_by_email(&form.email)? {
        Some(account) => {
            tracing::info!(account_id = %account.id, "login accepted");
            Ok(Redirect::to("/extra"))
        }
        None => Err(ApiError::UnknownAccount),
    }
}

/// `POST /register` creates an account and sends the user to login.
pub async fn register(
    State(ctx): State<ApiContext>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, ApiError> {
    let account = ctx
        .accounts
        .register(&form.first_name, &form.last_name, &form.email, &form.phone)?;

    tracing::info!(account_id = %account.id, "account registered");
    Ok(Redirect::to("/login"))
}
