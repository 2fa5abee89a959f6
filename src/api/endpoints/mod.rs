//! Endpoint handlers.
//!
//! Page handlers serve embedded HTML; `auth` handles the form posts
//! behind the login and register pages; `predict` and `health` are
//! the JSON endpoints under `/api/`.

pub mod auth;
pub mod health;
pub mod pages;
pub mod predict;
