//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::accounts::AccountStore;
use crate::catalog::Catalog;

/// Shared context for all routes. The catalog is immutable after
/// startup; the account store serializes its own writes.
#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<Catalog>,
    pub accounts: AccountStore,
}

impl ApiContext {
    pub fn new(catalog: Arc<Catalog>, accounts: AccountStore) -> Self {
        Self { catalog, accounts }
    }
}
