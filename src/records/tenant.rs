//! Tenant scoping and soft delete.
//!
//! Every stored record belongs to exactly one tenant and is hidden, never
//! removed, when deleted. These helpers apply the same read filter the
//! backend applies before a collection ever reaches a list view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the tenant (staffing company) owning a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A record owned by a tenant and subject to soft delete.
pub trait TenantOwned {
    fn tenant_id(&self) -> &TenantId;
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

/// Keep the active records of `tenant`, preserving order.
pub fn scope_to_tenant<T: TenantOwned>(records: Vec<T>, tenant: &TenantId) -> Vec<T> {
    let before = records.len();
    let scoped: Vec<T> = records
        .into_iter()
        .filter(|r| r.is_active() && r.tenant_id() == tenant)
        .collect();
    log::debug!(
        "Scoped {} records to tenant '{}': {} remain",
        before,
        tenant,
        scoped.len()
    );
    scoped
}

/// Mark the record with `id` inactive. Returns false if no record has that id.
pub fn soft_delete<T>(records: &mut [T], id: &str) -> bool
where
    T: TenantOwned + crate::view::Listable,
{
    match records.iter_mut().find(|r| r.id() == id) {
        Some(record) => {
            record.deactivate();
            true
        }
        None => false,
    }
}
