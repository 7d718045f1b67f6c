//! Identity taken from headers set by the upstream authenticating proxy.
//!
//! The service performs no verification of its own: whatever the proxy puts
//! in `x-forwarded-user` and `x-forwarded-groups` is trusted as-is.

mod error;
mod role;

pub use error::AccessError;
pub use role::{Role, RoleRules};

use axum::http::HeaderMap;
use std::collections::BTreeSet;

pub const USER_HEADER: &str = "x-forwarded-user";
pub const GROUPS_HEADER: &str = "x-forwarded-groups";

/// Placeholder identity some proxies send for unauthenticated callers.
pub const ANONYMOUS: &str = "anonymous";

/// Parsed group membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSet(BTreeSet<String>);

impl GroupSet {
    /// Parses a groups header separated by commas and/or whitespace.
    ///
    /// Each entry is lowercased, and path-style groups
    /// (e.g. `/khoa-cntt/giangvien`) are reduced to their last segment.
    pub fn parse(raw: &str) -> Self {
        let groups = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter_map(|entry| {
                let name = entry.rsplit('/').next()?;
                (!name.is_empty()).then(|| name.to_lowercase())
            })
            .collect();

        Self(groups)
    }

    pub fn contains(&self, group: &str) -> bool {
        self.0.contains(group)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Per-request caller information.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// The forwarded user, if any. Empty and anonymous values are dropped.
    pub user: Option<String>,
    /// The groups header exactly as received.
    pub raw_groups: Option<String>,
    pub groups: GroupSet,
}

impl RequestContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                // Proxies may forward raw UTF-8 (e.g. Vietnamese names).
                .map(|v| String::from_utf8_lossy(v.as_bytes()).trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let user = header(USER_HEADER).filter(|u| u != ANONYMOUS);
        let raw_groups = header(GROUPS_HEADER);
        let groups = raw_groups.as_deref().map(GroupSet::parse).unwrap_or_default();

        Self {
            user,
            raw_groups,
            groups,
        }
    }

    /// User for log lines.
    pub fn user_label(&self) -> &str {
        self.user.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Groups for log lines.
    pub fn groups_label(&self) -> &str {
        self.raw_groups.as_deref().unwrap_or("none")
    }

    /// Checks that the caller is identified and holds a recognized role.
    ///
    /// # Returns
    /// * `Ok((user, role))` - The caller's identity and resolved role
    /// * `Err(AccessError::Unauthorized)` - If there is no usable identity
    /// * `Err(AccessError::Forbidden)` - If no role rule matches
    pub fn authorize(&self, rules: &RoleRules) -> Result<(&str, Role), AccessError> {
        let user = self.user.as_deref().ok_or(AccessError::Unauthorized)?;

        match rules.resolve(&self.groups) {
            Some(role) => Ok((user, role)),
            None => Err(AccessError::Forbidden {
                user: user.to_string(),
                groups: self.raw_groups.clone().unwrap_or_default(),
            }),
        }
    }
}
