//! Roles and the ordered rules that resolve them from group membership.

use serde::Serialize;

use super::GroupSet;

/// The caller's role, as far as schedules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "giangvien")]
    Teacher,
    #[serde(rename = "sinhvien")]
    Student,
}

impl Role {
    /// The group name (and wire label) for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "giangvien",
            Role::Student => "sinhvien",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single group -> role mapping.
#[derive(Debug, Clone)]
pub(crate) struct RoleRule {
    pub(crate) group: String,
    pub(crate) role: Role,
}

/// Ordered list of role rules. The first rule whose group the caller
/// belongs to wins.
#[derive(Debug, Clone)]
pub struct RoleRules {
    rules: Vec<RoleRule>,
}

impl RoleRules {
    pub(crate) fn new(rules: Vec<RoleRule>) -> Self {
        Self { rules }
    }

    /// Resolves a role from the caller's groups.
    ///
    /// # Returns
    /// * `Some(Role)` - The role of the first matching rule
    /// * `None` - If the caller belongs to none of the configured groups
    pub fn resolve(&self, groups: &GroupSet) -> Option<Role> {
        self.rules
            .iter()
            .find(|rule| groups.contains(&rule.group))
            .map(|rule| rule.role)
    }
}

impl Default for RoleRules {
    /// Teacher is checked before student.
    fn default() -> Self {
        Self::new(vec![
            RoleRule {
                group: Role::Teacher.as_str().to_string(),
                role: Role::Teacher,
            },
            RoleRule {
                group: Role::Student.as_str().to_string(),
                role: Role::Student,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_teacher_and_student() {
        let rules = RoleRules::default();
        assert_eq!(rules.resolve(&GroupSet::parse("giangvien")), Some(Role::Teacher));
        assert_eq!(rules.resolve(&GroupSet::parse("sinhvien")), Some(Role::Student));
    }

    #[test]
    fn test_teacher_wins_tie() {
        let rules = RoleRules::default();
        assert_eq!(
            rules.resolve(&GroupSet::parse("sinhvien,giangvien")),
            Some(Role::Teacher)
        );
        assert_eq!(
            rules.resolve(&GroupSet::parse("/giangvien, /sinhvien")),
            Some(Role::Teacher)
        );
    }

    #[test]
    fn test_unknown_groups_resolve_to_none() {
        let rules = RoleRules::default();
        assert_eq!(rules.resolve(&GroupSet::parse("admin,staff")), None);
        assert_eq!(rules.resolve(&GroupSet::parse("")), None);
    }

    #[test]
    fn test_rule_order_is_respected() {
        let rules = RoleRules::new(vec![
            RoleRule {
                group: "sinhvien".to_string(),
                role: Role::Student,
            },
            RoleRule {
                group: "giangvien".to_string(),
                role: Role::Teacher,
            },
        ]);
        assert_eq!(
            rules.resolve(&GroupSet::parse("giangvien,sinhvien")),
            Some(Role::Student)
        );
    }
}
