//! RBAC access model.

use serde::Deserialize;

/// Access list returned by the RBAC service for one identity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RbacRaw {
    #[serde(default)]
    pub data: Vec<Access>,
}

/// A single permission of the form `application:resource:verb`.
#[derive(Debug, Clone, Deserialize)]
pub struct Access {
    pub permission: String,
}

impl RbacRaw {
    /// Check whether any permission grants `verb` on `resource` of `application`.
    ///
    /// `*` in the resource or verb position of a permission matches anything.
    pub fn can_do(&self, application: &str, resource: &str, verb: &str) -> bool {
        self.data.iter().any(|access| {
            let mut parts = access.permission.splitn(3, ':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(app), Some(res), Some(v)) => {
                    app == application
                        && (res == "*" || res == resource)
                        && (v == "*" || v == verb)
                }
                _ => false,
            }
        })
    }

    pub fn can_read(&self, application: &str, resource: &str) -> bool {
        self.can_do(application, resource, "read")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rbac(permissions: &[&str]) -> RbacRaw {
        RbacRaw {
            data: permissions
                .iter()
                .map(|p| Access {
                    permission: p.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_wildcards() {
        assert!(rbac(&["policies:*:*"]).can_read("policies", "*"));
        assert!(rbac(&["policies:*:read"]).can_read("policies", "*"));
        assert!(rbac(&["policies:policies:read"]).can_read("policies", "policies"));
    }

    #[test]
    fn test_denials() {
        assert!(!rbac(&[]).can_read("policies", "*"));
        assert!(!rbac(&["policies:*:write"]).can_read("policies", "*"));
        assert!(!rbac(&["inventory:*:*"]).can_read("policies", "*"));
        assert!(!rbac(&["policies:read"]).can_read("policies", "*"));
    }

    #[test]
    fn test_deserialize_rbac_payload() {
        let raw: RbacRaw = serde_json::from_str(
            r#"{"meta":{"count":1},"data":[{"permission":"policies:*:read","resourceDefinitions":[]}]}"#,
        )
        .unwrap();
        assert!(raw.can_read("policies", "*"));
    }
}
