//! Identity of the caller, decoded from the `x-rh-identity` header.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::constants::ERR_INVALID_IDENTITY;
use crate::errors::ApiError;
use crate::models::RbacRaw;

#[derive(Debug, Deserialize)]
struct IdentityEnvelope {
    identity: Identity,
}

#[derive(Debug, Deserialize)]
struct Identity {
    account_number: String,
    #[serde(default)]
    user: Option<IdentityUser>,
}

#[derive(Debug, Deserialize)]
struct IdentityUser {
    username: String,
}

/// Authenticated caller of a request
#[derive(Debug, Clone)]
pub struct RhIdPrincipal {
    pub account: String,
    pub name: String,
    can_read_policies: bool,
    /// Header as received, forwarded to downstream services
    raw_identity: String,
}

impl RhIdPrincipal {
    /// Decode the base64 JSON identity header.
    ///
    /// The principal starts without any permission; see [`RhIdPrincipal::with_rbac`].
    pub fn from_identity_header(header: &str) -> Result<Self, ApiError> {
        let invalid = || ApiError::Unauthorized(ERR_INVALID_IDENTITY.to_string());

        let decoded = STANDARD.decode(header.trim()).map_err(|_| invalid())?;
        let envelope: IdentityEnvelope = serde_json::from_slice(&decoded).map_err(|_| invalid())?;
        let user = envelope.identity.user.ok_or_else(invalid)?;

        Ok(Self {
            account: envelope.identity.account_number,
            name: user.username,
            can_read_policies: false,
            raw_identity: header.to_string(),
        })
    }

    /// Apply the permissions granted by RBAC.
    pub fn with_rbac(mut self, rbac: &RbacRaw) -> Self {
        self.can_read_policies = rbac.can_read("policies", "*");
        self
    }

    pub fn can_read_policies(&self) -> bool {
        self.can_read_policies
    }

    pub fn raw_identity(&self) -> &str {
        &self.raw_identity
    }
}

#[cfg(test)]
pub(crate) fn encode_identity(account: &str, username: &str) -> String {
    let json = serde_json::json!({
        "identity": {
            "account_number": account,
            "type": "User",
            "user": { "username": username, "is_org_admin": false }
        }
    });
    STANDARD.encode(json.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Access;

    #[test]
    fn test_decode_identity_header() {
        let header = encode_identity("000001", "jdoe");
        let principal = RhIdPrincipal::from_identity_header(&header).unwrap();

        assert_eq!(principal.account, "000001");
        assert_eq!(principal.name, "jdoe");
        assert_eq!(principal.raw_identity(), header);
        assert!(!principal.can_read_policies());
    }

    #[test]
    fn test_rbac_grants_read() {
        let rbac = RbacRaw {
            data: vec![Access {
                permission: "policies:*:read".to_string(),
            }],
        };
        let principal = RhIdPrincipal::from_identity_header(&encode_identity("1", "jdoe"))
            .unwrap()
            .with_rbac(&rbac);
        assert!(principal.can_read_policies());
    }

    #[test]
    fn test_reject_garbage() {
        assert!(RhIdPrincipal::from_identity_header("not base64!").is_err());
        assert!(RhIdPrincipal::from_identity_header(&STANDARD.encode("{}")).is_err());
    }

    #[test]
    fn test_reject_identity_without_user() {
        let header = STANDARD.encode(r#"{"identity":{"account_number":"1","type":"System"}}"#);
        let err = RhIdPrincipal::from_identity_header(&header).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
