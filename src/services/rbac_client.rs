//! REST client for the RBAC service.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::constants::{ERR_RBAC_UNAVAILABLE, HEADER_RH_IDENTITY};
use crate::errors::ApiError;
use crate::models::RbacRaw;

/// Permission lookup for an identity.
#[async_trait]
pub trait RbacServer: Send + Sync {
    async fn get_rbac_info(&self, rh_identity: &str) -> Result<RbacRaw, ApiError>;
}

pub struct RestRbacServer {
    client: Client,
    base_url: Url,
}

impl RestRbacServer {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InternalServerError(format!("{}: {}", base_url, e)))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn access_url(&self) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InternalServerError(ERR_RBAC_UNAVAILABLE.to_string()))?
            .pop_if_empty()
            .extend(["api", "rbac", "v1", "access", ""]);
        url.query_pairs_mut().append_pair("application", "policies");
        Ok(url)
    }
}

#[async_trait]
impl RbacServer for RestRbacServer {
    async fn get_rbac_info(&self, rh_identity: &str) -> Result<RbacRaw, ApiError> {
        let url = self.access_url()?;
        debug!("Fetching access list from {}", url);

        let response = self
            .client
            .get(url)
            .header(HEADER_RH_IDENTITY, rh_identity)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<RbacRaw>().await?)
    }
}
