//! Settings repository for reading stored email settings.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_SETTINGS_VALUES;
use crate::errors::ApiError;
use crate::models::{Page, Pager, SettingsValues};

/// Read access to the stored email settings of users.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Find the settings of a user, `None` if the user never saved any.
    async fn find_by_user(&self, user_id: &str) -> Result<Option<SettingsValues>, ApiError>;

    /// List the settings of all users of an account, ordered by user.
    async fn find_by_account(
        &self,
        account_id: &str,
        pager: &Pager,
    ) -> Result<Page<SettingsValues>, ApiError>;
}

/// MongoDB-backed settings repository.
pub struct MongoSettingsRepository {
    collection: Collection<SettingsValues>,
}

impl MongoSettingsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_SETTINGS_VALUES),
        }
    }

    /// Create the index used by account listings.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for settings collection...");

        let index = IndexModel::builder()
            .keys(doc! { "account_id": 1, "_id": 1 })
            .build();

        self.collection.create_index(index).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for MongoSettingsRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<SettingsValues>, ApiError> {
        debug!("Repository: Finding settings by user");
        Ok(self.collection.find_one(doc! { "_id": user_id }).await?)
    }

    async fn find_by_account(
        &self,
        account_id: &str,
        pager: &Pager,
    ) -> Result<Page<SettingsValues>, ApiError> {
        let filter = doc! { "account_id": account_id };
        let total = self.collection.count_documents(filter.clone()).await?;

        if pager.limit() == 0 {
            return Ok(Page::new(Vec::new(), total));
        }

        debug!(
            "Repository: Listing settings, skip {} limit {}",
            pager.offset(),
            pager.limit()
        );
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(pager.offset())
            .limit(pager.limit() as i64)
            .await?;

        Ok(Page::new(cursor.try_collect().await?, total))
    }
}
