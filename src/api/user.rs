use async_trait::async_trait;

use crate::client::Client;
use crate::error::{ApiError, ApiResult};
use crate::models::user::{Department, UserBasic, UserInfo};

/// User profile and directory lookups.
#[async_trait]
pub trait UserApi {
    /// Fetch the caller's profile. Served from the cache while the entry is
    /// fresh; `no_cache` forces a refetch and replaces the cached value.
    async fn get_user_info(&self, no_cache: bool) -> ApiResult<UserInfo>;

    /// Fetch the caller's profile and require the given identity tag,
    /// failing with [`ApiError::PermissionDenied`] when absent.
    async fn check_user_identity(&self, identity: &str) -> ApiResult<UserInfo>;

    /// Departments the caller belongs to.
    async fn get_user_departments(&self) -> ApiResult<Vec<Department>>;

    /// Basic info for a set of user ids.
    async fn get_users_basic(&self, userids: &[i64]) -> ApiResult<Vec<UserBasic>>;

    /// Basic info for a single user id.
    async fn get_user_basic(&self, userid: i64) -> ApiResult<UserBasic>;
}

#[async_trait]
impl UserApi for Client {
    async fn get_user_info(&self, no_cache: bool) -> ApiResult<UserInfo> {
        if !no_cache {
            if let Some(user) = self.cached_user().await {
                return Ok(user);
            }
        }
        self.evict_user().await;

        let user: UserInfo = self.get::<(), _>("/api/users/info", None).await?;
        self.store_user(user.clone()).await;
        Ok(user)
    }

    async fn check_user_identity(&self, identity: &str) -> ApiResult<UserInfo> {
        let user = self.get_user_info(false).await?;
        if !user.identity.iter().any(|tag| tag == identity) {
            return Err(ApiError::PermissionDenied);
        }
        Ok(user)
    }

    async fn get_user_departments(&self) -> ApiResult<Vec<Department>> {
        self.get::<(), _>("/api/users/info/departments", None).await
    }

    async fn get_users_basic(&self, userids: &[i64]) -> ApiResult<Vec<UserBasic>> {
        let params = serde_json::json!({ "userid": userids });
        self.get("/api/users/basic", Some(&params)).await
    }

    async fn get_user_basic(&self, userid: i64) -> ApiResult<UserBasic> {
        let users = self.get_users_basic(&[userid]).await?;
        users.into_iter().next().ok_or(ApiError::UserNotFound)
    }
}
