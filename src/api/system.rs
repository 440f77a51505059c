use async_trait::async_trait;
use reqwest::Method;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::system::{SystemSettings, VersionInfo};

/// Instance metadata.
#[async_trait]
pub trait SystemApi {
    async fn get_system_settings(&self) -> ApiResult<SystemSettings>;

    async fn get_version(&self) -> ApiResult<VersionInfo>;
}

#[async_trait]
impl SystemApi for Client {
    async fn get_system_settings(&self) -> ApiResult<SystemSettings> {
        self.get::<(), _>("/api/system/setting", None).await
    }

    async fn get_version(&self) -> ApiResult<VersionInfo> {
        // The version endpoint only reports device counts when asked to.
        self.request::<(), _>(
            Method::GET,
            "/api/system/version",
            None,
            RequestOptions::new().with_header("version", "true"),
        )
        .await
    }
}
