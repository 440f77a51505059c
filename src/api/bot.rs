use async_trait::async_trait;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::bot::{Bot, BotList, CreateBotRequest, DeleteBotRequest, EditBotRequest, GetBotRequest};

/// Bot account management.
#[async_trait]
pub trait BotApi {
    async fn get_bot_list(&self) -> ApiResult<BotList>;

    async fn get_bot(&self, params: GetBotRequest) -> ApiResult<Bot>;

    async fn create_bot(&self, params: CreateBotRequest) -> ApiResult<Bot>;

    async fn update_bot(&self, params: EditBotRequest) -> ApiResult<Bot>;

    async fn delete_bot(&self, params: DeleteBotRequest) -> ApiResult<()>;
}

#[async_trait]
impl BotApi for Client {
    async fn get_bot_list(&self) -> ApiResult<BotList> {
        self.get::<(), _>("/api/users/bot/list", None).await
    }

    async fn get_bot(&self, params: GetBotRequest) -> ApiResult<Bot> {
        self.get("/api/users/bot/info", Some(&params)).await
    }

    async fn create_bot(&self, params: CreateBotRequest) -> ApiResult<Bot> {
        self.post("/api/users/bot/edit", Some(&params)).await
    }

    async fn update_bot(&self, params: EditBotRequest) -> ApiResult<Bot> {
        self.post("/api/users/bot/edit", Some(&params)).await
    }

    async fn delete_bot(&self, params: DeleteBotRequest) -> ApiResult<()> {
        self.get_empty("/api/users/bot/delete", Some(&params)).await
    }
}
