use async_trait::async_trait;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::dialog::DialogOpenUser;
use crate::models::message::{
    DialogMessage, DialogMessageList, DialogMessageSearch, ForwardMessageRequest,
    GetMessageListRequest, GetMessageRequest, MarkMessageDoneRequest, SearchMessageRequest,
    SendAnonymousMessageRequest, SendBotMessageRequest, SendMessageRequest,
    SendMessageToUserRequest, SendNoticeMessageRequest, SendStreamMessageRequest,
    SendTemplateMessageRequest, TodoList, ToggleMessageTodoRequest, WithdrawMessageRequest,
};

/// Sending, reading, and managing dialog messages.
///
/// Optional enum-like fields (`text_type`, `bot_type`, `source`, todo
/// `type`) are normalized to their documented defaults immediately before
/// dispatch.
#[async_trait]
pub trait MessageApi {
    /// Send text or markdown into a dialog; empty `text_type` becomes `md`.
    async fn send_message(&self, message: SendMessageRequest) -> ApiResult<()>;

    /// Send to a user: resolves their private dialog id first, then sends
    /// into it.
    async fn send_message_to_user(&self, message: SendMessageToUserRequest) -> ApiResult<()>;

    /// Send as a bot; empty `bot_type` becomes `system-msg`.
    async fn send_bot_message(&self, message: SendBotMessageRequest) -> ApiResult<()>;

    async fn send_anonymous_message(&self, message: SendAnonymousMessageRequest) -> ApiResult<()>;

    /// Push a live-stream notification; empty `source` becomes `api`.
    async fn send_stream_message(&self, message: SendStreamMessageRequest) -> ApiResult<()>;

    /// Post a notice; empty `source` becomes `api`.
    async fn send_notice_message(&self, message: SendNoticeMessageRequest) -> ApiResult<()>;

    /// Post a templated card; empty `source` becomes `api`.
    async fn send_template_message(&self, message: SendTemplateMessageRequest) -> ApiResult<()>;

    async fn get_message_list(&self, params: GetMessageListRequest) -> ApiResult<DialogMessageList>;

    async fn search_message(&self, params: SearchMessageRequest) -> ApiResult<DialogMessageSearch>;

    async fn get_message(&self, params: GetMessageRequest) -> ApiResult<DialogMessage>;

    async fn get_message_detail(&self, params: GetMessageRequest) -> ApiResult<DialogMessage>;

    async fn withdraw_message(&self, params: WithdrawMessageRequest) -> ApiResult<()>;

    async fn forward_message(&self, params: ForwardMessageRequest) -> ApiResult<()>;

    /// Toggle a message's todo state; empty `type` becomes `all`.
    async fn toggle_message_todo(&self, params: ToggleMessageTodoRequest) -> ApiResult<()>;

    async fn get_message_todo_list(&self, params: GetMessageRequest) -> ApiResult<TodoList>;

    async fn mark_message_done(&self, params: MarkMessageDoneRequest) -> ApiResult<()>;
}

#[async_trait]
impl MessageApi for Client {
    async fn send_message(&self, mut message: SendMessageRequest) -> ApiResult<()> {
        if message.text_type.is_empty() {
            message.text_type = "md".to_string();
        }
        self.post_empty("/api/dialog/msg/sendtext", Some(&message)).await
    }

    async fn send_message_to_user(&self, message: SendMessageToUserRequest) -> ApiResult<()> {
        let params = serde_json::json!({ "userid": message.userid });
        let opened: DialogOpenUser = self.get("/api/dialog/open/user", Some(&params)).await?;

        self.send_message(SendMessageRequest {
            dialog_id: opened.dialog_user.dialog_id,
            text: message.text,
            text_type: message.text_type,
            silence: message.silence,
        })
        .await
    }

    async fn send_bot_message(&self, mut message: SendBotMessageRequest) -> ApiResult<()> {
        if message.bot_type.is_empty() {
            message.bot_type = "system-msg".to_string();
        }
        self.post_empty("/api/dialog/msg/sendbot", Some(&message)).await
    }

    async fn send_anonymous_message(&self, message: SendAnonymousMessageRequest) -> ApiResult<()> {
        self.post_empty("/api/dialog/msg/sendanon", Some(&message)).await
    }

    async fn send_stream_message(&self, mut message: SendStreamMessageRequest) -> ApiResult<()> {
        if message.source.is_empty() {
            message.source = "api".to_string();
        }
        self.post_empty("/api/dialog/msg/stream", Some(&message)).await
    }

    async fn send_notice_message(&self, mut message: SendNoticeMessageRequest) -> ApiResult<()> {
        if message.source.is_empty() {
            message.source = "api".to_string();
        }
        self.post_empty("/api/dialog/msg/sendnotice", Some(&message)).await
    }

    async fn send_template_message(&self, mut message: SendTemplateMessageRequest) -> ApiResult<()> {
        if message.source.is_empty() {
            message.source = "api".to_string();
        }
        self.post_empty("/api/dialog/msg/sendtemplate", Some(&message)).await
    }

    async fn get_message_list(&self, params: GetMessageListRequest) -> ApiResult<DialogMessageList> {
        self.get("/api/dialog/msg/list", Some(&params)).await
    }

    async fn search_message(&self, params: SearchMessageRequest) -> ApiResult<DialogMessageSearch> {
        self.get("/api/dialog/msg/search", Some(&params)).await
    }

    async fn get_message(&self, params: GetMessageRequest) -> ApiResult<DialogMessage> {
        self.get("/api/dialog/msg/one", Some(&params)).await
    }

    async fn get_message_detail(&self, params: GetMessageRequest) -> ApiResult<DialogMessage> {
        self.get("/api/dialog/msg/detail", Some(&params)).await
    }

    async fn withdraw_message(&self, params: WithdrawMessageRequest) -> ApiResult<()> {
        self.get_empty("/api/dialog/msg/withdraw", Some(&params)).await
    }

    async fn forward_message(&self, params: ForwardMessageRequest) -> ApiResult<()> {
        self.get_empty("/api/dialog/msg/forward", Some(&params)).await
    }

    async fn toggle_message_todo(&self, mut params: ToggleMessageTodoRequest) -> ApiResult<()> {
        if params.r#type.is_empty() {
            params.r#type = "all".to_string();
        }
        self.get_empty("/api/dialog/msg/todo", Some(&params)).await
    }

    async fn get_message_todo_list(&self, params: GetMessageRequest) -> ApiResult<TodoList> {
        self.get("/api/dialog/msg/todolist", Some(&params)).await
    }

    async fn mark_message_done(&self, params: MarkMessageDoneRequest) -> ApiResult<()> {
        self.get_empty("/api/dialog/msg/done", Some(&params)).await
    }
}
