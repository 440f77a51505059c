use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bot {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    /// Days after which the bot clears its history; 0 keeps everything.
    pub clear_day: i64,
    pub webhook_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotList {
    pub list: Vec<Bot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetBotRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateBotRequest {
    pub name: String,
    pub avatar: String,
    pub clear_day: i64,
    pub webhook_url: String,
    pub session: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditBotRequest {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub clear_day: i64,
    pub webhook_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteBotRequest {
    pub id: i64,
    pub remark: String,
}
