use serde::{Deserialize, Serialize};

/// Channel record as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    /// 26-character server id
    pub id: String,

    /// Owning team; empty for direct and group messages
    pub team_id: String,

    /// URL-safe handle (e.g., "town-square")
    pub name: String,

    pub display_name: String,

    #[serde(rename = "type")]
    pub channel_type: ChannelType,

    pub header: String,
    pub purpose: String,

    /// Epoch milliseconds
    pub create_at: i64,
    pub update_at: i64,

    /// Non-zero once the channel has been archived
    pub delete_at: i64,
}

impl Channel {
    /// Record carrying only an id, handy for fakes
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn is_archived(&self) -> bool {
        self.delete_at > 0
    }
}

/// Wire codes used by the server for the channel kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelType {
    #[default]
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "P")]
    Private,
    #[serde(rename = "D")]
    Direct,
    #[serde(rename = "G")]
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub delete_at: i64,
}

impl Team {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
