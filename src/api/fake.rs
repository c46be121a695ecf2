//! In-memory `ChannelApi` that records every call

use crate::api::{ApiResult, AppError, Channel, ChannelApi, Team};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GetChannel {
        channel_id: String,
        etag: String,
    },
    GetTeam {
        team_id: String,
        etag: String,
    },
    GetChannelByName {
        channel_name: String,
        team_id: String,
        etag: String,
    },
}

/// Lookups not stubbed explicitly answer with a 404
#[derive(Default)]
pub(crate) struct FakeClient {
    channels: HashMap<String, ApiResult<Channel>>,
    teams: HashMap<String, ApiResult<Team>>,
    channels_by_name: HashMap<(String, String), ApiResult<Channel>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel_id: &str, result: ApiResult<Channel>) -> Self {
        self.channels.insert(channel_id.to_string(), result);
        self
    }

    pub fn with_team(mut self, team_id: &str, result: ApiResult<Team>) -> Self {
        self.teams.insert(team_id.to_string(), result);
        self
    }

    pub fn with_channel_by_name(
        mut self,
        channel_name: &str,
        team_id: &str,
        result: ApiResult<Channel>,
    ) -> Self {
        self.channels_by_name
            .insert((channel_name.to_string(), team_id.to_string()), result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn unstubbed() -> AppError {
        AppError::new("fake.unstubbed", "not stubbed", "", 404)
    }
}

/// Shorthand for a server error with only a message and status
pub(crate) fn remote_error(message: &str, status_code: u16) -> AppError {
    AppError {
        message: message.to_string(),
        status_code,
        ..Default::default()
    }
}

#[async_trait]
impl ChannelApi for FakeClient {
    async fn get_channel(&self, channel_id: &str, etag: &str) -> ApiResult<Channel> {
        self.record(Call::GetChannel {
            channel_id: channel_id.to_string(),
            etag: etag.to_string(),
        });
        self.channels
            .get(channel_id)
            .cloned()
            .unwrap_or_else(|| Err(Self::unstubbed()))
    }

    async fn get_team(&self, team_id: &str, etag: &str) -> ApiResult<Team> {
        self.record(Call::GetTeam {
            team_id: team_id.to_string(),
            etag: etag.to_string(),
        });
        self.teams
            .get(team_id)
            .cloned()
            .unwrap_or_else(|| Err(Self::unstubbed()))
    }

    async fn get_channel_by_name_include_deleted(
        &self,
        channel_name: &str,
        team_id: &str,
        etag: &str,
    ) -> ApiResult<Channel> {
        self.record(Call::GetChannelByName {
            channel_name: channel_name.to_string(),
            team_id: team_id.to_string(),
            etag: etag.to_string(),
        });
        self.channels_by_name
            .get(&(channel_name.to_string(), team_id.to_string()))
            .cloned()
            .unwrap_or_else(|| Err(Self::unstubbed()))
    }
}
