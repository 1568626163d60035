// UserDirectory adapters.
//
// - StaticUserDirectory: fixed id -> name map, empty by default.
// - HttpUserDirectory: reads the public profile from the user service.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::modules::events::core::ports::UserDirectory;

#[derive(Default)]
pub struct StaticUserDirectory {
    names: HashMap<String, String>,
}

impl StaticUserDirectory {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn display_name(&self, user_id: &str) -> anyhow::Result<Option<String>> {
        Ok(self.names.get(user_id).cloned())
    }
}

#[derive(Deserialize)]
struct PublicProfileName {
    name: String,
}

pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build user directory client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn display_name(&self, user_id: &str) -> anyhow::Result<Option<String>> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("user directory request to {url} failed"))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let profile: PublicProfileName = response
            .error_for_status()
            .with_context(|| format!("user directory answered an error for {url}"))?
            .json()
            .await
            .context("user directory returned an unreadable profile")?;
        Ok(Some(profile.name))
    }
}
