use crate::{
    cli::types::{Conference, PlayerId, Season, TeamId},
    error::{PointsPlusError, Result},
};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Site API root for men's college basketball.
pub const SITE_BASE_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/basketball/mens-college-basketball";
pub const STANDINGS_URL: &str =
    "https://site.api.espn.com/apis/v2/sports/basketball/mens-college-basketball/standings";
pub const ATHLETES_URL: &str =
    "https://site.web.api.espn.com/apis/common/v3/sports/basketball/mens-college-basketball/athletes";

/// Retry and pacing policy for upstream requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchPolicy {
    pub attempts: u32,
    /// Pause after each successful request.
    pub delay: Duration,
    pub timeout: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(350),
            timeout: Duration::from_secs(15),
        }
    }
}

impl FetchPolicy {
    /// Backoff before retry number `attempt + 1`: `2^(attempt+1)` seconds.
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_secs(2u64.saturating_pow(attempt + 1))
    }
}

/// Thin client over the upstream endpoints.
pub struct EspnClient {
    http: Client,
    policy: FetchPolicy,
}

impl EspnClient {
    pub fn new(policy: FetchPolicy) -> Result<Self> {
        let http = Client::builder()
            .user_agent("ncaa-points-plus/0.1")
            .timeout(policy.timeout)
            .build()?;
        Ok(Self { http, policy })
    }

    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// GET `url` as JSON, retrying with exponential backoff.
    pub async fn fetch_with_retry(&self, url: &str, params: &[(&str, String)]) -> Result<Value> {
        let attempts = self.policy.attempts.max(1);
        let mut attempt = 0;
        loop {
            match self.get_json(url, params).await {
                Ok(value) => {
                    sleep(self.policy.delay).await;
                    return Ok(value);
                }
                Err(e) if attempt + 1 < attempts => {
                    warn!("Attempt {} for {} failed: {}", attempt + 1, url, e);
                    sleep(self.policy.backoff(attempt)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value> {
        debug!("GET {} {:?}", url, params);
        let v = self
            .http
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }

    pub async fn get_standings(&self, conference: Conference, season: Season) -> Result<Value> {
        let params = [
            ("group", conference.group_id().to_string()),
            ("season", season.to_string()),
        ];
        let v = self.fetch_with_retry(STANDINGS_URL, &params).await?;
        if v.pointer("/standings/entries").is_none() {
            return Err(PointsPlusError::Upstream {
                message: format!("standings for {} have no entries", conference),
            });
        }
        Ok(v)
    }

    pub async fn get_roster(&self, team_id: TeamId) -> Result<Value> {
        let url = format!("{}/teams/{}/roster", SITE_BASE_URL, team_id);
        self.fetch_with_retry(&url, &[]).await
    }

    pub async fn get_game_log(&self, player_id: PlayerId, season: Season) -> Result<Value> {
        let url = format!("{}/{}/gamelog", ATHLETES_URL, player_id);
        self.fetch_with_retry(&url, &[("season", season.to_string())])
            .await
    }

    pub async fn get_schedule(&self, team_id: TeamId, season: Season) -> Result<Value> {
        let url = format!("{}/teams/{}/schedule", SITE_BASE_URL, team_id);
        self.fetch_with_retry(&url, &[("season", season.to_string())])
            .await
    }
}
