use crate::libs::config::ServerConfig;
use crate::libs::ledger::{EventKind, Ledger, LedgerEvent};
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use serde::{Deserialize, Serialize};

const STATS_URL: &str = "screen-time/stats";
const ADD_URL: &str = "screen-time/add";
const USE_URL: &str = "screen-time/use";
const RESET_URL: &str = "screen-time/reset";

/// Body for credit and debit pushes.
#[derive(Serialize)]
struct MutationRequest<'a> {
    minutes: i64,
    source: &'a str,
    timestamp: String,
}

/// Balance counters as reported by the server.
#[derive(Debug, Deserialize)]
pub struct RemoteBalance {
    pub remaining: i64,
    pub earned: i64,
    pub used: i64,
}

/// One history entry as reported by the server.
#[derive(Debug, Deserialize)]
pub struct RemoteEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub minutes: i64,
    pub source: String,
    pub timestamp: String,
}

/// Full remote state returned by the stats endpoint.
#[derive(Debug, Deserialize)]
pub struct RemoteStats {
    pub remaining: i64,
    pub earned: i64,
    pub used: i64,
    #[serde(default)]
    pub history: Vec<RemoteEvent>,
}

/// Client for the family sync server.
pub struct SyncClient {
    client: Client,
    config: ServerConfig,
}

impl SyncClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", self.config.auth_token))?);
        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Pulls the authoritative remote balance and history.
    pub async fn fetch_balance(&self) -> Result<RemoteStats> {
        let res = self.client.get(self.url(STATS_URL)).headers(self.headers()?).send().await?;
        let stats = res.error_for_status()?.json::<RemoteStats>().await?;
        Ok(stats)
    }

    /// Persists a credit remotely.
    pub async fn push_credit(&self, minutes: i64, source: &str, timestamp: String) -> Result<RemoteBalance> {
        self.push_mutation(ADD_URL, minutes, source, timestamp).await
    }

    /// Persists a debit remotely. `minutes` is the applied (clamped)
    /// amount, matching what the local ledger recorded.
    pub async fn push_debit(&self, minutes: i64, source: &str, timestamp: String) -> Result<RemoteBalance> {
        self.push_mutation(USE_URL, minutes, source, timestamp).await
    }

    /// Pushes one stored event, routed by its kind.
    pub async fn push_event(&self, event: &LedgerEvent) -> Result<RemoteBalance> {
        let timestamp = event.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string();
        match event.kind {
            EventKind::Earned => self.push_credit(event.amount, &event.source, timestamp).await,
            EventKind::Used => self.push_debit(event.amount, &event.source, timestamp).await,
        }
    }

    /// Notifies the server of a balance reset.
    pub async fn push_reset(&self) -> Result<()> {
        let res = self.client.post(self.url(RESET_URL)).headers(self.headers()?).send().await?;
        res.error_for_status()?;
        Ok(())
    }

    async fn push_mutation(&self, path: &str, minutes: i64, source: &str, timestamp: String) -> Result<RemoteBalance> {
        let body = MutationRequest { minutes, source, timestamp };
        let res = self.client.post(self.url(path)).headers(self.headers()?).json(&body).send().await?;
        let balance = res.error_for_status()?.json::<RemoteBalance>().await?;
        Ok(balance)
    }
}

/// Pushes every pending event, oldest first, marking each as synced once
/// the server accepts it. Stops at the first rejection; already-accepted
/// events stay marked, so retries never resend them.
pub async fn flush_pending(ledger: &mut Ledger, server: &ServerConfig) -> Result<usize> {
    let client = SyncClient::new(server);
    let pending = ledger.pending()?;

    let mut pushed = 0;
    for event in pending {
        if let Err(e) = client.push_event(&event).await {
            msg_warning!(Message::SyncEventFailed(event.id, e.to_string()));
            return Err(e);
        }
        ledger.mark_synced(event.id)?;
        pushed += 1;
    }

    Ok(pushed)
}
