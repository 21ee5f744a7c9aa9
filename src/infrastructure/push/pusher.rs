//! Pusher Channels HTTP API client.

use super::notifier::{PushError, PushNotifier, PushResult};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;

type HmacSha256 = Hmac<Sha256>;

/// Publishes events through the Pusher Channels HTTP API.
///
/// Requests go to `POST /apps/{app_id}/events` on the cluster endpoint and
/// are authenticated per the Pusher protocol: an MD5 digest of the body plus
/// an HMAC-SHA256 signature over the method, path and sorted query string.
pub struct PusherClient {
    http: reqwest::Client,
    app_id: String,
    key: String,
    secret: String,
    cluster: String,
    channel: String,
}

impl PusherClient {
    /// Creates a client for one application/channel pair.
    pub fn new(
        app_id: String,
        key: String,
        secret: String,
        cluster: String,
        channel: String,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            http,
            app_id,
            key,
            secret,
            cluster,
            channel,
        }
    }

    fn events_path(&self) -> String {
        format!("/apps/{}/events", self.app_id)
    }

    /// Builds the authenticated query string for a request body.
    ///
    /// Keys must stay in lexicographic order: the signature covers the query
    /// string exactly as sent.
    fn signed_query(&self, body: &str, timestamp: i64) -> PushResult<String> {
        let body_md5 = format!("{:x}", md5::compute(body.as_bytes()));

        let query = format!(
            "auth_key={}&auth_timestamp={}&auth_version=1.0&body_md5={}",
            self.key, timestamp, body_md5
        );

        let to_sign = format!("POST\n{}\n{}", self.events_path(), query);

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| PushError::RequestError(format!("invalid signing key: {e}")))?;
        mac.update(to_sign.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Ok(format!("{query}&auth_signature={signature}"))
    }
}

#[async_trait]
impl PushNotifier for PusherClient {
    async fn trigger(&self, event: &str, payload: &serde_json::Value) -> PushResult<()> {
        // Pusher expects the event data as a JSON-encoded string field
        let body = serde_json::json!({
            "name": event,
            "channels": [self.channel],
            "data": payload.to_string(),
        })
        .to_string();

        let query = self.signed_query(&body, chrono::Utc::now().timestamp())?;
        let url = format!(
            "https://api-{}.pusher.com{}?{}",
            self.cluster,
            self.events_path(),
            query
        );

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| PushError::RequestError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(event, channel = %self.channel, "push event published");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(PushError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn health_check(&self) -> bool {
        // Credentials are validated at startup; delivery failures surface
        // per-trigger rather than here.
        !self.app_id.is_empty() && !self.secret.is_empty()
    }
}
