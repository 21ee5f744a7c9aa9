//! Template context shared by all push-enabled pages.

use crate::config::ChannelCredentials;

/// Push subscription parameters rendered into every page.
///
/// The values are passed through from configuration unchanged; page handlers
/// add them to their template alongside page-specific fields.
#[derive(Debug, Clone)]
pub struct PushContext {
    pub app_key: String,
    pub cluster: String,
    pub channel: String,
}

impl From<&ChannelCredentials> for PushContext {
    fn from(credentials: &ChannelCredentials) -> Self {
        Self {
            app_key: credentials.app_key.clone(),
            cluster: credentials.cluster.clone(),
            channel: credentials.channel.clone(),
        }
    }
}
