use crate::domain_model::{AvatarSrc, SelectedUser};
use crate::domain_port::AvatarSourceError;
use std::str::FromStr;

/// How responses that arrive out of call order are treated.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum UpdateOrdering {
    /// Every successful response is applied when it arrives.
    #[default]
    LastResolved,
    /// Responses for anything but the most recent call are dropped.
    LatestRequest,
}

impl FromStr for UpdateOrdering {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last_resolved" => Ok(UpdateOrdering::LastResolved),
            "latest_request" => Ok(UpdateOrdering::LatestRequest),
            other => Err(anyhow::anyhow!("Unknown update ordering: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AvatarUpdate {
    Applied(AvatarSrc),
    Superseded,
}

#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    #[error("avatar source failed: {0}")]
    Source(#[from] AvatarSourceError),
    #[error("avatar update cancelled")]
    Cancelled,
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait AvatarService: Send + Sync {
    /// Hides the avatar container.
    fn hide_avatar(&self);

    /// Fetches the avatar for `user`, then sets the image source and shows
    /// the container. Nothing on the view changes unless the fetch succeeds.
    async fn update_avatar(&self, user: &SelectedUser) -> Result<AvatarUpdate, AvatarError>;
}
