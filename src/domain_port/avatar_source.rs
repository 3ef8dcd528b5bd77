use crate::domain_model::{AvatarSrc, SelectedUser};

#[async_trait::async_trait]
pub trait AvatarSource: Send + Sync {
    async fn fetch(&self, user: &SelectedUser) -> Result<AvatarSrc, AvatarSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AvatarSourceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("unusable payload: {0}")]
    Payload(String),
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
