use crate::domain_model::{AvatarSrc, SelectedUser};
use crate::domain_port::{AvatarSource, AvatarSourceError};
use dashmap::DashMap;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Outcome {
    Avatar(AvatarSrc),
    Status(u16),
}

#[derive(Debug, Clone)]
struct Script {
    outcome: Outcome,
    /// `None` never resolves.
    delay: Option<Duration>,
}

/// Scripted avatar endpoint. Unknown users answer 404.
#[derive(Debug, Default)]
pub struct FakeAvatarSource {
    scripts: DashMap<SelectedUser, Script>,
}

impl FakeAvatarSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, user: impl Into<SelectedUser>, src: impl Into<String>) -> Self {
        self.respond_after(user, src, Duration::ZERO)
    }

    pub fn respond_after(
        self,
        user: impl Into<SelectedUser>,
        src: impl Into<String>,
        delay: Duration,
    ) -> Self {
        self.scripts.insert(
            user.into(),
            Script {
                outcome: Outcome::Avatar(AvatarSrc(Some(src.into()))),
                delay: Some(delay),
            },
        );
        self
    }

    /// Answers with a raw JSON body, converted the way the HTTP source does.
    pub fn respond_json(self, user: impl Into<SelectedUser>, body: Value) -> Self {
        self.scripts.insert(
            user.into(),
            Script {
                outcome: Outcome::Avatar(AvatarSrc::from_json(body)),
                delay: Some(Duration::ZERO),
            },
        );
        self
    }

    pub fn never_respond(self, user: impl Into<SelectedUser>) -> Self {
        self.scripts.insert(
            user.into(),
            Script {
                outcome: Outcome::Status(504),
                delay: None,
            },
        );
        self
    }

    pub fn fail_with_status(self, user: impl Into<SelectedUser>, status: u16) -> Self {
        self.scripts.insert(
            user.into(),
            Script {
                outcome: Outcome::Status(status),
                delay: Some(Duration::ZERO),
            },
        );
        self
    }
}

#[async_trait::async_trait]
impl AvatarSource for FakeAvatarSource {
    async fn fetch(&self, user: &SelectedUser) -> Result<AvatarSrc, AvatarSourceError> {
        // Clone out so no map guard is held across the await.
        let script = self.scripts.get(user).map(|s| s.value().clone());
        let Some(script) = script else {
            return Err(AvatarSourceError::Status(404));
        };

        match script.delay {
            Some(delay) if !delay.is_zero() => tokio::time::sleep(delay).await,
            Some(_) => {}
            None => std::future::pending::<()>().await,
        }

        match script.outcome {
            Outcome::Avatar(src) => Ok(src),
            Outcome::Status(status) => Err(AvatarSourceError::Status(status)),
        }
    }
}
