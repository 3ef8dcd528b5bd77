use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use crate::logger::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct RealAvatarService {
    source: Arc<dyn AvatarSource>,
    view: Arc<dyn AvatarView>,
    elements: AvatarElements,
    ordering: UpdateOrdering,
    generation: AtomicU64,
    // Held across the staleness check and the view writes.
    apply_lock: Mutex<()>,
}

impl RealAvatarService {
    pub fn new(
        source: Arc<dyn AvatarSource>,
        view: Arc<dyn AvatarView>,
        elements: AvatarElements,
        ordering: UpdateOrdering,
    ) -> Self {
        Self {
            source,
            view,
            elements,
            ordering,
            generation: AtomicU64::new(0),
            apply_lock: Mutex::new(()),
        }
    }

    /// Starts an update in the background and returns at once.
    ///
    /// Failures are logged and otherwise dropped.
    pub fn spawn_update(self: &Arc<Self>, user: SelectedUser) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            match service.update_avatar(&user).await {
                Ok(AvatarUpdate::Applied(src)) => trace!(%user, %src, "avatar applied"),
                Ok(AvatarUpdate::Superseded) => trace!(%user, "avatar superseded"),
                Err(e) => debug!(%user, error = %e, "avatar update failed"),
            }
        })
    }

    /// Like `update_avatar`, but gives up without touching the view once
    /// `cancel` fires.
    pub async fn update_avatar_or_cancel(
        &self,
        user: &SelectedUser,
        cancel: &CancellationToken,
    ) -> Result<AvatarUpdate, AvatarError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AvatarError::Cancelled),
            result = self.update_avatar(user) => result,
        }
    }

    /// Writes `src` and shows the container, unless a newer call has been
    /// issued under `LatestRequest`. Returns whether the view was touched.
    fn apply_if_current(&self, issued: u64, src: &AvatarSrc) -> bool {
        let _guard = self.apply_lock.lock().unwrap_or_else(|e| e.into_inner());

        if self.ordering == UpdateOrdering::LatestRequest
            && self.generation.load(Ordering::SeqCst) != issued
        {
            return false;
        }

        match src.as_str() {
            Some(value) => self.view.set_attribute(&self.elements.image, "src", value),
            None => self.view.remove_attribute(&self.elements.image, "src"),
        }
        self.view.show(&self.elements.container);
        true
    }
}

#[async_trait::async_trait]
impl AvatarService for RealAvatarService {
    fn hide_avatar(&self) {
        self.view.hide(&self.elements.container);
    }

    async fn update_avatar(&self, user: &SelectedUser) -> Result<AvatarUpdate, AvatarError> {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let src = self.source.fetch(user).await?;

        if !self.apply_if_current(issued, &src) {
            return Ok(AvatarUpdate::Superseded);
        }
        Ok(AvatarUpdate::Applied(src))
    }
}
