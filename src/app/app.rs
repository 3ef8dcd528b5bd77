use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use crate::infra_http::*;
use crate::infra_memory::*;
use crate::logger::*;
use crate::settings::Settings;
use std::sync::Arc;
use std::time::Duration;

pub struct App {
    pub avatar_service: Arc<RealAvatarService>,
    pub view: Arc<MemoryAvatarView>,
    pub elements: AvatarElements,
}

impl App {
    pub fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let source: Arc<dyn AvatarSource> = match settings.source.backend.as_str() {
            "fake" => {
                let delay = Duration::from_millis(settings.source.fake.delay_ms);
                let fake = settings
                    .source
                    .fake
                    .avatars
                    .iter()
                    .fold(FakeAvatarSource::new(), |fake, (user, src)| {
                        fake.respond_after(user.as_str(), src.as_str(), delay)
                    });
                Arc::new(fake)
            }
            "http" => Arc::new(HttpAvatarSource::new(
                reqwest::Client::builder().build()?,
                settings.source.base_url.clone(),
                settings.source.path_prefix.clone(),
            )),
            other => return Err(anyhow::anyhow!("Unknown source backend: {}", other)),
        };

        let elements = AvatarElements {
            container: ElementId(settings.view.container.clone()),
            image: ElementId(settings.view.image.clone()),
        };
        let initial = if settings.view.initially_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        let view = Arc::new(MemoryAvatarView::with_avatar(&elements, initial));

        let ordering: UpdateOrdering = settings.update.ordering.parse()?;
        debug!(backend = %settings.source.backend, ?ordering, "avatar app assembled");

        let avatar_service = Arc::new(RealAvatarService::new(
            source,
            view.clone(),
            elements.clone(),
            ordering,
        ));

        Ok(Self {
            avatar_service,
            view,
            elements,
        })
    }

    pub fn container_visibility(&self) -> Option<Visibility> {
        self.view.visibility(&self.elements.container)
    }

    pub fn image_src(&self) -> Option<String> {
        self.view.attribute(&self.elements.image, "src")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::parse_settings;

    #[tokio::test(start_paused = true)]
    async fn fake_backend_serves_configured_avatars() {
        let settings = parse_settings(Some("settings/dev.toml")).unwrap();
        let app = App::try_new(&settings).unwrap();
        assert_eq!(app.container_visibility(), Some(Visibility::Hidden));

        let update = app
            .avatar_service
            .update_avatar(&"141".into())
            .await
            .unwrap();

        assert_eq!(
            update,
            AvatarUpdate::Applied(AvatarSrc::from(
                "https://intranet.stxnext.pl/api/images/users/141"
            ))
        );
        assert_eq!(app.container_visibility(), Some(Visibility::Visible));
        assert_eq!(
            app.image_src().as_deref(),
            Some("https://intranet.stxnext.pl/api/images/users/141")
        );
    }

    #[tokio::test]
    async fn unknown_backend_is_rejected() {
        let mut settings = parse_settings(Some("settings/dev.toml")).unwrap();
        settings.source.backend = "carrier-pigeon".to_string();
        assert!(App::try_new(&settings).is_err());
    }

    #[tokio::test]
    async fn unknown_ordering_is_rejected() {
        let mut settings = parse_settings(Some("settings/dev.toml")).unwrap();
        settings.update.ordering = "random".to_string();
        assert!(App::try_new(&settings).is_err());
    }
}
