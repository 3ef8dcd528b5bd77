use crate::domain_model::*;
use crate::domain_port::*;
use crate::logger::*;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

pub struct HttpAvatarSource {
    client: Client,
    base_url: String,
    path_prefix: String,
}

impl HttpAvatarSource {
    pub fn new(client: Client, base_url: String, path_prefix: String) -> Self {
        HttpAvatarSource {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            path_prefix,
        }
    }

    fn url(&self, user: &SelectedUser) -> String {
        format!("{}{}", self.base_url, avatar_path(&self.path_prefix, user))
    }
}

#[async_trait::async_trait]
impl AvatarSource for HttpAvatarSource {
    async fn fetch(&self, user: &SelectedUser) -> Result<AvatarSrc, AvatarSourceError> {
        let url = self.url(user);
        debug!(%url, "fetching avatar");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AvatarSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AvatarSourceError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AvatarSourceError::Transport(e.to_string()))?;
        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| AvatarSourceError::Payload(e.to_string()))?;

        Ok(AvatarSrc::from_json(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use warp::Filter;
    use warp::http::StatusCode;
    use warp::path::FullPath;

    /// Serves `body` with `status` for every GET and records the paths asked for.
    fn serve(status: StatusCode, body: &'static str) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let route = warp::get()
            .and(warp::path::full())
            .map(move |path: FullPath| {
                recorder.lock().unwrap().push(path.as_str().to_owned());
                warp::reply::with_status(body, status)
            });
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        (addr, seen)
    }

    fn source(addr: SocketAddr) -> HttpAvatarSource {
        HttpAvatarSource::new(
            Client::new(),
            format!("http://{}/", addr),
            AVATAR_PATH_PREFIX.to_string(),
        )
    }

    #[tokio::test]
    async fn fetches_string_value_from_user_path() {
        let (addr, seen) = serve(StatusCode::OK, r#""https://img.example/42.png""#);

        let src = source(addr).fetch(&SelectedUser::from("42")).await.unwrap();

        assert_eq!(src, AvatarSrc::from("https://img.example/42.png"));
        assert_eq!(*seen.lock().unwrap(), vec!["/api/v1/user_avatar/42"]);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (addr, _) = serve(StatusCode::NOT_FOUND, r#""ignored""#);

        let err = source(addr).fetch(&SelectedUser::from("9")).await.unwrap_err();

        assert!(matches!(err, AvatarSourceError::Status(404)));
    }

    #[tokio::test]
    async fn non_json_body_is_a_payload_error() {
        let (addr, _) = serve(StatusCode::OK, "<html>oops</html>");

        let err = source(addr).fetch(&SelectedUser::from("1")).await.unwrap_err();

        assert!(matches!(err, AvatarSourceError::Payload(_)));
    }

    #[tokio::test]
    async fn any_json_body_is_accepted() {
        let (addr, _) = serve(StatusCode::OK, r#"{"avatar": "x"}"#);
        let src = source(addr).fetch(&SelectedUser::from("1")).await.unwrap();
        assert_eq!(src, AvatarSrc::from("[object Object]"));

        let (addr, _) = serve(StatusCode::OK, "null");
        let src = source(addr).fetch(&SelectedUser::from("1")).await.unwrap();
        assert_eq!(src, AvatarSrc(None));

        let (addr, _) = serve(StatusCode::OK, r#"["a.png", "b.png"]"#);
        let src = source(addr).fetch(&SelectedUser::from("1")).await.unwrap();
        assert_eq!(src, AvatarSrc::from("a.png,b.png"));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let source = HttpAvatarSource::new(
            Client::new(),
            "http://127.0.0.1:1".to_string(),
            AVATAR_PATH_PREFIX.to_string(),
        );

        let err = source.fetch(&SelectedUser::from("1")).await.unwrap_err();

        assert!(matches!(err, AvatarSourceError::Transport(_)));
    }
}
