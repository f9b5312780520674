use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use tracing::{debug, info, Level};
use watch_report_models::SeriesProgress;

use crate::error::SourceError;
use crate::http::{send_json, trim_base_url, HttpSettings};
use crate::items::{MediaItem, MediaUser};
use crate::jellyfin::api::{
    authorization_header, count_played, AuthenticateRequest, AuthenticateResponse, ItemsResponse,
    JellyfinItem, JellyfinUser, DETAIL_FIELDS, MOVIE_FIELDS, SERIES_FIELDS,
};
use crate::traits::MediaServer;

const SERVICE: &str = "Jellyfin";

struct Session {
    access_token: String,
    user_id: String,
}

pub struct JellyfinClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
    session: Option<Session>,
}

impl JellyfinClient {
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
        settings: HttpSettings,
    ) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            HeaderName::from_static("x-emby-authorization"),
            HeaderValue::from_str(&authorization_header()).map_err(|e| SourceError::Config {
                service: SERVICE,
                message: e.to_string(),
            })?,
        );

        Ok(Self {
            client: settings.build_client(SERVICE, headers)?,
            base_url: trim_base_url(base_url),
            username: username.into(),
            password: password.into(),
            session: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Id of the account that logged in, once authenticated
    pub fn authenticated_user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, SourceError> {
        let session = self
            .session
            .as_ref()
            .ok_or(SourceError::NotAuthenticated(SERVICE))?;
        Ok(self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("X-Emby-Token", &session.access_token))
    }

    async fn user_items(
        &self,
        user_id: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<MediaItem>, SourceError> {
        let path = format!("/Users/{}/Items", urlencoding::encode(user_id));
        let response: ItemsResponse = send_json(SERVICE, self.get(&path)?.query(query)).await?;
        Ok(response.items.into_iter().map(MediaItem::from).collect())
    }

    /// Single item lookup scoped to a user, including its recursive episode count
    pub async fn series_details(
        &self,
        series_id: &str,
        user_id: &str,
    ) -> Result<MediaItem, SourceError> {
        let path = format!(
            "/Users/{}/Items/{}",
            urlencoding::encode(user_id),
            urlencoding::encode(series_id)
        );
        let item: JellyfinItem =
            send_json(SERVICE, self.get(&path)?.query(&[("Fields", DETAIL_FIELDS)])).await?;
        Ok(item.into())
    }
}

#[async_trait]
impl MediaServer for JellyfinClient {
    fn server_name(&self) -> &str {
        SERVICE
    }

    async fn authenticate(&mut self) -> Result<(), SourceError> {
        info!(user = %self.username, "Authenticating with Jellyfin");

        let request = self
            .client
            .post(format!("{}/Users/AuthenticateByName", self.base_url))
            .json(&AuthenticateRequest {
                username: &self.username,
                password: &self.password,
            });
        let response: AuthenticateResponse = send_json(SERVICE, request).await?;

        if response.access_token.trim().is_empty() {
            return Err(SourceError::Decode {
                service: SERVICE,
                message: "empty AccessToken in authentication response".to_string(),
            });
        }

        self.session = Some(Session {
            access_token: response.access_token,
            user_id: response.user.id,
        });
        info!("Successfully authenticated with Jellyfin");
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    async fn list_users(&self) -> Result<Vec<MediaUser>, SourceError> {
        debug!("Fetching all Jellyfin users");
        let users: Vec<JellyfinUser> = send_json(SERVICE, self.get("/Users")?).await?;
        info!(count = users.len(), "Found Jellyfin users");
        Ok(users.into_iter().map(MediaUser::from).collect())
    }

    async fn list_watched_movies(&self, user_id: &str) -> Result<Vec<MediaItem>, SourceError> {
        debug!(user_id, "Fetching watched movies");
        let movies = self
            .user_items(
                user_id,
                &[
                    ("IncludeItemTypes", "Movie"),
                    ("Recursive", "true"),
                    ("IsPlayed", "true"),
                    ("Fields", MOVIE_FIELDS),
                ],
            )
            .await?;
        debug!(user_id, count = movies.len(), "Found watched movies");
        Ok(movies)
    }

    async fn list_all_series(&self, user_id: &str) -> Result<Vec<MediaItem>, SourceError> {
        debug!(user_id, "Fetching series");
        let series = self
            .user_items(
                user_id,
                &[
                    ("IncludeItemTypes", "Series"),
                    ("Recursive", "true"),
                    ("Fields", SERIES_FIELDS),
                ],
            )
            .await?;
        debug!(user_id, count = series.len(), "Found series");
        Ok(series)
    }

    async fn series_progress(
        &self,
        series_id: &str,
        user_id: &str,
    ) -> Result<SeriesProgress, SourceError> {
        let path = format!("/Shows/{}/Episodes", urlencoding::encode(series_id));
        let request = self
            .get(&path)?
            .query(&[("UserId", user_id), ("Fields", "UserData")]);
        let response: ItemsResponse = send_json(SERVICE, request).await?;

        // Extra lookup only when debug output is on; the result is (0, 0) either way
        if response.items.is_empty() && tracing::enabled!(Level::DEBUG) {
            match self.series_details(series_id, user_id).await {
                Ok(series) => debug!(
                    series_id,
                    title = series.title(),
                    year = ?series.production_year,
                    "Series has no episodes"
                ),
                Err(e) => debug!(series_id, error = %e, "Series has no episodes"),
            }
        }
        Ok(count_played(&response.items))
    }
}
