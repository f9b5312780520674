use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use watch_report_models::SeriesProgress;

use crate::items::{MediaItem, MediaUser};

pub const CLIENT_NAME: &str = "ArrCleaner";
pub const DEVICE_NAME: &str = "Rust";
pub const DEVICE_ID: &str = "arrcleaner-001";

pub const MOVIE_FIELDS: &str = "Path,ProviderIds,MediaSources";
pub const SERIES_FIELDS: &str = "Path,ProviderIds,UserData";
pub const DETAIL_FIELDS: &str = "Path,ProviderIds,UserData,RecursiveItemCount";

/// Jellyfin sends `null` for absent strings, maps and flags
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `ProviderIds` may be `null`, and so may any of its values
fn provider_ids<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(provider, id)| id.map(|id| (provider, id)))
        .collect())
}

/// Value of the `X-Emby-Authorization` header sent with every request
pub fn authorization_header() -> String {
    format!(
        r#"MediaBrowser Client="{}", Device="{}", DeviceId="{}", Version="{}""#,
        CLIENT_NAME,
        DEVICE_NAME,
        DEVICE_ID,
        env!("CARGO_PKG_VERSION")
    )
}

#[derive(Debug, Serialize)]
pub struct AuthenticateRequest<'a> {
    #[serde(rename = "Username")]
    pub username: &'a str,
    #[serde(rename = "Pw")]
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticateResponse {
    #[serde(rename = "AccessToken")]
    pub access_token: String,
    #[serde(rename = "User")]
    pub user: JellyfinUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JellyfinUser {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserData {
    #[serde(rename = "Played", default, deserialize_with = "null_as_default")]
    pub played: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JellyfinItem {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "ProductionYear")]
    pub production_year: Option<u32>,
    #[serde(rename = "ProviderIds", default, deserialize_with = "provider_ids")]
    pub provider_ids: HashMap<String, String>,
    #[serde(rename = "Path")]
    pub path: Option<String>,
    #[serde(rename = "UserData")]
    pub user_data: Option<UserData>,
}

#[derive(Debug, Deserialize)]
pub struct ItemsResponse {
    #[serde(rename = "Items", default, deserialize_with = "null_as_default")]
    pub items: Vec<JellyfinItem>,
}

impl From<JellyfinUser> for MediaUser {
    fn from(user: JellyfinUser) -> Self {
        MediaUser {
            id: user.id,
            name: user.name,
        }
    }
}

impl From<JellyfinItem> for MediaItem {
    fn from(item: JellyfinItem) -> Self {
        MediaItem {
            id: item.id,
            name: item.name,
            production_year: item.production_year,
            provider_ids: item.provider_ids,
            path: item.path,
            played: item.user_data.map(|data| data.played),
        }
    }
}

/// Count played episodes; an empty list yields `(0, 0)`
pub fn count_played(episodes: &[JellyfinItem]) -> SeriesProgress {
    let watched = episodes
        .iter()
        .filter(|ep| ep.user_data.as_ref().map(|d| d.played).unwrap_or(false))
        .count();
    SeriesProgress::new(watched as u32, episodes.len() as u32)
}
