use crate::core::helpers::{
    distinct, inner_join, pick_fields, project, rename_field, value_as_string, values_as_strings,
};
use crate::core::rest::{Filter, RestApi, RowsQuery, ALBUMS, PLAYLIST_TRACK, TRACKS};
use crate::domain::model::{PlaylistEntry, Record};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Answers the catalog questions through the tabular REST API.
pub struct RestCatalog {
    api: RestApi,
}

impl RestCatalog {
    pub fn new(api: RestApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CatalogSource for RestCatalog {
    fn label(&self) -> &str {
        "RestAPI"
    }

    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<String>> {
        let artist_id = self.api.artist_id(artist).await?;
        let albums = self.api.albums_by_artist(&artist_id).await?;
        values_as_strings(&project(&albums, "Title")?, "Title")
    }

    async fn genres_by_artist(&self, artist: &str) -> Result<Vec<String>> {
        let artist_id = self.api.artist_id(artist).await?;
        let albums = self.api.albums_by_artist(&artist_id).await?;
        let album_ids = project(&albums, "AlbumId")?;

        let tracks_url = self.api.rows_url(
            &RowsQuery::new(TRACKS)
                .filter("AlbumId", Filter::In(album_ids.clone()))
                .extend("GenreId"),
        )?;
        let tracks = self
            .api
            .get_all_results(&tracks_url, "AlbumId", &album_ids)
            .await?;
        tracing::debug!("{} tracks across {} albums", tracks.len(), album_ids.len());

        let genres: Vec<Record> = project(&tracks, "GenreId_data")?
            .into_iter()
            .map(Record::from_value)
            .collect::<Result<_>>()?;
        values_as_strings(&distinct(project(&genres, "Name")?), "Name")
    }

    async fn playlist_tracks(&self, playlist: &str) -> Result<Vec<PlaylistEntry>> {
        let playlist_id = self.api.playlist_id(playlist).await?;

        let links_url = self.api.rows_url(
            &RowsQuery::new(PLAYLIST_TRACK).filter("PlaylistId", Filter::Eq(playlist_id.clone())),
        )?;
        let links = self
            .api
            .get_all_results(&links_url, "PlaylistId", std::slice::from_ref(&playlist_id))
            .await?;
        let track_ids = project(&links, "TrackId")?;

        let tracks_url = self.api.rows_url(
            &RowsQuery::new(TRACKS)
                .filter("TrackId", Filter::In(track_ids.clone()))
                .extend("AlbumId"),
        )?;
        let tracks = self
            .api
            .get_all_results(&tracks_url, "TrackId", &track_ids)
            .await?;
        let tracks = rename_field(pick_fields(&tracks, &["Name", "AlbumId"])?, "Name", "TrackName")?;

        let album_ids = distinct(project(&tracks, "AlbumId")?);
        let albums_url = self
            .api
            .rows_url(&RowsQuery::new(ALBUMS).filter("AlbumId", Filter::In(album_ids.clone())))?;
        let albums = self
            .api
            .get_all_results(&albums_url, "AlbumId", &album_ids)
            .await?;

        let artist_ids = distinct(project(&albums, "ArtistId")?);
        let artists = self.api.artist_info(&artist_ids).await?;
        let albums = pick_fields(&albums, &["Title", "AlbumId", "ArtistId"])?;

        let with_albums = inner_join(&tracks, &albums, "AlbumId")?;
        let with_artists = inner_join(&with_albums, &artists, "ArtistId")?;

        pick_fields(&with_artists, &["TrackName", "Title", "Name"])?
            .iter()
            .map(|row| -> Result<PlaylistEntry> {
                Ok(PlaylistEntry {
                    track: value_as_string(row.field("TrackName")?, "TrackName")?,
                    album: value_as_string(row.field("Title")?, "Title")?,
                    artist: value_as_string(row.field("Name")?, "Name")?,
                })
            })
            .collect()
    }
}

