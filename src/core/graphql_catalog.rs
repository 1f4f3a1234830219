use crate::core::graphql::{select, string_literal, GraphQlClient};
use crate::core::helpers::{
    distinct, flatten_project, project, records_from_value, value_as_string, values_as_strings,
};
use crate::domain::model::{PlaylistEntry, Record};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Answers the catalog questions through the GraphQL API.
pub struct GraphQlCatalog {
    client: GraphQlClient,
}

impl GraphQlCatalog {
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }

    /// Root object of `data`, or `NotFound` when the server resolved it to null.
    fn root<'a>(data: &'a Value, field: &str, term: &str) -> Result<&'a Value> {
        let root = select(data, &[field])?;
        if root.is_null() {
            return Err(CatalogError::NotFound {
                resource: field.to_string(),
                term: term.to_string(),
            });
        }
        Ok(root)
    }
}

pub fn albums_query(artist: &str) -> String {
    format!(
        r#"
{{
  artist(where: {{name: {}}}) {{
    albums {{
      title
    }}
  }}
}}
"#,
        string_literal(artist)
    )
}

pub fn genres_query(artist: &str) -> String {
    format!(
        r#"
{{
  artist(where: {{name: {}}}) {{
    albums {{
      tracks {{
        genre {{
          name
        }}
      }}
    }}
  }}
}}
"#,
        string_literal(artist)
    )
}

pub fn playlist_query(playlist: &str) -> String {
    format!(
        r#"
{{
  playlist(where: {{name: {}}}) {{
    tracks {{
      name
      album {{
        title
        artist {{
          name
        }}
      }}
    }}
  }}
}}
"#,
        string_literal(playlist)
    )
}

#[async_trait]
impl CatalogSource for GraphQlCatalog {
    fn label(&self) -> &str {
        "GraphQL"
    }

    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<String>> {
        let data = self.client.query(&albums_query(artist)).await?;
        let albums = records_from_value(select(Self::root(&data, "artist", artist)?, &["albums"])?.clone())?;
        values_as_strings(&project(&albums, "title")?, "title")
    }

    async fn genres_by_artist(&self, artist: &str) -> Result<Vec<String>> {
        let data = self.client.query(&genres_query(artist)).await?;
        let albums = records_from_value(select(Self::root(&data, "artist", artist)?, &["albums"])?.clone())?;

        let tracks: Vec<Vec<Record>> = project(&albums, "tracks")?
            .into_iter()
            .map(records_from_value)
            .collect::<Result<_>>()?;
        let genres: Vec<Record> = flatten_project(&tracks, "genre")?
            .into_iter()
            .map(Record::from_value)
            .collect::<Result<_>>()?;

        values_as_strings(&distinct(project(&genres, "name")?), "name")
    }

    async fn playlist_tracks(&self, playlist: &str) -> Result<Vec<PlaylistEntry>> {
        let data = self.client.query(&playlist_query(playlist)).await?;
        let tracks = select(Self::root(&data, "playlist", playlist)?, &["tracks"])?
            .as_array()
            .ok_or_else(|| CatalogError::schema("playlist.tracks is not a list"))?;

        tracks
            .iter()
            .map(|track| -> Result<PlaylistEntry> {
                Ok(PlaylistEntry {
                    track: value_as_string(select(track, &["name"])?, "name")?,
                    album: value_as_string(select(track, &["album", "title"])?, "album.title")?,
                    artist: value_as_string(
                        select(track, &["album", "artist", "name"])?,
                        "album.artist.name",
                    )?,
                })
            })
            .collect()
    }
}
