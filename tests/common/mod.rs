#![allow(dead_code)]

use catalog_compare::core::graphql_catalog::{albums_query, genres_query, playlist_query};
use httpmock::prelude::*;
use serde_json::json;

pub const REST_PREFIX: &str = "/api";

pub fn expected_albums() -> Vec<String> {
    vec![
        "By The Way".to_string(),
        "Californication".to_string(),
    ]
}

pub fn expected_genres() -> Vec<String> {
    vec!["Rock".to_string(), "Pop".to_string()]
}

/// `(track, album, artist)` rows of the Grunge playlist.
pub fn expected_playlist() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Man In The Box", "Facelift", "Alice In Chains"),
        ("Smells Like Teen Spirit", "Nevermind", "Nirvana"),
        ("Lithium", "Nevermind", "Nirvana"),
    ]
}

fn rows_path(resource: &str) -> String {
    format!("{}/tables/{}/rows", REST_PREFIX, resource)
}

/// Mounts the REST tables behind the three questions under [`REST_PREFIX`].
pub async fn mount_rest_catalog(server: &MockServer) {
    // question 1
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("artists"))
                .query_param("_search", "Red Hot Chili Peppers");
            then.status(200).json_body(json!({
                "data": [{"ArtistId": 127, "Name": "Red Hot Chili Peppers"}],
                "next": null
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("albums"))
                .query_param("_filters", "artistid:127");
            then.status(200).json_body(json!({
                "data": [
                    {"AlbumId": 232, "Title": "By The Way", "ArtistId": 127},
                    {"AlbumId": 233, "Title": "Californication", "ArtistId": 127}
                ],
                "next": null
            }));
        })
        .await;

    // question 2
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("artists"))
                .query_param("_search", "U2");
            then.status(200).json_body(json!({
                "data": [{"ArtistId": 150, "Name": "U2"}],
                "next": null
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("albums"))
                .query_param("_filters", "artistid:150");
            then.status(200).json_body(json!({
                "data": [
                    {"AlbumId": 20, "Title": "Achtung Baby", "ArtistId": 150},
                    {"AlbumId": 21, "Title": "Pop", "ArtistId": 150}
                ],
                "next": null
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("tracks"))
                .query_param("_filters", "AlbumId:[20, 21]")
                .query_param("_extend", "GenreId");
            then.status(200).json_body(json!({
                "data": [
                    {"TrackId": 200, "AlbumId": 20, "GenreId": 1, "GenreId_data": {"GenreId": 1, "Name": "Rock"}},
                    {"TrackId": 201, "AlbumId": 21, "GenreId": 9, "GenreId_data": {"GenreId": 9, "Name": "Pop"}},
                    {"TrackId": 999, "AlbumId": 77, "GenreId": 2, "GenreId_data": {"GenreId": 2, "Name": "Jazz"}}
                ],
                "next": "/tables/tracks/rows/genres-page-2"
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("{}/tables/tracks/rows/genres-page-2", REST_PREFIX));
            then.status(200).json_body(json!({
                "data": [
                    {"TrackId": 202, "AlbumId": 21, "GenreId": 1, "GenreId_data": {"GenreId": 1, "Name": "Rock"}}
                ],
                "next": null
            }));
        })
        .await;

    // question 3
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("playlists"))
                .query_param("_search", "Grunge");
            then.status(200).json_body(json!({
                "data": [{"PlaylistId": 16, "Name": "Grunge"}],
                "next": null
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("playlist_track"))
                .query_param("_filters", "PlaylistId:16");
            then.status(200).json_body(json!({
                "data": [
                    {"PlaylistId": 16, "TrackId": 52},
                    {"PlaylistId": 16, "TrackId": 2003}
                ],
                "next": "/tables/playlist_track/rows/grunge-page-2"
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("{}/tables/playlist_track/rows/grunge-page-2", REST_PREFIX));
            then.status(200).json_body(json!({
                "data": [
                    {"PlaylistId": 16, "TrackId": 2004},
                    {"PlaylistId": 17, "TrackId": 3000}
                ],
                "next": null
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("tracks"))
                .query_param("_filters", "TrackId:[52, 2003, 2004]")
                .query_param("_extend", "AlbumId");
            then.status(200).json_body(json!({
                "data": [
                    {"TrackId": 52, "Name": "Man In The Box", "AlbumId": 5, "Milliseconds": 286641,
                     "AlbumId_data": {"AlbumId": 5, "Title": "Facelift", "ArtistId": 7}},
                    {"TrackId": 2003, "Name": "Smells Like Teen Spirit", "AlbumId": 164, "Milliseconds": 301296,
                     "AlbumId_data": {"AlbumId": 164, "Title": "Nevermind", "ArtistId": 110}},
                    {"TrackId": 2004, "Name": "Lithium", "AlbumId": 164, "Milliseconds": 256835,
                     "AlbumId_data": {"AlbumId": 164, "Title": "Nevermind", "ArtistId": 110}}
                ],
                "next": null
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("albums"))
                .query_param("_filters", "AlbumId:[5, 164]");
            then.status(200).json_body(json!({
                "data": [
                    {"AlbumId": 5, "Title": "Facelift", "ArtistId": 7},
                    {"AlbumId": 164, "Title": "Nevermind", "ArtistId": 110}
                ],
                "next": null
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(rows_path("artists"))
                .query_param("_filters", "artistid:[7, 110]");
            then.status(200).json_body(json!({
                "data": [
                    {"ArtistId": 7, "Name": "Alice In Chains"},
                    {"ArtistId": 110, "Name": "Nirvana"}
                ],
                "next": null
            }));
        })
        .await;
}

/// Mounts GraphQL answers consistent with [`mount_rest_catalog`] at `/graphql`.
pub async fn mount_graphql_catalog(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .json_body(json!({ "query": albums_query("Red Hot Chili Peppers") }));
            then.status(200).json_body(json!({
                "data": {"artist": {"albums": [
                    {"title": "Californication"},
                    {"title": "By The Way"}
                ]}}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .json_body(json!({ "query": genres_query("U2") }));
            then.status(200).json_body(json!({
                "data": {"artist": {"albums": [
                    {"tracks": [{"genre": {"name": "Rock"}}]},
                    {"tracks": [{"genre": {"name": "Pop"}}, {"genre": {"name": "Rock"}}]}
                ]}}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/graphql")
                .json_body(json!({ "query": playlist_query("Grunge") }));
            then.status(200).json_body(json!({
                "data": {"playlist": {"tracks": [
                    {"name": "Lithium", "album": {"title": "Nevermind", "artist": {"name": "Nirvana"}}},
                    {"name": "Man In The Box", "album": {"title": "Facelift", "artist": {"name": "Alice In Chains"}}},
                    {"name": "Smells Like Teen Spirit", "album": {"title": "Nevermind", "artist": {"name": "Nirvana"}}}
                ]}}
            }));
        })
        .await;
}
