use crate::config::ScenarioConfig;
use crate::core::graphql::GraphQlClient;
use crate::core::graphql_catalog::GraphQlCatalog;
use crate::core::rest::RestApi;
use crate::core::rest_catalog::RestCatalog;
use crate::domain::model::{CatalogReport, PlaylistEntry};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::fmt;

/// A question on which a source disagreed with the first source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    pub question: &'static str,
    pub source: String,
    pub reference: String,
    /// In the reference answer but not in this source's.
    pub missing: Vec<String>,
    /// In this source's answer but not in the reference.
    pub unexpected: Vec<String>,
}

pub struct ComparisonEngine {
    sources: Vec<Box<dyn CatalogSource>>,
    scenarios: ScenarioConfig,
}

impl ComparisonEngine {
    pub fn new(scenarios: ScenarioConfig) -> Self {
        Self {
            sources: Vec::new(),
            scenarios,
        }
    }

    /// REST first, then GraphQL, each only when requested.
    pub fn from_config<C: ConfigProvider>(config: &C, rest: bool, graphql: bool) -> Self {
        let mut engine = Self::new(config.scenarios().clone());
        if rest {
            engine = engine.with_source(Box::new(RestCatalog::new(RestApi::from_config(config))));
        }
        if graphql {
            engine = engine.with_source(Box::new(GraphQlCatalog::new(GraphQlClient::from_config(
                config,
            ))));
        }
        engine
    }

    pub fn with_source(mut self, source: Box<dyn CatalogSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Answers every question with every source, in order. Each section is
    /// printed as soon as its answer arrives. The first error aborts the run.
    pub async fn run(&self) -> Result<Vec<CatalogReport>> {
        let mut reports = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            println!("{}: \n", source.label());
            reports.push(self.run_source(source.as_ref()).await?);
        }
        Ok(reports)
    }

    pub async fn run_source(&self, source: &dyn CatalogSource) -> Result<CatalogReport> {
        let scenarios = &self.scenarios;

        tracing::info!("{}: albums by '{}'", source.label(), scenarios.albums_artist);
        let albums = source.albums_by_artist(&scenarios.albums_artist).await?;
        print!(
            "{}",
            Section::Albums {
                artist: &scenarios.albums_artist,
                albums: &albums,
            }
        );

        tracing::info!("{}: genres of '{}'", source.label(), scenarios.genres_artist);
        let genres = source.genres_by_artist(&scenarios.genres_artist).await?;
        print!(
            "{}",
            Section::Genres {
                artist: &scenarios.genres_artist,
                genres: &genres,
            }
        );

        tracing::info!("{}: tracks on playlist '{}'", source.label(), scenarios.playlist);
        let playlist = source.playlist_tracks(&scenarios.playlist).await?;
        print!(
            "{}",
            Section::Playlist {
                playlist: &scenarios.playlist,
                entries: &playlist,
            }
        );

        tracing::info!(
            "{}: {} albums, {} genres, {} playlist tracks",
            source.label(),
            albums.len(),
            genres.len(),
            playlist.len()
        );

        Ok(CatalogReport {
            source: source.label().to_string(),
            albums,
            genres,
            playlist,
        })
    }
}

/// One printed answer: a heading, then one line per item.
pub enum Section<'a> {
    Albums { artist: &'a str, albums: &'a [String] },
    Genres { artist: &'a str, genres: &'a [String] },
    Playlist { playlist: &'a str, entries: &'a [PlaylistEntry] },
}

impl fmt::Display for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Albums { artist, albums } => {
                writeln!(f, "Part 1: Albums by the artist \u{201c}{}.\u{201d}:", artist)?;
                for album in albums.iter() {
                    writeln!(f, "{}", album)?;
                }
            }
            Section::Genres { artist, genres } => {
                writeln!(f, "\nPart 2: Genres associated with the artist \u{201c}{}.\u{201d}:", artist)?;
                for genre in genres.iter() {
                    writeln!(f, "{}", genre)?;
                }
            }
            Section::Playlist { playlist, entries } => {
                writeln!(
                    f,
                    "\nPart 3: Names of tracks on the playlist \u{201c}{}\u{201d} and their associated artists and albums.",
                    playlist
                )?;
                for entry in entries.iter() {
                    writeln!(f, "{}", entry)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The three sections of `report`, as `run` prints them.
pub fn render_report(report: &CatalogReport, scenarios: &ScenarioConfig) -> String {
    format!(
        "{}{}{}",
        Section::Albums {
            artist: &scenarios.albums_artist,
            albums: &report.albums,
        },
        Section::Genres {
            artist: &scenarios.genres_artist,
            genres: &report.genres,
        },
        Section::Playlist {
            playlist: &scenarios.playlist,
            entries: &report.playlist,
        }
    )
}

/// Compares every report against the first, ignoring order.
pub fn compare(reports: &[CatalogReport]) -> Vec<Discrepancy> {
    let Some((reference, others)) = reports.split_first() else {
        return Vec::new();
    };

    let mut discrepancies = Vec::new();
    for other in others {
        let questions: [(&'static str, Vec<String>, Vec<String>); 3] = [
            ("albums", reference.albums.clone(), other.albums.clone()),
            ("genres", reference.genres.clone(), other.genres.clone()),
            (
                "playlist",
                reference.playlist.iter().map(|e| e.to_string()).collect(),
                other.playlist.iter().map(|e| e.to_string()).collect(),
            ),
        ];

        for (question, expected, actual) in questions {
            let (missing, unexpected) = multiset_diff(&expected, &actual);
            if missing.is_empty() && unexpected.is_empty() {
                continue;
            }
            tracing::warn!(
                "{} disagrees with {} on {}: {} missing, {} unexpected",
                other.source,
                reference.source,
                question,
                missing.len(),
                unexpected.len()
            );
            discrepancies.push(Discrepancy {
                question,
                source: other.source.clone(),
                reference: reference.source.clone(),
                missing,
                unexpected,
            });
        }
    }

    discrepancies
}

/// `(expected - actual, actual - expected)` counting duplicates.
fn multiset_diff(expected: &[String], actual: &[String]) -> (Vec<String>, Vec<String>) {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for item in expected {
        *counts.entry(item.as_str()).or_default() += 1;
    }
    for item in actual {
        *counts.entry(item.as_str()).or_default() -= 1;
    }

    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    for (item, count) in counts {
        for _ in 0..count.max(0) {
            missing.push(item.to_string());
        }
        for _ in 0..(-count).max(0) {
            unexpected.push(item.to_string());
        }
    }
    missing.sort();
    unexpected.sort();
    (missing, unexpected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CatalogError;

    fn entry(track: &str, album: &str, artist: &str) -> PlaylistEntry {
        PlaylistEntry {
            track: track.to_string(),
            album: album.to_string(),
            artist: artist.to_string(),
        }
    }

    fn report(source: &str, albums: &[&str], genres: &[&str]) -> CatalogReport {
        CatalogReport {
            source: source.to_string(),
            albums: albums.iter().map(|s| s.to_string()).collect(),
            genres: genres.iter().map(|s| s.to_string()).collect(),
            playlist: vec![entry("Man In The Box", "Facelift", "Alice In Chains")],
        }
    }

    struct FixedSource {
        label: &'static str,
        fail_playlist: bool,
    }

    #[async_trait::async_trait]
    impl CatalogSource for FixedSource {
        fn label(&self) -> &str {
            self.label
        }

        async fn albums_by_artist(&self, artist: &str) -> Result<Vec<String>> {
            Ok(vec![format!("{} Greatest Hits", artist)])
        }

        async fn genres_by_artist(&self, _artist: &str) -> Result<Vec<String>> {
            Ok(vec!["Rock".to_string()])
        }

        async fn playlist_tracks(&self, playlist: &str) -> Result<Vec<PlaylistEntry>> {
            if self.fail_playlist {
                return Err(CatalogError::NotFound {
                    resource: "playlist".to_string(),
                    term: playlist.to_string(),
                });
            }
            Ok(vec![entry("Would?", "Dirt", "Alice In Chains")])
        }
    }

    #[test]
    fn test_compare_ignores_order() {
        let rest = report("RestAPI", &["By The Way", "Californication"], &["Rock", "Pop"]);
        let graphql = report("GraphQL", &["Californication", "By The Way"], &["Pop", "Rock"]);
        assert!(compare(&[rest, graphql]).is_empty());
    }

    #[test]
    fn test_compare_reports_missing_and_unexpected() {
        let rest = report("RestAPI", &["War", "Boy"], &["Rock"]);
        let graphql = report("GraphQL", &["War", "October"], &["Rock"]);
        let discrepancies = compare(&[rest, graphql]);

        assert_eq!(discrepancies.len(), 1);
        assert_eq!(discrepancies[0].question, "albums");
        assert_eq!(discrepancies[0].source, "GraphQL");
        assert_eq!(discrepancies[0].missing, vec!["Boy".to_string()]);
        assert_eq!(discrepancies[0].unexpected, vec!["October".to_string()]);
    }

    #[test]
    fn test_compare_counts_duplicates() {
        let rest = report("RestAPI", &["Live", "Live"], &[]);
        let graphql = report("GraphQL", &["Live"], &[]);
        let discrepancies = compare(&[rest, graphql]);
        assert_eq!(discrepancies[0].missing, vec!["Live".to_string()]);
    }

    #[test]
    fn test_compare_single_report() {
        assert!(compare(&[report("RestAPI", &[], &[])]).is_empty());
        assert!(compare(&[]).is_empty());
    }

    #[test]
    fn test_render_report_sections() {
        let scenarios = ScenarioConfig::default();
        let text = render_report(&report("RestAPI", &["Californication"], &["Rock"]), &scenarios);

        assert!(text.starts_with("Part 1: Albums by the artist \u{201c}Red Hot Chili Peppers.\u{201d}:\nCalifornication\n"));
        assert!(text.contains("Part 2: Genres associated with the artist \u{201c}U2.\u{201d}:\nRock\n"));
        assert!(text.contains("playlist \u{201c}Grunge\u{201d}"));
        assert!(text.contains("Man In The Box, Alice In Chains, Facelift\n"));
    }

    #[test]
    fn test_empty_section_prints_heading_only() {
        let section = Section::Genres {
            artist: "U2",
            genres: &[],
        };
        assert_eq!(
            section.to_string(),
            "\nPart 2: Genres associated with the artist \u{201c}U2.\u{201d}:\n"
        );

        let section = Section::Playlist {
            playlist: "Grunge",
            entries: &[],
        };
        assert!(section.to_string().ends_with("albums.\n\n"));
    }

    #[tokio::test]
    async fn test_run_collects_one_report_per_source() {
        let engine = ComparisonEngine::new(ScenarioConfig::default())
            .with_source(Box::new(FixedSource {
                label: "RestAPI",
                fail_playlist: false,
            }))
            .with_source(Box::new(FixedSource {
                label: "GraphQL",
                fail_playlist: false,
            }));

        let reports = engine.run().await.unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].source, "RestAPI");
        assert_eq!(reports[1].albums, vec!["Red Hot Chili Peppers Greatest Hits".to_string()]);
        assert!(compare(&reports).is_empty());
    }

    #[tokio::test]
    async fn test_run_aborts_on_first_error() {
        let engine = ComparisonEngine::new(ScenarioConfig::default()).with_source(Box::new(FixedSource {
            label: "RestAPI",
            fail_playlist: true,
        }));

        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { ref term, .. } if term == "Grunge"));
    }
}
