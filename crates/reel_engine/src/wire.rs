//! OMDb response bodies and their conversion into core types.

use reel_core::{MovieDetail, MovieSummary, Rating};
use serde::Deserialize;

/// Literal the service uses for "no value"; never a URL.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct SearchBody {
    pub search: Vec<SummaryBody>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    pub response: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct SummaryBody {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub poster: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct RatingBody {
    pub source: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub(crate) struct DetailBody {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub poster: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub ratings: Vec<RatingBody>,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    pub box_office: String,
    pub production: String,
    pub website: String,
    pub response: String,
    pub error: Option<String>,
}

pub(crate) fn is_true(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("true")
}

/// Maps the `"N/A"` sentinel (and blanks) to `None`.
pub fn available(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == NOT_AVAILABLE {
        None
    } else {
        Some(value.to_string())
    }
}

impl From<SummaryBody> for MovieSummary {
    fn from(body: SummaryBody) -> Self {
        Self {
            poster_url: available(&body.poster),
            id: body.imdb_id,
            title: body.title,
            year: body.year,
            kind: body.kind,
        }
    }
}

impl From<DetailBody> for MovieDetail {
    fn from(body: DetailBody) -> Self {
        Self {
            poster_url: available(&body.poster),
            box_office: available(&body.box_office),
            response: is_true(&body.response),
            id: body.imdb_id,
            title: body.title,
            year: body.year,
            kind: body.kind,
            rated: body.rated,
            released: body.released,
            runtime: body.runtime,
            genre: body.genre,
            director: body.director,
            writer: body.writer,
            actors: body.actors,
            plot: body.plot,
            language: body.language,
            country: body.country,
            awards: body.awards,
            ratings: body
                .ratings
                .into_iter()
                .map(|rating| Rating {
                    source: rating.source,
                    value: rating.value,
                })
                .collect(),
            metascore: body.metascore,
            imdb_rating: body.imdb_rating,
            imdb_votes: body.imdb_votes,
            production: body.production,
            website: body.website,
        }
    }
}
