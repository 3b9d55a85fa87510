use super::fields::{parse_date, parse_timestamp, string_field, u32_field, url_list};
use super::Resource;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A film from `/api/films/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub characters: Vec<String>,
    pub planets: Vec<String>,
    pub starships: Vec<String>,
    pub vehicles: Vec<String>,
    pub species: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}

impl Film {
    pub fn release_date_parsed(&self) -> Option<NaiveDate> {
        parse_date(&self.release_date)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created)
    }

    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.edited)
    }
}

impl Resource for Film {
    const RESOURCE_NAME: &'static str = "films";
    const QUERY_SET_NAME: &'static str = "FilmsQuerySet";

    fn from_json(json: &Value) -> Self {
        Self {
            title: string_field(json, "title", ""),
            episode_id: u32_field(json, "episode_id", 0),
            opening_crawl: string_field(json, "opening_crawl", ""),
            director: string_field(json, "director", ""),
            producer: string_field(json, "producer", ""),
            release_date: string_field(json, "release_date", ""),
            characters: url_list(json, "characters"),
            planets: url_list(json, "planets"),
            starships: url_list(json, "starships"),
            vehicles: url_list(json, "vehicles"),
            species: url_list(json, "species"),
            created: string_field(json, "created", ""),
            edited: string_field(json, "edited", ""),
            url: string_field(json, "url", ""),
        }
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Film: {}", self.title)
    }
}
