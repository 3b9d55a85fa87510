use super::fields::{parse_timestamp, string_field, url_list};
use super::Resource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A character from `/api/people/`.
///
/// Height and mass stay strings: SWAPI reports values such as `"unknown"` or
/// `"1,358"` for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}

impl Person {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created)
    }

    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.edited)
    }
}

impl Resource for Person {
    const RESOURCE_NAME: &'static str = "people";
    const QUERY_SET_NAME: &'static str = "PeopleQuerySet";

    fn from_json(json: &Value) -> Self {
        Self {
            name: string_field(json, "name", ""),
            height: string_field(json, "height", "0"),
            mass: string_field(json, "mass", "0"),
            hair_color: string_field(json, "hair_color", ""),
            skin_color: string_field(json, "skin_color", ""),
            eye_color: string_field(json, "eye_color", ""),
            birth_year: string_field(json, "birth_year", ""),
            gender: string_field(json, "gender", ""),
            homeworld: string_field(json, "homeworld", ""),
            films: url_list(json, "films"),
            species: url_list(json, "species"),
            vehicles: url_list(json, "vehicles"),
            starships: url_list(json, "starships"),
            created: string_field(json, "created", ""),
            edited: string_field(json, "edited", ""),
            url: string_field(json, "url", ""),
        }
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person: {}", self.name)
    }
}
