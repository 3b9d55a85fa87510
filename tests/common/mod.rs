#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};

pub const PEOPLE_1: &str = include_str!("../fixtures/people_1.json");
pub const PEOPLE_PAGE_1: &str = include_str!("../fixtures/people_page_1.json");
pub const PEOPLE_PAGE_2: &str = include_str!("../fixtures/people_page_2.json");
pub const FILMS_1: &str = include_str!("../fixtures/films_1.json");
pub const FILMS_PAGE_1: &str = include_str!("../fixtures/films_page_1.json");
pub const NOT_FOUND: &str = r#"{"detail": "Not found"}"#;

pub fn mock_json(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

pub fn mock_page(server: &mut ServerGuard, resource: &str, page: u32, body: &str) -> Mock {
    server
        .mock("GET", format!("/api/{}/", resource).as_str())
        .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create()
}
