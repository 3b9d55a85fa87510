mod common;

use common::*;
use swapi_client::{Person, Resource, SwapiClient, SwapiError};

#[test]
fn test_people_model() {
    let mut server = mockito::Server::new();
    let _m = mock_json(&mut server, "/api/people/1", 200, PEOPLE_1);
    let client = SwapiClient::new(&server.url());

    let luke = Person::get(&client, 1).unwrap();
    assert_eq!(luke.name, "Luke Skywalker");
    assert_eq!(luke.height, "172");
    assert_eq!(luke.mass, "77");
    assert_eq!(luke.hair_color, "blond");
    assert_eq!(luke.skin_color, "fair");
    assert_eq!(luke.eye_color, "blue");
    assert_eq!(luke.birth_year, "19BBY");
    assert_eq!(luke.gender, "male");
    assert_eq!(luke.homeworld, "http://swapi.co/api/planets/1/");
    assert_eq!(luke.films.len(), 5);
    assert_eq!(luke.starships.len(), 2);
    assert_eq!(luke.to_string(), "Person: Luke Skywalker");
}

#[test]
fn test_people_model_not_found() {
    let mut server = mockito::Server::new();
    let _m = mock_json(&mut server, "/api/people/100", 404, NOT_FOUND);
    let client = SwapiClient::new(&server.url());

    let err = client.people().get(100).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Request to SWAPI "/api/people/100" failed with status "404". Reason: {"detail": "Not found"}"#
    );
    match err {
        SwapiError::Request { path, status, body } => {
            assert_eq!(path, "/api/people/100");
            assert_eq!(status, 404);
            assert_eq!(body, NOT_FOUND);
        }
        other => panic!("expected request error, got {other:?}"),
    }
}

#[test]
fn test_people_qs_next() {
    let mut server = mockito::Server::new();
    let page_1 = mock_page(&mut server, "people", 1, PEOPLE_PAGE_1);
    let client = SwapiClient::new(&server.url());

    let mut qs = Person::all(&client).unwrap();
    let first = qs.next_record().unwrap().unwrap();
    assert_eq!(first.name, "Luke Skywalker");
    page_1.assert();
}

#[test]
fn test_people_qs_iterable() {
    let mut server = mockito::Server::new();
    let page_1 = mock_page(&mut server, "people", 1, PEOPLE_PAGE_1);
    let page_2 = mock_page(&mut server, "people", 2, PEOPLE_PAGE_2);
    let client = SwapiClient::new(&server.url());

    // 10 in page 1, 5 in page 2
    let people = client
        .people()
        .all()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(people.len(), 15);
    assert_eq!(people[0].name, "Luke Skywalker");
    assert_eq!(people[10].name, "Anakin Skywalker");
    assert_eq!(people[14].name, "Greedo");
    page_1.assert();
    page_2.assert();
}

#[test]
fn test_people_qs_count() {
    let mut server = mockito::Server::new();
    let _page_1 = mock_page(&mut server, "people", 1, PEOPLE_PAGE_1);
    let _page_2 = mock_page(&mut server, "people", 2, PEOPLE_PAGE_2);
    let client = SwapiClient::new(&server.url());

    let mut qs = Person::all(&client).unwrap();
    assert_eq!(qs.total_count(), 15);
    assert_eq!(qs.to_string(), "PeopleQuerySet: 15 objects");

    for _ in 0..11 {
        qs.next_record().unwrap();
    }
    assert_eq!(qs.total_count(), 15);
}

#[test]
fn test_unreachable_server_is_transport_error() {
    let client = SwapiClient::new("http://127.0.0.1:1");
    let err = Person::get(&client, 1).unwrap_err();
    assert!(matches!(err, SwapiError::Transport { ref path, .. } if path == "/api/people/1"));
}

#[test]
fn test_non_json_body_is_decode_error() {
    let mut server = mockito::Server::new();
    let _m = mock_json(&mut server, "/api/people/2", 200, "<html>teapot</html>");
    let client = SwapiClient::new(&server.url());

    let err = Person::get(&client, 2).unwrap_err();
    assert!(matches!(err, SwapiError::Decode { .. }));
}
