use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use swapi_client::{Fetch, Person, Resource, Result};

/// Serves `pages` pages of ten people each without touching the network.
struct InMemoryPeople {
    pages: Vec<Value>,
}

impl InMemoryPeople {
    fn new(pages: usize) -> Self {
        let count = pages * 10;
        let pages = (0..pages)
            .map(|p| {
                let results: Vec<Value> = (0..10)
                    .map(|i| create_person(p * 10 + i))
                    .collect();
                json!({"count": count, "next": if p + 1 < pages { json!("more") } else { Value::Null }, "results": results})
            })
            .collect();
        Self { pages }
    }
}

impl Fetch for InMemoryPeople {
    fn fetch_single(&self, _resource: &str, id: u32) -> Result<Value> {
        Ok(create_person(id as usize))
    }

    fn fetch_page(&self, _resource: &str, page: u32) -> Result<Value> {
        Ok(self.pages[(page - 1) as usize].clone())
    }
}

fn create_person(i: usize) -> Value {
    json!({
        "name": format!("Person {}", i),
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
        "species": [],
        "vehicles": ["https://swapi.dev/api/vehicles/14/"],
        "starships": ["https://swapi.dev/api/starships/12/"],
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": format!("https://swapi.dev/api/people/{}/", i)
    })
}

fn bench_from_json(c: &mut Criterion) {
    let json = create_person(1);
    c.bench_function("person_from_json", |b| {
        b.iter(|| Person::from_json(black_box(&json)))
    });
}

fn bench_drain_query_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain_query_set");

    for pages in [1, 10, 100] {
        let fetcher = InMemoryPeople::new(pages);
        group.bench_function(format!("{}_pages", pages), |b| {
            b.iter(|| {
                let drained = Person::all(&fetcher)
                    .unwrap()
                    .filter(|p| p.is_ok())
                    .count();
                black_box(drained)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_from_json, bench_drain_query_set);
criterion_main!(benches);
