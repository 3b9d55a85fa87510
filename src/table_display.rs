use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;
use swapi_client::{Film, Person};

/// How a record renders as a table row and as a detail view.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
    fn details(&self) -> Vec<(&'static str, String)>;
}

impl Tabular for Person {
    fn headers() -> &'static [&'static str] {
        &["name", "height", "mass", "birth_year", "gender", "films"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.height.clone(),
            self.mass.clone(),
            self.birth_year.clone(),
            self.gender.clone(),
            self.films.len().to_string(),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("height", self.height.clone()),
            ("mass", self.mass.clone()),
            ("hair_color", self.hair_color.clone()),
            ("skin_color", self.skin_color.clone()),
            ("eye_color", self.eye_color.clone()),
            ("birth_year", self.birth_year.clone()),
            ("gender", self.gender.clone()),
            ("homeworld", self.homeworld.clone()),
            ("films", self.films.len().to_string()),
            ("species", self.species.len().to_string()),
            ("vehicles", self.vehicles.len().to_string()),
            ("starships", self.starships.len().to_string()),
            ("created", self.created.clone()),
            ("edited", self.edited.clone()),
            ("url", self.url.clone()),
        ]
    }
}

impl Tabular for Film {
    fn headers() -> &'static [&'static str] {
        &["episode", "title", "director", "release_date", "characters"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.episode_id.to_string(),
            self.title.clone(),
            self.director.clone(),
            self.release_date.clone(),
            self.characters.len().to_string(),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("episode_id", self.episode_id.to_string()),
            ("director", self.director.clone()),
            ("producer", self.producer.clone()),
            ("release_date", self.release_date.clone()),
            ("characters", self.characters.len().to_string()),
            ("planets", self.planets.len().to_string()),
            ("starships", self.starships.len().to_string()),
            ("vehicles", self.vehicles.len().to_string()),
            ("species", self.species.len().to_string()),
            ("created", self.created.clone()),
            ("edited", self.edited.clone()),
            ("url", self.url.clone()),
            ("opening_crawl", self.opening_crawl.replace("\r\n", "\n")),
        ]
    }
}

pub fn display_results<T: Tabular>(records: &[T], total: usize, use_color: bool) {
    if records.is_empty() {
        let message = "No results found.";
        if use_color {
            println!("{}", message.yellow());
        } else {
            println!("{message}");
        }
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        T::headers()
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for record in records {
        table.add_row(record.row());
    }

    println!("{table}");

    let summary = format!("{} of {} records shown", records.len(), total);
    if use_color {
        println!("\n{}", summary.green());
    } else {
        println!("\n{summary}");
    }
}

pub fn display_record<T: Tabular>(record: &T) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    for (field, value) in record.details() {
        table.add_row(vec![
            Cell::new(field).add_attribute(Attribute::Bold),
            Cell::new(value),
        ]);
    }

    println!("{table}");
}
