//! Blocking client for the Star Wars API (SWAPI).
//!
//! ```no_run
//! use swapi_client::{Person, Resource, SwapiClient};
//!
//! # fn main() -> swapi_client::Result<()> {
//! let client = SwapiClient::new("https://swapi.dev");
//! let luke = Person::get(&client, 1)?;
//! println!("{} is {} cm tall", luke.name, luke.height);
//!
//! let mut films = client.films().all()?;
//! println!("{} films", films.total_count());
//! while let Some(film) = films.next_record()? {
//!     println!("{film}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query_set;

pub use api_client::{Fetch, SwapiClient};
pub use error::{Result, SwapiError};
pub use models::{Film, Person, Resource, ResourceAccessor};
pub use query_set::{PageEnvelope, QuerySet};
