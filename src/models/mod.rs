//! Typed SWAPI records and the accessors that fetch them
//!
//! Each record type implements [`Resource`], which fixes the endpoint it
//! lives under and how a raw JSON object maps onto it. Fetching goes through
//! any [`Fetch`] implementation, normally [`crate::api_client::SwapiClient`].

mod fields;
pub mod film;
pub mod person;

pub use film::Film;
pub use person::Person;

use crate::api_client::Fetch;
use crate::error::{Result, SwapiError};
use crate::query_set::QuerySet;
use serde_json::Value;
use std::marker::PhantomData;

pub trait Resource: Sized {
    /// Path segment under `/api/`
    const RESOURCE_NAME: &'static str;

    /// Name used when displaying a query set of this resource
    const QUERY_SET_NAME: &'static str;

    /// Build a record from one raw JSON object, defaulting missing fields.
    fn from_json(json: &Value) -> Self;

    /// Human readable name of the record (name or title).
    fn label(&self) -> &str;

    /// Fetch a single record by its SWAPI id.
    fn get<F: Fetch + ?Sized>(client: &F, id: u32) -> Result<Self> {
        if id == 0 {
            return Err(SwapiError::InvalidId(id));
        }
        let json = client.fetch_single(Self::RESOURCE_NAME, id)?;
        Ok(Self::from_json(&json))
    }

    /// Lazy sequence over every record of this resource. Page 1 is fetched
    /// immediately.
    fn all<F: Fetch + ?Sized>(client: &F) -> Result<QuerySet<'_, Self, F>> {
        QuerySet::new(client)
    }
}

/// A resource kind bound to a client, e.g. `client.people()`.
pub struct ResourceAccessor<'a, R, F: ?Sized> {
    client: &'a F,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource, F: Fetch + ?Sized> ResourceAccessor<'a, R, F> {
    pub fn new(client: &'a F) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub fn get(&self, id: u32) -> Result<R> {
        R::get(self.client, id)
    }

    pub fn all(&self) -> Result<QuerySet<'a, R, F>> {
        QuerySet::new(self.client)
    }
}

impl<'a, R, F: ?Sized> Clone for ResourceAccessor<'a, R, F> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            _resource: PhantomData,
        }
    }
}

impl<'a, R, F: ?Sized> Copy for ResourceAccessor<'a, R, F> {}
