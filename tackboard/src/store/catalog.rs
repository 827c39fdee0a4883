//! Top-level containers without a position of their own

use crate::error::{Result, TackboardError};
use crate::types::{Id, IdAllocator, Kind};
use serde::Serialize;
use std::collections::BTreeMap;

/// A record paired with its ID for output
#[derive(Debug, Serialize)]
pub struct Record<'a, C: Kind> {
    pub id: Id<C>,
    #[serde(flatten)]
    pub record: &'a C,
}

/// Unordered set of top-level records, iterated by ascending ID
#[derive(Debug)]
pub struct Catalog<C: Kind> {
    records: BTreeMap<Id<C>, C>,
    ids: IdAllocator<C>,
}

impl<C: Kind> Catalog<C> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            ids: IdAllocator::new(),
        }
    }

    pub fn insert(&mut self, record: C) -> Id<C> {
        let id = self.ids.allocate();
        self.records.insert(id, record);
        id
    }

    pub fn contains(&self, id: Id<C>) -> bool {
        self.records.contains_key(&id)
    }

    pub fn get(&self, id: Id<C>) -> Result<&C> {
        self.records
            .get(&id)
            .ok_or_else(|| TackboardError::not_found(C::KIND, id.get()))
    }

    pub fn get_mut(&mut self, id: Id<C>) -> Result<&mut C> {
        self.records
            .get_mut(&id)
            .ok_or_else(|| TackboardError::not_found(C::KIND, id.get()))
    }

    pub fn remove(&mut self, id: Id<C>) -> Result<C> {
        self.records
            .remove(&id)
            .ok_or_else(|| TackboardError::not_found(C::KIND, id.get()))
    }

    /// Borrowed output view of one record
    pub fn record(&self, id: Id<C>) -> Result<Record<'_, C>> {
        self.get(id).map(|record| Record { id, record })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_, C>> + '_ {
        self.records
            .iter()
            .map(|(id, record)| Record { id: *id, record })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<C: Kind> Default for Catalog<C> {
    fn default() -> Self {
        Self::new()
    }
}
