//! Densely ordered children grouped by container
//!
//! `OrderedStore<I>` owns every `I` record together with its container and
//! position. Each container ("scope") keeps a `Vec` of child IDs whose index
//! is the child's position, so positions are always exactly `0..n-1`.
//! Records themselves live in an unordered map; every reindex walks the
//! scope `Vec`, which preserves the relative order of untouched siblings.

use crate::error::{Result, TackboardError};
use crate::types::{Child, Id, IdAllocator, Kind};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{HashMap, HashSet};

/// A child record placed inside its container
#[derive(Debug, Clone)]
pub struct Entry<I: Child> {
    pub id: Id<I>,
    pub container: Id<I::Parent>,
    pub position: usize,
    pub record: I,
}

/// Serializes as `{"id", "<parent>_id", "position", ...record fields}`
impl<I: Child + Serialize> Serialize for Entry<I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields = match serde_json::to_value(&self.record).map_err(S::Error::custom)? {
            Value::Object(fields) => fields,
            other => {
                return Err(S::Error::custom(format!(
                    "{} record must serialize to an object, got {}",
                    I::KIND,
                    other
                )))
            }
        };

        let mut map = serializer.serialize_map(Some(fields.len() + 3))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry(I::PARENT_FIELD, &self.container)?;
        map.serialize_entry("position", &self.position)?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Children of type `I`, ordered within their `I::Parent` containers
#[derive(Debug)]
pub struct OrderedStore<I: Child> {
    entries: HashMap<Id<I>, Entry<I>>,
    scopes: HashMap<Id<I::Parent>, Vec<Id<I>>>,
    ids: IdAllocator<I>,
}

impl<I: Child> OrderedStore<I> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            scopes: HashMap::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Register an empty container. Returns false if it was already open.
    pub fn open(&mut self, container: Id<I::Parent>) -> bool {
        match self.scopes.entry(container) {
            MapEntry::Vacant(slot) => {
                slot.insert(Vec::new());
                true
            }
            MapEntry::Occupied(_) => false,
        }
    }

    pub fn has_container(&self, container: Id<I::Parent>) -> bool {
        self.scopes.contains_key(&container)
    }

    pub fn contains(&self, id: Id<I>) -> bool {
        self.entries.contains_key(&id)
    }

    /// Total number of children across all containers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of direct children of `container`
    pub fn count(&self, container: Id<I::Parent>) -> Result<usize> {
        self.scope(container).map(Vec::len)
    }

    pub fn get(&self, id: Id<I>) -> Result<&Entry<I>> {
        self.entries.get(&id).ok_or_else(|| missing_child(id))
    }

    /// Mutable access to the payload only; position and container stay put
    pub fn record_mut(&mut self, id: Id<I>) -> Result<&mut I> {
        self.entries
            .get_mut(&id)
            .map(|entry| &mut entry.record)
            .ok_or_else(|| missing_child(id))
    }

    /// Append `record` to the end of `container`
    pub fn insert(&mut self, container: Id<I::Parent>, record: I) -> Result<&Entry<I>> {
        let scope = self
            .scopes
            .get_mut(&container)
            .ok_or_else(|| missing_container::<I>(container))?;

        let id = self.ids.allocate();
        let position = scope.len();
        scope.push(id);
        self.entries.insert(
            id,
            Entry {
                id,
                container,
                position,
                record,
            },
        );

        self.verify(container)?;
        self.get(id)
    }

    /// Move a child to `position` in `target`, which may be its own container.
    ///
    /// `position` is clamped to the number of children `target` has without
    /// the moved child. Nothing changes unless both IDs resolve.
    pub fn move_to(
        &mut self,
        id: Id<I>,
        target: Id<I::Parent>,
        position: usize,
    ) -> Result<&Entry<I>> {
        let (source, from) = self.slot_of(id)?;
        if !self.scopes.contains_key(&target) {
            return Err(missing_container::<I>(target));
        }

        if let Some(scope) = self.scopes.get_mut(&source) {
            scope.remove(from);
        }
        if let Some(scope) = self.scopes.get_mut(&target) {
            let slot = position.min(scope.len());
            scope.insert(slot, id);
        }

        if source != target {
            self.reindex(source);
            self.verify(source)?;
        }
        self.reindex(target);
        self.verify(target)?;

        tracing::debug!(?id, ?source, ?target, position, "moved child");
        self.get(id)
    }

    /// Remove a child and close the gap it leaves
    pub fn remove(&mut self, id: Id<I>) -> Result<Entry<I>> {
        let (container, from) = self.slot_of(id)?;

        if let Some(scope) = self.scopes.get_mut(&container) {
            scope.remove(from);
        }
        let entry = self
            .entries
            .remove(&id)
            .ok_or_else(|| violation::<I>(container, format!("{:?} vanished mid-removal", id)))?;

        self.reindex(container);
        self.verify(container)?;
        Ok(entry)
    }

    /// Drop a container together with every child it holds, in order
    pub fn close(&mut self, container: Id<I::Parent>) -> Result<Vec<Entry<I>>> {
        let scope = self
            .scopes
            .remove(&container)
            .ok_or_else(|| missing_container::<I>(container))?;

        Ok(scope
            .into_iter()
            .filter_map(|id| self.entries.remove(&id))
            .collect())
    }

    /// Snapshot of the children of `container`, sorted by position
    pub fn children(&self, container: Id<I::Parent>) -> Result<Vec<&Entry<I>>> {
        let mut children: Vec<&Entry<I>> = self
            .scope(container)?
            .iter()
            .filter_map(|id| self.entries.get(id))
            .collect();
        children.sort_by_key(|entry| entry.position);
        Ok(children)
    }

    /// Check that `container` is ordered exactly `0..n-1`
    pub fn verify(&self, container: Id<I::Parent>) -> Result<()> {
        let scope = self.scope(container)?;
        let mut seen = HashSet::with_capacity(scope.len());

        for (slot, id) in scope.iter().enumerate() {
            if !seen.insert(*id) {
                return Err(violation::<I>(container, format!("{:?} listed twice", id)));
            }
            let entry = self
                .entries
                .get(id)
                .ok_or_else(|| violation::<I>(container, format!("{:?} has no record", id)))?;
            if entry.container != container {
                return Err(violation::<I>(
                    container,
                    format!("{:?} claims {:?}", id, entry.container),
                ));
            }
            if entry.position != slot {
                return Err(violation::<I>(
                    container,
                    format!("{:?} at slot {} has position {}", id, slot, entry.position),
                ));
            }
        }
        Ok(())
    }

    fn scope(&self, container: Id<I::Parent>) -> Result<&Vec<Id<I>>> {
        self.scopes
            .get(&container)
            .ok_or_else(|| missing_container::<I>(container))
    }

    /// Container and slot of a child, checked against its scope before any
    /// mutation relies on them
    fn slot_of(&self, id: Id<I>) -> Result<(Id<I::Parent>, usize)> {
        let entry = self.get(id)?;
        let (container, position) = (entry.container, entry.position);
        match self.scopes.get(&container) {
            Some(scope) if scope.get(position) == Some(&id) => Ok((container, position)),
            _ => Err(violation::<I>(
                container,
                format!("{:?} is not at its recorded position {}", id, position),
            )),
        }
    }

    /// Rewrite positions from scope order
    fn reindex(&mut self, container: Id<I::Parent>) {
        let Self {
            entries, scopes, ..
        } = self;
        let Some(scope) = scopes.get(&container) else {
            return;
        };
        for (position, id) in scope.iter().enumerate() {
            if let Some(entry) = entries.get_mut(id) {
                entry.container = container;
                entry.position = position;
            }
        }
    }
}

impl<I: Child> Default for OrderedStore<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Requested move position as a slot index for [`OrderedStore::move_to`].
///
/// `None` appends; negative values go to the front.
pub fn slot(requested: Option<i64>) -> usize {
    match requested {
        None => usize::MAX,
        Some(position) => usize::try_from(position.max(0)).unwrap_or(usize::MAX),
    }
}

fn missing_child<I: Child>(id: Id<I>) -> TackboardError {
    TackboardError::not_found(I::KIND, id.get())
}

fn missing_container<I: Child>(container: Id<I::Parent>) -> TackboardError {
    TackboardError::not_found(<I::Parent as Kind>::KIND, container.get())
}

fn violation<I: Child>(container: Id<I::Parent>, detail: String) -> TackboardError {
    let err = TackboardError::invariant(format!("{:?}", container), detail);
    tracing::error!(error = %err, "ordering invariant violated");
    err
}
