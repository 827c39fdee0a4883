//! Typed integer IDs and their allocators

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Every record type that can be referenced by ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Board,
    List,
    Card,
    TodoList,
    Todo,
    Week,
    Session,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::List => "list",
            Self::Card => "card",
            Self::TodoList => "todolist",
            Self::Todo => "todo",
            Self::Week => "week",
            Self::Session => "session",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ties a record type to its [`EntityKind`]
pub trait Kind {
    const KIND: EntityKind;
}

/// A record that lives at a position inside a parent container
pub trait Child: Kind {
    /// The container record type
    type Parent: Kind;

    /// Field name used for the parent ID when the child is serialized
    const PARENT_FIELD: &'static str;
}

/// Integer ID of a `T` record.
///
/// The type parameter keeps a card ID from being passed where a list ID is
/// expected; on the wire it is a bare integer.
pub struct Id<T> {
    raw: u64,
    marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(raw: u64) -> Self {
        Self {
            raw,
            marker: PhantomData,
        }
    }

    pub const fn get(self) -> u64 {
        self.raw
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T: Kind> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", T::KIND, self.raw)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl<T> From<u64> for Id<T> {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.raw)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IdVisitor(PhantomData))
    }
}

/// Accepts `7` as well as `"7"`
struct IdVisitor<T>(PhantomData<fn() -> T>);

impl<'de, T> Visitor<'de> for IdVisitor<T> {
    type Value = Id<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer id")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Id::new(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(Id::new)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.trim()
            .parse::<u64>()
            .map(Id::new)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Monotonic ID source for one record type. IDs start at 1 and are never
/// handed out twice.
pub struct IdAllocator<T> {
    next: u64,
    marker: PhantomData<fn() -> T>,
}

impl<T> IdAllocator<T> {
    pub fn new() -> Self {
        Self {
            next: 1,
            marker: PhantomData,
        }
    }

    /// Take the next unused ID
    pub fn allocate(&mut self) -> Id<T> {
        let id = Id::new(self.next);
        self.next += 1;
        id
    }
}

impl<T> Default for IdAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IdAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator").field("next", &self.next).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    impl Kind for Widget {
        const KIND: EntityKind = EntityKind::Card;
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = IdAllocator::<Widget>::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(ids.allocate().get(), 3);
    }

    #[test]
    fn test_id_wire_format() {
        let id: Id<Widget> = Id::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        assert_eq!(format!("{:?}", id), "card#42");

        let from_number: Id<Widget> = serde_json::from_str("42").unwrap();
        let from_string: Id<Widget> = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, id);
        assert_eq!(from_string, id);
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!(serde_json::from_str::<Id<Widget>>("-1").is_err());
        assert!(serde_json::from_str::<Id<Widget>>("\"abc\"").is_err());
        assert!(serde_json::from_str::<Id<Widget>>("true").is_err());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EntityKind::TodoList.to_string(), "todolist");
        assert_eq!(
            serde_json::to_value(EntityKind::Session).unwrap(),
            serde_json::json!("session")
        );
    }
}
