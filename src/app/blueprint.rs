//! API blueprint domain types: data models, HTTP endpoints, and the stores
//! that hold them.
//!
//! A blueprint is the user's declarative description of the backend they want
//! generated: a set of [`Model`]s (named field lists) and a set of
//! [`Endpoint`]s (HTTP route descriptors). Both live in an ordered
//! [`RecordStore`] for the lifetime of the session; nothing here touches disk.
//!
//! Record identifiers come from a single monotonic [`IdAllocator`] so that
//! rapid successive saves can never collide.

use serde::{Deserialize, Serialize};

/// Primitive type of a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Number,
    Boolean,
}

impl FieldType {
    /// All variants, in the order they appear in selection UIs.
    pub const ALL: [FieldType; 3] = [FieldType::String, FieldType::Number, FieldType::Boolean];

    /// Lower-case name as it appears in generated prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single named, typed field within a [`Model`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, unique within its model
    pub name: String,

    /// Primitive field type
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// A user-defined record schema: a name plus an ordered list of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Store-unique identifier, assigned by [`IdAllocator`] at save time
    pub id: u64,

    /// Model name (non-empty after trimming)
    pub name: String,

    /// Ordered field list; names unique within the model, at least one entry
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(id: u64, name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id,
            name: name.into(),
            fields,
        }
    }
}

/// HTTP method of an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// All variants, in the order they appear in selection UIs.
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    /// Upper-case name as it appears in routes and generated prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-defined HTTP route descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Store-unique identifier, assigned by [`IdAllocator`] at save time
    pub id: u64,

    /// Route path, e.g. `/users` (non-empty after trimming)
    pub path: String,

    /// HTTP method
    pub method: HttpMethod,

    /// What the route does, in the user's words (non-empty after trimming)
    pub description: String,
}

impl Endpoint {
    pub fn new(
        id: u64,
        path: impl Into<String>,
        method: HttpMethod,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            path: path.into(),
            method,
            description: description.into(),
        }
    }
}

/// Anything held by a [`RecordStore`] exposes its identifier through this
/// trait so the store can match records for replace/remove.
pub trait Keyed {
    fn id(&self) -> u64;
}

impl Keyed for Model {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Keyed for Endpoint {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Ordered, memory-resident collection of blueprint records.
///
/// The store preserves append order. `replace` and `remove` match on id and
/// are silent no-ops when no record matches; an unknown id is a soft edge
/// case here, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStore<T: Keyed> {
    records: Vec<T>,
}

impl<T: Keyed> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record to the end of the collection.
    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    /// Substitutes the record whose id matches, keeping its position.
    /// Leaves the store unchanged if no record has that id.
    pub fn replace(&mut self, id: u64, record: T) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id() == id) {
            *existing = record;
        }
    }

    /// Removes the record with that id; leaves the store unchanged if absent.
    pub fn remove(&mut self, id: u64) {
        self.records.retain(|r| r.id() != id);
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Monotonic identifier source shared by all record kinds.
///
/// Wall-clock ids can collide when two saves land in the same clock tick;
/// a plain counter cannot. Starts at 1 so 0 can serve as a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next unused id. Never returns the same value twice.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
