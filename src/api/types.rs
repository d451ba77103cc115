//! Records exchanged with the catalog backend.
//!
//! The backend owns the shape of these records. They are kept as the JSON
//! that arrived and are never validated; accessors pick out the fields the
//! front end reads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

/// Identifier of a movie.
///
/// The backend uses integer keys but the front end passes ids around as
/// strings, so both JSON numbers and strings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(id) => MovieId::from(id),
            Raw::Text(id) => MovieId(id),
        })
    }
}

/// A movie as listed by `GET /api/movie`.
///
/// Held as the raw JSON the backend sent. The accessors read the usual
/// fields and return `None` when a field is missing or has another type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Movie(Value);

impl Movie {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self(json!({ "id": id, "title": title.into() }))
    }

    pub fn id(&self) -> Option<MovieId> {
        key_field(&self.0, "id").map(MovieId)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn poster(&self) -> Option<&str> {
        self.0.get("poster").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Default for Movie {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for Movie {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A genre, either from the full list or from one movie's details.
///
/// Raw JSON like [`Movie`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genre(Value);

impl Genre {
    pub fn named(id: i64, name: impl Into<String>) -> Self {
        Self(json!({ "id": id, "name": name.into() }))
    }

    /// The genre key as text, whether the backend sent a number or a string.
    pub fn id(&self) -> Option<String> {
        key_field(&self.0, "id")
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Default for Genre {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for Genre {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Body of `POST /api/movie`, sent exactly as dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewMovie(Value);

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        poster: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self(json!({
            "title": title.into(),
            "poster": poster.into(),
            "description": description.into(),
        }))
    }

    /// Set one field of the body. A non-object body is replaced by an object.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.0 {
            map.insert(field.to_string(), value.into());
        }
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// The chosen genre as text, from either a number or a string.
    pub fn genre_id(&self) -> Option<String> {
        key_field(&self.0, "genre_id")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Default for NewMovie {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for NewMovie {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Read an identifier that may be a JSON number or string.
fn key_field(record: &Value, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Reference to one movie, the payload of a genre-details request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRef {
    pub id: MovieId,
}
