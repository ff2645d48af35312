//! Triple type for DICE knowledge graphs
//!
//! A triple is the 5-tuple `(head, arc, tail, tail_type, source)`:
//!
//! - `head`: ID of the entity at the head of the triple (the subject)
//! - `arc`: name of the relation/property (the predicate)
//! - `tail`: another entity ID, or a literal value
//! - `tail_type`: whether `tail` is an entity ID or a value
//! - `source`: where the fact came from (e.g. `wikidata`, `musicbrainz`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Field separator in `triples.txt`
pub const FIELD_SEPARATOR: char = '\t';

/// Number of fields in a serialized triple
pub const TRIPLE_ARITY: usize = 5;

/// How the tail of a triple should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailType {
    /// The tail is the ID of another entity
    Entity,
    /// The tail is a literal (number, string)
    Value,
}

impl TailType {
    /// Name as written in dataset files
    pub fn as_str(&self) -> &'static str {
        match self {
            TailType::Entity => "entity",
            TailType::Value => "value",
        }
    }
}

impl fmt::Display for TailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailType {
    type Err = ParseTripleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entity" => Ok(TailType::Entity),
            "value" => Ok(TailType::Value),
            other => Err(ParseTripleError::UnknownTailType(other.to_string())),
        }
    }
}

/// Why a line could not be parsed as a triple
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTripleError {
    #[error("expected 5 tab-separated fields, found {0}")]
    FieldCount(usize),

    #[error("unknown tail type {0:?} (expected \"entity\" or \"value\")")]
    UnknownTailType(String),
}

/// A single fact in the knowledge graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Head entity ID
    pub head: String,

    /// Relation name
    pub arc: String,

    /// Tail entity ID or literal value
    pub tail: String,

    /// Interpretation of `tail`
    pub tail_type: TailType,

    /// Provenance of the triple
    pub source: String,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        head: impl Into<String>,
        arc: impl Into<String>,
        tail: impl Into<String>,
        tail_type: TailType,
        source: impl Into<String>,
    ) -> Self {
        Self {
            head: head.into(),
            arc: arc.into(),
            tail: tail.into(),
            tail_type,
            source: source.into(),
        }
    }

    /// Whether the tail refers to another entity
    pub fn is_entity_tail(&self) -> bool {
        self.tail_type == TailType::Entity
    }

    /// Serialize as a `triples.txt` line (without trailing newline)
    pub fn to_line(&self) -> String {
        [
            self.head.as_str(),
            self.arc.as_str(),
            self.tail.as_str(),
            self.tail_type.as_str(),
            self.source.as_str(),
        ]
        .join("\t")
    }
}

impl FromStr for Triple {
    type Err = ParseTripleError;

    /// Parse a `triples.txt` line. Surrounding whitespace is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
        let [head, arc, tail, tail_type, source] = fields.as_slice() else {
            return Err(ParseTripleError::FieldCount(fields.len()));
        };

        Ok(Self::new(*head, *arc, *tail, tail_type.parse()?, *source))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.head, self.arc, self.tail, self.tail_type, self.source
        )
    }
}
