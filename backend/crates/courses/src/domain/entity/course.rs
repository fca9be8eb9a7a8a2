//! Course Entity
//!
//! A catalog entry: name, free-text description, and a non-empty tag list.

use chrono::{DateTime, Utc};
use kernel::id::CourseId;

/// Course entity
///
/// Identifier is assigned at construction (UUID v4), before the persistence
/// write. The creation invariant (non-empty name/description/tags) is
/// enforced by the application layer before an entity is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Internal UUID identifier
    pub course_id: CourseId,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Classification labels (non-empty)
    pub tags: Vec<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Create a new course
    pub fn new(name: String, description: String, tags: Vec<String>) -> Self {
        let now = Utc::now();

        Self {
            course_id: CourseId::new(),
            name,
            description,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the description
    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Replace the tag list
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
        self.updated_at = Utc::now();
    }
}
