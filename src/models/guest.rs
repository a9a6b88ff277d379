//! Guest model.
//!
//! A guest is a person attending an event who needs a seat. Guests are
//! immutable input to the optimizer; identity is the `id`.

use serde::{Deserialize, Serialize};

/// A guest to be seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Unique guest identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Event the guest belongs to.
    #[serde(default)]
    pub event_id: String,
}

impl Guest {
    /// Creates a new guest with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            event_id: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning event.
    pub fn with_event(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_builder() {
        let g = Guest::new("g1").with_name("Ada").with_event("wedding");
        assert_eq!(g.id, "g1");
        assert_eq!(g.name, "Ada");
        assert_eq!(g.event_id, "wedding");
    }

    #[test]
    fn test_guest_wire_format() {
        let g: Guest =
            serde_json::from_str(r#"{"id":"g1","name":"Ada","eventId":"e1"}"#).unwrap();
        assert_eq!(g, Guest::new("g1").with_name("Ada").with_event("e1"));

        let minimal: Guest = serde_json::from_str(r#"{"id":"g2"}"#).unwrap();
        assert!(minimal.name.is_empty());
    }
}
