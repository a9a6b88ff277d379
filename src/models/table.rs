//! Table model.
//!
//! Tables are the bins guests are packed into. Only `capacity` constrains
//! the search; layout geometry (`shape`, `x`, `y`) is carried through
//! untouched for the persistence layer.

use serde::{Deserialize, Serialize};

/// A physical table with a fixed number of seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Unique table identifier.
    pub id: String,
    /// Display name (e.g., "Table 7").
    #[serde(default)]
    pub name: String,
    /// Number of seats. Must be positive.
    pub capacity: u32,
    /// Floor layout the table belongs to.
    #[serde(default)]
    pub layout_id: String,
    /// Shape label (e.g., "round", "rectangle").
    #[serde(default)]
    pub shape: String,
    /// Horizontal position in the layout.
    #[serde(default)]
    pub x: f64,
    /// Vertical position in the layout.
    #[serde(default)]
    pub y: f64,
}

impl Table {
    /// Creates a table with the given seat count.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            layout_id: String::new(),
            shape: String::new(),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning layout.
    pub fn with_layout(mut self, layout_id: impl Into<String>) -> Self {
        self.layout_id = layout_id.into();
        self
    }

    /// Sets the shape label.
    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = shape.into();
        self
    }

    /// Sets the layout position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Capacity as a seat count.
    #[inline]
    pub fn seats(&self) -> usize {
        self.capacity as usize
    }
}

/// Total seat count across all tables.
pub fn total_capacity(tables: &[Table]) -> usize {
    tables.iter().map(Table::seats).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder() {
        let t = Table::new("t1", 8)
            .with_name("Head Table")
            .with_layout("hall-a")
            .with_shape("rectangle")
            .with_position(12.5, -3.0);

        assert_eq!(t.id, "t1");
        assert_eq!(t.seats(), 8);
        assert_eq!(t.layout_id, "hall-a");
        assert_eq!(t.shape, "rectangle");
        assert!((t.x - 12.5).abs() < 1e-10);
        assert!((t.y + 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_capacity() {
        let tables = vec![Table::new("t1", 4), Table::new("t2", 6), Table::new("t3", 2)];
        assert_eq!(total_capacity(&tables), 12);
        assert_eq!(total_capacity(&[]), 0);
    }

    #[test]
    fn test_table_wire_format() {
        let json = r#"{"id":"t1","name":"T1","capacity":10,"layoutId":"L1","shape":"round","x":1.0,"y":2.0}"#;
        let t: Table = serde_json::from_str(json).unwrap();
        assert_eq!(t.capacity, 10);
        assert_eq!(t.layout_id, "L1");
        assert_eq!(t.shape, "round");
    }
}
