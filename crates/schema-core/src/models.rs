//! Wizard Models
//!
//! Entities held by the wizard and the two public data shapes: the load
//! format (`LoadItem`) and the schema format (`Schema`).

use serde::{Deserialize, Serialize};

use crate::error::{WizardError, WizardResult};

/// Which collection an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Item,
    Info,
}

/// Key of the element table. Items and info never share an element, even if a
/// caller reuses an id string across the two collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityKey {
    pub fn item(id: impl Into<String>) -> Self {
        Self { kind: EntityKind::Item, id: id.into() }
    }

    pub fn info(id: impl Into<String>) -> Self {
        Self { kind: EntityKind::Info, id: id.into() }
    }
}

/// Top/left offset inside the field, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Info label type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InfoKind {
    /// Free text supplied by the operator
    #[default]
    Text,
    /// Fixed administrator desk label
    Admin,
}

impl InfoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoKind::Text => "text",
            InfoKind::Admin => "admin",
        }
    }

    /// Parse the `data-add-info` attribute value of an add button
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(InfoKind::Text),
            "admin" => Some(InfoKind::Admin),
            _ => None,
        }
    }
}

// ========================
// Load format
// ========================

/// Item as accepted by `load_items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl LoadItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: kind.into(),
        }
    }

    /// Parse a JSON array of load items
    pub fn list_from_json(json: &str) -> WizardResult<Vec<LoadItem>> {
        serde_json::from_str(json).map_err(|e| WizardError::InvalidItems(e.to_string()))
    }
}

/// Summary returned by `not_placed_items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotPlacedItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

// ========================
// Wizard state
// ========================

/// A placeable item. `top`/`left` of `None` means the item sits in the tray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: Option<String>,
    pub top: Option<f64>,
    pub left: Option<f64>,
}

impl Item {
    /// Fresh unplaced item; incoming color and position are never kept
    pub fn from_load(item: &LoadItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            kind: item.kind.clone(),
            color: None,
            top: None,
            left: None,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match (self.top, self.left) {
            (Some(top), Some(left)) => Some(Position { top, left }),
            _ => None,
        }
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        self.top = position.map(|p| p.top);
        self.left = position.map(|p| p.left);
    }

    pub fn is_placed(&self) -> bool {
        self.position().is_some()
    }
}

/// A free-form label. Always placed on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InfoKind,
    pub text: String,
    pub color: String,
    pub top: f64,
    pub left: f64,
}

impl Info {
    pub fn position(&self) -> Position {
        Position { top: self.top, left: self.left }
    }

    pub fn set_position(&mut self, position: Position) {
        self.top = position.top;
        self.left = position.left;
    }
}

// ========================
// Schema format
// ========================

/// Placed item inside a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub color: Option<String>,
    pub top: f64,
    pub left: f64,
}

/// Info entry inside a schema. The id is informational only and is replaced
/// when the schema is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: InfoKind,
    pub text: String,
    pub color: String,
    pub top: f64,
    pub left: f64,
}

/// Serializable snapshot of all placed items and all info entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    pub info: Vec<SchemaInfo>,
    pub items: Vec<SchemaItem>,
}

impl Schema {
    pub fn from_json(json: &str) -> WizardResult<Schema> {
        serde_json::from_str(json).map_err(|e| WizardError::InvalidSchema(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> String {
        // Plain strings and finite floats only, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl From<&Item> for NotPlacedItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            kind: item.kind.clone(),
        }
    }
}

impl From<&Info> for SchemaInfo {
    fn from(info: &Info) -> Self {
        Self {
            id: Some(info.id.clone()),
            kind: info.kind,
            text: info.text.clone(),
            color: info.color.clone(),
            top: info.top,
            left: info.left,
        }
    }
}

impl SchemaItem {
    /// Snapshot of a placed item, `None` while it sits in the tray
    pub fn from_placed(item: &Item) -> Option<Self> {
        let position = item.position()?;
        Some(Self {
            id: item.id.clone(),
            title: item.title.clone(),
            kind: item.kind.clone(),
            color: item.color.clone(),
            top: position.top,
            left: position.left,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_load_is_unplaced() {
        let item = Item::from_load(&LoadItem::new("a", "Bench", "bench"));
        assert!(!item.is_placed());
        assert!(item.color.is_none());
        assert_eq!(item.kind, "bench");
    }

    #[test]
    fn test_schema_json_uses_type_key() {
        let json = r##"{
            "items": [{"id": "a", "title": "Bench", "type": "bench", "top": 8, "left": 16}],
            "info": [{"type": "admin", "text": "Desk", "color": "#000000", "top": 30, "left": 30}]
        }"##;
        let schema = Schema::from_json(json).unwrap();
        assert_eq!(schema.items[0].kind, "bench");
        assert_eq!(schema.items[0].color, None);
        assert_eq!(schema.info[0].kind, InfoKind::Admin);
        assert_eq!(schema.info[0].id, None);
    }

    #[test]
    fn test_schema_rejects_unknown_info_type() {
        let json = r##"{
            "items": [],
            "info": [{"type": "banner", "text": "x", "color": "#000000", "top": 0, "left": 0}]
        }"##;
        assert!(matches!(Schema::from_json(json), Err(WizardError::InvalidSchema(_))));
    }

    #[test]
    fn test_schema_requires_both_arrays() {
        assert!(Schema::from_json(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn test_schema_item_only_for_placed() {
        let mut item = Item::from_load(&LoadItem::new("a", "Bench", "bench"));
        assert!(SchemaItem::from_placed(&item).is_none());
        item.set_position(Some(Position::new(8.0, 16.0)));
        let snapshot = SchemaItem::from_placed(&item).unwrap();
        assert_eq!((snapshot.top, snapshot.left), (8.0, 16.0));
    }
}
