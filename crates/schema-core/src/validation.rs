//! Input Validation
//!
//! Shape checks run before `load_items` and `load_schema` mutate anything.

use std::collections::HashSet;

use crate::error::{WizardError, WizardResult};
use crate::models::{LoadItem, Schema};

/// Non-empty id/title/type, ids unique within the batch
pub fn validate_load_items(items: &[LoadItem]) -> WizardResult<()> {
    let mut seen = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        if let Some(field) =
            first_empty(&[("id", &item.id), ("title", &item.title), ("type", &item.kind)])
        {
            return Err(WizardError::InvalidItems(format!(
                "item #{} has an empty {}",
                index, field
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(WizardError::DuplicateItemId(item.id.clone()));
        }
    }

    Ok(())
}

/// Schema items need non-empty strings, finite coordinates and unique ids.
/// Info entries need non-empty text and color and finite coordinates; their
/// type is already constrained by `InfoKind`.
pub fn validate_schema(schema: &Schema) -> WizardResult<()> {
    let mut seen = HashSet::new();

    for (index, item) in schema.items.iter().enumerate() {
        if let Some(field) =
            first_empty(&[("id", &item.id), ("title", &item.title), ("type", &item.kind)])
        {
            return Err(WizardError::InvalidSchemaItem(format!(
                "item #{} has an empty {}",
                index, field
            )));
        }
        if !item.top.is_finite() || !item.left.is_finite() {
            return Err(WizardError::InvalidSchemaItem(format!(
                "item \"{}\" has a non-finite position",
                item.id
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(WizardError::DuplicateItemId(item.id.clone()));
        }
    }

    for (index, info) in schema.info.iter().enumerate() {
        if let Some(field) = first_empty(&[("text", &info.text), ("color", &info.color)]) {
            return Err(WizardError::InvalidSchemaInfo(format!(
                "info #{} has an empty {}",
                index, field
            )));
        }
        if !info.top.is_finite() || !info.left.is_finite() {
            return Err(WizardError::InvalidSchemaInfo(format!(
                "info #{} has a non-finite position",
                index
            )));
        }
    }

    Ok(())
}

fn first_empty<'a>(fields: &[(&'a str, &String)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InfoKind, SchemaInfo, SchemaItem};

    fn schema_item(id: &str) -> SchemaItem {
        SchemaItem {
            id: id.to_string(),
            title: "Bench".to_string(),
            kind: "bench".to_string(),
            color: None,
            top: 0.0,
            left: 0.0,
        }
    }

    fn schema_info(text: &str) -> SchemaInfo {
        SchemaInfo {
            id: None,
            kind: InfoKind::Text,
            text: text.to_string(),
            color: "#000000".to_string(),
            top: 30.0,
            left: 30.0,
        }
    }

    #[test]
    fn test_valid_items() {
        let items = vec![LoadItem::new("a", "A", "bench"), LoadItem::new("b", "B", "bench")];
        assert!(validate_load_items(&items).is_ok());
        assert!(validate_load_items(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_item_ids() {
        let items = vec![LoadItem::new("a", "A", "bench"), LoadItem::new("a", "A2", "bench")];
        assert_eq!(
            validate_load_items(&items),
            Err(WizardError::DuplicateItemId("a".to_string()))
        );
    }

    #[test]
    fn test_empty_title() {
        let items = vec![LoadItem::new("a", "", "bench")];
        assert!(matches!(
            validate_load_items(&items),
            Err(WizardError::InvalidItems(msg)) if msg.contains("title")
        ));
    }

    #[test]
    fn test_schema_duplicate_item_ids() {
        let schema = Schema {
            items: vec![schema_item("a"), schema_item("a")],
            info: vec![],
        };
        assert_eq!(
            validate_schema(&schema),
            Err(WizardError::DuplicateItemId("a".to_string()))
        );
    }

    #[test]
    fn test_schema_non_finite_position() {
        let mut item = schema_item("a");
        item.left = f64::NAN;
        let schema = Schema { items: vec![item], info: vec![] };
        assert!(matches!(validate_schema(&schema), Err(WizardError::InvalidSchemaItem(_))));
    }

    #[test]
    fn test_schema_info_needs_text() {
        let schema = Schema {
            items: vec![],
            info: vec![schema_info("")],
        };
        assert!(matches!(validate_schema(&schema), Err(WizardError::InvalidSchemaInfo(_))));
    }
}
