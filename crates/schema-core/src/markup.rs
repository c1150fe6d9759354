//! Element Markup
//!
//! Inner HTML and classes of item/info elements. All operator-supplied text
//! goes through `html_escape` before it reaches markup.

use crate::models::{EntityKey, Info, Item};

/// Escape `&`, `>`, `<` and `"`
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '>' => escaped.push_str("&gt;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Everything a surface needs to build one element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBlueprint {
    pub key: EntityKey,
    pub classes: Vec<String>,
    pub inner_html: String,
    /// Resolved color at creation time, also used as the color input value
    pub color: String,
}

impl ElementBlueprint {
    pub fn for_item(item: &Item, color: String) -> Self {
        let inner_html = format!(
            concat!(
                r#"<div class="csw-item-inner"><div class="csw-item-title">{}</div>"#,
                r#"<button type="button" class="csw-remove"></button>"#,
                r#"<label class="csw-colorpicker"><input type="color" value="{}"></label></div>"#,
            ),
            html_escape(&item.title),
            html_escape(&color),
        );
        Self {
            key: EntityKey::item(item.id.clone()),
            classes: vec!["csw-item".to_string()],
            inner_html,
            color,
        }
    }

    pub fn for_info(info: &Info, color: String) -> Self {
        let inner_html = format!(
            concat!(
                r#"<div class="csw-info-inner"><div class="csw-info-text">{}</div>"#,
                r#"<button type="button" class="csw-remove"></button>"#,
                r#"<label class="csw-colorpicker"><input type="color" value="{}"></label></div>"#,
            ),
            html_escape(&info.text),
            html_escape(&color),
        );
        Self {
            key: EntityKey::info(info.id.clone()),
            classes: vec![
                "csw-info".to_string(),
                format!("csw-info-type-{}", info.kind.as_str()),
            ],
            inner_html,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InfoKind, LoadItem};

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b class="x">Tom & Jerry</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/b&gt;"
        );
        assert_eq!(html_escape("plain 'text'"), "plain 'text'");
    }

    #[test]
    fn test_item_blueprint_escapes_title() {
        let item = Item::from_load(&LoadItem::new("a", "<script>", "bench"));
        let blueprint = ElementBlueprint::for_item(&item, "#ffffff".to_string());
        assert!(blueprint.inner_html.contains("&lt;script&gt;"));
        assert!(!blueprint.inner_html.contains("<script>"));
        assert_eq!(blueprint.classes, vec!["csw-item"]);
        assert_eq!(blueprint.key, EntityKey::item("a"));
    }

    #[test]
    fn test_info_blueprint_classes() {
        let info = Info {
            id: "info-admin-1".to_string(),
            kind: InfoKind::Admin,
            text: "Desk".to_string(),
            color: "#000000".to_string(),
            top: 30.0,
            left: 30.0,
        };
        let blueprint = ElementBlueprint::for_info(&info, "#000000".to_string());
        assert_eq!(blueprint.classes, vec!["csw-info", "csw-info-type-admin"]);
        assert!(blueprint.inner_html.contains(r##"value="#000000""##));
    }
}
