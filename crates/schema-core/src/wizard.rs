//! Schema Wizard
//!
//! State store, interaction controller and render pass of one widget
//! instance. Every mutation re-renders through the `Surface` and queues a
//! `WizardEvent`; callers drain events with `take_events` (or let
//! `WizardHandle` do it).

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::callbacks::WizardEvent;
use crate::color::resolve_color;
use crate::drag::{
    ActiveDrag, ArrowKey, DragState, PointerDown, PointerTarget, PointerUp, PRIMARY_BUTTON,
};
use crate::error::WizardResult;
use crate::geometry::{clamp_position, drag_position, Point};
use crate::markup::ElementBlueprint;
use crate::models::{
    EntityKey, EntityKind, Info, InfoKind, Item, LoadItem, NotPlacedItem, Schema, SchemaInfo,
    SchemaItem,
};
use crate::options::WizardOptions;
use crate::surface::Surface;
use crate::text::NEW_INFO_POSITION;
use crate::validation::{validate_load_items, validate_schema};

/// Fresh info id, e.g. `info-text-3f2a...`
pub fn generate_info_id(kind: InfoKind) -> String {
    format!("info-{}-{}", kind.as_str(), Uuid::new_v4().simple())
}

pub struct SchemaWizard<S: Surface> {
    options: WizardOptions,
    surface: S,
    items: IndexMap<String, Item>,
    info: IndexMap<String, Info>,
    elements: HashMap<EntityKey, S::Element>,
    drag: DragState,
    events: Vec<WizardEvent>,
}

impl<S: Surface> SchemaWizard<S> {
    pub fn new(options: WizardOptions, surface: S) -> WizardResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            surface,
            items: IndexMap::new(),
            info: IndexMap::new(),
            elements: HashMap::new(),
            drag: DragState::Idle,
            events: Vec::new(),
        })
    }

    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn info(&self, id: &str) -> Option<&Info> {
        self.info.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn infos(&self) -> impl Iterator<Item = &Info> {
        self.info.values()
    }

    pub fn element(&self, key: &EntityKey) -> Option<&S::Element> {
        self.elements.get(key)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Drain queued change events
    pub fn take_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================
    // State store
    // ========================

    /// Replace all items. Every item starts unplaced with no color.
    pub fn load_items(&mut self, items: &[LoadItem]) -> WizardResult<()> {
        validate_load_items(items).inspect_err(|e| warn!("rejected items: {}", e))?;

        let previous = std::mem::take(&mut self.items);
        for old in previous.values() {
            let stale = items
                .iter()
                .find(|item| item.id == old.id)
                .map_or(true, |item| item.title != old.title);
            if stale {
                self.destroy_element(&EntityKey::item(old.id.clone()));
            }
        }

        for item in items {
            self.items.insert(item.id.clone(), Item::from_load(item));
        }
        debug!("loaded {} items", self.items.len());

        self.render();
        Ok(())
    }

    /// Add the schema's info entries under new ids and restore position and
    /// color of known items. Items missing from the collection are skipped.
    pub fn load_schema(&mut self, schema: &Schema) -> WizardResult<()> {
        validate_schema(schema).inspect_err(|e| warn!("rejected schema: {}", e))?;

        for entry in &schema.info {
            let id = generate_info_id(entry.kind);
            self.info.insert(
                id.clone(),
                Info {
                    id,
                    kind: entry.kind,
                    text: entry.text.clone(),
                    color: entry.color.clone(),
                    top: entry.top,
                    left: entry.left,
                },
            );
        }

        let mut restored = 0;
        for entry in &schema.items {
            if let Some(item) = self.items.get_mut(&entry.id) {
                item.top = Some(entry.top);
                item.left = Some(entry.left);
                item.color = entry.color.clone();
                restored += 1;
            }
        }
        debug!(
            "loaded schema: {} info, {}/{} items restored",
            schema.info.len(),
            restored,
            schema.items.len()
        );

        self.render();
        Ok(())
    }

    /// Snapshot of placed items and all info entries
    pub fn build_schema(&self) -> Schema {
        Schema {
            info: self.info.values().map(SchemaInfo::from).collect(),
            items: self.items.values().filter_map(SchemaItem::from_placed).collect(),
        }
    }

    /// Every loaded item, placed or not
    pub fn not_placed_items(&self) -> Vec<NotPlacedItem> {
        self.items.values().map(NotPlacedItem::from).collect()
    }

    // ========================
    // Interaction
    // ========================

    /// Start a drag if the primary button went down on a draggable region.
    /// Any previous drag and hover proxy are discarded first.
    pub fn pointer_down(&mut self, down: &PointerDown) {
        self.drag = DragState::Idle;
        self.surface.clear_hover();

        if down.buttons != PRIMARY_BUTTON {
            return;
        }

        let (key, blueprint) = match &down.target {
            PointerTarget::ItemTitle(id) => match self.items.get(id) {
                Some(item) => {
                    let color =
                        resolve_color(item.color.as_deref(), &self.options.item_default_color);
                    (EntityKey::item(id.clone()), ElementBlueprint::for_item(item, color))
                }
                None => return,
            },
            PointerTarget::InfoBody(id) => match self.info.get(id) {
                Some(info) => {
                    let color = resolve_color(Some(&info.color), &self.options.info_default_color);
                    (EntityKey::info(id.clone()), ElementBlueprint::for_info(info, color))
                }
                None => return,
            },
            PointerTarget::Elsewhere => return,
        };

        let grab_offset = down.pointer.relative_to(down.target_origin);
        let position = drag_position(
            down.pointer,
            down.root_origin,
            grab_offset,
            self.snap_step(key.kind),
        );

        if let Some(proxy) = self.surface.create_element(&blueprint) {
            self.surface.apply_color(&proxy, &blueprint.color);
            self.surface.show_hover(proxy, position);
        }

        debug!("drag started: {:?}", key);
        self.drag = DragState::Dragging(ActiveDrag { key, grab_offset });
    }

    /// Track the hover proxy
    pub fn pointer_move(&mut self, pointer: Point, root_origin: Point) {
        let Some(drag) = self.drag.active() else {
            return;
        };
        let step = self.snap_step(drag.key.kind);
        let position = drag_position(pointer, root_origin, drag.grab_offset, step);
        self.surface.move_hover(position);
    }

    /// Finish a drag. A release over the field commits the position;
    /// anywhere else leaves the entity where it was.
    pub fn pointer_up(&mut self, up: &PointerUp) {
        let Some(drag) = self.drag.finish() else {
            return;
        };
        self.surface.clear_hover();

        let mut committed = false;
        if up.over_field {
            let step = self.snap_step(drag.key.kind);
            let position = drag_position(up.pointer, up.field_origin, drag.grab_offset, step);
            match drag.key.kind {
                EntityKind::Item => {
                    if let Some(item) = self.items.get_mut(&drag.key.id) {
                        item.set_position(Some(position));
                        committed = true;
                    }
                }
                EntityKind::Info => {
                    if let Some(info) = self.info.get_mut(&drag.key.id) {
                        info.set_position(position);
                        committed = true;
                    }
                }
            }
        }

        self.render();
        self.focus(&drag.key);

        if committed {
            debug!("drag committed: {:?}", drag.key);
            self.queue_position_event(&drag.key);
        }
    }

    /// Move a focused, placed item one step. Returns whether the key was
    /// consumed.
    pub fn nudge(&mut self, item_id: &str, key: ArrowKey) -> bool {
        let step = self.options.nudge_step();
        let Some(item) = self.items.get_mut(item_id) else {
            return false;
        };
        let Some(mut position) = item.position() else {
            return false;
        };

        let (dt, dl) = key.delta();
        position.top += dt * step;
        position.left += dl * step;
        item.set_position(Some(position));

        self.render();
        let key = EntityKey::item(item_id);
        self.focus(&key);
        self.queue_position_event(&key);
        true
    }

    /// Send an item back to the tray
    pub fn remove_item(&mut self, id: &str) {
        let Some(item) = self.items.get_mut(id) else {
            return;
        };
        item.set_position(None);
        self.render();
        self.queue_position_event(&EntityKey::item(id));
    }

    /// Delete an info entry and its element
    pub fn remove_info(&mut self, id: &str) {
        let Some(info) = self.info.shift_remove(id) else {
            return;
        };
        self.destroy_element(&EntityKey::info(id));
        info!("removed info {}", id);
        self.events.push(WizardEvent::InfoRemoved(info));
        self.render();
    }

    pub fn change_item_color(&mut self, id: &str, color: &str) {
        let Some(item) = self.items.get_mut(id) else {
            return;
        };
        item.color = Some(color.to_string());
        self.render();
        if let Some(item) = self.items.get(id) {
            self.events.push(WizardEvent::ItemColorChanged(item.clone()));
        }
    }

    pub fn change_info_color(&mut self, id: &str, color: &str) {
        let Some(info) = self.info.get_mut(id) else {
            return;
        };
        info.color = color.to_string();
        self.render();
        if let Some(info) = self.info.get(id) {
            self.events.push(WizardEvent::InfoColorChanged(info.clone()));
        }
    }

    /// Create an info entry at the default spot with the default color
    pub fn add_info(&mut self, kind: InfoKind, text: String) -> Info {
        let id = generate_info_id(kind);
        let entry = Info {
            id: id.clone(),
            kind,
            text,
            color: self.options.info_default_color.clone(),
            top: NEW_INFO_POSITION.top,
            left: NEW_INFO_POSITION.left,
        };
        self.info.insert(id.clone(), entry.clone());
        info!("added {} info {}", kind.as_str(), id);

        self.render();
        let entry = self.info.get(&id).cloned().unwrap_or(entry);
        self.events.push(WizardEvent::InfoAdded(entry.clone()));
        entry
    }

    // ========================
    // Render
    // ========================

    /// Sync every entity into its element: create lazily, color, clamp and
    /// place. Clamped positions are written back into state.
    pub fn render(&mut self) {
        let Self {
            options,
            surface,
            items,
            info,
            elements,
            ..
        } = self;

        let max_item_left = options.field_width - options.item_width;
        let max_item_top = options.field_height - options.item_height;

        for item in items.values_mut() {
            let color = resolve_color(item.color.as_deref(), &options.item_default_color);
            let key = EntityKey::item(item.id.clone());
            let Some(element) = element_for(surface, elements, key, || {
                ElementBlueprint::for_item(item, color.clone())
            }) else {
                continue;
            };

            surface.apply_color(&element, &color);
            match item.position() {
                Some(position) => {
                    let clamped = clamp_position(position, max_item_left, max_item_top);
                    item.set_position(Some(clamped));
                    surface.place_on_field(&element, clamped);
                }
                None => surface.place_in_tray(&element),
            }
        }

        for entry in info.values_mut() {
            let color = resolve_color(Some(&entry.color), &options.info_default_color);
            let key = EntityKey::info(entry.id.clone());
            let Some(element) = element_for(surface, elements, key, || {
                ElementBlueprint::for_info(entry, color.clone())
            }) else {
                continue;
            };

            surface.apply_color(&element, &color);
            let clamped =
                clamp_position(entry.position(), options.field_width, options.field_height);
            entry.set_position(clamped);
            surface.place_on_field(&element, clamped);
        }
    }

    /// Drop all state and elements. The wizard stays usable but empty.
    pub fn dispose(&mut self) {
        self.drag = DragState::Idle;
        self.surface.clear_hover();
        for (_, element) in self.elements.drain() {
            self.surface.destroy(&element);
        }
        self.items.clear();
        self.info.clear();
        self.events.clear();
        info!("schema wizard disposed");
    }

    fn snap_step(&self, kind: EntityKind) -> Option<f64> {
        match kind {
            EntityKind::Item => Some(self.options.item_grid_step),
            EntityKind::Info => None,
        }
    }

    fn focus(&mut self, key: &EntityKey) {
        if let Some(element) = self.elements.get(key) {
            self.surface.focus(element);
        }
    }

    fn destroy_element(&mut self, key: &EntityKey) {
        if let Some(element) = self.elements.remove(key) {
            self.surface.destroy(&element);
        }
    }

    fn queue_position_event(&mut self, key: &EntityKey) {
        let event = match key.kind {
            EntityKind::Item => self
                .items
                .get(&key.id)
                .map(|item| WizardEvent::ItemPositionChanged(item.clone())),
            EntityKind::Info => self
                .info
                .get(&key.id)
                .map(|info| WizardEvent::InfoPositionChanged(info.clone())),
        };
        self.events.extend(event);
    }
}

/// Cached element of `key`, created from `blueprint` on first sight
fn element_for<S: Surface>(
    surface: &mut S,
    elements: &mut HashMap<EntityKey, S::Element>,
    key: EntityKey,
    blueprint: impl FnOnce() -> ElementBlueprint,
) -> Option<S::Element> {
    if let Some(element) = elements.get(&key) {
        return Some(element.clone());
    }
    let element = surface.create_element(&blueprint())?;
    elements.insert(key, element.clone());
    Some(element)
}

impl<S: Surface> std::fmt::Debug for SchemaWizard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaWizard")
            .field("options", &self.options)
            .field("items", &self.items.len())
            .field("info", &self.info.len())
            .field("elements", &self.elements.len())
            .field("drag", &self.drag)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WizardError;
    use crate::models::Position;
    use crate::surface::{MemorySurface, Placement};
    use pretty_assertions::assert_eq;

    fn wizard() -> SchemaWizard<MemorySurface> {
        SchemaWizard::new(WizardOptions::default(), MemorySurface::new()).unwrap()
    }

    fn load(wizard: &mut SchemaWizard<MemorySurface>, ids: &[&str]) {
        let items: Vec<LoadItem> = ids
            .iter()
            .map(|id| LoadItem::new(*id, format!("Title {}", id), "bench"))
            .collect();
        wizard.load_items(&items).unwrap();
    }

    fn press(target: PointerTarget, x: f64, y: f64) -> PointerDown {
        PointerDown {
            target,
            pointer: Point::new(x, y),
            buttons: PRIMARY_BUTTON,
            target_origin: Point::new(x - 4.0, y - 4.0),
            root_origin: Point::new(0.0, 0.0),
        }
    }

    fn release_on_field(x: f64, y: f64) -> PointerUp {
        PointerUp {
            pointer: Point::new(x, y),
            over_field: true,
            field_origin: Point::new(0.0, 0.0),
        }
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = WizardOptions {
            field_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            SchemaWizard::new(options, MemorySurface::new()),
            Err(WizardError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_load_items_renders_into_tray() {
        let mut wizard = wizard();
        load(&mut wizard, &["a", "b"]);

        let element = wizard.surface().element_for(&EntityKey::item("a")).unwrap();
        assert_eq!(element.placement, Placement::Tray);
        assert_eq!(element.color, "#ffffff");
        assert_eq!(wizard.surface().created_for(&EntityKey::item("b")), 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        wizard.change_item_color("a", "#ff0000");

        let duplicate = vec![LoadItem::new("x", "X", "bench"), LoadItem::new("x", "X", "bench")];
        assert!(wizard.load_items(&duplicate).is_err());
        assert_eq!(wizard.item("a").unwrap().color.as_deref(), Some("#ff0000"));
        assert!(wizard.item("x").is_none());
    }

    #[test]
    fn test_elements_are_reused_across_renders() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        wizard.render();
        wizard.change_item_color("a", "#00ff00");
        assert_eq!(wizard.surface().created_for(&EntityKey::item("a")), 1);
        assert_eq!(
            wizard.surface().element_for(&EntityKey::item("a")).unwrap().color,
            "#00ff00"
        );
    }

    #[test]
    fn test_reload_destroys_elements_of_dropped_items() {
        let mut wizard = wizard();
        load(&mut wizard, &["a", "b"]);
        load(&mut wizard, &["b"]);

        assert!(wizard.surface().element_for(&EntityKey::item("a")).is_none());
        assert_eq!(wizard.surface().created_for(&EntityKey::item("b")), 1);
    }

    #[test]
    fn test_reload_clears_positions() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));
        wizard.pointer_up(&release_on_field(100.0, 100.0));
        assert!(wizard.item("a").unwrap().is_placed());

        load(&mut wizard, &["a"]);
        assert!(!wizard.item("a").unwrap().is_placed());
    }

    #[test]
    fn test_drag_shows_and_clears_hover_proxy() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);

        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));
        assert!(wizard.is_dragging());
        assert_eq!(wizard.surface().hover_key(), Some(&EntityKey::item("a")));

        wizard.pointer_move(Point::new(77.0, 60.0), Point::new(0.0, 0.0));
        let (_, hover_position) = wizard.surface().hover.unwrap();
        assert_eq!(hover_position, Position::new(56.0, 72.0));

        wizard.pointer_up(&release_on_field(77.0, 60.0));
        assert!(!wizard.is_dragging());
        assert!(wizard.surface().hover.is_none());
        assert_eq!(wizard.surface().focused_key(), Some(&EntityKey::item("a")));
        assert_eq!(wizard.surface().created_for(&EntityKey::item("a")), 1);
    }

    #[test]
    fn test_non_primary_button_does_not_drag() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        let mut down = press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0);
        down.buttons = 2;
        wizard.pointer_down(&down);
        assert!(!wizard.is_dragging());
        assert!(wizard.surface().hover.is_none());
    }

    #[test]
    fn test_new_press_clears_stale_drag() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));
        wizard.pointer_down(&press(PointerTarget::Elsewhere, 10.0, 10.0));
        assert!(!wizard.is_dragging());
        assert!(wizard.surface().hover.is_none());
    }

    #[test]
    fn test_press_on_unknown_id_is_ignored() {
        let mut wizard = wizard();
        wizard.pointer_down(&press(PointerTarget::InfoBody("missing".into()), 5.0, 5.0));
        assert!(!wizard.is_dragging());
        wizard.pointer_up(&release_on_field(5.0, 5.0));
        assert!(wizard.take_events().is_empty());
    }

    #[test]
    fn test_drop_outside_field_keeps_position() {
        let mut wizard = wizard();
        let info = wizard.add_info(InfoKind::Text, "Court".to_string());
        wizard.take_events();

        wizard.pointer_down(&press(PointerTarget::InfoBody(info.id.clone()), 40.0, 40.0));
        wizard.pointer_up(&PointerUp {
            pointer: Point::new(700.0, 700.0),
            over_field: false,
            field_origin: Point::new(0.0, 0.0),
        });

        assert_eq!(wizard.info(&info.id).unwrap().position(), Position::new(30.0, 30.0));
        assert!(wizard.take_events().is_empty());
    }

    #[test]
    fn test_item_drop_outside_field_changes_nothing() {
        let mut wizard = wizard();
        load(&mut wizard, &["a", "b"]);
        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));
        wizard.pointer_up(&release_on_field(104.0, 104.0));
        wizard.take_events();
        let outside = PointerUp {
            pointer: Point::new(700.0, 700.0),
            over_field: false,
            field_origin: Point::new(0.0, 0.0),
        };

        wizard.pointer_down(&press(PointerTarget::ItemTitle("b".into()), 50.0, 50.0));
        wizard.pointer_up(&outside);
        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));
        wizard.pointer_up(&outside);

        assert!(!wizard.item("b").unwrap().is_placed());
        let tray = wizard.surface().element_for(&EntityKey::item("b")).unwrap();
        assert_eq!(tray.placement, Placement::Tray);
        assert_eq!(wizard.item("a").unwrap().position(), Some(Position::new(104.0, 104.0)));
        let placed = wizard.surface().element_for(&EntityKey::item("a")).unwrap();
        assert_eq!(placed.placement, Placement::Field(Position::new(104.0, 104.0)));
        assert!(wizard.surface().hover.is_none());
        assert!(wizard.take_events().is_empty());
    }

    #[test]
    fn test_info_drop_is_not_snapped() {
        let mut wizard = wizard();
        let info = wizard.add_info(InfoKind::Admin, "Desk".to_string());
        wizard.take_events();

        wizard.pointer_down(&press(PointerTarget::InfoBody(info.id.clone()), 40.0, 40.0));
        wizard.pointer_up(&release_on_field(105.0, 203.0));

        assert_eq!(wizard.info(&info.id).unwrap().position(), Position::new(199.0, 101.0));
        assert!(matches!(
            wizard.take_events().as_slice(),
            [WizardEvent::InfoPositionChanged(moved)] if moved.id == info.id
        ));
    }

    #[test]
    fn test_info_clamps_to_field_size() {
        let mut wizard = wizard();
        let info = wizard.add_info(InfoKind::Text, "Court".to_string());
        wizard.pointer_down(&press(PointerTarget::InfoBody(info.id.clone()), 40.0, 40.0));
        wizard.pointer_up(&release_on_field(900.0, -20.0));
        assert_eq!(wizard.info(&info.id).unwrap().position(), Position::new(0.0, 500.0));
    }

    #[test]
    fn test_nudge_moves_placed_item_by_grid_step() {
        let mut wizard = wizard();
        load(&mut wizard, &["a", "b"]);
        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));
        wizard.pointer_up(&release_on_field(104.0, 104.0));
        wizard.take_events();

        assert!(wizard.nudge("a", ArrowKey::Right));
        assert!(wizard.nudge("a", ArrowKey::Up));
        assert_eq!(wizard.item("a").unwrap().position(), Some(Position::new(96.0, 112.0)));
        assert_eq!(wizard.take_events().len(), 2);

        assert!(!wizard.nudge("b", ArrowKey::Left));
        assert!(!wizard.nudge("missing", ArrowKey::Left));
    }

    #[test]
    fn test_nudge_is_clamped_at_render() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));
        wizard.pointer_up(&release_on_field(4.0, 4.0));
        assert_eq!(wizard.item("a").unwrap().position(), Some(Position::new(0.0, 0.0)));

        wizard.nudge("a", ArrowKey::Left);
        assert_eq!(wizard.item("a").unwrap().position(), Some(Position::new(0.0, 0.0)));
    }

    #[test]
    fn test_nudge_without_grid_uses_one_pixel() {
        let options = WizardOptions {
            item_grid_step: 0.0,
            ..Default::default()
        };
        let mut wizard = SchemaWizard::new(options, MemorySurface::new()).unwrap();
        load(&mut wizard, &["a"]);
        wizard.load_schema(&Schema {
            info: vec![],
            items: vec![SchemaItem {
                id: "a".into(),
                title: "Title a".into(),
                kind: "bench".into(),
                color: None,
                top: 10.0,
                left: 10.0,
            }],
        })
        .unwrap();
        wizard.nudge("a", ArrowKey::Down);
        assert_eq!(wizard.item("a").unwrap().position(), Some(Position::new(11.0, 10.0)));
    }

    #[test]
    fn test_remove_item_returns_it_to_tray() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));
        wizard.pointer_up(&release_on_field(104.0, 104.0));
        wizard.take_events();

        wizard.remove_item("a");
        let events = wizard.take_events();
        assert!(matches!(
            events.as_slice(),
            [WizardEvent::ItemPositionChanged(item)] if item.top.is_none() && item.left.is_none()
        ));
        assert_eq!(
            wizard.surface().element_for(&EntityKey::item("a")).unwrap().placement,
            Placement::Tray
        );
        assert!(wizard.build_schema().items.is_empty());
    }

    #[test]
    fn test_remove_info_destroys_element() {
        let mut wizard = wizard();
        let info = wizard.add_info(InfoKind::Text, "Court".to_string());
        let key = EntityKey::info(info.id.clone());
        assert!(wizard.surface().element_for(&key).is_some());

        wizard.remove_info(&info.id);
        assert!(wizard.surface().element_for(&key).is_none());
        assert!(wizard.element(&key).is_none());
        assert!(wizard.info(&info.id).is_none());

        wizard.remove_info(&info.id);
    }

    #[test]
    fn test_color_change_stores_raw_value_and_renders_resolved() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        wizard.change_item_color("a", "not-a-color");

        assert_eq!(wizard.item("a").unwrap().color.as_deref(), Some("not-a-color"));
        assert_eq!(
            wizard.surface().element_for(&EntityKey::item("a")).unwrap().color,
            "#ffffff"
        );
        assert!(matches!(
            wizard.take_events().as_slice(),
            [WizardEvent::ItemColorChanged(item)] if item.id == "a"
        ));
    }

    #[test]
    fn test_info_color_change() {
        let mut wizard = wizard();
        let info = wizard.add_info(InfoKind::Text, "Court".to_string());
        wizard.take_events();
        wizard.change_info_color(&info.id, "Teal");
        assert_eq!(
            wizard.surface().element_for(&EntityKey::info(info.id.clone())).unwrap().color,
            "#008080"
        );
        assert_eq!(wizard.take_events().len(), 1);
        wizard.change_info_color("missing", "#ffffff");
        assert!(wizard.take_events().is_empty());
    }

    #[test]
    fn test_add_info_defaults() {
        let mut wizard = wizard();
        let info = wizard.add_info(InfoKind::Admin, "Desk".to_string());
        assert!(info.id.starts_with("info-admin-"));
        assert_eq!(info.color, "#000000");
        assert_eq!(info.position(), NEW_INFO_POSITION);
        let element = wizard.surface().element_for(&EntityKey::info(info.id.clone())).unwrap();
        assert_eq!(element.blueprint.classes[1], "csw-info-type-admin");
        assert_eq!(element.placement, Placement::Field(NEW_INFO_POSITION));
    }

    #[test]
    fn test_item_and_info_with_same_id_get_separate_elements() {
        let mut wizard = wizard();
        wizard
            .load_schema(&Schema {
                info: vec![SchemaInfo {
                    id: None,
                    kind: InfoKind::Text,
                    text: "Court".into(),
                    color: "#000000".into(),
                    top: 0.0,
                    left: 0.0,
                }],
                items: vec![],
            })
            .unwrap();
        let info_id = wizard.infos().next().unwrap().id.clone();
        wizard
            .load_items(&[LoadItem::new(info_id.clone(), "Bench", "bench")])
            .unwrap();

        assert!(wizard.surface().element_for(&EntityKey::item(info_id.clone())).is_some());
        assert!(wizard.surface().element_for(&EntityKey::info(info_id)).is_some());
    }

    #[test]
    fn test_dispose_clears_everything() {
        let mut wizard = wizard();
        load(&mut wizard, &["a"]);
        wizard.add_info(InfoKind::Text, "Court".to_string());
        wizard.pointer_down(&press(PointerTarget::ItemTitle("a".into()), 50.0, 50.0));

        wizard.dispose();
        assert!(!wizard.is_dragging());
        assert!(wizard.surface().hover.is_none());
        assert_eq!(wizard.items().count(), 0);
        assert_eq!(wizard.infos().count(), 0);
        assert!(wizard.surface().elements.iter().all(|el| el.destroyed));
        assert!(wizard.take_events().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_info_id(InfoKind::Text);
        let b = generate_info_id(InfoKind::Text);
        assert_ne!(a, b);
        assert!(a.starts_with("info-text-"));
        assert!(!a.contains('.'));
    }
}
