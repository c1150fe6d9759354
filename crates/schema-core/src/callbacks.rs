//! Change Notifications
//!
//! Mutations queue a `WizardEvent` carrying a copy of the affected entity.
//! `WizardHandle` drains the queue once the wizard is no longer borrowed and
//! hands each event to the matching callback, then to `on_change`.

use std::fmt;
use std::rc::Rc;

use crate::models::{Info, Item};

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    InfoAdded(Info),
    InfoRemoved(Info),
    ItemColorChanged(Item),
    InfoColorChanged(Info),
    ItemPositionChanged(Item),
    InfoPositionChanged(Info),
}

pub type Callback<T> = Rc<dyn Fn(T)>;

/// User hooks; unset hooks do nothing
#[derive(Clone, Default)]
pub struct WizardCallbacks {
    on_add_info: Option<Callback<Info>>,
    on_remove_info: Option<Callback<Info>>,
    on_change_item_color: Option<Callback<Item>>,
    on_change_info_color: Option<Callback<Info>>,
    on_change_item_position: Option<Callback<Item>>,
    on_change_info_position: Option<Callback<Info>>,
    on_change: Option<Rc<dyn Fn()>>,
}

impl WizardCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_add_info(mut self, f: impl Fn(Info) + 'static) -> Self {
        self.on_add_info = Some(Rc::new(f));
        self
    }

    pub fn on_remove_info(mut self, f: impl Fn(Info) + 'static) -> Self {
        self.on_remove_info = Some(Rc::new(f));
        self
    }

    pub fn on_change_item_color(mut self, f: impl Fn(Item) + 'static) -> Self {
        self.on_change_item_color = Some(Rc::new(f));
        self
    }

    pub fn on_change_info_color(mut self, f: impl Fn(Info) + 'static) -> Self {
        self.on_change_info_color = Some(Rc::new(f));
        self
    }

    pub fn on_change_item_position(mut self, f: impl Fn(Item) + 'static) -> Self {
        self.on_change_item_position = Some(Rc::new(f));
        self
    }

    pub fn on_change_info_position(mut self, f: impl Fn(Info) + 'static) -> Self {
        self.on_change_info_position = Some(Rc::new(f));
        self
    }

    pub fn on_change(mut self, f: impl Fn() + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    /// Specific hook first, then the generic `on_change`
    pub fn dispatch(&self, event: WizardEvent) {
        fn call<T>(hook: &Option<Callback<T>>, value: T) {
            if let Some(hook) = hook {
                hook(value);
            }
        }

        match event {
            WizardEvent::InfoAdded(info) => call(&self.on_add_info, info),
            WizardEvent::InfoRemoved(info) => call(&self.on_remove_info, info),
            WizardEvent::ItemColorChanged(item) => call(&self.on_change_item_color, item),
            WizardEvent::InfoColorChanged(info) => call(&self.on_change_info_color, info),
            WizardEvent::ItemPositionChanged(item) => call(&self.on_change_item_position, item),
            WizardEvent::InfoPositionChanged(info) => call(&self.on_change_info_position, info),
        }

        if let Some(on_change) = &self.on_change {
            on_change();
        }
    }
}

impl fmt::Debug for WizardCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardCallbacks")
            .field("on_add_info", &self.on_add_info.is_some())
            .field("on_remove_info", &self.on_remove_info.is_some())
            .field("on_change_item_color", &self.on_change_item_color.is_some())
            .field("on_change_info_color", &self.on_change_info_color.is_some())
            .field("on_change_item_position", &self.on_change_item_position.is_some())
            .field("on_change_info_position", &self.on_change_info_position.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoadItem;
    use std::cell::RefCell;

    #[test]
    fn test_dispatch_calls_specific_then_change() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let callbacks = WizardCallbacks::new()
            .on_change_item_color(move |item| a.borrow_mut().push(format!("color:{}", item.id)))
            .on_change(move || b.borrow_mut().push("change".to_string()));

        let item = Item::from_load(&LoadItem::new("a", "A", "bench"));
        callbacks.dispatch(WizardEvent::ItemColorChanged(item.clone()));
        callbacks.dispatch(WizardEvent::ItemPositionChanged(item));

        assert_eq!(*log.borrow(), vec!["color:a", "change", "change"]);
    }
}
