//! A clickable row for lists and dropdown menus.
//!
//! The row reports a caller-supplied opaque value on click and renders one
//! of three indicator variants next to its content.
//!
//! # Example
//!
//! ```ignore
//! let item = ListItem::new("us-east-1")
//!     .variant(ItemVariant::Dot)
//!     .selected(true)
//!     .on_click(|value| log::info!("picked {value}"))
//!     .child(Element::text("US East (N. Virginia)"));
//!
//! let markup = item.build();
//! ```

use glide::{Element, Style, TextWrap};

use crate::events::{ClickHandler, EventResult};

/// Which indicator a row renders, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemVariant {
    /// No indicator.
    #[default]
    None,
    /// Checkbox-style indicator, for multi-select lists.
    Checkbox,
    /// Dot-style indicator, for single-select lists.
    Dot,
}

/// Builder for a selectable list row.
///
/// `T` is the caller's value, returned verbatim to `on_click`; the row
/// itself holds no persistent state.
pub struct ListItem<T> {
    id: Option<String>,
    class: Option<String>,
    value: T,
    selected: bool,
    variant: ItemVariant,
    wrap_text: bool,
    on_click: Option<ClickHandler<T>>,
    children: Vec<Element>,
}

impl<T> ListItem<T> {
    pub fn new(value: T) -> Self {
        Self {
            id: None,
            class: None,
            value,
            selected: false,
            variant: ItemVariant::None,
            wrap_text: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Extra class appended to the computed class list.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Whether the row renders with selected styling.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Which indicator style to render.
    pub fn variant(mut self, variant: ItemVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Wrap text content instead of truncating it.
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// Called with the row's value when the row is clicked.
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_click = Some(std::sync::Arc::new(handler));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Handle a click anywhere in the row.
    ///
    /// Always consumes the event; invokes `on_click` with the row's value
    /// when a handler is present, otherwise a silent no-op.
    pub fn handle_click(&self) -> EventResult {
        if let Some(on_click) = &self.on_click {
            on_click(&self.value);
        }
        EventResult::Consumed
    }

    /// Build the row markup.
    pub fn build(&self) -> Element {
        let mut row = Element::row()
            .classes(self.class_list())
            .clickable(true);
        if let Some(id) = &self.id {
            row = row.id(id.clone());
        }
        if self.selected {
            row = row.style(Style::new().bold());
        }

        if let Some(indicator) = self.indicator() {
            row = row.child(indicator);
        }

        let wrap = if self.wrap_text {
            TextWrap::Wrap
        } else {
            TextWrap::Truncate
        };
        let contents = Element::box_()
            .class("list-item--contents")
            .children(self.children.iter().cloned().map(|c| c.text_wrap(wrap)));

        row.child(contents)
    }

    fn class_list(&self) -> Vec<String> {
        let mut classes = vec!["list-item".to_string()];
        match self.variant {
            ItemVariant::Checkbox => classes.push("list-item__checkbox".to_string()),
            ItemVariant::Dot => classes.push("list-item__dot".to_string()),
            ItemVariant::None => {}
        }
        if self.selected {
            classes.push("active".to_string());
        }
        if let Some(class) = &self.class {
            classes.push(class.clone());
        }
        if self.wrap_text {
            classes.push("list-item__wrap".to_string());
        } else {
            classes.push("list-item__no-wrap".to_string());
        }
        classes
    }

    fn indicator(&self) -> Option<Element> {
        match self.variant {
            ItemVariant::Checkbox => Some(
                Element::text(if self.selected { "▣" } else { "☐" })
                    .class("list-item--checkbox"),
            ),
            ItemVariant::Dot => Some(
                Element::text(if self.selected { "●" } else { " " }).class("list-item--dot"),
            ),
            ItemVariant::None => None,
        }
    }
}
