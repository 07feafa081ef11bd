//=========================================================================
// Dropdown
//=========================================================================
//
// Single-choice list anchored at the widget rect.
//
// Collapsed, only the anchor shows the selected option's label. Expanded,
// option `i` occupies the anchor-sized row directly below it:
//
//   row(i) = (x, y + (i + 1) · h, w, h)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::{Command, InputEvent};
use crate::error::UiError;
use crate::render::{Bitmap, Canvas, Color, Font, Rect};

use super::{Component, ComponentBase};

/// Builds the command issued when an option is selected.
pub type SelectAction = fn(String) -> Command;

/// Fill behind expanded rows.
const ROW_BACKGROUND: Color = Color::rgb(32, 32, 48);

//=== Dropdown ============================================================

#[derive(Debug)]
pub struct Dropdown {
    base: ComponentBase,
    font: Font,
    font_color: Color,

    /// (key, label) pairs in display order.
    options: Vec<(String, String)>,

    /// Rendered label for each option, same order as `options`.
    labels: Vec<Bitmap>,

    selected: String,
    expanded: bool,
    on_select: Option<SelectAction>,
}

impl Dropdown {
    //--- Construction -----------------------------------------------------

    /// Creates a collapsed dropdown.
    ///
    /// `selected` falls back to the first option when absent or unknown.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::EmptyOptions`] if `options` is empty.
    pub fn new(
        base: ComponentBase,
        font: Font,
        font_color: Color,
        options: Vec<(String, String)>,
        selected: Option<&str>,
    ) -> Result<Self, UiError> {
        let Some((first, _)) = options.first() else {
            return Err(UiError::EmptyOptions(base.name.clone()));
        };

        let selected = match selected {
            Some(key) if options.iter().any(|(k, _)| k == key) => key.to_string(),
            Some(key) => {
                warn!(target: "ui", "[{}] Unknown default option {}", base.name, key);
                first.clone()
            }
            None => first.clone(),
        };

        let labels = options
            .iter()
            .map(|(_, label)| font.render(label, font_color))
            .collect();

        Ok(Self {
            base,
            font,
            font_color,
            options,
            labels,
            selected,
            expanded: false,
            on_select: None,
        })
    }

    pub fn on_select(mut self, action: SelectAction) -> Self {
        self.on_select = Some(action);
        self
    }

    //--- State ------------------------------------------------------------

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        self.base.log(format_args!(
            "{}",
            if self.expanded { "expanded" } else { "collapsed" }
        ));
    }

    /// Selects `key` and returns the selection command, if any.
    ///
    /// Unknown keys are logged and leave the selection untouched.
    pub fn select_item(&mut self, key: &str) -> Option<Command> {
        if !self.options.iter().any(|(k, _)| k == key) {
            warn!(target: "ui", "[{}] Option {} not found", self.base.name, key);
            return None;
        }

        self.selected = key.to_string();
        self.base.log(format_args!("selected {}", key));
        self.on_select.map(|action| action(key.to_string()))
    }

    //--- Geometry ---------------------------------------------------------

    /// Rect of option row `index` while expanded.
    pub fn row_rect(&self, index: usize) -> Rect {
        let rect = self.base.rect;
        let offset = (index as i32 + 1) * rect.h as i32;
        Rect::new(rect.x, rect.y + offset, rect.w, rect.h)
    }

    fn row_at(&self, point: (i32, i32)) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.row_rect(i).contains(point))
    }

    fn selected_index(&self) -> usize {
        self.options
            .iter()
            .position(|(k, _)| *k == self.selected)
            .unwrap_or_default()
    }
}

impl Component for Dropdown {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        let anchor = self.base.rect;
        if self.base.hover.current {
            canvas.fill_rect(anchor, self.base.color);
        } else {
            canvas.stroke_rect(anchor, self.base.color, 2);
        }

        if let Some(label) = self.labels.get(self.selected_index()) {
            let (x, y) = self.base.centered(label.dimensions());
            canvas.blit(label, x, y);
        }

        if !self.expanded {
            return;
        }

        for (index, label) in self.labels.iter().enumerate() {
            let row = self.row_rect(index);
            canvas.fill_rect(row, ROW_BACKGROUND);
            canvas.stroke_rect(row, self.base.color, 1);

            let centered = Rect::centered_at(row.center(), label.dimensions());
            canvas.blit(label, centered.x, centered.y);
        }
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Command> {
        self.base.track_hover(event);

        let point = event.left_click()?;
        if self.collides(point) {
            self.toggle();
            return None;
        }
        if !self.expanded {
            return None;
        }

        self.expanded = false;
        let index = self.row_at(point)?;
        let key = self.options[index].0.clone();
        self.select_item(&key)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
