//! Hit areas for mouse interaction.
//!
//! Components register clickable regions while rendering; the event loop
//! asks the registry which action a click maps to.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::form::Field;

/// Action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Focus the input for this field
    FocusField(Field),
    /// Press the Submit button
    Submit,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
    /// Style applied while the pointer is over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction, hover_style: Option<Style>) -> Self {
        Self {
            rect,
            action,
            hover_style,
        }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of hit areas for the current frame.
///
/// Cleared at the start of each render. Later registrations win where areas
/// overlap.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Last known pointer position; survives `clear`
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all areas. The pointer position is kept so hover styling
    /// survives a re-render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action, hover_style));
    }

    /// Action for the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Record the pointer position; returns true when the hovered area changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_index();
        self.pointer = Some((x, y));
        self.hovered_index() != before
    }

    /// Hover style for `action` if the pointer is currently over it.
    pub fn hover_style_for(&self, action: ClickAction) -> Option<Style> {
        let area = self.areas.get(self.hovered_index()?)?;
        if area.action == action {
            area.hover_style
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn hovered_index(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.find_index(x, y)
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas.iter().rposition(|area| area.contains(x, y))
    }
}
