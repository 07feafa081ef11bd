//=========================================================================
// Layout
//=========================================================================
//
// Vertical, horizontally centered stack shared by every menu scene:
//
//   x = (screen_width - w) / 2
//   y = offset_y + index · (h + GAP)
//
//=========================================================================

use crate::core::{Command, SceneContext, SceneId};
use crate::render::{Color, Font, Point, Rect};
use crate::ui::{Button, ComponentBase, Text};

//=== Constants ===========================================================

pub const BUTTON_SIZE: (u32, u32) = (200, 50);
pub const GAP: u32 = 10;

/// Distance from the top of the screen to the first slot.
pub const OFFSET_Y: i32 = 100;

pub const FONT: Font = Font::new(24);
pub const BUTTON_COLOR: Color = Color::BLUE;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const BACKGROUND: Color = Color::BLACK;

/// Slot of the "back" button in every submenu.
pub const BACK_INDEX: usize = 4;

//=== Positioning =========================================================

/// Top-left corner of the widget of `size` in stack slot `index`.
pub fn calculate_position(screen_width: u32, size: (u32, u32), index: usize, offset_y: i32) -> Point {
    let (w, h) = size;
    let x = (screen_width as i32 - w as i32) / 2;
    let y = offset_y + index as i32 * (h + GAP) as i32;
    (x, y)
}

/// Rect of a button-sized widget in stack slot `index`.
pub fn slot(ctx: &SceneContext<'_>, index: usize) -> Rect {
    let position = calculate_position(ctx.screen_width(), BUTTON_SIZE, index, OFFSET_Y);
    Rect::from_parts(position, BUTTON_SIZE)
}

//=== Widget Builders =====================================================

pub fn button(
    ctx: &SceneContext<'_>,
    scene: SceneId,
    name: &str,
    text: &str,
    action: Command,
    index: usize,
) -> Button {
    let base = ComponentBase::new(name, scene, slot(ctx, index), BUTTON_COLOR).with_debug(ctx.debug());
    Button::new(base, text, FONT, TEXT_COLOR).with_action(action)
}

pub fn label(ctx: &SceneContext<'_>, scene: SceneId, name: &str, text: &str, index: usize) -> Text {
    let base = ComponentBase::new(name, scene, slot(ctx, index), TEXT_COLOR).with_debug(ctx.debug());
    Text::new(base, text, FONT, TEXT_COLOR)
}

/// The "back" button of a submenu returning to `target`.
pub fn back_button(ctx: &SceneContext<'_>, scene: SceneId, target: SceneId) -> Button {
    button(
        ctx,
        scene,
        "back_btn",
        ctx.text("global", "back"),
        Command::ChangeScene(target),
        BACK_INDEX,
    )
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_position_matches_reference_layout() {
        assert_eq!(calculate_position(800, (200, 50), 2, 100), (300, 220));
    }

    #[test]
    fn first_slot_sits_at_offset() {
        assert_eq!(calculate_position(800, (200, 50), 0, 100), (300, 100));
        assert_eq!(calculate_position(1024, (100, 20), 1, 0), (462, 30));
    }

    #[test]
    fn wider_than_screen_goes_negative() {
        assert_eq!(calculate_position(100, (200, 50), 0, 0), (-50, 0));
    }
}
