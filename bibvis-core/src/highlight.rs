//! Highlight states and the pure mapping from state to draw style.
//!
//! Transitions are driven entirely by the host (pointer hover/click and
//! cross-filtering from the other views); the simulation core only reads
//! the current state when resolving styles.

/// An sRGB color, kept independent of any UI toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const LIGHT_GRAY: Color = Color::rgb(0xd3, 0xd3, 0xd3);
const SLATE: Color = Color::rgb(0x47, 0x55, 0x69);
const RED: Color = Color::rgb(0xdc, 0x26, 0x26);
const DARK_RED: Color = Color::rgb(0x8b, 0x00, 0x00);
const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
const MUTED_GRAY: Color = Color::rgb(0xbd, 0xbd, 0xbd);

/// Outline color of an unhighlighted set.
const BASE: Color = Color::rgb(0x33, 0x41, 0x55);
/// Outline color of a hovered set.
const ACCENT: Color = RED;

/// Font size of set title labels.
pub const TITLE_FONT_SIZE: f32 = 20.0;

/// Highlight state of a node.
///
/// `Inactive` marks entries filtered out by a selection in another view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeHighlight {
    #[default]
    None,
    Hover,
    Selected,
    Inactive,
}

/// Highlight state of a set.
///
/// Sets are never filtered out, so there is no `Inactive` variant here;
/// keeping the two enums separate makes the style match exhaustive
/// without a silent fallback arm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SetHighlight {
    #[default]
    None,
    Hover,
    Selected,
}

/// Fill and stroke pair for a node circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeStyle {
    pub fill: Color,
    pub stroke: Color,
}

/// Outline color and line width shared by a set's circle, leader line,
/// and title text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SetStyle {
    pub color: Color,
    pub line_width: f32,
}

impl NodeHighlight {
    /// Resolves the draw style for this state.
    ///
    /// `Selected` intentionally renders the same as `None`; selection is
    /// communicated through the table and timeline views, not the node
    /// color.
    pub fn style(self) -> NodeStyle {
        match self {
            NodeHighlight::None | NodeHighlight::Selected => NodeStyle {
                fill: LIGHT_GRAY,
                stroke: SLATE,
            },
            NodeHighlight::Hover => NodeStyle {
                fill: RED,
                stroke: DARK_RED,
            },
            NodeHighlight::Inactive => NodeStyle {
                fill: WHITE,
                stroke: MUTED_GRAY,
            },
        }
    }
}

impl SetHighlight {
    /// Resolves the outline style for this state.
    pub fn style(self) -> SetStyle {
        match self {
            SetHighlight::None => SetStyle {
                color: BASE,
                line_width: 1.0,
            },
            SetHighlight::Hover => SetStyle {
                color: ACCENT,
                line_width: 5.0,
            },
            SetHighlight::Selected => SetStyle {
                color: BASE,
                line_width: 5.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_styles_are_pure_and_stable() {
        for state in [
            NodeHighlight::None,
            NodeHighlight::Hover,
            NodeHighlight::Selected,
            NodeHighlight::Inactive,
        ] {
            assert_eq!(state.style(), state.style());
        }
    }

    #[test]
    fn selected_node_renders_like_an_unhighlighted_one() {
        assert_eq!(NodeHighlight::Selected.style(), NodeHighlight::None.style());
        assert_ne!(NodeHighlight::Hover.style(), NodeHighlight::None.style());
        assert_ne!(NodeHighlight::Inactive.style(), NodeHighlight::None.style());
    }

    #[test]
    fn set_highlighting_changes_weight_and_hover_changes_color() {
        let none = SetHighlight::None.style();
        let hover = SetHighlight::Hover.style();
        let selected = SetHighlight::Selected.style();
        assert_eq!(none.line_width, 1.0);
        assert_eq!(hover.line_width, 5.0);
        assert_eq!(selected.line_width, 5.0);
        assert_eq!(selected.color, none.color);
        assert_ne!(hover.color, none.color);
    }
}
