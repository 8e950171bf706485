//! Style hint policy.
//!
//! Mostly a fixed table of behavioral answers the host queries once per
//! widget. Three hints are computed: the combo popup depends on
//! editability, the table grid color on the palette, and the window-frame
//! hit mask carves stepped notches out of the two top corners.

use vello::kurbo::Rect;
use vello::peniko::Color;

use crate::config::StyleConfig;
use crate::palette::{darker, Palette};
use crate::region::Region;
use crate::request::{ComboBoxOpt, Payload};

/// Behavioral questions the host can ask the style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleHint {
    /// Sliders snap to the nearest value on release.
    SliderSnapToValue,
    /// Alt-key navigation activates the menu bar.
    MenuBarAltKeyNavigation,
    /// Combo popups track the mouse without a press.
    ComboBoxListMouseTracking,
    /// Dragging stops when the pointer leaves the slider.
    SliderStopMouseOverSlider,
    /// Middle click jumps the scrollbar to the position.
    ScrollBarMiddleClickAbsolutePosition,
    /// Disabled text is etched.
    EtchDisabledText,
    /// Title bars auto-raise on hover.
    TitleBarAutoRaise,
    /// Title bars draw no border.
    TitleBarNoBorder,
    /// Item selection covers the decoration.
    ItemViewShowDecorationSelected,
    /// Arrow keys enter child items.
    ItemViewArrowKeysNavigateIntoChildren,
    /// Selection color changes with focus.
    ItemViewChangeHighlightOnFocus,
    /// Menu bar tracks the mouse.
    MenuBarMouseTracking,
    /// Menus track the mouse.
    MenuMouseTracking,
    /// Menus support section separators with text.
    MenuSupportsSections,
    /// Selected tool box page title is bold.
    ToolBoxSelectedPageTitleBold,
    /// Scroll view frame only surrounds the contents.
    ScrollViewFrameOnlyAroundContents,
    /// Menus keep disabled items active.
    MenuAllowActiveAndDisabled,
    /// Extra space below the menu bar.
    MainWindowSpaceBelowMenuBar,
    /// Message box buttons are centered.
    MessageBoxCenterButtons,
    /// Rubber bands use a shape mask.
    RubberBandMask,
    /// Scrollbars are transient overlays.
    ScrollBarTransient,
    /// Combo boxes open a popup menu instead of a dropdown list.
    ComboBoxPopup,
    /// Grid line color of table views.
    TableGridLineColor,
    /// Delay before a submenu opens, in milliseconds.
    MenuSubMenuPopupDelay,
    /// Hit mask of frameless window decorations.
    WindowFrameMask,
    /// Popup menus need a translucent surface.
    MenuTranslucentBackground,
}

/// Typed answer to a [StyleHint] query.
#[derive(Debug, Clone, PartialEq)]
pub enum HintValue {
    /// Yes/no answer.
    Bool(bool),
    /// Numeric answer.
    Int(i64),
    /// Color answer.
    Color(Color),
    /// Region answer (hit masks).
    Region(Region),
}

/// Per-query context for the computed hints.
#[derive(Debug, Clone, Copy, Default)]
pub struct HintQuery<'a> {
    /// Rectangle the hint applies to (window frame masks).
    pub rect: Rect,
    /// Palette (grid line color).
    pub palette: Option<&'a Palette>,
    /// Element payload (combo editability).
    pub payload: Payload<'a>,
}

/// Answer a hint, or `None` when the style has no opinion and the host
/// should fall back to its default.
pub fn style_hint(
    hint: StyleHint,
    query: Option<&HintQuery>,
    config: &StyleConfig,
) -> Option<HintValue> {
    use StyleHint::*;
    let answer = match hint {
        SliderSnapToValue
        | MenuBarAltKeyNavigation
        | ComboBoxListMouseTracking
        | SliderStopMouseOverSlider
        | ScrollBarMiddleClickAbsolutePosition
        | EtchDisabledText
        | TitleBarAutoRaise
        | TitleBarNoBorder
        | ItemViewShowDecorationSelected
        | ItemViewArrowKeysNavigateIntoChildren
        | ItemViewChangeHighlightOnFocus
        | MenuBarMouseTracking
        | MenuMouseTracking
        | MenuSupportsSections
        | MenuTranslucentBackground => HintValue::Bool(true),

        ToolBoxSelectedPageTitleBold
        | ScrollViewFrameOnlyAroundContents
        | MenuAllowActiveAndDisabled
        | MainWindowSpaceBelowMenuBar
        | MessageBoxCenterButtons
        | RubberBandMask => HintValue::Bool(false),

        ScrollBarTransient => HintValue::Bool(config.transient_scroll_bars),

        ComboBoxPopup => match query.map(|q| q.payload) {
            Some(Payload::ComboBox(ComboBoxOpt { editable, .. })) => {
                HintValue::Bool(!editable)
            }
            _ => HintValue::Bool(false),
        },

        TableGridLineColor => {
            let palette = query.and_then(|q| q.palette)?;
            HintValue::Color(darker(palette.window, 120))
        }

        MenuSubMenuPopupDelay => HintValue::Int(225),

        WindowFrameMask => {
            let rect = query?.rect;
            HintValue::Region(window_frame_mask(rect))
        }
    };
    Some(answer)
}

/// Full-rect region minus four stepped notches per top corner, matching
/// the rounded silhouette of the window frame.
fn window_frame_mask(rect: Rect) -> Region {
    let mut region = Region::from_rect(rect);
    let (l, t, r) = (rect.x0, rect.y0, rect.x1);

    // Left corner steps, widest at the very top.
    region.subtract_rect(Rect::new(l, t, l + 5.0, t + 1.0));
    region.subtract_rect(Rect::new(l, t + 1.0, l + 3.0, t + 2.0));
    region.subtract_rect(Rect::new(l, t + 2.0, l + 2.0, t + 3.0));
    region.subtract_rect(Rect::new(l, t + 3.0, l + 1.0, t + 5.0));

    // Right corner, mirrored.
    region.subtract_rect(Rect::new(r - 5.0, t, r, t + 1.0));
    region.subtract_rect(Rect::new(r - 3.0, t + 1.0, r, t + 2.0));
    region.subtract_rect(Rect::new(r - 2.0, t + 2.0, r, t + 3.0));
    region.subtract_rect(Rect::new(r - 1.0, t + 3.0, r, t + 5.0));

    region
}
