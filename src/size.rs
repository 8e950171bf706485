//! Content-size adjustments.
//!
//! The host measures a widget's natural contents and passes the result
//! here; the style adds its own chrome (frames, margins, minimum widths)
//! on top. Content types with no opinion return the size unchanged.

use vello::kurbo::Size;

use crate::config::StyleConfig;
use crate::metrics::{pixel_metric, PixelMetric};
use crate::request::{MenuItemKind, Payload};

const MENU_ARROW_H_MARGIN: f64 = 6.0;
const MENU_CHECK_MARK_WIDTH: f64 = 12.0;
const MENU_RIGHT_BORDER: f64 = 15.0;
const MENU_TAB_SPACING: f64 = 20.0;
const MENU_ITEM_MIN_WIDTH: f64 = 120.0;
const GROUP_BOX_TOP_MARGIN: f64 = 3.0;
const TAB_BAR_MARGIN: f64 = 3.0;
const PUSH_BUTTON_MIN_WIDTH: f64 = 80.0;

/// Widget categories whose preferred size the style adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentsType {
    /// Push button.
    PushButton,
    /// Group box including its label band.
    GroupBox,
    /// Radio button row.
    RadioButton,
    /// Checkbox row.
    CheckBox,
    /// Tool button.
    ToolButton,
    /// Spin box.
    SpinBox,
    /// Combo box.
    ComboBox,
    /// Single-line edit.
    LineEdit,
    /// Menu bar entry.
    MenuBarItem,
    /// Popup menu entry.
    MenuItem,
    /// Window size grip.
    SizeGrip,
    /// One tab in a tab bar.
    TabBarTab,
    /// MDI window controls.
    MdiControls,
}

/// Extra measurement context for [size_from_contents].
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeQuery<'a> {
    /// Element payload matching the contents type, when one applies.
    pub payload: Payload<'a>,
    /// Widget shows non-empty text.
    pub has_text: bool,
    /// Text contains a shortcut column (menu items).
    pub has_shortcut: bool,
    /// Line height of the current font.
    pub font_height: f64,
    /// Icon height, 0 when there is no icon.
    pub icon_height: f64,
}

/// Grow or shrink a measured content size by the style's chrome.
pub fn size_from_contents(
    contents: ContentsType,
    size: Size,
    query: &SizeQuery,
    config: &StyleConfig,
) -> Size {
    let mut new = size;
    match contents {
        ContentsType::PushButton => {
            if query.has_text && new.width < PUSH_BUTTON_MIN_WIDTH {
                new.width = PUSH_BUTTON_MIN_WIDTH;
            }
            if query.icon_height > 16.0 {
                new.height -= 2.0;
            }
        }
        ContentsType::GroupBox => {
            let indicator = pixel_metric(PixelMetric::ExclusiveIndicatorHeight, config)
                .unwrap_or_default();
            let top = indicator.max(query.font_height) + GROUP_BOX_TOP_MARGIN;
            new.width += 10.0;
            new.height += top;
        }
        ContentsType::RadioButton | ContentsType::CheckBox => new.height += 1.0,
        ContentsType::ToolButton => {
            new.width += 2.0;
            new.height += 2.0;
        }
        ContentsType::SpinBox => new.height -= 3.0,
        ContentsType::ComboBox => {
            new.width += 2.0;
            new.height += 4.0;
        }
        ContentsType::LineEdit => new.height += 4.0,
        ContentsType::MenuBarItem => {
            new.width += 8.0;
            new.height += 5.0;
        }
        ContentsType::MenuItem => {
            let opt = match query.payload {
                Payload::MenuItem(opt) => opt,
                _ => Default::default(),
            };
            let mut w = new.width;
            if query.has_shortcut {
                w += MENU_TAB_SPACING;
            } else if opt.item_kind == MenuItemKind::SubMenu {
                w += 2.0 * MENU_ARROW_H_MARGIN;
            }
            w += opt.max_icon_width.max(MENU_CHECK_MARK_WIDTH);
            w += MENU_RIGHT_BORDER + 10.0;

            if opt.item_kind == MenuItemKind::Separator && query.has_text {
                new.height = query.font_height;
            }
            new.width = (w + 12.0).max(MENU_ITEM_MIN_WIDTH);
        }
        ContentsType::SizeGrip => {
            new.width += 4.0;
            new.height += 4.0;
        }
        ContentsType::TabBarTab => {
            new.width += TAB_BAR_MARGIN;
            new.height += TAB_BAR_MARGIN;
        }
        ContentsType::MdiControls => new.width -= 1.0,
    }
    new
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::MenuItemOpt;

    #[test]
    fn push_buttons_have_a_minimum_width() {
        let config = StyleConfig::default();
        let query = SizeQuery {
            has_text: true,
            ..SizeQuery::default()
        };
        let out = size_from_contents(
            ContentsType::PushButton,
            Size::new(42.0, 24.0),
            &query,
            &config,
        );
        assert_eq!(out.width, 80.0);
        // Already-wide buttons keep their size.
        let wide = size_from_contents(
            ContentsType::PushButton,
            Size::new(140.0, 24.0),
            &query,
            &config,
        );
        assert_eq!(wide.width, 140.0);
    }

    #[test]
    fn menu_item_width_reserves_check_column() {
        let config = StyleConfig::default();
        let query = SizeQuery {
            payload: Payload::MenuItem(MenuItemOpt {
                max_icon_width: 24.0,
                ..MenuItemOpt::default()
            }),
            ..SizeQuery::default()
        };
        let out = size_from_contents(
            ContentsType::MenuItem,
            Size::new(100.0, 22.0),
            &query,
            &config,
        );
        // text + icon column (24) + right border (25) + padding (12).
        assert_eq!(out.width, 161.0);
    }

    #[test]
    fn menu_item_enforces_minimum_width() {
        let config = StyleConfig::default();
        let out = size_from_contents(
            ContentsType::MenuItem,
            Size::new(10.0, 22.0),
            &SizeQuery::default(),
            &config,
        );
        assert_eq!(out.width, MENU_ITEM_MIN_WIDTH);
    }

    #[test]
    fn text_separator_takes_the_font_height() {
        let config = StyleConfig::default();
        let query = SizeQuery {
            payload: Payload::MenuItem(MenuItemOpt {
                item_kind: MenuItemKind::Separator,
                ..MenuItemOpt::default()
            }),
            has_text: true,
            font_height: 17.0,
            ..SizeQuery::default()
        };
        let out = size_from_contents(
            ContentsType::MenuItem,
            Size::new(100.0, 8.0),
            &query,
            &config,
        );
        assert_eq!(out.height, 17.0);
    }

    #[test]
    fn group_box_adds_label_band() {
        let config = StyleConfig::default();
        let query = SizeQuery {
            font_height: 18.0,
            ..SizeQuery::default()
        };
        let out = size_from_contents(
            ContentsType::GroupBox,
            Size::new(200.0, 100.0),
            &query,
            &config,
        );
        assert_eq!(out.width, 210.0);
        assert_eq!(out.height, 121.0);
    }

    #[test]
    fn spin_box_shrinks_vertically() {
        let config = StyleConfig::default();
        let out = size_from_contents(
            ContentsType::SpinBox,
            Size::new(60.0, 27.0),
            &SizeQuery::default(),
            &config,
        );
        assert_eq!(out.height, 24.0);
    }
}
