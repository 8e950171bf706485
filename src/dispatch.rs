//! # Element Dispatch
//!
//! The [Style] facade the host talks to. Routing is table-driven: one
//! `HashMap` from [Element] to a paint function pointer, built once at
//! construction, so adding an element is one enum variant and one table
//! entry. The style itself is stateless; everything varying per call
//! travels in the request.

use std::collections::HashMap;

use log::debug;
use vello::kurbo::{Rect, Size};

use crate::config::StyleConfig;
use crate::geometry::{self, adjusted};
use crate::hints::{style_hint, HintQuery, HintValue, StyleHint};
use crate::metrics::{pixel_metric, PixelMetric};
use crate::paint;
use crate::palette::Palette;
use crate::request::{
    ComplexControl, DrawRequest, Element, Payload, SubControl, SubControlQuery, SubElement,
    WidgetAttribute, WidgetKind,
};
use crate::size::{size_from_contents, ContentsType, SizeQuery};
use crate::surface::Painter;

pub use crate::paint::DrawOutcome;

/// One paint routine in the dispatch table.
type DrawFn = fn(&StyleConfig, &DrawRequest, &mut Painter) -> DrawOutcome;

/// Attribute changes a polish/unpolish pass asks the host to make.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolishActions {
    /// Attributes to set (`true`) or clear (`false`).
    pub attributes: Vec<(WidgetAttribute, bool)>,
    /// Widget should be registered with the blur scheduler.
    pub register_blur: bool,
    /// Widget should be removed from the blur scheduler.
    pub unregister_blur: bool,
}

/// The style engine: dispatch tables plus configuration.
pub struct Style {
    config: StyleConfig,
    draw_table: HashMap<Element, DrawFn>,
}

impl Style {
    /// Build a style with the given configuration.
    pub fn new(config: StyleConfig) -> Self {
        Self {
            config,
            draw_table: draw_table(),
        }
    }

    /// Build a style configured from the environment.
    pub fn from_env() -> Self {
        Self::new(StyleConfig::from_env_or_default())
    }

    /// The active configuration.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// The built-in light palette.
    pub fn standard_palette(&self) -> Palette {
        Palette::standard()
    }

    /// Paint one element.
    pub fn draw_element(
        &self,
        element: Element,
        request: &DrawRequest,
        painter: &mut Painter,
    ) -> DrawOutcome {
        match self.draw_table.get(&element) {
            Some(draw) => draw(&self.config, request, painter),
            None => {
                debug!("no paint routine for {element:?}, delegating");
                DrawOutcome::Delegate
            }
        }
    }

    /// Resolve a named part of a composite control.
    pub fn sub_control_rect(
        &self,
        control: ComplexControl,
        query: &SubControlQuery,
        sub: SubControl,
    ) -> Option<Rect> {
        match control {
            ComplexControl::ScrollBar => geometry::scrollbar::sub_control_rect(query, sub),
            ComplexControl::SpinBox => geometry::spinbox::sub_control_rect(query, sub),
            ComplexControl::GroupBox => geometry::groupbox::sub_control_rect(query, sub),
            ComplexControl::ComboBox => geometry::combobox::sub_control_rect(query, sub),
            ComplexControl::Slider => geometry::slider::sub_control_rect(query, sub),
            ComplexControl::TitleBar => geometry::titlebar::sub_control_rect(query, sub),
        }
    }

    /// Resolve a simple element sub-rectangle.
    pub fn sub_element_rect(&self, element: SubElement, request: &DrawRequest) -> Option<Rect> {
        let rect = request.rect;
        match element {
            SubElement::ProgressGroove
            | SubElement::ProgressContents
            | SubElement::ProgressLabel => Some(rect),
            SubElement::PushButtonFocusRect => Some(adjusted(rect, 0.0, 1.0, 0.0, -1.0)),
            SubElement::DockTitleText => {
                let vertical = matches!(
                    request.payload,
                    Payload::DockTitle(opt) if opt.vertical
                );
                Some(if vertical {
                    adjusted(rect, 0.0, 0.0, 0.0, -4.0)
                } else if request.right_to_left() {
                    adjusted(rect, 0.0, 0.0, -4.0, 0.0)
                } else {
                    adjusted(rect, 4.0, 0.0, 0.0, 0.0)
                })
            }
            SubElement::TabText => geometry::tabs::tab_layout(request).map(|l| l.text),
            SubElement::TabIcon => geometry::tabs::tab_layout(request).and_then(|l| l.icon),
        }
    }

    /// Look up a fixed measurement.
    pub fn pixel_metric(&self, metric: PixelMetric) -> Option<f64> {
        pixel_metric(metric, &self.config)
    }

    /// Answer a behavioral hint.
    pub fn style_hint(&self, hint: StyleHint, query: Option<&HintQuery>) -> Option<HintValue> {
        style_hint(hint, query, &self.config)
    }

    /// Adjust a measured content size by the style's chrome.
    pub fn size_from_contents(
        &self,
        contents: ContentsType,
        size: Size,
        query: &SizeQuery,
    ) -> Size {
        size_from_contents(contents, size, query, &self.config)
    }

    /// Attribute changes to apply when a widget adopts this style.
    ///
    /// Interactive controls get hover tracking and lose the opaque-paint
    /// optimization; menus become translucent and join the blur scheduler,
    /// as do widgets opting in via `wants_blur_behind`.
    pub fn polish(&self, kind: WidgetKind, wants_blur_behind: bool) -> PolishActions {
        let mut actions = PolishActions::default();
        if hover_tracked(kind) {
            actions.attributes.push((WidgetAttribute::HoverTracking, true));
            actions.attributes.push((WidgetAttribute::OpaquePaint, false));
        }
        if kind == WidgetKind::Menu {
            actions.attributes.push((WidgetAttribute::Translucent, true));
        }
        if self.config.blur_enabled && (kind == WidgetKind::Menu || wants_blur_behind) {
            actions.register_blur = true;
        }
        actions
    }

    /// Attribute changes to apply when a widget leaves this style.
    pub fn unpolish(&self, kind: WidgetKind, wants_blur_behind: bool) -> PolishActions {
        let mut actions = PolishActions::default();
        if hover_tracked(kind) {
            actions.attributes.push((WidgetAttribute::HoverTracking, false));
        }
        if kind == WidgetKind::Menu || wants_blur_behind {
            actions.unregister_blur = true;
        }
        actions
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

fn hover_tracked(kind: WidgetKind) -> bool {
    matches!(
        kind,
        WidgetKind::Button
            | WidgetKind::ComboBox
            | WidgetKind::ProgressBar
            | WidgetKind::ScrollBar
            | WidgetKind::SplitterHandle
            | WidgetKind::Slider
            | WidgetKind::SpinBox
            | WidgetKind::TabBar
    )
}

fn draw_table() -> HashMap<Element, DrawFn> {
    use Element::*;
    let mut table: HashMap<Element, DrawFn> = HashMap::new();
    table.insert(ButtonPanel, paint::button::button_panel as DrawFn);
    table.insert(ToolButtonPanel, paint::button::tool_button_panel);
    table.insert(LineEditFrame, paint::button::line_edit_frame);
    table.insert(FocusRect, paint::button::focus_rect);
    table.insert(CheckBox, paint::indicator::check_box);
    table.insert(RadioButton, paint::indicator::radio_button);
    table.insert(HeaderArrow, paint::indicator::header_arrow);
    table.insert(Branch, paint::indicator::branch);
    table.insert(MenuFrame, paint::menu::menu_frame);
    table.insert(MenuItem, paint::menu::menu_item);
    table.insert(MenuBarItem, paint::menu::menu_bar_item);
    table.insert(MenuBarEmptyArea, paint::menu::menu_bar_empty_area);
    table.insert(ScrollBarSlider, paint::scrollbar::slider);
    table.insert(Splitter, paint::grips::splitter);
    table.insert(DockResizeHandle, paint::grips::dock_resize_handle);
    table.insert(SizeGrip, paint::grips::size_grip);
    table.insert(ToolBarHandle, paint::grips::tool_bar_handle);
    table.insert(DockFrame, paint::item::dock_frame);
    table.insert(DockTitle, paint::item::dock_title);
    table.insert(WindowFrame, paint::item::window_frame);
    table.insert(ProgressGroove, paint::progress::groove);
    table.insert(ProgressContents, paint::progress::contents);
    table.insert(ProgressLabel, paint::progress::label);
    table.insert(TabShape, paint::tabs::tab_shape);
    table.insert(TabLabel, paint::tabs::tab_label);
    table.insert(TabWidgetFrame, paint::tabs::tab_widget_frame);
    table.insert(ItemRow, paint::item::item_row);
    table.insert(ItemDropIndicator, paint::item::item_drop_indicator);
    table.insert(RubberBand, paint::item::rubber_band);
    table.insert(HeaderSection, paint::item::header_section);
    table.insert(ComboBoxLabel, paint::item::combo_box_label);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{ProgressOpt, StateFlags};
    use crate::surface::record::{Op, Recorder};

    #[test]
    fn every_element_has_a_routine() {
        let table = draw_table();
        let all = [
            Element::ButtonPanel,
            Element::ToolButtonPanel,
            Element::CheckBox,
            Element::RadioButton,
            Element::LineEditFrame,
            Element::FocusRect,
            Element::Branch,
            Element::HeaderSection,
            Element::HeaderArrow,
            Element::MenuFrame,
            Element::MenuItem,
            Element::MenuBarItem,
            Element::MenuBarEmptyArea,
            Element::ScrollBarSlider,
            Element::Splitter,
            Element::DockResizeHandle,
            Element::DockFrame,
            Element::DockTitle,
            Element::ProgressGroove,
            Element::ProgressContents,
            Element::ProgressLabel,
            Element::TabShape,
            Element::TabLabel,
            Element::TabWidgetFrame,
            Element::ItemRow,
            Element::ItemDropIndicator,
            Element::RubberBand,
            Element::SizeGrip,
            Element::ToolBarHandle,
            Element::WindowFrame,
            Element::ComboBoxLabel,
        ];
        for element in all {
            assert!(table.contains_key(&element), "missing {element:?}");
        }
    }

    #[test]
    fn mismatched_payload_routes_to_delegate() {
        let style = Style::default();
        let palette = Palette::standard();
        // A progress element with no progress payload.
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 100.0, 20.0), &palette);
        let mut rec = Recorder::default();
        let mut painter = Painter::new(&mut rec);
        let outcome = style.draw_element(Element::ProgressContents, &request, &mut painter);
        assert_eq!(outcome, DrawOutcome::Delegate);
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn handled_element_paints() {
        let style = Style::default();
        let palette = Palette::standard();
        let mut request = DrawRequest::new(Rect::new(0.0, 0.0, 200.0, 20.0), &palette);
        request.payload = Payload::Progress(ProgressOpt {
            minimum: 0,
            maximum: 100,
            progress: 40,
            ..ProgressOpt::default()
        });
        let mut rec = Recorder::default();
        let mut painter = Painter::new(&mut rec);
        let outcome = style.draw_element(Element::ProgressContents, &request, &mut painter);
        assert_eq!(outcome, DrawOutcome::Handled);
        assert!(rec.ops.iter().any(|op| matches!(op, Op::Fill { .. })));
    }

    #[test]
    fn progress_sub_elements_are_the_full_rect() {
        let style = Style::default();
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::new(0.0, 0.0, 180.0, 22.0), &palette);
        for sub in [
            SubElement::ProgressGroove,
            SubElement::ProgressContents,
            SubElement::ProgressLabel,
        ] {
            assert_eq!(style.sub_element_rect(sub, &request), Some(request.rect));
        }
    }

    #[test]
    fn scrollbar_sub_controls_route_through_geometry() {
        let style = Style::default();
        let palette = Palette::standard();
        let mut query = SubControlQuery::new(Rect::new(0.0, 0.0, 14.0, 200.0), &palette);
        query.payload = Payload::Slider(crate::request::SliderOpt::default());
        let groove = style
            .sub_control_rect(ComplexControl::ScrollBar, &query, SubControl::ScrollBarGroove)
            .unwrap();
        assert_eq!(groove, query.rect);
        let sub_line = style
            .sub_control_rect(ComplexControl::ScrollBar, &query, SubControl::ScrollBarSubLine)
            .unwrap();
        assert_eq!(sub_line.area(), 0.0);
    }

    #[test]
    fn polish_gives_menus_translucency_and_blur() {
        let style = Style::default();
        let actions = style.polish(WidgetKind::Menu, false);
        assert!(actions.register_blur);
        assert!(actions
            .attributes
            .contains(&(WidgetAttribute::Translucent, true)));

        let undo = style.unpolish(WidgetKind::Menu, false);
        assert!(undo.unregister_blur);
    }

    #[test]
    fn polish_tracks_hover_on_interactive_controls() {
        let style = Style::default();
        for kind in [WidgetKind::ScrollBar, WidgetKind::TabBar] {
            let actions = style.polish(kind, false);
            assert!(actions
                .attributes
                .contains(&(WidgetAttribute::HoverTracking, true)));
            assert!(!actions.register_blur);
        }

        let plain = style.polish(WidgetKind::Generic, false);
        assert!(plain.attributes.is_empty());
    }

    #[test]
    fn generic_widget_can_opt_into_blur() {
        let style = Style::default();
        assert!(style.polish(WidgetKind::Generic, true).register_blur);
    }

    #[test]
    fn state_flags_do_not_leak_between_requests() {
        let palette = Palette::standard();
        let request = DrawRequest::new(Rect::ZERO, &palette);
        assert_eq!(request.state, StateFlags::ENABLED);
    }
}
