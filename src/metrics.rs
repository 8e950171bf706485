//! Pixel metric lookup table.
//!
//! Fixed per-style measurements the host queries when laying widgets out.
//! Values depending on config (menu margins, splitter width) are computed
//! from [StyleConfig]; everything else is a constant. Metrics this style has
//! no opinion about return `None` so the host falls back to its defaults.

use crate::config::StyleConfig;

/// Measurements the host can query from the style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelMetric {
    /// Gap between a slider groove and its tick marks.
    SliderTickmarkOffset,
    /// Padding inside header sections.
    HeaderMargin,
    /// Frame width of tooltip labels.
    ToolTipLabelFrameWidth,
    /// Extra outline of default buttons.
    ButtonDefaultIndicator,
    /// Horizontal label shift of pressed buttons.
    ButtonShiftHorizontal,
    /// Vertical label shift of pressed buttons.
    ButtonShiftVertical,
    /// Icon size in message boxes.
    MessageBoxIconSize,
    /// Icon size in list views.
    ListViewIconSize,
    /// Gap between dialog button rows.
    DialogButtonsSeparator,
    /// Minimum scrollbar slider length.
    ScrollBarSliderMin,
    /// Title bar height.
    TitleBarHeight,
    /// Scrollbar thickness.
    ScrollBarExtent,
    /// Slider handle thickness.
    SliderThickness,
    /// Slider handle length.
    SliderLength,
    /// Margin around dock titles.
    DockWidgetTitleMargin,
    /// Spin box frame width.
    SpinBoxFrameWidth,
    /// Vertical popup menu margin.
    MenuVMargin,
    /// Horizontal popup menu margin.
    MenuHMargin,
    /// Popup menu panel border width.
    MenuPanelWidth,
    /// Gap between menu bar items.
    MenuBarItemSpacing,
    /// Vertical menu bar margin.
    MenuBarVMargin,
    /// Horizontal menu bar margin.
    MenuBarHMargin,
    /// Menu bar panel border width.
    MenuBarPanelWidth,
    /// Toolbar drag handle extent.
    ToolBarHandleExtent,
    /// Gap between toolbar items.
    ToolBarItemSpacing,
    /// Toolbar frame width.
    ToolBarFrameWidth,
    /// Margin around toolbar items.
    ToolBarItemMargin,
    /// Small icon size.
    SmallIconSize,
    /// Button icon size.
    ButtonIconSize,
    /// Margin around dock title buttons.
    DockWidgetTitleBarButtonMargin,
    /// Title bar button size.
    TitleBarButtonSize,
    /// Tab close button width.
    TabCloseIndicatorWidth,
    /// Tab close button height.
    TabCloseIndicatorHeight,
    /// Vertical padding inside tabs.
    TabBarTabVSpace,
    /// Overlap between adjacent tabs.
    TabBarTabOverlap,
    /// Overlap between tab bar and pane.
    TabBarBaseOverlap,
    /// Horizontal overlap of cascading submenus.
    SubMenuOverlap,
    /// Dock resize handle extent.
    DockWidgetHandleExtent,
    /// Splitter handle thickness.
    SplitterWidth,
    /// Checkbox indicator height.
    IndicatorHeight,
    /// Checkbox indicator width.
    IndicatorWidth,
    /// Radio indicator height.
    ExclusiveIndicatorHeight,
    /// Radio indicator width.
    ExclusiveIndicatorWidth,
    /// Gap between a scroll view and its scrollbars.
    ScrollViewScrollBarSpacing,
    /// Scrollbar overlap over the viewport (transient bars).
    ScrollViewScrollBarOverlap,
    /// Default frame width.
    DefaultFrameWidth,
}

/// Metric value, or `None` when the style defers to the host default.
pub fn pixel_metric(metric: PixelMetric, config: &StyleConfig) -> Option<f64> {
    use PixelMetric::*;
    let val = match metric {
        SliderTickmarkOffset => 4.0,
        HeaderMargin | ToolTipLabelFrameWidth => 2.0,
        ButtonDefaultIndicator | ButtonShiftHorizontal | ButtonShiftVertical => 0.0,
        MessageBoxIconSize => 48.0,
        ListViewIconSize => 24.0,
        DialogButtonsSeparator | ScrollBarSliderMin => 26.0,
        TitleBarHeight => 24.0,
        ScrollBarExtent => 14.0,
        SliderThickness | SliderLength => 15.0,
        DockWidgetTitleMargin => 1.0,
        SpinBoxFrameWidth => 3.0,
        MenuVMargin | MenuHMargin => config.frame_radius + 5.0,
        MenuPanelWidth => 0.0,
        MenuBarItemSpacing => 6.0,
        MenuBarVMargin | MenuBarHMargin | MenuBarPanelWidth => 0.0,
        ToolBarHandleExtent => 9.0,
        ToolBarItemSpacing => 1.0,
        ToolBarFrameWidth | ToolBarItemMargin => 2.0,
        SmallIconSize | ButtonIconSize => 16.0,
        DockWidgetTitleBarButtonMargin => 2.0,
        TitleBarButtonSize => 19.0,
        TabCloseIndicatorWidth | TabCloseIndicatorHeight => 20.0,
        TabBarTabVSpace => 12.0,
        TabBarTabOverlap => 1.0,
        TabBarBaseOverlap => 2.0,
        SubMenuOverlap => -1.0,
        DockWidgetHandleExtent | SplitterWidth => config.splitter_width,
        IndicatorHeight | IndicatorWidth | ExclusiveIndicatorHeight | ExclusiveIndicatorWidth => {
            14.0
        }
        ScrollViewScrollBarSpacing => 0.0,
        ScrollViewScrollBarOverlap => {
            if config.transient_scroll_bars {
                14.0
            } else {
                0.0
            }
        }
        DefaultFrameWidth => 1.0,
    };
    Some(val)
}
