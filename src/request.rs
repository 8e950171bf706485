//! # Draw Requests
//!
//! Value structures describing one paint or geometry request: the element
//! being drawn, its rectangle, state flags, palette and an optional
//! host-widget reference. All of these are transient; nothing here outlives
//! a single call into the style.
//!
//! The element payloads mirror the per-widget option structures of classic
//! desktop toolkits: a request claims an [Element] kind and carries a
//! [Payload] variant with the extra fields that kind needs. A mismatched
//! payload is not an error; handlers skip their custom drawing and report
//! [DrawOutcome::Delegate](crate::dispatch::DrawOutcome) so the host falls
//! back to its default rendering.

use bitflags::bitflags;
use vello::kurbo::{Rect, Size};

use crate::palette::Palette;
use crate::region::Region;

bitflags! {
    /// Boolean state of the element being drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StateFlags: u32 {
        /// Widget accepts input.
        const ENABLED = 1 << 0;
        /// Pointer is over the widget.
        const MOUSE_OVER = 1 << 1;
        /// Pressed / toggled down.
        const SUNKEN = 1 << 2;
        /// Checked on (checkboxes, radio buttons, menu checks).
        const ON = 1 << 3;
        /// Explicitly off.
        const OFF = 1 << 4;
        /// Tri-state indeterminate.
        const NO_CHANGE = 1 << 5;
        /// Widget owns keyboard focus.
        const HAS_FOCUS = 1 << 6;
        /// Focus was reached via keyboard navigation.
        const KEYBOARD_FOCUS_CHANGE = 1 << 7;
        /// Item/tab is selected.
        const SELECTED = 1 << 8;
        /// Window containing the widget is active.
        const ACTIVE = 1 << 9;
        /// Horizontal orientation (scrollbars, splitters, sliders).
        const HORIZONTAL = 1 << 10;
        /// Branch indicator: node is expanded.
        const OPEN = 1 << 11;
        /// Branch indicator: node has children.
        const CHILDREN = 1 << 12;
        /// Tool button auto-raises (flat until hovered).
        const AUTO_RAISE = 1 << 13;
    }
}

/// Text/layout direction of the host widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    /// Left-to-right layouts.
    #[default]
    LeftToRight,
    /// Right-to-left (mirrored) layouts.
    RightToLeft,
}

/// Closed set of visuals the style can be asked to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Push-button panel (background + outline).
    ButtonPanel,
    /// Tool-button panel; draws the button panel unless auto-raised.
    ToolButtonPanel,
    /// Checkbox indicator square.
    CheckBox,
    /// Radio button indicator circle.
    RadioButton,
    /// Line-edit frame.
    LineEditFrame,
    /// Keyboard focus outline.
    FocusRect,
    /// Tree-view branch indicator.
    Branch,
    /// Header section background.
    HeaderSection,
    /// Header sort indicator arrow.
    HeaderArrow,
    /// Popup menu frame with blur halo.
    MenuFrame,
    /// One item inside a popup menu.
    MenuItem,
    /// One item inside a menu bar.
    MenuBarItem,
    /// Unoccupied menu bar area.
    MenuBarEmptyArea,
    /// Scrollbar slider pill.
    ScrollBarSlider,
    /// Splitter handle grip.
    Splitter,
    /// Dock-widget resize handle.
    DockResizeHandle,
    /// Dock-widget frame.
    DockFrame,
    /// Dock-widget title bar.
    DockTitle,
    /// Progress bar groove.
    ProgressGroove,
    /// Progress bar fill (and indeterminate stripes).
    ProgressContents,
    /// Progress bar text overlay.
    ProgressLabel,
    /// Tab shape in a tab bar.
    TabShape,
    /// Tab text/icon area.
    TabLabel,
    /// Frame around a tab widget's page area.
    TabWidgetFrame,
    /// Item-view row background.
    ItemRow,
    /// Item-view drop indicator.
    ItemDropIndicator,
    /// Rubber-band selection rectangle.
    RubberBand,
    /// Window size grip.
    SizeGrip,
    /// Toolbar drag handle.
    ToolBarHandle,
    /// Top-level window frame.
    WindowFrame,
    /// Combo box label area (non-editable text).
    ComboBoxLabel,
}

/// Sub-rectangles queried through `sub_element_rect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubElement {
    /// Progress groove extent.
    ProgressGroove,
    /// Progress fill extent.
    ProgressContents,
    /// Progress label extent.
    ProgressLabel,
    /// Focus outline inside a push button.
    PushButtonFocusRect,
    /// Title text inside a dock title bar.
    DockTitleText,
    /// Text area of a tab.
    TabText,
    /// Icon area of a tab.
    TabIcon,
}

/// Composite widgets whose parts are resolved via `sub_control_rect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexControl {
    /// Scrollbar (groove/slider/page areas).
    ScrollBar,
    /// Spin box (edit field + step buttons).
    SpinBox,
    /// Group box (label band + contents).
    GroupBox,
    /// Combo box (edit field + arrow).
    ComboBox,
    /// Slider (groove + handle).
    Slider,
    /// Window title bar (buttons + label).
    TitleBar,
}

/// A named part of a [ComplexControl].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubControl {
    /// Scrollbar track between the step buttons.
    ScrollBarGroove,
    /// Scrollbar slider.
    ScrollBarSlider,
    /// Scrollbar step-up button (zero-sized in this style).
    ScrollBarSubLine,
    /// Scrollbar step-down button (zero-sized in this style).
    ScrollBarAddLine,
    /// Track before the slider.
    ScrollBarSubPage,
    /// Track after the slider.
    ScrollBarAddPage,
    /// Spin box increment button.
    SpinBoxUp,
    /// Spin box decrement button.
    SpinBoxDown,
    /// Spin box text field.
    SpinBoxEditField,
    /// Spin box outer frame.
    SpinBoxFrame,
    /// Group box label band.
    GroupBoxLabel,
    /// Group box checkbox.
    GroupBoxCheckBox,
    /// Group box content area.
    GroupBoxContents,
    /// Group box outer frame.
    GroupBoxFrame,
    /// Combo box drop-down arrow.
    ComboBoxArrow,
    /// Combo box text field.
    ComboBoxEditField,
    /// Slider groove.
    SliderGroove,
    /// Slider handle.
    SliderHandle,
    /// Title bar text area.
    TitleBarLabel,
    /// Title bar system menu button.
    TitleBarSysMenu,
    /// Title bar minimize button.
    TitleBarMinButton,
    /// Title bar maximize button.
    TitleBarMaxButton,
    /// Title bar restore button.
    TitleBarNormalButton,
    /// Title bar shade button.
    TitleBarShadeButton,
    /// Title bar unshade button.
    TitleBarUnshadeButton,
    /// Title bar context help button.
    TitleBarContextHelpButton,
    /// Title bar close button.
    TitleBarCloseButton,
}

/// Capability answer for "what kind of widget owns this request".
///
/// Resolved by the host; the style never introspects widget types itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetKind {
    /// Anything without special-cased behavior.
    #[default]
    Generic,
    /// Combo box.
    ComboBox,
    /// Popup menu.
    Menu,
    /// Tab bar.
    TabBar,
    /// Tooltip window.
    Tooltip,
    /// Dock title button.
    DockTitleButton,
    /// Internal popup container helper; excluded from blur handling.
    PopupContainer,
    /// Any button subclass.
    Button,
    /// Progress bar.
    ProgressBar,
    /// Scrollbar.
    ScrollBar,
    /// Splitter handle.
    SplitterHandle,
    /// Slider.
    Slider,
    /// Spin box.
    SpinBox,
}

/// Attributes the style toggles on widgets during polish/unpolish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAttribute {
    /// Deliver hover events and repaint on enter/leave.
    HoverTracking,
    /// Widget paints every pixel of its rect.
    OpaquePaint,
    /// Widget background is translucent (required for blur-behind).
    Translucent,
}

/// Read-only view of the widget owning a request.
///
/// Implemented by the host toolkit; every method has a conservative default
/// so simple hosts only implement what they use.
pub trait WidgetRef {
    /// Widget category for capability checks.
    fn kind(&self) -> WidgetKind {
        WidgetKind::Generic
    }

    /// Non-rectangular shape mask, if the widget has one.
    fn mask(&self) -> Option<Region> {
        None
    }

    /// Whether focus is forwarded to a child widget.
    fn has_focus_proxy(&self) -> bool {
        false
    }

    /// Whether this is a top-level window.
    fn is_window(&self) -> bool {
        false
    }

    /// Configured icon size, when the widget displays icons.
    fn icon_size(&self) -> Option<Size> {
        None
    }
}

/// Kinds of entries inside a popup menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItemKind {
    /// Regular action item.
    #[default]
    Normal,
    /// Horizontal separator (with optional section text).
    Separator,
    /// Item opening a submenu.
    SubMenu,
    /// Default action, drawn emphasized.
    DefaultItem,
}

/// Check-mark style of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuCheckKind {
    /// No check column entry.
    #[default]
    NotCheckable,
    /// Radio-style exclusive check.
    Exclusive,
    /// Checkbox-style check.
    NonExclusive,
}

/// Where a tab bar sits relative to its pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabShape {
    /// Tabs above the pane.
    #[default]
    RoundedNorth,
    /// Tabs below the pane.
    RoundedSouth,
    /// Tabs left of the pane, rotated.
    RoundedWest,
    /// Tabs right of the pane, rotated.
    RoundedEast,
    /// Triangular variant above.
    TriangularNorth,
    /// Triangular variant below.
    TriangularSouth,
    /// Triangular variant left.
    TriangularWest,
    /// Triangular variant right.
    TriangularEast,
}

impl TabShape {
    /// Whether this orientation renders tabs rotated 90 degrees.
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            TabShape::RoundedEast
                | TabShape::RoundedWest
                | TabShape::TriangularEast
                | TabShape::TriangularWest
        )
    }

    /// Whether this is one of the triangular variants.
    pub fn is_triangular(self) -> bool {
        matches!(
            self,
            TabShape::TriangularNorth
                | TabShape::TriangularSouth
                | TabShape::TriangularEast
                | TabShape::TriangularWest
        )
    }
}

/// Position of a tab or header section within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionPosition {
    /// First of several.
    Beginning,
    /// Neither first nor last.
    #[default]
    Middle,
    /// Last of several.
    End,
    /// The only one.
    OnlyOne,
}

/// Sort direction shown by a header arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    /// No indicator.
    #[default]
    None,
    /// Ascending.
    Up,
    /// Descending.
    Down,
}

/// Tick placement for sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickPosition {
    /// No tick marks.
    #[default]
    NoTicks,
    /// Above / left of the groove.
    Above,
    /// Below / right of the groove.
    Below,
    /// Both sides.
    Both,
}

impl TickPosition {
    /// Ticks drawn on the above/left side.
    pub fn above(self) -> bool {
        matches!(self, TickPosition::Above | TickPosition::Both)
    }

    /// Ticks drawn on the below/right side.
    pub fn below(self) -> bool {
        matches!(self, TickPosition::Below | TickPosition::Both)
    }
}

bitflags! {
    /// Window-manager buttons present on a title bar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TitleBarFlags: u32 {
        /// Window shows a title.
        const TITLE = 1 << 0;
        /// System menu button.
        const SYS_MENU = 1 << 1;
        /// Minimize button.
        const MINIMIZE = 1 << 2;
        /// Maximize button.
        const MAXIMIZE = 1 << 3;
        /// Shade button.
        const SHADE = 1 << 4;
        /// Context help button.
        const CONTEXT_HELP = 1 << 5;
    }
}

/// Button field of a push/tool button request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonOpt {
    /// Flat variant: no raised panel, tinted feedback only.
    pub flat: bool,
    /// Button shows a menu indicator.
    pub has_menu: bool,
}

/// Range/position fields shared by scrollbars and sliders.
#[derive(Debug, Clone, Copy)]
pub struct SliderOpt {
    /// Lower bound of the range.
    pub minimum: i64,
    /// Upper bound of the range.
    pub maximum: i64,
    /// Amount covered by one page (drives slider length).
    pub page_step: i64,
    /// Current slider position.
    pub position: i64,
    /// Whether the coordinate direction is inverted.
    pub upside_down: bool,
    /// Tick placement (sliders only).
    pub tick_position: TickPosition,
}

impl Default for SliderOpt {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            page_step: 10,
            position: 0,
            upside_down: false,
            tick_position: TickPosition::NoTicks,
        }
    }
}

/// Progress bar fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressOpt<'a> {
    /// Overlay label text, when the bar shows one.
    pub text: Option<&'a str>,
    /// Lower bound; equal bounds mean indeterminate.
    pub minimum: i64,
    /// Upper bound.
    pub maximum: i64,
    /// Current progress value.
    pub progress: i64,
    /// Vertical orientation.
    pub vertical: bool,
    /// Fill grows from the opposite edge.
    pub inverted: bool,
    /// Animation tick driving the indeterminate stripes.
    pub animation_step: u32,
}

impl ProgressOpt<'_> {
    /// Indeterminate bars have a collapsed range.
    pub fn is_indeterminate(&self) -> bool {
        self.minimum == 0 && self.maximum == 0
    }
}

/// Menu item fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuItemOpt {
    /// Item category; separators take a different paint path.
    pub item_kind: MenuItemKind,
    /// Check-column style.
    pub check_kind: MenuCheckKind,
    /// Current check state.
    pub checked: bool,
    /// Widest icon in the menu, for column alignment.
    pub max_icon_width: f64,
    /// Width reserved for shortcut text.
    pub reserved_shortcut_width: f64,
    /// Item displays an icon.
    pub has_icon: bool,
    /// Separator carries section text of this width (0 for plain rules).
    pub section_text_width: f64,
    /// Item lives in a combo box popup, which draws its own check marks.
    pub in_combo: bool,
}

/// Tab fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabOpt<'a> {
    /// Tab caption, when the bar shows text.
    pub text: Option<&'a str>,
    /// Bar orientation/docking edge.
    pub shape: TabShape,
    /// Position within the row.
    pub position: SectionPosition,
    /// Natural icon size, if an icon is shown.
    pub icon_size: Option<Size>,
    /// Size of an embedded leading widget (e.g. close button).
    pub left_button_size: Option<Size>,
    /// Size of an embedded trailing widget.
    pub right_button_size: Option<Size>,
}

/// Header section fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderOpt {
    /// Position within the header row.
    pub position: SectionPosition,
    /// Sort arrow to draw.
    pub sort_indicator: SortIndicator,
}

/// Group box fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupBoxOpt {
    /// Measured size of the title text (host measures text).
    pub text_size: Size,
    /// Horizontal alignment of the label band.
    pub label_alignment: LabelAlignment,
    /// A checkbox precedes the label.
    pub has_checkbox: bool,
    /// Line height of the current font, for the band height.
    pub font_height: f64,
}

/// Horizontal alignment options for group box labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelAlignment {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// Title bar fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleBarOpt {
    /// Buttons requested by the window flags.
    pub flags: TitleBarFlags,
    /// Window is currently minimized.
    pub minimized: bool,
    /// Window is currently maximized.
    pub maximized: bool,
}

/// Spin box button rendering styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinButtonSymbols {
    /// Up/down arrows.
    #[default]
    UpDownArrows,
    /// Plus/minus glyphs.
    PlusMinus,
    /// No buttons; the edit field takes the full width.
    NoButtons,
}

/// Spin box fields.
#[derive(Debug, Clone, Copy)]
pub struct SpinBoxOpt {
    /// Widget draws a frame.
    pub has_frame: bool,
    /// Button style.
    pub symbols: SpinButtonSymbols,
}

impl Default for SpinBoxOpt {
    fn default() -> Self {
        Self {
            has_frame: true,
            symbols: SpinButtonSymbols::UpDownArrows,
        }
    }
}

/// Combo box fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComboBoxOpt<'a> {
    /// Current text, for the label area of non-editable combos.
    pub text: Option<&'a str>,
    /// Combo accepts typed text.
    pub editable: bool,
    /// Widget draws a frame.
    pub has_frame: bool,
}

/// Dock title bar fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockTitleOpt<'a> {
    /// Title text.
    pub title: Option<&'a str>,
    /// Title bar runs along the dock's left edge, rotated.
    pub vertical: bool,
}

/// Item-view row fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemOpt {
    /// Row belongs to an icon view (decoration above the text); selection
    /// is drawn as a rounded pill there.
    pub icon_view: bool,
}

/// Element-specific fields attached to a [DrawRequest].
#[derive(Debug, Clone, Copy, Default)]
pub enum Payload<'a> {
    /// No extra fields.
    #[default]
    None,
    /// Push/tool button fields.
    Button(ButtonOpt),
    /// Scrollbar/slider range fields.
    Slider(SliderOpt),
    /// Progress bar fields.
    Progress(ProgressOpt<'a>),
    /// Menu item fields.
    MenuItem(MenuItemOpt),
    /// Tab fields.
    Tab(TabOpt<'a>),
    /// Header section fields.
    Header(HeaderOpt),
    /// Group box fields.
    GroupBox(GroupBoxOpt),
    /// Title bar fields.
    TitleBar(TitleBarOpt),
    /// Spin box fields.
    SpinBox(SpinBoxOpt),
    /// Combo box fields.
    ComboBox(ComboBoxOpt<'a>),
    /// Item-view row fields.
    Item(ItemOpt),
    /// Dock title bar fields.
    DockTitle(DockTitleOpt<'a>),
}

/// One paint request: element kind is passed alongside, this carries the
/// geometry, state and palette.
pub struct DrawRequest<'a> {
    /// Target rectangle in surface coordinates. Callers guarantee
    /// non-negative width/height.
    pub rect: Rect,
    /// State flags.
    pub state: StateFlags,
    /// Layout direction.
    pub direction: LayoutDirection,
    /// Palette for this pass.
    pub palette: &'a Palette,
    /// Owning widget, when the host can provide one.
    pub widget: Option<&'a dyn WidgetRef>,
    /// Element-specific fields.
    pub payload: Payload<'a>,
}

impl<'a> DrawRequest<'a> {
    /// Minimal request with default state and no widget.
    pub fn new(rect: Rect, palette: &'a Palette) -> Self {
        Self {
            rect,
            state: StateFlags::ENABLED,
            direction: LayoutDirection::LeftToRight,
            palette,
            widget: None,
            payload: Payload::None,
        }
    }

    /// Enabled and not disabled by the host.
    pub fn enabled(&self) -> bool {
        self.state.contains(StateFlags::ENABLED)
    }

    /// Hovered while enabled.
    pub fn hovered(&self) -> bool {
        self.enabled() && self.state.contains(StateFlags::MOUSE_OVER)
    }

    /// Pressed or toggled down.
    pub fn sunken(&self) -> bool {
        self.state.intersects(StateFlags::SUNKEN | StateFlags::ON)
    }

    /// Focused, unless focus is delegated to a child.
    pub fn effectively_focused(&self) -> bool {
        self.enabled()
            && self.state.contains(StateFlags::HAS_FOCUS)
            && !self.widget.map(|w| w.has_focus_proxy()).unwrap_or(false)
    }

    /// Category of the owning widget, [WidgetKind::Generic] when unknown.
    pub fn widget_kind(&self) -> WidgetKind {
        self.widget.map(|w| w.kind()).unwrap_or_default()
    }

    /// Mirrored layout.
    pub fn right_to_left(&self) -> bool {
        self.direction == LayoutDirection::RightToLeft
    }
}

/// One geometry request against a [ComplexControl].
///
/// The produced sub-rectangle always lies within, or is a deterministic
/// offset transform of, `rect`.
pub struct SubControlQuery<'a> {
    /// Outer rectangle of the complex control.
    pub rect: Rect,
    /// State flags.
    pub state: StateFlags,
    /// Layout direction.
    pub direction: LayoutDirection,
    /// Palette for this pass.
    pub palette: &'a Palette,
    /// Control-specific fields.
    pub payload: Payload<'a>,
}

impl<'a> SubControlQuery<'a> {
    /// Minimal query with default state.
    pub fn new(rect: Rect, palette: &'a Palette) -> Self {
        Self {
            rect,
            state: StateFlags::ENABLED,
            direction: LayoutDirection::LeftToRight,
            palette,
            payload: Payload::None,
        }
    }

    /// Horizontal orientation flag.
    pub fn horizontal(&self) -> bool {
        self.state.contains(StateFlags::HORIZONTAL)
    }

    /// Mirrored layout.
    pub fn right_to_left(&self) -> bool {
        self.direction == LayoutDirection::RightToLeft
    }
}
