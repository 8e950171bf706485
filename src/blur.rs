//! Debounced blur-behind scheduling.
//!
//! Compositors charge per blur-region update, so updates are batched: the
//! first request in a quiet period is applied immediately and arms a
//! guard timer; requests arriving while the guard is armed are queued and
//! applied together when it expires. The timer is injected so hosts drive
//! it from their event loop and tests drive it by hand.

use std::rc::{Rc, Weak};
use std::time::Duration;

use indexmap::IndexMap;
use log::{debug, trace};
use vello::kurbo::Rect;

use crate::config::StyleConfig;
use crate::region::Region;
use crate::request::WidgetKind;

/// Corner inset of the default menu silhouette.
const MENU_SILHOUETTE_INSET: f64 = 9.0;
/// Corner radius of the default menu silhouette.
const MENU_SILHOUETTE_RADIUS: f64 = 10.0;

/// Host-side view of a widget that can have blur applied behind it.
pub trait BlurSurface {
    /// Native window handle, once the surface exists. Widgets without one
    /// are skipped at flush time and picked up on their next update.
    fn native_handle(&self) -> Option<std::num::NonZeroU64>;

    /// Current widget bounds in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Shape mask set on the widget, if any.
    fn mask(&self) -> Option<Region> {
        None
    }

    /// Explicit blur-region override set by the application.
    fn blur_region(&self) -> Option<Region> {
        None
    }

    /// Widget category, for the menu silhouette and the exclusion check.
    fn kind(&self) -> WidgetKind {
        WidgetKind::Generic
    }

    /// Apply a blur-behind region through the platform.
    fn set_blur_behind(&self, region: &Region);

    /// Schedule a repaint of the widget.
    fn request_repaint(&self);
}

/// Single-shot guard timer driving the coalescing window.
///
/// The scheduler arms it after a synchronous flush; the host calls
/// [BlurScheduler::flush_pending] when it expires.
pub trait CoalesceTimer {
    /// Arm (or re-arm) the timer.
    fn arm(&mut self, interval: Duration);

    /// Stop the timer without firing.
    fn cancel(&mut self);

    /// Whether the timer is currently armed.
    fn armed(&self) -> bool;
}

/// [CoalesceTimer] driven manually, for hosts without a timer source and
/// for tests.
#[derive(Debug, Default)]
pub struct ManualTimer {
    armed: bool,
}

impl ManualTimer {
    /// Expire the timer; the owner should call
    /// [BlurScheduler::flush_pending] next.
    pub fn expire(&mut self) {
        self.armed = false;
    }
}

impl CoalesceTimer for ManualTimer {
    fn arm(&mut self, _interval: Duration) {
        self.armed = true;
    }

    fn cancel(&mut self) {
        self.armed = false;
    }

    fn armed(&self) -> bool {
        self.armed
    }
}

#[derive(Clone, Copy)]
struct PendingUpdate {
    key: usize,
    region_only: bool,
}

/// Debounced dispatcher of blur-behind updates.
///
/// Holds weak references only; a destroyed widget drops out at flush time
/// (and should be [unregister](BlurScheduler::unregister)ed by the host's
/// destruction hook).
pub struct BlurScheduler<T: CoalesceTimer> {
    registered: IndexMap<usize, Weak<dyn BlurSurface>>,
    pending: Vec<PendingUpdate>,
    timer: T,
    interval: Duration,
    enabled: bool,
}

impl<T: CoalesceTimer> BlurScheduler<T> {
    /// Scheduler with the coalescing interval and enable flag from config.
    pub fn new(timer: T, config: &StyleConfig) -> Self {
        Self {
            registered: IndexMap::new(),
            pending: Vec::new(),
            timer,
            interval: Duration::from_millis(config.blur_coalesce_ms),
            enabled: config.blur_enabled,
        }
    }

    fn key(widget: &Rc<dyn BlurSurface>) -> usize {
        Rc::as_ptr(widget) as *const () as usize
    }

    /// Number of registered widgets.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Track a widget and push an initial blur region to it. Internal
    /// popup containers are excluded; registering one is a no-op.
    pub fn register(&mut self, widget: &Rc<dyn BlurSurface>) {
        if !self.enabled || widget.kind() == WidgetKind::PopupContainer {
            return;
        }
        let key = Self::key(widget);
        self.registered.insert(key, Rc::downgrade(widget));
        trace!("blur: registered widget {key:#x}");
        self.request_update(widget, false);
    }

    /// Stop tracking a widget and drop any queued update for it.
    pub fn unregister(&mut self, widget: &Rc<dyn BlurSurface>) {
        let key = Self::key(widget);
        if self.registered.shift_remove(&key).is_some() {
            self.pending.retain(|p| p.key != key);
            trace!("blur: unregistered widget {key:#x}");
        }
    }

    /// Request a blur-region update for a registered widget.
    ///
    /// Applied synchronously when the guard timer is idle; queued behind
    /// the timer otherwise. `region_only` suppresses the repaint that
    /// normally follows.
    pub fn request_update(&mut self, widget: &Rc<dyn BlurSurface>, region_only: bool) {
        let key = Self::key(widget);
        if !self.registered.contains_key(&key) {
            return;
        }
        if self.timer.armed() {
            match self.pending.iter_mut().find(|p| p.key == key) {
                // A full update subsumes a queued region-only one.
                Some(p) => p.region_only &= region_only,
                None => self.pending.push(PendingUpdate { key, region_only }),
            }
            trace!("blur: queued update for {key:#x}");
            return;
        }
        self.apply(key, region_only);
        self.timer.arm(self.interval);
    }

    /// Apply every queued update, in request order. Idempotent; safe to
    /// call with an empty queue or after the widgets are gone.
    pub fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        debug!("blur: flushing {} pending update(s)", self.pending.len());
        let batch = std::mem::take(&mut self.pending);
        for update in batch {
            self.apply(update.key, update.region_only);
        }
    }

    fn apply(&mut self, key: usize, region_only: bool) {
        let widget = match self.registered.get(&key).and_then(Weak::upgrade) {
            Some(widget) => widget,
            None => {
                self.registered.shift_remove(&key);
                return;
            }
        };
        // No native surface yet; the widget re-requests once shown.
        if widget.native_handle().is_none() {
            trace!("blur: skipping {key:#x}, no native handle");
            return;
        }
        // Menus and tooltips always get the notched silhouette, whatever
        // mask they carry; everything else prefers the explicit region,
        // then the mask, then the full bounds.
        let region = if matches!(widget.kind(), WidgetKind::Menu | WidgetKind::Tooltip) {
            menu_silhouette(widget.bounds())
        } else {
            widget
                .blur_region()
                .or_else(|| widget.mask())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| Region::from_rect(widget.bounds()))
        };
        widget.set_blur_behind(&region);
        if !region_only {
            widget.request_repaint();
        }
    }
}

/// Rounded silhouette used for menus without a mask: the bounds inset on
/// every side, with stepped notches standing in for the rounded corners.
fn menu_silhouette(bounds: Rect) -> Region {
    let inset = MENU_SILHOUETTE_INSET;
    let r = Rect::new(
        bounds.x0 + inset,
        bounds.y0 + inset,
        bounds.x1 - inset,
        bounds.y1 - inset,
    );
    let mut region = Region::from_rect(r);
    let radius = MENU_SILHOUETTE_RADIUS.min(r.width() / 2.0).min(r.height() / 2.0);
    let steps = [
        (0.0, radius * 0.5),
        (radius * 0.5, radius * 0.2),
        (radius * 0.7, radius * 0.1),
    ];
    let mut depth = radius;
    for (offset, height) in steps {
        region.subtract_rect(Rect::new(r.x0, r.y0 + offset, r.x0 + depth, r.y0 + offset + height));
        region.subtract_rect(Rect::new(r.x1 - depth, r.y0 + offset, r.x1, r.y0 + offset + height));
        region.subtract_rect(Rect::new(r.x0, r.y1 - offset - height, r.x0 + depth, r.y1 - offset));
        region.subtract_rect(Rect::new(r.x1 - depth, r.y1 - offset - height, r.x1, r.y1 - offset));
        depth *= 0.4;
    }
    region
}
