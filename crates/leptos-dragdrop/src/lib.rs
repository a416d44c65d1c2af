//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop between keyed drop zones using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! A zone is any `Copy` key (e.g. an enum naming the lists on screen).
//! Every completed drag is reported once as a [`DragOutcome`]; releasing
//! outside all slots reports `destination: None`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A position inside a drop zone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot<Z> {
    pub zone: Z,
    pub index: usize,
}

impl<Z> Slot<Z> {
    pub fn new(zone: Z, index: usize) -> Self {
        Self { zone, index }
    }
}

/// Result of a finished drag gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragOutcome<Z> {
    pub source: Slot<Z>,
    /// None when released outside any slot
    pub destination: Option<Slot<Z>>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<Z: Copy + PartialEq + Send + Sync + 'static> {
    /// Slot being dragged (set once movement passes the threshold)
    pub dragging_read: ReadSignal<Option<Slot<Z>>>,
    pub dragging_write: WriteSignal<Option<Slot<Z>>>,
    /// Slot currently hovered while dragging
    pub drop_target_read: ReadSignal<Option<Slot<Z>>>,
    pub drop_target_write: WriteSignal<Option<Slot<Z>>>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<Slot<Z>>>,
    pub pending_write: WriteSignal<Option<Slot<Z>>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// True once the pointer has travelled far enough on either axis
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// Decide what a mouseup reports.
///
/// Without an active drag (a press that never passed the threshold) it is
/// a click and reports nothing; otherwise the hovered slot, if any, is the
/// destination.
pub fn finish_drag<Z>(dragging: Option<Slot<Z>>, drop_target: Option<Slot<Z>>) -> Option<DragOutcome<Z>> {
    dragging.map(|source| DragOutcome {
        source,
        destination: drop_target,
    })
}

pub fn create_dnd_signals<Z>() -> DndSignals<Z>
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<Slot<Z>>);
    let (drop_target_read, drop_target_write) = signal(None::<Slot<Z>>);
    let (pending_read, pending_write) = signal(None::<Slot<Z>>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl<Z: Copy + PartialEq + Send + Sync + 'static> DndSignals<Z> {
    /// Is `slot` the source of the active drag?
    pub fn is_dragging(&self, slot: Slot<Z>) -> bool {
        self.dragging_read.get() == Some(slot)
    }

    /// Is `slot` the hovered destination?
    pub fn is_drop_target(&self, slot: Slot<Z>) -> bool {
        self.drop_target_read.get() == Some(slot)
    }

    /// Any drag in progress
    pub fn is_active(&self) -> bool {
        self.dragging_read.get().is_some()
    }
}

/// End drag operation
pub fn end_drag<Z: Copy + PartialEq + Send + Sync + 'static>(dnd: &DndSignals<Z>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown<Z>(dnd: DndSignals<Z>, source: Slot<Z>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(source));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove on the document - starts drag if moved enough
pub fn bind_global_mousemove<Z>(dnd: DndSignals<Z>)
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = ev.client_x() - dnd.start_x_read.get_untracked();
            let dy = ev.client_y() - dnd.start_y_read.get_untracked();
            if exceeds_threshold(dx, dy) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop slot
pub fn make_on_slot_mouseenter<Z>(dnd: DndSignals<Z>, slot: Slot<Z>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<Z>(dnd: DndSignals<Z>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` runs once per completed drag, after the drag state is cleared.
pub fn bind_global_mouseup<Z, F>(dnd: DndSignals<Z>, on_drop: F)
where
    Z: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DragOutcome<Z>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let outcome = finish_drag(
            dnd.dragging_read.get_untracked(),
            dnd.drop_target_read.get_untracked(),
        );

        end_drag(&dnd);

        if let Some(outcome) = outcome {
            on_drop(outcome);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_needs_more_than_five_pixels() {
        assert!(!exceeds_threshold(0, 0));
        assert!(!exceeds_threshold(5, -5));
        assert!(exceeds_threshold(6, 0));
        assert!(exceeds_threshold(0, -6));
    }

    #[test]
    fn test_click_without_drag_reports_nothing() {
        assert_eq!(finish_drag::<u8>(None, None), None);
        // hovering a slot does not matter if no drag started
        assert_eq!(finish_drag(None, Some(Slot::new(1u8, 0))), None);
    }

    #[test]
    fn test_release_outside_slots_has_no_destination() {
        let outcome = finish_drag(Some(Slot::new(0u8, 2)), None);
        assert_eq!(
            outcome,
            Some(DragOutcome {
                source: Slot::new(0, 2),
                destination: None,
            })
        );
    }

    #[test]
    fn test_release_on_slot_reports_it() {
        let outcome = finish_drag(Some(Slot::new(0u8, 2)), Some(Slot::new(1, 0)));
        assert_eq!(outcome.and_then(|o| o.destination), Some(Slot::new(1, 0)));
        assert_eq!(outcome.map(|o| o.source), Some(Slot::new(0, 2)));
    }

    #[test]
    fn test_slot_equality_includes_zone() {
        assert_eq!(Slot::new('a', 1), Slot { zone: 'a', index: 1 });
        assert_ne!(Slot::new('a', 1), Slot::new('b', 1));
    }
}
