//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for Leptos, for moving cards between buckets.
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A drop destination. Buckets are identified by id; `Unassigned` is the
/// holding area for cards that belong to no bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropBucket {
    Bucket(u32),
    Unassigned,
}

impl DropBucket {
    /// Bucket id as the backend sees it (`None` = unassigned).
    pub fn id(self) -> Option<u32> {
        match self {
            DropBucket::Bucket(id) => Some(id),
            DropBucket::Unassigned => None,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Card currently being dragged
    pub dragging_read: ReadSignal<Option<u32>>,
    pub dragging_write: WriteSignal<Option<u32>>,
    /// Bucket currently hovered while dragging
    pub hover_read: ReadSignal<Option<DropBucket>>,
    pub hover_write: WriteSignal<Option<DropBucket>>,
    /// Pending card id (mousedown seen, threshold not yet crossed)
    pub pending_read: ReadSignal<Option<u32>>,
    pub pending_write: WriteSignal<Option<u32>>,
    /// Mousedown position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<u32>);
    let (hover_read, hover_write) = signal(None::<DropBucket>);
    let (pending_read, pending_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        hover_read,
        hover_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Clear all drag state
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.hover_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable cards.
/// Records a pending drag with its start position; inputs and buttons
/// inside the card keep their normal click behavior.
pub fn make_card_mousedown(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(card_id));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseenter handler for a bucket
pub fn make_bucket_mouseenter(dnd: DndSignals, bucket: DropBucket) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.hover_write.set(Some(bucket));
        }
    }
}

/// Create mouseleave handler for a bucket
pub fn make_bucket_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.hover_write.set(None);
        }
    }
}

/// Bind document mousemove: promotes a pending press to a drag once the
/// pointer has moved beyond the threshold.
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind document mouseup for drop detection. `on_drop(card, bucket)` fires
/// only when a real drag ends over a bucket; releasing outside any bucket
/// (or a plain click) is a no-op.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, DropBucket) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let hover = dnd.hover_read.get_untracked();
        end_drag(&dnd);
        if let (Some(card), Some(bucket)) = (dragging, hover) {
            on_drop(card, bucket);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::DropBucket;

    #[test]
    fn bucket_id_maps_unassigned_to_none() {
        assert_eq!(DropBucket::Bucket(7).id(), Some(7));
        assert_eq!(DropBucket::Unassigned.id(), None);
    }
}
