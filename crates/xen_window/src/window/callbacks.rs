//! Callback slots, one per event kind

use super::backend::Platform;
use super::events::{CursorPositionEvent, KeyEvent, MouseButtonEvent, ResizeEvent, ScrollEvent};
use super::handle::Window;

/// A callback receiving the owning window and one event
pub type Callback<P, E> = Box<dyn FnMut(&mut Window<P>, E)>;

/// Key callback
pub type KeyCallback<P> = Callback<P, KeyEvent>;
/// Mouse button callback
pub type MouseButtonCallback<P> = Callback<P, MouseButtonEvent>;
/// Scroll callback
pub type ScrollCallback<P> = Callback<P, ScrollEvent>;
/// Cursor position callback
pub type CursorPositionCallback<P> = Callback<P, CursorPositionEvent>;
/// Resize callback
pub type ResizeCallback<P> = Callback<P, ResizeEvent>;

/// Holds at most one callback
///
/// The generation counter changes on every `set` or `clear`. A callback
/// taken out for dispatch is only put back if the generation is unchanged,
/// so a callback that replaces or clears its own slot is not resurrected.
pub(crate) struct Slot<F> {
    callback: Option<F>,
    generation: u64,
}

impl<F> Slot<F> {
    pub(crate) fn set(&mut self, callback: F) {
        self.callback = Some(callback);
        self.generation = self.generation.wrapping_add(1);
    }

    pub(crate) fn clear(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.callback.take().is_some()
    }

    pub(crate) const fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    pub(crate) fn take(&mut self) -> Option<(F, u64)> {
        let generation = self.generation;
        self.callback.take().map(|callback| (callback, generation))
    }

    pub(crate) fn restore(&mut self, callback: F, generation: u64) {
        if self.generation == generation {
            self.callback = Some(callback);
        }
    }
}

impl<F> Default for Slot<F> {
    fn default() -> Self {
        Self {
            callback: None,
            generation: 0,
        }
    }
}

pub(crate) struct CallbackTable<P: Platform> {
    key: Slot<KeyCallback<P>>,
    mouse_button: Slot<MouseButtonCallback<P>>,
    scroll: Slot<ScrollCallback<P>>,
    cursor_position: Slot<CursorPositionCallback<P>>,
    resize: Slot<ResizeCallback<P>>,
}

impl<P: Platform> CallbackTable<P> {
    pub(crate) fn key_slot(&mut self) -> &mut Slot<KeyCallback<P>> {
        &mut self.key
    }

    pub(crate) fn mouse_button_slot(&mut self) -> &mut Slot<MouseButtonCallback<P>> {
        &mut self.mouse_button
    }

    pub(crate) fn scroll_slot(&mut self) -> &mut Slot<ScrollCallback<P>> {
        &mut self.scroll
    }

    pub(crate) fn cursor_position_slot(&mut self) -> &mut Slot<CursorPositionCallback<P>> {
        &mut self.cursor_position
    }

    pub(crate) fn resize_slot(&mut self) -> &mut Slot<ResizeCallback<P>> {
        &mut self.resize
    }
}

impl<P: Platform> Default for CallbackTable<P> {
    fn default() -> Self {
        Self {
            key: Slot::default(),
            mouse_button: Slot::default(),
            scroll: Slot::default(),
            cursor_position: Slot::default(),
            resize: Slot::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_set_replaces() {
        let mut slot = Slot::default();
        slot.set(1);
        slot.set(2);
        let (value, _) = slot.take().unwrap();
        assert_eq!(value, 2);
        assert!(!slot.is_set());
    }

    #[test]
    fn test_restore_after_untouched_dispatch() {
        let mut slot = Slot::default();
        slot.set("first");
        let (value, generation) = slot.take().unwrap();
        slot.restore(value, generation);
        assert!(slot.is_set());
    }

    #[test]
    fn test_restore_skipped_when_replaced_during_dispatch() {
        let mut slot = Slot::default();
        slot.set("first");
        let (value, generation) = slot.take().unwrap();
        slot.set("second");
        slot.restore(value, generation);
        assert_eq!(slot.take().unwrap().0, "second");
    }

    #[test]
    fn test_restore_skipped_when_cleared_during_dispatch() {
        let mut slot = Slot::default();
        slot.set("first");
        let (value, generation) = slot.take().unwrap();
        assert!(!slot.clear());
        slot.restore(value, generation);
        assert!(!slot.is_set());
    }
}
