//! Shared visibility flag for the contact modal.
//!
//! One [`ModalHandle`] is created in `App` and passed down through a
//! context. Components read and flip the flag through [`use_modal`]; the
//! handle notifies subscribers only when the value actually changes, so
//! repeated opens cost nothing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Default)]
struct ModalStore {
    is_open: Cell<bool>,
    subscribers: RefCell<Vec<(u32, Callback<bool>)>>,
    next_id: Cell<u32>,
}

/// Cloneable handle to the shared store. Clones compare equal when they
/// point at the same store, which keeps context re-renders quiet.
#[derive(Clone, Debug, Default)]
pub struct ModalHandle {
    store: Rc<ModalStore>,
}

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl ModalHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.store.is_open.get()
    }

    pub fn open(&self) {
        self.set(true);
    }

    pub fn close(&self) {
        self.set(false);
    }

    fn set(&self, value: bool) {
        if self.store.is_open.get() == value {
            return;
        }
        self.store.is_open.set(value);
        // Snapshot first: a notified component may subscribe while we loop.
        let subscribers: Vec<Callback<bool>> = self
            .store
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback.emit(value);
        }
    }

    /// Register for change notifications. The returned id unsubscribes.
    pub fn subscribe(&self, callback: Callback<bool>) -> u32 {
        let id = self.store.next_id.get();
        self.store.next_id.set(id.wrapping_add(1));
        self.store.subscribers.borrow_mut().push((id, callback));
        id
    }

    pub fn unsubscribe(&self, id: u32) {
        self.store
            .subscribers
            .borrow_mut()
            .retain(|(subscriber, _)| *subscriber != id);
    }
}

/// Current flag plus the handle, for any component under the provider.
///
/// Without a provider this falls back to a detached store, so a component
/// rendered outside `App` still renders; its modal button just talks to
/// nobody.
#[hook]
pub fn use_modal() -> (bool, ModalHandle) {
    let handle = use_context::<ModalHandle>().unwrap_or_default();
    let is_open = use_state(|| handle.is_open());
    {
        let is_open = is_open.clone();
        use_effect_with_deps(
            move |handle: &ModalHandle| {
                let id = handle.subscribe(Callback::from(move |value| is_open.set(value)));
                let handle = handle.clone();
                move || handle.unsubscribe(id)
            },
            handle.clone(),
        );
    }
    (*is_open, handle)
}
