//! Scoped key bindings. A binding stays installed exactly as long as its
//! [`BindingGuard`] is alive, so every exit path releases it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Terminal-independent key, mapped from whatever input backend is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Esc,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    Exit,
}

pub type Binding = fn(Key) -> Option<NavCommand>;

/// Right/Space advance, Left goes back, Esc leaves the presentation.
pub fn presentation_binding(key: Key) -> Option<NavCommand> {
    match key {
        Key::Right | Key::Space => Some(NavCommand::Next),
        Key::Left => Some(NavCommand::Prev),
        Key::Esc => Some(NavCommand::Exit),
        _ => None,
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    active: Vec<(u64, Binding)>,
}

#[derive(Clone, Default)]
pub struct KeyBindings {
    inner: Rc<RefCell<Registry>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, binding: Binding) -> BindingGuard {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.active.push((id, binding));
        tracing::debug!("key binding {id} installed");
        BindingGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Route a key to the most recently installed binding.
    pub fn dispatch(&self, key: Key) -> Option<NavCommand> {
        let registry = self.inner.borrow();
        registry.active.last().and_then(|(_, binding)| binding(key))
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}

impl std::fmt::Debug for KeyBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBindings")
            .field("active", &self.active_count())
            .finish()
    }
}

#[derive(Debug)]
pub struct BindingGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().active.retain(|(id, _)| *id != self.id);
            tracing::debug!("key binding {} released", self.id);
        }
    }
}
