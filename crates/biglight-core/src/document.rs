//! Document-level listeners held while a component is open.
//!
//! The Dropdown and LoginDrawer react to events outside their own DOM
//! subtree (pointer-down elsewhere on the page, Escape anywhere). Those
//! listeners are process-wide resources, so they are owned by an
//! [`OpenScope`]: acquired when the component enters its open state and
//! released on every exit path, including `Drop` on unmount.
//!
//! The renderer-specific part is the [`DocumentHost`] trait. `biglight-ui`
//! implements it over Dioxus script evaluation; tests use a recording host.

use serde::{Deserialize, Serialize};

use crate::error::UiResult;

/// Keys the interactive components care about
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavKey {
    Enter,
    Space,
    ArrowDown,
    ArrowUp,
    Escape,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => NavKey::Enter,
            " " | "Spacebar" => NavKey::Space,
            "ArrowDown" | "Down" => NavKey::ArrowDown,
            "ArrowUp" | "Up" => NavKey::ArrowUp,
            "Escape" | "Esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }

    /// Enter and Space both activate
    pub fn is_activate(&self) -> bool {
        matches!(self, NavKey::Enter | NavKey::Space)
    }
}

/// A document listener type
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerKind {
    /// Pointer pressed anywhere outside the owning component
    PointerDown,
    /// Key pressed with focus anywhere in the document
    KeyDown,
}

impl ListenerKind {
    /// DOM event name to subscribe to
    pub fn dom_event(&self) -> &'static str {
        match self {
            ListenerKind::PointerDown => "mousedown",
            ListenerKind::KeyDown => "keydown",
        }
    }
}

/// Event delivered from the document to the owning component
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentEvent {
    /// Pointer-down whose target is outside the component's root
    PointerDownOutside,
    /// Key pressed; `key` is the DOM `KeyboardEvent.key` value
    Key { key: String },
}

impl DocumentEvent {
    pub fn nav_key(&self) -> Option<NavKey> {
        match self {
            DocumentEvent::Key { key } => Some(NavKey::from_key(key)),
            DocumentEvent::PointerDownOutside => None,
        }
    }
}

/// What an open component needs from the document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeSpec {
    pub listeners: Vec<ListenerKind>,
    pub lock_scroll: bool,
}

impl ScopeSpec {
    /// Outside click dismissal plus keyboard navigation
    pub fn dropdown() -> Self {
        Self {
            listeners: vec![ListenerKind::PointerDown, ListenerKind::KeyDown],
            lock_scroll: false,
        }
    }

    /// Escape handling plus body scroll lock
    pub fn drawer() -> Self {
        Self {
            listeners: vec![ListenerKind::KeyDown],
            lock_scroll: true,
        }
    }
}

/// Renderer-side installation of document listeners
pub trait DocumentHost {
    /// Token identifying one installed set of listeners
    type Handle;

    /// Install every listener in `spec` as one unit
    fn listen(&self, spec: &ScopeSpec) -> Self::Handle;

    /// Remove a unit installed by [`DocumentHost::listen`]
    fn unlisten(&self, handle: Self::Handle) -> UiResult<()>;

    /// Set or clear the body scroll lock
    fn lock_scroll(&self, locked: bool) -> UiResult<()>;
}

/// Listeners (and scroll lock) owned by an open component
pub struct OpenScope<H: DocumentHost> {
    host: H,
    handle: Option<H::Handle>,
    scroll_locked: bool,
}

impl<H: DocumentHost> OpenScope<H> {
    /// Install everything `spec` asks for
    pub fn acquire(host: H, spec: &ScopeSpec) -> Self {
        let handle = host.listen(spec);
        let mut scroll_locked = false;
        if spec.lock_scroll {
            match host.lock_scroll(true) {
                Ok(()) => scroll_locked = true,
                Err(e) => tracing::warn!(error = %e, "failed to lock document scroll"),
            }
        }
        tracing::debug!(listeners = ?spec.listeners, scroll_locked, "open scope acquired");
        Self {
            host,
            handle: Some(handle),
            scroll_locked,
        }
    }

    pub fn handle(&self) -> Option<&H::Handle> {
        self.handle.as_ref()
    }

    /// True until the first [`OpenScope::release`]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Remove the listeners and lift the scroll lock. Idempotent.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.host.unlisten(handle) {
                tracing::warn!(error = %e, "failed to remove document listeners");
            }
            tracing::debug!("open scope released");
        }
        if self.scroll_locked {
            self.scroll_locked = false;
            if let Err(e) = self.host.lock_scroll(false) {
                tracing::warn!(error = %e, "failed to unlock document scroll");
            }
        }
    }
}

impl<H: DocumentHost> Drop for OpenScope<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Holds at most one [`OpenScope`] and keeps it in step with an open flag.
///
/// Components call [`ScopeSlot::sync`] after every state change; whichever
/// path led to "closed" (selection, outside click, Escape, close button),
/// the scope is dropped there. Dropping the slot on unmount releases too.
pub struct ScopeSlot<H: DocumentHost + Clone> {
    host: H,
    spec: ScopeSpec,
    scope: Option<OpenScope<H>>,
}

impl<H: DocumentHost + Clone> ScopeSlot<H> {
    pub fn new(host: H, spec: ScopeSpec) -> Self {
        Self {
            host,
            spec,
            scope: None,
        }
    }

    /// Acquire on entering open, release on leaving it.
    ///
    /// Returns true when a new scope was acquired by this call.
    pub fn sync(&mut self, open: bool) -> bool {
        match (open, self.scope.is_some()) {
            (true, false) => {
                self.scope = Some(OpenScope::acquire(self.host.clone(), &self.spec));
                true
            }
            (false, true) => {
                self.scope = None;
                false
            }
            _ => false,
        }
    }

    pub fn is_held(&self) -> bool {
        self.scope.is_some()
    }

    pub fn handle(&self) -> Option<&H::Handle> {
        self.scope.as_ref().and_then(|scope| scope.handle())
    }
}
