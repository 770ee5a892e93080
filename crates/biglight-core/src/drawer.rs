//! Login drawer lifecycle.

use std::time::Duration;

use crate::document::NavKey;

/// Delay between opening the drawer and focusing its close control, so the
/// slide-in transition has started first
pub const FOCUS_TRANSFER_DELAY: Duration = Duration::from_millis(100);

/// What a drawer input did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawerTransition {
    /// closed -> open: acquire scroll lock + Escape listener, schedule focus
    Opened,
    /// open -> closed: release both
    Closed,
    /// No change
    Unchanged,
}

/// `{closed, open}` state of one LoginDrawer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> DrawerTransition {
        if self.open {
            return DrawerTransition::Unchanged;
        }
        self.open = true;
        tracing::debug!("login drawer opened");
        DrawerTransition::Opened
    }

    /// Close button or backdrop click
    pub fn close(&mut self) -> DrawerTransition {
        if !self.open {
            return DrawerTransition::Unchanged;
        }
        self.open = false;
        tracing::debug!("login drawer closed");
        DrawerTransition::Closed
    }

    /// Key delivered by the document listener; only Escape matters
    pub fn handle_key(&mut self, key: NavKey) -> DrawerTransition {
        match key {
            NavKey::Escape => self.close(),
            _ => DrawerTransition::Unchanged,
        }
    }
}

/// Wait out the open transition, then report whether focus should still
/// move (the drawer may have been closed in the meantime)
pub async fn wait_for_focus_transfer(still_open: impl Fn() -> bool) -> bool {
    tokio::time::sleep(FOCUS_TRANSFER_DELAY).await;
    still_open()
}
