//! Shared test host for document-listener scenarios

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use biglight_core::{DocumentHost, ListenerKind, ScopeSpec, UiResult};

/// One call made against the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    Listen(u32, Vec<ListenerKind>),
    Unlisten(u32),
    LockScroll(bool),
}

#[derive(Default)]
struct HostLog {
    next_id: u32,
    calls: Vec<HostCall>,
    active: Vec<(u32, Vec<ListenerKind>)>,
    scroll_locked: bool,
}

/// Records every call and tracks which listeners are currently installed
#[derive(Clone, Default)]
pub struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.log.borrow().calls.clone()
    }

    /// Listener kinds currently installed, across all handles
    pub fn active_listeners(&self) -> Vec<ListenerKind> {
        self.log
            .borrow()
            .active
            .iter()
            .flat_map(|(_, kinds)| kinds.iter().copied())
            .collect()
    }

    pub fn scroll_locked(&self) -> bool {
        self.log.borrow().scroll_locked
    }

    pub fn listen_count(&self) -> usize {
        self.log
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, HostCall::Listen(..)))
            .count()
    }
}

impl DocumentHost for RecordingHost {
    type Handle = u32;

    fn listen(&self, spec: &ScopeSpec) -> u32 {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        let id = log.next_id;
        log.calls.push(HostCall::Listen(id, spec.listeners.clone()));
        log.active.push((id, spec.listeners.clone()));
        id
    }

    fn unlisten(&self, handle: u32) -> UiResult<()> {
        let mut log = self.log.borrow_mut();
        log.calls.push(HostCall::Unlisten(handle));
        log.active.retain(|(id, _)| *id != handle);
        Ok(())
    }

    fn lock_scroll(&self, locked: bool) -> UiResult<()> {
        let mut log = self.log.borrow_mut();
        log.calls.push(HostCall::LockScroll(locked));
        log.scroll_locked = locked;
        Ok(())
    }
}
