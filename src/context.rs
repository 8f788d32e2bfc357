//! Application Context
//!
//! The bridge, its output signals and the element ids, provided to every panel.

use std::future::Future;
use std::rc::Rc;

use form_bridge::{ElementIds, FormBridge, HttpTransport};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::output::OutputSignals;

pub type Bridge = FormBridge<HttpTransport, OutputSignals>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BridgeContext {
    /// Local storage: the bridge and its futures never leave the main thread
    bridge: StoredValue<Rc<Bridge>, LocalStorage>,
    pub outputs: OutputSignals,
    pub ids: ElementIds,
}

impl BridgeContext {
    pub fn new(bridge: Bridge) -> Self {
        let outputs = *bridge.output();
        let ids = bridge.config().ids;
        Self {
            bridge: StoredValue::new_local(Rc::new(bridge)),
            outputs,
            ids,
        }
    }

    pub fn bridge(&self) -> Rc<Bridge> {
        self.bridge.get_value()
    }

    /// Run one handler as its own task; overlapping runs are not coordinated
    pub fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(Rc<Bridge>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(task(self.bridge()));
    }
}
