//! Event-time context and the deferred commands controls hand back to the App.
//!
//! While an event bubbles, the App holds a mutable borrow of one control at a
//! time, so controls cannot touch the layer stack or focus directly. They
//! queue a [`Command`] instead; the App applies the queue in order once the
//! event has finished bubbling.

use std::fmt;

use super::tree::{self, ControlPath};
use super::widget::Control;
use crate::config::Config;

pub enum Command {
    Focus { layer: usize, path: ControlPath },
    PushLayer(Box<dyn Control>),
    PopLayer,
    Exit,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Focus { layer, path } => f
                .debug_struct("Focus")
                .field("layer", layer)
                .field("path", path)
                .finish(),
            Command::PushLayer(_) => f.write_str("PushLayer"),
            Command::PopLayer => f.write_str("PopLayer"),
            Command::Exit => f.write_str("Exit"),
        }
    }
}

pub struct EventCx<'a> {
    layer: usize,
    path: &'a ControlPath,
    config: &'a Config,
    commands: &'a mut Vec<Command>,
}

impl<'a> EventCx<'a> {
    pub fn new(
        layer: usize,
        path: &'a ControlPath,
        config: &'a Config,
        commands: &'a mut Vec<Command>,
    ) -> Self {
        Self {
            layer,
            path,
            config,
            commands,
        }
    }

    /// Path of the control currently handling the event.
    pub fn path(&self) -> &ControlPath {
        self.path
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Index of the direct child the event came up through, if any.
    pub fn child_toward(&self, last: Option<&ControlPath>) -> Option<usize> {
        last?.step_below(self.path)
    }

    /// Requests focus for `child` (the direct child at `index`) or its first
    /// focusable descendant. Returns false when that subtree holds nothing
    /// focusable.
    pub fn focus_into(&mut self, index: usize, child: &dyn Control) -> bool {
        let Some(rel) = tree::first_focusable(child) else {
            return false;
        };
        let path = self.path.child(index).join(&rel);
        self.commands.push(Command::Focus {
            layer: self.layer,
            path,
        });
        true
    }

    pub fn push_layer(&mut self, root: Box<dyn Control>) {
        self.commands.push(Command::PushLayer(root));
    }

    pub fn pop_layer(&mut self) {
        self.commands.push(Command::PopLayer);
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;
