//! The App: layer stack, event dispatch and the run loop.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::color::ColorCache;
use crate::ui::core::geom::Rect;
use crate::ui::core::input::{Event, Input, Key};
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::{Command, EventCx};
use crate::ui::core::tree::{self, ControlPath};
use crate::ui::core::widget::Control;
use crate::ui::layer::Layer;
use crate::ui::view::Layout;

pub struct App {
    layers: Vec<Layer>,
    colors: ColorCache,
    config: Config,
    exit: bool,
}

impl App {
    pub fn new(root: impl Control + 'static) -> Self {
        Self::with_config(root, Config::default())
    }

    pub fn with_config(root: impl Control + 'static, config: Config) -> Self {
        Self {
            layers: vec![Layer::new(Box::new(root))],
            colors: ColorCache::new(),
            config,
            exit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The top layer; it receives all input.
    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    pub fn active_layer_mut(&mut self) -> &mut Layer {
        let top = self.layers.len() - 1;
        &mut self.layers[top]
    }

    pub fn push_layer(&mut self, root: Box<dyn Control>) {
        self.layers.push(Layer::new(root));
        debug!(depth = self.layers.len(), "layer pushed");
    }

    /// Removes the top layer. The base layer is never removed; returns false
    /// when asked to.
    pub fn pop_layer(&mut self) -> bool {
        if self.layers.len() <= 1 {
            warn!("refusing to pop the base layer");
            return false;
        }
        self.layers.pop();
        debug!(depth = self.layers.len(), "layer popped");
        true
    }

    /// True when the focused control of the active layer is `path` or lies below it.
    pub fn contains_focus(&self, path: &ControlPath) -> bool {
        self.active_layer().focused().starts_with(path)
    }

    pub fn focused(&self) -> Option<&dyn Control> {
        self.active_layer().focused_control()
    }

    /// Looks up a control by id in the active layer.
    pub fn find(&self, id: &str) -> Result<&dyn Control> {
        tree::find(self.active_layer().root(), id)
    }

    pub fn find_as<T: Control + 'static>(&self, id: &str) -> Result<&T> {
        tree::find_as(self.active_layer().root(), id)
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn request_exit(&mut self) {
        info!("exit requested");
        self.exit = true;
    }

    /// Lays out and paints every layer, bottom first, onto a cleared `area`.
    pub fn render(&mut self, area: Rect) -> Painter {
        let mut painter = Painter::new();
        let mut canvas = Canvas::new(&mut painter, &mut self.colors, area);
        canvas.clear(area);

        let top = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            let view = layer.render(i == top, &self.config);
            view.paint(area, &mut canvas);
        }
        painter
    }

    /// Draws one frame against the backend's current size.
    pub fn update(&mut self, backend: &mut dyn Backend) -> Result<()> {
        let area = backend.size()?;
        let painter = self.render(area);
        for (pair, fg, bg) in self.colors.drain_pending() {
            backend.init_pair(pair, fg, bg);
        }
        backend.draw(area, painter.cmds())?;
        Ok(())
    }

    pub fn run(&mut self, backend: &mut dyn Backend) -> Result<()> {
        backend.hide_cursor()?;
        while !self.exit {
            self.update(backend)?;
            match backend.read_input()? {
                Input::Key(key) => self.dispatch(key),
                Input::Resize => {
                    let size = backend.size()?;
                    debug!(w = size.w, h = size.h, "surface resized");
                }
            }
        }
        info!("run loop finished");
        Ok(())
    }

    /// Delivers `key` to the focused control of the active layer and bubbles
    /// it up through the ancestors until a control stops it. Unhandled keys
    /// fall through to the App's own bindings.
    pub fn dispatch(&mut self, key: Key) {
        let layer = self.layers.len() - 1;
        self.layers[layer].revalidate();

        let target = self.layers[layer].focused().clone();
        let mut ev = Event::key(key, target.clone());
        let mut commands = Vec::new();

        let mut next = Some(target);
        while let Some(path) = next.take() {
            let Some(control) = tree::resolve_mut(self.layers[layer].root_mut(), path.indices())
            else {
                warn!(?path, "event path no longer resolves");
                break;
            };
            let mut cx = EventCx::new(layer, &path, &self.config, &mut commands);
            control.on_event(&mut ev, &mut cx);
            let stopped = !ev.is_propagating();
            next = path.parent();
            ev.last = Some(path);
            if stopped {
                break;
            }
        }

        if ev.is_propagating() {
            self.fallback(&mut ev, layer, &mut commands);
        }
        debug!(
            ?key,
            handled = !ev.is_propagating(),
            commands = commands.len(),
            "key dispatched"
        );
        self.apply(commands);
    }

    /// Esc leaves the current layer (or the App, on the base layer);
    /// Tab/Down wrap focus to the first control and Shift-Tab/Up to the last.
    fn fallback(&self, ev: &mut Event, layer: usize, commands: &mut Vec<Command>) {
        let root = self.layers[layer].root();
        match ev.key_code() {
            Some(Key::Esc) => {
                if self.layers.len() > 1 {
                    commands.push(Command::PopLayer);
                } else {
                    commands.push(Command::Exit);
                }
                ev.stop();
            }
            Some(Key::Tab | Key::Down) => {
                if let Some(path) = tree::first_focusable(root) {
                    commands.push(Command::Focus { layer, path });
                    ev.stop();
                }
            }
            Some(Key::BackTab | Key::Up) => {
                if let Some(path) = tree::last_focusable(root) {
                    commands.push(Command::Focus { layer, path });
                    ev.stop();
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, commands: Vec<Command>) {
        let mut queue: VecDeque<Command> = commands.into();
        while let Some(command) = queue.pop_front() {
            match command {
                Command::Focus { layer, path } => self.move_focus(layer, &path, &mut queue),
                Command::PushLayer(root) => self.push_layer(root),
                Command::PopLayer => {
                    self.pop_layer();
                }
                Command::Exit => self.request_exit(),
            }
        }
    }

    fn move_focus(&mut self, layer: usize, path: &ControlPath, queue: &mut VecDeque<Command>) {
        let Some(target) = self.layers.get_mut(layer) else {
            return;
        };
        let old = target.focused().clone();
        if !target.focus(path) || *target.focused() == old {
            return;
        }
        let new = target.focused().clone();
        debug!(layer, from = ?old, to = ?new, "focus moved");

        self.notify(layer, Event::blur(old), queue);
        self.notify(layer, Event::focus(new), queue);
    }

    /// Delivers a focus notification to its target only; it does not bubble.
    fn notify(&mut self, layer: usize, mut ev: Event, queue: &mut VecDeque<Command>) {
        let path = ev.target.clone();
        let mut commands = Vec::new();
        if let Some(control) = tree::resolve_mut(self.layers[layer].root_mut(), path.indices()) {
            let mut cx = EventCx::new(layer, &path, &self.config, &mut commands);
            control.on_event(&mut ev, &mut cx);
        }
        queue.extend(commands);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/app.rs"]
mod tests;
