//! Addressing controls inside a layer.
//!
//! Controls never store parent links. A control is addressed by the child
//! indices leading to it from its layer root, and every question about
//! ancestry is answered by walking the live tree again.

use super::widget::Control;
use crate::error::{Result, UiError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlPath(Vec<usize>);

impl ControlPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Concatenates a path that is relative to `self`.
    pub fn join(&self, rel: &ControlPath) -> Self {
        let mut indices = self.0.clone();
        indices.extend_from_slice(&rel.0);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// True when `self` is `ancestor` or lies below it.
    pub fn starts_with(&self, ancestor: &ControlPath) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    /// The index of the direct child of `ancestor` on the way down to `self`.
    pub fn step_below(&self, ancestor: &ControlPath) -> Option<usize> {
        if !self.starts_with(ancestor) {
            return None;
        }
        self.0.get(ancestor.depth()).copied()
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl From<Vec<usize>> for ControlPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// Every control under `root` in document order (root first, depth first).
pub fn walk(root: &dyn Control) -> Vec<(ControlPath, &dyn Control)> {
    let mut out = Vec::new();
    let mut stack = vec![(ControlPath::root(), root)];
    while let Some((path, node)) = stack.pop() {
        for (index, child) in node.children().into_iter().enumerate().rev() {
            stack.push((path.child(index), child));
        }
        out.push((path, node));
    }
    out
}

pub fn resolve<'a>(root: &'a dyn Control, path: &[usize]) -> Option<&'a dyn Control> {
    match path.split_first() {
        None => Some(root),
        Some((&index, rest)) => resolve(root.children().into_iter().nth(index)?, rest),
    }
}

pub fn resolve_mut<'a>(root: &'a mut dyn Control, path: &[usize]) -> Option<&'a mut dyn Control> {
    match path.split_first() {
        None => Some(root),
        Some((&index, rest)) => resolve_mut(root.child_mut(index)?, rest),
    }
}

pub fn first_focusable(root: &dyn Control) -> Option<ControlPath> {
    walk(root)
        .into_iter()
        .find(|(_, node)| node.can_focus())
        .map(|(path, _)| path)
}

pub fn last_focusable(root: &dyn Control) -> Option<ControlPath> {
    walk(root)
        .into_iter()
        .rev()
        .find(|(_, node)| node.can_focus())
        .map(|(path, _)| path)
}

pub fn find_path(root: &dyn Control, id: &str) -> Result<ControlPath> {
    walk(root)
        .into_iter()
        .find(|(_, node)| node.id() == Some(id))
        .map(|(path, _)| path)
        .ok_or_else(|| UiError::NoSuchControl(id.to_string()))
}

pub fn find<'a>(root: &'a dyn Control, id: &str) -> Result<&'a dyn Control> {
    walk(root)
        .into_iter()
        .find(|(_, node)| node.id() == Some(id))
        .map(|(_, node)| node)
        .ok_or_else(|| UiError::NoSuchControl(id.to_string()))
}

pub fn find_as<'a, T: Control + 'static>(root: &'a dyn Control, id: &str) -> Result<&'a T> {
    find(root, id)?
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| UiError::WrongControlType(id.to_string()))
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
