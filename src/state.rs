//! Navigation state management

use crate::any_route::AnyRoute;
use serde::{Deserialize, Serialize};

/// One of the two single-item presentation slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModalSlot {
    /// Dismissible overlay.
    Sheet,
    /// Blocking overlay covering the whole screen.
    FullScreen,
}

/// What kind of mutation produced a [`RouteChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationChange {
    Push,
    Pop,
    PopToRoot,
    ReplaceTop,
    SetStack,
    Present(ModalSlot),
    Dismiss(ModalSlot),
    Restore,
}

impl NavigationChange {
    /// Whether the change touched the push/pop stack.
    pub fn affects_stack(self) -> bool {
        !matches!(self, Self::Present(_) | Self::Dismiss(_))
    }

    /// The modal slot touched by the change, if any.
    pub fn modal_slot(self) -> Option<ModalSlot> {
        match self {
            Self::Present(slot) | Self::Dismiss(slot) => Some(slot),
            _ => None,
        }
    }
}

/// Emitted after every mutation that actually changed the state.
///
/// `from` and `to` are the envelopes at the affected position before and
/// after the change: the top of the stack for stack operations, the slot
/// for modal operations.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteChangeEvent {
    pub change: NavigationChange,
    pub from: Option<AnyRoute>,
    pub to: Option<AnyRoute>,
    /// Stack length after the change.
    pub depth: usize,
}

/// Navigation state: the push/pop stack and the two modal slots.
///
/// `sheet` and `full_screen` are independent; both may be set at once.
/// Every mutation returns the resulting event, or `None` if nothing changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    stack: Vec<AnyRoute>,
    sheet: Option<AnyRoute>,
    full_screen: Option<AnyRoute>,
}

impl NavigationState {
    /// Create an empty state (at root, no modals)
    pub fn new() -> Self {
        Self::default()
    }

    /// Envelopes in navigation order; empty means at root.
    pub fn stack(&self) -> &[AnyRoute] {
        &self.stack
    }

    pub fn sheet(&self) -> Option<&AnyRoute> {
        self.sheet.as_ref()
    }

    pub fn full_screen(&self) -> Option<&AnyRoute> {
        self.full_screen.as_ref()
    }

    /// Contents of the given modal slot.
    pub fn modal(&self, slot: ModalSlot) -> Option<&AnyRoute> {
        match slot {
            ModalSlot::Sheet => self.sheet.as_ref(),
            ModalSlot::FullScreen => self.full_screen.as_ref(),
        }
    }

    /// Last pushed envelope.
    pub fn top(&self) -> Option<&AnyRoute> {
        self.stack.last()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Modal that should be foregrounded when both slots are set.
    ///
    /// The full-screen slot takes precedence over the sheet.
    pub fn foreground_modal(&self) -> Option<(ModalSlot, &AnyRoute)> {
        self.full_screen
            .as_ref()
            .map(|route| (ModalSlot::FullScreen, route))
            .or_else(|| self.sheet.as_ref().map(|route| (ModalSlot::Sheet, route)))
    }

    /// Append an envelope
    pub fn push(&mut self, route: AnyRoute) -> RouteChangeEvent {
        let from = self.stack.last().cloned();
        self.stack.push(route.clone());
        self.event(NavigationChange::Push, from, Some(route))
    }

    /// Replace the whole stack, keeping the given order
    pub fn set_stack(&mut self, routes: Vec<AnyRoute>) -> Option<RouteChangeEvent> {
        if self.stack == routes {
            return None;
        }
        let from = self.stack.last().cloned();
        self.stack = routes;
        let to = self.stack.last().cloned();
        Some(self.event(NavigationChange::SetStack, from, to))
    }

    /// Remove the top envelope; no-op at root
    pub fn pop(&mut self) -> Option<RouteChangeEvent> {
        let from = self.stack.pop()?;
        let to = self.stack.last().cloned();
        Some(self.event(NavigationChange::Pop, Some(from), to))
    }

    /// Clear the stack
    pub fn pop_to_root(&mut self) -> Option<RouteChangeEvent> {
        if self.stack.is_empty() {
            return None;
        }
        let from = self.stack.last().cloned();
        self.stack.clear();
        Some(self.event(NavigationChange::PopToRoot, from, None))
    }

    /// Swap the top envelope, or push when the stack is empty
    pub fn replace_top(&mut self, route: AnyRoute) -> RouteChangeEvent {
        let from = self.stack.pop();
        self.stack.push(route.clone());
        self.event(NavigationChange::ReplaceTop, from, Some(route))
    }

    /// Fill a modal slot, overwriting its current content
    pub fn present(&mut self, slot: ModalSlot, route: AnyRoute) -> Option<RouteChangeEvent> {
        let target = self.slot_mut(slot);
        if target.as_ref() == Some(&route) {
            return None;
        }
        let from = target.replace(route.clone());
        Some(self.event(NavigationChange::Present(slot), from, Some(route)))
    }

    /// Clear a modal slot
    pub fn dismiss(&mut self, slot: ModalSlot) -> Option<RouteChangeEvent> {
        let from = self.slot_mut(slot).take()?;
        Some(self.event(NavigationChange::Dismiss(slot), Some(from), None))
    }

    /// Replace everything with a previously captured state
    pub fn restore(&mut self, state: NavigationState) -> Option<RouteChangeEvent> {
        if *self == state {
            return None;
        }
        let from = self.stack.last().cloned();
        *self = state;
        let to = self.stack.last().cloned();
        Some(self.event(NavigationChange::Restore, from, to))
    }

    fn slot_mut(&mut self, slot: ModalSlot) -> &mut Option<AnyRoute> {
        match slot {
            ModalSlot::Sheet => &mut self.sheet,
            ModalSlot::FullScreen => &mut self.full_screen,
        }
    }

    fn event(
        &self,
        change: NavigationChange,
        from: Option<AnyRoute>,
        to: Option<AnyRoute>,
    ) -> RouteChangeEvent {
        RouteChangeEvent {
            change,
            from,
            to,
            depth: self.stack.len(),
        }
    }
}
