//! Sidebar chrome state.
//!
//! The rendered CSS classes are a pure projection of this struct; the DOM
//! never holds state of its own.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    /// Desktop sidebar collapsed to its icon rail.
    pub collapsed: bool,
    /// Mobile overlay sidebar open. Never persisted.
    pub mobile_open: bool,
}

impl SidebarState {
    pub fn toggle_collapsed(self) -> Self {
        Self {
            collapsed: !self.collapsed,
            ..self
        }
    }

    pub fn toggle_mobile(self) -> Self {
        Self {
            mobile_open: !self.mobile_open,
            ..self
        }
    }

    /// Forces the mobile overlay closed (overlay-click-to-dismiss).
    pub fn close_mobile(self) -> Self {
        Self {
            mobile_open: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_flips_with_parity() {
        for initial in [false, true] {
            let mut s = SidebarState {
                collapsed: initial,
                mobile_open: false,
            };
            for n in 1..=8 {
                s = s.toggle_collapsed();
                assert_eq!(s.collapsed, initial ^ (n % 2 == 1), "after {} toggles", n);
            }
        }
    }

    #[test]
    fn toggle_twice_restores_original() {
        let s = SidebarState::default();
        assert_eq!(s.toggle_collapsed().toggle_collapsed(), s);
        assert_eq!(s.toggle_mobile().toggle_mobile(), s);
    }

    #[test]
    fn close_mobile_is_forced_not_toggled() {
        let open = SidebarState {
            collapsed: false,
            mobile_open: true,
        };
        assert!(!open.close_mobile().mobile_open);
        assert!(!open.close_mobile().close_mobile().mobile_open);

        let closed = SidebarState::default();
        assert!(!closed.close_mobile().mobile_open);
    }

    #[test]
    fn mobile_toggle_leaves_collapsed_alone() {
        let s = SidebarState {
            collapsed: true,
            mobile_open: false,
        };
        assert!(s.toggle_mobile().collapsed);
    }
}
