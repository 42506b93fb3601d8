//! Selection Controller
//!
//! Tracks which form, if any, is open. The add-friend form and the split-bill
//! form are mutually exclusive, so both live in one [`Panel`] enum instead of
//! a flag plus an optional selection. Opening one closes the other by
//! construction.
//!
//! ```text
//!              select(f)                 select(g), g != f
//!   Idle ─────────────────▶ Splitting(f) ─────────────────▶ Splitting(g)
//!    ▲  ◀───────────────────     │
//!    │   select(f) / clear()     │ toggle_add_friend()
//!    │                           ▼
//!    └──────────────────── AddingFriend
//!        toggle_add_friend() / clear()
//! ```

use crate::forms::{AddFriendForm, SplitBillForm};
use crate::friends::FriendId;

/// Which form is open
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Panel {
    /// No form open, no friend selected
    #[default]
    Idle,
    /// The add-friend form is open
    AddingFriend(AddFriendForm),
    /// A friend is selected and the split-bill form is open
    Splitting(SplitBillForm),
}

impl Panel {
    /// Short name for logging
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AddingFriend(_) => "adding-friend",
            Self::Splitting(_) => "splitting",
        }
    }
}

/// Owns the open panel and applies selection transitions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionController {
    panel: Panel,
}

impl SelectionController {
    /// Start with nothing selected
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The open panel
    #[must_use]
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// The selected friend, if any
    #[must_use]
    pub fn selected(&self) -> Option<&FriendId> {
        match &self.panel {
            Panel::Splitting(form) => Some(form.friend_id()),
            _ => None,
        }
    }

    /// Whether this friend is the current selection
    #[must_use]
    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected() == Some(id)
    }

    /// Whether the add-friend form is open
    #[must_use]
    pub fn is_adding_friend(&self) -> bool {
        matches!(self.panel, Panel::AddingFriend(_))
    }

    /// Select a friend, or deselect if already selected
    ///
    /// Selecting a different friend switches directly to a fresh split form
    /// for that friend. Any open add-friend form closes.
    pub fn select(&mut self, id: &FriendId) {
        self.panel = if self.is_selected(id) {
            Panel::Idle
        } else {
            Panel::Splitting(SplitBillForm::new(id.clone()))
        };
    }

    /// Open the add-friend form, or close it if open
    ///
    /// Opening clears any selection.
    pub fn toggle_add_friend(&mut self, default_image: &str) {
        self.panel = if self.is_adding_friend() {
            Panel::Idle
        } else {
            Panel::AddingFriend(AddFriendForm::new(default_image))
        };
    }

    /// Close whatever is open
    pub fn clear(&mut self) {
        self.panel = Panel::Idle;
    }

    /// The add-friend form, if open
    pub fn add_friend_form_mut(&mut self) -> Option<&mut AddFriendForm> {
        match &mut self.panel {
            Panel::AddingFriend(form) => Some(form),
            _ => None,
        }
    }

    /// The split-bill form, if open
    pub fn split_bill_form_mut(&mut self) -> Option<&mut SplitBillForm> {
        match &mut self.panel {
            Panel::Splitting(form) => Some(form),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::DEFAULT_AVATAR_URL;

    #[test]
    fn test_starts_idle() {
        let controller = SelectionController::new();
        assert_eq!(controller.panel(), &Panel::Idle);
        assert_eq!(controller.selected(), None);
    }

    #[test]
    fn test_select_same_friend_toggles() {
        let mut controller = SelectionController::new();
        let clark = FriendId::new("clark");

        controller.select(&clark);
        assert!(controller.is_selected(&clark));

        controller.select(&clark);
        assert_eq!(controller.panel(), &Panel::Idle);
    }

    #[test]
    fn test_select_other_friend_switches_directly() {
        let mut controller = SelectionController::new();
        let clark = FriendId::new("clark");
        let sarah = FriendId::new("sarah");

        controller.select(&clark);
        controller
            .split_bill_form_mut()
            .unwrap()
            .set_bill("25")
            .unwrap();
        controller.select(&sarah);

        assert_eq!(controller.selected(), Some(&sarah));
        // Fresh form for the new friend
        assert_eq!(
            controller.panel(),
            &Panel::Splitting(SplitBillForm::new(sarah))
        );
    }

    #[test]
    fn test_add_friend_clears_selection() {
        let mut controller = SelectionController::new();
        controller.select(&FriendId::new("clark"));

        controller.toggle_add_friend(DEFAULT_AVATAR_URL);

        assert!(controller.is_adding_friend());
        assert_eq!(controller.selected(), None);

        controller.toggle_add_friend(DEFAULT_AVATAR_URL);
        assert_eq!(controller.panel(), &Panel::Idle);
    }

    #[test]
    fn test_select_closes_add_friend() {
        let mut controller = SelectionController::new();
        controller.toggle_add_friend(DEFAULT_AVATAR_URL);

        controller.select(&FriendId::new("sarah"));

        assert!(!controller.is_adding_friend());
        assert_eq!(controller.panel().label(), "splitting");
    }

    #[test]
    fn test_clear() {
        let mut controller = SelectionController::new();
        controller.select(&FriendId::new("clark"));
        controller.clear();
        assert_eq!(controller.panel(), &Panel::Idle);
        assert!(controller.split_bill_form_mut().is_none());
    }
}
