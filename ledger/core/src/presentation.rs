//! Friends List Projection
//!
//! Read-only view types derived from the registry and the selection. Surfaces
//! render these and nothing else; every call recomputes them from scratch, so
//! there is no view state to keep in sync.

use crate::amount::format_amount;
use crate::forms::{Payer, SplitBillForm};
use crate::friends::{Friend, FriendId, FriendRegistry};
use crate::selection::SelectionController;

/// Who owes whom, from the user's point of view
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BalanceStatus {
    /// The user owes the friend this (positive) amount
    YouOwe(f64),
    /// The friend owes the user this (positive) amount
    OwesYou(f64),
    /// Nobody owes anything
    Even,
}

impl BalanceStatus {
    /// Classify a signed balance
    #[must_use]
    pub fn from_balance(balance: f64) -> Self {
        if balance < 0.0 {
            Self::YouOwe(balance.abs())
        } else if balance > 0.0 {
            Self::OwesYou(balance.abs())
        } else {
            Self::Even
        }
    }

    /// Sentence shown under the friend's name
    #[must_use]
    pub fn describe(&self, name: &str, currency: &str) -> String {
        match self {
            Self::YouOwe(amount) => format!("You owe {name} {currency}{}", format_amount(*amount)),
            Self::OwesYou(amount) => format!("{name} owes you {currency}{}", format_amount(*amount)),
            Self::Even => format!("You and {name} are even"),
        }
    }
}

/// One rendered row of the friends list
#[derive(Clone, Debug, PartialEq)]
pub struct FriendRow {
    /// Friend identifier
    pub id: FriendId,
    /// Display name
    pub name: String,
    /// Avatar image reference
    pub image: String,
    /// Signed balance
    pub balance: f64,
    /// Balance classification
    pub status: BalanceStatus,
    /// Whether this row is the current selection
    pub selected: bool,
}

impl FriendRow {
    fn project(friend: &Friend, selection: &SelectionController) -> Self {
        Self {
            id: friend.id.clone(),
            name: friend.name.clone(),
            image: friend.image.clone(),
            balance: friend.balance,
            status: BalanceStatus::from_balance(friend.balance),
            selected: selection.is_selected(&friend.id),
        }
    }

    /// Status sentence with a currency symbol
    #[must_use]
    pub fn status_text(&self, currency: &str) -> String {
        self.status.describe(&self.name, currency)
    }

    /// Label of the row's toggle button
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.selected {
            "Close"
        } else {
            "Select"
        }
    }
}

/// Project every friend, in registry order
#[must_use]
pub fn friends_list(registry: &FriendRegistry, selection: &SelectionController) -> Vec<FriendRow> {
    registry
        .iter()
        .map(|friend| FriendRow::project(friend, selection))
        .collect()
}

/// Label of the button that opens and closes the add-friend form
#[must_use]
pub fn add_friend_button_label(selection: &SelectionController) -> &'static str {
    if selection.is_adding_friend() {
        "Close"
    } else {
        "Add friend"
    }
}

/// Labels and derived values for an open split-bill form
#[derive(Clone, Debug, PartialEq)]
pub struct SplitBillView {
    /// Form heading
    pub title: String,
    /// Bill total as typed
    pub bill: String,
    /// User's share as typed
    pub paid_by_user: String,
    /// Label of the friend's share field
    pub friend_share_label: String,
    /// Friend's share, empty while there is no bill
    pub paid_by_friend: String,
    /// Who is paying
    pub payer: Payer,
    /// Name shown for the current payer
    pub payer_label: String,
}

impl SplitBillView {
    /// Build the view for a form and the selected friend's name
    #[must_use]
    pub fn new(form: &SplitBillForm, friend_name: &str) -> Self {
        let payer_label = match form.payer() {
            Payer::User => "You".to_string(),
            Payer::Friend => friend_name.to_string(),
        };

        Self {
            title: format!("Split a bill with {friend_name}"),
            bill: form.bill().raw().to_string(),
            paid_by_user: form.paid_by_user().raw().to_string(),
            friend_share_label: format!("{friend_name}'s expense"),
            paid_by_friend: form.paid_by_friend().map(format_amount).unwrap_or_default(),
            payer: form.payer(),
            payer_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friends::initial_friends;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_from_balance() {
        assert_eq!(BalanceStatus::from_balance(-7.0), BalanceStatus::YouOwe(7.0));
        assert_eq!(BalanceStatus::from_balance(20.0), BalanceStatus::OwesYou(20.0));
        assert_eq!(BalanceStatus::from_balance(0.0), BalanceStatus::Even);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            BalanceStatus::YouOwe(7.0).describe("Clark", "$"),
            "You owe Clark $7"
        );
        assert_eq!(
            BalanceStatus::OwesYou(20.5).describe("Sarah", "$"),
            "Sarah owes you $20.5"
        );
        assert_eq!(
            BalanceStatus::Even.describe("Anthony", "$"),
            "You and Anthony are even"
        );
        assert_eq!(
            BalanceStatus::OwesYou(3.0).describe("Sarah", "€"),
            "Sarah owes you €3"
        );
    }

    #[test]
    fn test_friends_list_marks_selection() {
        let registry = FriendRegistry::from_friends(initial_friends()).unwrap();
        let mut selection = SelectionController::new();
        selection.select(&FriendId::new("933372"));

        let rows = friends_list(&registry, &selection);

        let labels: Vec<_> = rows.iter().map(FriendRow::action_label).collect();
        assert_eq!(labels, vec!["Select", "Close", "Select"]);
        assert_eq!(rows[0].status_text("$"), "You owe Clark $7");
    }

    #[test]
    fn test_add_friend_button_label() {
        let mut selection = SelectionController::new();
        assert_eq!(add_friend_button_label(&selection), "Add friend");
        selection.toggle_add_friend("https://i.pravatar.cc/48");
        assert_eq!(add_friend_button_label(&selection), "Close");
    }

    #[test]
    fn test_split_bill_view() {
        let mut form = SplitBillForm::new(FriendId::new("118836"));
        let empty = SplitBillView::new(&form, "Clark");
        assert_eq!(empty.paid_by_friend, "");
        assert_eq!(empty.payer_label, "You");

        form.set_bill("100").unwrap();
        form.set_paid_by_user("40").unwrap();
        form.set_payer(Payer::Friend);
        let view = SplitBillView::new(&form, "Clark");

        assert_eq!(view.title, "Split a bill with Clark");
        assert_eq!(view.friend_share_label, "Clark's expense");
        assert_eq!(view.paid_by_friend, "60");
        assert_eq!(view.payer_label, "Clark");
    }
}
