//! User Events
//!
//! Events sent from a surface to the [`Ledger`](crate::ledger::Ledger). These
//! are every way a UI can report what the user did.
//!
//! # Design Philosophy
//!
//! Surfaces are "dumb" renderers that forward user actions. They don't decide
//! what an action means; the ledger does. Text fields report their whole new
//! value on every keystroke rather than a diff.

use serde::{Deserialize, Serialize};

use crate::forms::Payer;
use crate::friends::FriendId;

/// Events from a surface to the ledger
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum UserEvent {
    // ============================================
    // Friends List
    // ============================================
    /// User pressed Select/Close on a friend row
    SelectFriend {
        /// Which friend
        friend_id: FriendId,
    },

    /// User pressed the Add friend/Close button
    ToggleAddFriend,

    /// User closed whichever form is open
    Dismiss,

    // ============================================
    // Add-Friend Form
    // ============================================
    /// Name field changed
    AddFriendNameChanged {
        /// Full new field value
        value: String,
    },

    /// Image URL field changed
    AddFriendImageChanged {
        /// Full new field value
        value: String,
    },

    /// User submitted the add-friend form
    SubmitAddFriend,

    // ============================================
    // Split-Bill Form
    // ============================================
    /// Bill total field changed
    BillChanged {
        /// Full new field text
        input: String,
    },

    /// User's share field changed
    PaidByUserChanged {
        /// Full new field text
        input: String,
    },

    /// Payer choice changed
    PayerChanged {
        /// Who is paying
        payer: Payer,
    },

    /// User submitted the split-bill form
    SubmitSplitBill,
}

impl UserEvent {
    /// Short name for logging (never includes field contents)
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SelectFriend { .. } => "select_friend",
            Self::ToggleAddFriend => "toggle_add_friend",
            Self::Dismiss => "dismiss",
            Self::AddFriendNameChanged { .. } => "add_friend_name_changed",
            Self::AddFriendImageChanged { .. } => "add_friend_image_changed",
            Self::SubmitAddFriend => "submit_add_friend",
            Self::BillChanged { .. } => "bill_changed",
            Self::PaidByUserChanged { .. } => "paid_by_user_changed",
            Self::PayerChanged { .. } => "payer_changed",
            Self::SubmitSplitBill => "submit_split_bill",
        }
    }
}

/// What handling an event did
#[derive(Clone, Debug, PartialEq)]
pub enum EventOutcome {
    /// State changed
    Applied,
    /// The event applied to the open form but was refused (empty field,
    /// unparseable amount, share over the bill)
    Rejected,
    /// The event does not apply to the current panel
    Ignored,
    /// A friend was added and the add-friend form closed
    FriendAdded(FriendId),
    /// A bill was split and the selection cleared
    Settled {
        /// Friend whose balance changed
        friend_id: FriendId,
        /// Amount added to the balance
        delta: f64,
    },
    /// The split form closed but no balance changed because the selected
    /// friend is no longer in the registry
    SettlementSkipped(FriendId),
}

impl EventOutcome {
    /// Whether the ledger state changed
    #[must_use]
    pub fn changed_state(&self) -> bool {
        !matches!(self, Self::Rejected | Self::Ignored)
    }
}
