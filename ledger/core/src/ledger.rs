//! Ledger - The Application State
//!
//! The Ledger owns everything the program knows: the friend registry, the
//! selection controller, and the configuration. Surfaces send it
//! [`UserEvent`]s; it applies exactly one transition per event.
//!
//! # Design Philosophy
//!
//! The Ledger is UI-agnostic. It doesn't know whether it is driven by a
//! terminal, a test, or anything else. Rendering goes through the read-only
//! projection in [`presentation`](crate::presentation).

use crate::config::LedgerConfig;
use crate::events::{EventOutcome, UserEvent};
use crate::friends::{FriendId, FriendRegistry, LedgerError};
use crate::presentation::{self, FriendRow, SplitBillView};
use crate::selection::{Panel, SelectionController};

/// The bill-splitting state machine
#[derive(Clone, Debug)]
pub struct Ledger {
    /// Configuration
    config: LedgerConfig,
    /// Friends and balances
    friends: FriendRegistry,
    /// Open form and selected friend
    selection: SelectionController,
}

impl Ledger {
    /// Create a ledger seeded from configuration
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateFriend`] if the seed list repeats an ID.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        let friends = FriendRegistry::from_friends(config.starting_friends().to_vec())?;
        Ok(Self::with_friends(config, friends))
    }

    /// Create a ledger over an explicit registry
    #[must_use]
    pub fn with_friends(config: LedgerConfig, friends: FriendRegistry) -> Self {
        tracing::debug!(friends = friends.len(), "Ledger created");
        Self {
            config,
            friends,
            selection: SelectionController::new(),
        }
    }

    /// Get configuration
    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Get the friend registry
    #[must_use]
    pub fn friends(&self) -> &FriendRegistry {
        &self.friends
    }

    /// Get the selection controller
    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Get the open panel
    #[must_use]
    pub fn panel(&self) -> &Panel {
        self.selection.panel()
    }

    /// Friends list rows for rendering
    #[must_use]
    pub fn friends_list(&self) -> Vec<FriendRow> {
        presentation::friends_list(&self.friends, &self.selection)
    }

    /// Label of the add-friend toggle button
    #[must_use]
    pub fn add_friend_button_label(&self) -> &'static str {
        presentation::add_friend_button_label(&self.selection)
    }

    /// Split-bill form view, while a friend is selected
    #[must_use]
    pub fn split_bill_view(&self) -> Option<SplitBillView> {
        match self.selection.panel() {
            Panel::Splitting(form) => {
                let name = self
                    .friends
                    .get(form.friend_id())
                    .map_or("", |friend| friend.name.as_str());
                Some(SplitBillView::new(form, name))
            }
            _ => None,
        }
    }

    /// Apply an event and return the resulting state
    ///
    /// Transition form of [`handle_event`](Self::handle_event) for callers
    /// that treat the ledger as a value.
    #[must_use]
    pub fn update(mut self, event: UserEvent) -> Self {
        self.handle_event(event);
        self
    }

    /// Handle an event from a surface
    pub fn handle_event(&mut self, event: UserEvent) -> EventOutcome {
        let kind = event.kind();
        let outcome = match event {
            UserEvent::SelectFriend { friend_id } => self.select_friend(&friend_id),
            UserEvent::ToggleAddFriend => {
                self.selection
                    .toggle_add_friend(&self.config.default_avatar_url);
                EventOutcome::Applied
            }
            UserEvent::Dismiss => {
                if matches!(self.selection.panel(), Panel::Idle) {
                    EventOutcome::Ignored
                } else {
                    self.selection.clear();
                    EventOutcome::Applied
                }
            }
            UserEvent::AddFriendNameChanged { value } => {
                match self.selection.add_friend_form_mut() {
                    Some(form) => {
                        form.set_name(value);
                        EventOutcome::Applied
                    }
                    None => EventOutcome::Ignored,
                }
            }
            UserEvent::AddFriendImageChanged { value } => {
                match self.selection.add_friend_form_mut() {
                    Some(form) => {
                        form.set_image(value);
                        EventOutcome::Applied
                    }
                    None => EventOutcome::Ignored,
                }
            }
            UserEvent::SubmitAddFriend => self.submit_add_friend(),
            UserEvent::BillChanged { input } => match self.selection.split_bill_form_mut() {
                Some(form) => match form.set_bill(&input) {
                    Ok(()) => EventOutcome::Applied,
                    Err(e) => {
                        tracing::debug!(error = %e, "Bill edit rejected");
                        EventOutcome::Rejected
                    }
                },
                None => EventOutcome::Ignored,
            },
            UserEvent::PaidByUserChanged { input } => match self.selection.split_bill_form_mut() {
                Some(form) => match form.set_paid_by_user(&input) {
                    Ok(true) => EventOutcome::Applied,
                    Ok(false) => {
                        tracing::debug!("Share edit exceeds bill, keeping previous value");
                        EventOutcome::Rejected
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Share edit rejected");
                        EventOutcome::Rejected
                    }
                },
                None => EventOutcome::Ignored,
            },
            UserEvent::PayerChanged { payer } => match self.selection.split_bill_form_mut() {
                Some(form) => {
                    form.set_payer(payer);
                    EventOutcome::Applied
                }
                None => EventOutcome::Ignored,
            },
            UserEvent::SubmitSplitBill => self.submit_split_bill(),
        };

        tracing::debug!(
            event = kind,
            outcome = ?outcome,
            panel = self.selection.panel().label(),
            "Event handled"
        );
        outcome
    }

    /// Select or deselect a friend
    fn select_friend(&mut self, friend_id: &FriendId) -> EventOutcome {
        if !self.friends.contains(friend_id) {
            tracing::warn!(friend_id = %friend_id, "Ignoring selection of unknown friend");
            return EventOutcome::Ignored;
        }
        self.selection.select(friend_id);
        EventOutcome::Applied
    }

    /// Submit the add-friend form
    fn submit_add_friend(&mut self) -> EventOutcome {
        let Some(form) = self.selection.add_friend_form_mut() else {
            return EventOutcome::Ignored;
        };

        match form.submit() {
            Some(friend) => {
                let id = friend.id.clone();
                tracing::info!(friend_id = %id, name = %friend.name, "Friend added");
                self.friends.add(friend);
                self.selection.clear();
                EventOutcome::FriendAdded(id)
            }
            None => EventOutcome::Rejected,
        }
    }

    /// Submit the split-bill form and settle the selected friend
    fn submit_split_bill(&mut self) -> EventOutcome {
        let Panel::Splitting(form) = self.selection.panel() else {
            return EventOutcome::Ignored;
        };
        let Some(delta) = form.submit() else {
            return EventOutcome::Rejected;
        };
        let friend_id = form.friend_id().clone();

        let outcome = match self.friends.settled(&friend_id, delta) {
            Ok(friends) => {
                self.friends = friends;
                tracing::info!(friend_id = %friend_id, delta, "Bill split");
                EventOutcome::Settled { friend_id, delta }
            }
            Err(e) => {
                // Registry stays as it was
                tracing::warn!(error = %e, "Settlement skipped");
                EventOutcome::SettlementSkipped(friend_id)
            }
        };
        self.selection.clear();

        outcome
    }
}
