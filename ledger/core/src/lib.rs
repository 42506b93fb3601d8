//! Ledger Core - Headless Bill Splitting for bill-splitter
//!
//! This crate holds all of the bill-splitting state and every transition on
//! it, completely independent of any UI framework. The terminal surface is a
//! thin client on top; tests drive it headless.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      UI Surface                          │
//! │             TUI (ratatui) / tests / headless             │
//! │                          │                               │
//! │          UserEvent (up)  │  FriendRow, SplitBillView     │
//! │                          │  (read-only projection, down) │
//! └──────────────────────────┼───────────────────────────────┘
//!                            │
//! ┌──────────────────────────┼───────────────────────────────┐
//! │                     LEDGER CORE                          │
//! │  ┌───────────────────────┴────────────────────────────┐  │
//! │  │                      Ledger                        │  │
//! │  │  ┌────────────────┐  ┌───────────────────────────┐ │  │
//! │  │  │ FriendRegistry │  │   SelectionController     │ │  │
//! │  │  │ (balances)     │  │ Idle | AddingFriend(form) │ │  │
//! │  │  │                │  │      | Splitting(form)    │ │  │
//! │  │  └────────────────┘  └───────────────────────────┘ │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Ledger`]: Owns the registry, the selection and the configuration
//! - [`UserEvent`]: Everything a surface can report
//! - [`FriendRegistry`]: Friends and balances
//! - [`SelectionController`] / [`Panel`]: Which form is open
//! - [`AddFriendForm`] / [`SplitBillForm`]: Transient form input
//!
//! # Quick Start
//!
//! ```
//! use ledger_core::{FriendId, Ledger, LedgerConfig, UserEvent};
//!
//! let ledger = Ledger::new(LedgerConfig::default())
//!     .unwrap()
//!     .update(UserEvent::SelectFriend { friend_id: FriendId::new("118836") })
//!     .update(UserEvent::BillChanged { input: "100".into() })
//!     .update(UserEvent::PaidByUserChanged { input: "40".into() })
//!     .update(UserEvent::SubmitSplitBill);
//!
//! let clark = ledger.friends().get(&FriendId::new("118836")).unwrap();
//! assert_eq!(clark.balance, 53.0);
//! ```
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod amount;
pub mod config;
pub mod events;
pub mod forms;
pub mod friends;
pub mod ledger;
pub mod presentation;
pub mod selection;

// Re-exports for convenience
pub use amount::{format_amount, AmountError, AmountInput};
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, LedgerConfig, LedgerToml,
};
pub use events::{EventOutcome, UserEvent};
pub use forms::{AddFriendForm, Payer, SplitBillForm, DEFAULT_AVATAR_URL};
pub use friends::{initial_friends, Friend, FriendId, FriendRegistry, LedgerError};
pub use ledger::Ledger;
pub use presentation::{BalanceStatus, FriendRow, SplitBillView};
pub use selection::{Panel, SelectionController};
