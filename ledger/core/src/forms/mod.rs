//! Transient Form State
//!
//! The two forms a user fills in. Both hold only ephemeral input; they never
//! touch the registry themselves. Submitting a form yields a value (a new
//! [`Friend`](crate::friends::Friend) or a balance delta) that the
//! [`Ledger`](crate::ledger::Ledger) applies.
//!
//! Failed submissions are silent: `submit` returns `None` and the form keeps
//! its fields.

mod add_friend;
mod split_bill;

pub use add_friend::{AddFriendForm, DEFAULT_AVATAR_URL};
pub use split_bill::{Payer, SplitBillForm};
