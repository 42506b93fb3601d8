//! Split-bill form

use serde::{Deserialize, Serialize};

use crate::amount::{AmountError, AmountInput};
use crate::friends::FriendId;

/// Who pays the bill up front
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payer {
    /// The local user pays
    #[default]
    User,
    /// The selected friend pays
    Friend,
}

impl Payer {
    /// The other party
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::User => Self::Friend,
            Self::Friend => Self::User,
        }
    }
}

/// Input state for splitting a bill with one friend
#[derive(Clone, Debug, PartialEq)]
pub struct SplitBillForm {
    friend_id: FriendId,
    bill: AmountInput,
    paid_by_user: AmountInput,
    payer: Payer,
}

impl SplitBillForm {
    /// Create an empty form for a friend
    #[must_use]
    pub fn new(friend_id: FriendId) -> Self {
        Self {
            friend_id,
            bill: AmountInput::default(),
            paid_by_user: AmountInput::default(),
            payer: Payer::default(),
        }
    }

    /// The friend this bill is split with
    #[must_use]
    pub fn friend_id(&self) -> &FriendId {
        &self.friend_id
    }

    /// Bill total input
    #[must_use]
    pub fn bill(&self) -> &AmountInput {
        &self.bill
    }

    /// User's share input
    #[must_use]
    pub fn paid_by_user(&self) -> &AmountInput {
        &self.paid_by_user
    }

    /// Who is paying
    #[must_use]
    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Friend's share: bill minus the user's share
    ///
    /// `None` while no (or a zero) bill has been entered.
    #[must_use]
    pub fn paid_by_friend(&self) -> Option<f64> {
        self.bill
            .value()
            .filter(|bill| *bill != 0.0)
            .map(|bill| bill - self.paid_by_user.value_or_zero())
    }

    /// Replace the bill total
    ///
    /// # Errors
    ///
    /// Returns [`AmountError`] and keeps the previous total if the text is
    /// not a number.
    pub fn set_bill(&mut self, input: &str) -> Result<(), AmountError> {
        self.bill = AmountInput::parse(input)?;
        Ok(())
    }

    /// Replace the user's share
    ///
    /// Returns `Ok(false)` and keeps the previous share when the new value is
    /// larger than the current bill (a missing bill counts as zero).
    ///
    /// # Errors
    ///
    /// Returns [`AmountError`] and keeps the previous share if the text is
    /// not a number.
    pub fn set_paid_by_user(&mut self, input: &str) -> Result<bool, AmountError> {
        let candidate = AmountInput::parse(input)?;
        if candidate.value_or_zero() > self.bill.value_or_zero() {
            return Ok(false);
        }
        self.paid_by_user = candidate;
        Ok(true)
    }

    /// Set who is paying
    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// Balance delta for the selected friend
    ///
    /// Returns `None` when the bill or the user's share is missing or zero.
    /// If the user pays, the friend owes their share (positive delta). If
    /// the friend pays, the user owes their own share (negative delta).
    #[must_use]
    pub fn submit(&self) -> Option<f64> {
        if !self.bill.is_present() || !self.paid_by_user.is_present() {
            return None;
        }

        match self.payer {
            Payer::User => self.paid_by_friend(),
            Payer::Friend => Some(-self.paid_by_user.value_or_zero()),
        }
    }
}
