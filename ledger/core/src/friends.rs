//! Friends and the Friend Registry
//!
//! Types for the people the user splits bills with. This module owns the
//! registry data; the [`Ledger`](crate::ledger::Ledger) decides when it changes.
//!
//! # Sign Convention
//!
//! A friend's balance is signed from the user's point of view:
//! - positive: the friend owes the user
//! - negative: the user owes the friend
//! - zero: the two are even

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Friend identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(pub String);

impl FriendId {
    /// Create a friend ID from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random friend ID (UUID v4)
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FriendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A friend with a running balance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    /// Unique friend identifier
    pub id: FriendId,
    /// Display name
    pub name: String,
    /// Avatar image reference (opaque URL, never resolved)
    pub image: String,
    /// Signed balance; positive means the friend owes the user
    pub balance: f64,
}

impl Friend {
    /// Create a friend with an explicit balance
    pub fn new(
        id: FriendId,
        name: impl Into<String>,
        image: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    /// Copy of this friend with `delta` added to the balance
    #[must_use]
    pub fn with_delta(&self, delta: f64) -> Self {
        Self {
            balance: self.balance + delta,
            ..self.clone()
        }
    }
}

/// The friends a fresh ledger starts with
#[must_use]
pub fn initial_friends() -> Vec<Friend> {
    vec![
        Friend::new(
            FriendId::new("118836"),
            "Clark",
            "https://i.pravatar.cc/48?u=118836",
            -7.0,
        ),
        Friend::new(
            FriendId::new("933372"),
            "Sarah",
            "https://i.pravatar.cc/48?u=933372",
            20.0,
        ),
        Friend::new(
            FriendId::new("499476"),
            "Anthony",
            "https://i.pravatar.cc/48?u=499476",
            0.0,
        ),
    ]
}

/// Errors raised by registry operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No friend with this ID is registered
    #[error("No friend with id {0}")]
    UnknownFriend(FriendId),

    /// A friend with this ID is already registered
    #[error("Friend id {0} is already registered")]
    DuplicateFriend(FriendId),
}

/// Ordered collection of friends
///
/// Friends are kept in insertion order for display and are never removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of friends, rejecting duplicate IDs
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateFriend`] on the first repeated ID.
    pub fn from_friends(friends: impl IntoIterator<Item = Friend>) -> Result<Self, LedgerError> {
        let mut registry = Self::new();
        for friend in friends {
            registry.try_add(friend)?;
        }
        Ok(registry)
    }

    /// Append a friend
    ///
    /// Note: This method does not check for duplicate IDs. Use `try_add` when
    /// the ID did not come from [`FriendId::generate`].
    pub fn add(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Append a friend, checking the ID is not already registered
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateFriend`] if the ID is taken.
    pub fn try_add(&mut self, friend: Friend) -> Result<(), LedgerError> {
        if self.contains(&friend.id) {
            return Err(LedgerError::DuplicateFriend(friend.id));
        }
        self.add(friend);
        Ok(())
    }

    /// New registry with `delta` added to one friend's balance
    ///
    /// Every other record is carried over unchanged and `self` is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownFriend`] if no friend has this ID.
    pub fn settled(&self, id: &FriendId, delta: f64) -> Result<Self, LedgerError> {
        if !self.contains(id) {
            return Err(LedgerError::UnknownFriend(id.clone()));
        }

        let friends = self
            .friends
            .iter()
            .map(|friend| {
                if &friend.id == id {
                    friend.with_delta(delta)
                } else {
                    friend.clone()
                }
            })
            .collect();

        Ok(Self { friends })
    }

    /// Get a friend by ID
    #[must_use]
    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    /// Whether a friend with this ID is registered
    #[must_use]
    pub fn contains(&self, id: &FriendId) -> bool {
        self.get(id).is_some()
    }

    /// Friend at a display position
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Friend> {
        self.friends.get(index)
    }

    /// All friends in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    /// Number of registered friends
    #[must_use]
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
