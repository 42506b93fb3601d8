//! Add-friend form

use crate::friends::{Friend, FriendId};

/// Placeholder avatar service used when nothing else is configured
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// Input state for adding a friend
#[derive(Clone, Debug, PartialEq)]
pub struct AddFriendForm {
    name: String,
    image: String,
    /// Image URL the form resets to
    default_image: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_URL)
    }
}

impl AddFriendForm {
    /// Create an empty form with a pre-filled image URL
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    /// Current name text
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current image URL text
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Replace the name text
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the image URL text
    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    /// Build a new friend from the form
    ///
    /// Returns `None` and leaves the form untouched if either field is empty.
    /// On success the avatar URL gets the new ID as a discriminator, so the
    /// placeholder service hands back the same picture on every render, and
    /// both fields reset.
    pub fn submit(&mut self) -> Option<Friend> {
        if self.name.is_empty() || self.image.is_empty() {
            return None;
        }

        let id = FriendId::generate();
        let image = format!("{}?={}", self.image, id);
        let friend = Friend::new(id, std::mem::take(&mut self.name), image, 0.0);

        self.image = self.default_image.clone();

        Some(friend)
    }
}
