//! Selection-synchronized friends store.
//!
//! The store owns the ordered list of friends shown by both the table and the
//! form. Every mutation is described by a [`StoreAction`] and applied through
//! the pure [`reduce`] function, so the table and the form never hold their own
//! copy of the truth: they render whatever snapshot the store hands them.
//!
//! At most one friend is selected at any time. Selecting a row clears all the
//! others; selecting the already-selected row clears it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Index {index} is out of range for a list of {len} friends")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// One friend entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Friend {
    pub name: String,
    pub email: String,
    /// Only the store flips this; seeds loaded from config never carry it.
    #[serde(rename = "isSelected", skip_deserializing)]
    is_selected: bool,
}

impl Friend {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            is_selected: false,
        }
    }

    /// A blank row, as pushed by "Add Friend".
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn field(&self, field: FriendField) -> &str {
        match field {
            FriendField::Name => &self.name,
            FriendField::Email => &self.email,
        }
    }
}

/// Editable fields of a friend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FriendField {
    Name,
    Email,
}

impl FriendField {
    pub fn label(self) -> &'static str {
        match self {
            FriendField::Name => "Name",
            FriendField::Email => "Email",
        }
    }
}

/// A single mutation of the friends list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    ToggleSelect(usize),
    Append(Friend),
    RemoveAt(usize),
    UpdateField {
        index: usize,
        field: FriendField,
        value: String,
    },
}

fn check_index(friends: &[Friend], index: usize) -> StoreResult<()> {
    if index < friends.len() {
        Ok(())
    } else {
        Err(StoreError::IndexOutOfRange {
            index,
            len: friends.len(),
        })
    }
}

/// Apply `action` to `friends` and return the new list.
///
/// The input is never touched; on error nothing has changed.
pub fn reduce(friends: &[Friend], action: &StoreAction) -> StoreResult<Vec<Friend>> {
    match action {
        StoreAction::ToggleSelect(index) => {
            check_index(friends, *index)?;
            let was_selected = friends[*index].is_selected;
            let mut next: Vec<Friend> = friends
                .iter()
                .cloned()
                .map(|mut friend| {
                    friend.is_selected = false;
                    friend
                })
                .collect();
            next[*index].is_selected = !was_selected;
            Ok(next)
        }
        StoreAction::Append(friend) => {
            let mut next = friends.to_vec();
            next.push(Friend {
                is_selected: false,
                ..friend.clone()
            });
            Ok(next)
        }
        StoreAction::RemoveAt(index) => {
            check_index(friends, *index)?;
            let mut next = friends.to_vec();
            next.remove(*index);
            Ok(next)
        }
        StoreAction::UpdateField { index, field, value } => {
            check_index(friends, *index)?;
            let mut next = friends.to_vec();
            match field {
                FriendField::Name => next[*index].name = value.clone(),
                FriendField::Email => next[*index].email = value.clone(),
            }
            Ok(next)
        }
    }
}

/// Owns the friends list and its seed.
#[derive(Debug, Clone, Default)]
pub struct FriendStore {
    seed: Vec<Friend>,
    friends: Vec<Friend>,
}

impl FriendStore {
    /// Create a store from a seed. Any selection in the seed is dropped.
    pub fn new(seed: Vec<Friend>) -> Self {
        let seed: Vec<Friend> = seed
            .into_iter()
            .map(|friend| Friend::new(friend.name, friend.email))
            .collect();
        Self {
            friends: seed.clone(),
            seed,
        }
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn seed(&self) -> &[Friend] {
        &self.seed
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Friend> {
        self.friends.get(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.friends.iter().position(Friend::is_selected)
    }

    pub fn selected(&self) -> Option<&Friend> {
        self.friends.iter().find(|friend| friend.is_selected)
    }

    /// Apply an action, replacing the list only when it succeeds.
    pub fn apply(&mut self, action: StoreAction) -> StoreResult<&[Friend]> {
        match reduce(&self.friends, &action) {
            Ok(next) => {
                log::debug!("Store: applied {:?} ({} friends)", action, next.len());
                self.friends = next;
                Ok(&self.friends)
            }
            Err(e) => {
                log::debug!("Store: rejected {:?}: {}", action, e);
                Err(e)
            }
        }
    }

    pub fn toggle_select(&mut self, index: usize) -> StoreResult<&[Friend]> {
        self.apply(StoreAction::ToggleSelect(index))
    }

    pub fn append(&mut self, friend: Friend) -> StoreResult<&[Friend]> {
        self.apply(StoreAction::Append(friend))
    }

    pub fn remove_at(&mut self, index: usize) -> StoreResult<&[Friend]> {
        self.apply(StoreAction::RemoveAt(index))
    }

    pub fn update_field(&mut self, index: usize, field: FriendField, value: impl Into<String>) -> StoreResult<&[Friend]> {
        self.apply(StoreAction::UpdateField {
            index,
            field,
            value: value.into(),
        })
    }

    /// Restore the seed. The seed never carries a selection.
    pub fn reset(&mut self) -> &[Friend] {
        log::debug!("Store: reset to {} seed friends", self.seed.len());
        self.friends = self.seed.clone();
        &self.friends
    }
}
