//! Generic owning container with identity-based duplicate checks.
//!
//! The container is the single owner of its elements. Lookups hand out
//! borrows; removal hands ownership back to the caller. Cloning the
//! container duplicates every element, so the copy shares nothing with the
//! original.

use mediateca_core::{ItemId, Record};
use thiserror::Error;

/// Capabilities an element needs to live in a [`Container`].
pub trait Item {
    /// Identity of this instance.
    fn id(&self) -> ItemId;

    /// Whether this value may be stored. Invalid items are rejected on add.
    fn is_valid(&self) -> bool {
        true
    }

    /// A new, independently owned instance with equal content and a fresh identity.
    fn duplicate(&self) -> Self
    where
        Self: Sized;
}

impl Item for Record {
    fn id(&self) -> ItemId {
        Record::id(self)
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn duplicate(&self) -> Self {
        Record::duplicate(self)
    }
}

/// Errors returned by container operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContainerError {
    /// The same instance is already stored
    #[error("Item {0} is already in the collection")]
    Duplicate(ItemId),

    /// The item fails its own validity check
    #[error("Item is empty and cannot be stored")]
    InvalidItem,

    /// No element with this identity
    #[error("Item {0} not found")]
    NotFound(ItemId),

    /// Positional access outside `[0, len)`
    #[error("Index {index} out of range (collection has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered, owning collection of unique items.
#[derive(Debug)]
pub struct Container<T: Item> {
    items: Vec<T>,
}

impl<T: Item> Default for Container<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Item> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.iter().map(Item::duplicate).collect(),
        }
    }
}

impl<T: Item> Container<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item`, taking ownership. Returns its identity.
    pub fn add(&mut self, item: T) -> Result<ItemId, ContainerError> {
        if !item.is_valid() {
            return Err(ContainerError::InvalidItem);
        }
        let id = item.id();
        if self.contains(id) {
            return Err(ContainerError::Duplicate(id));
        }
        self.items.push(item);
        Ok(id)
    }

    /// Remove the element with identity `id` and hand it back.
    pub fn remove(&mut self, id: ItemId) -> Result<T, ContainerError> {
        let index = self.position(id).ok_or(ContainerError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T, ContainerError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Every element matching `predicate`, in insertion order.
    pub fn find<P>(&self, mut predicate: P) -> Vec<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    /// Snapshot of every element in insertion order.
    pub fn all(&self) -> Vec<&T> {
        self.items.iter().collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        log::debug!("Clearing container with {} items", self.items.len());
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), ContainerError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ContainerError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<'a, T: Item> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: ItemId,
        label: String,
    }

    impl Tag {
        fn new(label: &str) -> Self {
            Self {
                id: ItemId::next(),
                label: label.to_string(),
            }
        }
    }

    impl Item for Tag {
        fn id(&self) -> ItemId {
            self.id
        }

        fn is_valid(&self) -> bool {
            !self.label.is_empty()
        }

        fn duplicate(&self) -> Self {
            Self {
                id: ItemId::next(),
                label: self.label.clone(),
            }
        }
    }

    #[test]
    fn add_preserves_order() {
        let mut c = Container::new();
        c.add(Tag::new("a")).unwrap();
        c.add(Tag::new("b")).unwrap();
        c.add(Tag::new("c")).unwrap();
        let labels: Vec<_> = c.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let mut c = Container::new();
        let tag = Tag::new("a");
        c.add(tag.clone()).unwrap();
        assert_eq!(c.add(tag.clone()), Err(ContainerError::Duplicate(tag.id)));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn equal_content_is_not_a_duplicate() {
        let mut c = Container::new();
        let tag = Tag::new("a");
        c.add(tag.duplicate()).unwrap();
        c.add(tag).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn invalid_item_is_rejected() {
        let mut c: Container<Tag> = Container::new();
        assert_eq!(c.add(Tag::new("")), Err(ContainerError::InvalidItem));
        assert!(c.is_empty());
    }

    #[test]
    fn remove_returns_ownership() {
        let mut c = Container::new();
        let a = Tag::new("a");
        let id = c.add(a.clone()).unwrap();
        c.add(Tag::new("b")).unwrap();
        let removed = c.remove(id).unwrap();
        assert_eq!(removed, a);
        assert_eq!(c.len(), 1);
        assert_eq!(c.remove(id), Err(ContainerError::NotFound(id)));
    }

    #[test]
    fn positional_access_is_range_checked() {
        let mut c = Container::new();
        c.add(Tag::new("a")).unwrap();
        assert_eq!(c.at(0).unwrap().label, "a");
        assert_eq!(
            c.at(1).unwrap_err(),
            ContainerError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert!(c.remove_at(5).is_err());
        assert_eq!(c.len(), 1);
        assert_eq!(c.remove_at(0).unwrap().label, "a");
        assert!(c.at(0).is_err());
    }

    #[test]
    fn find_keeps_order_and_does_not_mutate() {
        let mut c = Container::new();
        for label in ["apple", "banana", "avocado", "cherry"] {
            c.add(Tag::new(label)).unwrap();
        }
        let found: Vec<_> = c
            .find(|t| t.label.starts_with('a'))
            .into_iter()
            .map(|t| t.label.clone())
            .collect();
        assert_eq!(found, ["apple", "avocado"]);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn clone_is_deep_and_independent() {
        let mut original = Container::new();
        original.add(Tag::new("a")).unwrap();
        original.add(Tag::new("b")).unwrap();

        let mut copy = original.clone();
        assert_eq!(copy.len(), 2);
        for (o, c) in original.iter().zip(copy.iter()) {
            assert_eq!(o.label, c.label);
            assert_ne!(o.id, c.id);
        }

        copy.remove_at(0).unwrap();
        copy.at_mut(0).unwrap().label = "changed".into();
        copy.add(Tag::new("c")).unwrap();
        assert_eq!(original.len(), 2);
        assert_eq!(original.at(1).unwrap().label, "b");

        original.clear();
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn clear_empties() {
        let mut c = Container::new();
        c.add(Tag::new("a")).unwrap();
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
    }
}
