//! Id-keyed entity collections
//!
//! A snapshot keeps each of the five tables in an [`EntityCollection`], a map
//! from the entity's key to the record itself.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::models::EntityModel;

/// Core trait for model collections
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Add a model to the collection.
    ///
    /// Returns `false` and keeps the existing record when the key is already
    /// present.
    fn add(&mut self, model: T) -> bool;

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<&T>;

    /// Iterate over all models in the collection, in no particular order
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|model| predicate(model)).collect()
    }

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }
}

/// Generic model collection implementation
#[derive(Debug)]
pub struct EntityCollection<T: EntityModel> {
    /// Models indexed by ID
    items: FxHashMap<T::Id, T>,
}

impl<T: EntityModel> EntityCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
        }
    }

    /// Create a collection with room for `capacity` models
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Get a model through a borrowed form of its identifier
    pub fn lookup<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.get(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: EntityModel> Default for EntityCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> ModelCollection<T> for EntityCollection<T> {
    fn add(&mut self, model: T) -> bool {
        let id = model.id();
        if self.items.contains_key(&id) {
            return false;
        }
        self.items.insert(id, model);
        true
    }

    fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.items.values()
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}
