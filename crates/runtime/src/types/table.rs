use crate::{PtrMut, Value, ValueKey, make_ptr_mut};
use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::{fmt, hash::BuildHasherDefault};

/// The hasher used throughout the runtime's tables
pub type LarkHasher = BuildHasherDefault<FxHasher>;

type ValueMap = IndexMap<ValueKey, Value, LarkHasher>;

/// The ordered associative container used in the Lark runtime
///
/// A table serves two roles. As a value row it holds consecutively indexed
/// entries produced by a variadic call, and as a scope it holds named
/// bindings and chains to a parent for outer lookups. Entries preserve
/// insertion order, and assigning `Null` to a key removes the entry.
#[derive(Clone)]
pub struct Table(PtrMut<TableData>);

struct TableData {
    entries: ValueMap,
    parent: Option<Table>,
}

impl Table {
    /// Makes an empty table
    pub fn new() -> Self {
        Self::with_data(ValueMap::default(), None)
    }

    /// Makes an empty table with the given entry capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_data(
            ValueMap::with_capacity_and_hasher(capacity, LarkHasher::default()),
            None,
        )
    }

    /// Makes an empty table that falls back to `parent` for missing keys
    pub fn extend(parent: Table) -> Self {
        Self::with_data(ValueMap::default(), Some(parent))
    }

    /// Makes a fresh scope with `top`'s entries overlaid onto `parent`
    ///
    /// Used when dispatching a compiled function: the closure's captured
    /// environment shadows the body's defining scope, and the result is a
    /// new table so bindings made during the call don't outlive it.
    pub fn overlay(parent: Table, top: &Table) -> Self {
        let result = Self::extend(parent);
        let data = top.0.borrow();
        for (key, value) in &data.entries {
            result.insert(key.clone(), value.clone());
        }
        result
    }

    fn with_data(entries: ValueMap, parent: Option<Table>) -> Self {
        Self(make_ptr_mut!(TableData { entries, parent }))
    }

    /// Returns the number of entries in the table
    ///
    /// Parent entries aren't included in the count.
    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    /// Returns true if the table contains no entries
    pub fn is_empty(&self) -> bool {
        self.0.borrow().entries.is_empty()
    }

    /// Gets the value associated with `key`, checking parent scopes
    ///
    /// Returns `Null` when the key is absent from the whole chain.
    pub fn get(&self, key: &ValueKey) -> Value {
        let data = self.0.borrow();
        match data.entries.get(key) {
            Some(value) => value.clone(),
            None => match &data.parent {
                Some(parent) => parent.get(key),
                None => Value::Null,
            },
        }
    }

    /// Gets the value stored under the integer key `index`
    ///
    /// Row tables index their values from zero, so an absent index means the
    /// row carries nothing in that position.
    pub fn get_index(&self, index: usize) -> Value {
        self.get(&index.into())
    }

    /// Gets the entry in position `position`, in insertion order
    pub fn entry_at(&self, position: usize) -> Option<(ValueKey, Value)> {
        self.0
            .borrow()
            .entries
            .get_index(position)
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    /// Inserts `value` under `key`, removing the entry when the value is `Null`
    pub fn insert(&self, key: ValueKey, value: Value) {
        let mut data = self.0.borrow_mut();
        if value.is_null() {
            data.entries.shift_remove(&key);
        } else {
            data.entries.insert(key, value);
        }
    }

    /// Inserts a value under a string key
    pub fn insert_named(&self, name: &str, value: Value) {
        self.insert(name.into(), value);
    }

    /// Appends `value` under the next free integer key
    ///
    /// `Null` values are skipped, keeping rows densely indexed.
    pub fn push(&self, value: Value) {
        if !value.is_null() {
            let index = self.0.borrow().entries.len();
            self.insert(index.into(), value);
        }
    }

    /// Appends all of `other`'s values, reindexed to follow this table's
    pub fn concat(&self, other: &Table) {
        let values: Vec<Value> = {
            let data = other.0.borrow();
            data.entries.values().cloned().collect()
        };
        for value in values {
            self.push(value);
        }
    }

    /// Returns the table's values in insertion order
    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().entries.values().cloned().collect()
    }

    /// Returns true if `self` and `other` share the same table data
    pub fn ptr_eq(&self, other: &Table) -> bool {
        crate::Ptr::ptr_eq(&self.0, &other.0)
    }

    /// Builds a row table from an iterator of values
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        let result = Self::new();
        for value in values {
            result.push(value);
        }
        result
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_map()
            .entries(data.entries.iter().map(|(k, v)| (k.clone(), v.clone())))
            .finish()
    }
}

impl FromIterator<Value> for Table {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from_values(iter)
    }
}
