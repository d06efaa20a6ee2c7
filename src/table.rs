use std::slice;

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::error::{Result, SymbolError};
use crate::kinds::distinct_kinds;
use crate::names::{name_count, Names};
use crate::value::{Value, ValueKind};

/// ## SymbolTable
///
/// An immutable, ordered mapping from literal names to the values captured alongside them.
///
/// Tables are usually built by the [`symtbl!`](crate::symtbl) macro, which stringifies its
/// arguments into a single comma-separated blob and captures their values in the same order.
/// The blob is borrowed rather than copied, and names are resolved against it once, when the
/// table is built, so iteration is a plain walk over the resolved pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolTable<'a> {
    entries: Vec<(&'a str, Value)>,
}

impl<'a> SymbolTable<'a> {
    /// Pairs each name in the comma-separated `blob` with the value at the same position.
    ///
    /// Fails if the blob does not name exactly one symbol per value, or if it contains an empty
    /// name (`"A,,B"`).
    pub fn new(blob: &'a str, values: Vec<Value>) -> Result<Self> {
        let count = name_count(blob);
        if count != values.len() {
            warn!(
                "{} names in {:?} cannot be paired with {} values",
                count,
                blob,
                values.len()
            );
            return Err(SymbolError::CountMismatch {
                names: count,
                values: values.len(),
            });
        }

        let mut entries = Vec::with_capacity(count);
        for ((ordinal, cursor), value) in Names::new(blob).enumerate().zip(values) {
            let name = cursor.name();
            trace!("resolved {:?} at {} to index {}", name, cursor.position(), ordinal);
            if name.is_empty() || cursor.index() != ordinal {
                warn!("empty name before position {} in {:?}", cursor.position(), blob);
                return Err(SymbolError::EmptyName { index: ordinal });
            }
            entries.push((name, value));
        }
        // A trailing separator leaves the last name without a cursor.
        if entries.len() < count {
            warn!("empty name at the end of {:?}", blob);
            return Err(SymbolError::EmptyName {
                index: entries.len(),
            });
        }
        Ok(Self::from_entries(entries))
    }

    /// Builds a table from explicit `(name, value)` pairs. Names are taken as given.
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<Value>,
    {
        Self::from_entries(
            pairs
                .into_iter()
                .map(|(name, value)| (name, value.into()))
                .collect(),
        )
    }

    pub fn builder() -> SymbolTableBuilder<'a> {
        SymbolTableBuilder::default()
    }

    fn from_entries(entries: Vec<(&'a str, Value)>) -> Self {
        let table = SymbolTable { entries };
        debug!(
            "built symbol table with {} symbols of kinds [{}]",
            table.len(),
            table.kinds().iter().join(", ")
        );
        table
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value of the first symbol called `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| value)
    }

    pub fn get_index(&self, index: usize) -> Option<(&'a str, &Value)> {
        self.entries.get(index).map(|(name, value)| (*name, value))
    }

    /// The distinct kinds of the values in this table, in order of first appearance.
    pub fn kinds(&self) -> Vec<ValueKind> {
        distinct_kinds(self.entries.iter().map(|(_, value)| value.kind()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> Iter<'a, '_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<'a, 't> IntoIterator for &'t SymbolTable<'a> {
    type Item = (&'a str, &'t Value);
    type IntoIter = Iter<'a, 't>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The `(name, value)` pairs of a [`SymbolTable`], in the order they were supplied.
#[derive(Clone, Debug)]
pub struct Iter<'a, 't> {
    inner: slice::Iter<'t, (&'a str, Value)>,
}

impl<'a, 't> Iterator for Iter<'a, 't> {
    type Item = (&'a str, &'t Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (*name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

#[derive(Clone, Debug, Default)]
pub struct SymbolTableBuilder<'a> {
    entries: Vec<(&'a str, Value)>,
}

impl<'a> SymbolTableBuilder<'a> {
    pub fn symbol<V: Into<Value>>(mut self, name: &'a str, value: V) -> Self {
        self.entries.push((name, value.into()));
        self
    }

    pub fn build(self) -> SymbolTable<'a> {
        SymbolTable::from_entries(self.entries)
    }
}
