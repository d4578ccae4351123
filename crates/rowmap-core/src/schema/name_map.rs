use super::{canonical_name, FieldDescriptor};
use crate::{Error, Result};

use indexmap::{map::Entry, IndexMap};

/// Maps canonical column names to field ordinals.
///
/// Keys are stored lower-cased so lookups can fold the live column name the
/// same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMap {
    names: IndexMap<String, usize>,
}

impl NameMap {
    /// Builds the name map for a record's field table.
    ///
    /// Ignored fields get no entry. A field with an alias is known by the
    /// alias only; otherwise by the canonical form of its identifier. When two
    /// fields resolve to the same name the later one wins.
    pub fn resolve(fields: &[FieldDescriptor]) -> Result<NameMap> {
        let mut names = IndexMap::with_capacity(fields.len());

        for (position, field) in fields.iter().enumerate() {
            if field.ordinal != position {
                return Err(Error::invalid_destination(format!(
                    "field `{}` declares ordinal {} but is at position {position}",
                    field.name, field.ordinal
                )));
            }

            if field.is_ignored() {
                continue;
            }

            let name = match field.alias() {
                Some(alias) => alias.to_lowercase(),
                None => canonical_name(field.name),
            };

            match names.entry(name) {
                Entry::Occupied(mut entry) => {
                    let previous = entry.insert(field.ordinal);
                    log::warn!(
                        "field `{}` shadows field `{}` for column name `{}`",
                        field.name,
                        fields[previous].name,
                        entry.key(),
                    );
                }
                Entry::Vacant(entry) => {
                    entry.insert(field.ordinal);
                }
            }
        }

        Ok(NameMap { names })
    }

    /// Looks up the field ordinal for a column name, ignoring case.
    pub fn get(&self, column: &str) -> Option<usize> {
        match self.names.get(column) {
            Some(ordinal) => Some(*ordinal),
            None => self.names.get(&column.to_lowercase()).copied(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(name, ordinal)` pairs in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.names.iter().map(|(name, ordinal)| (name.as_str(), *ordinal))
    }
}
