use super::NameMap;
use crate::{Error, Result};

/// What to do with a result column that no field resolves to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmatchedColumns {
    /// Fail with an unmatched column error.
    #[default]
    Error,

    /// Drop the column; it populates nothing.
    Ignore,
}

/// Correspondence between cursor column positions and record field ordinals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    /// Indexed by column position. `None` marks a dropped column.
    fields: Vec<Option<usize>>,
}

impl ColumnMap {
    /// Matches each live column name against the record's name map.
    pub fn build(columns: &[String], names: &NameMap, policy: UnmatchedColumns) -> Result<ColumnMap> {
        let mut fields = Vec::with_capacity(columns.len());

        for column in columns {
            match names.get(column) {
                Some(ordinal) => fields.push(Some(ordinal)),
                None if policy == UnmatchedColumns::Ignore => {
                    log::debug!("dropping column `{column}`; no matching field");
                    fields.push(None);
                }
                None => return Err(Error::unmatched_column(column.as_str())),
            }
        }

        Ok(ColumnMap { fields })
    }

    /// Field ordinal bound to the column at `column`, if any.
    pub fn field(&self, column: usize) -> Option<usize> {
        self.fields.get(column).copied().flatten()
    }

    /// Iterates `(column, field)` pairs for every bound column.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter_map(|(column, field)| field.map(|field| (column, field)))
    }

    /// Number of columns bound to a field.
    pub fn num_bound(&self) -> usize {
        self.fields.iter().filter(|field| field.is_some()).count()
    }

    /// Number of columns in the result.
    pub fn num_columns(&self) -> usize {
        self.fields.len()
    }
}
