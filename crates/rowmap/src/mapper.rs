//! The row materializer.

use crate::{
    ColumnMap, Cursor, Destination, Error, NameMap, Record, Result, Shape, UnmatchedColumns,
};

/// Maps every row of `cursor` into `dest` using the default [`Mapper`].
///
/// See [`Mapper::map_rows`].
pub fn map_rows<C, D>(cursor: &mut C, dest: &mut D) -> Result<()>
where
    C: Cursor + ?Sized,
    D: Destination,
{
    Mapper::default().map_rows(cursor, dest)
}

/// Maps result rows onto records.
///
/// The default mapper rejects result columns that no field resolves to. Use
/// [`Mapper::builder`] to drop them instead.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    unmatched_columns: UnmatchedColumns,
}

/// Configures a [`Mapper`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    unmatched_columns: UnmatchedColumns,
}

impl Builder {
    /// Sets how result columns without a matching field are handled.
    pub fn unmatched_columns(&mut self, policy: UnmatchedColumns) -> &mut Self {
        self.unmatched_columns = policy;
        self
    }

    pub fn build(&self) -> Mapper {
        Mapper {
            unmatched_columns: self.unmatched_columns,
        }
    }
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn unmatched_columns_policy(&self) -> UnmatchedColumns {
        self.unmatched_columns
    }

    /// Reads rows from `cursor` and stores them in `dest`.
    ///
    /// A single-record destination receives the first row and the cursor is
    /// not advanced further; extra rows are not an error. A `Vec` destination
    /// gets one element appended per row.
    ///
    /// Fails with [`Error::is_empty_result`] when the cursor yields no rows.
    /// On any other error the destination may hold part of the result: rows
    /// appended before the failure stay in a `Vec`, and a single record is
    /// only overwritten once its row decoded completely.
    pub fn map_rows<C, D>(&self, cursor: &mut C, dest: &mut D) -> Result<()>
    where
        C: Cursor + ?Sized,
        D: Destination,
    {
        let fields = <D::Record as Record>::FIELDS;
        let names = NameMap::resolve(fields)?;
        let columns = cursor.columns()?;
        let column_map = ColumnMap::build(&columns, &names, self.unmatched_columns)?;

        log::debug!(
            "mapping {} columns onto `{}` ({} bound, shape={:?})",
            column_map.num_columns(),
            std::any::type_name::<D::Record>(),
            column_map.num_bound(),
            D::SHAPE,
        );

        let mut num_rows = 0_usize;

        while cursor.advance()? {
            let record = load_row::<D::Record, C>(cursor, &columns, &column_map)?;
            dest.push(record);
            num_rows += 1;

            log::trace!("mapped row {num_rows}");

            if D::SHAPE == Shape::One {
                log::debug!("single record destination filled; leaving remaining rows unread");
                break;
            }
        }

        if num_rows == 0 {
            return Err(Error::empty_result());
        }

        log::debug!("mapped {num_rows} rows");
        Ok(())
    }
}

fn load_row<R, C>(cursor: &mut C, columns: &[String], column_map: &ColumnMap) -> Result<R>
where
    R: Record,
    C: Cursor + ?Sized,
{
    let mut record = R::blank();

    for (column, ordinal) in column_map.iter() {
        let value = cursor.value(column)?;

        record.load_field(ordinal, value).map_err(|err| {
            if err.is_invalid_destination() {
                err
            } else {
                err.context(Error::decode(&columns[column], R::FIELDS[ordinal].name))
            }
        })?;
    }

    Ok(record)
}
