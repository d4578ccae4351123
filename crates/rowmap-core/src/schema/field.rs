/// Describes one field of a destination record.
///
/// Tables of descriptors are generated by `#[derive(Record)]`, one entry per
/// declared field, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Position of the field in the record, starting at zero.
    pub ordinal: usize,

    /// Field identifier as declared.
    pub name: &'static str,

    /// Tag string from `#[column("...")]`, if any.
    pub tag: Option<&'static str>,
}

impl FieldDescriptor {
    /// Tag value marking a field that never receives a column.
    pub const IGNORE: &'static str = "-";

    pub const fn new(ordinal: usize, name: &'static str, tag: Option<&'static str>) -> Self {
        Self { ordinal, name, tag }
    }

    /// Returns `true` if the field is excluded from mapping.
    pub fn is_ignored(&self) -> bool {
        self.tag == Some(Self::IGNORE)
    }

    /// The alias given by the tag: everything before the first `,`.
    ///
    /// `"user_addr,omitempty"` yields `user_addr`. An empty alias is treated
    /// as absent.
    pub fn alias(&self) -> Option<&'static str> {
        if self.is_ignored() {
            return None;
        }

        let tag = self.tag?;
        let alias = match tag.find(',') {
            Some(pos) => &tag[..pos],
            None => tag,
        };

        if alias.is_empty() {
            None
        } else {
            Some(alias)
        }
    }
}
