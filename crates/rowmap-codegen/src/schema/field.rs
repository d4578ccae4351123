use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing record
    pub(crate) id: usize,

    /// Field identifier, as written (possibly raw)
    pub(crate) ident: syn::Ident,

    /// Declared name without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Parsed `#[column]` attribute
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("column") {
                continue;
            }

            if column.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
            } else if let Some(parsed) = errs.check(Column::from_ast(attr)) {
                column = Some(parsed);
            }
        }

        errs.finish()?;

        Ok(Self {
            id,
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            column,
        })
    }

    /// Tag string recorded in the field descriptor.
    pub(crate) fn tag(&self) -> Option<String> {
        self.column.as_ref().and_then(Column::tag)
    }

    pub(crate) fn is_ignored(&self) -> bool {
        self.tag().as_deref() == Some("-")
    }
}
