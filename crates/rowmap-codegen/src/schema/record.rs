use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Struct generics, carried over to the generated impl
    pub(crate) generics: syn::Generics,

    /// Fields in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Record` can only be derived for structs",
            ));
        };

        let syn::Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "record fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields = Vec::with_capacity(named.named.len());

        for (id, field) in named.named.iter().enumerate() {
            if let Some(field) = errs.check(Field::from_ast(field, id)) {
                fields.push(field);
            }
        }

        errs.finish()?;

        Ok(Self {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            fields,
        })
    }
}
