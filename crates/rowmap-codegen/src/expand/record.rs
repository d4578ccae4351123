use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;
        let (impl_generics, ty_generics, where_clause) = self.record.generics.split_for_impl();
        let descriptors = self.expand_field_descriptors();
        let blank_fields = self.expand_blank_fields();
        let load_arms = self.expand_load_field_arms();
        let ordinal = util::ident("ordinal");
        let value = util::ident("value");

        quote! {
            impl #impl_generics #rowmap::Record for #ident #ty_generics #where_clause {
                const FIELDS: &'static [#rowmap::FieldDescriptor] = &[
                    #descriptors
                ];

                fn blank() -> Self {
                    Self {
                        #blank_fields
                    }
                }

                fn load_field(
                    &mut self,
                    #ordinal: usize,
                    #value: #rowmap::Value,
                ) -> #rowmap::Result<()> {
                    match #ordinal {
                        #load_arms
                        _ => ::core::result::Result::Err(#rowmap::Error::invalid_destination(
                            ::std::format!(
                                "`{}` has no loadable field at ordinal {}",
                                ::core::stringify!(#ident),
                                #ordinal,
                            ),
                        )),
                    }
                }
            }
        }
    }

    fn expand_field_descriptors(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        self.record
            .fields
            .iter()
            .map(|field| {
                let id = util::int(field.id);
                let name = &field.name;
                let tag = match field.tag() {
                    Some(tag) => quote!(::core::option::Option::Some(#tag)),
                    None => quote!(::core::option::Option::None),
                };

                quote!(#rowmap::FieldDescriptor::new(#id, #name, #tag),)
            })
            .collect()
    }

    fn expand_blank_fields(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        self.record
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                quote!(#ident: #rowmap::Default::default(),)
            })
            .collect()
    }

    fn expand_load_field_arms(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let value = util::ident("value");

        self.record
            .fields
            .iter()
            .filter(|field| !field.is_ignored())
            .map(|field| {
                let id = util::int(field.id);
                let ident = &field.ident;
                let ty = &field.ty;

                quote! {
                    #id => {
                        self.#ident = <#ty as #rowmap::Primitive>::load(#value)?;
                        #rowmap::Ok(())
                    }
                }
            })
            .collect()
    }
}
