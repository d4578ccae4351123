use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}

/// Creates a new identifier prefixed with `__rowmap_` so generated bindings
/// cannot collide with user code and are exempt from unused warnings.
pub(crate) fn ident(name: &str) -> syn::Ident {
    quote::format_ident!("__rowmap_{name}")
}
