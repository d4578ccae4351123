extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowmap::Record` for a struct with named fields.
///
/// Fields are matched to result columns by the snake-case form of their name.
/// `#[column("name")]` overrides it; anything after a `,` in the tag is
/// ignored. `#[column("-")]` or `#[column(skip)]` leaves the field out.
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
