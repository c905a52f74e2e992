//! Implementation of `#[derive(Editable)]`.
extern crate proc_macro;
use proc_macro2::Span;
use quote::{ToTokens, TokenStreamExt};

mod editable;

//--------------------------------------------------------------------------------------------------
struct CrateName;
const CRATE: CrateName = CrateName;

impl ToTokens for CrateName {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        tokens.append(syn::Ident::new("semedit", Span::call_site()))
    }
}

//--------------------------------------------------------------------------------------------------

/// Generates one field editor per field of a struct.
///
/// Each editor is exposed as an associated constant named after its field: `Point::x` for
/// `struct Point { x: f64, .. }`, `Pair::elem_0` for `struct Pair(u32, u32)`.
/// The constant has the visibility of the field.
///
/// Field attributes:
/// - `#[edit(skip)]`: no editor for this field
/// - `#[edit(rename = "name")]`: use another name for the constant
#[proc_macro_derive(Editable, attributes(edit))]
pub fn derive_editable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    editable::derive(input)
}
