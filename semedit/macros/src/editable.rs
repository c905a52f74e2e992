use crate::CRATE;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;

const EDIT_ATTR_PATH: &str = "edit";
const SKIP_ATTR_PATH: &str = "skip";
const RENAME_ATTR_PATH: &str = "rename";

pub fn derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);

    let result = match &input.data {
        syn::Data::Struct(s) => derive_struct(&input, s),
        syn::Data::Enum(e) => Err(syn::Error::new(
            e.enum_token.span(),
            "`Editable` cannot be derived for enums",
        )),
        syn::Data::Union(u) => Err(syn::Error::new(
            u.union_token.span(),
            "`Editable` cannot be derived for unions",
        )),
    };

    result.unwrap_or_else(|err| err.to_compile_error()).into()
}

/// Options given with `#[edit(...)]` on a field.
#[derive(Default)]
struct FieldAttrs {
    skip: bool,
    rename: Option<syn::Ident>,
}

impl FieldAttrs {
    fn parse(field: &syn::Field) -> syn::Result<FieldAttrs> {
        let mut attrs = FieldAttrs::default();
        for attr in field.attrs.iter() {
            if !attr.path().is_ident(EDIT_ATTR_PATH) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(SKIP_ATTR_PATH) {
                    attrs.skip = true;
                    Ok(())
                } else if meta.path.is_ident(RENAME_ATTR_PATH) {
                    let name: syn::LitStr = meta.value()?.parse()?;
                    attrs.rename = Some(name.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `rename = \"...\"`"))
                }
            })?;
        }
        Ok(attrs)
    }
}

fn derive_struct(input: &syn::DeriveInput, s: &syn::DataStruct) -> syn::Result<TokenStream> {
    let ty = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "`Editable` cannot be derived for generic types",
        ));
    }

    let fields = match &s.fields {
        syn::Fields::Named(fields_named) => &fields_named.named,
        syn::Fields::Unnamed(fields_unnamed) => &fields_unnamed.unnamed,
        syn::Fields::Unit => {
            return Err(syn::Error::new(
                input.ident.span(),
                "`Editable` cannot be derived for unit structs",
            ))
        }
    };

    // every field is moved out of the whole and back into the edited whole
    let members: Vec<syn::Member> = fields
        .iter()
        .enumerate()
        .map(|(i, f)| match &f.ident {
            Some(ident) => syn::Member::Named(ident.clone()),
            None => syn::Member::Unnamed(syn::Index::from(i)),
        })
        .collect();
    let bindings: Vec<syn::Ident> = (0..fields.len())
        .map(|i| syn::Ident::new(&format!("__field_{}", i), Span::call_site()))
        .collect();

    let mut decls = Vec::new();
    let mut impls = Vec::new();
    let mut associated_items = Vec::new();

    for (i, f) in fields.iter().enumerate() {
        let attrs = FieldAttrs::parse(f)?;
        if attrs.skip {
            continue;
        }

        let name = match (&attrs.rename, &f.ident) {
            (Some(rename), _) => rename.clone(),
            (None, Some(ident)) => ident.clone(),
            (None, None) => syn::Ident::new(&format!("elem_{}", i), f.span()),
        };
        let editor_ty_name = syn::Ident::new(&format!("{}Field_{}", ty, name.unraw()), Span::call_site());
        let fty = &f.ty;
        let vis = &f.vis;
        let target = &bindings[i];

        decls.push(quote! {
            #[allow(non_camel_case_types)]
            #[derive(Copy, Clone, Debug, Default)]
            #vis struct #editor_ty_name;
        });

        impls.push(quote! {
            impl #CRATE::Editor<#ty, #fty> for #editor_ty_name {
                fn try_edit<__F>(&self, whole: #ty, f: &__F) -> #CRATE::EditResult<#ty>
                where
                    __F: ::core::ops::Fn(#fty) -> #CRATE::EditResult<#fty> + ::core::clone::Clone + 'static,
                {
                    let #ty { #(#members: #bindings),* } = whole;
                    let #target = f(#target)?;
                    ::core::result::Result::Ok(#ty { #(#members: #bindings),* })
                }
            }
        });

        associated_items.push(quote! {
            #vis const #name: #editor_ty_name = #editor_ty_name;
        });
    }

    let expanded = quote! {
        #(#decls)*
        #(#impls)*

        #[allow(non_upper_case_globals, dead_code)]
        impl #ty {
            #(#associated_items)*
        }
    };

    Ok(expanded)
}
