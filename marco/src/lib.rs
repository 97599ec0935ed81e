//! derive macros shared by the workspace

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Generates `get_<field>_ref(&self) -> &T` and `get_<field>(&self) -> T`
/// for every named field. Every field type must implement `Clone`.
#[proc_macro_derive(Getter)]
pub fn derive_getter(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "Getter requires named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Getter can only be derived for structs")
                .to_compile_error()
                .into()
        }
    };

    let getters = fields.iter().map(getter);

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#getters)*
        }
    };
    expanded.into()
}

fn getter(field: &Field) -> TokenStream2 {
    // named fields always carry an ident
    let ident = match &field.ident {
        Some(ident) => ident,
        None => return TokenStream2::new(),
    };
    let ty = &field.ty;
    let get = format_ident!("get_{}", ident);
    let get_ref = format_ident!("get_{}_ref", ident);

    quote! {
        #[allow(dead_code)]
        pub fn #get_ref(&self) -> &#ty {
            &self.#ident
        }

        #[allow(dead_code)]
        pub fn #get(&self) -> #ty {
            ::std::clone::Clone::clone(&self.#ident)
        }
    }
}
