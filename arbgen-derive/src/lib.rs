//! Derive macros for arbgen test data generation.
//!
//! This crate provides `#[derive(Arbitrary)]`, which registers a
//! generation strategy for a custom type by generating each field with
//! its own `Arbitrary` strategy.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam};

/// Derive macro implementing `arbgen::Arbitrary`.
///
/// Structs generate their fields in declaration order. Enums pick a
/// variant uniformly, then generate that variant's fields. Every type
/// parameter gets an `Arbitrary` bound.
///
/// # Example
///
/// ```rust,ignore
/// use arbgen::*;
///
/// #[derive(Arbitrary, Debug)]
/// struct User {
///     name: String,
///     age: u32,
///     email: String,
/// }
///
/// arbgen::init()?;
/// let user: User = arbgen::generate()?;
/// ```
#[proc_macro_derive(Arbitrary)]
pub fn derive_arbitrary(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match arbitrary_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn arbitrary_impl(mut input: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let body = match &input.data {
        Data::Struct(data) => {
            let construct = construct(quote! { Self }, &data.fields);
            quote! { #construct }
        }
        Data::Enum(data) => {
            if data.variants.is_empty() {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Arbitrary cannot be derived for an enum without variants",
                ));
            }

            let last = data.variants.len() - 1;
            let arms = data.variants.iter().enumerate().map(|(i, variant)| {
                let name = &variant.ident;
                let construct = construct(quote! { Self::#name }, &variant.fields);
                if i == last {
                    quote! { _ => #construct, }
                } else {
                    quote! { #i => #construct, }
                }
            });

            quote! {
                let variant = match <usize as arbgen::Choose>::choose(ctx, 0, #last) {
                    ::core::result::Result::Ok(variant) => variant,
                    ::core::result::Result::Err(_) => {
                        ::core::unreachable!("variant interval is ordered")
                    }
                };
                match variant {
                    #(#arms)*
                }
            }
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "Arbitrary derive macro does not support unions",
            ));
        }
    };

    for param in input.generics.params.iter_mut() {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(arbgen::Arbitrary));
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics arbgen::Arbitrary for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn arbitrary(ctx: &mut arbgen::Context) -> Self {
                #body
            }
        }
    })
}

/// Build `path { a: .., b: .. }`, `path(.., ..)` or `path` from the fields.
fn construct(path: TokenStream2, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let assignments = fields.named.iter().map(|field| {
                let name = &field.ident;
                let ty = &field.ty;
                quote! { #name: <#ty as arbgen::Arbitrary>::arbitrary(ctx) }
            });
            quote! { #path { #(#assignments),* } }
        }
        Fields::Unnamed(fields) => {
            let values = fields.unnamed.iter().map(|field| {
                let ty = &field.ty;
                quote! { <#ty as arbgen::Arbitrary>::arbitrary(ctx) }
            });
            quote! { #path(#(#values),*) }
        }
        Fields::Unit => path,
    }
}
