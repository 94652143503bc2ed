// Copyright (C) 2024-present The Routewire Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for the error plumbing of the routewire wire codecs.
//!
//! Parsing errors are plain enums; [`LocatedError`] pairs each of them with
//! the [`routewire_parse_utils::Span`] at which the error was raised and
//! wires up the `From` conversions needed to bubble child errors up the
//! parser call chain. [`WritingError`] generates the `From` conversions for
//! serializer error enums.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, DeriveInput};

/// A variant whose single field carries one of the marker attributes this
/// crate understands.
struct MarkedField {
    variant: syn::Ident,
    ty: syn::Type,
    attr: syn::Attribute,
}

fn marked_fields(data: &syn::DataEnum, marker: &str) -> Vec<MarkedField> {
    let mut out = Vec::new();
    for variant in &data.variants {
        for field in &variant.fields {
            for attr in &field.attrs {
                if attr.path().is_ident(marker) {
                    out.push(MarkedField {
                        variant: variant.ident.clone(),
                        ty: field.ty.clone(),
                        attr: attr.clone(),
                    });
                }
            }
        }
    }
    out
}

fn type_ident(ty: &syn::Type) -> syn::Result<syn::Ident> {
    if let syn::Type::Path(path) = ty {
        if let Some(ident) = path.path.get_ident() {
            return Ok(ident.clone());
        }
    }
    Err(syn::Error::new(
        ty.span(),
        "expected a plain type identifier (import the type instead of path-qualifying it)",
    ))
}

fn module_segments(attr: &syn::Attribute) -> syn::Result<Vec<syn::Ident>> {
    let name_value: syn::MetaNameValue = attr.parse_args()?;
    if !name_value.path.is_ident("module") {
        return Err(syn::Error::new(
            attr.span(),
            "only a single `module = \"...\"` attribute is accepted",
        ));
    }
    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = &name_value.value
    else {
        return Err(syn::Error::new(
            attr.span(),
            "`module` must be a string literal",
        ));
    };
    Ok(lit
        .value()
        .split("::")
        .map(|part| format_ident!("{}", part))
        .collect())
}

fn derive_located_error(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let syn::Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "LocatedError works only with enum error types",
        ));
    };
    let ident = &input.ident;
    let located_ident = format_ident!("Located{}", ident);

    let mut output = quote! {
        #[automatically_derived]
        #[derive(PartialEq, Clone, Debug)]
        pub struct #located_ident<'a> {
            span: routewire_parse_utils::Span<'a>,
            error: #ident,
        }

        #[automatically_derived]
        impl<'a> #located_ident<'a> {
            pub const fn new(span: routewire_parse_utils::Span<'a>, error: #ident) -> Self {
                Self { span, error }
            }
        }

        #[automatically_derived]
        impl<'a> From<#located_ident<'a>> for (routewire_parse_utils::Span<'a>, #ident) {
            fn from(value: #located_ident<'a>) -> Self {
                (value.span, value.error)
            }
        }

        #[automatically_derived]
        impl<'a> routewire_parse_utils::LocatedParsingError for #located_ident<'a> {
            type Span = routewire_parse_utils::Span<'a>;
            type Error = #ident;

            fn span(&self) -> &Self::Span {
                &self.span
            }

            fn error(&self) -> &Self::Error {
                &self.error
            }
        }

        #[automatically_derived]
        impl<'a> nom::error::FromExternalError<routewire_parse_utils::Span<'a>, #ident>
            for #located_ident<'a>
        {
            fn from_external_error(
                input: routewire_parse_utils::Span<'a>,
                _kind: nom::error::ErrorKind,
                error: #ident,
            ) -> Self {
                #located_ident::new(input, error)
            }
        }
    };

    for marked in marked_fields(data, "from_nom") {
        let variant = &marked.variant;
        output.extend(quote! {
            #[automatically_derived]
            impl<'a> nom::error::ParseError<routewire_parse_utils::Span<'a>> for #located_ident<'a> {
                fn from_error_kind(
                    input: routewire_parse_utils::Span<'a>,
                    kind: nom::error::ErrorKind,
                ) -> Self {
                    #located_ident::new(input, #ident::#variant(kind))
                }

                fn append(
                    _input: routewire_parse_utils::Span<'a>,
                    _kind: nom::error::ErrorKind,
                    other: Self,
                ) -> Self {
                    other
                }
            }
        });
    }

    for marked in marked_fields(data, "from_external") {
        let variant = &marked.variant;
        let external = type_ident(&marked.ty)?;
        output.extend(quote! {
            #[automatically_derived]
            impl<'a> nom::error::FromExternalError<routewire_parse_utils::Span<'a>, #external>
                for #located_ident<'a>
            {
                fn from_external_error(
                    input: routewire_parse_utils::Span<'a>,
                    _kind: nom::error::ErrorKind,
                    error: #external,
                ) -> Self {
                    #located_ident::new(input, #ident::#variant(error))
                }
            }
        });
    }

    for marked in marked_fields(data, "from_located") {
        let variant = &marked.variant;
        let child_located = format_ident!("Located{}", type_ident(&marked.ty)?);
        let module = module_segments(&marked.attr)?;
        output.extend(quote! {
            #[automatically_derived]
            impl<'a> From<#(#module)::*::#child_located<'a>> for #located_ident<'a> {
                fn from(value: #(#module)::*::#child_located<'a>) -> Self {
                    let (span, error) = value.into();
                    #located_ident::new(span, #ident::#variant(error))
                }
            }
        });
    }

    Ok(output)
}

/// For an error enum `{Name}`, generate a `Located{Name}` struct carrying
/// the error together with the input [`routewire_parse_utils::Span`] where
/// it occurred, plus the conversions parsers need:
///
/// - `#[from_nom]` on a `nom::error::ErrorKind` field implements
///   `nom::error::ParseError`, so nom's own failures (truncation is
///   `ErrorKind::Eof`) land in that variant;
/// - `#[from_external]` on a field implements `nom::error::FromExternalError`
///   for that type, used with `nom::combinator::map_res`;
/// - `#[from_located(module = "...")]` on a field holding a child error enum
///   implements `From<Located{Child}>` so child parser errors convert into
///   the enclosing error via [`routewire_parse_utils::parse_into_located`].
#[proc_macro_derive(LocatedError, attributes(from_nom, from_external, from_located))]
pub fn located_error(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    derive_located_error(&ast)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn derive_writing_error(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let syn::Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "WritingError works only with enum error types",
        ));
    };
    let ident = &input.ident;
    let mut output = proc_macro2::TokenStream::new();

    for marked in marked_fields(data, "from_std_io_error") {
        let variant = &marked.variant;
        output.extend(quote! {
            #[automatically_derived]
            impl From<std::io::Error> for #ident {
                fn from(err: std::io::Error) -> Self {
                    #ident::#variant(err.to_string())
                }
            }
        });
    }

    for marked in marked_fields(data, "from") {
        let variant = &marked.variant;
        let source = type_ident(&marked.ty)?;
        output.extend(quote! {
            #[automatically_derived]
            impl From<#source> for #ident {
                fn from(err: #source) -> Self {
                    #ident::#variant(err)
                }
            }
        });
    }

    Ok(output)
}

/// Decorate an enum as a serializer error:
///
/// - `#[from_std_io_error]` on a `String` field generates
///   `From<std::io::Error>` (stored as its display string);
/// - `#[from]` on a field generates a plain `From` for that type, used to
///   bubble up child writer errors.
#[proc_macro_derive(WritingError, attributes(from_std_io_error, from))]
pub fn writing_error(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    derive_writing_error(&ast)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
