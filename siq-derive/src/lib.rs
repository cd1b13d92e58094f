//! Derive macro implementation used by `siq-core`.
//!
//! `siq-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::Scale`, `crate::Offset` and `crate::Quantity`, so it is intended to be used by
//! `siq-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `siq` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit, T>` for every displayable representation `T`
//!   (formats as `<value> <symbol>` and honours precision flags)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol (required, non-empty)
//! - `dimension = LENGTH`: constant expression of type `Dimension` (required)
//! - `scale = RootRatio::ratio(254, 10_000)`: one unit in SI units (optional, defaults to one)
//! - `offset = Ratio::new(27_315, 100)`: SI value of the unit's zero (optional, defaults to zero)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit, T>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing at least `symbol` and
/// `dimension`.
///
/// This macro is intended for use by `siq-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    check_marker_shape(&input)?;

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let scale = match &unit_attr.scale {
        Some(scale) => quote! { #scale },
        None => quote! { crate::Scale::ONE },
    };
    let offset = match &unit_attr.offset {
        Some(offset) => quote! { #offset },
        None => quote! { crate::Offset::ZERO },
    };

    let expanded = quote! {
        impl crate::Unit for #name {
            const DIM: crate::Dimension = #dimension;
            const SCALE: crate::Scale = #scale;
            const OFFSET: crate::Offset = #offset;
            const SYMBOL: &'static str = #symbol;
        }

        impl<T> ::core::fmt::Display for crate::Quantity<#name, T>
        where
            T: crate::Repr + ::core::fmt::Display,
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.value(), f)?;
                f.write_str(" ")?;
                f.write_str(<#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Units are zero-sized, non-generic markers.
fn check_marker_shape(input: &DeriveInput) -> syn::Result<()> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "unit markers cannot be generic",
        ));
    }
    match &input.data {
        Data::Struct(s) if s.fields.is_empty() => Ok(()),
        Data::Enum(e) if e.variants.is_empty() => Ok(()),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "unit markers must be unit structs or empty enums",
        )),
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    scale: Option<Expr>,
    offset: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut scale: Option<Expr> = None;
        let mut offset: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let key = ident.to_string();
            let duplicate = match key.as_str() {
                "symbol" => symbol.replace(input.parse()?).is_some(),
                "dimension" => dimension.replace(input.parse()?).is_some(),
                "scale" => scale.replace(input.parse()?).is_some(),
                "offset" => offset.replace(input.parse()?).is_some(),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            };
            if duplicate {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("duplicate attribute `{}`", key),
                ));
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        if symbol.value().is_empty() {
            return Err(syn::Error::new(symbol.span(), "unit symbol cannot be empty"));
        }
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            scale,
            offset,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        derive_unit_impl(input).unwrap().to_string()
    }

    fn expand_err(input: DeriveInput) -> String {
        derive_unit_impl(input).err().unwrap().to_string()
    }

    #[test]
    fn parses_required_keys() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = LENGTH)]
            pub struct Meter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert!(attr.scale.is_none());
        assert!(attr.offset.is_none());
    }

    #[test]
    fn parses_scale_and_offset() {
        let input: DeriveInput = parse_quote! {
            #[unit(
                symbol = "°F",
                dimension = TEMPERATURE,
                scale = RootRatio::ratio(5, 9),
                offset = Ratio::new(45_967, 180),
            )]
            pub struct DegreeFahrenheit;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "°F");
        assert!(attr.scale.is_some());
        assert!(attr.offset.is_some());
    }

    #[test]
    fn missing_attribute() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = LENGTH)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", scale = RootRatio::ONE)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `dimension`"));
    }

    #[test]
    fn empty_symbol_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "", dimension = LENGTH)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = LENGTH, ratio = 1.0)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `ratio`"));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", symbol = "M", dimension = LENGTH)]
            pub struct Meter;
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("duplicate attribute `symbol`"));
    }

    #[test]
    fn generates_unit_impl_with_defaults() {
        let code = expand(parse_quote! {
            #[unit(symbol = "m", dimension = LENGTH)]
            pub struct Meter;
        });

        assert!(code.contains("impl crate :: Unit for Meter"));
        assert!(code.contains("const DIM : crate :: Dimension = LENGTH"));
        assert!(code.contains("const SCALE : crate :: Scale = crate :: Scale :: ONE"));
        assert!(code.contains("const OFFSET : crate :: Offset = crate :: Offset :: ZERO"));
        assert!(code.contains("const SYMBOL : & 'static str = \"m\""));
    }

    #[test]
    fn generates_display_for_every_representation() {
        let code = expand(parse_quote! {
            #[unit(symbol = "h", dimension = TIME, scale = RootRatio::integer(3600))]
            pub struct Hour;
        });

        assert!(code.contains("crate :: Quantity < Hour , T >"));
        assert!(code.contains("T : crate :: Repr + :: core :: fmt :: Display"));
        assert!(code.contains("RootRatio :: integer (3600)"));
    }

    #[test]
    fn rejects_generic_markers() {
        let err = expand_err(parse_quote! {
            #[unit(symbol = "m", dimension = LENGTH)]
            pub struct Meter<T>(T);
        });
        assert!(err.contains("cannot be generic"));
    }

    #[test]
    fn rejects_markers_with_fields() {
        let err = expand_err(parse_quote! {
            #[unit(symbol = "m", dimension = LENGTH)]
            pub struct Meter(f64);
        });
        assert!(err.contains("unit structs or empty enums"));

        let err = expand_err(parse_quote! {
            #[unit(symbol = "m", dimension = LENGTH)]
            pub enum Meter { A }
        });
        assert!(err.contains("unit structs or empty enums"));
    }

    #[test]
    fn accepts_empty_enums() {
        let code = expand(parse_quote! {
            #[unit(symbol = "m", dimension = LENGTH)]
            pub enum Meter {}
        });
        assert!(code.contains("impl crate :: Unit for Meter"));
    }
}
