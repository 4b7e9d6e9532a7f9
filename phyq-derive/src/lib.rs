//! Derive macro implementation used by `phyq-core`.
//!
//! `phyq-derive` is an implementation detail of this workspace. The derives expand in terms of `crate::Unit`,
//! `crate::Kind`, `crate::Ratio` and friends, so they are intended to be used by `phyq-core` (or by crates that
//! expose an identical crate-root API).
//!
//! Most users should depend on `phyq` instead and use the predefined units and kinds.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, `#[derive(Unit)]` implements:
//!
//! - `crate::Unit for MyUnit`
//! - `Mul<R: Unit>` and `Div<R: Unit>` for `MyUnit` values, producing `crate::Prod` and `crate::Per`
//! - a compile-time check that the ratio is positive
//!
//! For a kind marker type `MyKind`, `#[derive(Kind)]` implements `crate::Kind for MyKind` and checks that its
//! magnitude kind has the same dimension.
//!
//! # Attributes
//!
//! `#[unit(...)]`:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = Dimension::LENGTH`: a `crate::Dimension` constant expression
//! - `ratio = 1000`, `ratio = (1, 1000)` or any `crate::Ratio` constant expression: exact factor to the coherent
//!   unit of the dimension
//!
//! `#[kind(...)]`:
//!
//! - `dimension = ...`: as above
//! - `character = scalar | vector` (default `scalar`)
//! - `magnitude = SomeKind`: scalar kind produced by the norm of a vector kind (default `crate::MagnitudeOf<Self>`)
//! - `name = "..."`: display name (default: the type name in snake case)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, ExprLit, ExprTuple, Ident, Lit, LitStr, Token, Type,
};

/// Derive `crate::Unit` plus unit-value `*` and `/` for a unit marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`.
///
/// This macro is intended for use by `phyq-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `crate::Kind` for a quantity kind marker type.
///
/// The derive must be paired with a `#[kind(...)]` attribute providing at least `dimension`.
///
/// This macro is intended for use by `phyq-core`.
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_kind_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse the #[unit(...)] attribute
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = ratio_tokens(&unit_attr.ratio)?;

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: crate::Ratio = #ratio;
            const DIMENSION: crate::Dimension = #dimension;
            const SYMBOL: &'static str = #symbol;
        }

        const _: () = assert!(
            <#name as crate::Unit>::RATIO.is_positive(),
            "unit ratio must be strictly positive"
        );

        impl<__Rhs: crate::Unit> ::core::ops::Mul<__Rhs> for #name {
            type Output = crate::Prod<#name, __Rhs>;
            #[inline]
            fn mul(self, _: __Rhs) -> Self::Output {
                crate::Prod::new()
            }
        }

        impl<__Rhs: crate::Unit> ::core::ops::Div<__Rhs> for #name {
            type Output = crate::Per<#name, __Rhs>;
            #[inline]
            fn div(self, _: __Rhs) -> Self::Output {
                crate::Per::new()
            }
        }
    };

    Ok(expanded)
}

/// Turns the `ratio` attribute into a `crate::Ratio` constant expression.
///
/// Integer literals become `Ratio::integer`, two-element tuples become `Ratio::new`; anything else is passed
/// through verbatim and must already be a `Ratio`.
fn ratio_tokens(ratio: &Expr) -> syn::Result<TokenStream2> {
    match ratio {
        Expr::Lit(ExprLit { lit: Lit::Int(_), .. }) => Ok(quote! { crate::Ratio::integer(#ratio) }),
        Expr::Lit(ExprLit { lit: Lit::Float(f), .. }) => Err(syn::Error::new(
            f.span(),
            "floating-point ratios are not exact; use an integer or a `(numerator, denominator)` pair",
        )),
        Expr::Tuple(ExprTuple { elems, .. }) => {
            if elems.len() != 2 {
                return Err(syn::Error::new_spanned(
                    ratio,
                    "ratio tuple must be `(numerator, denominator)`",
                ));
            }
            let num = &elems[0];
            let den = &elems[1];
            Ok(quote! { crate::Ratio::new(#num, #den) })
        }
        other => Ok(quote! { #other }),
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    ratio: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
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

// ─────────────────────────────────────────────────────────────────────────────
// Kind derive
// ─────────────────────────────────────────────────────────────────────────────

fn derive_kind_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let kind_attr = parse_kind_attribute(&input.attrs)?;

    let dimension = &kind_attr.dimension;
    let kind_name = kind_attr
        .name
        .as_ref()
        .map(LitStr::value)
        .unwrap_or_else(|| snake_case(&name.to_string()));

    let (character, magnitude) = if kind_attr.vector {
        let magnitude = match &kind_attr.magnitude {
            Some(ty) => quote! { #ty },
            None => quote! { crate::MagnitudeOf<#name> },
        };
        (quote! { crate::VectorCharacter }, magnitude)
    } else {
        if let Some(ty) = &kind_attr.magnitude {
            return Err(syn::Error::new_spanned(
                ty,
                "`magnitude` only applies to vector kinds",
            ));
        }
        (quote! { crate::ScalarCharacter }, quote! { #name })
    };

    let expanded = quote! {
        impl crate::Kind for #name {
            type Character = #character;
            type MagnitudeKind = #magnitude;
            const DIMENSION: crate::Dimension = #dimension;
            const NAME: &'static str = #kind_name;
        }

        const _: () = assert!(
            <#magnitude as crate::Kind>::DIMENSION.same_as(&<#name as crate::Kind>::DIMENSION),
            "the magnitude kind must have the same dimension"
        );
    };

    Ok(expanded)
}

/// Parsed contents of the `#[kind(...)]` attribute.
struct KindAttribute {
    dimension: Expr,
    vector: bool,
    magnitude: Option<Type>,
    name: Option<LitStr>,
}

impl Parse for KindAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<Expr> = None;
        let mut vector = false;
        let mut magnitude: Option<Type> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "character" => {
                    let value: Ident = input.parse()?;
                    vector = match value.to_string().as_str() {
                        "scalar" => false,
                        "vector" => true,
                        _ => {
                            return Err(syn::Error::new(
                                value.span(),
                                "`character` must be `scalar` or `vector`",
                            ))
                        }
                    };
                }
                "magnitude" => {
                    magnitude = Some(input.parse()?);
                }
                "name" => {
                    name = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        Ok(KindAttribute {
            dimension,
            vector,
            magnitude,
            name,
        })
    }
}

fn parse_kind_attribute(attrs: &[Attribute]) -> syn::Result<KindAttribute> {
    for attr in attrs {
        if attr.path().is_ident("kind") {
            return attr.parse_args::<KindAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[kind(...)] attribute",
    ))
}

/// `MomentOfForce` -> `moment_of_force`.
fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Dimension::LENGTH, ratio = 1)]
            pub struct Meter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        assert!(result.is_err());
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Dimension::LENGTH, ratio = 1)]
            pub struct Meter;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", ratio = 1)]
            pub struct Meter;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Dimension::LENGTH)]
            pub struct Meter;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `ratio`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Dimension::LENGTH, ratio = 1, unknown = "value")]
            pub struct Meter;
        };

        let err_msg = parse_unit_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute"));
    }

    #[test]
    fn test_derive_unit_impl_integer_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", dimension = Dimension::LENGTH, ratio = 1000)]
            pub struct Kilometer;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Kilometer"));
        assert!(code.contains("const RATIO : crate :: Ratio = crate :: Ratio :: integer (1000)"));
        assert!(code.contains("const SYMBOL : & 'static str = \"km\""));
        assert!(code.contains("const DIMENSION : crate :: Dimension = Dimension :: LENGTH"));
        assert!(code.contains("crate :: Prod < Kilometer , __Rhs >"));
        assert!(code.contains("crate :: Per < Kilometer , __Rhs >"));
    }

    #[test]
    fn test_derive_unit_impl_fraction_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "mm", dimension = Dimension::LENGTH, ratio = (1, 1000))]
            pub struct Millimeter;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("crate :: Ratio :: new (1 , 1000)"));
    }

    #[test]
    fn test_derive_unit_impl_expression_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "h", dimension = Dimension::TIME, ratio = Ratio::integer(60).mul(MINUTE))]
            pub struct Hour;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("const RATIO : crate :: Ratio = Ratio :: integer (60) . mul (MINUTE)"));
    }

    #[test]
    fn test_derive_unit_rejects_float_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", dimension = Dimension::LENGTH, ratio = 1000.0)]
            pub struct Kilometer;
        };

        let err_msg = derive_unit_impl(input).err().unwrap().to_string();
        assert!(err_msg.contains("floating-point ratios are not exact"));
    }

    #[test]
    fn test_derive_unit_rejects_long_tuple() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "x", dimension = Dimension::LENGTH, ratio = (1, 2, 3))]
            pub struct Odd;
        };

        assert!(derive_unit_impl(input).is_err());
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Dimension::LENGTH, ratio = 1,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            symbol = "m", symbol = "km", dimension = Dimension::LENGTH, ratio = 1
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let result: syn::Result<UnitAttribute> = syn::parse2(quote! {});
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Kind derive
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_derive_scalar_kind() {
        let input: DeriveInput = parse_quote! {
            #[kind(dimension = Dimension::LENGTH)]
            pub struct Length;
        };

        let code = derive_kind_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Kind for Length"));
        assert!(code.contains("type Character = crate :: ScalarCharacter"));
        assert!(code.contains("type MagnitudeKind = Length"));
        assert!(code.contains("const NAME : & 'static str = \"length\""));
    }

    #[test]
    fn test_derive_vector_kind_with_magnitude() {
        let input: DeriveInput = parse_quote! {
            #[kind(dimension = Dimension::LENGTH.div(Dimension::TIME), character = vector, magnitude = Speed)]
            pub struct Velocity;
        };

        let code = derive_kind_impl(input).unwrap().to_string();
        assert!(code.contains("type Character = crate :: VectorCharacter"));
        assert!(code.contains("type MagnitudeKind = Speed"));
        assert!(code.contains("< Speed as crate :: Kind > :: DIMENSION"));
    }

    #[test]
    fn test_derive_vector_kind_default_magnitude_and_name() {
        let input: DeriveInput = parse_quote! {
            #[kind(dimension = FORCE, character = vector)]
            pub struct MomentOfForce;
        };

        let code = derive_kind_impl(input).unwrap().to_string();
        assert!(code.contains("type MagnitudeKind = crate :: MagnitudeOf < MomentOfForce >"));
        assert!(code.contains("\"moment_of_force\""));
    }

    #[test]
    fn test_derive_kind_explicit_name() {
        let input: DeriveInput = parse_quote! {
            #[kind(dimension = Dimension::TIME, name = "time")]
            pub struct Duration;
        };

        let code = derive_kind_impl(input).unwrap().to_string();
        assert!(code.contains("\"time\""));
    }

    #[test]
    fn test_derive_kind_rejects_scalar_magnitude() {
        let input: DeriveInput = parse_quote! {
            #[kind(dimension = Dimension::LENGTH, magnitude = Length)]
            pub struct Width;
        };

        let err_msg = derive_kind_impl(input).err().unwrap().to_string();
        assert!(err_msg.contains("only applies to vector kinds"));
    }

    #[test]
    fn test_derive_kind_rejects_unknown_character() {
        let tokens = quote! { dimension = Dimension::LENGTH, character = tensor };
        let result: syn::Result<KindAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_kind_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Length;
        };
        let err_msg = parse_kind_attribute(&input.attrs).err().unwrap().to_string();
        assert!(err_msg.contains("missing #[kind(...)] attribute"));
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Length"), "length");
        assert_eq!(snake_case("PositionVector"), "position_vector");
        assert_eq!(snake_case("ElectricCurrent"), "electric_current");
    }
}
