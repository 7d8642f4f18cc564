// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attribute macros that register tests with `test-harness`.
//!
//! Rust has no pre-main constructor attribute, so `#[test_harness::test]`
//! expands the annotated function into itself plus an `inventory::submit!`
//! of a `RegisteredTest` describing it — the same role the original
//! harness's `TEST(suite, name)` macro plays via a generated constructor
//! function.

use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, ItemFn, LitStr, Token};

enum MetaValue {
    Str(LitStr),
    Path(Ident),
}

struct MetaPair {
    key: Ident,
    value: MetaValue,
}

impl Parse for MetaPair {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = if input.peek(LitStr) {
            MetaValue::Str(input.parse()?)
        } else {
            MetaValue::Path(input.parse()?)
        };
        Ok(MetaPair { key, value })
    }
}

/// Parsed form of `#[test_harness::test(suite = "...", setup = fn_ident, teardown = fn_ident)]`.
/// All three keys are optional; `suite` defaults to `"default"`.
struct TestArgs {
    suite: Option<LitStr>,
    setup: Option<Ident>,
    teardown: Option<Ident>,
}

impl Parse for TestArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = TestArgs {
            suite: None,
            setup: None,
            teardown: None,
        };

        let pairs = Punctuated::<MetaPair, Token![,]>::parse_terminated(input)?;
        for pair in pairs {
            match (pair.key.to_string().as_str(), pair.value) {
                ("suite", MetaValue::Str(lit)) => args.suite = Some(lit),
                ("setup", MetaValue::Path(ident)) => args.setup = Some(ident),
                ("teardown", MetaValue::Path(ident)) => args.teardown = Some(ident),
                (other, _) => {
                    return Err(syn::Error::new(
                        pair.key.span(),
                        format!("unrecognized `#[test]` key `{other}` (expected suite/setup/teardown)"),
                    ))
                }
            }
        }

        Ok(args)
    }
}

/// Registers the annotated function as a test.
///
/// ```ignore
/// #[test_harness::test(suite = "arithmetic")]
/// fn adds_two(status: &mut StatusInfo, ctx: &mut TestContext) {
///     assert_eq!(status, 2 + 2, 4);
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as TestArgs);
    let func = parse_macro_input!(item as ItemFn);

    let fn_ident = &func.sig.ident;
    let name = fn_ident.to_string();
    let suite = args
        .suite
        .unwrap_or_else(|| LitStr::new("default", proc_macro2::Span::call_site()));

    let setup_expr = match &args.setup {
        Some(ident) => quote! { ::core::option::Option::Some(#ident) },
        None => quote! { ::core::option::Option::None },
    };
    let teardown_expr = match &args.teardown {
        Some(ident) => quote! { ::core::option::Option::Some(#ident) },
        None => quote! { ::core::option::Option::None },
    };

    let expanded = quote! {
        #func

        ::test_harness::inventory::submit! {
            ::test_harness::registry::RegisteredTest {
                suite: #suite,
                name: #name,
                body: #fn_ident,
                setup: #setup_expr,
                teardown: #teardown_expr,
            }
        }
    };

    expanded.into()
}

/// Marks a function as a setup callable, referenced by name from
/// `#[test(setup = ...)]`. Transparent at expansion time — it exists for
/// symmetry with `#[test]`/`#[teardown]` and so a setup function reads as
/// intentional rather than incidental.
#[proc_macro_attribute]
pub fn setup(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}

/// Marks a function as a teardown callable, referenced by name from
/// `#[test(teardown = ...)]`. See [`setup`].
#[proc_macro_attribute]
pub fn teardown(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}
