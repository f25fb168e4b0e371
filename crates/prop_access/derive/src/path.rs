//! Paths used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Gets the path under which the invoking crate sees `prop_access`.
///
/// 1. For crates that depend on `prop_access`, `::prop_access` is returned.
/// 2. For crates that depend on `propath`, `::propath::access` is returned.
/// 3. Otherwise `::prop_access` is returned, which may be incorrect.
///
/// This reads the caller's manifest, so it is resolved once per derive.
pub(crate) fn prop_access() -> syn::Path {
    prop_macro_utils::Manifest::crate_path("prop_access")
}

/// `alloc` as re-exported by `prop_access`, for `no_std` callers.
#[inline(always)]
pub(crate) fn alloc_(prop_access_path: &syn::Path) -> TokenStream {
    quote! {
        #prop_access_path::__macro_exports::alloc
    }
}
