//! Code generation for `#[derive(Property)]`.

// -----------------------------------------------------------------------------
// Modules

mod trait_object;
mod trait_property;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::PropertyStruct;

pub(crate) fn impl_property_struct(info: &PropertyStruct) -> TokenStream {
    let prop_access_path = crate::path::prop_access();

    let property_tokens = trait_property::impl_trait_property(info, &prop_access_path);
    let object_tokens = trait_object::impl_trait_object(info, &prop_access_path);

    quote! {
        const _: () = {
            #property_tokens

            #object_tokens
        };
    }
}
