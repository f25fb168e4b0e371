use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::PropertyStruct;
use crate::path::alloc_;

/// Generates `Property`, `FromValue` and `From<T> for Value`.
pub(super) fn impl_trait_property(info: &PropertyStruct, prop_access_path: &syn::Path) -> TokenStream {
    let ident = info.ident;
    let alloc = alloc_(prop_access_path);

    quote! {
        impl #prop_access_path::Property for #ident {
            #[inline]
            fn property_ref(&self) -> #prop_access_path::PropertyRef<'_> {
                #prop_access_path::PropertyRef::Object(self)
            }

            #[inline]
            fn property_mut(&mut self) -> #prop_access_path::PropertyMut<'_> {
                #prop_access_path::PropertyMut::Object(self)
            }

            #[inline]
            fn to_value(&self) -> #prop_access_path::Value {
                #prop_access_path::Value::Object(
                    #alloc::boxed::Box::new(::core::clone::Clone::clone(self))
                )
            }

            #[inline]
            fn into_value(self) -> #prop_access_path::Value {
                #prop_access_path::Value::Object(#alloc::boxed::Box::new(self))
            }

            fn assign(
                &mut self,
                value: #prop_access_path::Value,
            ) -> ::core::result::Result<(), #prop_access_path::PropertyError> {
                *self = #prop_access_path::Value::take_object::<Self>(value)?;
                ::core::result::Result::Ok(())
            }
        }

        impl #prop_access_path::FromValue for #ident {
            #[inline]
            fn from_value(
                value: #prop_access_path::Value,
            ) -> ::core::result::Result<Self, #prop_access_path::PropertyError> {
                #prop_access_path::Value::take_object::<Self>(value)
            }
        }

        impl ::core::convert::From<#ident> for #prop_access_path::Value {
            #[inline]
            fn from(value: #ident) -> Self {
                #prop_access_path::Value::Object(#alloc::boxed::Box::new(value))
            }
        }
    }
}
