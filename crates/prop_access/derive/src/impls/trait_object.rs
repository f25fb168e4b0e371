use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::PropertyStruct;
use crate::path::alloc_;

/// Generates `Object`.
pub(super) fn impl_trait_object(info: &PropertyStruct, prop_access_path: &syn::Path) -> TokenStream {
    let ident = info.ident;
    let type_name = &info.type_name;
    let alloc = alloc_(prop_access_path);

    let member_names: Vec<_> = info.members.iter().map(|m| &m.name).collect();
    let member_idents: Vec<_> = info.members.iter().map(|m| m.ident).collect();
    let public_names: Vec<_> = info
        .members
        .iter()
        .filter(|m| m.public)
        .map(|m| &m.name)
        .collect();

    let getter_names: Vec<_> = info.getters.iter().map(|m| &m.name).collect();
    let getter_idents: Vec<_> = info.getters.iter().map(|m| &m.ident).collect();
    let setter_names: Vec<_> = info.setters.iter().map(|m| &m.name).collect();
    let setter_idents: Vec<_> = info.setters.iter().map(|m| &m.ident).collect();

    let method_names: Vec<_> = getter_names.iter().chain(setter_names.iter()).collect();
    let has_method = name_matcher(quote!(method), &method_names);
    let has_member = name_matcher(quote!(name), &member_names);
    let is_member_public = name_matcher(quote!(name), &public_names);

    quote! {
        impl #prop_access_path::Object for #ident {
            #[inline]
            fn type_name(&self) -> &str {
                #type_name
            }

            #[inline]
            fn has_method(&self, method: &str) -> bool {
                #has_method
            }

            fn call_getter(&self, method: &str) -> ::core::option::Option<#prop_access_path::Value> {
                match method {
                    #(
                        #getter_names => ::core::option::Option::Some(
                            #prop_access_path::IntoValue::into_value(Self::#getter_idents(self))
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            fn call_setter(
                &mut self,
                method: &str,
                value: #prop_access_path::Value,
            ) -> ::core::result::Result<(), #prop_access_path::PropertyError> {
                match method {
                    #(
                        #setter_names => {
                            Self::#setter_idents(self, #prop_access_path::FromValue::from_value(value)?);
                            ::core::result::Result::Ok(())
                        }
                    )*
                    _ => {
                        let _ = value;
                        ::core::result::Result::Err(#prop_access_path::PropertyError::nonexistent_key(
                            #prop_access_path::Property::to_value(self),
                            method,
                            #prop_access_path::KeyKind::Object,
                        ))
                    }
                }
            }

            #[inline]
            fn has_member(&self, name: &str) -> bool {
                #has_member
            }

            #[inline]
            fn is_member_public(&self, name: &str) -> bool {
                #is_member_public
            }

            fn member_names(&self) -> #alloc::vec::Vec<&str> {
                #alloc::vec![#(#member_names),*]
            }

            fn member(
                &self,
                name: &str,
            ) -> ::core::result::Result<&dyn #prop_access_path::Property, #prop_access_path::MemberError> {
                match name {
                    #(
                        #member_names => ::core::result::Result::Ok(
                            &self.#member_idents as &dyn #prop_access_path::Property
                        ),
                    )*
                    _ => ::core::result::Result::Err(#prop_access_path::MemberError::Undefined),
                }
            }

            fn member_mut(
                &mut self,
                name: &str,
            ) -> ::core::result::Result<&mut dyn #prop_access_path::Property, #prop_access_path::MemberError> {
                match name {
                    #(
                        #member_names => ::core::result::Result::Ok(
                            &mut self.#member_idents as &mut dyn #prop_access_path::Property
                        ),
                    )*
                    _ => ::core::result::Result::Err(#prop_access_path::MemberError::Undefined),
                }
            }

            fn set_member(
                &mut self,
                name: &str,
                value: #prop_access_path::Value,
            ) -> ::core::result::Result<(), #prop_access_path::MemberError> {
                match name {
                    #(
                        #member_names => {
                            #prop_access_path::Property::assign(&mut self.#member_idents, value)?;
                            ::core::result::Result::Ok(())
                        }
                    )*
                    _ => {
                        let _ = value;
                        ::core::result::Result::Err(#prop_access_path::MemberError::Undefined)
                    }
                }
            }

            #[inline]
            fn clone_object(&self) -> #alloc::boxed::Box<dyn #prop_access_path::Object> {
                #alloc::boxed::Box::new(::core::clone::Clone::clone(self))
            }
        }
    }
}

/// `matches!(arg, "a" | "b")`, or `false` when there is nothing to match.
fn name_matcher<T: quote::ToTokens>(arg: TokenStream, names: &[T]) -> TokenStream {
    if names.is_empty() {
        quote! {{
            let _ = #arg;
            false
        }}
    } else {
        quote! {
            ::core::matches!(#arg, #(#names)|*)
        }
    }
}
