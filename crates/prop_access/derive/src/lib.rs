//! See [`Property`](derive_property).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static PROPERTY_ATTRIBUTE_NAME: &str = "property";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Property Derivation
///
/// `#[derive(Property)]` implements the following traits for a struct with
/// named fields:
///
/// - `Property` (as an object)
/// - `Object`
/// - `FromValue`
/// - `From<T> for Value`
///
/// The type must also implement `Clone` and `Debug`, and every exposed
/// field type must implement `Property` and `FromValue`.
/// Generic types are not supported.
///
/// ## Members
///
/// Every field is a member. `pub` fields are public; any other visibility
/// makes the member non-public, reachable only through accessor methods.
///
/// ```rust, ignore
/// #[derive(Property, Clone, Debug)]
/// struct User {
///     pub name: String,  // readable and writable by path
///     password: String,  // exists, but paths get `NonAccessibleProperty`
///     #[property(skip)]
///     cache: Vec<u8>,    // invisible
///     #[property(rename = "mail")]
///     pub email: String, // addressed as `mail`
/// }
/// ```
///
/// ## Accessor methods
///
/// Inherent methods listed in `#[property(methods(...))]` are dispatched by
/// their lowerCamel name, so `get_full_name` answers the path segment
/// `full_name` (or `fullName`).
///
/// - `get_*` / `is_*`: `fn(&self) -> T` where `T` converts into a `Value`.
/// - `set_*`: `fn(&mut self, T)` where `T: FromValue`. The return value,
///   if any, is discarded.
///
/// Getters win over members on read, setters win over members on write.
///
/// ```rust, ignore
/// #[derive(Property, Clone, Debug)]
/// #[property(methods(get_full_name, is_admin, set_password))]
/// struct User {
///     pub first: String,
///     pub last: String,
///     password: String,
///     admin: bool,
/// }
///
/// impl User {
///     fn get_full_name(&self) -> String { format!("{} {}", self.first, self.last) }
///     fn is_admin(&self) -> bool { self.admin }
///     fn set_password(&mut self, password: String) { self.password = password; }
/// }
/// ```
///
/// ## Type name
///
/// The name reported by `Object::type_name` defaults to the struct name and
/// can be overridden with `#[property(name = "...")]`.
#[proc_macro_derive(Property, attributes(property))]
pub fn derive_property(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::PropertyStruct::from_ast(&ast) {
        Ok(data) => impls::impl_property_struct(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
