use syn::{Data, DeriveInput, Fields, Ident, LitStr, Visibility, ext::IdentExt};

use super::{AccessorMethod, FieldAttributes, MethodKind, TypeAttributes};

/// A field exposed as a member.
pub(crate) struct MemberField<'a> {
    pub ident: &'a Ident,
    /// The member name seen by paths.
    pub name: LitStr,
    pub public: bool,
}

/// Everything the code generators need from the input.
pub(crate) struct PropertyStruct<'a> {
    pub ident: &'a Ident,
    pub type_name: LitStr,
    pub members: Vec<MemberField<'a>>,
    pub getters: Vec<AccessorMethod>,
    pub setters: Vec<AccessorMethod>,
}

impl<'a> PropertyStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() || ast.generics.where_clause.is_some() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`#[derive(Property)]` does not support generic types",
            ));
        }

        let fields = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => Some(&named.named),
                Fields::Unit => None,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`#[derive(Property)]` requires named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`#[derive(Property)]` only supports structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Property)]` only supports structs",
                ));
            }
        };

        let type_attrs = TypeAttributes::parse(&ast.attrs)?;
        let type_name = type_attrs
            .name
            .unwrap_or_else(|| LitStr::new(&ast.ident.unraw().to_string(), ast.ident.span()));

        let mut members: Vec<MemberField<'a>> = Vec::new();
        for field in fields.into_iter().flatten() {
            let attrs = FieldAttributes::parse(&field.attrs)?;
            if attrs.skip {
                continue;
            }

            // Named fields always carry an ident.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            let name = attrs
                .rename
                .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));

            if members.iter().any(|m| m.name.value() == name.value()) {
                return Err(syn::Error::new(
                    name.span(),
                    "two members share the same name",
                ));
            }

            members.push(MemberField {
                ident,
                name,
                public: matches!(field.vis, Visibility::Public(_)),
            });
        }

        let mut getters = Vec::new();
        let mut setters = Vec::new();
        for ident in type_attrs.methods {
            let method = AccessorMethod::new(ident)?;
            let (list, other) = match method.kind {
                MethodKind::Getter => (&mut getters, &setters),
                MethodKind::Setter => (&mut setters, &getters),
            };
            let clash = list
                .iter()
                .chain(other.iter())
                .any(|m: &AccessorMethod| m.name.value() == method.name.value());
            if clash {
                return Err(syn::Error::new(
                    method.ident.span(),
                    "another method already answers this name",
                ));
            }
            list.push(method);
        }

        Ok(Self {
            ident: &ast.ident,
            type_name,
            members,
            getters,
            setters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyStruct;
    use syn::parse_quote;

    #[test]
    fn members_and_methods() {
        let ast: syn::DeriveInput = parse_quote! {
            #[property(name = "App.User", methods(get_full_name, is_admin, set_password))]
            struct User {
                pub first: String,
                password: String,
                #[property(skip)]
                pub cache: Vec<u8>,
                #[property(rename = "mail")]
                pub email: String,
            }
        };

        let data = PropertyStruct::from_ast(&ast).unwrap();
        assert_eq!(data.type_name.value(), "App.User");

        let names: Vec<_> = data.members.iter().map(|m| m.name.value()).collect();
        assert_eq!(names, ["first", "password", "mail"]);
        assert!(data.members[0].public);
        assert!(!data.members[1].public);

        let getters: Vec<_> = data.getters.iter().map(|m| m.name.value()).collect();
        assert_eq!(getters, ["getFullName", "isAdmin"]);
        assert_eq!(data.setters[0].name.value(), "setPassword");
    }

    #[test]
    fn default_type_name() {
        let ast: syn::DeriveInput = parse_quote! {
            struct Empty;
        };
        let data = PropertyStruct::from_ast(&ast).unwrap();
        assert_eq!(data.type_name.value(), "Empty");
        assert!(data.members.is_empty());
    }

    #[test]
    fn rejected_inputs() {
        let generic: syn::DeriveInput = parse_quote! { struct A<T> { pub a: T } };
        assert!(PropertyStruct::from_ast(&generic).is_err());

        let tuple: syn::DeriveInput = parse_quote! { struct A(pub i64); };
        assert!(PropertyStruct::from_ast(&tuple).is_err());

        let enumeration: syn::DeriveInput = parse_quote! { enum A { B } };
        assert!(PropertyStruct::from_ast(&enumeration).is_err());

        let bad_method: syn::DeriveInput = parse_quote! {
            #[property(methods(compute))]
            struct A { pub a: i64 }
        };
        assert!(PropertyStruct::from_ast(&bad_method).is_err());

        let duplicate: syn::DeriveInput = parse_quote! {
            struct A {
                pub a: i64,
                #[property(rename = "a")]
                pub b: i64,
            }
        };
        assert!(PropertyStruct::from_ast(&duplicate).is_err());
    }
}
