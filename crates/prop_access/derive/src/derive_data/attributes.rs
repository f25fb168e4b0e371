use syn::{Attribute, Ident, LitStr, meta::ParseNestedMeta};

use crate::PROPERTY_ATTRIBUTE_NAME;

/// Type level `#[property(...)]` options.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `name = "..."`
    pub name: Option<LitStr>,
    /// `methods(get_a, set_a, ...)`, in declaration order.
    pub methods: Vec<Ident>,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(PROPERTY_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("name") {
            if self.name.is_some() {
                return Err(meta.error("duplicate `name` option"));
            }
            self.name = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("methods") {
            meta.parse_nested_meta(|inner| {
                let ident = inner
                    .path
                    .get_ident()
                    .ok_or_else(|| inner.error("expected a method name"))?;
                if self.methods.contains(ident) {
                    return Err(inner.error("method listed twice"));
                }
                self.methods.push(ident.clone());
                Ok(())
            })
        } else {
            Err(meta.error("unsupported property attribute, expected `name` or `methods`"))
        }
    }
}

/// Field level `#[property(...)]` options.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `skip`: the field is not a member.
    pub skip: bool,
    /// `rename = "..."`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(PROPERTY_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    if this.rename.is_some() {
                        return Err(meta.error("duplicate `rename` option"));
                    }
                    this.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported property attribute, expected `skip` or `rename`"))
                }
            })?;
        }

        if this.skip && this.rename.is_some() {
            return Err(syn::Error::new_spanned(
                this.rename.as_ref(),
                "`rename` has no effect on a skipped field",
            ));
        }

        Ok(this)
    }
}
