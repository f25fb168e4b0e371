use prop_utils::lower_camelize;
use syn::{Ident, LitStr};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum MethodKind {
    Getter,
    Setter,
}

impl MethodKind {
    /// Classifies a method by its prefix.
    ///
    /// The prefix must be followed by `_` or an uppercase letter, so
    /// `get_name` and `getName` count while `settings` does not.
    pub fn of(name: &str) -> Option<Self> {
        const PREFIXES: [(&str, MethodKind); 3] = [
            ("get", MethodKind::Getter),
            ("is", MethodKind::Getter),
            ("set", MethodKind::Setter),
        ];

        let name = name.trim_start_matches('_');
        PREFIXES.into_iter().find_map(|(prefix, kind)| {
            let rest = name.strip_prefix(prefix)?;
            let rest = match rest.strip_prefix('_') {
                Some(rest) => rest,
                None if rest.starts_with(|c: char| c.is_uppercase()) => rest,
                None => return None,
            };
            (!rest.is_empty()).then_some(kind)
        })
    }
}

/// An inherent method exposed through `#[property(methods(...))]`.
pub(crate) struct AccessorMethod {
    pub ident: Ident,
    pub kind: MethodKind,
    /// The runtime name, e.g. `getFullName`.
    pub name: LitStr,
}

impl AccessorMethod {
    pub fn new(ident: Ident) -> syn::Result<Self> {
        let text = ident.to_string();
        let text = text.strip_prefix("r#").unwrap_or(&text);

        let Some(kind) = MethodKind::of(text) else {
            return Err(syn::Error::new(
                ident.span(),
                "accessor methods must start with `get_`, `is_` or `set_`",
            ));
        };

        let name = LitStr::new(&lower_camelize(text), ident.span());
        Ok(Self { ident, kind, name })
    }
}
