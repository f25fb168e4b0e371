use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// Locates an accessible [`syn::Path`] for another crate as seen from the
/// caller's `Cargo.toml`.
///
/// Generated code must name crates the way the invoking crate can see them.
///
/// # Example
///
/// ```rust
/// # use prop_macro_utils::Manifest;
/// let p: syn::Path = Manifest::crate_path("prop_access");
/// ```
///
/// Reading and caching the manifest is not free; resolve each path once per
/// macro invocation.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `prop_` and the caller depends
///    on the facade crate `propath`, return `::propath::short_name`
///    (e.g. `prop_access` -> `::propath::access`).
/// 3. Repeat steps 1-2 in `dev-dependencies`.
/// 4. Otherwise fall back to `::crate_name`. This is also the answer when
///    no manifest can be read.
///
/// ## Note
///
/// A crate naming itself from generated code needs
/// `extern crate self as crate_name;` at its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "propath";
const CRATE_PREFIX: &str = "prop_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path).and_then(|m| m.modified()).ok()
    }

    fn read(path: &Path, modified_time: SystemTime) -> Option<Manifest> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        let manifest = Document::parse(text).ok()?;
        Some(Manifest {
            manifest,
            modified_time,
        })
    }

    fn absolute(name: &str) -> syn::Path {
        let ident = syn::Ident::new(name, Span::call_site());
        let mut path = syn::Path::from(ident);
        path.leading_colon = Some(Default::default());
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(name));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            let mut path = Self::absolute(FACADE_NAME);
            path.segments
                .push(syn::Ident::new(module, Span::call_site()).into());
            return Some(path);
        }
        None
    }

    /// Returns a [`syn::Path`] for the package named `name` as resolved from
    /// this manifest. See the type documentation for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::absolute(name))
    }

    /// Runs `func` on the caller's [`Manifest`], caching it per path until
    /// the file changes.
    ///
    /// `func` receives `None` when the manifest cannot be located or parsed.
    pub fn shared<R>(func: impl FnOnce(Option<&Self>) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(None);
        };
        let Some(modified_time) = Self::modified_time(&path) else {
            return func(None);
        };

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && manifest.modified_time == modified_time
        {
            return func(Some(manifest));
        }
        drop(manifests);

        let Some(manifest) = Self::read(&path, modified_time) else {
            return func(None);
        };
        let result = func(Some(&manifest));

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }

    /// Shorthand for resolving one crate path, falling back to `::name`.
    pub fn crate_path(name: &str) -> syn::Path {
        Self::shared(|manifest| match manifest {
            Some(manifest) => manifest.get_crate_path(name),
            None => Self::absolute(name),
        })
    }
}
