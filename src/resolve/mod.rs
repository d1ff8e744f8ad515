//! Fragment resolution through prioritized store chains
//!
//! Per fragment kind the resolver holds an ordered list of stores, from
//! most specific (locale plus Level/Version) to least specific (the
//! locale-wide default). Resolution never fails: optional kinds fall back
//! to the empty string, the generic kind to the universal default
//! template. A diagnostic without body text is treated as a configuration
//! defect, never as acceptable output.

use std::collections::BTreeSet;

use crate::catalog::loader::Bundle;
use crate::catalog::{Context, FragmentKind, FragmentStore, MessageKey, Variant};
use crate::codes::ErrorCode;
use crate::error::MessageError;

/// Fallback body text when no generic template is registered for a code.
/// Takes the offending element as its single argument.
pub const DEFAULT_GENERIC_TEMPLATE: &str = "The element {0} does not comply.";

fn chain_index(kind: FragmentKind) -> usize {
    match kind {
        FragmentKind::Short => 0,
        FragmentKind::Pre => 1,
        FragmentKind::Generic => 2,
        FragmentKind::Post => 3,
    }
}

/// Walks the store chains and always returns a usable template.
#[derive(Debug, Clone)]
pub struct FragmentResolver {
    chains: [Vec<FragmentStore>; 4],
    default_generic: String,
}

impl FragmentResolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    /// Resolve `kind` for `(code, variant)` under `ctx`.
    ///
    /// Each applicable store is tried with the variant key first, then the
    /// plain key, before falling through to the next (broader) store. The
    /// first hit anywhere in the chain wins.
    pub fn resolve(
        &self,
        kind: FragmentKind,
        code: &ErrorCode,
        variant: Option<Variant>,
        ctx: &Context,
    ) -> &str {
        let chain = &self.chains[chain_index(kind)];
        for store in chain.iter().filter(|s| s.scope().applies_to(ctx)) {
            if let Some(v) = variant {
                if let Some(template) = store.lookup(&MessageKey::new(code.clone(), Some(v))) {
                    return template;
                }
            }
            if let Some(template) = store.lookup(&MessageKey::plain(code.clone())) {
                return template;
            }
        }
        match kind {
            FragmentKind::Generic => &self.default_generic,
            _ => "",
        }
    }

    /// The universal default generic template.
    pub fn default_generic(&self) -> &str {
        &self.default_generic
    }

    /// All codes registered in the short and generic chains, sorted.
    pub fn known_codes(&self) -> BTreeSet<ErrorCode> {
        let mut codes = BTreeSet::new();
        for kind in [FragmentKind::Short, FragmentKind::Generic] {
            for store in &self.chains[chain_index(kind)] {
                codes.extend(store.codes().cloned());
            }
        }
        codes
    }
}

/// Assembles a resolver from stores and the mandatory default generic.
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    stores: Vec<FragmentStore>,
    default_generic: Option<String>,
}

impl ResolverBuilder {
    /// Register a store. Stores of equal specificity are consulted in
    /// registration order, so register overrides before defaults.
    pub fn store(mut self, store: FragmentStore) -> Self {
        self.stores.push(store);
        self
    }

    /// Set the universal default generic template, replacing any value a
    /// bundle supplied.
    pub fn default_generic(mut self, template: impl Into<String>) -> Self {
        self.default_generic = Some(template.into());
        self
    }

    /// Register a parsed bundle. The first bundle that carries a default
    /// generic template supplies it; later ones do not replace it.
    pub fn bundle(mut self, bundle: Bundle) -> Self {
        if self.default_generic.is_none() {
            self.default_generic = bundle.default_generic;
        }
        self.stores.push(bundle.store);
        self
    }

    pub fn bundles(mut self, bundles: impl IntoIterator<Item = Bundle>) -> Self {
        for bundle in bundles {
            self = self.bundle(bundle);
        }
        self
    }

    /// Build the resolver.
    ///
    /// Fails with `UnresolvedGeneric` when no universal default generic is
    /// available: a resolver that could produce an empty body breaks the
    /// "always report something" guarantee.
    pub fn build(self) -> Result<FragmentResolver, MessageError> {
        let default_generic = self.default_generic.ok_or(MessageError::UnresolvedGeneric)?;
        let mut chains: [Vec<FragmentStore>; 4] = std::array::from_fn(|_| Vec::new());
        for store in self.stores {
            chains[chain_index(store.kind())].push(store);
        }
        for chain in &mut chains {
            // Stable sort: narrower scopes first, registration order within
            // a specificity tier.
            chain.sort_by_key(|s| std::cmp::Reverse(s.scope().specificity()));
        }
        Ok(FragmentResolver {
            chains,
            default_generic,
        })
    }
}

#[cfg(test)]
mod tests;
