#![deny(missing_docs)]

//! # Path/Operation Preprocessing
//!
//! Produces a self-contained copy of the document in which:
//! 1. no Path Item is a reference,
//! 2. path-level shared parameters are moved to the front of every operation's
//!    own parameter list (shared first, then operation-specific; no deduplication),
//! 3. parameter references are replaced by their `components.parameters` definition.
//!
//! The input is never mutated and the pass is idempotent.

use crate::oas::document::{Document, PathItem, RefOr};
use crate::oas::ref_utils::{resolve_parameter, resolve_path_item};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Runs the preprocessing pass over `doc`.
pub fn preprocess(doc: &Document) -> Document {
    let mut paths = IndexMap::with_capacity(doc.paths.len());

    for (path, item) in &doc.paths {
        let resolved = match item {
            RefOr::Item(item) => item.clone(),
            RefOr::Ref(reference) => match resolve_path_item(doc, &reference.ref_path) {
                Some(target) => {
                    debug!(path = %path, target = %reference.ref_path, "Resolved path item reference");
                    target.clone()
                }
                None => {
                    warn!(path = %path, target = %reference.ref_path, "Dropping unresolvable path item reference");
                    continue;
                }
            },
        };
        paths.insert(path.clone(), RefOr::Item(hoist_shared_parameters(resolved)));
    }

    let mut out = Document {
        paths,
        components: doc.components.clone(),
    };

    let has_component_params = doc
        .components
        .as_ref()
        .is_some_and(|c| !c.parameters.is_empty());
    if has_component_params {
        resolve_parameter_refs(&mut out, doc);
    }

    out
}

/// Moves the item's shared `parameters` in front of each operation's own list.
fn hoist_shared_parameters(mut item: PathItem) -> PathItem {
    let Some(shared) = item.parameters.take() else {
        return item;
    };

    for operation in item.operations_mut() {
        let own = operation.parameters.take().unwrap_or_default();
        let mut merged = shared.clone();
        merged.extend(own);
        operation.parameters = Some(merged);
    }

    item
}

fn resolve_parameter_refs(out: &mut Document, registry: &Document) {
    for (path, item) in out.paths.iter_mut() {
        let RefOr::Item(item) = item else {
            continue;
        };
        for operation in item.operations_mut() {
            for param in operation.parameters.iter_mut().flatten() {
                let RefOr::Ref(reference) = param else {
                    continue;
                };
                match resolve_parameter(registry, &reference.ref_path) {
                    Some(definition) => *param = RefOr::Item(definition.clone()),
                    None => {
                        warn!(path = %path, target = %reference.ref_path, "Unresolvable parameter reference");
                    }
                }
            }
        }
    }
}
