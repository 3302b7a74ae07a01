use sha2::{Digest, Sha256};

use crate::complex::{Configuration, FacetSignature};

/// Computes the canonical structural hash for the provided configuration.
///
/// The hash covers the target sequences and the *sorted* facet signatures, so
/// it is invariant under facet relabeling but sensitive to any change in
/// content. Two configurations hash equal exactly when they carry the same
/// targets and the same multiset of facet contents.
pub fn canonical_hash(config: &Configuration) -> String {
    let mut hasher = Sha256::new();

    hasher.update((config.num_vertices() as u64).to_le_bytes());
    for &degree in config.degrees() {
        hasher.update((degree as u64).to_le_bytes());
    }
    hasher.update((config.num_facets() as u64).to_le_bytes());
    for &size in config.sizes() {
        hasher.update((size as u64).to_le_bytes());
    }

    let mut signatures: Vec<FacetSignature> = config.signatures();
    signatures.sort();
    for signature in signatures {
        update_slice(signature.raw_members(), &mut hasher);
    }

    format!("{:x}", hasher.finalize())
}

fn update_slice(values: &[u64], hasher: &mut Sha256) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update(value.to_le_bytes());
    }
}
