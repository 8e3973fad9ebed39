//! Binary package index
//!
//! Resolves a binary package name to the directory whose source package
//! produces it.

use crate::core::{BinaryIndex, DescriptorStore};

/// Map every declared binary package to the directory that builds it
///
/// When two directories declare the same binary package the later one wins.
/// Directories are visited in ascending order so the winner does not depend
/// on hash order.
pub fn build_binary_index(descriptors: &DescriptorStore) -> BinaryIndex {
    let mut index = BinaryIndex::new();
    for descriptor in descriptors.sorted() {
        for binary in descriptor.binaries() {
            index.insert(binary.clone(), descriptor.directory().to_string());
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::core::Descriptor;

    fn store(descriptors: Vec<Descriptor>) -> DescriptorStore {
        descriptors.into_iter().collect()
    }

    #[test]
    fn test_every_binary_is_indexed() {
        let descriptors = store(vec![
            Descriptor::builder()
                .with_directory("opx-logging")
                .with_binaries(["libopx-logging1", "libopx-logging-dev"])
                .build()
                .unwrap(),
            Descriptor::builder()
                .with_directory("opx-common")
                .with_binaries(["libopx-common1"])
                .build()
                .unwrap(),
        ]);

        let index = build_binary_index(&descriptors);

        assert_eq!(index.len(), 3);
        assert_eq!(index["libopx-logging1"], "opx-logging");
        assert_eq!(index["libopx-logging-dev"], "opx-logging");
        assert_eq!(index["libopx-common1"], "opx-common");
    }

    #[test]
    fn test_duplicate_binary_last_directory_wins() {
        let descriptors = store(vec![
            Descriptor::builder()
                .with_directory("b-fork")
                .with_binaries(["libshared"])
                .build()
                .unwrap(),
            Descriptor::builder()
                .with_directory("a-upstream")
                .with_binaries(["libshared"])
                .build()
                .unwrap(),
        ]);

        for _ in 0..8 {
            let index = build_binary_index(&descriptors);
            assert_eq!(index["libshared"], "b-fork");
        }
    }

    #[test]
    fn test_empty_store() {
        assert!(build_binary_index(&DescriptorStore::new()).is_empty());
    }
}
