//! Property tests for id assignment and column alignment

use proptest::prelude::*;
use taglog::infrastructure::MemorySink;
use taglog::{Registry, TagId, INFO};

proptest! {
    #[test]
    fn created_ids_are_dense(names in prop::collection::vec("[a-z]{0,8}", 0..40)) {
        let registry = Registry::new(MemorySink::new());
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(registry.create_tag(name, "g", INFO), TagId(i + 4));
        }
        prop_assert_eq!(registry.len(), names.len() + 4);
    }

    #[test]
    fn prefix_columns_have_constant_width(
        tags in prop::collection::vec(("[a-z]{0,10}", "[a-z]{0,6}"), 1..12),
    ) {
        let sink = MemorySink::new();
        let registry = Registry::new(sink.clone());
        let ids: Vec<TagId> = tags
            .iter()
            .map(|(name, group)| registry.create_tag(name, group, INFO))
            .collect();
        registry.enable();

        for id in &ids {
            registry.print(*id, format_args!("m")).unwrap();
        }

        let max_name = tags.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        let max_group = tags.iter().map(|(_, g)| g.len()).max().unwrap_or(0);
        let expected = 7 + 1 + max_group + 1 + max_name + "]: m".len();
        for line in sink.lines() {
            prop_assert_eq!(line.len(), expected);
            prop_assert!(line.starts_with("   Info["));
        }
    }
}
