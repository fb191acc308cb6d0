//! Tests for the tagged identifiers

use core_kernel::{HoldingId, PlanId};
use std::collections::BTreeSet;

mod ordering_tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: BTreeSet<HoldingId> = (0..64).map(|_| HoldingId::new_v7()).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn test_ids_sort_by_creation() {
        let first = HoldingId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = HoldingId::new_v7();
        assert!(first < second);

        let ordered: BTreeSet<HoldingId> = [second, first].into_iter().collect();
        assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![first, second]);
    }
}

mod parsing_tests {
    use super::*;

    #[test]
    fn test_parses_tagged_and_bare_forms() {
        let original = HoldingId::new_v7();
        let tagged: HoldingId = original.to_string().parse().unwrap();
        let bare: HoldingId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, tagged);
        assert_eq!(original, bare);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("HLD-not-a-uuid".parse::<HoldingId>().is_err());
        assert!("".parse::<PlanId>().is_err());
    }

    #[test]
    fn test_tag_belongs_to_its_own_type() {
        let plan = PlanId::new_v7();
        assert!(plan.to_string().parse::<HoldingId>().is_err());
        assert_eq!(plan.to_string(), format!("PLN-{}", plan.as_uuid()));
    }
}
