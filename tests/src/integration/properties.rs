//! # Property Tests
//!
//! Similarity invariants over real encodings of arbitrary identifying data.

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use proptest::prelude::*;
    use rl_01_bloom_encoding::{
        BloomFilterKeys, RecordEncodingApi, RecordEncodingService,
    };
    use rl_02_record_linkage::{MatchStrategy, MatchedPerson, Person};
    use shared_types::{Idat, OrganizationId};

    use crate::fixtures::{encoder, idat};

    fn shared_encoder() -> &'static RecordEncodingService {
        static ENCODER: OnceLock<RecordEncodingService> = OnceLock::new();
        ENCODER.get_or_init(|| {
            let keys = BloomFilterKeys::from_parts(1234, &[7u8; 32], &[9u8; 32]).unwrap();
            encoder(&keys)
        })
    }

    fn person(idat: &Idat) -> Person {
        Person::new(
            OrganizationId::new("org"),
            None,
            shared_encoder().generate_record(idat).unwrap(),
        )
    }

    fn arb_idat() -> impl Strategy<Value = Idat> {
        ("[A-Z]{0,10}", "[A-Z]{0,12}", "[0-9]{4}-[0-9]{2}-[0-9]{2}", "[A-Z][0-9]{9}")
            .prop_map(|(first, last, birthday, insurance)| idat(&first, &last, &birthday, &insurance))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_similarity_is_bounded_and_symmetric(a in arb_idat(), b in arb_idat()) {
            let (a, b) = (person(&a), person(&b));

            let ab = a.similarity(&b);
            prop_assert!((0.0..=1.0).contains(&ab));
            prop_assert_eq!(ab, b.similarity(&a));
        }

        #[test]
        fn prop_same_identity_scores_one(a in arb_idat()) {
            let first = person(&a);
            let second = person(&a);

            prop_assert_eq!(first.similarity(&second), 1.0);
        }

        #[test]
        fn prop_strategies_agree_on_singletons(a in arb_idat(), b in arb_idat()) {
            let cluster = MatchedPerson::new(person(&a));
            let candidate = person(&b);
            let direct = cluster.first().similarity(&candidate);

            for strategy in MatchStrategy::ALL {
                prop_assert!(
                    (strategy.score(&cluster, &candidate) - direct).abs() < 1e-12,
                    "{} differs on a singleton cluster", strategy
                );
            }
        }
    }
}
