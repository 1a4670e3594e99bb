//! # Federated Linkage
//!
//! Multi-organization clustering over real encodings: cluster shapes,
//! completeness under every strategy and the single-organization fold.

#[cfg(test)]
mod tests {
    use rl_01_bloom_encoding::{BloomFilterKeys, RecordEncodingApi, RecordEncodingService};
    use rl_02_record_linkage::{
        LinkageService, MatchConfig, MatchStrategy, MatchedPerson, Person, RecordLinkageApi,
    };
    use shared_types::{Idat, OrganizationId};

    use crate::fixtures::{
        anna, bernd, clara, dieter, encode_organization, encoder, labels, random_people, receive,
    };

    fn organization(encoder: &RecordEncodingService, name: &str, idats: &[Idat]) -> Vec<Person> {
        receive(
            &encode_organization(encoder, name, idats),
            encoder.record_length(),
        )
    }

    fn total_members(clusters: &[MatchedPerson]) -> usize {
        clusters.iter().map(MatchedPerson::len).sum()
    }

    #[test]
    fn test_one_shared_identity_gives_three_clusters() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let service = LinkageService::new(MatchConfig::default()).unwrap();

        let clusters = service.match_federated(vec![
            organization(&encoder, "A", &[anna(), bernd()]),
            organization(&encoder, "B", &[anna(), clara()]),
        ]);

        assert_eq!(clusters.len(), 3);
        assert_eq!(labels(&clusters[0]), vec!["A:A-0", "B:B-0"]);
        assert_eq!(labels(&clusters[1]), vec!["A:A-1"]);
        assert_eq!(labels(&clusters[2]), vec!["B:B-1"]);
    }

    #[test]
    fn test_largest_organization_seeds_cluster_order() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let service = LinkageService::new(MatchConfig::default()).unwrap();

        let clusters = service.match_federated(vec![
            organization(&encoder, "small", &[dieter()]),
            organization(&encoder, "large", &[anna(), bernd(), dieter()]),
        ]);

        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters[0].first().organization_id(), &OrganizationId::new("large"));
        assert_eq!(labels(&clusters[2]), vec!["large:large-2", "small:small-0"]);
    }

    #[test]
    fn test_duplicates_within_one_organization_stay_apart() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let service = LinkageService::new(MatchConfig::default()).unwrap();

        let clusters = service.match_federated(vec![
            organization(&encoder, "A", &[bernd(), clara(), dieter()]),
            organization(&encoder, "B", &[anna(), anna()]),
        ]);

        assert_eq!(
            clusters.len(),
            5,
            "Persons of one list are matched against the snapshot only"
        );
    }

    #[test]
    fn test_every_strategy_keeps_every_person() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let lists = vec![
            organization(&encoder, "A", &[anna(), bernd(), clara()]),
            organization(&encoder, "B", &[clara(), dieter()]),
            organization(&encoder, "C", &[anna(), anna(), bernd(), dieter()]),
        ];

        for strategy in MatchStrategy::ALL {
            for threshold in [0.0, 0.5, 0.95, 1.0] {
                let service =
                    LinkageService::new(MatchConfig::new(strategy, threshold).unwrap()).unwrap();

                let clusters = service.match_federated(lists.clone());

                assert_eq!(
                    total_members(&clusters),
                    9,
                    "{} at {} lost or duplicated a person",
                    strategy,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_zero_threshold_merges_everything_into_seed_clusters() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let service = LinkageService::new(MatchConfig::default().with_threshold(0.0)).unwrap();

        let clusters = service.match_federated(vec![
            organization(&encoder, "A", &[anna(), bernd()]),
            organization(&encoder, "B", &[clara()]),
        ]);

        assert_eq!(clusters.len(), 2, "Every candidate is accepted somewhere");
    }

    #[test]
    fn test_single_organization_deduplicates_repeated_identity() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let persons = organization(&encoder, "A", &[anna(), bernd(), anna()]);

        for threshold in [0.1, 0.5, 0.95, 1.0] {
            let service = LinkageService::new(MatchConfig::default().with_threshold(threshold)).unwrap();
            let clusters = service.match_one(persons.clone());

            let with_anna = clusters
                .iter()
                .find(|c| c.first().local_id() == Some("A-0"))
                .unwrap();
            assert!(
                with_anna.members().any(|p| p.local_id() == Some("A-2")),
                "Identical vectors must share a cluster at threshold {}",
                threshold
            );
        }
    }

    #[test]
    fn test_single_list_through_federated_gives_singletons() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let service = LinkageService::new(MatchConfig::default()).unwrap();

        let clusters = service.match_federated(vec![organization(&encoder, "A", &[anna(), anna()])]);

        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_large_federation_completes() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let people = random_people(40, 7);
        let service = LinkageService::new(MatchConfig::default()).unwrap();

        let vectors = encoder.generate_records(&people).unwrap();
        assert_eq!(vectors.len(), 40);

        let clusters = service.match_federated(vec![
            organization(&encoder, "A", &people),
            organization(&encoder, "B", &people[..20]),
            organization(&encoder, "C", &people[10..]),
        ]);

        assert_eq!(clusters.len(), 40);
        assert_eq!(total_members(&clusters), 40 + 20 + 30);
        assert!(clusters.iter().all(|c| c.len() >= 2 && c.len() <= 3));
    }
}
