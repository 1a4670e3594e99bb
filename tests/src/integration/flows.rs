//! # Integration Test Flows
//!
//! The full path of a linkage run across crate boundaries:
//!
//! 1. **Encoding (rl-01)**: each organization encodes its identifying data
//!    with the shared keys into transfer records
//! 2. **Transfer (shared-types)**: records cross the organization boundary
//!    as JSON with Base64 record vectors
//! 3. **Linkage (rl-02)**: the trusted party clusters the persons
//! 4. **Pseudonyms (rl-03)**: each cluster receives an encrypted pseudonym

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rl_01_bloom_encoding::{BloomFilterKeys, RecordEncodingApi};
    use rl_02_record_linkage::{LinkageService, MatchConfig, RecordLinkageApi};
    use rl_03_pseudonyms::{
        MedicId, PseudonymError, PseudonymGenerator, PseudonymizationApi, ResearchStudyKey,
    };
    use shared_types::{Idat, OrganizationId, TransferRecord};

    use crate::fixtures::{anna, bernd, clara, dieter, encode_organization, encoder, labels, receive};

    // =============================================================================
    // END-TO-END
    // =============================================================================

    #[test]
    fn test_encode_link_pseudonymize_flow() {
        let keys = BloomFilterKeys::generate();
        let encoder = encoder(&keys);
        let length = encoder.record_length();

        let org_a = encode_organization(&encoder, "org-a", &[anna(), bernd(), clara()]);
        let org_b = encode_organization(&encoder, "org-b", &[clara(), anna()]);
        let org_c = encode_organization(&encoder, "org-c", &[dieter(), anna()]);

        let service = LinkageService::new(MatchConfig::default()).unwrap();
        let clusters = service.match_federated(vec![
            receive(&org_a, length),
            receive(&org_b, length),
            receive(&org_c, length),
        ]);

        let mut groups: Vec<Vec<String>> = clusters.iter().map(labels).collect();
        groups.sort();
        assert_eq!(
            groups,
            vec![
                vec!["org-a:org-a-0", "org-b:org-b-1", "org-c:org-c-1"],
                vec!["org-a:org-a-1"],
                vec!["org-a:org-a-2", "org-b:org-b-0"],
                vec!["org-c:org-c-0"],
            ],
            "Clusters must follow identities"
        );

        let study_key = ResearchStudyKey::generate();
        let generator = PseudonymGenerator::new("study-42", &study_key);
        let pseudonymized = generator.create_pseudonyms_and_shuffle(&clusters).unwrap();
        assert_eq!(pseudonymized.len(), 4);

        let decoded: BTreeSet<BTreeSet<MedicId>> = pseudonymized
            .iter()
            .map(|p| {
                generator
                    .decode_pseudonym(&p.pseudonym)
                    .unwrap()
                    .into_iter()
                    .collect()
            })
            .collect();
        let expected: BTreeSet<BTreeSet<MedicId>> = clusters
            .iter()
            .map(|c| c.members().map(|p| MedicId::from_person(p).unwrap()).collect())
            .collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_transfer_json_hides_identifying_data() {
        let keys = BloomFilterKeys::generate();
        let records = encode_organization(&encoder(&keys), "org-a", &[anna()]);

        let json = serde_json::to_string(&records).unwrap();

        for value in ["ANNA", "SCHMIDT", "1980-01-01", "A123456789"] {
            assert!(!json.contains(value), "{} leaked into the transfer record", value);
        }
    }

    // =============================================================================
    // KEYS AND CONFIGURATION
    // =============================================================================

    #[test]
    fn test_different_keys_do_not_link() {
        let encoder_a = encoder(&BloomFilterKeys::generate());
        let encoder_b = encoder(&BloomFilterKeys::generate());

        let a = encoder_a.generate_record(&anna()).unwrap();
        let b = encoder_b.generate_record(&anna()).unwrap();

        let service = LinkageService::new(MatchConfig::default()).unwrap();
        let persons = |org: &str, v| {
            receive(
                &[TransferRecord::new(OrganizationId::new(org), Some("1".into()), &v)],
                encoder_a.record_length(),
            )
        };
        let clusters = service.match_federated(vec![persons("org-a", a), persons("org-b", b)]);

        assert_eq!(clusters.len(), 2, "Vectors under different keys are unrelated");
    }

    #[test]
    fn test_encoding_is_reproducible_across_sites() {
        let keys = BloomFilterKeys::generate();
        let copied = BloomFilterKeys::from_bytes(&keys.to_bytes()).unwrap();

        let here = encoder(&keys).generate_record(&anna()).unwrap();
        let there = encoder(&copied).generate_record(&anna()).unwrap();

        assert_eq!(here, there, "Same keys and IDAT must give bit-identical vectors");
    }

    #[test]
    fn test_typo_scores_between_match_and_stranger() {
        let encoder = encoder(&BloomFilterKeys::generate());
        let original = anna();
        let typo = Idat {
            last_name: "SCHMITT".to_string(),
            ..anna()
        };

        let vectors = encoder
            .generate_records(&[original, typo, dieter()])
            .unwrap();
        let persons = receive(
            &vectors
                .iter()
                .map(|v| TransferRecord::new(OrganizationId::new("org"), None, v))
                .collect::<Vec<_>>(),
            encoder.record_length(),
        );

        let typo_score = persons[0].similarity(&persons[1]);
        let stranger_score = persons[0].similarity(&persons[2]);

        assert!(typo_score < 1.0);
        assert!(
            typo_score > stranger_score,
            "typo {} must score above stranger {}",
            typo_score,
            stranger_score
        );
    }

    // =============================================================================
    // ORGANIZATION-ONLY VARIANT
    // =============================================================================

    #[test]
    fn test_records_without_local_ids_link_but_cannot_be_pseudonymized() {
        let keys = BloomFilterKeys::generate();
        let encoder = encoder(&keys);
        let vector = encoder.generate_record(&anna()).unwrap();
        let records = vec![
            TransferRecord::without_local_id(OrganizationId::new("org-a"), &vector),
            TransferRecord::without_local_id(OrganizationId::new("org-b"), &vector),
        ];
        let persons = receive(&records, encoder.record_length());

        let service = LinkageService::new(MatchConfig::default()).unwrap();
        let clusters =
            service.match_federated(persons.into_iter().map(|p| vec![p]).collect());
        assert_eq!(clusters.len(), 1);

        let generator = PseudonymGenerator::new("study", &ResearchStudyKey::generate());
        assert!(matches!(
            generator.create_pseudonyms_and_shuffle(&clusters),
            Err(PseudonymError::MissingLocalId { .. })
        ));
    }
}
