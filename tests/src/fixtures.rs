//! Shared test fixtures.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rl_01_bloom_encoding::{
    BloomFilterKeys, EncodingConfig, InMemoryIdatProvider, LocalIdat, RecordEncodingService,
};
use rl_02_record_linkage::{LinkageService, Person};
use shared_types::{Idat, OrganizationId, TransferRecord};

/// A complete identifying record.
pub fn idat(first_name: &str, last_name: &str, birthday: &str, insurance_number: &str) -> Idat {
    Idat {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birthday: birthday.to_string(),
        sex: "F".to_string(),
        street: "HAUPTSTRASSE 1".to_string(),
        zip_code: "10115".to_string(),
        city: "BERLIN".to_string(),
        country: "DE".to_string(),
        insurance_number: insurance_number.to_string(),
    }
}

pub fn anna() -> Idat {
    idat("ANNA", "SCHMIDT", "1980-01-01", "A123456789")
}

pub fn bernd() -> Idat {
    idat("BERND", "MUELLER", "1975-05-12", "B987654321")
}

pub fn clara() -> Idat {
    idat("CLARA", "WAGNER", "1992-11-30", "C555444333")
}

pub fn dieter() -> Idat {
    idat("DIETER", "BECKER", "1961-03-08", "D111222333")
}

/// `count` distinct people with random names, birthdays and insurance
/// numbers, reproducible per `seed`.
pub fn random_people(count: usize, seed: u64) -> Vec<Idat> {
    fn word(rng: &mut StdRng, len: usize) -> String {
        (0..len).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let first = word(&mut rng, 7);
            let last = word(&mut rng, 9);
            let birthday = format!(
                "19{:02}-{:02}-{:02}",
                rng.gen_range(0..100),
                rng.gen_range(1..13),
                rng.gen_range(1..29)
            );
            let insurance = format!("{}{:09}", word(&mut rng, 1), rng.gen_range(0..1_000_000_000u32));
            idat(&first, &last, &birthday, &insurance)
        })
        .collect()
}

/// Encoder of one linkage run: default configuration seeded by `keys`.
pub fn encoder(keys: &BloomFilterKeys) -> RecordEncodingService {
    let config = EncodingConfig::default().with_permutation_seed(keys.permutation_seed());
    RecordEncodingService::new(config, Some(keys)).unwrap()
}

/// Transfer records of one organization, local ids `<org>-<index>`.
pub fn encode_organization(
    encoder: &RecordEncodingService,
    organization: &str,
    idats: &[Idat],
) -> Vec<TransferRecord> {
    let provider = InMemoryIdatProvider::new(
        idats
            .iter()
            .enumerate()
            .map(|(i, idat)| LocalIdat {
                local_id: format!("{}-{}", organization, i),
                idat: idat.clone(),
            })
            .collect(),
    );
    encoder
        .encode_provider(&provider, &OrganizationId::new(organization), true)
        .unwrap()
}

/// Persons as the trusted party sees them after the JSON transfer.
pub fn receive(records: &[TransferRecord], record_length: usize) -> Vec<Person> {
    let json = serde_json::to_string(records).unwrap();
    let received: Vec<TransferRecord> = serde_json::from_str(&json).unwrap();
    LinkageService::persons_from_transfer(&received, record_length).unwrap()
}

/// `org:localId` labels of a cluster, sorted.
pub fn labels(cluster: &rl_02_record_linkage::MatchedPerson) -> Vec<String> {
    let mut labels: Vec<String> = cluster
        .members()
        .map(|p| format!("{}:{}", p.organization_id(), p.local_id().unwrap_or("-")))
        .collect();
    labels.sort();
    labels
}
