//! Priority ordering of the routing chain

use fnol_domain::{
    AssetDetails, ExtractedFieldTree, IncidentInformation, MandatoryField, OtherMandatoryFields,
    Route, RoutingFlag,
};
use fnol_router::{RoutingConfig, RoutingEngine};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::io::Write;

fn claim(description: Option<String>, claim_type: Option<String>, damage: Option<Decimal>) -> ExtractedFieldTree {
    ExtractedFieldTree {
        incident_information: Some(IncidentInformation {
            description,
            ..Default::default()
        }),
        other_mandatory_fields: Some(OtherMandatoryFields {
            claim_type,
            ..Default::default()
        }),
        asset_details: Some(AssetDetails {
            estimated_damage: damage,
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn any_missing() -> impl Strategy<Value = Vec<MandatoryField>> {
    proptest::sample::subsequence(MandatoryField::CANONICAL.to_vec(), 1..=8)
}

fn any_damage() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of((0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2)))
}

proptest! {
    #[test]
    fn missing_fields_always_win(
        missing in any_missing(),
        description in proptest::option::of("(staged|fake|calm|hail) [a-z ]{0,20}"),
        claim_type in proptest::option::of("(auto|bodily injury|medical|property)"),
        damage in any_damage(),
    ) {
        let engine = RoutingEngine::default_config();
        let result = engine.route(&claim(description, claim_type, damage), &missing);

        prop_assert_eq!(result.route, Route::ManualReview);
        prop_assert_eq!(result.flags, vec![RoutingFlag::MissingFields]);
        for field in &missing {
            prop_assert!(result.reasoning.contains(field.as_str()));
        }
    }

    #[test]
    fn every_claim_gets_exactly_one_flag(
        description in proptest::option::of("[a-z ]{0,40}"),
        claim_type in proptest::option::of("[a-z ]{0,20}"),
        damage in any_damage(),
    ) {
        let engine = RoutingEngine::default_config();
        let result = engine.route(&claim(description, claim_type, damage), &[]);

        prop_assert_eq!(result.flags.len(), 1);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn fast_track_iff_below_threshold(cents in 0i64..5_000_000i64) {
        let damage = Decimal::new(cents, 2);
        let engine = RoutingEngine::default_config();
        let result = engine.route(
            &claim(Some("rear-ended".to_string()), Some("auto".to_string()), Some(damage)),
            &[],
        );

        let expected = if damage < Decimal::new(25_000, 0) {
            Route::FastTrack
        } else {
            Route::StandardProcessing
        };
        prop_assert_eq!(result.route, expected);
    }
}

#[test]
fn fraud_outranks_injury() {
    let engine = RoutingEngine::default_config();
    let result = engine.route(
        &claim(
            Some("Statement looks fraudulent".to_string()),
            Some("injury".to_string()),
            Some(Decimal::new(1_000, 0)),
        ),
        &[],
    );
    assert_eq!(result.route, Route::InvestigationFlag);
}

#[test]
fn engine_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fast_track_threshold = 500").unwrap();
    writeln!(file, r#"injury_keywords = ["whiplash"]"#).unwrap();

    let config = RoutingConfig::from_file(file.path()).unwrap();
    let engine = RoutingEngine::try_new(config).unwrap();

    let whiplash = engine.route(
        &claim(Some("neck pain".to_string()), Some("Whiplash".to_string()), None),
        &[],
    );
    assert_eq!(whiplash.route, Route::SpecialistQueue);

    // "bodily" is no longer an injury keyword under this policy
    let bodily = engine.route(
        &claim(Some("neck pain".to_string()), Some("bodily".to_string()), Some(Decimal::new(400, 0))),
        &[],
    );
    assert_eq!(bodily.route, Route::FastTrack);
}
