use std::sync::Arc;

use rice_prioritizer::models::*;
use rice_prioritizer::store::FeatureStore;
use serde_json::json;
use speculate2::speculate;

fn ids(store: &FeatureStore) -> Vec<FeatureId> {
    store.snapshot().iter().map(|f| f.id).collect()
}

speculate! {
    before {
        let mut store = FeatureStore::seeded();
        let seeded = store.snapshot();
    }

    describe "seeded" {
        it "holds the three reference features in order" {
            let names: Vec<&str> = seeded.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "AI-Powered Code Suggestions",
                    "Real-time Collaboration",
                    "Gamified Learning Modules",
                ]
            );
        }

        it "seeds values inside the domain bounds" {
            for f in &seeded {
                assert!(FieldBounds::REACH.contains(f64::from(f.reach)));
                assert!(FieldBounds::IMPACT.contains(f.impact));
                assert!(FieldBounds::CONFIDENCE.contains(f64::from(f.confidence)));
                assert!(FieldBounds::EFFORT.contains(f.effort));
            }
        }
    }

    describe "set_field" {
        it "updates only the targeted field" {
            let id = seeded[1].id;
            let updated = store.set_field(id, FeatureEdit::SetConfidence(55));

            assert_eq!(updated[1].confidence, 55);
            assert_eq!(updated[1].reach, seeded[1].reach);
            assert_eq!(updated[1].impact, seeded[1].impact);
            assert_eq!(updated[1].effort, seeded[1].effort);
            assert_eq!(updated[1].name, seeded[1].name);
        }

        it "never changes ids or order" {
            let before = ids(&store);
            for f in &seeded {
                store.set_field(f.id, FeatureEdit::SetName(String::new()));
                store.set_field(f.id, FeatureEdit::SetReach(10_000));
            }
            assert_eq!(ids(&store), before);
        }

        it "returns the collection unchanged for an unknown id" {
            let updated = store.set_field(FeatureId::new(), FeatureEdit::SetEffort(5.0));

            let expected: Vec<Feature> = seeded.iter().map(|f| Feature::clone(f)).collect();
            let actual: Vec<Feature> = updated.iter().map(|f| Feature::clone(f)).collect();
            assert_eq!(actual, expected);
        }

        it "keeps unaffected records pointer-equal" {
            let updated = store.set_field(seeded[0].id, FeatureEdit::SetImpact(3.0));

            assert!(!Arc::ptr_eq(&updated[0], &seeded[0]));
            assert!(Arc::ptr_eq(&updated[1], &seeded[1]));
            assert!(Arc::ptr_eq(&updated[2], &seeded[2]));
        }

        it "accepts an empty name" {
            let updated = store.set_field(seeded[2].id, FeatureEdit::SetName(String::new()));
            assert_eq!(updated[2].name, "");
        }

        it "stores effort of zero as given" {
            let updated = store.set_field(seeded[0].id, FeatureEdit::SetEffort(0.0));
            assert_eq!(updated[0].effort, 0.0);
        }
    }

    describe "set_field_raw" {
        it "applies a valid field and value" {
            let updated = store
                .set_field_raw(seeded[0].id, "impact", &json!(0.75))
                .expect("valid edit");
            assert_eq!(updated[0].impact, 0.75);
        }

        it "rejects unknown field names" {
            let err = store.set_field_raw(seeded[0].id, "score", &json!(1)).unwrap_err();
            assert_eq!(err, InvalidFieldError::UnknownField("score".to_string()));

            let err = store.set_field_raw(seeded[0].id, "id", &json!("x")).unwrap_err();
            assert_eq!(err, InvalidFieldError::UnknownField("id".to_string()));
        }

        it "rejects values of the wrong type without touching the record" {
            let err = store.set_field_raw(seeded[0].id, "reach", &json!("5000")).unwrap_err();
            assert!(matches!(err, InvalidFieldError::WrongType { field: FeatureField::Reach, .. }));

            let err = store.set_field_raw(seeded[0].id, "name", &json!(42)).unwrap_err();
            assert!(matches!(err, InvalidFieldError::WrongType { field: FeatureField::Name, .. }));

            assert_eq!(store.get(seeded[0].id).as_ref(), Some(&*seeded[0]));
        }

        it "validates the field even for an unknown id" {
            assert!(store.set_field_raw(FeatureId::new(), "bogus", &json!(1)).is_err());
            assert!(store.set_field_raw(FeatureId::new(), "reach", &json!(500)).is_ok());
        }
    }

    describe "add_feature" {
        it "appends with defaults for omitted values" {
            let feature = store.add_feature(NewFeature::named("Dark Mode"));

            assert_eq!(store.len(), 4);
            assert_eq!(store.snapshot()[3].id, feature.id);
            assert_eq!(feature.reach, NewFeature::DEFAULT_REACH);
            assert_eq!(feature.impact, NewFeature::DEFAULT_IMPACT);
            assert_eq!(feature.confidence, NewFeature::DEFAULT_CONFIDENCE);
            assert_eq!(feature.effort, NewFeature::DEFAULT_EFFORT);
        }

        it "assigns a fresh id" {
            let feature = store.add_feature(NewFeature::named("Dark Mode"));
            assert!(seeded.iter().all(|f| f.id != feature.id));
        }
    }

    describe "remove_feature" {
        it "removes and keeps the order of the rest" {
            assert!(store.remove_feature(seeded[1].id));
            assert_eq!(ids(&store), vec![seeded[0].id, seeded[2].id]);
        }

        it "returns false for an unknown id" {
            assert!(!store.remove_feature(FeatureId::new()));
            assert_eq!(store.len(), 3);
        }

        it "can empty the store" {
            for f in &seeded {
                store.remove_feature(f.id);
            }
            assert!(store.is_empty());
        }
    }
}
