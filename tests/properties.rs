//! Property tests for the canonical encoding.
mod common;
use common::*;
use dataflow_canon::encoder::format::format_duration;
use dataflow_canon::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn field_names() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map("[a-z][a-z_]{0,8}", any::<i64>(), 0..8)
        .prop_map(|mut fields| {
            fields.remove("type");
            fields
        })
}

fn build_flow(fields: &[(String, i64)]) -> Dataflow {
    let config = fields
        .iter()
        .fold(CustomConfig::new("GeneratedConfig"), |config, (name, value)| {
            config.with_field(name.as_str(), *value)
        });
    let mut flow = Dataflow::new();
    flow.input("inp", config)
        .unwrap()
        .map(Behavior::of(&stringify))
        .unwrap();
    flow
}

proptest! {
    #[test]
    fn field_insertion_order_does_not_change_output(fields in field_names()) {
        let forward: Vec<(String, i64)> = fields.into_iter().collect();
        let reversed: Vec<(String, i64)> = forward.iter().rev().cloned().collect();

        let first = encode(&build_flow(&forward)).unwrap();
        let second = encode(&build_flow(&reversed)).unwrap();
        prop_assert_eq!(first.render(), second.render());
        prop_assert_eq!(
            first.render_with(RenderStyle::Python).unwrap(),
            second.render_with(RenderStyle::Python).unwrap()
        );
    }

    #[test]
    fn rendered_keys_are_sorted(fields in field_names()) {
        let forward: Vec<(String, i64)> = fields.into_iter().collect();
        let document = encode(&build_flow(&forward)).unwrap();
        let config = document.as_value()["steps"][0]["input_config"]
            .as_object()
            .unwrap();

        let keys: Vec<&String> = config.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
        prop_assert_eq!(config.len(), forward.len() + 1);
    }

    #[test]
    fn rendering_styles_agree_on_content(fields in field_names()) {
        let forward: Vec<(String, i64)> = fields.into_iter().collect();
        let document = encode(&build_flow(&forward)).unwrap();

        for style in [RenderStyle::Compact, RenderStyle::Python, RenderStyle::Pretty] {
            let text = document.render_with(style).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(&parsed, document.as_value());
        }
    }

    #[test]
    fn duration_sign_shows_only_in_day_count(micros in -10_000_000_000_000i64..10_000_000_000_000i64) {
        let text = format_duration(&Duration::microseconds(micros));
        let clock = text.rsplit(", ").next().unwrap();

        prop_assert_eq!(micros < 0, text.starts_with('-'));
        prop_assert!(!clock.starts_with('-'));
        prop_assert_eq!(text.contains("day"), micros.abs() >= 86_400_000_000 || micros < 0);
        prop_assert_eq!(clock.contains('.'), micros % 1_000_000 != 0);
    }
}
