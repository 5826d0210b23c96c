//! End-to-end encoding tests: build a dataflow, encode it, compare documents.
mod common;
use common::*;
use dataflow_canon::prelude::*;
use serde_json::json;

#[test]
fn test_encoding_manual_input() {
    init_tracing();
    let mut flow = Dataflow::new();
    flow.input("inp", ManualInputConfig::new(behavior!(|| vec![0, 1, 2])))
        .unwrap();

    let document = encode(&flow).unwrap();
    assert_eq!(
        document.as_value(),
        &json!({
            "type": "Dataflow",
            "steps": [{
                "input_config": {
                    "input_builder": "<lambda>",
                    "type": "ManualInputConfig",
                },
                "step_id": "inp",
                "type": "Input",
            }],
        })
    );
    assert_eq!(
        document.render_with(RenderStyle::Python).unwrap(),
        r#"{"steps": [{"input_config": {"input_builder": "<lambda>", "type": "ManualInputConfig"}, "step_id": "inp", "type": "Input"}], "type": "Dataflow"}"#
    );
}

#[test]
fn test_encoding_map() {
    let mut flow = Dataflow::new();
    flow.map(behavior!(|x: i64| x + 1)).unwrap();

    let document = encode(&flow).unwrap();
    assert_eq!(
        document.render_with(RenderStyle::Python).unwrap(),
        r#"{"steps": [{"mapper": "<lambda>", "type": "Map"}], "type": "Dataflow"}"#
    );
    assert_eq!(
        document.render(),
        r#"{"steps":[{"mapper":"<lambda>","type":"Map"}],"type":"Dataflow"}"#
    );
}

#[test]
fn test_encoding_filter() {
    let mut flow = Dataflow::new();
    flow.filter(behavior!(|x: &i64| *x == 1)).unwrap();

    assert_eq!(
        encode(&flow).unwrap().into_value(),
        json!({"type": "Dataflow", "steps": [{"type": "Filter", "predicate": "<lambda>"}]})
    );
}

#[test]
fn test_encoding_reduce() {
    let mut flow = Dataflow::new();
    flow.reduce(
        "sessionizer",
        behavior!(|x: i64, y: i64| x + y),
        behavior!(|x: &i64, y: &i64| x == y),
    )
    .unwrap();

    assert_eq!(
        encode(&flow).unwrap().into_value(),
        json!({
            "type": "Dataflow",
            "steps": [{
                "type": "Reduce",
                "step_id": "sessionizer",
                "reducer": "<lambda>",
                "is_complete": "<lambda>",
            }],
        })
    );
}

#[test]
fn test_encoding_flat_map() {
    let mut flow = Dataflow::new();
    flow.flat_map(behavior!(|x: i64| vec![x, x + 1])).unwrap();

    assert_eq!(
        encode(&flow).unwrap().into_value(),
        json!({"type": "Dataflow", "steps": [{"type": "FlatMap", "mapper": "<lambda>"}]})
    );
}

#[test]
fn test_encoding_stateful_map() {
    let mut flow = Dataflow::new();
    flow.stateful_map(
        "order_book",
        behavior!(|_key: &str| OrderBook::default()),
        Behavior::of(&OrderBook::update),
    )
    .unwrap();

    assert_eq!(
        encode(&flow).unwrap().into_value(),
        json!({
            "type": "Dataflow",
            "steps": [{
                "builder": "<lambda>",
                "mapper": "update",
                "step_id": "order_book",
                "type": "StatefulMap",
            }],
        })
    );
}

#[test]
fn test_encoding_fold_window() {
    init_tracing();
    let mut flow = Dataflow::new();
    flow.fold_window(
        "running_average",
        event_clock(),
        tumbling_window(),
        behavior!(|_key: &str| Vec::new()),
        Behavior::of(&acc_values),
    )
    .unwrap();

    let document = encode(&flow).unwrap();
    assert_eq!(
        document.as_value(),
        &json!({
            "type": "Dataflow",
            "steps": [{
                "builder": "<lambda>",
                "clock_config": {
                    "dt_getter": "<lambda>",
                    "type": "EventClockConfig",
                    "wait_for_system_duration": "0:00:10",
                },
                "folder": "acc_values",
                "step_id": "running_average",
                "type": "FoldWindow",
                "window_config": {
                    "length": "0:00:05",
                    "start_at": "2005-07-14T12:30:00+00:00",
                    "type": "TumblingWindowConfig",
                },
            }],
        })
    );
    assert_eq!(
        document.render_with(RenderStyle::Python).unwrap(),
        concat!(
            r#"{"steps": [{"builder": "<lambda>", "clock_config": {"dt_getter": "<lambda>", "#,
            r#""type": "EventClockConfig", "wait_for_system_duration": "0:00:10"}, "#,
            r#""folder": "acc_values", "step_id": "running_average", "type": "FoldWindow", "#,
            r#""window_config": {"length": "0:00:05", "start_at": "2005-07-14T12:30:00+00:00", "#,
            r#""type": "TumblingWindowConfig"}}], "type": "Dataflow"}"#,
        )
    );
}

#[test]
fn test_encoding_method_descriptor() {
    let mut flow = Dataflow::new();
    flow.flat_map(behavior!(str::split::<char>)).unwrap();
    flow.flat_map(Behavior::of(&str::split_whitespace)).unwrap();

    assert_eq!(
        encode(&flow).unwrap().into_value(),
        json!({
            "type": "Dataflow",
            "steps": [
                {"type": "FlatMap", "mapper": "split"},
                {"type": "FlatMap", "mapper": "split_whitespace"},
            ],
        })
    );
}

#[test]
fn test_encoding_full_pipeline_keeps_step_order() {
    let mut flow = Dataflow::new();
    flow.input("inp", ManualInputConfig::new(behavior!(|| 0..10)))
        .unwrap()
        .map(Behavior::of(&stringify))
        .unwrap()
        .filter_map(behavior!(|s: String| s.parse::<f64>().ok()))
        .unwrap()
        .map(Behavior::of(&normalize))
        .unwrap()
        .inspect(behavior!(|x: &f64| println!("{}", x)))
        .unwrap()
        .inspect_epoch(behavior!(|epoch: u64, x: &f64| println!("{} {}", epoch, x)))
        .unwrap()
        .collect_window("collect", SystemClockConfig, tumbling_window())
        .unwrap()
        .reduce_window(
            "sum",
            SystemClockConfig,
            TumblingWindowConfig::new(Duration::minutes(1)),
            behavior!(|a: f64, b: f64| a + b),
        )
        .unwrap()
        .output("out", StdOutputConfig)
        .unwrap();

    let value = encode(&flow).unwrap().into_value();
    let kinds: Vec<&str> = value["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "Input",
            "Map",
            "FilterMap",
            "Map",
            "Inspect",
            "InspectEpoch",
            "CollectWindow",
            "ReduceWindow",
            "Output",
        ]
    );
    assert_eq!(value["steps"][1]["mapper"], "stringify");
    assert_eq!(value["steps"][3]["mapper"], "normalize");
    assert_eq!(
        value["steps"][6]["clock_config"],
        json!({"type": "SystemClockConfig"})
    );
    assert_eq!(
        value["steps"][7]["window_config"],
        json!({"length": "0:01:00", "start_at": null, "type": "TumblingWindowConfig"})
    );
    assert_eq!(
        value["steps"][8],
        json!({"output_config": {"type": "StdOutputConfig"}, "step_id": "out", "type": "Output"})
    );
}

#[test]
fn test_encoding_kafka_configs() {
    let mut properties = std::collections::BTreeMap::new();
    properties.insert("group.id".to_string(), "canon".to_string());

    let mut flow = Dataflow::new();
    flow.input(
        "inp",
        KafkaInputConfig::new(vec!["localhost:9092".to_string()], "events")
            .tail(false)
            .additional_properties(properties),
    )
    .unwrap()
    .output(
        "out",
        KafkaOutputConfig::new(vec!["localhost:9092".to_string()], "results"),
    )
    .unwrap();

    let value = encode(&flow).unwrap().into_value();
    assert_eq!(
        value["steps"][0]["input_config"],
        json!({
            "additional_properties": {"group.id": "canon"},
            "brokers": ["localhost:9092"],
            "starting_offset": "beginning",
            "tail": false,
            "topic": "events",
            "type": "KafkaInputConfig",
        })
    );
    assert_eq!(
        value["steps"][1]["output_config"],
        json!({
            "additional_properties": null,
            "brokers": ["localhost:9092"],
            "topic": "results",
            "type": "KafkaOutputConfig",
        })
    );
}

#[test]
fn test_encoding_manual_outputs() {
    let mut flow = Dataflow::new();
    flow.output("out", ManualOutputConfig::new(behavior!(|_worker: usize| ())))
        .unwrap()
        .output(
            "epoch_out",
            ManualEpochOutputConfig::new(Behavior::named("write_with_epoch")),
        )
        .unwrap();

    let value = encode(&flow).unwrap().into_value();
    assert_eq!(
        value["steps"][0]["output_config"],
        json!({"output_builder": "<lambda>", "type": "ManualOutputConfig"})
    );
    assert_eq!(
        value["steps"][1]["output_config"],
        json!({"output_builder": "write_with_epoch", "type": "ManualEpochOutputConfig"})
    );
}

#[test]
fn test_custom_config_encodes_like_builtin() {
    let session = CustomConfig::new("SessionWindowConfig")
        .require("gap")
        .with_field("gap", Duration::seconds(30))
        .with_field("key_fn", Behavior::of(&stringify));

    let mut flow = Dataflow::new();
    flow.collect_window("sessions", SystemClockConfig, session)
        .unwrap();

    assert_eq!(
        encode(&flow).unwrap().as_value()["steps"][0]["window_config"],
        json!({"gap": "0:00:30", "key_fn": "stringify", "type": "SessionWindowConfig"})
    );
}

#[test]
fn test_nested_custom_config() {
    let inner = CustomConfig::new("RetryPolicy")
        .with_field("attempts", 3i64)
        .with_field("backoff", Duration::milliseconds(1500));
    let outer = CustomConfig::new("HttpInputConfig")
        .with_field("url", "http://localhost")
        .with_field("retry", inner)
        .with_field("verbose", Option::<bool>::None);

    let mut flow = Dataflow::new();
    flow.input("http", outer).unwrap();

    assert_eq!(
        encode(&flow).unwrap().as_value()["steps"][0]["input_config"],
        json!({
            "retry": {"attempts": 3, "backoff": "0:00:01.500000", "type": "RetryPolicy"},
            "type": "HttpInputConfig",
            "url": "http://localhost",
            "verbose": null,
        })
    );
}

#[test]
fn test_empty_dataflow() {
    let document = encode(&Dataflow::new()).unwrap();
    assert_eq!(document.render(), r#"{"steps":[],"type":"Dataflow"}"#);
    assert_eq!(
        document.render_with(RenderStyle::Python).unwrap(),
        r#"{"steps": [], "type": "Dataflow"}"#
    );
}

#[test]
fn test_named_dataflow() {
    let flow = Dataflow::named("wordcount");

    assert_eq!(
        encode(&flow).unwrap().render(),
        r#"{"steps":[],"type":"Dataflow"}"#
    );

    let encoder = Encoder::builder().include_name(true).build();
    assert_eq!(
        encoder.encode(&flow).unwrap().render(),
        r#"{"name":"wordcount","steps":[],"type":"Dataflow"}"#
    );
    assert_eq!(
        encoder.encode(&Dataflow::new()).unwrap().render(),
        r#"{"steps":[],"type":"Dataflow"}"#
    );
}

#[test]
fn test_encoding_is_deterministic() {
    let build = || {
        let mut flow = Dataflow::new();
        flow.input("inp", ManualInputConfig::new(behavior!(|| 0..3)))
            .unwrap()
            .fold_window(
                "fold",
                event_clock(),
                tumbling_window(),
                behavior!(|_key: &str| Vec::new()),
                Behavior::of(&acc_values),
            )
            .unwrap();
        flow
    };

    let first = encode(&build()).unwrap().render();
    let second = encode(&build()).unwrap().render();
    assert_eq!(first, second);
}

#[test]
fn test_rendering_styles() {
    let mut flow = Dataflow::new();
    flow.map(behavior!(|x: i64| x)).unwrap();
    let document = encode(&flow).unwrap();

    assert_eq!(
        document.render_with(RenderStyle::Compact).unwrap(),
        document.render()
    );
    assert_eq!(document.to_string(), document.render());

    let pretty = document.render_with(RenderStyle::Pretty).unwrap();
    assert!(pretty.contains("\n  \"steps\": ["));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&pretty).unwrap(),
        document.into_value()
    );
}

#[test]
fn test_python_style_escapes_non_ascii() {
    let mut flow = Dataflow::named("caf\u{e9} \u{1f600}");
    flow.map(behavior!(|x: i64| x)).unwrap();

    let python = Encoder::builder()
        .include_name(true)
        .build()
        .encode(&flow)
        .unwrap()
        .render_with(RenderStyle::Python)
        .unwrap();
    assert!(python.starts_with(r#"{"name": "caf\u00e9 \ud83d\ude00", "#));
}

#[test]
fn test_dataflow_serializes_as_document() {
    let mut flow = Dataflow::new();
    flow.filter(Behavior::of(&normalize)).unwrap();

    let wrapped = json!({ "flow": flow });
    assert_eq!(
        wrapped["flow"],
        json!({"type": "Dataflow", "steps": [{"type": "Filter", "predicate": "normalize"}]})
    );
}

#[test]
fn test_unclassified_reference_fails_whole_encode() {
    let flow: Dataflow = vec![
        Step::new(StepKind::Map {
            mapper: Behavior::of(&normalize),
        }),
        Step::new(StepKind::Map {
            mapper: Behavior::of(&42i32),
        }),
    ]
    .into_iter()
    .collect();

    let err = encode(&flow).unwrap_err();
    assert!(matches!(err, FlowError::UnsupportedReferenceKind { .. }));
    assert!(serde_json::to_string(&flow).is_err());
}

#[test]
fn test_malformed_configuration_fails_whole_encode() {
    let flow: Dataflow = vec![
        Step::new(StepKind::Map {
            mapper: Behavior::of(&stringify),
        }),
        Step::new(StepKind::Input {
            input_config: CustomConfig::new("X").require("path").into(),
        })
        .with_step_id("inp"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        encode(&flow),
        Err(FlowError::MalformedConfiguration {
            kind: "X".to_string(),
            field: "path".to_string(),
        })
    );
    assert!(serde_json::to_string(&flow).is_err());
}

#[test]
fn test_nested_malformed_configuration_fails_whole_encode() {
    let outer = CustomConfig::new("HttpInputConfig")
        .with_field("url", "http://localhost")
        .with_field("retry", CustomConfig::new("RetryPolicy").require("attempts"));
    let flow: Dataflow = vec![
        Step::new(StepKind::Map {
            mapper: Behavior::of(&stringify),
        }),
        Step::new(StepKind::Input {
            input_config: outer.into(),
        }),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        encode(&flow),
        Err(FlowError::MalformedConfiguration {
            kind: "RetryPolicy".to_string(),
            field: "attempts".to_string(),
        })
    );
    assert!(serde_json::to_string(&flow).is_err());
}

#[test]
fn test_encode_step_and_config_directly() {
    let step = Step::new(StepKind::Inspect {
        inspector: Behavior::method("log"),
    })
    .with_step_id("trace");
    assert_eq!(
        encode_step(&step).unwrap(),
        json!({"inspector": "log", "step_id": "trace", "type": "Inspect"})
    );

    assert_eq!(
        encode_config(&tumbling_window()).unwrap(),
        json!({
            "length": "0:00:05",
            "start_at": "2005-07-14T12:30:00+00:00",
            "type": "TumblingWindowConfig",
        })
    );
}

#[test]
fn test_concurrent_encoding_of_shared_graph() {
    let mut flow = Dataflow::new();
    flow.input("inp", ManualInputConfig::new(behavior!(|| 0..3)))
        .unwrap()
        .map(Behavior::of(&stringify))
        .unwrap();
    let expected = encode(&flow).unwrap().render();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| encode(&flow).unwrap().render()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
