// tests/device_record.rs
//
// DeviceRecord construction: identity, flattening, notes, parsers.
//
use serde_json::{json, Map, Value};
use spec_table::{
    build_devices, features, Catalog, DeviceRecord, FeatureContext, FeatureValue, Parser,
};

fn fields(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        _ => panic!("fixture must be an object"),
    }
}

fn text(s: &str) -> FeatureValue {
    FeatureValue::Text(s.to_string())
}

fn parse_battery_hl(raw: &Value) -> Vec<(String, FeatureValue)> {
    let s = raw.as_str().unwrap_or_default();
    let mah: i64 = s
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap_or(0);
    features! {
        "battery_capacity_mah" => mah,
        "battery_fast_charge" => s.contains("fast"),
    }
}

#[test]
fn empty_label_becomes_note_and_labelled_value_a_feature() {
    let catalog = Catalog::from_json_str(
        r#"{"Acer": {"d1": {"device_specs": {"Battery": {"Type": "Li-Ion", "": "n/a"}}}}}"#,
    )
    .unwrap();
    let mut ctx = FeatureContext::new();
    let records = build_devices(&catalog, &mut ctx, None);
    assert_eq!(records.len(), 1);
    let dev = &records[0];

    assert_eq!(dev.get("battery_type"), Some(&text("Li-Ion")));
    assert!(!dev.contains("battery_"));
    assert_eq!(dev.notes().unwrap().get("battery"), Some(&json!("n/a")));
    assert_eq!(dev.notes().unwrap().len(), 1);

    assert_eq!(dev.get("maker_name"), Some(&text("Acer")));
    assert_eq!(dev.get("maker_id"), Some(&FeatureValue::Int(0)));
    assert_eq!(dev.device_id(), Some("ACER_d1"));
}

#[test]
fn blank_pairs_are_discarded() {
    let raw = fields(json!({
        "device_specs": {
            "Sound": { "": "", "nan": null, "Jack": "", "Loudspeaker": "nan", "Radio": "No" }
        }
    }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "X_1", "X", 0, &mut ctx);

    assert_eq!(dev.get("sound_radio"), Some(&text("No")));
    assert!(!dev.contains("sound_jack"));
    assert!(!dev.contains("sound_loudspeaker"));
    assert!(dev.notes().unwrap().is_empty());
    assert!(!ctx.schema().contains("sound_jack"));
}

#[test]
fn first_note_per_parent_wins() {
    let raw = fields(json!({
        "device_specs": { "Misc": { "": "first", "NaN": "second" } }
    }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "X_1", "X", 0, &mut ctx);
    assert_eq!(dev.notes().unwrap().get("misc"), Some(&json!("first")));
}

#[test]
fn registered_parser_fans_out() {
    let mut ctx = FeatureContext::new();
    ctx.registry.register(Parser::named("parse_battery_hl", parse_battery_hl)).unwrap();

    let raw = fields(json!({
        "device_specs": { "Battery": { "HL": "4000mAh, fast charging", "Type": "Li-Po" } }
    }));
    let dev = DeviceRecord::build(&raw, "X_1", "X", 0, &mut ctx);

    assert_eq!(dev.get("battery_capacity_mah"), Some(&FeatureValue::Int(4000)));
    assert_eq!(dev.get("battery_fast_charge"), Some(&FeatureValue::Bool(true)));
    assert!(!dev.contains("battery_hl"));
    assert_eq!(dev.get("battery_type"), Some(&text("Li-Po")));

    assert!(ctx.schema().contains("battery_capacity_mah"));
    assert!(ctx.schema().contains("battery_fast_charge"));
    assert_eq!(ctx.parsed_features(), ["battery_capacity_mah", "battery_fast_charge"]);
}

#[test]
fn top_level_fields_are_verbatim_and_specs_normalized() {
    let raw = fields(json!({
        "Device Name": "Iconia Talk S",
        "price": 129.5,
        "device_specs": { "Selfie Camera": "5 MP", "Weight-Grams": 260 }
    }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "ACER_d1", "Acer", 0, &mut ctx);

    assert_eq!(dev.get("Device Name"), Some(&text("Iconia Talk S")));
    assert_eq!(dev.get("price"), Some(&FeatureValue::Float(129.5)));
    assert_eq!(dev.get("selfie_camera"), Some(&text("5 MP")));
    assert_eq!(dev.get("weight_grams"), Some(&FeatureValue::Int(260)));
    assert!(!dev.contains("device_specs"));
    assert!(ctx.schema().contains("selfie_camera"));
}

#[test]
fn large_integers_keep_every_digit() {
    let raw = fields(json!({
        "imei_block": 18446744073709551615u64,
        "device_specs": { "Serial": 9223372036854775808u64, "Ratio": 1.5 }
    }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "X_1", "X", 0, &mut ctx);

    assert_eq!(dev.get("imei_block"), Some(&FeatureValue::UInt(u64::MAX)));
    assert_eq!(dev.get("imei_block").unwrap().to_string(), "18446744073709551615");
    assert_eq!(dev.get("serial").unwrap().to_string(), "9223372036854775808");
    assert_eq!(dev.get("ratio"), Some(&FeatureValue::Float(1.5)));
    assert_eq!(FeatureValue::from(7u64), FeatureValue::Int(7));
}

#[test]
fn populated_order_is_identity_then_info_then_specs() {
    let raw = fields(json!({
        "url": "https://example.test/acer_d1",
        "device_specs": { "Network": { "Technology": "GSM / HSPA" } }
    }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "ACER_d1", "Acer", 3, &mut ctx);
    assert_eq!(
        dev.feature_names(),
        ["device_notes", "maker_name", "maker_id", "device_id", "url", "network_technology"]
    );
}

#[test]
fn first_write_wins_on_collisions() {
    let raw = fields(json!({
        "maker_name": "Impostor",
        "device_specs": {
            "Body": { "Weight": "180 g" },
            "Body Weight": "999 g"
        }
    }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "ACER_d1", "Acer", 0, &mut ctx);
    assert_eq!(dev.get("maker_name"), Some(&text("Acer")));
    assert_eq!(dev.get("body_weight"), Some(&text("180 g")));
    assert_eq!(dev.feature_names().iter().filter(|n| *n == "body_weight").count(), 1);
}

#[test]
fn deeper_nesting_is_kept_as_json_text() {
    let raw = fields(json!({
        "device_specs": { "Camera": { "Modes": { "HDR": true } , "Tags": ["a", "b"] } }
    }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "X_1", "X", 0, &mut ctx);
    assert_eq!(dev.get("camera_modes"), Some(&text(r#"{"HDR":true}"#)));
    assert_eq!(dev.get("camera_tags"), Some(&text(r#"["a","b"]"#)));
}

#[test]
fn missing_specs_group_still_builds_identity() {
    let raw = fields(json!({ "name": "Bare" }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "X_1", "X", 0, &mut ctx);
    assert_eq!(dev.get("name"), Some(&text("Bare")));
    assert_eq!(dev.len(), 5);
}

#[test]
fn unusable_top_level_label_is_skipped() {
    let raw = fields(json!({
        "device_specs": { "": "orphan", "NaN": { "Type": "x" }, "OS": "Android" }
    }));
    let mut ctx = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "X_1", "X", 0, &mut ctx);
    assert_eq!(dev.get("os"), Some(&text("Android")));
    assert!(!dev.contains(""));
    assert!(!dev.contains("nan_type"));
}

#[test]
fn every_record_feature_is_in_schema() {
    let catalog = Catalog::from_json_str(
        r#"{
            "Acer": {
                "1": {"released": "2019", "device_specs": {"Battery": {"Type": "Li-Ion"}}},
                "2": {"device_specs": {"Display": {"Size": "6.1 inches", "": "notch"}}}
            },
            "Samsung Galaxy": {
                "d7": {"device_specs": {"Platform": {"OS": "Android 12", "CPU": "Octa-core"}}}
            }
        }"#,
    )
    .unwrap();
    let mut ctx = FeatureContext::new();
    let records = build_devices(&catalog, &mut ctx, None);

    for rec in &records {
        for name in rec.feature_names() {
            assert!(ctx.schema().contains(name), "{name} missing from schema");
        }
    }
    assert_eq!(records[2].device_id(), Some("SAMSUNGGALAXY_d7"));
    assert_eq!(records[2].get("maker_id"), Some(&FeatureValue::Int(1)));
}

#[test]
fn schema_only_grows() {
    let devices = [
        json!({"device_specs": {"Battery": {"Type": "Li-Ion"}}}),
        json!({"device_specs": {"Display": {"Size": "5 in"}}}),
        json!({"device_specs": {"Battery": {"Type": "Li-Po"}}}),
    ];
    let mut ctx = FeatureContext::new();
    let mut previous: Vec<String> = ctx.schema().names().to_vec();
    assert_eq!(previous, ["device_notes"]);

    for (i, raw) in devices.into_iter().enumerate() {
        DeviceRecord::build(&fields(raw), &format!("X_{i}"), "X", 0, &mut ctx);
        let now = ctx.schema().names();
        assert!(now.len() >= previous.len());
        assert_eq!(&now[..previous.len()], previous.as_slice());
        previous = now.to_vec();
    }
    assert_eq!(previous.len(), 6);
}

#[test]
fn fresh_context_forgets_previous_run() {
    let mut first = FeatureContext::new();
    first.registry.register(Parser::named("parse_battery_hl", parse_battery_hl)).unwrap();
    let raw = fields(json!({"device_specs": {"Battery": {"HL": "3000mAh"}}}));
    DeviceRecord::build(&raw, "X_1", "X", 0, &mut first);
    assert!(first.schema().contains("battery_capacity_mah"));

    let mut second = FeatureContext::new();
    let dev = DeviceRecord::build(&raw, "X_1", "X", 0, &mut second);
    assert_eq!(dev.get("battery_hl"), Some(&text("3000mAh")));
    assert!(!second.schema().contains("battery_capacity_mah"));
}
