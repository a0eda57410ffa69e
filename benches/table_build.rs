// benches/table_build.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Map, Value};

use spec_table::{create_table, features, Catalog, FeatureContext, Parser};

/// Synthetic catalog: makers × devices with overlapping, partly disjoint specs.
fn synthetic_catalog(makers: usize, devices: usize) -> Catalog {
    let mut root = Map::new();
    for m in 0..makers {
        let mut devs = Map::new();
        for d in 0..devices {
            let specs = json!({
                "Network": { "Technology": "GSM / HSPA / LTE", "2G bands": "GSM 850 / 900" },
                "Battery": { "HL": format!("{}mAh, fast charging", 3000 + d), "": "Non-removable" },
                "Display": { "Size": format!("{}.{} inches", 5 + d % 3, d % 10), "Type": "IPS LCD" },
                (format!("Extra {}", d % 7)): { "Value": d, "nan": "" },
            });
            devs.insert(format!("{d}"), json!({ "url": format!("m{m}/d{d}"), "device_specs": specs }));
        }
        root.insert(format!("Maker-{m} Mobile"), Value::Object(devs));
    }
    Catalog::from_value(Value::Object(root)).expect("synthetic catalog is well-formed")
}

fn battery_parser() -> Parser {
    Parser::named("parse_battery_hl", |raw: &Value| {
        let s = raw.as_str().unwrap_or_default();
        let mah: i64 = s.chars().take_while(|c| c.is_ascii_digit()).collect::<String>().parse().unwrap_or(0);
        features! { "battery_capacity_mah" => mah, "battery_fast_charge" => s.contains("fast") }
    })
}

fn bench_table_build(c: &mut Criterion) {
    let catalog = synthetic_catalog(20, 100);

    c.bench_function("create_table_plain", |b| {
        b.iter(|| {
            let mut ctx = FeatureContext::new();
            let table = create_table(black_box(&catalog), &mut ctx, None).unwrap();
            black_box(table.n_cols())
        })
    });

    c.bench_function("create_table_with_parser", |b| {
        b.iter(|| {
            let mut ctx = FeatureContext::new();
            ctx.registry.register(battery_parser()).unwrap();
            let table = create_table(black_box(&catalog), &mut ctx, None).unwrap();
            black_box(table.n_cols())
        })
    });
}

criterion_group!(benches, bench_table_build);
criterion_main!(benches);
