//! Lists the leaf paths of a small value and reads them back.
//!
//! The library emits `log` records; set `RUST_LOG=debug` to see them.

use metaflect::inspect::serialize::SerializeDriver;
use metaflect::inspect::{Inspect, InspectConfig, each_field, get, terminal_fields};

#[derive(Inspect)]
struct Bar {
    pub id: String,
    #[allow(dead_code, reason = "private fields are invisible to inspection")]
    private: String,
}

#[derive(Inspect)]
struct Foo {
    pub bar: Bar,
    pub name: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let foo = Foo {
        bar: Bar {
            id: "2017".into(),
            private: "this isn't visible".into(),
        },
        name: "meta".into(),
    };
    let config = InspectConfig::default();

    let paths = terminal_fields(&foo, &config);
    println!("terminal fields: {paths:?}");
    println!("bar.id resolved to: {:?}", get(&foo, "bar.id", &config));

    each_field(&foo, &config, |child, name, kind| {
        let fetched = get(&foo, name, &config);
        let same = match (child, fetched.as_value()) {
            (Some(child), Some(fetched)) => core::ptr::addr_eq(child, fetched),
            _ => false,
        };
        println!("{name} ({kind}) == get({name:?}) ? {same}");
    });

    for path in &paths {
        let got = get(&foo, path, &config);
        match serde_json::to_string(&got) {
            Ok(json) => println!("{path} = {json}"),
            Err(err) => eprintln!("{path}: {err}"),
        }
    }

    match serde_json::to_string_pretty(&SerializeDriver::new(&foo)) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{err}"),
    }
}
