#![no_main]

use libfuzzer_sys::fuzz_target;
use offroad_settings::controls::Stepper;
use offroad_settings::panels::schema;
use offroad_settings::{MemoryParamStore, ParamStore};
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    // Whatever another process left in the store, a press stays in bounds
    let Ok(value) = std::str::from_utf8(data) else {
        return;
    };
    let store = Arc::new(MemoryParamStore::new());
    for spec in schema::all_steppers() {
        store.put(spec.key, value);
        let mut stepper = Stepper::new(*spec, store.clone());
        stepper.increment();
        let stored: i32 = store.get(spec.key).parse().unwrap();
        assert!((spec.min..=spec.max).contains(&stored));
    }
});
