#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use spanforest_wasm::Graph;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn error_data(v: &JsValue, key: &str) -> JsValue {
    let err = Reflect::get(v, &JsValue::from_str("error")).unwrap();
    let data = Reflect::get(&err, &JsValue::from_str("data")).unwrap();
    Reflect::get(&data, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn invalid_ids_return_typed_errors() {
    let mut g = Graph::new();
    let ver = g.graph_version();
    let r = g.move_node_res(12345, 0.0, 0.0);
    assert!(is_err(&r, "invalid_id"));
    assert_eq!(g.graph_version(), ver, "state mutated on error");

    let r = g.remove_edge_res(9999);
    assert!(is_err(&r, "invalid_id"));
    let r = g.remove_node_res(7);
    assert!(is_err(&r, "invalid_id"));
    assert_eq!(g.graph_version(), ver);

    let a = g.add_node(0.0, 0.0).unwrap();
    let r = g.add_edge_res(a, 77, 3.0);
    assert!(is_err(&r, "invalid_id"));
    assert_eq!(error_data(&r, "id").as_f64(), Some(77.0));
}

#[wasm_bindgen_test]
fn edge_rules_are_enforced() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0).unwrap();
    let b = g.add_node(10.0, 0.0).unwrap();
    let c = g.add_node(20.0, 0.0).unwrap();

    assert!(is_err(&g.add_edge_res(a, a, 1.0), "self_loop"));
    for bad in [0.0, -4.0, 2.5, f64::NAN, f64::INFINITY] {
        let r = g.add_edge_res(a, b, bad);
        assert!(is_err(&r, "invalid_weight"), "weight {bad} accepted");
    }
    assert!(is_err(&g.add_edge_res(a, b, 4294967296.0), "invalid_weight"));
    assert_eq!(g.edge_count(), 0);

    let r = g.add_edge_res(a, b, 4.0);
    let e = Reflect::get(&r, &JsValue::from_str("value")).unwrap().as_f64();
    let dup = g.add_edge_res(b, a, 9.0);
    assert!(is_err(&dup, "duplicate_edge"));
    assert_eq!(error_data(&dup, "existing").as_f64(), e);

    let ver = g.graph_version();
    assert!(is_err(&g.add_edge_res(c, c, -1.0), "self_loop"));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.graph_version(), ver, "state mutated on error");
}

#[wasm_bindgen_test]
fn algorithms_need_two_nodes() {
    let mut g = Graph::new();
    let r = g.compute_mst_res();
    assert!(is_err(&r, "insufficient_nodes"));
    assert_eq!(error_data(&r, "found").as_f64(), Some(0.0));
    g.add_node(0.0, 0.0).unwrap();
    assert!(is_err(&g.generate_trace_res(), "insufficient_nodes"));
}

#[wasm_bindgen_test]
fn non_finite_inputs_are_rejected() {
    let mut g = Graph::new();
    assert!(is_err(&g.add_node_res(f32::NAN, 0.0), "non_finite"));
    assert!(g.add_node(0.0, f32::INFINITY).is_none());
    let a = g.add_node(0.0, 0.0).unwrap();
    assert!(is_err(&g.move_node_res(a, f32::NAN, 1.0), "non_finite"));
    assert!(is_err(&g.set_pick_radius_res(f32::INFINITY), "non_finite"));
    assert_eq!(g.node_count(), 1);
}

#[wasm_bindgen_test]
fn unknown_preset_name() {
    let mut g = Graph::new();
    let r = g.load_preset_res("enormous");
    assert!(is_err(&r, "unknown_preset"));
    assert_eq!(g.node_count(), 0);
}

#[wasm_bindgen_test]
fn stale_handles_after_preset_load() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0).unwrap();
    let b = g.add_node(10.0, 0.0).unwrap();
    g.load_preset_res("simple");
    let r = g.add_edge_res(a, b, 7.0);
    assert!(is_err(&r, "invalid_id"));
    assert!(is_err(&g.move_node_res(a, 1.0, 1.0), "invalid_id"));
    assert!(g.get_node(a).is_null());
    assert_eq!(g.edge_count(), 5);
}
