use crate::interop::{new_obj, set_kv};
use spanforest::GraphError;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

#[inline]
pub fn invalid_weight(got: f64) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_f64(got));
    err("invalid_weight", "edge weight must be a positive integer", Some(d.into()))
}

#[inline]
pub fn serialize(e: serde_wasm_bindgen::Error) -> JsValue {
    err("serialize", e.to_string(), None)
}

/// Result object for a core error; `data` carries the ids involved.
pub fn from_graph_error(e: &GraphError) -> JsValue {
    let d = new_obj();
    match e {
        GraphError::InsufficientNodes { found } => {
            set_kv(&d, "found", &JsValue::from_f64(*found as f64));
        }
        GraphError::DuplicateEdge { a, b, existing } => {
            set_kv(&d, "a", &JsValue::from_f64(a.raw() as f64));
            set_kv(&d, "b", &JsValue::from_f64(b.raw() as f64));
            set_kv(&d, "existing", &JsValue::from_f64(existing.raw() as f64));
        }
        GraphError::SelfLoop { node } => {
            set_kv(&d, "node", &JsValue::from_f64(node.raw() as f64));
        }
        GraphError::InvalidWeight { got } => {
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
        }
        GraphError::UnknownNodeId { id } => {
            set_kv(&d, "kind", &JsValue::from_str("node"));
            set_kv(&d, "id", &JsValue::from_f64(id.raw() as f64));
        }
        GraphError::NonFinite { param } => {
            set_kv(&d, "param", &JsValue::from_str(param));
        }
        GraphError::CapacityExceeded { kind, max } => {
            set_kv(&d, "kind", &JsValue::from_str(kind));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
        }
    }
    err(e.code(), e.to_string(), Some(d.into()))
}
