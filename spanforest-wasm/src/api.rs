use crate::Graph;
use spanforest::{EdgeId, NodeId, Preset, Step};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop::{arr_f32, arr_str, arr_u32, new_obj, set_kv, to_js};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Weights arrive as JS numbers; only exact positive integers are accepted
fn weight_from_js(w: f64) -> Option<i64> {
    if !w.is_finite() || w.fract() != 0.0 || w < 1.0 || w > u32::MAX as f64 {
        return None;
    }
    Some(w as i64)
}

fn step_to_js(step: &Step) -> Result<JsValue, serde_wasm_bindgen::Error> {
    let v = to_js(step)?;
    if let Ok(obj) = v.clone().dyn_into::<js_sys::Object>() {
        set_kv(&obj, "text", &JsValue::from_str(&step.to_string()));
        if let Some(listing) = step.listing() {
            set_kv(&obj, "listing", &JsValue::from_str(&listing));
        }
    }
    Ok(v)
}

#[wasm_bindgen]
impl Graph {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Graph {
        crate::Graph::rs_new()
    }
    pub fn graph_version(&self) -> u64 {
        self.rs_version()
    }

    // Nodes
    pub fn add_node(&mut self, x: f32, y: f32) -> Option<u32> {
        self.inner.add_node(x, y).ok().map(NodeId::raw)
    }
    pub fn add_node_res(&mut self, x: f32, y: f32) -> JsValue {
        match self.inner.add_node(x, y) {
            Ok(id) => error::ok(JsValue::from_f64(id.raw() as f64)),
            Err(e) => error::from_graph_error(&e),
        }
    }
    pub fn move_node(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.inner.move_node(NodeId::from_raw(id), x, y)
    }
    pub fn move_node_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if !self.inner.contains_node(NodeId::from_raw(id)) {
            return error::invalid_id("node", id);
        }
        error::ok(JsValue::from_bool(self.move_node(id, x, y)))
    }
    /// `{ id, label, x, y }` or null.
    pub fn get_node(&self, id: u32) -> JsValue {
        match self.inner.node(NodeId::from_raw(id)) {
            Some(n) => to_js(n).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }
    pub fn remove_node(&mut self, id: u32) -> bool {
        self.inner.remove_node(NodeId::from_raw(id)).is_some()
    }
    /// Value is `{ node, edges }`: the removed node and its incident edge ids.
    pub fn remove_node_res(&mut self, id: u32) -> JsValue {
        match self.inner.remove_node(NodeId::from_raw(id)) {
            Some(removed) => match to_js(&removed) {
                Ok(v) => error::ok(v),
                Err(e) => error::serialize(e),
            },
            None => error::invalid_id("node", id),
        }
    }
    pub fn node_count(&self) -> u32 {
        self.inner.node_count() as u32
    }
    /// Node under the pointer, within the configured pick radius.
    pub fn node_at(&self, x: f32, y: f32) -> Option<u32> {
        self.inner.node_at(x, y).map(NodeId::raw)
    }
    pub fn set_pick_radius_res(&mut self, radius: f32) -> JsValue {
        if !radius.is_finite() {
            return error::non_finite("radius");
        }
        error::ok(JsValue::from_bool(self.inner.set_pick_radius(radius)))
    }

    // Edges
    pub fn add_edge_res(&mut self, source: u32, target: u32, weight: f64) -> JsValue {
        let w = match weight_from_js(weight) {
            Some(w) => w,
            // integral out-of-range values go through the core so the
            // usual check order (ids, self loop, duplicate) still applies
            None if weight.is_finite() && weight.fract() == 0.0 => weight as i64,
            None => return error::invalid_weight(weight),
        };
        match self
            .inner
            .add_edge(NodeId::from_raw(source), NodeId::from_raw(target), w)
        {
            Ok(eid) => error::ok(JsValue::from_f64(eid.raw() as f64)),
            Err(e) => error::from_graph_error(&e),
        }
    }
    pub fn remove_edge(&mut self, id: u32) -> bool {
        self.inner.remove_edge(EdgeId::from_raw(id))
    }
    pub fn remove_edge_res(&mut self, id: u32) -> JsValue {
        if self.inner.edge(EdgeId::from_raw(id)).is_none() {
            return error::invalid_id("edge", id);
        }
        error::ok(JsValue::from_bool(self.remove_edge(id)))
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.edge_count() as u32
    }

    // Typed arrays getters
    pub fn get_node_data(&self) -> JsValue {
        let na = self.inner.get_node_arrays();
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&na.ids).into());
        set_kv(&obj, "positions", &arr_f32(&na.positions).into());
        set_kv(&obj, "labels", &arr_str(&na.labels).into());
        obj.into()
    }
    pub fn get_edge_data(&self) -> JsValue {
        let ea = self.inner.get_edge_arrays();
        let obj = new_obj();
        set_kv(&obj, "ids", &arr_u32(&ea.ids).into());
        set_kv(&obj, "endpoints", &arr_u32(&ea.endpoints).into());
        set_kv(&obj, "weights", &arr_u32(&ea.weights).into());
        obj.into()
    }

    // Clear + presets
    pub fn clear(&mut self) {
        self.inner.clear();
    }
    pub fn reset(&mut self) -> JsValue {
        match self.inner.reset() {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_graph_error(&e),
        }
    }
    pub fn load_preset_res(&mut self, name: &str) -> JsValue {
        let preset: Preset = match name.parse() {
            Ok(p) => p,
            Err(e) => {
                let d = new_obj();
                set_kv(&d, "got", &JsValue::from_str(name));
                return error::err("unknown_preset", e.to_string(), Some(d.into()));
            }
        };
        match self.inner.load_preset(preset) {
            Ok(()) => error::ok(JsValue::from_str(preset.name())),
            Err(e) => error::from_graph_error(&e),
        }
    }

    // Algorithm runs
    /// Value is `{ edges, total_weight, fully_connected, node_count, graph_version }`.
    pub fn compute_mst_res(&mut self) -> JsValue {
        match self.inner.run_mst() {
            Ok(mst) => match to_js(mst) {
                Ok(v) => error::ok(v),
                Err(e) => error::serialize(e),
            },
            Err(e) => error::from_graph_error(&e),
        }
    }
    /// Ids of the cached MST edges, empty before the first run.
    pub fn mst_edge_ids(&self) -> JsValue {
        let ids: Vec<u32> = self
            .inner
            .mst()
            .map(|m| m.edges.iter().map(|e| e.id.raw()).collect())
            .unwrap_or_default();
        arr_u32(&ids).into()
    }
    pub fn mst_is_current(&self) -> bool {
        self.inner.mst_is_current()
    }
    /// Value is an array of step records, each with a `text` narration.
    pub fn generate_trace_res(&mut self) -> JsValue {
        let trace = match self.inner.run_trace() {
            Ok(t) => t,
            Err(e) => return error::from_graph_error(&e),
        };
        let arr = js_sys::Array::new();
        for step in trace {
            match step_to_js(step) {
                Ok(v) => {
                    arr.push(&v);
                }
                Err(e) => return error::serialize(e),
            }
        }
        error::ok(arr.into())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
