use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logging;

pub use logging::init_logging;

#[wasm_bindgen]
pub struct Graph { pub(crate) inner: spanforest::Graph }

impl Graph {
    pub fn rs_new() -> Graph { Graph { inner: spanforest::Graph::new() } }
    pub fn rs_version(&self) -> u64 { self.inner.version() }
}
