//! WebAssembly bindings.
//!
//! `solve` takes an object shaped like [`OptimizeRequest`] and resolves to
//! `{ assignments, total_cost }`; failures throw a JS `Error` whose `name`
//! is the error kind.

use wasm_bindgen::prelude::*;

use crate::service::OptimizeRequest;
use crate::solver;

fn js_error(kind: &str, message: &str) -> JsValue {
    let err = js_sys::Error::new(message);
    err.set_name(kind);
    err.into()
}

/// Solves an assignment request passed as a JS object.
#[wasm_bindgen]
pub fn solve(request: JsValue) -> Result<JsValue, JsValue> {
    let req: OptimizeRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|err| js_error("invalid_request", &err.to_string()))?;
    let solution = solver::solve(&req.drivers, &req.routes, &req.cost_matrix)
        .map_err(|err| js_error(err.kind(), &err.to_string()))?;
    serde_wasm_bindgen::to_value(&solution).map_err(|err| js_error("internal", &err.to_string()))
}
