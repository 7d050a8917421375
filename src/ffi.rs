//! C ABI taking and returning JSON.
//!
//! ```c
//! char *out = u_assign_solve_json("{\"drivers\":[\"D1\"],\"routes\":[\"R1\"],\"cost_matrix\":[[7]]}");
//! // {"ok":{"assignments":[{"driver":"D1","route":"R1","cost":7.0}],"total_cost":7.0}}
//! u_assign_free_string(out);
//! ```
//!
//! Errors are returned in-band as `{"error":{"kind":...,"message":...}}`.

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;
use serde::Serialize;

use crate::service::OptimizeRequest;
use crate::solver::solve;

#[derive(Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Reply<T> {
    Ok(T),
    Error(ErrorBody),
}

const SERIALIZATION_FAILED: &str =
    r#"{"error":{"kind":"internal","message":"reply serialization failed"}}"#;

fn encode<T: Serialize>(reply: &Reply<T>) -> String {
    serde_json::to_string(reply).unwrap_or_else(|_| SERIALIZATION_FAILED.to_string())
}

fn invalid_request(message: impl Into<String>) -> String {
    encode(&Reply::<()>::Error(ErrorBody {
        kind: "invalid_request",
        message: message.into(),
    }))
}

fn handle(body: &str) -> String {
    let req = match serde_json::from_str::<OptimizeRequest>(body) {
        Ok(req) => req,
        Err(err) => return invalid_request(err.to_string()),
    };
    match solve(&req.drivers, &req.routes, &req.cost_matrix) {
        Ok(solution) => encode(&Reply::Ok(solution)),
        Err(err) => encode(&Reply::<()>::Error(ErrorBody {
            kind: err.kind(),
            message: err.to_string(),
        })),
    }
}

/// Solves the JSON-encoded request pointed to by `request`.
///
/// Returns a newly allocated, NUL-terminated JSON string that must be
/// released with [`u_assign_free_string`], or null if the reply could not
/// be allocated.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn u_assign_solve_json(request: *const c_char) -> *mut c_char {
    let reply = if request.is_null() {
        invalid_request("null request pointer")
    } else {
        // SAFETY: non-null and NUL-terminated per the caller contract.
        match unsafe { CStr::from_ptr(request) }.to_str() {
            Ok(body) => handle(body),
            Err(err) => invalid_request(err.to_string()),
        }
    };
    CString::new(reply).map_or(ptr::null_mut(), CString::into_raw)
}

/// Releases a string returned by [`u_assign_solve_json`].
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by [`u_assign_solve_json`] that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn u_assign_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        // SAFETY: allocated by CString::into_raw in u_assign_solve_json.
        drop(unsafe { CString::from_raw(ptr) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(body: &str) -> serde_json::Value {
        let input = CString::new(body).expect("no interior NUL");
        unsafe {
            let out = u_assign_solve_json(input.as_ptr());
            assert!(!out.is_null());
            let text = CStr::from_ptr(out).to_str().expect("utf-8").to_owned();
            u_assign_free_string(out);
            serde_json::from_str(&text).expect("json reply")
        }
    }

    #[test]
    fn test_solve_json() {
        let reply = call(r#"{"drivers":["D1"],"routes":["R1"],"cost_matrix":[[7]]}"#);
        assert_eq!(
            reply,
            serde_json::json!({"ok": {
                "assignments": [{"driver": "D1", "route": "R1", "cost": 7.0}],
                "total_cost": 7.0
            }})
        );
    }

    #[test]
    fn test_solver_error_kind() {
        let body = r#"{"drivers":["A","B"],"routes":["X","Y"],"cost_matrix":[[1,2],[3]]}"#;
        let reply = call(body);
        assert_eq!(reply["error"]["kind"], "malformed_cost_matrix");
    }

    #[test]
    fn test_bad_json() {
        let reply = call("not json");
        assert_eq!(reply["error"]["kind"], "invalid_request");
    }

    #[test]
    fn test_null_pointer() {
        unsafe {
            let out = u_assign_solve_json(ptr::null());
            let text = CStr::from_ptr(out).to_str().expect("utf-8").to_owned();
            u_assign_free_string(out);
            assert!(text.contains("invalid_request"));
            u_assign_free_string(ptr::null_mut());
        }
    }
}
