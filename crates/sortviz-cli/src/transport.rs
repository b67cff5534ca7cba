//! Line-delimited JSON request handling for `sortviz serve`.
//!
//! One request object per line in, one response object per line out.
//! Statuses follow HTTP: 200 sorted, 400 bad request, 404 unknown algorithm.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sortviz_core::input::from_json;
use sortviz_core::{Algorithm, Engine, SortError, Step, TraceStats};

pub const PONG: &str = "sortviz is working!";

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub array: Option<Value>,
    #[serde(default)]
    pub ping: bool,
}

#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub status: u16,
    #[serde(flatten)]
    pub body: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Sorted {
        algorithm: Algorithm,
        steps: Vec<Step>,
        stats: TraceStats,
    },
    Pong {
        message: &'static str,
    },
    Error {
        error: ErrorBody,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl Response {
    fn bad_request(id: Option<Value>, message: impl Into<String>) -> Self {
        Self {
            id,
            status: 400,
            body: ResponseBody::Error {
                error: ErrorBody {
                    code: "bad_request",
                    message: message.into(),
                },
            },
        }
    }

    fn rejected(id: Option<Value>, err: &SortError) -> Self {
        Self {
            id,
            status: err.status(),
            body: ResponseBody::Error {
                error: ErrorBody {
                    code: err.code(),
                    message: err.to_string(),
                },
            },
        }
    }
}

/// The `id` is lifted out before the typed decode, so a request with a
/// mistyped field still gets its `id` echoed back.
pub fn handle_line(engine: &Engine, line: &str) -> Response {
    let raw: Value = match serde_json::from_str(line) {
        Ok(raw) => raw,
        Err(e) => return Response::bad_request(None, format!("malformed request: {e}")),
    };
    let id = raw.get("id").cloned();
    match serde_json::from_value::<SortRequest>(raw) {
        Ok(request) => handle_request(engine, request),
        Err(e) => Response::bad_request(id, format!("malformed request: {e}")),
    }
}

/// Selector is resolved before the array is looked at, so an unknown
/// algorithm is a 404 whatever the body holds.
pub fn handle_request(engine: &Engine, request: SortRequest) -> Response {
    let SortRequest {
        id,
        algorithm,
        array,
        ping,
    } = request;

    if ping {
        return Response {
            id,
            status: 200,
            body: ResponseBody::Pong { message: PONG },
        };
    }

    let Some(selector) = algorithm else {
        return Response::bad_request(id, "missing 'algorithm'");
    };
    let algorithm = match selector.parse::<Algorithm>() {
        Ok(a) => a,
        Err(e) => {
            tracing::debug!(selector = %selector, "unknown algorithm");
            return Response::rejected(id, &e);
        }
    };
    let Some(array) = array else {
        return Response::bad_request(id, "missing 'array'");
    };
    let input = match from_json(&array) {
        Ok(values) => values,
        Err(e) => return Response::rejected(id, &e),
    };

    match engine.run(algorithm, &input) {
        Ok(trace) => {
            tracing::debug!(%algorithm, len = input.len(), steps = trace.len(), "sorted");
            let stats = trace.stats();
            Response {
                id,
                status: 200,
                body: ResponseBody::Sorted {
                    algorithm,
                    steps: trace.into_steps(),
                    stats,
                },
            }
        }
        Err(e) => Response::rejected(id, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sortviz_core::EngineConfig;

    fn respond(engine: &Engine, line: &str) -> Value {
        serde_json::to_value(handle_line(engine, line)).unwrap()
    }

    #[test]
    fn sorts_and_forwards_the_trace_verbatim() {
        let engine = Engine::default();
        let res = respond(&engine, r#"{"id": 1, "algorithm": "mergeSort", "array": [2, 1]}"#);

        assert_eq!(res["id"], 1);
        assert_eq!(res["status"], 200);
        assert_eq!(res["algorithm"], "merge");
        assert_eq!(
            res["steps"],
            serde_json::to_value(sortviz_core::run("merge", &[2, 1]).unwrap().steps()).unwrap()
        );
        assert_eq!(res["stats"]["comparisons"], 1);
    }

    #[test]
    fn unknown_algorithm_is_not_found() {
        let res = respond(
            &Engine::default(),
            r#"{"algorithm": "heap", "array": "not even an array"}"#,
        );

        assert_eq!(res["status"], 404);
        assert_eq!(res["error"]["code"], "not_found");
        assert!(res.get("id").is_none());
    }

    #[test]
    fn malformed_input_is_bad_request() {
        let engine = Engine::default();

        let res = respond(&engine, r#"{"id": "a", "algorithm": "quick", "array": [1, "x"]}"#);
        assert_eq!(res["status"], 400);
        assert_eq!(res["error"]["code"], "bad_request");
        assert_eq!(res["id"], "a");

        let res = respond(&engine, r#"{"algorithm": "radix", "array": [-1, 2, 3]}"#);
        assert_eq!(res["status"], 400);
        assert!(res["error"]["message"]
            .as_str()
            .unwrap()
            .contains("non-negative"));

        let res = respond(&engine, "not json");
        assert_eq!(res["status"], 400);

        let res = respond(&engine, r#"{"array": [1]}"#);
        assert_eq!(res["error"]["message"], "missing 'algorithm'");

        let res = respond(&engine, r#"{"algorithm": "bubble"}"#);
        assert_eq!(res["error"]["message"], "missing 'array'");
    }

    #[test]
    fn mistyped_field_still_echoes_the_id() {
        let engine = Engine::default();

        let res = respond(&engine, r#"{"id": 3, "algorithm": 5, "array": [1]}"#);
        assert_eq!(res["id"], 3);
        assert_eq!(res["status"], 400);
        assert_eq!(res["error"]["code"], "bad_request");
        assert!(res["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("malformed request"));

        let res = respond(&engine, r#"[1, 2]"#);
        assert_eq!(res["status"], 400);
        assert!(res.get("id").is_none());
    }

    #[test]
    fn oversized_input_is_rejected_with_its_own_code() {
        let engine = Engine::new(EngineConfig {
            max_input_len: 2,
            ..EngineConfig::default()
        });
        let res = respond(&engine, r#"{"algorithm": "bubble", "array": [3, 2, 1]}"#);

        assert_eq!(res["status"], 400);
        assert_eq!(res["error"]["code"], "input_too_large");
    }

    #[test]
    fn ping_answers_like_the_health_endpoint() {
        let res = respond(&Engine::default(), r#"{"ping": true, "id": 9}"#);
        assert_eq!(res, json!({ "id": 9, "status": 200, "message": PONG }));
    }
}
