//! JSON bodies and the transport-neutral [`Reply`].

use std::io::Cursor;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::error;
use value::{RawParam, Value};

const CONTENT_TYPE: &[u8] = b"application/json; charset=utf-8";

/// Query parameters echoed back in enumeration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(pub Vec<(String, RawParam)>);

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, val) in &self.0 {
            map.serialize_entry(key, val)?;
        }
        map.end()
    }
}

/// Successful `/math` body. An undefined result leaves the key out.
#[derive(Debug, Serialize)]
pub struct MathResponse {
    pub func: String,
    pub params: Params,
    #[serde(skip_serializing_if = "Value::is_undefined")]
    pub result: Value,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub ok: bool,
    pub time: String,
    pub region: &'static str,
}

/// Status plus serialized JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status, body },
            Err(e) => {
                error!(error = %e, "failed to serialize response body");
                Self::error(500, "Internal error")
            }
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        let body = ErrorBody {
            error: message.into(),
        };
        // A single string field always serializes.
        let body = serde_json::to_string(&body)
            .unwrap_or_else(|_| String::from(r#"{"error":"Internal error"}"#));
        Self { status, body }
    }

    pub fn not_found() -> Self {
        Self::error(404, "Not found")
    }

    pub fn into_response(self) -> tiny_http::Response<Cursor<Vec<u8>>> {
        let response = tiny_http::Response::from_string(self.body).with_status_code(self.status);
        match tiny_http::Header::from_bytes(&b"Content-Type"[..], CONTENT_TYPE) {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_keep_order_and_repeats() {
        let params = Params(vec![
            ("b".into(), RawParam::from("1")),
            ("a".into(), RawParam::Repeated(vec!["2".into(), "3".into()])),
        ]);
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"b":"1","a":["2","3"]}"#
        );
    }

    #[test]
    fn undefined_result_is_omitted() {
        let body = MathResponse {
            func: "bell".into(),
            params: Params(vec![("n".into(), RawParam::from("2.5"))]),
            result: Value::Undefined,
        };
        let reply = Reply::json(200, &body);
        assert_eq!(reply.body, r#"{"func":"bell","params":{"n":"2.5"}}"#);
    }

    #[test]
    fn null_result_is_kept() {
        let body = MathResponse {
            func: "modinv".into(),
            params: Params::default(),
            result: Value::Null,
        };
        assert_eq!(
            Reply::json(200, &body).body,
            r#"{"func":"modinv","params":{},"result":null}"#
        );
    }

    #[test]
    fn error_body() {
        let reply = Reply::error(400, "Invalid function");
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body, r#"{"error":"Invalid function"}"#);
    }

    #[test]
    fn into_response_carries_status() {
        let response = Reply::not_found().into_response();
        assert_eq!(response.status_code().0, 404);
    }
}
