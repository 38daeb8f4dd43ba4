use catalog::Dispatcher;
use chrono::{DateTime, FixedOffset, Utc};
use tiny_http::Method;
use tracing::debug;

use crate::query::{parse_query, MathQuery};
use crate::response::{HealthBody, MathResponse, Params, Reply};

/// Offset used for the health clock (Asia/Ho_Chi_Minh, no DST).
const HEALTH_UTC_OFFSET_SECS: i32 = 7 * 3600;
const HEALTH_REGION: &str = "VN";
// Day and month are not zero-padded, matching the vi-VN locale.
const HEALTH_TIME_FORMAT: &str = "%H:%M:%S %-d/%-m/%Y";

/// Map a request line to a reply.
///
/// Paths match case-insensitively and ignore one trailing slash. Only GET
/// (and HEAD) are routed; everything else is a 404.
pub fn route(method: &Method, url: &str, dispatcher: &Dispatcher, now: DateTime<Utc>) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let path = normalize_path(path);

    if !matches!(method, Method::Get | Method::Head) {
        return Reply::not_found();
    }

    match path.as_str() {
        "/health" => health(now),
        "/math" => math_reply(dispatcher, parse_query(query)),
        _ => Reply::not_found(),
    }
}

/// Run one dispatch and shape the reply: 200 with the echoed request, 400
/// for an unknown function, 500 for a fault.
pub fn math_reply(dispatcher: &Dispatcher, query: MathQuery) -> Reply {
    let func = query.func.clone().unwrap_or_default();
    match dispatcher.invoke(&func, &query.raw_params()) {
        Ok(result) => Reply::json(
            200,
            &MathResponse {
                func,
                params: Params(query.params),
                result,
            },
        ),
        Err(e) => {
            debug!(func = %func, error = %e, "math request rejected");
            Reply::error(e.status(), e.to_string())
        }
    }
}

pub fn health(now: DateTime<Utc>) -> Reply {
    let time = match FixedOffset::east_opt(HEALTH_UTC_OFFSET_SECS) {
        Some(offset) => now.with_timezone(&offset).format(HEALTH_TIME_FORMAT),
        None => now.format(HEALTH_TIME_FORMAT),
    };
    Reply::json(
        200,
        &HealthBody {
            ok: true,
            time: time.to_string(),
            region: HEALTH_REGION,
        },
    )
}

fn normalize_path(path: &str) -> String {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    trimmed.to_ascii_lowercase()
}
