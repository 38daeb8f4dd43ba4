use anyhow::{Context, Result};
use catalog::Dispatcher;
use value::RawParam;

use crate::config::{Overrides, ServerConfig};
use crate::query::MathQuery;
use crate::response::Reply;
use crate::router::math_reply;

/// Run one function in-process and print the `/math` body.
///
/// Returns `false` when the reply is an error.
pub fn call_command(name: &str, params: &[String], overrides: &Overrides) -> Result<bool> {
    let config = ServerConfig::load(overrides).context("failed to load configuration")?;
    let dispatcher =
        Dispatcher::with_catalog(config.limits).context("failed to build the function registry")?;
    let reply = call(&dispatcher, name, params);
    println!("{}", reply.body);
    Ok(reply.status == 200)
}

/// Positional parameters are keyed `0`, `1`, ... in the echoed `params`.
pub fn call(dispatcher: &Dispatcher, name: &str, params: &[String]) -> Reply {
    let query = MathQuery {
        func: Some(name.to_string()),
        params: params
            .iter()
            .enumerate()
            .map(|(i, p)| (i.to_string(), RawParam::from(p.as_str())))
            .collect(),
    };
    math_reply(dispatcher, query)
}
