//! Query-string decoding for `/math`.
//!
//! Pairs are decoded as `application/x-www-form-urlencoded`. A key that
//! appears more than once collects all of its values. Keys are then ordered
//! the way a JavaScript object enumerates them: canonical array-index keys
//! first in ascending numeric order, every other key in first-seen order.

use value::RawParam;

/// Key that selects the function.
pub const FUNC_KEY: &str = "func";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MathQuery {
    /// The function name. Repeated `func` keys are joined with `,`.
    pub func: Option<String>,
    /// Every other key, in enumeration order.
    pub params: Vec<(String, RawParam)>,
}

impl MathQuery {
    pub fn raw_params(&self) -> Vec<RawParam> {
        self.params.iter().map(|(_, v)| v.clone()).collect()
    }
}

pub fn parse_query(query: &str) -> MathQuery {
    let mut func: Vec<String> = Vec::new();
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();

    for (key, val) in form_urlencoded::parse(query.as_bytes()) {
        if key.is_empty() {
            continue;
        }
        if key == FUNC_KEY {
            func.push(val.into_owned());
            continue;
        }
        match grouped.iter_mut().find(|(k, _)| *k == key) {
            Some((_, vals)) => vals.push(val.into_owned()),
            None => grouped.push((key.into_owned(), vec![val.into_owned()])),
        }
    }

    // Stable, so non-index keys keep their first-seen order.
    grouped.sort_by_key(|(key, _)| array_index_key(key).map_or((1, 0), |idx| (0, idx)));

    let params = grouped
        .into_iter()
        .map(|(key, mut vals)| {
            let param = if vals.len() == 1 {
                RawParam::Single(vals.remove(0))
            } else {
                RawParam::Repeated(vals)
            };
            (key, param)
        })
        .collect();

    MathQuery {
        func: (!func.is_empty()).then(|| func.join(",")),
        params,
    }
}

/// `Some(n)` for canonical decimal keys below `2^32 - 1`.
fn array_index_key(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}
