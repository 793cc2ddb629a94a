//! Query parameter values and query-string encoding.
//!
//! eBay takes multi-valued parameters as one comma-joined value
//! (`orderIds=1,2,3`), so a [`QueryValue::List`] always renders that way.
//! Absent values never make it into a request: optional parameters are
//! skipped when they are added and `null` fields are skipped when a params
//! struct is serialized.

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// A single query parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    /// One value.
    Scalar(String),
    /// Several values, sent comma-joined under one key.
    List(Vec<String>),
}

impl QueryValue {
    /// Renders the value as it appears in the query string (before encoding).
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::List(values) => values.join(","),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<&[&str]> for QueryValue {
    fn from(values: &[&str]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for QueryValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// Flattens a serializable params struct into query pairs.
///
/// `null` fields are skipped, arrays become [`QueryValue::List`] (an empty
/// array is skipped too) and nested objects are sent as JSON text. Keys come
/// out sorted, whatever map order `serde_json` was built with.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidParams`] if the value does not
/// serialize to a JSON object.
pub fn serialize_to_query<T: Serialize + ?Sized>(
    params: &T,
) -> Result<Vec<(String, QueryValue)>, InvalidHttpRequestError> {
    let value = serde_json::to_value(params).map_err(|e| InvalidHttpRequestError::InvalidParams {
        message: e.to_string(),
    })?;

    let Value::Object(map) = value else {
        return Err(InvalidHttpRequestError::InvalidParams {
            message: "params must serialize to an object".to_string(),
        });
    };

    let mut query = Vec::with_capacity(map.len());
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::String(s) => query.push((key, QueryValue::Scalar(s))),
            Value::Number(n) => query.push((key, QueryValue::Scalar(n.to_string()))),
            Value::Bool(b) => query.push((key, QueryValue::Scalar(b.to_string()))),
            Value::Array(arr) => {
                let values: Vec<String> = arr
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    query.push((key, QueryValue::List(values)));
                }
            }
            Value::Object(_) => query.push((key, QueryValue::Scalar(val.to_string()))),
        }
    }

    query.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(query)
}

/// Encodes query pairs as `k=v&k=v`, percent-encoding keys and values.
///
/// The comma joining list values is kept literal, matching what eBay
/// documents for multi-valued parameters.
#[must_use]
pub fn encode_query(query: &[(String, QueryValue)]) -> String {
    query
        .iter()
        .map(|(key, value)| {
            let encoded = match value {
                QueryValue::Scalar(v) => urlencoding::encode(v).into_owned(),
                QueryValue::List(values) => values
                    .iter()
                    .map(|v| urlencoding::encode(v).into_owned())
                    .collect::<Vec<_>>()
                    .join(","),
            };
            format!("{}={encoded}", urlencoding::encode(key))
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct OrderParams {
        filter: Option<String>,
        limit: Option<u32>,
        #[serde(rename = "orderIds")]
        order_ids: Vec<String>,
    }

    #[test]
    fn test_serialize_skips_nulls_and_joins_arrays() {
        let params = OrderParams {
            filter: None,
            limit: Some(50),
            order_ids: vec!["1".to_string(), "2".to_string()],
        };

        let query = serialize_to_query(&params).unwrap();

        assert_eq!(
            query,
            vec![
                ("limit".to_string(), QueryValue::Scalar("50".to_string())),
                (
                    "orderIds".to_string(),
                    QueryValue::List(vec!["1".to_string(), "2".to_string()])
                ),
            ]
        );
    }

    #[test]
    fn test_serialize_skips_empty_arrays() {
        let params = OrderParams {
            filter: Some("orderfulfillmentstatus:{NOT_STARTED}".to_string()),
            limit: None,
            order_ids: vec![],
        };

        let query = serialize_to_query(&params).unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query[0].0, "filter");
    }

    #[test]
    fn test_serialize_rejects_non_objects() {
        let result = serialize_to_query(&json!(["a", "b"]));
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_encode_query_keeps_order_and_commas() {
        let query = vec![
            ("category_id".to_string(), QueryValue::from("9355")),
            ("orderIds".to_string(), QueryValue::from(["a b", "c"])),
            ("filter".to_string(), QueryValue::from("status:{OPEN}")),
        ];

        assert_eq!(
            encode_query(&query),
            "category_id=9355&orderIds=a%20b,c&filter=status%3A%7BOPEN%7D"
        );
    }

    #[test]
    fn test_query_value_render() {
        assert_eq!(QueryValue::from(25_u32).render(), "25");
        assert_eq!(QueryValue::from(vec!["x".to_string(), "y".to_string()]).render(), "x,y");
    }
}
