//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): redis-cli style, e.g. `"value"`, `(integer) 42`, `(nil)`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): Bare values, no quotes, no type prefixes

use rejson_executor::{Error, JsonValue, Output, Reply, Result};
use serde_json::{json, Value};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => pretty(&output_to_json(output)),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => pretty(&json!({ "error": err.to_string() })),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

/// Format the per-command results of a composite query.
pub fn format_query_results(results: &[Result<Output>], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => pretty(&Value::Array(
            results
                .iter()
                .map(|r| match r {
                    Ok(output) => json!({ "ok": output_to_json(output) }),
                    Err(e) => json!({ "error": e.to_string() }),
                })
                .collect(),
        )),
        OutputMode::Raw => results
            .iter()
            .map(|r| match r {
                Ok(output) => format_raw(output),
                Err(e) => e.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Human => {
            if results.is_empty() {
                return "(empty array)".to_string();
            }
            numbered(results.iter().map(|r| match r {
                Ok(output) => format_human(output),
                Err(e) => format!("(error) {}", e),
            }))
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn output_to_json(output: &Output) -> Value {
    match output {
        Output::Nil => Value::Null,
        Output::Bool(b) => Value::Bool(*b),
        Output::Json(v) => v.as_inner().clone(),
        Output::JsonList(values) => Value::Array(
            values
                .iter()
                .map(|v| v.as_ref().map(|v| v.as_inner().clone()).unwrap_or(Value::Null))
                .collect(),
        ),
        Output::Int(n) => json!(n),
        Output::Number(n) => Value::Number(n.clone()),
        Output::Keys(keys) => json!(keys),
        Output::Type(t) => json!(t.as_str()),
        Output::Resp(reply) => serde_json::to_value(reply).unwrap_or(Value::Null),
    }
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Nil => String::new(),
        Output::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        Output::Json(v) => v.to_json_string(),
        Output::JsonList(values) => values
            .iter()
            .map(|v| v.as_ref().map(JsonValue::to_json_string).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Int(n) => n.to_string(),
        Output::Number(n) => n.to_string(),
        Output::Keys(keys) => keys.join("\n"),
        Output::Type(t) => t.as_str().to_string(),
        Output::Resp(reply) => format_reply_raw(reply),
    }
}

fn format_reply_raw(reply: &Reply) -> String {
    match reply {
        Reply::Nil => String::new(),
        Reply::Status(s) | Reply::Bulk(s) | Reply::Error(s) => s.clone(),
        Reply::Integer(n) => n.to_string(),
        Reply::Array(items) => items
            .iter()
            .map(format_reply_raw)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Nil => "(nil)".to_string(),
        Output::Bool(b) => format!("(boolean) {}", b),
        Output::Json(v) => format!("\"{}\"", escape(&v.to_json_string())),
        Output::JsonList(values) => {
            if values.is_empty() {
                return "(empty array)".to_string();
            }
            numbered(values.iter().map(|v| match v {
                Some(v) => format!("\"{}\"", escape(&v.to_json_string())),
                None => "(nil)".to_string(),
            }))
        }
        Output::Int(n) => format!("(integer) {}", n),
        Output::Number(n) => format!("\"{}\"", n),
        Output::Keys(keys) => {
            if keys.is_empty() {
                return "(empty array)".to_string();
            }
            numbered(keys.iter().map(|k| format!("\"{}\"", escape(k))))
        }
        Output::Type(t) => t.as_str().to_string(),
        Output::Resp(reply) => format_reply_human(reply, 0),
    }
}

/// redis-cli rendering of a reply; nested arrays are indented under their index.
fn format_reply_human(reply: &Reply, depth: usize) -> String {
    match reply {
        Reply::Nil => "(nil)".to_string(),
        Reply::Status(s) => s.clone(),
        Reply::Integer(n) => format!("(integer) {}", n),
        Reply::Bulk(s) => format!("\"{}\"", escape(s)),
        Reply::Error(s) => format!("(error) {}", s),
        Reply::Array(items) if items.is_empty() => "(empty array)".to_string(),
        Reply::Array(items) => {
            let width = items.len().to_string().len();
            let indent = " ".repeat(depth);
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let label = format!("{:>width$}) ", i + 1, width = width);
                    let body = format_reply_human(item, depth + label.len());
                    if i == 0 {
                        format!("{}{}", label, body)
                    } else {
                        format!("{}{}{}", indent, label, body)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

fn numbered(items: impl Iterator<Item = String>) -> String {
    items
        .enumerate()
        .map(|(i, item)| format!("{}) {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rejson_executor::JsonType;

    #[test]
    fn test_format_nil() {
        assert_eq!(format_output(&Output::Nil, OutputMode::Human), "(nil)");
        assert_eq!(format_output(&Output::Nil, OutputMode::Raw), "");
        assert_eq!(format_output(&Output::Nil, OutputMode::Json), "null");
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(
            format_output(&Output::Bool(true), OutputMode::Human),
            "(boolean) true"
        );
        assert_eq!(format_output(&Output::Bool(true), OutputMode::Raw), "1");
    }

    #[test]
    fn test_format_json_value() {
        let out = Output::Json(json!({"foo": "bar"}).into());
        assert_eq!(
            format_output(&out, OutputMode::Human),
            r#""{\"foo\":\"bar\"}""#
        );
        assert_eq!(format_output(&out, OutputMode::Raw), r#"{"foo":"bar"}"#);
    }

    #[test]
    fn test_format_int_and_type() {
        assert_eq!(format_output(&Output::Int(6), OutputMode::Human), "(integer) 6");
        assert_eq!(
            format_output(&Output::Type(JsonType::Integer), OutputMode::Human),
            "integer"
        );
    }

    #[test]
    fn test_format_keys() {
        let keys = vec!["key1".to_string(), "key2".to_string()];
        assert_eq!(
            format_output(&Output::Keys(keys.clone()), OutputMode::Human),
            "1) \"key1\"\n2) \"key2\""
        );
        assert_eq!(
            format_output(&Output::Keys(keys), OutputMode::Raw),
            "key1\nkey2"
        );
    }

    #[test]
    fn test_format_json_list_with_nil() {
        let out = Output::JsonList(vec![Some(JsonValue::from(2i64)), None]);
        assert_eq!(format_output(&out, OutputMode::Human), "1) \"2\"\n2) (nil)");
    }

    #[test]
    fn test_format_nested_reply() {
        let reply = Reply::Array(vec![
            Reply::Status("{".into()),
            Reply::Bulk("a".into()),
            Reply::Array(vec![Reply::Status("[".into()), Reply::Integer(1)]),
        ]);
        assert_eq!(
            format_output(&Output::Resp(reply), OutputMode::Human),
            "1) {\n2) \"a\"\n3) 1) [\n   2) (integer) 1"
        );
    }

    #[test]
    fn test_format_query_results() {
        let results = vec![
            Ok(Output::Bool(true)),
            Err(Error::Store {
                message: "ERR missing key at non-terminal path level".into(),
            }),
        ];
        assert_eq!(
            format_query_results(&results, OutputMode::Human),
            "1) (boolean) true\n2) (error) store error: ERR missing key at non-terminal path level"
        );
    }
}
