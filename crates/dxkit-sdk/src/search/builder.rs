use dxkit_core::Clock;
use dxkit_types::{Query, resolve_timestamp};
use serde_json::Value;

use super::fields::{Fallback, FieldRule, SearchKind, Transform};
use super::filter::Params;

/// Turns supplied parameters into a query document by walking the field
/// table of a search kind. Never fails: validation belongs to the server.
///
/// Extra parameters are not part of the query; see [`Params::extra`].
pub struct QueryBuilder<'a> {
    clock: &'a dyn Clock,
    workspace_id: Option<&'a str>,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(clock: &'a dyn Clock, workspace_id: Option<&'a str>) -> Self {
        Self {
            clock,
            workspace_id,
        }
    }

    pub fn build(&self, kind: SearchKind, params: &Params) -> Query {
        let now_ms = self.clock.now_ms();
        let mut query = Query::new();

        for rule in kind.fields() {
            match params.get(rule.param) {
                Some(value) if self.applies(rule, params) => {
                    query.insert_path(rule.path, apply(rule.transform, value, now_ms));
                }
                Some(_) => {}
                None => {
                    if rule.fallback == Fallback::Workspace {
                        let workspace = self
                            .workspace_id
                            .map(|id| Value::String(id.to_string()))
                            .unwrap_or(Value::Null);
                        query.insert_path(rule.path, workspace);
                    }
                }
            }
        }

        query
    }

    fn applies(&self, rule: &FieldRule, params: &Params) -> bool {
        rule.requires.is_none_or(|required| params.contains(required))
    }
}

fn apply(transform: Transform, value: &Value, now_ms: i64) -> Value {
    match transform {
        Transform::Verbatim => value.clone(),
        Transform::Timestamp => match value.as_i64() {
            Some(ms) => Value::from(resolve_timestamp(ms, now_ms)),
            None => value.clone(),
        },
        Transform::NoneAsNull => match value.as_str() {
            Some("none") => Value::Null,
            _ => value.clone(),
        },
    }
}
