//! Dynamically shaped records: string-keyed maps and JSON values.
//!
//! Unlike [`on_key`](crate::on_key), a field that isn't there is an error: a record is expected
//! to have the fields its users name.
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::trace;

use crate::{EditError, EditResult, Editor};

/// Edits a named field of a dynamically shaped record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Named(String);

pub fn field(name: impl Into<String>) -> Named {
    Named(name.into())
}

impl Named {
    pub fn name(&self) -> &str {
        &self.0
    }

    fn not_found(&self) -> EditError {
        trace!(field = self.name(), "field not found");
        EditError::FieldNotFound {
            field: self.0.clone(),
        }
    }
}

impl<V> Editor<BTreeMap<String, V>, V> for Named {
    fn try_edit<F>(&self, mut whole: BTreeMap<String, V>, f: &F) -> EditResult<BTreeMap<String, V>>
    where
        F: Fn(V) -> EditResult<V> + Clone + 'static,
    {
        let (name, value) = whole.remove_entry(self.name()).ok_or_else(|| self.not_found())?;
        whole.insert(name, f(value)?);
        Ok(whole)
    }
}

impl<V, S: BuildHasher> Editor<HashMap<String, V, S>, V> for Named {
    fn try_edit<F>(&self, mut whole: HashMap<String, V, S>, f: &F) -> EditResult<HashMap<String, V, S>>
    where
        F: Fn(V) -> EditResult<V> + Clone + 'static,
    {
        let (name, value) = whole.remove_entry(self.name()).ok_or_else(|| self.not_found())?;
        whole.insert(name, f(value)?);
        Ok(whole)
    }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::Value;
    use tracing::trace;

    use super::Named;
    use crate::sequence::check_bounds;
    use crate::{EditError, EditResult, Editor, Index};

    fn mismatch(expected: &'static str, found: &Value) -> EditError {
        trace!(expected, %found, "unexpected JSON value");
        EditError::ShapeMismatch { expected }
    }

    /// Fields of a JSON object. Entry order is preserved.
    impl Editor<Value, Value> for Named {
        fn try_edit<F>(&self, mut whole: Value, f: &F) -> EditResult<Value>
        where
            F: Fn(Value) -> EditResult<Value> + Clone + 'static,
        {
            let object = match &mut whole {
                Value::Object(object) => object,
                other => return Err(mismatch("object", other)),
            };
            let slot = object.get_mut(self.name()).ok_or_else(|| self.not_found())?;
            *slot = f(slot.take())?;
            Ok(whole)
        }
    }

    /// Elements of a JSON array.
    impl Editor<Value, Value> for Index {
        fn try_edit<F>(&self, mut whole: Value, f: &F) -> EditResult<Value>
        where
            F: Fn(Value) -> EditResult<Value> + Clone + 'static,
        {
            let array = match &mut whole {
                Value::Array(array) => array,
                other => return Err(mismatch("array", other)),
            };
            check_bounds(self.0, array.len())?;
            let slot = &mut array[self.0];
            *slot = f(slot.take())?;
            Ok(whole)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{every, EditorExt};

    #[test]
    fn string_keyed_maps() {
        let record = BTreeMap::from([("name".to_string(), "ann".to_string())]);
        let edited = field("name").edit(record.clone(), |s: String| s.to_uppercase()).unwrap();
        assert_eq!(edited["name"], "ANN");

        assert_eq!(
            field("age").edit(record, |s: String| s),
            Err(EditError::FieldNotFound {
                field: "age".to_string()
            })
        );

        let record: HashMap<String, Vec<i32>> = HashMap::from([("xs".to_string(), vec![1, 2])]);
        let edited = field("xs").then(every()).edit(record, |x: i32| -x).unwrap();
        assert_eq!(edited["xs"], vec![-1, -2]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_paths() {
        use crate::index;
        use serde_json::{json, Value};

        let doc = json!({ "users": [{ "name": "ann", "age": 31 }, { "name": "bob", "age": 40 }] });
        let older = field("users")
            .then(index(1))
            .then(field("age"))
            .edit(doc, |age: Value| json!(age.as_i64().unwrap_or(0) + 1))
            .unwrap();
        assert_eq!(older["users"][1]["age"], json!(41));
        assert_eq!(older["users"][0]["age"], json!(31));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_errors() {
        use crate::index;
        use serde_json::{json, Value};

        let doc = json!({ "users": [] });
        assert_eq!(
            field("users").then(index(0)).edit(doc.clone(), |v: Value| v),
            Err(EditError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            field("users").then(field("name")).edit(doc.clone(), |v: Value| v),
            Err(EditError::ShapeMismatch { expected: "object" })
        );
        assert_eq!(
            field("groups").edit(doc, |v: Value| v),
            Err(EditError::FieldNotFound {
                field: "groups".to_string()
            })
        );
    }
}
