use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Tagged value as returned by a scan over the schema-less store.
///
/// Every accessor is total: a tag mismatch yields `None`, never a panic.
/// `Absent` is distinct from explicit zero/empty values so that callers can
/// tell "field never written" apart from "field written as empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowValue {
    Absent,
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<RowValue>),
    Map(HashMap<String, RowValue>),
}

impl RowValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, RowValue::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RowValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RowValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RowValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RowValue]> {
        match self {
            RowValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, RowValue>> {
        match self {
            RowValue::Map(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            RowValue::Absent => Value::Null,
            RowValue::Str(s) => Value::String(s.clone()),
            RowValue::Int(v) => Value::Number((*v).into()),
            RowValue::Bool(b) => Value::Bool(*b),
            RowValue::List(items) => Value::Array(items.iter().map(RowValue::to_json).collect()),
            RowValue::Map(fields) => {
                let mut obj = Map::new();
                for (name, value) in fields {
                    obj.insert(name.clone(), value.to_json());
                }
                Value::Object(obj)
            }
        }
    }
}

static ABSENT: RowValue = RowValue::Absent;

/// One persisted record: a map of field name to tagged value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    fields: HashMap<String, RowValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: RowValue) {
        self.fields.insert(name.into(), value);
    }

    /// Field lookup; missing keys read as `Absent`.
    pub fn field(&self, name: &str) -> &RowValue {
        self.fields.get(name).unwrap_or(&ABSENT)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        for (name, value) in &self.fields {
            if !value.is_absent() {
                obj.insert(name.clone(), value.to_json());
            }
        }
        Value::Object(obj)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FromIterator<(String, RowValue)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, RowValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
