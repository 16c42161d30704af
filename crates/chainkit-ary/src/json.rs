//! JSON encoding and decoding.
//!
//! An `Ary` whose keys are exactly `0..len` encodes as a JSON array; any
//! other `Ary` encodes as an object with stringified keys. Decoding maps
//! arrays and objects back to `Ary`, so object keys like `"3"` become
//! integer keys.

use crate::ary::Ary;
use crate::config::AryConfig;
use crate::error::AryError;
use crate::key::Key;
use crate::value::Value;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::sync::Arc;

/// Pretty output indents four spaces per level.
const PRETTY_INDENT: &[u8] = b"    ";

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Ary(a) => a.serialize(serializer),
        }
    }
}

impl Serialize for Ary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values_iter() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Str(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut ary = Ary::new();
        while let Some(value) = seq.next_element::<Value>()? {
            ary.push(value);
        }
        Ok(Value::Ary(ary))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut ary = Ary::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            ary.set(Key::from(key), value);
        }
        Ok(Value::Ary(ary))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Ary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Ary(ary) => Ok(ary),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.type_name()),
                &"a JSON array or object",
            )),
        }
    }
}

impl Ary {
    /// Encode as JSON; pretty-printed unless `pretty` (or the configured
    /// default) says otherwise.
    pub fn to_json(&self, pretty: Option<bool>) -> Result<String, AryError> {
        let limit = self.config.json_depth;
        let depth = self.depth();
        if depth > limit {
            return Err(AryError::DepthExceeded { depth, limit });
        }
        if !pretty.unwrap_or(self.config.json_pretty) {
            return Ok(serde_json::to_string(self)?);
        }
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
        self.serialize(&mut serde_json::Serializer::with_formatter(&mut out, formatter))?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Decode a JSON array or object with the default configuration.
    pub fn from_json(json: &str) -> Result<Ary, AryError> {
        Self::from_json_with(json, Arc::new(AryConfig::default()))
    }

    /// Decode a JSON array or object; the result (and every nested `Ary`)
    /// carries `config`.
    pub fn from_json_with(json: &str, config: Arc<AryConfig>) -> Result<Ary, AryError> {
        let mut ary: Ary = serde_json::from_str(json)?;
        let depth = ary.depth();
        if depth > config.json_depth {
            return Err(AryError::DepthExceeded {
                depth,
                limit: config.json_depth,
            });
        }
        ary.apply_config(&config);
        tracing::debug!(entries = ary.len(), depth, "decoded json into ary");
        Ok(ary)
    }

    fn apply_config(&mut self, config: &Arc<AryConfig>) {
        self.config = Arc::clone(config);
        for value in self.items.values_mut() {
            if let Value::Ary(nested) = value {
                nested.apply_config(config);
            }
        }
    }
}
