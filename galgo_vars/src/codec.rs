// galgo_vars/src/codec.rs

use std::sync::Arc;

use galgo_ids::ObjectID;
use galgo_variant::{VarKind, VarValue};
use log::warn;
use serde_json::{Map as JsonMap, Value as JsonValue};
use thiserror::Error;

use crate::collection::VarCollection;

/// The flattened form of a [`VarCollection`], shaped for a persistence layer
/// that can only store primitive arrays: one string sequence, one
/// object-handle sequence.
///
/// Each entry occupies two string slots: `<tag><id>` then the payload text.
/// Object entries store a decimal index into `objects` instead of payload
/// text; identical handles share one table slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatVars {
    pub strings: Vec<String>,
    pub objects: Vec<ObjectID>,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed int payload for `{id}`: {source}")]
    Int {
        id: String,
        source: std::num::ParseIntError,
    },
    #[error("malformed float payload for `{id}`: {source}")]
    Float {
        id: String,
        source: std::num::ParseFloatError,
    },
    #[error("malformed bool payload for `{id}`: {source}")]
    Bool {
        id: String,
        source: std::str::ParseBoolError,
    },
    #[error("object index {index} out of range for `{id}` (table holds {len})")]
    ObjectIndex { id: String, index: usize, len: usize },
}

impl VarCollection {
    /// Flattens into the two-sequence persisted form. Numeric payloads use
    /// Rust's `Display`, which is locale-invariant and round-trips exactly.
    pub fn flatten(&self) -> FlatVars {
        let mut flat = FlatVars {
            strings: Vec::with_capacity(self.len() * 2),
            objects: Vec::new(),
        };

        for entry in self.entries() {
            let mut key = String::with_capacity(entry.id.len() + 1);
            key.push(entry.value.kind().tag());
            key.push_str(&entry.id);
            flat.strings.push(key);

            let payload = match &entry.value {
                VarValue::Int(v) => v.to_string(),
                VarValue::Float(v) => v.to_string(),
                VarValue::Str(s) => s.as_ref().to_string(),
                VarValue::Bool(v) => v.to_string(),
                VarValue::Object(id) => {
                    let index = match flat.objects.iter().position(|o| o == id) {
                        Some(index) => index,
                        None => {
                            flat.objects.push(*id);
                            flat.objects.len() - 1
                        }
                    };
                    index.to_string()
                }
            };
            flat.strings.push(payload);
        }

        flat
    }

    /// Rebuilds a collection from the persisted pair.
    ///
    /// Unknown kind tags and empty key slots are recoverable: logged and
    /// skipped, decoding continues. Malformed numeric/bool payloads and
    /// out-of-range object indices indicate corrupted persisted data and
    /// propagate as [`DecodeError`].
    pub fn unflatten(strings: &[String], objects: &[ObjectID]) -> Result<Self, DecodeError> {
        let mut vars = VarCollection::new();

        for pair in strings.chunks(2) {
            let [key, payload] = pair else {
                warn!("var decode: trailing unpaired slot {:?}, dropped", pair[0]);
                break;
            };

            let mut chars = key.chars();
            let Some(tag) = chars.next() else {
                warn!("var decode: empty key slot, entry skipped");
                continue;
            };
            let id = chars.as_str();

            let Some(kind) = VarKind::from_tag(tag) else {
                warn!("var decode: unknown kind tag '{tag}' for `{id}`, entry skipped");
                continue;
            };

            let value = match kind {
                VarKind::Int => {
                    let v = payload.parse::<i32>().map_err(|source| DecodeError::Int {
                        id: id.to_string(),
                        source,
                    })?;
                    VarValue::Int(v)
                }
                VarKind::Float => {
                    let v = payload
                        .parse::<f32>()
                        .map_err(|source| DecodeError::Float {
                            id: id.to_string(),
                            source,
                        })?;
                    VarValue::Float(v)
                }
                VarKind::Str => VarValue::string(payload),
                VarKind::Bool => {
                    let v = payload
                        .parse::<bool>()
                        .map_err(|source| DecodeError::Bool {
                            id: id.to_string(),
                            source,
                        })?;
                    VarValue::Bool(v)
                }
                VarKind::Object => {
                    let index = payload.parse::<usize>().map_err(|source| DecodeError::Int {
                        id: id.to_string(),
                        source,
                    })?;
                    let handle =
                        objects
                            .get(index)
                            .copied()
                            .ok_or_else(|| DecodeError::ObjectIndex {
                                id: id.to_string(),
                                index,
                                len: objects.len(),
                            })?;
                    VarValue::Object(handle)
                }
            };

            vars.set_value(Arc::<str>::from(id), value);
        }

        Ok(vars)
    }

    /// JSON view for debug output and inspector drawers. Not the persistence
    /// format — that is [`flatten`](Self::flatten).
    pub fn to_json_value(&self) -> JsonValue {
        JsonValue::Array(
            self.entries()
                .iter()
                .map(|entry| {
                    let mut map = JsonMap::new();
                    map.insert(
                        "id".to_string(),
                        JsonValue::String(entry.id.as_ref().to_string()),
                    );
                    map.insert(
                        "kind".to_string(),
                        JsonValue::String(entry.value.kind().tag().to_string()),
                    );
                    map.insert("value".to_string(), entry.value.to_json_value());
                    JsonValue::Object(map)
                })
                .collect(),
        )
    }
}
