// galgo_variant/src/variant.rs

use std::fmt;
use std::sync::Arc;

use galgo_ids::ObjectID;
use serde_json::{Number as JsonNumber, Value as JsonValue};

/// The closed set of payload kinds a dynamic variable can hold.
/// Each kind has a single-character tag used in the flattened form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarKind {
    Int,
    Float,
    Str,
    Bool,
    Object,
}

impl VarKind {
    #[inline]
    pub const fn tag(self) -> char {
        match self {
            VarKind::Int => 'i',
            VarKind::Float => 'f',
            VarKind::Str => 's',
            VarKind::Bool => 'b',
            VarKind::Object => 'o',
        }
    }

    #[inline]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'i' => Some(VarKind::Int),
            'f' => Some(VarKind::Float),
            's' => Some(VarKind::Str),
            'b' => Some(VarKind::Bool),
            'o' => Some(VarKind::Object),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, VarKind::Int | VarKind::Float)
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarKind::Int => write!(f, "int"),
            VarKind::Float => write!(f, "float"),
            VarKind::Str => write!(f, "string"),
            VarKind::Bool => write!(f, "bool"),
            VarKind::Object => write!(f, "object"),
        }
    }
}

/// A single typed payload for dynamic variable storage.
///
/// Payloads are replaced wholesale, never mutated in place, so cloning a
/// value (or anything holding one) behaves like a deep copy. Object handles
/// are copied by identity; the referenced object is not duplicated or owned.
#[derive(Clone, Debug, PartialEq)]
pub enum VarValue {
    Int(i32),
    Float(f32),
    Str(Arc<str>),
    Bool(bool),
    Object(ObjectID),
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Int(v) => write!(f, "{v}"),
            VarValue::Float(v) => write!(f, "{v}"),
            VarValue::Str(v) => write!(f, "{:?}", v.as_ref()),
            VarValue::Bool(v) => write!(f, "{v}"),
            VarValue::Object(v) => write!(f, "{v}"),
        }
    }
}

// -------------------- Constructors --------------------

impl VarValue {
    #[inline]
    pub fn string<S: AsRef<str>>(s: S) -> Self {
        VarValue::Str(Arc::<str>::from(s.as_ref()))
    }

    /// The per-kind default used by "absence = default" storage modes.
    #[inline]
    pub fn default_of(kind: VarKind) -> Self {
        match kind {
            VarKind::Int => VarValue::Int(0),
            VarKind::Float => VarValue::Float(0.0),
            VarKind::Str => VarValue::Str(Arc::<str>::from("")),
            VarKind::Bool => VarValue::Bool(false),
            VarKind::Object => VarValue::Object(ObjectID::nil()),
        }
    }
}

// -------------------- Accessors --------------------

impl VarValue {
    #[inline]
    pub const fn kind(&self) -> VarKind {
        match self {
            VarValue::Int(_) => VarKind::Int,
            VarValue::Float(_) => VarKind::Float,
            VarValue::Str(_) => VarKind::Str,
            VarValue::Bool(_) => VarKind::Bool,
            VarValue::Object(_) => VarKind::Object,
        }
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        match self {
            VarValue::Int(v) => *v == 0,
            VarValue::Float(v) => *v == 0.0,
            VarValue::Str(s) => s.is_empty(),
            VarValue::Bool(v) => !*v,
            VarValue::Object(id) => id.is_nil(),
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match *self {
            VarValue::Int(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            VarValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric carve-out: floats as-is, ints widened. Other kinds are `None`.
    #[inline]
    pub fn as_number(&self) -> Option<f32> {
        match *self {
            VarValue::Float(v) => Some(v),
            VarValue::Int(v) => Some(v as f32),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VarValue::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            VarValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<ObjectID> {
        match *self {
            VarValue::Object(id) => Some(id),
            _ => None,
        }
    }
}

// -------------------- From impls (ergonomic construction) --------------------

impl From<i32> for VarValue {
    #[inline]
    fn from(v: i32) -> Self {
        VarValue::Int(v)
    }
}
impl From<f32> for VarValue {
    #[inline]
    fn from(v: f32) -> Self {
        VarValue::Float(v)
    }
}
impl From<bool> for VarValue {
    #[inline]
    fn from(v: bool) -> Self {
        VarValue::Bool(v)
    }
}
impl From<&str> for VarValue {
    #[inline]
    fn from(v: &str) -> Self {
        VarValue::Str(Arc::<str>::from(v))
    }
}
impl From<String> for VarValue {
    #[inline]
    fn from(v: String) -> Self {
        VarValue::Str(Arc::<str>::from(v))
    }
}
impl From<Arc<str>> for VarValue {
    #[inline]
    fn from(v: Arc<str>) -> Self {
        VarValue::Str(v)
    }
}
impl From<ObjectID> for VarValue {
    #[inline]
    fn from(v: ObjectID) -> Self {
        VarValue::Object(v)
    }
}

// -------------------- JSON conversion --------------------

// Debug/inspector surface only. The persistence path is the flat codec in
// galgo_vars; JSON export exists so editor tooling can display collections.

impl VarValue {
    pub fn to_json_value(&self) -> JsonValue {
        match self {
            VarValue::Int(v) => JsonValue::Number(JsonNumber::from(*v)),
            VarValue::Float(v) => float_to_json(*v as f64),
            VarValue::Str(s) => JsonValue::String(s.as_ref().to_string()),
            VarValue::Bool(v) => JsonValue::Bool(*v),
            VarValue::Object(id) => JsonValue::Number(JsonNumber::from(id.as_u64())),
        }
    }

    pub fn from_json_value(kind: VarKind, value: &JsonValue) -> Option<Self> {
        match kind {
            VarKind::Int => value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(VarValue::Int),
            VarKind::Float => value.as_f64().map(|v| VarValue::Float(v as f32)),
            VarKind::Str => value.as_str().map(VarValue::string),
            VarKind::Bool => value.as_bool().map(VarValue::Bool),
            VarKind::Object => value
                .as_u64()
                .map(|v| VarValue::Object(ObjectID::from_u64(v))),
        }
    }
}

fn float_to_json(value: f64) -> JsonValue {
    match JsonNumber::from_f64(value) {
        Some(v) => JsonValue::Number(v),
        None => JsonValue::Null,
    }
}
