// galgo_vars/src/collection.rs

use std::sync::Arc;

use galgo_ids::ObjectID;
use galgo_variant::{VarKind, VarValue};

/// One id-tagged payload, exclusively owned by its collection.
#[derive(Clone, Debug, PartialEq)]
pub struct VarEntry {
    pub id: Arc<str>,
    pub value: VarValue,
}

/// An ordered, mutable set of id-tagged payloads belonging to one owner.
///
/// Insertion order is preserved; it affects the flattened form, not lookup
/// semantics. `set` keeps (id, kind) pairs unique by overwriting on match,
/// but duplicates reaching the collection some other way are tolerated:
/// lookups take the first match and removals sweep every match.
///
/// Lookups are linear scans. Collections are small (per-object, well under a
/// hundred entries); this is not bulk storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VarCollection {
    entries: Vec<VarEntry>,
}

impl VarCollection {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order. Inspector drawers read these directly.
    #[inline]
    pub fn entries(&self) -> &[VarEntry] {
        &self.entries
    }

    /// Core upsert: overwrite the first entry matching (id, kind), else append.
    pub fn set_value(&mut self, id: Arc<str>, value: VarValue) {
        let kind = value.kind();
        match self
            .entries
            .iter_mut()
            .find(|e| e.value.kind() == kind && *e.id == *id)
        {
            Some(entry) => entry.value = value,
            None => self.entries.push(VarEntry { id, value }),
        }
    }

    /// Convenience wrapper over [`set_value`](Self::set_value).
    #[inline]
    pub fn set<V: Into<VarValue>>(&mut self, id: &str, value: V) {
        self.set_value(Arc::<str>::from(id), value.into());
    }

    /// "Absence = default" mode: storing a kind's default removes the entry
    /// instead, so untouched variables cost nothing in the persisted form.
    pub fn set_pruned<V: Into<VarValue>>(&mut self, id: &str, value: V) {
        let value = value.into();
        if value.is_default() {
            self.remove_kind(id, value.kind());
        } else {
            self.set_value(Arc::<str>::from(id), value);
        }
    }

    /// First entry matching (id, kind), if any.
    pub fn get(&self, id: &str, kind: VarKind) -> Option<&VarValue> {
        self.entries
            .iter()
            .find(|e| e.value.kind() == kind && *e.id == *id)
            .map(|e| &e.value)
    }

    // Typed lookups. `get_*` fall back to the supplied standard; the
    // `try_get_*` forms exist because a standard cannot be told apart from a
    // legitimately stored value equal to it.

    #[inline]
    pub fn try_get_int(&self, id: &str) -> Option<i32> {
        self.get(id, VarKind::Int).and_then(VarValue::as_int)
    }

    #[inline]
    pub fn get_int(&self, id: &str, standard: i32) -> i32 {
        self.try_get_int(id).unwrap_or(standard)
    }

    #[inline]
    pub fn try_get_float(&self, id: &str) -> Option<f32> {
        self.get(id, VarKind::Float).and_then(VarValue::as_float)
    }

    #[inline]
    pub fn get_float(&self, id: &str, standard: f32) -> f32 {
        self.try_get_float(id).unwrap_or(standard)
    }

    /// Numeric carve-out: the first entry with this id and a numeric kind,
    /// float as-is, int widened to f32. Only numbers cross kinds like this.
    pub fn try_get_number(&self, id: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|e| e.value.kind().is_numeric() && *e.id == *id)
            .and_then(|e| e.value.as_number())
    }

    #[inline]
    pub fn get_number(&self, id: &str, standard: f32) -> f32 {
        self.try_get_number(id).unwrap_or(standard)
    }

    #[inline]
    pub fn try_get_str(&self, id: &str) -> Option<&str> {
        self.get(id, VarKind::Str).and_then(VarValue::as_str)
    }

    #[inline]
    pub fn get_str<'a>(&'a self, id: &str, standard: &'a str) -> &'a str {
        self.try_get_str(id).unwrap_or(standard)
    }

    #[inline]
    pub fn try_get_bool(&self, id: &str) -> Option<bool> {
        self.get(id, VarKind::Bool).and_then(VarValue::as_bool)
    }

    #[inline]
    pub fn get_bool(&self, id: &str, standard: bool) -> bool {
        self.try_get_bool(id).unwrap_or(standard)
    }

    #[inline]
    pub fn try_get_object(&self, id: &str) -> Option<ObjectID> {
        self.get(id, VarKind::Object).and_then(VarValue::as_object)
    }

    #[inline]
    pub fn get_object(&self, id: &str, standard: ObjectID) -> ObjectID {
        self.try_get_object(id).unwrap_or(standard)
    }

    #[inline]
    pub fn has(&self, id: &str, kind: VarKind) -> bool {
        self.get(id, kind).is_some()
    }

    #[inline]
    pub fn has_number(&self, id: &str) -> bool {
        self.try_get_number(id).is_some()
    }

    /// Removes every entry with this id, across all kinds.
    /// Removing a nonexistent id is a no-op.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| *e.id != *id);
    }

    /// Removes every entry matching (id, kind).
    pub fn remove_kind(&mut self, id: &str, kind: VarKind) {
        self.entries
            .retain(|e| e.value.kind() != kind || *e.id != *id);
    }

    /// Deep copy. Payloads are never mutated in place, so `Clone` already has
    /// deep-copy observable behavior; object handles copy by identity.
    #[inline]
    pub fn copied(&self) -> Self {
        self.clone()
    }

    /// Applies every entry of `other` onto `self` via `set` — `other` wins
    /// on (id, kind) collision. Not commutative.
    pub fn merge(&mut self, other: &VarCollection) {
        for entry in &other.entries {
            self.set_value(Arc::clone(&entry.id), entry.value.clone());
        }
    }

    /// Fresh collection: a copy of `a` with `b` merged on top. None-or-empty
    /// inputs never allocate an empty result, and the return value never
    /// aliases an input.
    pub fn merged(a: Option<&VarCollection>, b: Option<&VarCollection>) -> Option<VarCollection> {
        let a = a.filter(|c| !c.is_empty());
        let b = b.filter(|c| !c.is_empty());
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a.copied()),
            (None, Some(b)) => Some(b.copied()),
            (Some(a), Some(b)) => {
                let mut out = a.copied();
                out.merge(b);
                Some(out)
            }
        }
    }

    /// Subset/equality predicate. Non-exact: every entry of `self` exists in
    /// `other` with an equal value, and `other` holds at least as many
    /// entries. The count test is a cardinality proxy, not genuine subset
    /// verification — extra entries in `other` are not checked for
    /// disjointness. Callers rely on these exact semantics; do not tighten.
    /// Exact mode additionally requires equal counts.
    pub fn is(&self, other: &VarCollection, exactly: bool) -> bool {
        if exactly && other.len() != self.len() {
            return false;
        }
        if other.len() < self.len() {
            return false;
        }
        self.entries
            .iter()
            .all(|e| other.get(&e.id, e.value.kind()) == Some(&e.value))
    }

    /// Static entry point treating none-or-empty as a defined comparison
    /// outcome: both none-or-empty compare equal, one-sided emptiness
    /// compares unequal. Never errors.
    pub fn is_match(a: Option<&VarCollection>, b: Option<&VarCollection>, exactly: bool) -> bool {
        let a = a.filter(|c| !c.is_empty());
        let b = b.filter(|c| !c.is_empty());
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a.is(b, exactly),
            _ => false,
        }
    }
}
