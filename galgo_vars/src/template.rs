// galgo_vars/src/template.rs

use std::sync::Arc;

use galgo_variant::{VarKind, VarValue};

/// Read-only definition of one variable: stable name, typed default, and
/// optional numeric bounds. A shared template list is the single source of
/// truth for what variables exist and what they start at.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateVar {
    name: Arc<str>,
    default: VarValue,
    min: Option<f32>,
    max: Option<f32>,
}

impl TemplateVar {
    pub fn new<V: Into<VarValue>>(name: &str, default: V) -> Self {
        Self {
            name: Arc::<str>::from(name),
            default: default.into(),
            min: None,
            max: None,
        }
    }

    /// Bounds apply to numeric kinds only; writes through [`InstanceVars::set`]
    /// are clamped into them.
    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn default(&self) -> &VarValue {
        &self.default
    }

    #[inline]
    pub fn kind(&self) -> VarKind {
        self.default.kind()
    }

    fn clamped(&self, value: VarValue) -> VarValue {
        let (Some(min), Some(max)) = (self.min, self.max) else {
            return value;
        };
        match value {
            VarValue::Int(v) => VarValue::Int(v.clamp(min as i32, max as i32)),
            VarValue::Float(v) => VarValue::Float(v.clamp(min, max)),
            other => other,
        }
    }
}

/// Per-owner mutable copies of a template list's defaults, positionally
/// aligned 1:1 with the list they were built from. The template slice is
/// passed into every operation; there is no global registry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceVars {
    vars: Vec<VarValue>,
}

impl InstanceVars {
    /// Exactly one instance value per template entry, copying its default.
    pub fn from_templates(templates: &[TemplateVar]) -> Self {
        Self {
            vars: templates.iter().map(|t| t.default.clone()).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn position(templates: &[TemplateVar], name: &str, kind: VarKind) -> Option<usize> {
        templates
            .iter()
            .position(|t| t.kind() == kind && t.name() == name)
    }

    /// Current value for (name, kind), looked up through the template list
    /// the container was built from.
    pub fn get(&self, templates: &[TemplateVar], name: &str, kind: VarKind) -> Option<&VarValue> {
        debug_assert_eq!(templates.len(), self.vars.len());
        Self::position(templates, name, kind).and_then(|i| self.vars.get(i))
    }

    /// Writes a value for (name, value.kind()). Returns false and mutates
    /// nothing when the template list has no matching entry. Numeric writes
    /// are clamped into the template's bounds.
    pub fn set<V: Into<VarValue>>(
        &mut self,
        templates: &[TemplateVar],
        name: &str,
        value: V,
    ) -> bool {
        debug_assert_eq!(templates.len(), self.vars.len());
        let value = value.into();
        match Self::position(templates, name, value.kind()) {
            Some(i) => {
                self.vars[i] = templates[i].clamped(value);
                true
            }
            None => false,
        }
    }

    /// Snapshot of every instance payload, independent of the shared
    /// templates and of this container. Save systems persist these.
    pub fn copy_of_vars(&self) -> Vec<VarValue> {
        self.vars.clone()
    }
}
