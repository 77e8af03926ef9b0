//! Read-only descriptors handed to the emitter by the model resolver.
//!
//! These values mirror what a compile-time reflection layer knows about a
//! user-authored class: its own methods in declaration order, the annotations
//! on each method, and the class-level annotations that declare scopes.
//! Signature parts (parameter types, return type, modifiers) are opaque text
//! and are copied through untouched.

use serde::{Deserialize, Serialize};

use crate::scope::{ScopeName, INIT_PREFIX, SCOPE_SUFFIX};

/// Member of a class-level annotation listing the scope names.
pub const SCOPES_MEMBER: &str = "scopes";

/// Member of a class-level annotation listing one annotation per scope.
pub const VALUES_MEMBER: &str = "values";

/// A user-authored class eligible for scoped generation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(default)]
    pub members: Vec<MethodDescriptor>,
    #[serde(default)]
    pub scope_annotations: Vec<AnnotationDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            scope_annotations: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.members.push(method);
        self
    }

    pub fn with_scope_annotation(mut self, annotation: AnnotationDescriptor) -> Self {
        self.scope_annotations.push(annotation);
        self
    }

    /// Every scope named by a class-level `scopes` list, in first-seen order.
    ///
    /// Entries that are not valid scope names are skipped.
    pub fn declared_scopes(&self) -> Vec<ScopeName> {
        let mut scopes: Vec<ScopeName> = Vec::new();
        for annotation in &self.scope_annotations {
            let Some(items) = annotation.member(SCOPES_MEMBER) else {
                continue;
            };
            for item in items.as_slice() {
                let Some(raw) = item.as_scope_str() else {
                    continue;
                };
                match ScopeName::new(raw) {
                    Ok(scope) if !scopes.contains(&scope) => scopes.push(scope),
                    Ok(_) => {}
                    Err(e) => {
                        tracing::trace!(class = %self.name, error = %e, "Skipping undeclarable scope");
                    }
                }
            }
        }
        scopes
    }

    /// First method declared with the given simple name.
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.members.iter().find(|m| m.signature.name == name)
    }
}

/// A method declared on a [`ClassDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub signature: MethodSignature,
    #[serde(default)]
    pub annotations: Vec<AnnotationDescriptor>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            signature: MethodSignature::new(name),
            annotations: Vec::new(),
        }
    }

    pub fn with_signature(signature: MethodSignature) -> Self {
        Self {
            signature,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationDescriptor) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }

    /// Whether any annotation on this method resolved to `kind`.
    pub fn has_kind(&self, kind: &AnnotationKind) -> bool {
        self.annotations.iter().any(|a| &a.kind == kind)
    }

    /// Whether this method carries the `@<scope>Scope` marker.
    pub fn is_member_of(&self, scope: &ScopeName) -> bool {
        self.annotations.iter().any(|a| a.kind.is_member_marker_of(scope))
    }

    /// Whether this method carries the `@Init<scope>Scope` marker.
    pub fn is_initializer_of(&self, scope: &ScopeName) -> bool {
        self.annotations
            .iter()
            .any(|a| a.kind.is_initializer_marker_of(scope))
    }
}

/// Method signature. Everything except `name` is opaque to the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default = "default_return_type")]
    pub return_type: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

fn default_return_type() -> String {
    "void".to_string()
}

impl MethodSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: default_return_type(),
            modifiers: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

/// An applied annotation: its name, its members, and the scope role the
/// resolver assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationDescriptor {
    pub name: String,
    #[serde(default)]
    pub members: Vec<AnnotationMember>,
    #[serde(default)]
    pub kind: AnnotationKind,
}

impl AnnotationDescriptor {
    /// Create a descriptor, classifying it from the simple name of `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let simple = name.rsplit('.').next().unwrap_or(&name);
        let kind = AnnotationKind::from_canonical_name(&format!("@{simple}"));
        Self {
            name,
            members: Vec::new(),
            kind,
        }
    }

    pub fn with_member(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.members.push(AnnotationMember {
            name: name.into(),
            value,
        });
        self
    }

    pub fn with_kind(mut self, kind: AnnotationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Value of the first member called `name`.
    pub fn member(&self, name: &str) -> Option<&AnnotationValue> {
        self.members.iter().find(|m| m.name == name).map(|m| &m.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationMember {
    pub name: String,
    pub value: AnnotationValue,
}

/// A constant annotation member value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationValue {
    String(String),
    Integer(i64),
    Bool(bool),
    /// Class literal, e.g. `Foo.class`.
    Type(String),
    /// Enum constant, e.g. `RetentionPolicy.SOURCE`.
    Enum(String),
    Annotation(Box<AnnotationDescriptor>),
    List(Vec<AnnotationValue>),
}

impl AnnotationValue {
    /// List items, treating a single value as a one-element list.
    pub fn as_slice(&self) -> &[AnnotationValue] {
        match self {
            AnnotationValue::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// String content with any quoting stripped, for comparison with a scope name.
    pub fn as_scope_str(&self) -> Option<String> {
        match self {
            AnnotationValue::String(s) => Some(s.replace('"', "")),
            _ => None,
        }
    }

    pub fn as_annotation(&self) -> Option<&AnnotationDescriptor> {
        match self {
            AnnotationValue::Annotation(a) => Some(a),
            _ => None,
        }
    }
}

/// The scope role of an annotation, resolved once by the model resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// `@<Scope>Scope`: the method belongs to the scope.
    Member(ScopeName),
    /// `@Init<Scope>Scope`: the method initializes the scope.
    Initializer(ScopeName),
    #[default]
    Other,
}

impl AnnotationKind {
    /// Classify a canonical annotation name such as `@FooScope` or `@InitFooScope`.
    ///
    /// When a name fits both shapes (`@InitFooScope` is also the member marker
    /// of a scope called `InitFoo`) it is stored as an initializer. Matching
    /// against a concrete scope goes through [`is_member_marker_of`] and
    /// [`is_initializer_marker_of`], which accept either reading.
    ///
    /// [`is_member_marker_of`]: AnnotationKind::is_member_marker_of
    /// [`is_initializer_marker_of`]: AnnotationKind::is_initializer_marker_of
    pub fn from_canonical_name(name: &str) -> Self {
        let Some(inner) = name
            .strip_prefix('@')
            .and_then(|n| n.strip_suffix(SCOPE_SUFFIX))
        else {
            return AnnotationKind::Other;
        };
        if let Some(scope) = inner
            .strip_prefix(INIT_PREFIX)
            .and_then(|s| ScopeName::new(s).ok())
        {
            return AnnotationKind::Initializer(scope);
        }
        match ScopeName::new(inner) {
            Ok(scope) => AnnotationKind::Member(scope),
            Err(_) => AnnotationKind::Other,
        }
    }

    /// Whether the canonical name of this annotation is `@<scope>Scope`.
    pub fn is_member_marker_of(&self, scope: &ScopeName) -> bool {
        match self {
            AnnotationKind::Member(s) => s == scope,
            AnnotationKind::Initializer(s) => scope
                .as_str()
                .strip_prefix(INIT_PREFIX)
                .is_some_and(|rest| rest == s.as_str()),
            AnnotationKind::Other => false,
        }
    }

    /// Whether the canonical name of this annotation is `@Init<scope>Scope`.
    pub fn is_initializer_marker_of(&self, scope: &ScopeName) -> bool {
        match self {
            AnnotationKind::Initializer(s) => s == scope,
            AnnotationKind::Member(s) => s
                .as_str()
                .strip_prefix(INIT_PREFIX)
                .is_some_and(|rest| rest == scope.as_str()),
            AnnotationKind::Other => false,
        }
    }
}
