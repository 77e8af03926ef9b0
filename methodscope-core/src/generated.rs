use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{AnnotationDescriptor, MethodSignature};

/// One generated subclass for a `(class, scope)` pair.
///
/// Rendering this into source text is left to the code writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedClass {
    pub name: String,
    pub package_name: String,
    pub superclass_name: String,
    /// Header doc line for the generated declaration.
    pub doc: Option<String>,
    pub modifiers: Vec<String>,
    pub class_annotations: Vec<AnnotationDescriptor>,
    pub methods: Vec<GeneratedMethod>,
}

impl GeneratedClass {
    /// Generated methods overriding `name`, in emission order.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GeneratedMethod> {
        self.methods.iter().filter(move |m| m.signature.name == name)
    }

    pub fn methods_with_role(&self, role: MethodRole) -> impl Iterator<Item = &GeneratedMethod> {
        self.methods.iter().filter(move |m| m.role == role)
    }

    /// The generated `initializeScopes` override, if one was emitted.
    pub fn aggregate_initializer(&self) -> Option<&GeneratedMethod> {
        self.methods_with_role(MethodRole::AggregateInitializer).next()
    }
}

/// Why a method was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodRole {
    /// Pass-through override of an initializer-marked method.
    InitializerForward,
    /// Override of `initializeScopes` calling every initializer of the scope.
    AggregateInitializer,
    /// Pass-through override of a member-marked method.
    ScopedForward,
}

/// An override in the generated subclass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMethod {
    pub signature: MethodSignature,
    pub role: MethodRole,
    pub body: Vec<Statement>,
}

impl GeneratedMethod {
    /// Override whose only statement forwards to the superclass.
    pub fn forwarding(signature: MethodSignature, role: MethodRole) -> Self {
        let body = vec![Statement::SuperCall {
            method: signature.name.clone(),
        }];
        Self {
            signature,
            role,
            body,
        }
    }
}

/// A single no-argument call statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// `super.method()`
    SuperCall { method: String },
    /// `method()` on `this`
    SelfCall { method: String },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::SuperCall { method } => write!(f, "super.{method}()"),
            Statement::SelfCall { method } => write!(f, "{method}()"),
        }
    }
}
