//! Scoped subclass emission.
//!
//! For a `(class, scope)` pair the emitter builds one [`GeneratedClass`]:
//!
//! - named `<Class>Scope<Scope>` and extending the original class,
//! - carrying the per-scope annotation picked from each class-level
//!   `scopes`/`values` pair,
//! - overriding every `@Init<Scope>Scope` method with a call to `super`,
//! - overriding `initializeScopes` (when declared) so it calls `super` and
//!   then every initializer of the scope in declaration order,
//! - overriding every `@<Scope>Scope` method with a call to `super`.
//!
//! Emission never fails. Anything missing or malformed in the input simply
//! contributes nothing to the output.

use crate::config::GeneratorConfig;
use crate::generated::{GeneratedClass, GeneratedMethod, MethodRole, Statement};
use crate::model::{
    AnnotationDescriptor, AnnotationValue, ClassDescriptor, MethodDescriptor, SCOPES_MEMBER,
    VALUES_MEMBER,
};
use crate::scope::ScopeName;

/// Name of the user-declared method the aggregate initializer overrides.
pub const INITIALIZE_SCOPES: &str = "initializeScopes";

/// Builds [`GeneratedClass`] values. Holds only its configuration, so one
/// emitter can be shared across threads and reused for every pair.
#[derive(Debug, Clone, Default)]
pub struct ScopeEmitter {
    config: GeneratorConfig,
}

impl ScopeEmitter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the subclass of `class` for `scope` in `package_name`.
    pub fn emit(
        &self,
        class: &ClassDescriptor,
        scope: &ScopeName,
        package_name: &str,
    ) -> GeneratedClass {
        let name = scope.class_name_for(&class.name);
        tracing::debug!(class = %class.name, %scope, generated = %name, "Emitting scope class");

        let class_annotations = scope_annotations(class, scope);

        let mut methods = initializer_methods(class, scope);
        methods.extend(scoped_methods(class, scope));

        tracing::debug!(
            generated = %name,
            annotations = class_annotations.len(),
            methods = methods.len(),
            "Emitted scope class"
        );

        GeneratedClass {
            name,
            package_name: package_name.to_string(),
            superclass_name: class.name.clone(),
            doc: self.config.header.clone(),
            modifiers: self.config.modifiers.clone(),
            class_annotations,
            methods,
        }
    }

    /// Generate one subclass per scope declared on `class`.
    pub fn emit_declared(&self, class: &ClassDescriptor, package_name: &str) -> Vec<GeneratedClass> {
        class
            .declared_scopes()
            .iter()
            .map(|scope| self.emit(class, scope, package_name))
            .collect()
    }
}

/// Generate the subclass of `class` for `scope` with the default configuration.
pub fn emit(class: &ClassDescriptor, scope: &ScopeName, package_name: &str) -> GeneratedClass {
    ScopeEmitter::default().emit(class, scope, package_name)
}

fn scope_annotations(class: &ClassDescriptor, scope: &ScopeName) -> Vec<AnnotationDescriptor> {
    class
        .scope_annotations
        .iter()
        .filter_map(|annotation| scope_annotation(class, annotation, scope))
        .collect()
}

/// The entry of `values` at the position of `scope` in `scopes`, if any.
fn scope_annotation(
    class: &ClassDescriptor,
    annotation: &AnnotationDescriptor,
    scope: &ScopeName,
) -> Option<AnnotationDescriptor> {
    let scopes = annotation.member(SCOPES_MEMBER)?.as_slice();
    let position = scopes
        .iter()
        .position(|s| s.as_scope_str().as_deref() == Some(scope.as_str()))?;

    let value = annotation
        .member(VALUES_MEMBER)
        .and_then(|values| values.as_slice().get(position));

    match value.and_then(AnnotationValue::as_annotation) {
        Some(scoped) => {
            tracing::trace!(
                class = %class.name,
                %scope,
                annotation = %scoped.name,
                "Copying scope annotation"
            );
            Some(scoped.clone())
        }
        None => {
            tracing::warn!(
                class = %class.name,
                %scope,
                annotation = %annotation.name,
                position,
                "No annotation in `values` at the position of the scope, skipping"
            );
            None
        }
    }
}

/// Initializer forwards and the aggregate initializer, in declaration order.
fn initializer_methods(class: &ClassDescriptor, scope: &ScopeName) -> Vec<GeneratedMethod> {
    let mut methods = Vec::new();
    let mut aggregate_emitted = false;

    for method in &class.members {
        if method.is_initializer_of(scope) {
            tracing::trace!(method = method.name(), %scope, "Forwarding initializer");
            methods.push(GeneratedMethod::forwarding(
                method.signature.clone(),
                MethodRole::InitializerForward,
            ));
        }

        if !aggregate_emitted && method.name() == INITIALIZE_SCOPES {
            aggregate_emitted = true;
            methods.push(aggregate_initializer(class, method, scope));
        }
    }

    methods
}

fn aggregate_initializer(
    class: &ClassDescriptor,
    initialize: &MethodDescriptor,
    scope: &ScopeName,
) -> GeneratedMethod {
    let mut body = vec![Statement::SuperCall {
        method: INITIALIZE_SCOPES.to_string(),
    }];
    body.extend(
        class
            .members
            .iter()
            .filter(|m| m.is_initializer_of(scope))
            .map(|m| Statement::SelfCall {
                method: m.name().to_string(),
            }),
    );

    tracing::trace!(calls = body.len() - 1, "Aggregating scope initializers");

    GeneratedMethod {
        signature: initialize.signature.clone(),
        role: MethodRole::AggregateInitializer,
        body,
    }
}

fn scoped_methods(class: &ClassDescriptor, scope: &ScopeName) -> Vec<GeneratedMethod> {
    class
        .members
        .iter()
        .filter(|m| m.is_member_of(scope))
        .map(|m| {
            tracing::trace!(method = m.name(), %scope, "Forwarding scoped method");
            GeneratedMethod::forwarding(m.signature.clone(), MethodRole::ScopedForward)
        })
        .collect()
}
