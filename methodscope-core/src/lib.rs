pub mod config;
pub mod emitter;
pub mod error;
pub mod generated;
pub mod model;
pub mod scope;

pub use config::GeneratorConfig;
pub use emitter::{emit, ScopeEmitter, INITIALIZE_SCOPES};
pub use error::{ConfigError, ScopeError};
pub use generated::{GeneratedClass, GeneratedMethod, MethodRole, Statement};
pub use model::{
    AnnotationDescriptor, AnnotationKind, AnnotationMember, AnnotationValue, ClassDescriptor,
    MethodDescriptor, MethodSignature, Parameter,
};
pub use scope::ScopeName;
