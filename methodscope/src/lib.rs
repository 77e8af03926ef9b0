//! MethodScope — scoped subclass generation for annotated classes.
//!
//! This facade crate re-exports `methodscope-core` through a single
//! dependency. Import everything you need with:
//!
//! ```ignore
//! use methodscope::prelude::*;
//!
//! let class = ClassDescriptor::new("MainActivity")
//!     .with_method(MethodDescriptor::new("initializeScopes"))
//!     .with_method(
//!         MethodDescriptor::new("setUpFoo")
//!             .with_annotation(AnnotationDescriptor::new("InitFooScope")),
//!     );
//! let scope = ScopeName::new("Foo")?;
//! let generated = ScopeEmitter::default().emit(&class, &scope, "com.example");
//! assert_eq!(generated.name, "MainActivityScopeFoo");
//! ```
//!
//! The model resolver that produces descriptors and the writer that renders
//! a [`GeneratedClass`] into source text live outside this crate.

pub extern crate methodscope_core;

pub use methodscope_core::*;

pub mod prelude {
    //! Everything needed to describe a class and emit its scoped subclasses.

    pub use methodscope_core::{
        emit, AnnotationDescriptor, AnnotationKind, AnnotationValue, ClassDescriptor,
        GeneratedClass, GeneratedMethod, GeneratorConfig, MethodDescriptor, MethodRole,
        MethodSignature, ScopeEmitter, ScopeName, Statement,
    };
}
