//! Kubernetes Schema Module Generator
//!
//! Compiles JSON-Schema-like definitions, extracted upstream from a
//! Kubernetes-style OpenAPI document, into one TypeScript module per
//! definition. Each module carries a serialized, reference-rewritten copy
//! of its schema and an `addSchema()` routine wiring the schema and its
//! dependencies into the runtime validator registry.
//!
//! ## Pipeline
//!
//! ```text
//! [Definition, ...]
//!     │  per definition
//!     ├── collect_refs ──► classify_ref ──► import list + registration body
//!     └── transform (rewrite $ref) ──► serialized schema constant
//!                                          │
//!                                  OutputFile (path, content)
//! ```
//!
//! The computation is pure and synchronous; definitions are processed
//! independently in input order. References are never dereferenced, only
//! rewritten, so cyclic schema graphs are handled without bookkeeping.

pub mod classify;
pub mod config;
pub mod emit;
pub mod error;
pub mod imports;
pub mod names;
pub mod schema;
pub mod walk;

pub use classify::{classify_ref, RefDomain, ResolvedImport};
pub use config::GeneratorConfig;
pub use emit::generate;
pub use error::{GenError, Result};
pub use imports::{generate_imports, Import};
pub use schema::{Definition, GroupVersionKind, OutputFile, RefValue, Schema};
pub use walk::{collect_refs, fold, transform};
