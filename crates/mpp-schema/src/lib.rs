//! # mpp-schema — Endpoint contracts for the Mon Petit Placement API
//!
//! Declares, for every endpoint the client supports, what a caller passes
//! in and what the backend must send back, and validates response bodies
//! against those declarations.
//!
//! - [`Shape`]: `const` structural descriptors (objects, arrays, records,
//!   nullable values, unions).
//! - [`SchemaRegistry`]: compiles shapes to JSON Schema and reports every
//!   violation of a body with its full field path.
//! - [`EndpointDescriptor`] / [`Endpoint`]: one immutable descriptor per
//!   endpoint, paired with the Rust type its output decodes into.
//! - [`registry::ENDPOINTS`]: the full table.
//!
//! The crate performs no I/O.

pub mod auth;
pub mod endpoint;
pub mod hydra;
pub mod investment_account;
pub mod path;
pub mod public;
pub mod registry;
pub mod remote_error;
pub mod shape;
pub mod v1;
pub mod validate;

pub use endpoint::{
    Endpoint, EndpointDescriptor, Facade, HttpMethod, PathTemplateError, UnknownFacade,
};
pub use path::{FieldPath, PathSegment};
pub use remote_error::{RemoteErrorPayload, REMOTE_ERROR};
pub use shape::{Field, Shape};
pub use validate::{
    BranchFailure, SchemaRegistry, SchemaValidationError, ValidationViolations, Violation,
    ViolationKind,
};
