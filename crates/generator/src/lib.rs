//! Client library generation for endpoints-client-gen
//!
//! This crate drives the external Endpoints framework tool once per discovery
//! document and turns its output into compilable source:
//!
//! - [`ClientLibGenerator`] is the seam to the external tool;
//!   [`EndpointsToolGenerator`] is the production implementation.
//! - [`generate_client_libraries`] applies the clean-slate policy to the
//!   client-library directory and runs the authored pass followed by the
//!   extracted pass, aborting on the first failure.
//! - [`extract_client_sources`] derives the generated-source directory from
//!   the client-library packages, and [`SourceRegistrar`] hands it to the
//!   consuming build (standard source-root registration, or delegation to the
//!   mobile variant tooling).

mod client_libs;
mod fsops;
mod source;
mod tool;

pub use client_libs::{generate_client_libraries, GenerationSummary};
pub use source::{
    extract_client_sources, MobileVariantRegistrar, SourceRegistrar, StandardSourceRegistrar,
    MOBILE_VARIANT_TOOLING,
};
pub use tool::{ClientLibGenerator, EndpointsToolGenerator, ENDPOINTS_TOOL};
