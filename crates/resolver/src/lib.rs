//! Discovery document resolution for endpoints-client-gen
//!
//! This crate turns the user-facing inputs into the concrete work list for
//! generation:
//!
//! - authored discovery document paths (files, or directories expanded one
//!   level by the `.discovery` extension),
//! - zip archives produced by an Endpoints server build, unpacked into a
//!   managed directory and scanned with the same extension filter.
//!
//! Resolution is fail-closed: a declared path that does not exist is a
//! configuration error surfaced before any generation runs. The managed
//! extraction directory is the one exception, since it is legitimately absent
//! when no server artifacts are declared.

mod archive;
mod discovery;

pub use archive::extract_archives;
pub use discovery::{resolve_discovery_docs, scan_extracted_docs, DISCOVERY_DOC_EXTENSION};
