//! jsonshim-core - Go JSON shim generation for protobuf messages
//!
//! This crate provides:
//! - [`naming`] identifier transforms used to derive generated Go names
//! - [`SchemaFile`] and [`MessageType`], the read-only view of a schema file
//! - [`generate_file`] which walks one schema file and emits its shim source
//! - [`generate`] / [`generate_from_bytes`] which drive a whole
//!   `CodeGeneratorRequest` into a `CodeGeneratorResponse`
//!
//! For every non-map message the generated Go file carries a `MarshalJSON`
//! and an `UnmarshalJSON` method delegating to a pair of file-scoped
//! `jsonpb` codec instances:
//!
//! ```text
//! widgets.proto
//!     ↓
//!  [descriptor]  FileDescriptorProto → SchemaFile
//!     ↓
//!  [emitter]     SchemaFile → GeneratedFile
//!     ↓
//!  widgets_json.gen.go
//! ```

mod descriptor;
mod emitter;
mod error;
mod generated;
pub mod naming;
mod options;
mod plugin;
mod schema;

pub use descriptor::lower_file;
pub use emitter::{HEADER, OUTPUT_SUFFIX, eligible_messages, generate_all, generate_file};
pub use error::{ShimError, ShimResult};
pub use generated::{GeneratedFile, GoIdent};
pub use options::{PathsMode, PluginOptions};
pub use plugin::{generate, generate_from_bytes};
pub use schema::{MessageType, SchemaFile};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GeneratedFile, MessageType, PluginOptions, SchemaFile, ShimError, ShimResult, generate,
        generate_all, generate_file,
    };
}
