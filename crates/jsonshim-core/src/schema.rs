//! Read-only view of a schema file and its message tree.
//!
//! These types carry exactly what the emitter needs from a parsed `.proto`
//! file. They are produced by [`crate::lower_file`] from descriptors, or built
//! directly in tests.

/// A message type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageType {
    /// Go identifier of the generated struct (e.g. `Widget_LabelsEntry`).
    pub go_name: String,

    /// Whether this is a synthetic map-entry type.
    pub map_entry: bool,

    /// Nested message declarations, in declaration order.
    pub nested: Vec<MessageType>,
}

impl MessageType {
    /// Create a plain message with no nested types.
    pub fn new(go_name: impl Into<String>) -> Self {
        Self {
            go_name: go_name.into(),
            map_entry: false,
            nested: Vec::new(),
        }
    }

    /// Create a synthetic map-entry message.
    pub fn map_entry(go_name: impl Into<String>) -> Self {
        Self {
            map_entry: true,
            ..Self::new(go_name)
        }
    }

    /// Append a nested message declaration.
    pub fn with_nested(mut self, nested: MessageType) -> Self {
        self.nested.push(nested);
        self
    }
}

/// A schema file as seen by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Path of the `.proto` file relative to the include root.
    pub name: String,

    /// Whether the host asked for output for this file.
    pub generate: bool,

    /// Go import path of the package the file belongs to.
    pub go_import_path: String,

    /// Go package name used in the `package` clause.
    pub go_package_name: String,

    /// Output path without extension; generator suffixes are appended to it.
    pub generated_filename_prefix: String,

    /// Top-level message declarations, in declaration order.
    pub messages: Vec<MessageType>,
}

impl SchemaFile {
    /// Create a file flagged for generation whose outputs sit next to the source.
    pub fn new(name: impl Into<String>, go_package_name: impl Into<String>) -> Self {
        let name = name.into();
        let generated_filename_prefix = crate::naming::trim_proto_extension(&name).to_string();
        Self {
            name,
            generate: true,
            go_import_path: String::new(),
            go_package_name: go_package_name.into(),
            generated_filename_prefix,
            messages: Vec::new(),
        }
    }

    /// Append a top-level message declaration.
    pub fn with_message(mut self, message: MessageType) -> Self {
        self.messages.push(message);
        self
    }
}
