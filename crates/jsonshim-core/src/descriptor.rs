//! Lowering of protobuf descriptors into the emitter's schema model.

use crate::error::{ShimError, ShimResult};
use crate::naming::{base_name, go_camel_case, go_package_name, go_sanitized, trim_proto_extension};
use crate::options::{PathsMode, PluginOptions};
use crate::schema::{MessageType, SchemaFile};
use prost_types::{DescriptorProto, FileDescriptorProto};
use tracing::debug;

/// Convert a file descriptor into a [`SchemaFile`].
///
/// The Go import path comes from an `M` mapping or `option go_package`
/// (either `path` or `path;name`). Without one, the package name falls back to
/// the proto package and output is placed next to the source file.
pub fn lower_file(
    proto: &FileDescriptorProto,
    generate: bool,
    options: &PluginOptions,
) -> ShimResult<SchemaFile> {
    let name = proto.name().to_string();

    let go_package = options
        .mapped_import_path(&name)
        .or_else(|| proto.options.as_ref().map(|o| o.go_package()))
        .unwrap_or_default();
    let (go_import_path, explicit_package) = split_go_package(go_package);

    let go_package_name = match explicit_package {
        Some(package) => go_sanitized(package),
        None if !go_import_path.is_empty() => go_package_name(go_import_path),
        None if !proto.package().is_empty() => go_sanitized(proto.package()),
        None => go_sanitized(base_name(trim_proto_extension(&name))),
    };

    // Only files protoc asked for must fit the module prefix.
    let generated_filename_prefix = match filename_prefix(&name, go_import_path, options) {
        Ok(prefix) => prefix,
        Err(err) if generate => return Err(err),
        Err(_) => trim_proto_extension(&name).to_string(),
    };

    let messages = proto
        .message_type
        .iter()
        .map(|message| lower_message(message, ""))
        .collect();

    debug!(
        file = %name,
        package = %proto.package(),
        go_import_path = %go_import_path,
        go_package_name = %go_package_name,
        "lowered file descriptor"
    );

    Ok(SchemaFile {
        name,
        generate,
        go_import_path: go_import_path.to_string(),
        go_package_name,
        generated_filename_prefix,
        messages,
    })
}

/// Lower one message; `parent` is the enclosing package-relative name.
fn lower_message(message: &DescriptorProto, parent: &str) -> MessageType {
    let relative_name = if parent.is_empty() {
        message.name().to_string()
    } else {
        format!("{parent}.{}", message.name())
    };

    MessageType {
        go_name: go_camel_case(&relative_name),
        map_entry: message.options.as_ref().is_some_and(|o| o.map_entry()),
        nested: message
            .nested_type
            .iter()
            .map(|nested| lower_message(nested, &relative_name))
            .collect(),
    }
}

/// Split `path;name` into its import path and optional package name.
fn split_go_package(go_package: &str) -> (&str, Option<&str>) {
    match go_package.split_once(';') {
        Some((path, name)) => (path, Some(name).filter(|n| !n.is_empty())),
        None => (go_package, None),
    }
}

fn filename_prefix(
    name: &str,
    go_import_path: &str,
    options: &PluginOptions,
) -> ShimResult<String> {
    let stem = trim_proto_extension(name);

    if options.paths == PathsMode::SourceRelative || go_import_path.is_empty() {
        return Ok(stem.to_string());
    }

    let prefix = format!("{go_import_path}/{}", base_name(stem));
    match options.module.as_deref() {
        None => Ok(prefix),
        Some(module) => prefix
            .strip_prefix(module)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(str::to_string)
            .ok_or_else(|| ShimError::ModulePrefix {
                file: prefix.clone(),
                module: module.to_string(),
            }),
    }
}
