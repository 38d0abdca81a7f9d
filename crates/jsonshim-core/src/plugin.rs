//! `CodeGeneratorRequest` → `CodeGeneratorResponse` driver.

use crate::descriptor::lower_file;
use crate::emitter::generate_all;
use crate::error::{ShimError, ShimResult};
use crate::options::PluginOptions;
use prost::Message;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use tracing::{info, warn};

/// Generate JSON shims for every file protoc asked for.
///
/// Files are processed in descriptor order. Problems with the request itself
/// (bad parameters, missing descriptors) are reported through the response's
/// `error` field, which is how protoc expects plugins to reject input.
pub fn generate(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let supported_features = Some(Feature::Proto3Optional as u64);

    match generate_files(request) {
        Ok(file) => CodeGeneratorResponse {
            supported_features,
            file,
            ..Default::default()
        },
        Err(err) => {
            warn!(error = %err, "rejecting code generation request");
            CodeGeneratorResponse {
                error: Some(err.to_string()),
                supported_features,
                ..Default::default()
            }
        }
    }
}

/// Decode an encoded `CodeGeneratorRequest` and generate its response.
pub fn generate_from_bytes(bytes: &[u8]) -> ShimResult<CodeGeneratorResponse> {
    let request = CodeGeneratorRequest::decode(bytes)?;
    Ok(generate(&request))
}

fn generate_files(request: &CodeGeneratorRequest) -> ShimResult<Vec<File>> {
    let options = PluginOptions::parse(request.parameter.as_deref())?;

    if let Some(missing) = request
        .file_to_generate
        .iter()
        .find(|name| !request.proto_file.iter().any(|f| f.name() == name.as_str()))
    {
        return Err(ShimError::UnknownFile(missing.clone()));
    }

    let schemas = request
        .proto_file
        .iter()
        .map(|proto| {
            let generate = request
                .file_to_generate
                .iter()
                .any(|name| name == proto.name());
            lower_file(proto, generate, &options)
        })
        .collect::<ShimResult<Vec<_>>>()?;

    let files = generate_all(&schemas)
        .into_iter()
        .map(|generated| {
            info!(output = %generated.filename(), "generated JSON shim file");
            File {
                name: Some(generated.filename().to_string()),
                content: Some(generated.content()),
                ..Default::default()
            }
        })
        .collect();

    Ok(files)
}
