//! MarshalJSON/UnmarshalJSON shim emission for one schema file.

use crate::generated::{GeneratedFile, GoIdent};
use crate::naming::file_name_prefix;
use crate::schema::{MessageType, SchemaFile};
use tracing::debug;

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by protoc-gen-jsonshim. DO NOT EDIT.";

/// Suffix appended to a file's generated filename prefix.
pub const OUTPUT_SUFFIX: &str = "_json.gen.go";

const BYTES_NEW_READER: GoIdent = GoIdent::new("bytes", "NewReader");
const JSONPB_MARSHALER: GoIdent = GoIdent::new("github.com/golang/protobuf/jsonpb", "Marshaler");
const JSONPB_UNMARSHALER: GoIdent =
    GoIdent::new("github.com/golang/protobuf/jsonpb", "Unmarshaler");

/// Generate the JSON shim file for a schema file.
///
/// Emits one `MarshalJSON`/`UnmarshalJSON` pair per eligible message, in
/// declaration pre-order, followed by the file's shared codec declarations.
pub fn generate_file(file: &SchemaFile) -> GeneratedFile {
    let filename = format!("{}{}", file.generated_filename_prefix, OUTPUT_SUFFIX);
    let mut out = GeneratedFile::new(filename, file.go_import_path.as_str());

    let prefix = file_name_prefix(&file.name);
    let codecs = Codecs {
        marshaler: format!("{prefix}Marshaler"),
        unmarshaler: format!("{prefix}Unmarshaler"),
    };

    out.p(HEADER);
    out.p(format!("package {}", file.go_package_name));

    let messages = eligible_messages(&file.messages);
    for message in &messages {
        debug!(file = %file.name, message = %message.go_name, "emitting JSON shim");
        emit_methods(&mut out, message, &codecs);
    }

    emit_codecs(&mut out, &codecs);

    debug!(
        file = %file.name,
        methods = messages.len() * 2,
        "generated {}",
        out.filename()
    );
    out
}

/// Generate shim files for every schema file flagged for generation.
///
/// Output order follows input order; unflagged files produce nothing.
pub fn generate_all(files: &[SchemaFile]) -> Vec<GeneratedFile> {
    files
        .iter()
        .filter(|file| file.generate)
        .map(generate_file)
        .collect()
}

/// Messages that receive generated methods, in depth-first pre-order.
///
/// Map-entry types are skipped together with everything nested under them.
pub fn eligible_messages(messages: &[MessageType]) -> Vec<&MessageType> {
    let mut found = Vec::new();
    collect_eligible(messages, &mut found);
    found
}

fn collect_eligible<'a>(messages: &'a [MessageType], found: &mut Vec<&'a MessageType>) {
    for message in messages {
        if message.map_entry {
            continue;
        }
        found.push(message);
        collect_eligible(&message.nested, found);
    }
}

/// File-scoped codec variable names.
struct Codecs {
    marshaler: String,
    unmarshaler: String,
}

fn emit_methods(out: &mut GeneratedFile, message: &MessageType, codecs: &Codecs) {
    let name = &message.go_name;

    out.blank();
    out.p(format!("// MarshalJSON is a custom marshaler for {name}"));
    out.p(format!("func (this *{name}) MarshalJSON() ([]byte, error) {{"));
    out.p(format!("\tstr, err := {}.MarshalToString(this)", codecs.marshaler));
    out.p("\treturn []byte(str), err");
    out.p("}");

    let new_reader = out.qualified(BYTES_NEW_READER);
    out.blank();
    out.p(format!("// UnmarshalJSON is a custom unmarshaler for {name}"));
    out.p(format!("func (this *{name}) UnmarshalJSON(b []byte) error {{"));
    out.p(format!(
        "\treturn {}.Unmarshal({new_reader}(b), this)",
        codecs.unmarshaler
    ));
    out.p("}");
}

fn emit_codecs(out: &mut GeneratedFile, codecs: &Codecs) {
    let marshaler = out.qualified(JSONPB_MARSHALER);
    let unmarshaler = out.qualified(JSONPB_UNMARSHALER);

    // gofmt aligns the `=` of consecutive specs in a var block.
    let width = codecs.marshaler.len().max(codecs.unmarshaler.len());

    out.blank();
    out.p("var (");
    out.p(format!("\t{:<width$} = &{marshaler}{{}}", codecs.marshaler));
    out.p(format!(
        "\t{:<width$} = &{unmarshaler}{{AllowUnknownFields: true}}",
        codecs.unmarshaler
    ));
    out.p(")");
}
