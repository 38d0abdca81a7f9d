//! Naming convention utilities for Go code generation.
//!
//! All transforms here are ASCII-only and deterministic: no locale or Unicode
//! case folding takes place. Malformed input yields malformed but stable
//! output; nothing is validated.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `_my_field_name_2` | [`camel_case`] | `XMyFieldName_2` |
//! | `dir/my-file.proto` | [`file_name_prefix`] | `MyFile` |
//! | `Widget.LabelsEntry` | [`go_camel_case`] | `Widget_LabelsEntry` |
//! | `example.com/foo-bar` | [`go_package_name`] | `foo_bar` |

/// Schema-file extension removed when deriving a file prefix.
pub const PROTO_EXTENSION: &str = ".proto";

/// Convert an identifier to CamelCase.
///
/// An interior underscore followed by a lowercase letter is dropped and the
/// letter upper-cased. A leading underscore becomes `X`. Digit runs and
/// existing uppercase letters pass through, and an underscore before anything
/// other than a lowercase letter is kept.
///
/// # Examples
///
/// ```
/// use jsonshim_core::naming::camel_case;
///
/// assert_eq!(camel_case("_my_field_name_2"), "XMyFieldName_2");
/// assert_eq!(camel_case("hello_world"), "HelloWorld");
/// assert_eq!(camel_case(""), "");
/// ```
pub fn camel_case(s: &str) -> String {
    let s = s.as_bytes();
    let mut out = Vec::with_capacity(s.len() + 1);
    let mut i = 0;

    if s.first() == Some(&b'_') {
        out.push(b'X');
        i += 1;
    }

    while i < s.len() {
        let c = s[i];
        if c == b'_' && is_lower_at(s, i + 1) {
            // Word boundary only; the next letter is capitalized below.
        } else if c.is_ascii_digit() {
            out.push(c);
        } else {
            i = push_word(s, i, &mut out);
        }
        i += 1;
    }

    into_string(out)
}

/// Convert a dotted, package-relative message name into a Go identifier.
///
/// Follows the same word rules as [`camel_case`], extended for the `.`
/// separating nested message names: a `.` before a lowercase letter is
/// dropped, any other `.` becomes `_`, and an `_` directly after a `.` becomes
/// `X`.
///
/// # Examples
///
/// ```
/// use jsonshim_core::naming::go_camel_case;
///
/// assert_eq!(go_camel_case("Widget.LabelsEntry"), "Widget_LabelsEntry");
/// assert_eq!(go_camel_case("widget.meta"), "WidgetMeta");
/// assert_eq!(go_camel_case("foo_bar"), "FooBar");
/// ```
pub fn go_camel_case(s: &str) -> String {
    let s = s.as_bytes();
    let mut out = Vec::with_capacity(s.len() + 1);
    let mut i = 0;

    while i < s.len() {
        let c = s[i];
        match c {
            b'.' if is_lower_at(s, i + 1) => {}
            b'.' => out.push(b'_'),
            b'_' if i == 0 || s[i - 1] == b'.' => out.push(b'X'),
            b'_' if is_lower_at(s, i + 1) => {}
            _ if c.is_ascii_digit() => out.push(c),
            _ => i = push_word(s, i, &mut out),
        }
        i += 1;
    }

    into_string(out)
}

/// Derive the identifier prefix for a schema file's shared codec names.
///
/// Keeps the final path segment, removes every occurrence of `.proto`,
/// turns `-` and any remaining `.` into `_`, then applies [`camel_case`].
///
/// The extension is removed wherever it occurs, not only as a suffix, so
/// `legacy.proto.bak` becomes `LegacyBak`.
///
/// # Examples
///
/// ```
/// use jsonshim_core::naming::file_name_prefix;
///
/// assert_eq!(file_name_prefix("my-file.proto"), "MyFile");
/// assert_eq!(file_name_prefix("api/v1/widgets.proto"), "Widgets");
/// assert_eq!(file_name_prefix("mesh.v1alpha1.proto"), "MeshV1Alpha1");
/// ```
pub fn file_name_prefix(file_name: &str) -> String {
    let base = base_name(file_name);
    let folded = base.replace(PROTO_EXTENSION, "").replace(['-', '.'], "_");
    camel_case(&folded)
}

/// Derive a Go package name from an import path.
///
/// Uses the last path element, replacing characters that cannot appear in a
/// Go identifier with `_`. A leading digit or a Go keyword gets a `_` prefix.
///
/// # Examples
///
/// ```
/// use jsonshim_core::naming::go_package_name;
///
/// assert_eq!(go_package_name("istio.io/api/networking/v1alpha3"), "v1alpha3");
/// assert_eq!(go_package_name("example.com/foo-bar"), "foo_bar");
/// assert_eq!(go_package_name("example.com/type"), "_type");
/// ```
pub fn go_package_name(import_path: &str) -> String {
    go_sanitized(base_name(import_path))
}

/// Replace characters that are not valid in a Go identifier.
pub fn go_sanitized(s: &str) -> String {
    let mut out: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let starts_with_digit = out.starts_with(|c: char| c.is_ascii_digit());
    if out.is_empty() || starts_with_digit || GO_KEYWORDS.contains(&out.as_str()) {
        out.insert(0, '_');
    }
    out
}

/// Final `/`-separated segment of a path.
pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Remove a trailing `.proto` from a file name, if present.
pub(crate) fn trim_proto_extension(path: &str) -> &str {
    path.strip_suffix(PROTO_EXTENSION).unwrap_or(path)
}

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

fn is_lower_at(s: &[u8], i: usize) -> bool {
    s.get(i).is_some_and(u8::is_ascii_lowercase)
}

/// Emit the word starting at `i` (capitalized) plus the lowercase run after
/// it. Returns the index of the last byte consumed.
fn push_word(s: &[u8], mut i: usize, out: &mut Vec<u8>) -> usize {
    out.push(s[i].to_ascii_uppercase());
    while is_lower_at(s, i + 1) {
        i += 1;
        out.push(s[i]);
    }
    i
}

fn into_string(bytes: Vec<u8>) -> String {
    // Only ASCII bytes are ever rewritten, so multi-byte sequences survive intact.
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
