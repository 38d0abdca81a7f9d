//! Append-only Go source sink.

use std::collections::BTreeSet;

/// A Go identifier qualified by the package that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoIdent {
    /// Exported name inside the package.
    pub name: &'static str,

    /// Import path of the declaring package.
    pub import_path: &'static str,
}

impl GoIdent {
    /// Create an identifier reference.
    pub const fn new(import_path: &'static str, name: &'static str) -> Self {
        Self { name, import_path }
    }

    /// Package name used to qualify references (last import path element).
    pub fn package_name(&self) -> &'static str {
        self.import_path.rsplit('/').next().unwrap_or(self.import_path)
    }
}

/// One generated output unit.
///
/// Lines are appended in order and never rewritten. Identifiers from other
/// packages are referenced through [`GeneratedFile::qualified`], which records
/// the import; the import block is placed after the `package` clause when the
/// content is rendered.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    filename: String,
    go_import_path: String,
    lines: Vec<String>,
    imports: BTreeSet<&'static str>,
}

impl GeneratedFile {
    /// Create an empty file that will be written to `filename`.
    pub fn new(filename: impl Into<String>, go_import_path: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            go_import_path: go_import_path.into(),
            lines: Vec::new(),
            imports: BTreeSet::new(),
        }
    }

    /// Output filename, relative to the protoc output directory.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Go import path of the package this file belongs to.
    pub fn go_import_path(&self) -> &str {
        &self.go_import_path
    }

    /// Append one line.
    pub fn p(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Reference an identifier from another package, importing it on first use.
    ///
    /// Identifiers from this file's own package are returned unqualified.
    pub fn qualified(&mut self, ident: GoIdent) -> String {
        if ident.import_path == self.go_import_path {
            return ident.name.to_string();
        }
        self.imports.insert(ident.import_path);
        format!("{}.{}", ident.package_name(), ident.name)
    }

    /// Number of lines appended so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the final file content.
    pub fn content(&self) -> String {
        let mut out = String::new();
        let mut imports_written = self.imports.is_empty();

        for line in &self.lines {
            out.push_str(line);
            out.push('\n');

            if !imports_written && line.starts_with("package ") {
                out.push_str("\nimport (\n");
                for path in &self.imports {
                    let alias = path.rsplit('/').next().unwrap_or(path);
                    out.push_str(&format!("\t{alias} \"{path}\"\n"));
                }
                out.push_str(")\n");
                imports_written = true;
            }
        }

        out
    }
}
