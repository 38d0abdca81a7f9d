#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// camel_case tests

#[test_case("", "" ; "empty")]
#[test_case("_my_field_name_2", "XMyFieldName_2" ; "leading underscore and digit suffix")]
#[test_case("hello_world", "HelloWorld" ; "snake case")]
#[test_case("widgets", "Widgets" ; "single word")]
#[test_case("HTTPRoute", "HTTPRoute" ; "uppercase run preserved")]
#[test_case("v1alpha3", "V1Alpha3" ; "digits split words")]
#[test_case("foo__bar", "Foo_Bar" ; "double underscore keeps one")]
#[test_case("trailing_", "Trailing_" ; "trailing underscore kept")]
#[test_case("_", "X" ; "lone underscore")]
#[test_case("__x", "XX" ; "leading double underscore")]
#[test_case("a_B", "A_B" ; "underscore before uppercase kept")]
fn camel_case___converts(input: &str, expected: &str) {
    assert_eq!(camel_case(input), expected);
}

#[test]
fn camel_case___already_pascal___unchanged() {
    assert_eq!(camel_case("WidgetMeta"), "WidgetMeta");
    assert_eq!(camel_case(&camel_case("WidgetMeta")), "WidgetMeta");
}

#[test]
fn camel_case___non_identifier_bytes___pass_through() {
    // A non-letter still opens a word, so the lowercase run after it is copied as-is.
    assert_eq!(camel_case("a$b"), "A$b");
    assert_eq!(camel_case("é_x"), "éX");
}

// go_camel_case tests

#[test_case("Widget", "Widget" ; "top level")]
#[test_case("Widget.LabelsEntry", "Widget_LabelsEntry" ; "nested map entry")]
#[test_case("Widget.WidgetMeta", "Widget_WidgetMeta" ; "nested uppercase")]
#[test_case("widget.meta", "WidgetMeta" ; "dot before lowercase dropped")]
#[test_case("Outer._inner", "Outer_XInner" ; "underscore after dot")]
#[test_case("_private", "XPrivate" ; "leading underscore")]
#[test_case("a.b.C", "AB_C" ; "mixed depth")]
fn go_camel_case___converts(input: &str, expected: &str) {
    assert_eq!(go_camel_case(input), expected);
}

// file_name_prefix tests

#[test_case("widgets.proto", "Widgets" ; "plain")]
#[test_case("my-file.proto", "MyFile" ; "hyphen")]
#[test_case("api/v1/my-file.proto", "MyFile" ; "directory stripped")]
#[test_case("mesh.v1alpha1.proto", "MeshV1Alpha1" ; "interior dot")]
#[test_case("legacy.proto.bak", "LegacyBak" ; "interior extension removed")]
#[test_case("noext", "Noext" ; "no extension")]
#[test_case("", "" ; "empty")]
#[test_case("_internal.proto", "XInternal" ; "leading underscore")]
fn file_name_prefix___derives(input: &str, expected: &str) {
    assert_eq!(file_name_prefix(input), expected);
}

#[test]
fn file_name_prefix___directory_prefix___does_not_change_result() {
    assert_eq!(
        file_name_prefix("networking/v1alpha3/virtual_service.proto"),
        file_name_prefix("virtual_service.proto")
    );
}

#[test]
fn file_name_prefix___consecutive_separators___not_collapsed() {
    // "a--b" folds to "a__b"; the first '_' survives because it precedes '_'.
    assert_eq!(file_name_prefix("a--b.proto"), "A_B");
}

// go_package_name tests

#[test_case("istio.io/api/networking/v1alpha3", "v1alpha3" ; "versioned")]
#[test_case("example.com/foo-bar", "foo_bar" ; "hyphen sanitized")]
#[test_case("example.com/type", "_type" ; "keyword")]
#[test_case("example.com/3d", "_3d" ; "leading digit")]
#[test_case("widgets", "widgets" ; "bare")]
fn go_package_name___derives(input: &str, expected: &str) {
    assert_eq!(go_package_name(input), expected);
}

#[test]
fn go_sanitized___empty___becomes_underscore() {
    assert_eq!(go_sanitized(""), "_");
}

// path helpers

#[test]
fn base_name___keeps_last_segment() {
    assert_eq!(base_name("a/b/c.proto"), "c.proto");
    assert_eq!(base_name("c.proto"), "c.proto");
}

#[test]
fn trim_proto_extension___only_strips_suffix() {
    assert_eq!(trim_proto_extension("a/b/c.proto"), "a/b/c");
    assert_eq!(trim_proto_extension("c.proto.bak"), "c.proto.bak");
}
