//! Snapshot tests of the treeviz rendering of sample documents

use tomlet::tomlet::formats::to_treeviz_str;
use tomlet::tomlet::processor::samples::TomlSources;
use tomlet::parse;

fn treeviz(name: &str) -> String {
    let source = TomlSources::get_string(name).unwrap();
    to_treeviz_str(&parse(&source).unwrap())
}

#[test]
fn test_sections_treeviz() {
    insta::assert_snapshot!(treeviz("010-sections.toml"), @r###"
    ├─ Field: name = "root"
    ├─ Section: owner
    │ ├─ Field: name = "Tom Preston-Werner"
    │ └─ Field: organization = "GitHub"
    ├─ Section: servers.alpha
    │ ├─ Field: ip = "10.0.0.1"
    │ └─ Field: dc = "eqdc10"
    └─ Section: servers.beta
      ├─ Field: ip = "10.0.0.2"
      └─ Field: dc = "eqdc10"
    "###);
}

#[test]
fn test_lists_treeviz() {
    insta::assert_snapshot!(treeviz("020-lists.toml"), @r###"
    ├─ Field: empty = [0 items]
    ├─ Field: ports = [3 items]
    │ ├─ Integer: 8001
    │ ├─ Integer: 8001
    │ └─ Integer: 8002
    ├─ Field: data = [2 items]
    │ ├─ List: [2 items]
    │ │ ├─ String: "gamma"
    │ │ └─ String: "delta"
    │ └─ List: [2 items]
    │   ├─ Integer: 1
    │   └─ Integer: 2
    └─ Field: hosts = [2 items]
      ├─ String: "alpha"
      └─ String: "omega"
    "###);
}
