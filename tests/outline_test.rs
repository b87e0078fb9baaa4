//! Integration tests for outline building from pandoc JSON.

use pandoc_opml::{build_outline, parse_json, Outline, OutlineNode};
use serde_json::{json, Value};

fn str_(s: &str) -> Value {
    json!({"t": "Str", "c": s})
}

fn plain(s: &str) -> Value {
    json!({"t": "Plain", "c": [str_(s)]})
}

fn para(s: &str) -> Value {
    json!({"t": "Para", "c": [str_(s)]})
}

fn header(level: u64, s: &str) -> Value {
    json!({"t": "Header", "c": [level, ["", [], []], [str_(s)]]})
}

fn outline_of(blocks: Value) -> Outline {
    let doc = json!({"pandoc-api-version": [1, 23], "meta": {}, "blocks": blocks});
    let doc = parse_json(&doc.to_string()).unwrap();
    build_outline(&doc.blocks)
}

fn texts(nodes: &[OutlineNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.text.as_str()).collect()
}

#[test]
fn test_single_paragraph_is_single_root() {
    let outline = outline_of(json!([para("alone")]));
    assert_eq!(outline.roots.len(), 1);
    assert!(outline.roots[0].children.is_empty());
}

#[test]
fn test_headers_and_paragraph_form_chain() {
    let outline = outline_of(json!([header(1, "A"), header(2, "B"), para("C")]));

    assert_eq!(texts(&outline.roots), vec!["A"]);
    let b = &outline.roots[0].children[0];
    assert_eq!(b.text, "B");
    assert_eq!(texts(&b.children), vec!["C"]);
    assert_eq!(outline.total_nodes(), 3);
}

#[test]
fn test_list_after_lead_paragraph() {
    let outline = outline_of(json!([
        header(1, "Section"),
        para("X"),
        {"t": "BulletList", "c": [[plain("Y")], [plain("Z")]]}
    ]));

    let section = &outline.roots[0];
    assert_eq!(texts(&section.children), vec!["X", "Y", "Z"]);
    assert!(section.children[0].children.is_empty());
}

#[test]
fn test_nested_list_inside_item() {
    let outline = outline_of(json!([
        {"t": "BulletList", "c": [[
            plain("A"),
            {"t": "BulletList", "c": [[plain("B")]]}
        ]]}
    ]));

    assert_eq!(texts(&outline.roots), vec!["A"]);
    assert_eq!(texts(&outline.roots[0].children), vec!["B"]);
}

#[test]
fn test_ordered_list_start_value() {
    let outline = outline_of(json!([
        {"t": "OrderedList", "c": [
            [5, {"t": "Decimal"}, {"t": "Period"}],
            [[plain("five")], [plain("six")], [plain("seven")]]
        ]}
    ]));

    for (node, ordinal) in outline.roots.iter().zip(["5", "6", "7"]) {
        assert_eq!(node.attr("ordinal"), Some(ordinal));
        assert_eq!(node.attr("list"), Some("ordered"));
    }
    assert_eq!(outline.roots.len(), 3);
}

#[test]
fn test_header_attributes_from_json() {
    let outline = outline_of(json!([
        {"t": "Header", "c": [2, ["todo", ["urgent", "work"], [["due", "friday"]]], [str_("Tasks")]]}
    ]));

    let node = &outline.roots[0];
    assert_eq!(node.attr("level"), Some("2"));
    assert_eq!(node.attr("name"), Some("todo"));
    assert_eq!(node.attr("urgent"), Some("true"));
    assert_eq!(node.attr("work"), Some("true"));
    assert_eq!(node.attr("due"), Some("friday"));
}

#[test]
fn test_unknown_tags_do_not_leak() {
    let outline = outline_of(json!([
        {"t": "HorizontalRule"},
        {"t": "Para", "c": [
            str_("E"),
            {"t": "Math", "c": [{"t": "InlineMath"}, "mc^2"]},
            {"t": "Space"},
            {"t": "Emph", "c": [str_("really")]},
            {"t": "RawInline", "c": ["html", "<br>"]}
        ]},
        {"t": "CodeBlock", "c": [["", [], []], "secret code"]}
    ]));

    assert_eq!(texts(&outline.roots), vec!["E <em>really</em>"]);
}

#[test]
fn test_loose_list_items_are_paragraphs() {
    let outline = outline_of(json!([
        {"t": "BulletList", "c": [[para("one")], [para("two")]]}
    ]));

    assert_eq!(texts(&outline.roots), vec!["one", "two"]);
    assert!(outline
        .roots
        .iter()
        .all(|node| node.attr("list") == Some("unordered")));
}

#[test]
fn test_legacy_layout_builds_same_outline() {
    let legacy = format!(
        "[{{\"unMeta\": {{}}}}, {}]",
        json!([header(1, "A"), plain("b")])
    );
    let doc = parse_json(&legacy).unwrap();
    let outline = build_outline(&doc.blocks);

    assert_eq!(outline, outline_of(json!([header(1, "A"), plain("b")])));
}

#[test]
fn test_skipped_level_after_new_section_keeps_stale_parent() {
    let outline = outline_of(json!([
        header(1, "A"),
        header(2, "B"),
        header(1, "X"),
        header(3, "Y")
    ]));

    let text = pandoc_opml::render::to_text(&outline, &Default::default()).unwrap();
    assert_eq!(text, "A\n  B\n    Y\nX\n");
}
