//! Whole-grammar tests for the parsing module.
//!
//! Parsed trees are compared as indented outlines (see `normalize`) using
//! inline snapshots. Every input is also run through `invariants::check`.

mod normalize;

use crate::parsing::parse_container;

fn assert_outline(source: &str) -> String {
    invariants::check(source);
    normalize::outline(&parse_container(source))
}

#[test]
fn title_paragraph_list_and_code() {
    let source = "# Title\n\nHello *world*\n\n- a\n- b\n\n```sh\necho hi\n```\n";
    insta::assert_snapshot!(assert_outline(source), @r#"
    Heading(1) "Title"
    Paragraph "Hello *world*"
    List(unordered, tight, start=1)
      Item
        Paragraph "a"
      Item
        Paragraph "b"
    CodeBlock(fenced '`', language="sh", style="") "echo hi\n"
    "#);
}

#[test]
fn indented_code_inside_list_item_is_code_not_nesting() {
    let source = "- item\n\n      code\n      - not a list\n";
    insta::assert_snapshot!(assert_outline(source), @r#"
    List(unordered, loose, start=1)
      Item
        Paragraph "item"
        CodeBlock(indented, language="", style="") "code\n- not a list\n"
    "#);
}

#[test]
fn nested_lists() {
    let source = "1. one\n   - inner\n   - inner too\n2. two\n";
    insta::assert_snapshot!(assert_outline(source), @r#"
    List(ordered, tight, start=1)
      Item
        Paragraph "one"
        List(unordered, tight, start=1)
          Item
            Paragraph "inner"
          Item
            Paragraph "inner too"
      Item
        Paragraph "two"
    "#);
}

#[test]
fn blank_line_between_items_makes_list_loose() {
    let source = "- a\n\n- b\n";
    insta::assert_snapshot!(assert_outline(source), @r#"
    List(unordered, loose, start=1)
      Item
        Paragraph "a"
      Item
        Paragraph "b"
    "#);
}

#[test]
fn different_list_kind_starts_new_list() {
    let source = "- a\n1. b\n";
    insta::assert_snapshot!(assert_outline(source), @r#"
    List(unordered, tight, start=1)
      Item
        Paragraph "a"
    List(ordered, tight, start=1)
      Item
        Paragraph "b"
    "#);
}

#[test]
fn quote_containing_blocks() {
    let source = "> # Quoted\n> text\n>\n> ```\n> code\n> ```\nafter\n";
    insta::assert_snapshot!(assert_outline(source), @r#"
    BlockQuote
      Heading(1) "Quoted"
      Paragraph "text"
      CodeBlock(fenced '`', language="", style="") "code\n"
    Paragraph "after"
    "#);
}

#[test]
fn unterminated_fence_runs_to_end() {
    let source = "~~~\nnever\n\nclosed\n";
    insta::assert_snapshot!(assert_outline(source), @r#"
    CodeBlock(fenced '~', language="", style="") "never\n\nclosed\n"
    "#);
}

#[test]
fn setext_headings_and_rules() {
    let source = "Top\n===\n\nSub\n---\n\n---\n";
    insta::assert_snapshot!(assert_outline(source), @r#"
    Heading(1) "Top"
    Heading(2) "Sub"
    HorizontalRule
    "#);
}

#[test]
fn invariants_hold_for_mixed_input() {
    invariants::check(
        "# h\n\n> - a\n>   b\n\n1. x\n\n   y\n2) z\n\n    code\n\n<!--\nc\n-->\n| a |\n|---|\n",
    );
    invariants::check("- \n-\n>\n```\n");
    invariants::check("");
}
