use crate::parser::parse;
use crate::tree::{LiteralKind, NodeKind, SyntaxNode, TreeBuilder, TreePrinter};

fn build(input: &str) -> SyntaxNode {
    TreeBuilder::new(input)
        .build(&parse(input).root())
        .expect("non-empty input builds a tree")
}

fn dump(input: &str) -> String {
    build(input).dump()
}

fn dump_with_spans(input: &str) -> String {
    TreePrinter::new(&build(input)).with_spans(true).dump()
}

#[test]
fn empty_input_has_no_tree() {
    let parse = parse("");
    assert!(TreeBuilder::new("").build(&parse.root()).is_none());
}

#[test]
fn binary_nodes_carry_their_operator() {
    insta::assert_snapshot!(dump_with_spans("1 + 2 * 3"), @r#"
    Expression [0..9]
      AddSubExpr [0..9]
        LiteralExpr [0..1]
          IntegerLiteral [0..1] "1"
        Terminal [2..3] "+"
        MulDivExpr [4..9]
          LiteralExpr [4..5]
            IntegerLiteral [4..5] "2"
          Terminal [6..7] "*"
          LiteralExpr [8..9]
            IntegerLiteral [8..9] "3"
    "#);
}

#[test]
fn spans_exclude_surrounding_whitespace() {
    insta::assert_snapshot!(dump_with_spans("  [a]  >=  1 "), @r#"
    Expression [0..13]
      ComparisonExpr [2..12]
        ColumnRefExpr [2..5]
          ColumnReference [2..5] "[a]"
        Terminal [7..9] ">="
        LiteralExpr [11..12]
          IntegerLiteral [11..12] "1"
    "#);
}

#[test]
fn function_call_shape() {
    insta::assert_snapshot!(dump("SUM([a], 2)"), @r#"
    Expression
      FunctionCallExpr
        FunctionCall
          FunctionName "SUM"
          ArgumentList
            ColumnRefExpr
              ColumnReference "[a]"
            LiteralExpr
              IntegerLiteral "2"
    "#);
}

#[test]
fn call_without_arguments_has_no_argument_list() {
    insta::assert_snapshot!(dump("NOW()"), @r#"
    Expression
      FunctionCallExpr
        FunctionCall
          FunctionName "NOW"
    "#);
}

#[test]
fn paren_and_unary() {
    insta::assert_snapshot!(dump("-(2 ^ [x])"), @r#"
    Expression
      UnaryMinusExpr
        ParenExpr
          PowerExpr
            LiteralExpr
              IntegerLiteral "2"
            Terminal "^"
            ColumnRefExpr
              ColumnReference "[x]"
    "#);
}

#[test]
fn literal_kinds() {
    let cases = [
        ("'x'", LiteralKind::String),
        ("\"x\"", LiteralKind::String),
        ("12", LiteralKind::Integer),
        ("1.5", LiteralKind::Float),
        ("2e10", LiteralKind::Float),
        ("false", LiteralKind::Boolean),
    ];
    for (input, expected) in cases {
        let tree = build(input);
        let literal = tree
            .descendants()
            .find(|n| matches!(n.kind, NodeKind::Literal(_)))
            .unwrap();
        assert_eq!(literal.kind, NodeKind::Literal(expected), "input: {input}");
        assert_eq!(literal.text, input);
    }
}

#[test]
fn missing_operand_becomes_error_placeholder() {
    insta::assert_snapshot!(dump_with_spans("1 +"), @r#"
    Expression [0..3]
      AddSubExpr [0..3]
        LiteralExpr [0..1]
          IntegerLiteral [0..1] "1"
        Terminal [2..3] "+"
        Error [3..3] ""
    "#);
}

#[test]
fn trailing_input_becomes_error_child_of_root() {
    insta::assert_snapshot!(dump_with_spans("1 + + 2"), @r#"
    Expression [0..7]
      AddSubExpr [0..3]
        LiteralExpr [0..1]
          IntegerLiteral [0..1] "1"
        Terminal [2..3] "+"
        Error [3..3] ""
      Error [4..7] "+ 2"
    "#);
}

#[test]
fn text_matches_source_slice() {
    let input = "ROUND(AVG(SUM([values]), COUNT([items])))  ||  [a] != 'b'";
    let tree = build(input);
    for node in tree.descendants() {
        assert_eq!(node.text, &input[node.start..node.end], "{:?}", node.kind);
    }
}

#[test]
fn children_nest_inside_parents() {
    let input = " ( [a] + 2 ) * -3 ";
    let tree = build(input);
    for node in tree.descendants() {
        for child in &node.children {
            assert!(node.start <= child.start && child.end <= node.end);
        }
    }
}

#[test]
fn column_name_strips_brackets() {
    let tree = build("[price] + []");
    let names: Vec<_> = tree.descendants().filter_map(|n| n.column_name()).collect();
    assert_eq!(names, vec!["price", ""]);
}

#[test]
fn serializes_with_type_names() {
    let json = serde_json::to_string(&build("1")).unwrap();
    insta::assert_snapshot!(json, @r#"{"type":"Expression","text":"1","start":0,"end":1,"children":[{"type":"LiteralExpr","text":"1","start":0,"end":1,"children":[{"type":"IntegerLiteral","text":"1","start":0,"end":1,"children":[]}]}]}"#);
}

#[test]
fn spans_skip_trivia_at_both_edges() {
    let input = "  1 #\t+ 2 @ ";
    let tree = build(input);
    let sum = &tree.children[0];
    assert_eq!(sum.kind, NodeKind::AddSubExpr);
    assert_eq!((sum.start, sum.end), (2, 9));
    assert_eq!(sum.text, "1 #\t+ 2");
}

#[test]
fn long_chain_spans_follow_the_left_spine() {
    let input = format!(" {} ", vec!["[a]"; 200].join(" + "));
    let tree = build(&input);

    let mut node = &tree.children[0];
    let mut depth = 0;
    while node.kind == NodeKind::AddSubExpr {
        assert_eq!(node.start, 1);
        assert_eq!(&input[node.start..node.end], node.text);
        assert!(node.text.ends_with("[a]"));
        node = &node.children[0];
        depth += 1;
    }
    assert_eq!(depth, 199);
    assert_eq!((node.start, node.end), (1, 4));
}
