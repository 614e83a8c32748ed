use super::{dump_cst, dump_cst_with_trivia, dump_errors};

#[test]
fn empty_input() {
    insta::assert_snapshot!(dump_cst(""), @"Root");
}

#[test]
fn single_literal() {
    insta::assert_snapshot!(dump_cst("'hello'"), @r#"
    Root
      LiteralExpr
        Literal
          StringLiteral "'hello'"
    "#);
}

#[test]
fn column_reference() {
    insta::assert_snapshot!(dump_cst("[user_id]"), @r#"
    Root
      ColumnRefExpr
        ColumnReference
          ColumnRef "[user_id]"
    "#);
}

#[test]
fn multiplication_binds_tighter() {
    insta::assert_snapshot!(dump_cst("1 + 2 * 3"), @r#"
    Root
      AddSubExpr
        LiteralExpr
          Literal
            IntegerLiteral "1"
        Plus "+"
        MulDivExpr
          LiteralExpr
            Literal
              IntegerLiteral "2"
          Star "*"
          LiteralExpr
            Literal
              IntegerLiteral "3"
    "#);
}

#[test]
fn subtraction_is_left_associative() {
    insta::assert_snapshot!(dump_cst("1 - 2 - 3"), @r#"
    Root
      AddSubExpr
        AddSubExpr
          LiteralExpr
            Literal
              IntegerLiteral "1"
          Minus "-"
          LiteralExpr
            Literal
              IntegerLiteral "2"
        Minus "-"
        LiteralExpr
          Literal
            IntegerLiteral "3"
    "#);
}

#[test]
fn power_is_right_associative() {
    insta::assert_snapshot!(dump_cst("2 ^ 3 ^ 2"), @r#"
    Root
      PowerExpr
        LiteralExpr
          Literal
            IntegerLiteral "2"
        Caret "^"
        PowerExpr
          LiteralExpr
            Literal
              IntegerLiteral "3"
          Caret "^"
          LiteralExpr
            Literal
              IntegerLiteral "2"
    "#);
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    insta::assert_snapshot!(dump_cst("-[a] ^ 2"), @r#"
    Root
      PowerExpr
        UnaryMinusExpr
          Minus "-"
          ColumnRefExpr
            ColumnReference
              ColumnRef "[a]"
        Caret "^"
        LiteralExpr
          Literal
            IntegerLiteral "2"
    "#);
}

#[test]
fn double_negation() {
    insta::assert_snapshot!(dump_cst("--1"), @r#"
    Root
      UnaryMinusExpr
        Minus "-"
        UnaryMinusExpr
          Minus "-"
          LiteralExpr
            Literal
              IntegerLiteral "1"
    "#);
}

#[test]
fn logical_precedence() {
    insta::assert_snapshot!(dump_cst("[a] > 1 && [b] || true"), @r#"
    Root
      OrExpr
        AndExpr
          ComparisonExpr
            ColumnRefExpr
              ColumnReference
                ColumnRef "[a]"
            Gt ">"
            LiteralExpr
              Literal
                IntegerLiteral "1"
          AndAnd "&&"
          ColumnRefExpr
            ColumnReference
              ColumnRef "[b]"
        OrOr "||"
        LiteralExpr
          Literal
            BooleanLiteral "true"
    "#);
}

#[test]
fn parenthesized() {
    insta::assert_snapshot!(dump_cst("(1 + 2) * 3"), @r#"
    Root
      MulDivExpr
        ParenExpr
          ParenOpen "("
          AddSubExpr
            LiteralExpr
              Literal
                IntegerLiteral "1"
            Plus "+"
            LiteralExpr
              Literal
                IntegerLiteral "2"
          ParenClose ")"
        Star "*"
        LiteralExpr
          Literal
            IntegerLiteral "3"
    "#);
}

#[test]
fn call_without_arguments() {
    insta::assert_snapshot!(dump_cst("NOW()"), @r#"
    Root
      FunctionCallExpr
        FunctionCall
          FunctionName "NOW"
          ParenOpen "("
          ParenClose ")"
    "#);
}

#[test]
fn call_with_arguments() {
    insta::assert_snapshot!(dump_cst("SUM([a], 2.5)"), @r#"
    Root
      FunctionCallExpr
        FunctionCall
          FunctionName "SUM"
          ParenOpen "("
          ArgumentList
            ColumnRefExpr
              ColumnReference
                ColumnRef "[a]"
            Comma ","
            LiteralExpr
              Literal
                FloatLiteral "2.5"
          ParenClose ")"
    "#);
}

#[test]
fn nested_calls() {
    insta::assert_snapshot!(dump_cst("ROUND(AVG([x]))"), @r#"
    Root
      FunctionCallExpr
        FunctionCall
          FunctionName "ROUND"
          ParenOpen "("
          ArgumentList
            FunctionCallExpr
              FunctionCall
                FunctionName "AVG"
                ParenOpen "("
                ArgumentList
                  ColumnRefExpr
                    ColumnReference
                      ColumnRef "[x]"
                ParenClose ")"
          ParenClose ")"
    "#);
}

#[test]
fn whitespace_is_kept_in_the_tree() {
    insta::assert_snapshot!(dump_cst_with_trivia(" 1 +  2 "), @r#"
    Root
      AddSubExpr
        Whitespace " "
        LiteralExpr
          Literal
            IntegerLiteral "1"
        Whitespace " "
        Plus "+"
        Whitespace "  "
        LiteralExpr
          Literal
            IntegerLiteral "2"
      Whitespace " "
    "#);
}

#[test]
fn whitespace_around_single_operand() {
    insta::assert_snapshot!(dump_cst_with_trivia(" 1 "), @r#"
    Root
      Whitespace " "
      LiteralExpr
        Literal
          IntegerLiteral "1"
      Whitespace " "
    "#);
}

#[test]
fn garbage_is_skipped_by_the_grammar() {
    insta::assert_snapshot!(dump_cst_with_trivia("1 +# 2"), @r##"
    Root
      AddSubExpr
        LiteralExpr
          Literal
            IntegerLiteral "1"
        Whitespace " "
        Plus "+"
        Garbage "#"
        Whitespace " "
        LiteralExpr
          Literal
            IntegerLiteral "2"
    "##);
    insta::assert_snapshot!(dump_errors("1 +# 2"), @"");
}

#[test]
fn valid_inputs_have_no_syntax_errors() {
    let inputs = [
        r#""double""#,
        "'single'",
        r#""esc\"aped""#,
        "''",
        "123",
        "1.23e4",
        "1.23E+4",
        "true",
        "false",
        "[_private]",
        "NOW()",
        "ABS(-5)",
        "MAX([a], [b])",
        "SUM([price] * [quantity]) > 1000",
        "-(2 + 3)",
        "[a] != 1",
        "[a] <= 1",
        "[a] >= 1",
        "[a] < 1",
        "[a] == \"x\"",
        "[total] + -100",
        "ROUND(AVG(SUM([values]), COUNT([items])))",
        "[]",
    ];
    for input in inputs {
        assert_eq!(dump_errors(input), "", "input: {input}");
    }
}
