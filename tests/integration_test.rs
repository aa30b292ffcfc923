// Integration tests for the minipy front end

use minipy::parser::ast::{BinOp, Block, Expr, Literal, Stmt};
use minipy::parser::lexer::{tokenize, TokenKind};
use minipy::parser::parse;
use minipy::visitor::{print_program, NodeStats};
use num_bigint::BigInt;

const ALL_FEATURES: &str = r#"
var x = 10;
var y = x * 2 + 5;

if (x > y) {
    print("x is greater");
} else {
    print("y is greater or equal");
}

while (x < 100) {
    x = x + 10;
}

def multiply(a, b) {
    return a * b;
}

result = multiply(5, 3);
"#;

const NESTED: &str = r#"
var i = 0;
var j = 0;

while (i < 3) {
    j = 0;
    while (j < 3) {
        if (i == j) {
            print("Diagonal");
        } else {
            if (i > j) {
                print("Below diagonal");
            } else {
                print("Above diagonal");
            }
        }
        j = j + 1;
    }
    i = i + 1;
}

def factorial(n) {
    if (n == 0) {  # base case
        return 1;
    } else {
        return n * factorial(n - 1);
    }
}
"#;

const EXPRESSIONS: &str = r#"
# Complex arithmetic
var a = 10 * (2 + 3) - 4 / 2;
var b = -a + 5 * 2;

# Nested function calls
def max(x, y) {
    if (x > y) {
        return x;
    } else {
        return y;
    }
}

def min(x, y) {
    if (x < y) {
        return x;
    } else {
        return y;
    }
}

result = max(min(10, 20), min(15, 25));
print("Result is: ", result);

# Chained comparisons
if (a > 0 && a < 100) {
    print("a is between 0 and 100");
}
"#;

#[test]
fn test_tokenize_var_declaration() {
    let kinds: Vec<TokenKind> = tokenize("var x = 10;")
        .expect("Lexing failed")
        .into_iter()
        .map(|t| t.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Ident("x".to_string()),
            TokenKind::Assign,
            TokenKind::IntLiteral(BigInt::from(10)),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_token_stream_ends_with_single_eof() {
    for source in [ALL_FEATURES, NESTED, EXPRESSIONS, "", "   \n# only a comment\n"] {
        let tokens = tokenize(source).expect("Lexing failed");
        let eof_count = tokens.iter().filter(|t| t.is_eof()).count();

        assert_eq!(eof_count, 1);
        assert!(tokens.last().is_some_and(|t| t.is_eof()));
    }
}

#[test]
fn test_all_features_program() {
    let outcome = parse(ALL_FEATURES).expect("Lexing failed");

    assert!(!outcome.had_errors(), "{:?}", outcome.diagnostics);
    assert_eq!(outcome.program.statements.len(), 6);
    assert!(matches!(
        &outcome.program.statements[5],
        Stmt::Assignment { name, value: Expr::Call { callee, args } }
            if name == "result" && callee == "multiply" && args.len() == 2
    ));
}

#[test]
fn test_nested_program() {
    let outcome = parse(NESTED).expect("Lexing failed");

    assert!(!outcome.had_errors(), "{:?}", outcome.diagnostics);
    assert_eq!(outcome.program.statements.len(), 4);

    let stats = NodeStats::collect(&outcome.program);
    assert_eq!(stats.count("WhileStatement"), 2);
    assert_eq!(stats.count("IfStatement"), 3);
    assert_eq!(stats.count("FunctionDeclaration"), 1);
}

#[test]
fn test_expressions_program() {
    let outcome = parse(EXPRESSIONS).expect("Lexing failed");

    assert!(!outcome.had_errors(), "{:?}", outcome.diagnostics);
    assert_eq!(outcome.program.statements.len(), 7);

    // a = (10 * (2 + 3)) - (4 / 2)
    match &outcome.program.statements[0] {
        Stmt::VarDeclaration { value, .. } => assert_eq!(
            value,
            &Expr::binary(
                Expr::binary(
                    Expr::int(10),
                    BinOp::Mul,
                    Expr::binary(Expr::int(2), BinOp::Add, Expr::int(3)),
                ),
                BinOp::Sub,
                Expr::binary(Expr::int(4), BinOp::Div, Expr::int(2)),
            )
        ),
        other => panic!("Expected var declaration, got {:?}", other),
    }

    // && joins the two comparisons
    match &outcome.program.statements[6] {
        Stmt::If { condition: Expr::BinaryOp { op, .. }, .. } => assert_eq!(*op, BinOp::And),
        other => panic!("Expected if statement, got {:?}", other),
    }
}

#[test]
fn test_else_if_becomes_single_statement_block() {
    let outcome = parse("if (a) { 1; } else if (b) { 2; }").expect("Lexing failed");

    assert!(!outcome.had_errors());
    match &outcome.program.statements[0] {
        Stmt::If {
            else_block: Some(Block { statements }),
            ..
        } => {
            assert_eq!(statements.len(), 1);
            assert!(matches!(statements[0], Stmt::If { .. }));
        }
        other => panic!("Expected if with else, got {:?}", other),
    }
}

#[test]
fn test_parsing_is_deterministic() {
    for source in [ALL_FEATURES, NESTED, EXPRESSIONS] {
        let first = parse(source).expect("Lexing failed");
        let second = parse(source).expect("Lexing failed");

        assert_eq!(first.program, second.program);
        assert_eq!(print_program(&first.program), print_program(&first.program));
        assert_eq!(print_program(&first.program), print_program(&second.program));
    }
}

#[test]
fn test_wide_integer_literal_survives_to_printer() {
    let outcome = parse("var big = 99999999999999999999;").expect("Lexing failed");

    assert!(!outcome.had_errors(), "{:?}", outcome.diagnostics);
    let expected: BigInt = "99999999999999999999".parse().unwrap();
    assert_eq!(
        outcome.program.statements[0],
        Stmt::VarDeclaration {
            name: "big".to_string(),
            value: Expr::Literal(Literal::Integer(expected)),
        }
    );
    assert_eq!(
        print_program(&outcome.program),
        "Program:\n  VarDeclaration: big\n    Value:\n      IntegerLiteral: 99999999999999999999\n"
    );
}

#[test]
fn test_lex_error_is_fatal() {
    let err = parse("var s = \"unterminated;\n").unwrap_err();

    assert_eq!(err.message, "Unterminated string literal");
    assert_eq!(err.location.line, 1);
    assert_eq!(err.location.column, 9);
}

#[test]
fn test_grammar_sample_prints_stably() {
    let source = r#"
var x = -1.5;
def add(a, b) { return a + b; }
if (x >= 0 || x == 2) { x = add(x, 1); } else if (x != 3) { print("neg"); } else { x = 0; }
while (x <= 10) { x = x * 2 / 1; }
"#;

    let expected = "\
Program:
  VarDeclaration: x
    Value:
      UnaryOp: -
        FloatLiteral: 1.5
  FunctionDeclaration: add
    Parameters: a, b
    Body:
      Block:
        ReturnStatement:
          BinaryOp: +
            Left:
              Identifier: a
            Right:
              Identifier: b
  IfStatement:
    Condition:
      BinaryOp: ||
        Left:
          BinaryOp: >=
            Left:
              Identifier: x
            Right:
              IntegerLiteral: 0
        Right:
          BinaryOp: ==
            Left:
              Identifier: x
            Right:
              IntegerLiteral: 2
    Then:
      Block:
        Assignment: x
          Value:
            CallExpression: add
              Arguments:
                Identifier: x
                IntegerLiteral: 1
    Else:
      Block:
        IfStatement:
          Condition:
            BinaryOp: !=
              Left:
                Identifier: x
              Right:
                IntegerLiteral: 3
          Then:
            Block:
              ExpressionStatement:
                CallExpression: print
                  Arguments:
                    StringLiteral: neg
          Else:
            Block:
              Assignment: x
                Value:
                  IntegerLiteral: 0
  WhileStatement:
    Condition:
      BinaryOp: <=
        Left:
          Identifier: x
        Right:
          IntegerLiteral: 10
    Body:
      Block:
        Assignment: x
          Value:
            BinaryOp: /
              Left:
                BinaryOp: *
                  Left:
                    Identifier: x
                  Right:
                    IntegerLiteral: 2
              Right:
                IntegerLiteral: 1
";

    let outcome = parse(source).expect("Lexing failed");
    assert!(!outcome.had_errors(), "{:?}", outcome.diagnostics);
    assert_eq!(print_program(&outcome.program), expected);
}
