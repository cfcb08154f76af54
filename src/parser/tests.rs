#![cfg(test)]

use crate::lexer::{Lexer, TokenKind};
use crate::parser::{Parser, ParserError, ParserErrorKind, Node};
use crate::parser::stmt::{Program, Statement};
use crate::parser::expr::Expression;
use crate::parser::operator::{PrefixOp, InfixOp};


fn parse_program(source: &str) -> (Program, Vec<ParserError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse_program(source);
    let messages = errors.iter().map(|error| error.to_string()).collect::<Vec<_>>();
    assert!(errors.is_empty(), "parser errors for {:?}: {:?}", source, messages);
    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let (_, errors) = parse_program(source);
    errors.iter().map(|error| error.to_string()).collect()
}

fn single_expression(program: &Program) -> &Expression {
    assert_eq!(program.statements.len(), 1, "program: {}", program);
    match &program.statements[0] {
        Statement::Expression(stmt) => &stmt.expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}


#[test]
fn parser_test_let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");
    assert_eq!(program.statements.len(), 3);

    let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];
    for (stmt, (name, value)) in program.statements.iter().zip(expected.iter()) {
        assert_eq!(stmt.token_literal(), "let");
        match stmt {
            Statement::Let(stmt) => {
                assert_eq!(stmt.name.name(), *name);
                assert_eq!(stmt.value.to_string(), *value);
            }
            other => panic!("expected let statement, got {:?}", other),
        }
    }
}

#[test]
fn parser_test_return_statements() {
    let program = parse_ok("return 5; return 10; return add(x, y)");
    assert_eq!(program.statements.len(), 3);

    for stmt in program.statements.iter() {
        assert!(matches!(stmt, Statement::Return(..)));
        assert_eq!(stmt.token_literal(), "return");
    }
    assert_eq!(program.to_string(), "return 5;return 10;return add(x, y);");
}

#[test]
fn parser_test_literals() {
    let program = parse_ok("foobar;");
    assert!(matches!(single_expression(&program), Expression::Identifier(ident) if ident.name() == "foobar"));

    let program = parse_ok("5;");
    assert!(matches!(single_expression(&program), Expression::IntegerLiteral(int) if int.value == 5));

    let program = parse_ok("false");
    assert!(matches!(single_expression(&program), Expression::BooleanLiteral(b) if !b.value));

    let program = parse_ok(r#""hello world";"#);
    match single_expression(&program) {
        Expression::StringLiteral(string) => assert_eq!(string.value(), "hello world"),
        other => panic!("expected string literal, got {:?}", other),
    }
}

#[test]
fn parser_test_prefix_expressions() {
    let tests = [
        ("!5;", PrefixOp::Not, "5"),
        ("-15;", PrefixOp::Neg, "15"),
        ("!true;", PrefixOp::Not, "true"),
        ("!false;", PrefixOp::Not, "false"),
    ];

    for (source, op, right) in tests.iter() {
        let program = parse_ok(source);
        match single_expression(&program) {
            Expression::Prefix(expr) => {
                assert_eq!(expr.op, *op);
                assert_eq!(expr.right.to_string(), *right);
            }
            other => panic!("expected prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn parser_test_infix_expressions() {
    let tests = [
        ("5 + 5;", InfixOp::Add),
        ("5 - 5;", InfixOp::Sub),
        ("5 * 5;", InfixOp::Mul),
        ("5 / 5;", InfixOp::Div),
        ("5 > 5;", InfixOp::GT),
        ("5 < 5;", InfixOp::LT),
        ("5 == 5;", InfixOp::EQ),
        ("5 != 5;", InfixOp::NE),
    ];

    for (source, op) in tests.iter() {
        let program = parse_ok(source);
        match single_expression(&program) {
            Expression::Infix(expr) => {
                assert_eq!(expr.op, *op);
                assert_eq!(expr.left.to_string(), "5");
                assert_eq!(expr.right.to_string(), "5");
            }
            other => panic!("expected infix expression, got {:?}", other),
        }
    }
}

#[test]
fn parser_test_operator_precedence() {
    let tests = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true", "true"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))", "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
        ("add(a * b[2], b[1], 2 * [1, 2][1])", "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
    ];

    for (source, expected) in tests.iter() {
        let program = parse_ok(source);
        assert_eq!(program.to_string(), *expected, "source: {:?}", source);
    }
}

#[test]
fn parser_test_if_expressions() {
    let program = parse_ok("if (x < y) { x }");
    match single_expression(&program) {
        Expression::If(expr) => {
            assert_eq!(expr.condition.to_string(), "(x < y)");
            assert_eq!(expr.consequence.statements.len(), 1);
            assert!(expr.alternative.is_none());
        }
        other => panic!("expected if expression, got {:?}", other),
    }
    assert_eq!(program.to_string(), "if ((x < y)) { x; }");

    let program = parse_ok("if (x < y) { x } else { y; z }");
    match single_expression(&program) {
        Expression::If(expr) => {
            let alternative = expr.alternative.as_ref().expect("alternative");
            assert_eq!(alternative.statements.len(), 2);
        }
        other => panic!("expected if expression, got {:?}", other),
    }
    assert_eq!(program.to_string(), "if ((x < y)) { x; } else { y; z; }");
}

#[test]
fn parser_test_function_literals() {
    let program = parse_ok("fn(x, y) { x + y; }");
    match single_expression(&program) {
        Expression::Function(func) => {
            let names = func.parameters.iter().map(|param| param.name()).collect::<Vec<_>>();
            assert_eq!(names, ["x", "y"]);
            assert_eq!(func.body.statements.len(), 1);
            assert_eq!(func.body.to_string(), "{ (x + y); }");
        }
        other => panic!("expected function literal, got {:?}", other),
    }

    let tests = [
        ("fn() {};", 0),
        ("fn(x) {};", 1),
        ("fn(x, y, z) {};", 3),
    ];
    for (source, count) in tests.iter() {
        let program = parse_ok(source);
        match single_expression(&program) {
            Expression::Function(func) => assert_eq!(func.parameters.len(), *count),
            other => panic!("expected function literal, got {:?}", other),
        }
    }
}

#[test]
fn parser_test_call_expression() {
    let program = parse_ok("add(1, 2 * 3, 4 + 5);");
    match single_expression(&program) {
        Expression::Call(call) => {
            assert_eq!(call.function.to_string(), "add");
            assert_eq!(call.arguments.len(), 3);
            assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
        }
        other => panic!("expected call expression, got {:?}", other),
    }

    let program = parse_ok("noargs()");
    assert!(matches!(single_expression(&program), Expression::Call(call) if call.arguments.is_empty()));
}

#[test]
fn parser_test_list_and_index() {
    let program = parse_ok("[1, 2 * 2, 3 + 3]");
    match single_expression(&program) {
        Expression::List(list) => assert_eq!(list.elements.len(), 3),
        other => panic!("expected list literal, got {:?}", other),
    }
    assert_eq!(program.to_string(), "[1, (2 * 2), (3 + 3)]");

    let program = parse_ok("[]");
    assert!(matches!(single_expression(&program), Expression::List(list) if list.elements.is_empty()));

    let program = parse_ok("myArray[1 + 1]");
    assert_eq!(program.to_string(), "(myArray[(1 + 1)])");
}

#[test]
fn parser_test_map_literals() {
    let program = parse_ok(r#"{"one": 1, "two": 2, "three": 3}"#);
    match single_expression(&program) {
        Expression::Map(map) => {
            let keys = map.pairs.iter().map(|(key, _)| key.to_string()).collect::<Vec<_>>();
            assert_eq!(keys, [r#""one""#, r#""two""#, r#""three""#]);
        }
        other => panic!("expected map literal, got {:?}", other),
    }

    let program = parse_ok("{}");
    assert!(matches!(single_expression(&program), Expression::Map(map) if map.pairs.is_empty()));

    let program = parse_ok(r#"{"one": 0 + 1, true: 10 - 8, 3: 15 / 5}"#);
    assert_eq!(program.to_string(), r#"{"one": (0 + 1), true: (10 - 8), 3: (15 / 5)}"#);
}

#[test]
fn parser_test_error_messages() {
    assert_eq!(parse_errors("let = 5;"), [
        "expected next token to be IDENT, got = instead",
        "no prefix parse function for = found",
    ]);

    assert_eq!(parse_errors("let x 5;"), [
        "expected next token to be =, got INT instead",
    ]);

    assert_eq!(parse_errors("let 838383;"), [
        "expected next token to be IDENT, got INT instead",
    ]);

    assert_eq!(parse_errors("99999999999999999999"), [
        "could not parse \"99999999999999999999\" as integer",
    ]);

    assert_eq!(parse_errors("(1 + 2"), [
        "expected next token to be ), got EOF instead",
    ]);

    assert_eq!(parse_errors("a @ b"), [
        "no prefix parse function for ILLEGAL found",
    ]);
}

#[test]
fn parser_test_unterminated_block() {
    let errors = parse_errors("if (x) { x");
    assert_eq!(errors, ["expected next token to be }, got EOF instead"]);

    let errors = parse_errors("fn(x) { x + 1;");
    assert_eq!(errors, ["expected next token to be }, got EOF instead"]);
}

#[test]
fn parser_test_error_kinds() {
    let (_, errors) = parse_program("fn(1) { }");
    assert!(!errors.is_empty());
    assert_eq!(errors[0].kind(), &ParserErrorKind::UnexpectedToken {
        expected: TokenKind::Identifier,
        found: TokenKind::IntegerLiteral,
    });
}

#[test]
fn parser_test_recovers_after_error() {
    let (program, errors) = parse_program("let = 1; let y = 2; y");
    assert!(!errors.is_empty());

    // the statements after the malformed one are still parsed
    let text = program.to_string();
    assert!(text.ends_with("let y = 2;y"), "program: {}", text);
}

#[test]
fn parser_test_reparse_is_stable() {
    let sources = [
        "let x = 1 + 2 * 3; x",
        "let f = fn(a, b) { let c = a * b; return c - 1; }; f(2, 3)",
        "if (a < b) { a } else { if (b == c) { b } else { -c } }",
        r#"let m = {"k": [1, 2, 3], true: fn() { }}; m["k"][0]"#,
        "return !(a != b);",
        "fn(n) { if (n < 2) { return n; }; n * 2 }(5)",
    ];

    for source in sources.iter() {
        let first = parse_ok(source).to_string();
        let second = parse_ok(&first).to_string();
        assert_eq!(first, second, "source: {:?}", source);
    }
}
