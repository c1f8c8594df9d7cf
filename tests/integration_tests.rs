//! Integration tests for the front end.
//!
//! These tests drive whole sources through the public API: lexing, parsing
//! into top-level constructs, diagnostics, and handing trees to a back end
//! through the visitor.

use kaleidoscope::{
    ast::{
        ast::{Expr, Function, Prototype, TopLevel},
        visitor::ExprVisitor,
    },
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
    render_error,
};

/// Counts call sites, standing in for a lowering pass.
struct CallCounter(usize);

impl ExprVisitor for CallCounter {
    type Output = ();

    fn visit_number(&mut self, _value: f64) {}

    fn visit_variable(&mut self, _name: &str) {}

    fn visit_binary(&mut self, _operator: char, left: &Expr, right: &Expr) {
        left.accept(self);
        right.accept(self);
    }

    fn visit_call(&mut self, _callee: &str, arguments: &[Expr]) {
        self.0 += 1;
        for argument in arguments {
            argument.accept(self);
        }
    }

    fn visit_if(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) {
        condition.accept(self);
        then_branch.accept(self);
        else_branch.accept(self);
    }

    fn visit_for(
        &mut self,
        _variable: &str,
        start: &Expr,
        end: &Expr,
        step: Option<&Expr>,
        body: &Expr,
    ) {
        start.accept(self);
        end.accept(self);
        if let Some(step) = step {
            step.accept(self);
        }
        body.accept(self);
    }
}

const PROGRAM: &str = "
extern putchard(char);

def fib(x)
  if x < 3 then
    1
  else
    fib(x-1)+fib(x-2);

def printstar(n)
  for i = 1, i < n, 1.0 in
    putchard(42);

fib(10);
";

#[test]
fn test_parse_whole_program() {
    let (items, errors) = parse(PROGRAM.to_string(), Some("fib.ks".to_string()));

    assert!(errors.is_empty());
    assert_eq!(items.len(), 4);

    assert_eq!(
        items[0],
        TopLevel::Extern(Prototype::new(
            String::from("putchard"),
            vec![String::from("char")]
        ))
    );
    assert_eq!(
        items[1].to_string(),
        "(def fib(x) (if (< x 3) 1 (+ (call fib (- x 1)) (call fib (- x 2)))))"
    );
    assert_eq!(
        items[2].to_string(),
        "(def printstar(n) (for i 1 (< i n) 1 (call putchard 42)))"
    );
    assert_eq!(items[3].to_string(), "(def __anon_expr() (call fib 10))");
}

#[test]
fn test_visitor_over_parsed_program() {
    let (items, _) = parse(PROGRAM.to_string(), None);

    let mut counter = CallCounter(0);
    for item in &items {
        if let TopLevel::Definition(function) | TopLevel::Expression(function) = item {
            function.body.accept(&mut counter);
        }
    }

    assert_eq!(counter.0, 4);
}

#[test]
fn test_spec_examples() {
    let mut parser = Parser::new("def foo(a b) a+b".to_string(), None);
    assert_eq!(
        parser.parse_definition(),
        Some(Function::new(
            Prototype::new(String::from("foo"), vec![String::from("a"), String::from("b")]),
            Expr::binary('+', Expr::variable("a"), Expr::variable("b")),
        ))
    );

    let mut parser = Parser::new("extern sin(x)".to_string(), None);
    assert_eq!(
        parser.parse_top_level(),
        Some(TopLevel::Extern(Prototype::new(
            String::from("sin"),
            vec![String::from("x")]
        )))
    );

    let mut parser = Parser::new("1+2".to_string(), None);
    let function = parser.parse_top_level_expr().unwrap();
    assert!(function.is_anonymous());
    assert_eq!(
        function.body,
        Expr::binary('+', Expr::Number(1.0), Expr::Number(2.0))
    );
}

#[test]
fn test_failed_construct_leaves_session_recoverable() {
    let mut parser = Parser::new("def foo( ; 4".to_string(), Some("bad.ks".to_string()));

    assert_eq!(parser.parse_definition(), None);
    assert_eq!(parser.diagnostics().len(), 1);
    assert_eq!(parser.current_token_kind(), TokenKind::Other(';'));

    // Caller-driven recovery: skip one token and carry on.
    parser.advance();
    let function = parser.parse_top_level_expr().unwrap();
    assert_eq!(function.body, Expr::Number(4.0));
    assert_eq!(parser.diagnostics().len(), 1);
}

#[test]
fn test_diagnostic_rendering_points_at_failure() {
    let source = "def foo(\n";
    let (items, errors) = parse(source.to_string(), Some("bad.ks".to_string()));

    assert!(items.is_empty());
    assert_eq!(errors.len(), 1);

    let rendered = render_error(&errors[0], source);
    assert!(rendered.starts_with("Error: ExpectedToken"));
    assert!(rendered.contains("-> bad.ks"));
}

#[test]
fn test_tokens_after_top_level_parse_continue_cleanly() {
    let mut parser = Parser::new("def id(x) x extern f(a) 7".to_string(), None);

    assert!(parser.parse_definition().is_some());
    assert_eq!(parser.current_token_kind(), TokenKind::Extern);
    assert!(parser.parse_extern().is_some());
    assert_eq!(parser.current_token_kind(), TokenKind::Numeric);
    assert_eq!(parser.numeric_value(), 7.0);
    assert!(parser.parse_top_level_expr().is_some());
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Lexer::new("alpha".to_string(), None);
    let mut second = Lexer::new("beta 2".to_string(), None);

    first.next_token();
    second.next_token();
    second.next_token();

    assert_eq!(first.identifier_value(), "alpha");
    assert_eq!(second.identifier_value(), "beta");
    assert_eq!(second.numeric_value(), 2.0);
}

// Known quirk: malformed numeric runs are accepted, not rejected.
#[test]
fn test_multi_dot_literal_parses_best_effort() {
    let tokens = tokenize("1.2.3".to_string(), None);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Numeric);

    let (items, errors) = parse("1.2.3 + 1".to_string(), None);
    assert!(errors.is_empty());
    assert_eq!(items[0].to_string(), "(def __anon_expr() (+ 1.2 1))");
}
