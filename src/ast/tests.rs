//! Unit tests for the AST module.
//!
//! Covers S-expression rendering and visitor dispatch.

use super::{
    ast::{Expr, Function, Prototype, TopLevel, ANONYMOUS_FUNCTION_NAME},
    visitor::ExprVisitor,
};

/// Folds closed expressions to a value, standing in for a back end.
struct ConstantFolder;

impl ExprVisitor for ConstantFolder {
    type Output = Option<f64>;

    fn visit_number(&mut self, value: f64) -> Option<f64> {
        Some(value)
    }

    fn visit_variable(&mut self, _name: &str) -> Option<f64> {
        None
    }

    fn visit_binary(&mut self, operator: char, left: &Expr, right: &Expr) -> Option<f64> {
        let left = left.accept(self)?;
        let right = right.accept(self)?;
        match operator {
            '+' => Some(left + right),
            '-' => Some(left - right),
            '*' => Some(left * right),
            '<' => Some(if left < right { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    fn visit_call(&mut self, _callee: &str, _arguments: &[Expr]) -> Option<f64> {
        None
    }

    fn visit_if(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) -> Option<f64> {
        if condition.accept(self)? != 0.0 {
            then_branch.accept(self)
        } else {
            else_branch.accept(self)
        }
    }

    fn visit_for(
        &mut self,
        _variable: &str,
        _start: &Expr,
        _end: &Expr,
        _step: Option<&Expr>,
        _body: &Expr,
    ) -> Option<f64> {
        None
    }
}

#[test]
fn test_visitor_dispatch() {
    let expr = Expr::If {
        condition: Box::new(Expr::binary('<', Expr::Number(1.0), Expr::Number(2.0))),
        then_branch: Box::new(Expr::binary('*', Expr::Number(3.0), Expr::Number(4.0))),
        else_branch: Box::new(Expr::variable("x")),
    };

    assert_eq!(expr.accept(&mut ConstantFolder), Some(12.0));
    assert_eq!(Expr::variable("x").accept(&mut ConstantFolder), None);
}

#[test]
fn test_print_binary_and_call() {
    let expr = Expr::binary(
        '+',
        Expr::variable("a"),
        Expr::Call {
            callee: String::from("f"),
            arguments: vec![Expr::Number(1.0), Expr::Number(2.5)],
        },
    );

    assert_eq!(expr.to_string(), "(+ a (call f 1 2.5))");
}

#[test]
fn test_print_call_without_arguments() {
    let expr = Expr::Call {
        callee: String::from("now"),
        arguments: vec![],
    };

    assert_eq!(expr.to_string(), "(call now)");
}

#[test]
fn test_print_for_with_and_without_step() {
    let with_step = Expr::For {
        variable: String::from("i"),
        start: Box::new(Expr::Number(1.0)),
        end: Box::new(Expr::variable("n")),
        step: Some(Box::new(Expr::Number(2.0))),
        body: Box::new(Expr::variable("i")),
    };
    let without_step = Expr::For {
        variable: String::from("i"),
        start: Box::new(Expr::Number(1.0)),
        end: Box::new(Expr::variable("n")),
        step: None,
        body: Box::new(Expr::variable("i")),
    };

    assert_eq!(with_step.to_string(), "(for i 1 n 2 i)");
    assert_eq!(without_step.to_string(), "(for i 1 n _ i)");
}

#[test]
fn test_print_top_level_items() {
    let prototype = Prototype::new(
        String::from("foo"),
        vec![String::from("a"), String::from("b")],
    );
    let function = Function::new(
        prototype.clone(),
        Expr::binary('+', Expr::variable("a"), Expr::variable("b")),
    );

    assert_eq!(
        TopLevel::Definition(function).to_string(),
        "(def foo(a b) (+ a b))"
    );
    assert_eq!(TopLevel::Extern(prototype).to_string(), "(extern foo(a b))");
}

#[test]
fn test_anonymous_function() {
    let function = Function::new(Prototype::anonymous(), Expr::Number(1.0));

    assert!(function.is_anonymous());
    assert_eq!(function.prototype.name, ANONYMOUS_FUNCTION_NAME);
    assert_eq!(function.to_string(), "(def __anon_expr() 1)");

    let named = Function::new(
        Prototype::new(String::from("one"), vec![]),
        Expr::Number(1.0),
    );
    assert!(!named.is_anonymous());
}
