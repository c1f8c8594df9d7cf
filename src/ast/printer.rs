use std::fmt::Display;

use super::{
    ast::{Expr, Function, Prototype, TopLevel},
    visitor::ExprVisitor,
};

/// Renders expressions as S-expressions, e.g. `(+ a (* b 2))`.
pub struct SExprPrinter;

impl ExprVisitor for SExprPrinter {
    type Output = String;

    fn visit_number(&mut self, value: f64) -> String {
        value.to_string()
    }

    fn visit_variable(&mut self, name: &str) -> String {
        name.to_string()
    }

    fn visit_binary(&mut self, operator: char, left: &Expr, right: &Expr) -> String {
        format!("({} {} {})", operator, left.accept(self), right.accept(self))
    }

    fn visit_call(&mut self, callee: &str, arguments: &[Expr]) -> String {
        let mut result = format!("(call {}", callee);
        for argument in arguments {
            result.push(' ');
            result.push_str(&argument.accept(self));
        }
        result.push(')');
        result
    }

    fn visit_if(&mut self, condition: &Expr, then_branch: &Expr, else_branch: &Expr) -> String {
        format!(
            "(if {} {} {})",
            condition.accept(self),
            then_branch.accept(self),
            else_branch.accept(self)
        )
    }

    fn visit_for(
        &mut self,
        variable: &str,
        start: &Expr,
        end: &Expr,
        step: Option<&Expr>,
        body: &Expr,
    ) -> String {
        let step = match step {
            Some(step) => step.accept(self),
            None => String::from("_"),
        };

        format!(
            "(for {} {} {} {} {})",
            variable,
            start.accept(self),
            end.accept(self),
            step,
            body.accept(self)
        )
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.accept(&mut SExprPrinter))
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(" "))
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(def {} {})", self.prototype, self.body)
    }
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopLevel::Definition(function) | TopLevel::Expression(function) => {
                write!(f, "{}", function)
            }
            TopLevel::Extern(prototype) => write!(f, "(extern {})", prototype),
        }
    }
}
