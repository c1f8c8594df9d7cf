use super::visitor::ExprVisitor;

/// Name given to the synthesized function wrapping a bare top-level expression.
pub const ANONYMOUS_FUNCTION_NAME: &str = "__anon_expr";

/// Expression node.
///
/// Each node owns its children; a parsed tree is never shared or mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal, like `1.0`.
    Number(f64),
    /// Reference to a variable, like `foo`.
    Variable(String),
    /// Binary operation, like `foo < 5.0`.
    Binary {
        operator: char,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Function call, arguments in source order.
    Call { callee: String, arguments: Vec<Expr> },
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    /// `for` loop. A missing step is resolved by whoever lowers the tree.
    For {
        variable: String,
        start: Box<Expr>,
        end: Box<Expr>,
        step: Option<Box<Expr>>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(operator: char, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn variable(name: &str) -> Self {
        Expr::Variable(String::from(name))
    }

    /// Dispatches to the visitor method matching this node's variant.
    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Number(value) => visitor.visit_number(*value),
            Expr::Variable(name) => visitor.visit_variable(name),
            Expr::Binary {
                operator,
                left,
                right,
            } => visitor.visit_binary(*operator, left, right),
            Expr::Call { callee, arguments } => visitor.visit_call(callee, arguments),
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => visitor.visit_if(condition, then_branch, else_branch),
            Expr::For {
                variable,
                start,
                end,
                step,
                body,
            } => visitor.visit_for(variable, start, end, step.as_deref(), body),
        }
    }
}

/// A function's name and parameter names, without a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    pub fn new(name: String, params: Vec<String>) -> Self {
        Prototype { name, params }
    }

    pub fn anonymous() -> Self {
        Prototype {
            name: String::from(ANONYMOUS_FUNCTION_NAME),
            params: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

impl Function {
    pub fn new(prototype: Prototype, body: Expr) -> Self {
        Function { prototype, body }
    }

    /// True for the wrapper built around a bare top-level expression.
    pub fn is_anonymous(&self) -> bool {
        self.prototype.name == ANONYMOUS_FUNCTION_NAME && self.prototype.params.is_empty()
    }
}

/// One parsed top-level construct, handed whole to the lowering stage.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    Definition(Function),
    Extern(Prototype),
    Expression(Function),
}
