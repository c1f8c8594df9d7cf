use super::ast::Expr;

/// Operation over expression trees, one method per variant.
///
/// Back ends implement this instead of attaching behavior to the nodes. Adding a variant to
/// [`Expr`] breaks every implementor until it is handled.
pub trait ExprVisitor {
    type Output;

    fn visit_number(&mut self, value: f64) -> Self::Output;
    fn visit_variable(&mut self, name: &str) -> Self::Output;
    fn visit_binary(&mut self, operator: char, left: &Expr, right: &Expr) -> Self::Output;
    fn visit_call(&mut self, callee: &str, arguments: &[Expr]) -> Self::Output;
    fn visit_if(
        &mut self,
        condition: &Expr,
        then_branch: &Expr,
        else_branch: &Expr,
    ) -> Self::Output;
    fn visit_for(
        &mut self,
        variable: &str,
        start: &Expr,
        end: &Expr,
        step: Option<&Expr>,
        body: &Expr,
    ) -> Self::Output;
}
