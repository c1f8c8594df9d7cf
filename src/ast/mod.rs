/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Expression, prototype, function and top-level node definitions
/// - visitor: The trait back ends implement to walk expressions
/// - printer: S-expression rendering, also backing `Display`
pub mod ast;
pub mod printer;
pub mod visitor;

#[cfg(test)]
mod tests;
