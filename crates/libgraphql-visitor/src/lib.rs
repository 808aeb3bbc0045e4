//! Traversal of [`libgraphql_ast::Document`]s.
//!
//! Passes implement [`Visitor`], get registered on a [`Walker`] and steer
//! the walk through the [`WalkContext`] each hook receives.

mod visitor;
mod walk_context;
mod walker;

pub use visitor::Visitor;
pub use walk_context::WalkContext;
pub use walker::Walker;

#[cfg(test)]
mod tests;
