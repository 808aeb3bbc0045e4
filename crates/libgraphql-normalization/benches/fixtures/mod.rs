use std::fmt::Write;

pub const SCHEMA: &str = include_str!("schema.graphql");
pub const COMPLEX_QUERY: &str = include_str!("complex_query.graphql");

pub const SIMPLE_QUERY: &str = r#"{ user(id: "1") { login name } }"#;

/// A query spreading a chain of `depth` fragments, each selecting one field
/// and spreading the next.
pub fn fragment_chain_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 60);
    out.push_str("{ viewer { ...F0 } }\n");
    for level in 0..depth {
        write!(out, "fragment F{level} on User {{ login friends {{ name ").unwrap();
        if level + 1 < depth {
            write!(out, "...F{} ", level + 1).unwrap();
        }
        out.push_str("} }\n");
    }
    out
}

/// A query selecting `count` aliased fields with distinct literal
/// arguments, each extracted into its own variable.
pub fn many_literal_arguments(count: usize) -> String {
    let mut out = String::with_capacity(count * 40);
    out.push('{');
    for i in 0..count {
        write!(out, r#" u{i}: user(id: "{i}") {{ login }}"#).unwrap();
    }
    out.push_str(" }");
    out
}
