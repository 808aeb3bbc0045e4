/// A 1-based line/column location in the source a node was parsed from.
///
/// Nodes synthesized during normalization carry `Position::default()`
/// (`0:0`), which [`Position::is_known`] reports as unknown.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

impl From<graphql_parser::Pos> for Position {
    fn from(pos: graphql_parser::Pos) -> Self {
        Self {
            line: pos.line as u32,
            column: pos.column as u32,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
