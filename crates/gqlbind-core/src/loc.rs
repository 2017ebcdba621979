use crate::ast;
use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a path to the file the position refers to (when known).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: Option<&Path>, pos: &ast::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "<unknown>:{}:{}", self.line, self.col),
        }
    }
}

/// Where some schema item was defined or referenced.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SourceLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_schema_ast_position(
        file: Option<&Path>,
        pos: &ast::Pos,
    ) -> Self {
        Self::Schema(FilePosition::from_pos(file, pos))
    }

    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Schema(file_pos) => file_pos.file.as_deref(),
        }
    }

    /// Produce a location in the same file as this one, but at a different
    /// position within that file.
    pub(crate) fn with_ast_position(&self, pos: &ast::Pos) -> Self {
        Self::from_schema_ast_position(self.file(), pos)
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::Schema(file_pos) => file_pos.fmt(f),
        }
    }
}
