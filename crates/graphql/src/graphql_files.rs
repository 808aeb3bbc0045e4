use anyhow::Context;
use libgraphql::DefinitionNormalizer;
use libgraphql::Document;
use libgraphql::Report;
use libgraphql::merge_base_schema;
use libgraphql::parse_definition;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GraphQLFileExts {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,
}

impl GraphQLFileExts {
    /// The extensions with any leading `.` removed.
    fn normalized(&self) -> HashSet<String> {
        self.graphql_file_exts
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_owned())
            .collect()
    }
}

/// Finds all GraphQL files at or under `path`.
///
/// A single file passed directly is always used, whatever its extension.
pub(crate) fn find_graphql_files(
    path: &Path,
    exts: &GraphQLFileExts,
) -> anyhow::Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_owned()]);
    }

    let exts = exts.normalized();
    let mut file_paths = vec![];
    for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to scan GraphQL files under {path:#?}")
        })?;
        let entry_path = entry.path();
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file: {entry_path:#?}.");
            continue;
        }
        let matches_ext = entry_path
            .extension()
            .map(|ext| exts.contains(ext.to_string_lossy().as_ref()))
            .unwrap_or(false);
        if matches_ext {
            log::trace!("Found GraphQL file at {entry_path:#?}.");
            file_paths.push(entry_path.to_owned());
        }
    }

    log::debug!("Found {} GraphQL files under {path:#?}.", file_paths.len());
    Ok(file_paths)
}

/// Reads `file_paths` into one source text.
pub(crate) fn read_sources(file_paths: &[PathBuf]) -> anyhow::Result<String> {
    let mut source = String::new();
    for file_path in file_paths {
        let contents = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {file_path:#?}"))?;
        source.push_str(&contents);
        source.push('\n');
    }
    Ok(source)
}

/// Loads the schema at `path`, merges its type extensions and adds the
/// built-in scalars and directives.
pub(crate) fn load_schema(
    path: &Path,
    exts: &GraphQLFileExts,
) -> anyhow::Result<Document> {
    let file_paths = find_graphql_files(path, exts)?;
    if file_paths.is_empty() {
        anyhow::bail!("No GraphQL schema files found at {path:#?}");
    }
    let source = read_sources(&file_paths)?;
    let mut schema = parse_definition(&source)
        .with_context(|| format!("Failed to parse schema at {path:#?}"))?;

    let mut report = Report::default();
    DefinitionNormalizer::default().normalize_definition(&mut schema, &mut report);
    if report.has_errors() {
        anyhow::bail!("Failed to normalize schema at {path:#?}:\n{report}");
    }
    merge_base_schema(&mut schema);
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::GraphQLFileExts;

    #[test]
    fn leading_dots_are_ignored() {
        let exts = GraphQLFileExts {
            graphql_file_exts: vec![".graphql".to_string(), "gql".to_string()],
        };
        let mut normalized: Vec<String> = exts.normalized().into_iter().collect();
        normalized.sort();
        assert_eq!(normalized, vec!["gql".to_string(), "graphql".to_string()]);
    }
}
