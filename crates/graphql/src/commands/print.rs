use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::graphql_files::GraphQLFileExts;
use crate::output_utils;
use anyhow::Context;
use libgraphql::DefinitionNormalizer;
use libgraphql::Document;
use libgraphql::Report;
use libgraphql::parse_definition;
use libgraphql::parse_operation;
use libgraphql::print_document;
use libgraphql::print_document_pretty;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Treat the input as a schema and merge its type extensions \
             before printing.",
        long,
    )]
    schema: bool,

    #[arg(
        help="Print indented across multiple lines.",
        long,
    )]
    pretty: bool,

    #[command(flatten)]
    exts: GraphQLFileExts,

    #[arg(
        help="Path to a GraphQL file, or with --schema a directory of schema \
             files.",
        name="FILE_OR_DIR_PATH",
        required=true,
    )]
    path: PathBuf,
}

impl PrintCmd {
    fn load(&self) -> anyhow::Result<Document> {
        if !self.schema {
            let source = std::fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read {:#?}", self.path))?;
            return parse_operation(&source)
                .with_context(|| format!("Failed to parse {:#?}", self.path));
        }

        let file_paths = graphql_files::find_graphql_files(&self.path, &self.exts)?;
        let source = graphql_files::read_sources(&file_paths)?;
        let mut schema = parse_definition(&source)
            .with_context(|| format!("Failed to parse schema at {:#?}", self.path))?;
        let mut report = Report::default();
        DefinitionNormalizer::default().normalize_definition(&mut schema, &mut report);
        if report.has_errors() {
            anyhow::bail!("Failed to normalize schema at {:#?}:\n{report}", self.path);
        }
        Ok(schema)
    }
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.load() {
            Ok(doc) => {
                let printed = if self.pretty {
                    print_document_pretty(&doc)
                } else {
                    print_document(&doc)
                };
                CommandResult::stdout(format_args!("{}", printed.trim_end()))
            },
            Err(e) => CommandResult::stderr(format_args!("{} {e:#}", output_utils::RED_X)),
        }
    }
}
