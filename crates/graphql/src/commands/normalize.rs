use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::graphql_files::GraphQLFileExts;
use crate::output_utils;
use anyhow::Context;
use libgraphql::NormalizationOptions;
use libgraphql::OperationNormalizer;
use libgraphql::Report;
use libgraphql::parse_operation;
use libgraphql::print_document;
use libgraphql::print_document_pretty;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct NormalizeCmd {
    #[arg(
        help="Path to a GraphQL schema file or a directory containing schema \
             files.",
        long,
    )]
    schema: PathBuf,

    #[arg(
        help="Path to the GraphQL file holding the operation to normalize.",
        long,
    )]
    operation: PathBuf,

    #[arg(
        help="Normalize only the operation with this name, dropping all others.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Variable values for the operation, as a JSON object.",
        long,
    )]
    variables: Option<String>,

    #[arg(
        help="Path to a JSON file with normalization options.",
        long,
    )]
    options: Option<PathBuf>,

    #[arg(
        help="Evaluate @include/@skip conditions given as variables.",
        long,
    )]
    resolve_include_skip_variables: bool,

    #[arg(
        help="Keep literal arguments in place instead of extracting them into \
             variables.",
        long,
    )]
    no_extract_variables: bool,

    #[arg(
        help="Print the operation indented across multiple lines.",
        long,
    )]
    pretty: bool,

    #[arg(
        help="Print a JSON object with the `operation` and its `variables`.",
        long,
    )]
    json: bool,

    #[command(flatten)]
    exts: GraphQLFileExts,
}

impl NormalizeCmd {
    fn load_options(&self) -> anyhow::Result<NormalizationOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read options file {path:#?}"))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("Invalid options file {path:#?}"))?
            },
            None => NormalizationOptions::default(),
        };
        if self.resolve_include_skip_variables {
            options.resolve_include_skip_variables = true;
        }
        if self.no_extract_variables {
            options.extract_variables = false;
        }
        Ok(options)
    }

    fn normalize(&self) -> anyhow::Result<Result<String, Report>> {
        let options = self.load_options()?;
        let schema = graphql_files::load_schema(&self.schema, &self.exts)?;

        let source = std::fs::read_to_string(&self.operation)
            .with_context(|| format!("Failed to read {:#?}", self.operation))?;
        let mut operation = parse_operation(&source)
            .with_context(|| format!("Failed to parse {:#?}", self.operation))?;
        if let Some(variables) = &self.variables {
            operation
                .input
                .set_variables_json(variables.as_bytes())
                .context("Invalid --variables")?;
        }

        let normalizer = OperationNormalizer::new(options);
        let mut report = Report::default();
        match &self.operation_name {
            Some(name) => normalizer.normalize_named_operation(&mut operation, &schema, name, &mut report),
            None => normalizer.normalize_operation(&mut operation, &schema, &mut report),
        }
        if report.has_errors() {
            return Ok(Err(report));
        }

        let printed = if self.pretty {
            print_document_pretty(&operation)
        } else {
            print_document(&operation)
        };
        if !self.json {
            return Ok(Ok(printed));
        }
        let output = serde_json::json!({
            "operation": printed,
            "variables": operation.input.variables(),
        });
        Ok(Ok(serde_json::to_string_pretty(&output)?))
    }
}

#[inherent::inherent]
impl RunnableCommand for NormalizeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.normalize() {
            Ok(Ok(output)) => CommandResult::stdout(format_args!("{}", output.trim_end())),
            Ok(Err(report)) => CommandResult::stderr(format_args!(
                "{} Errors normalizing {:#?}:\n{report}",
                output_utils::RED_X,
                self.operation,
            )),
            Err(e) => CommandResult::stderr(format_args!("{} {e:#}", output_utils::RED_X)),
        }
    }
}
