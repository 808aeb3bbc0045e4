mod normalize;
mod print;

use crate::Cli;
use crate::CommandResult;
use normalize::NormalizeCmd;
use print::PrintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Normalize an operation against a schema.
    Normalize(Box<NormalizeCmd>),
    /// Print a GraphQL document in canonical form.
    Print(Box<PrintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Normalize(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
        }
    }
}
