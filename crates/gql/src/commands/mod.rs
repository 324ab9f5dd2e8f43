mod descriptor;

use crate::Cli;
use crate::CommandResult;
use descriptor::DescriptorCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gql")]
pub(crate) enum CommandEnum {
    /// Check one or more persisted type-resolution descriptors.
    Descriptor(Box<DescriptorCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Descriptor(cmd) => cmd.run(cli).await,
        }
    }
}
