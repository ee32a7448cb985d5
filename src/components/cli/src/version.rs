use crate::{CliError, Invoke, Outcome};
use target::{IntoDisplay, TargetArch};

#[derive(Clone, Debug)]
pub struct VersionCommand;

impl Invoke for VersionCommand {
    fn invoke(self) -> Result<Outcome, CliError> {
        println!("realign {}", env!("CARGO_PKG_VERSION"));
        println!("host platform: {}", TargetArch::HOST.display());
        Ok(Outcome::Success)
    }
}
