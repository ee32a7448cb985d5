mod invoke;

use crate::RunOptions;

#[derive(Clone, Debug)]
pub struct ViewCommand {
    pub options: RunOptions,
}
