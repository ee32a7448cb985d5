mod invoke;

use crate::RunOptions;

#[derive(Clone, Debug)]
pub struct CheckCommand {
    pub options: RunOptions,
}
