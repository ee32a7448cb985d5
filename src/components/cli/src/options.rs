use std::path::PathBuf;

/// Everything that configures a single run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub inputs: Vec<PathBuf>,

    /// Platform name, the host platform is used when absent
    pub arch: Option<String>,

    /// Restricts output to the record with this name
    pub record_name: Option<String>,

    pub detailed: bool,
    pub json: bool,
    pub color: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            arch: None,
            record_name: None,
            detailed: false,
            json: false,
            color: true,
        }
    }
}

impl RunOptions {
    pub fn apply_color_choice(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
