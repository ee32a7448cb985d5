use super::TargetArch;
use std::fmt::Display;

pub trait IntoDisplay {
    fn display(self) -> impl Display;
}

/// Names the raw architecture when it has no sizing rules.
impl IntoDisplay for Option<TargetArch> {
    fn display(self) -> impl Display {
        HostArch(self)
    }
}

struct HostArch(Option<TargetArch>);

impl Display for HostArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(arch) => write!(f, "{arch}"),
            None => write!(f, "{} (unsupported)", std::env::consts::ARCH),
        }
    }
}
