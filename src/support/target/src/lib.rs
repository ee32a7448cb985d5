mod arch;
mod display;
mod error;

pub use arch::{TargetArch, TargetArchExt};
use data_units::ByteUnits;
pub use display::IntoDisplay;
pub use error::TargetError;
use std::fmt::Display;

/// The platform whose sizing rules apply for a whole run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Target {
    arch: TargetArch,
}

impl Target {
    pub const fn new(arch: TargetArch) -> Self {
        Self { arch }
    }

    /// The platform this process runs on, if it has known sizing rules.
    pub fn host() -> Result<Self, TargetError> {
        TargetArch::HOST.map(Self::new).ok_or_else(|| {
            TargetError::UnsupportedHost(std::env::consts::ARCH.to_string())
        })
    }

    /// Selects a platform by name, falling back to the host when no name is given.
    pub fn select(name: Option<&str>) -> Result<Self, TargetError> {
        let target = match name {
            Some(name) => Self::new(name.parse()?),
            None => Self::host()?,
        };

        tracing::debug!(
            "selected platform {} (word size {}, max align {})",
            target,
            target.word_size(),
            target.max_align()
        );

        Ok(target)
    }

    pub fn arch(&self) -> TargetArch {
        self.arch
    }

    pub fn is_host(&self) -> bool {
        self.arch.is_host()
    }

    pub fn word_size(&self) -> ByteUnits {
        self.arch.word_size()
    }

    pub fn max_align(&self) -> ByteUnits {
        self.arch.max_align()
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.arch)
    }
}

#[test]
fn test_select_known_platforms() {
    let target = Target::select(Some("amd64")).unwrap();
    assert_eq!(target.word_size(), ByteUnits::of(8));
    assert_eq!(target.max_align(), ByteUnits::of(8));

    let target = Target::select(Some("386")).unwrap();
    assert_eq!(target.word_size(), ByteUnits::of(4));
    assert_eq!(target.max_align(), ByteUnits::of(4));

    let target = Target::select(Some("amd64p32")).unwrap();
    assert_eq!(target.word_size(), ByteUnits::of(4));
    assert_eq!(target.max_align(), ByteUnits::of(8));
}

#[test]
fn test_select_aliases() {
    assert_eq!(
        Target::select(Some("x86_64")).unwrap(),
        Target::new(TargetArch::X86_64)
    );
    assert_eq!(
        Target::select(Some("aarch64")).unwrap(),
        Target::new(TargetArch::Aarch64)
    );
}

#[test]
fn test_select_unknown_platform() {
    assert_eq!(
        Target::select(Some("bogus-arch")),
        Err(TargetError::UnknownPlatform("bogus-arch".into()))
    );
}

#[test]
fn test_canonical_names_round_trip() {
    for arch in TargetArch::ALL {
        assert_eq!(arch.name().parse::<TargetArch>(), Ok(arch));
    }
}

#[test]
fn test_host_matches_detection() {
    match Target::host() {
        Ok(target) => {
            assert!(target.is_host());
            assert_eq!(TargetArch::HOST.display().to_string(), target.to_string());
        }
        Err(error) => {
            assert!(TargetArch::HOST.is_none());
            assert!(matches!(error, TargetError::UnsupportedHost(_)));
            assert!(TargetArch::HOST.display().to_string().ends_with("(unsupported)"));
        }
    }
}
