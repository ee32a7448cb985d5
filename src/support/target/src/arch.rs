use data_units::ByteUnits;
use derive_more::IsVariant;
use std::{fmt::Display, str::FromStr};

use crate::TargetError;

/// Every architecture with known sizing rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum TargetArch {
    X86,
    X86_64,
    X86_64P32,
    Arm,
    Aarch64,
    Loong64,
    Mips,
    Mipsle,
    Mips64,
    Mips64le,
    Ppc64,
    Ppc64le,
    Riscv64,
    S390x,
    Sparc64,
    Wasm,
}

impl TargetArch {
    pub const ALL: [Self; 16] = [
        Self::X86,
        Self::X86_64,
        Self::X86_64P32,
        Self::Arm,
        Self::Aarch64,
        Self::Loong64,
        Self::Mips,
        Self::Mipsle,
        Self::Mips64,
        Self::Mips64le,
        Self::Ppc64,
        Self::Ppc64le,
        Self::Riscv64,
        Self::S390x,
        Self::Sparc64,
        Self::Wasm,
    ];

    pub const HOST: Option<Self> = if cfg!(target_arch = "x86_64") {
        Some(TargetArch::X86_64)
    } else if cfg!(target_arch = "x86") {
        Some(TargetArch::X86)
    } else if cfg!(target_arch = "aarch64") {
        Some(TargetArch::Aarch64)
    } else if cfg!(target_arch = "arm") {
        Some(TargetArch::Arm)
    } else if cfg!(target_arch = "loongarch64") {
        Some(TargetArch::Loong64)
    } else if cfg!(all(target_arch = "mips", target_endian = "big")) {
        Some(TargetArch::Mips)
    } else if cfg!(target_arch = "mips") {
        Some(TargetArch::Mipsle)
    } else if cfg!(all(target_arch = "mips64", target_endian = "big")) {
        Some(TargetArch::Mips64)
    } else if cfg!(target_arch = "mips64") {
        Some(TargetArch::Mips64le)
    } else if cfg!(all(target_arch = "powerpc64", target_endian = "big")) {
        Some(TargetArch::Ppc64)
    } else if cfg!(target_arch = "powerpc64") {
        Some(TargetArch::Ppc64le)
    } else if cfg!(target_arch = "riscv64") {
        Some(TargetArch::Riscv64)
    } else if cfg!(target_arch = "s390x") {
        Some(TargetArch::S390x)
    } else if cfg!(target_arch = "sparc64") {
        Some(TargetArch::Sparc64)
    } else if cfg!(target_arch = "wasm32") {
        Some(TargetArch::Wasm)
    } else {
        None
    };

    /// Canonical name, also accepted by `from_str`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::X86 => "386",
            Self::X86_64 => "amd64",
            Self::X86_64P32 => "amd64p32",
            Self::Arm => "arm",
            Self::Aarch64 => "arm64",
            Self::Loong64 => "loong64",
            Self::Mips => "mips",
            Self::Mipsle => "mipsle",
            Self::Mips64 => "mips64",
            Self::Mips64le => "mips64le",
            Self::Ppc64 => "ppc64",
            Self::Ppc64le => "ppc64le",
            Self::Riscv64 => "riscv64",
            Self::S390x => "s390x",
            Self::Sparc64 => "sparc64",
            Self::Wasm => "wasm",
        }
    }

    pub const fn word_size(&self) -> ByteUnits {
        match self {
            Self::X86 | Self::X86_64P32 | Self::Arm | Self::Mips | Self::Mipsle => {
                ByteUnits::of(4)
            }
            Self::X86_64
            | Self::Aarch64
            | Self::Loong64
            | Self::Mips64
            | Self::Mips64le
            | Self::Ppc64
            | Self::Ppc64le
            | Self::Riscv64
            | Self::S390x
            | Self::Sparc64
            | Self::Wasm => ByteUnits::of(8),
        }
    }

    /// Largest alignment enforced for any scalar.
    pub const fn max_align(&self) -> ByteUnits {
        match self {
            Self::X86 | Self::Arm | Self::Mips | Self::Mipsle => ByteUnits::of(4),
            Self::X86_64P32 => ByteUnits::of(8),
            _ => self.word_size(),
        }
    }
}

impl FromStr for TargetArch {
    type Err = TargetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let arch = match name {
            "386" | "x86" | "i386" | "i686" => Self::X86,
            "amd64" | "x86_64" => Self::X86_64,
            "amd64p32" => Self::X86_64P32,
            "arm" => Self::Arm,
            "arm64" | "aarch64" => Self::Aarch64,
            "loong64" => Self::Loong64,
            "mips" => Self::Mips,
            "mipsle" => Self::Mipsle,
            "mips64" => Self::Mips64,
            "mips64le" => Self::Mips64le,
            "ppc64" => Self::Ppc64,
            "ppc64le" => Self::Ppc64le,
            "riscv64" => Self::Riscv64,
            "s390x" => Self::S390x,
            "sparc64" => Self::Sparc64,
            "wasm" | "wasm32" => Self::Wasm,
            _ => return Err(TargetError::UnknownPlatform(name.into())),
        };

        Ok(arch)
    }
}

impl Display for TargetArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub trait TargetArchExt {
    fn is_host(&self) -> bool;
}

impl TargetArchExt for TargetArch {
    fn is_host(&self) -> bool {
        TargetArch::HOST.map_or(false, |arch| *self == arch)
    }
}
