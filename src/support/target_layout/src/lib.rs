mod abi_context;
mod error;
mod record_layout;
mod size_provider;
mod std_sizes;
mod type_layout;
mod type_shape;

pub use abi_context::AbiContext;
use data_units::ByteUnits;
pub use error::IndeterminateLayout;
pub use record_layout::*;
pub use size_provider::SizeProvider;
pub use std_sizes::StdSizes;
use target::Target;
pub use type_layout::TypeLayout;
pub use type_shape::TypeShape;

pub trait TargetLayout {
    fn abi_context(&self) -> AbiContext;
}

impl TargetLayout for Target {
    fn abi_context(&self) -> AbiContext {
        AbiContext::new(self.word_size(), self.max_align())
    }
}

/// Total size of a record with its fields placed in the given order.
pub fn compute_layout<F: LayoutField>(
    fields: &[F],
    abi: &AbiContext,
) -> Result<ByteUnits, IndeterminateLayout> {
    RecordLayout::generate(fields, abi).map(|layout| layout.size)
}
