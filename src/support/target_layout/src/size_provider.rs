use crate::{IndeterminateLayout, TypeLayout};
use data_units::ByteUnits;

/// Resolves the size and alignment of opaque type handles for one platform.
pub trait SizeProvider {
    type Type;

    fn size_of(&self, ty: &Self::Type) -> Result<ByteUnits, IndeterminateLayout>;
    fn align_of(&self, ty: &Self::Type) -> Result<ByteUnits, IndeterminateLayout>;
    fn max_align(&self) -> ByteUnits;

    fn type_layout(&self, ty: &Self::Type) -> Result<TypeLayout, IndeterminateLayout> {
        Ok(TypeLayout::new(self.size_of(ty)?, self.align_of(ty)?))
    }
}
