use crate::{
    AbiContext, IndeterminateLayout, RecordLayoutBuilder, SizeProvider, TargetLayout, TypeLayout,
    TypeShape,
};
use data_units::ByteUnits;
use target::Target;

/// Sizing rules shared by every supported platform, parameterized by
/// word size and maximum alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StdSizes {
    abi: AbiContext,
}

impl StdSizes {
    pub const fn new(abi: AbiContext) -> Self {
        Self { abi }
    }

    pub fn for_target(target: &Target) -> Self {
        Self::new(target.abi_context())
    }

    pub fn abi(&self) -> &AbiContext {
        &self.abi
    }

    fn layout_of(&self, shape: &TypeShape) -> Result<TypeLayout, IndeterminateLayout> {
        let word_size = self.abi.word_size;

        Ok(match shape {
            TypeShape::Scalar { size } => {
                let size = ByteUnits::of(*size);
                TypeLayout::new(size, self.abi.clamp_alignment(size))
            }
            TypeShape::Complex { size } => {
                let size = ByteUnits::of(*size);
                TypeLayout::new(size, self.abi.clamp_alignment(ByteUnits::of(size.bytes() / 2)))
            }
            TypeShape::Pointer => TypeLayout::basic(word_size),
            TypeShape::Words { count } => TypeLayout::new(
                word_size
                    .checked_mul(*count)
                    .ok_or(IndeterminateLayout::Overflow)?,
                word_size,
            ),
            TypeShape::Array { len, elem } => {
                // Element sizes already include their tail padding
                let elem = self.layout_of(elem)?;
                let width = elem
                    .width
                    .checked_mul(*len)
                    .ok_or(IndeterminateLayout::Overflow)?;

                TypeLayout::new(width, elem.alignment)
            }
            TypeShape::Record { fields } => {
                let mut builder = RecordLayoutBuilder::new(&self.abi);

                for field in fields {
                    builder.layout_field(self.layout_of(field)?)?;
                }

                builder.finish()?.type_layout()
            }
            TypeShape::Param { name } => {
                return Err(IndeterminateLayout::TypeParameter(name.clone()));
            }
        })
    }
}

impl SizeProvider for StdSizes {
    type Type = TypeShape;

    fn size_of(&self, ty: &TypeShape) -> Result<ByteUnits, IndeterminateLayout> {
        self.layout_of(ty).map(|layout| layout.width)
    }

    fn align_of(&self, ty: &TypeShape) -> Result<ByteUnits, IndeterminateLayout> {
        self.layout_of(ty).map(|layout| layout.alignment)
    }

    fn max_align(&self) -> ByteUnits {
        self.abi.max_align
    }

    fn type_layout(&self, ty: &TypeShape) -> Result<TypeLayout, IndeterminateLayout> {
        self.layout_of(ty)
    }
}
