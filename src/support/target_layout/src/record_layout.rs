use crate::{AbiContext, IndeterminateLayout, TypeLayout};
use data_units::ByteUnits;

/// Anything that can be placed into a record.
pub trait LayoutField {
    fn name(&self) -> &str;

    /// `None` when the sizing provider could not resolve this field's type.
    fn type_layout(&self) -> Option<TypeLayout>;
}

impl LayoutField for TypeLayout {
    fn name(&self) -> &str {
        "<anonymous>"
    }

    fn type_layout(&self) -> Option<TypeLayout> {
        Some(*self)
    }
}

/// Where a single field ended up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldSlot {
    pub offset: ByteUnits,
    pub size: ByteUnits,
    pub alignment: ByteUnits,
    pub padding_before: ByteUnits,
}

/// Result of placing every field of a record in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLayout {
    pub size: ByteUnits,
    pub alignment: ByteUnits,
    pub tail_padding: ByteUnits,
    pub slots: Vec<FieldSlot>,
}

impl RecordLayout {
    pub fn generate<F: LayoutField>(
        fields: &[F],
        abi: &AbiContext,
    ) -> Result<Self, IndeterminateLayout> {
        let mut builder = RecordLayoutBuilder::new(abi);

        for field in fields {
            let Some(type_layout) = field.type_layout() else {
                return Err(IndeterminateLayout::UnresolvedField(field.name().into()));
            };

            builder.layout_field(type_layout)?;
        }

        builder.finish()
    }

    pub fn interior_padding(&self) -> ByteUnits {
        self.slots.iter().map(|slot| slot.padding_before).sum()
    }

    pub fn total_padding(&self) -> ByteUnits {
        self.interior_padding() + self.tail_padding
    }

    pub fn type_layout(&self) -> TypeLayout {
        TypeLayout::new(self.size, self.alignment)
    }
}

/// Simulates sequential field placement the way a compiler does it.
#[derive(Debug)]
pub struct RecordLayoutBuilder<'a> {
    pub abi: &'a AbiContext,
    pub offset: ByteUnits,

    // Largest alignment seen so far, before the platform cap
    pub unadjusted_alignment: ByteUnits,

    pub slots: Vec<FieldSlot>,
}

impl<'a> RecordLayoutBuilder<'a> {
    pub fn new(abi: &'a AbiContext) -> Self {
        Self {
            abi,
            offset: ByteUnits::ZERO,
            unadjusted_alignment: ByteUnits::ONE,
            slots: Vec::new(),
        }
    }

    pub fn layout_field(&mut self, type_layout: TypeLayout) -> Result<(), IndeterminateLayout> {
        let TypeLayout { width, alignment } = type_layout;

        // Zero-sized fields sit at the current offset and never cause padding
        let padding_before = if width.is_zero() {
            ByteUnits::ZERO
        } else {
            self.offset
                .padding_to(alignment)
                .ok_or(IndeterminateLayout::Overflow)?
        };

        let offset = self
            .offset
            .checked_add(padding_before)
            .ok_or(IndeterminateLayout::Overflow)?;

        self.slots.push(FieldSlot {
            offset,
            size: width,
            alignment,
            padding_before,
        });

        self.offset = offset
            .checked_add(width)
            .ok_or(IndeterminateLayout::Overflow)?;
        self.unadjusted_alignment = self.unadjusted_alignment.max(alignment);
        Ok(())
    }

    pub fn finish(self) -> Result<RecordLayout, IndeterminateLayout> {
        let alignment = self.abi.clamp_alignment(self.unadjusted_alignment);

        // Round size of record up to its alignment
        let size = self
            .offset
            .align_to(alignment)
            .ok_or(IndeterminateLayout::Overflow)?;

        Ok(RecordLayout {
            size,
            alignment,
            tail_padding: size - self.offset,
            slots: self.slots,
        })
    }
}
