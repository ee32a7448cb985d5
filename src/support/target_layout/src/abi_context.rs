use data_units::ByteUnits;

/// Platform-wide sizing facts, fixed for the duration of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AbiContext {
    pub word_size: ByteUnits,
    pub max_align: ByteUnits,
}

impl AbiContext {
    pub const fn new(word_size: ByteUnits, max_align: ByteUnits) -> Self {
        Self {
            word_size,
            max_align,
        }
    }

    /// Caps an alignment at what the platform enforces.
    pub fn clamp_alignment(&self, alignment: ByteUnits) -> ByteUnits {
        alignment
            .max(ByteUnits::ONE)
            .min(self.max_align.max(ByteUnits::ONE))
    }
}
