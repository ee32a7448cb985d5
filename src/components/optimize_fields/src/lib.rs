use data_units::ByteUnits;
use itertools::Itertools;
use std::cmp::Ordering;
use target_layout::{AbiContext, IndeterminateLayout, LayoutField, TypeLayout, compute_layout};

/// A candidate field order together with the sizes before and after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Optimized<F> {
    pub fields: Vec<F>,
    pub original_size: ByteUnits,
    pub optimal_size: ByteUnits,
}

impl<F> Optimized<F> {
    pub fn is_improvement(&self) -> bool {
        self.optimal_size != self.original_size
    }
}

/// Larger alignment first, then larger size.
///
/// Only meaningful between two fields that are both zero-sized or both not,
/// a zero-sized field has no preference relative to any other field.
pub fn packing_order(a: &TypeLayout, b: &TypeLayout) -> Ordering {
    b.alignment
        .cmp(&a.alignment)
        .then_with(|| b.width.cmp(&a.width))
}

/// Reorders fields by descending alignment, then descending size.
///
/// Zero-sized fields never trade places with other fields, so each run of
/// consecutive zero-sized or non-zero-sized fields is sorted on its own.
/// That can leave a worse layout than the declared one, in which case the
/// declared order is kept. The result is never larger than the input and
/// optimizing it again returns it unchanged.
pub fn optimize<F: LayoutField + Clone>(
    fields: &[F],
    abi: &AbiContext,
) -> Result<Vec<F>, IndeterminateLayout> {
    let mut entries: Vec<(TypeLayout, &F)> = fields
        .iter()
        .map(|field| {
            field
                .type_layout()
                .map(|layout| (layout, field))
                .ok_or_else(|| IndeterminateLayout::UnresolvedField(field.name().into()))
        })
        .try_collect()?;

    for run in entries.chunk_by_mut(|a, b| a.0.is_zero_sized() == b.0.is_zero_sized()) {
        run.sort_by(|a, b| packing_order(&a.0, &b.0));
    }

    let packed: Vec<F> = entries.into_iter().map(|(_, field)| field.clone()).collect();

    if compute_layout(&packed, abi)? > compute_layout(fields, abi)? {
        return Ok(fields.to_vec());
    }

    Ok(packed)
}

/// Computes both the declared and the optimal layout of a record.
pub fn optimize_record<F: LayoutField + Clone>(
    fields: &[F],
    abi: &AbiContext,
) -> Result<Optimized<F>, IndeterminateLayout> {
    let original_size = compute_layout(fields, abi)?;
    let optimized = optimize(fields, abi)?;
    let optimal_size = compute_layout(&optimized, abi)?;

    Ok(Optimized {
        fields: optimized,
        original_size,
        optimal_size,
    })
}
