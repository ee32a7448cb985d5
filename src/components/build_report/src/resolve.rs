use record_decl::FieldDecl;
use report::Field;
use target_layout::{IndeterminateLayout, SizeProvider};

/// Sizes every declared field, keeping the ones that can't be sized without a layout.
/// Returns the first sizing failure alongside the fields.
pub fn resolve_fields<P: SizeProvider>(
    decls: &[FieldDecl<P::Type>],
    provider: &P,
) -> (Vec<Field>, Option<IndeterminateLayout>) {
    let mut first_error = None;

    let fields = decls
        .iter()
        .map(|decl| {
            let layout = match provider.type_layout(&decl.ty) {
                Ok(layout) => Some(layout),
                Err(error) => {
                    first_error.get_or_insert(error);
                    None
                }
            };

            Field {
                name: decl.name.clone(),
                type_name: decl.type_name.clone(),
                tag: decl.tag.clone(),
                comment: decl.comment.clone(),
                layout,
            }
        })
        .collect();

    (fields, first_error)
}
