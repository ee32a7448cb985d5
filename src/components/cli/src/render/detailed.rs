use super::{Columns, ellipsize, pad};
use colored::Colorize;
use data_units::ByteUnits;
use report::Field;
use std::{
    fmt::{self, Write},
    iter::repeat_n,
};
use target_layout::RecordLayout;

/// One cell per byte: `■` for bytes a field occupies and `□` for the padding after it.
/// Rows wrap every `max_align` bytes.
pub fn write_detailed_fields(
    w: &mut dyn Write,
    fields: &[Field],
    layout: &RecordLayout,
    max_align: ByteUnits,
) -> fmt::Result {
    let columns = Columns::measure(fields);
    let row_width = max_align.bytes().max(1);
    let indent = " ".repeat(4 + columns.name + 1 + columns.type_name + 1);

    for (i, (field, slot)) in fields.iter().zip(&layout.slots).enumerate() {
        // Interior padding is red, tail padding is dimmed
        let padding = match layout.slots.get(i + 1) {
            Some(next) => repeat_n("□".red(), next.padding_before.bytes() as usize),
            None => repeat_n("□".dimmed(), layout.tail_padding.bytes() as usize),
        };

        write!(
            w,
            "    {:<name$} {} ",
            field.name,
            pad(&ellipsize(&field.type_name), columns.type_name).bold(),
            name = columns.name
        )?;

        let mut column = slot.offset.bytes() % row_width;
        write!(w, "{}", " ".repeat(column as usize))?;

        for cell in repeat_n("■".green(), slot.size.bytes() as usize).chain(padding) {
            if column == row_width {
                write!(w, "\n{indent}")?;
                column = 0;
            }

            write!(w, "{cell}")?;
            column += 1;
        }

        writeln!(w)?;
    }

    Ok(())
}
