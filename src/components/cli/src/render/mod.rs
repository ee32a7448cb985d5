mod detailed;

use colored::Colorize;
use detailed::write_detailed_fields;
use report::{Field, Record, Report};
use std::fmt::{self, Write};
use target_layout::{AbiContext, RecordLayout};

const SEPARATOR_WIDTH: usize = 80;
const MAX_TYPE_WIDTH: usize = 32;

/// Writes human readable reports.
#[derive(Copy, Clone, Debug)]
pub struct Renderer<'a> {
    pub abi: &'a AbiContext,
    pub detailed: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(abi: &'a AbiContext, detailed: bool) -> Self {
        Self { abi, detailed }
    }

    /// Every record of every non-empty package, in declared order.
    pub fn view(&self, w: &mut dyn Write, report: &Report) -> fmt::Result {
        if report.is_empty() {
            return writeln!(w, "Given input doesn't have any records");
        }

        for package in report.non_empty_packages() {
            write_separator(w, &package.path)?;

            for record in &package.records {
                self.view_record(w, record)?;
                writeln!(w)?;
            }
        }

        Ok(())
    }

    pub fn view_record(&self, w: &mut dyn Write, record: &Record) -> fmt::Result {
        let sizes = match (record.size, record.optimal_size) {
            (Some(size), Some(optimal_size)) => format!("Size: {size} (Optimal: {optimal_size})"),
            _ => "Size: unknown".into(),
        };

        let mut header = format!("// {} | {}", record.position, sizes);

        if record.ignore {
            header.push_str(" | ignored");
        }

        writeln!(w, "{}", header.as_str().dimmed())?;
        self.write_body(w, &record.name, &record.fields)
    }

    /// Misaligned records only, each with its suggested order.
    pub fn check(&self, w: &mut dyn Write, report: &Report) -> fmt::Result {
        if report.is_empty() {
            return writeln!(w, "Nothing to check - given input doesn't have any records");
        }

        if !report.has_problems() {
            return writeln!(w, "{}", "All records are well aligned".green());
        }

        for package in report.packages.iter().filter(|p| p.has_problems()) {
            write_separator(w, &package.path)?;

            for record in package.problem_records() {
                self.check_record(w, record)?;
                writeln!(w)?;
            }
        }

        Ok(())
    }

    pub fn check_record(&self, w: &mut dyn Write, record: &Record) -> fmt::Result {
        match (record.size, record.optimal_size) {
            (Some(size), Some(optimal_size)) if record.has_problems() => {
                writeln!(
                    w,
                    "Struct {} {} fields order can be optimized ({} → {})\n",
                    record.name.bold(),
                    format!("({})", record.position).dimmed(),
                    size,
                    optimal_size
                )?;

                self.write_body(w, &record.name, record.optimal_fields())
            }
            _ => writeln!(
                w,
                "Struct {} {} is {}",
                record.name.bold(),
                format!("({})", record.position).dimmed(),
                record.status()
            ),
        }
    }

    fn write_body(&self, w: &mut dyn Write, name: &str, fields: &[Field]) -> fmt::Result {
        let layout = self
            .detailed
            .then(|| RecordLayout::generate(fields, self.abi).ok())
            .flatten();

        if let Some(layout) = &layout {
            let padding = format!("// Padding: {} bytes", layout.total_padding());
            writeln!(w, "{}", padding.as_str().dimmed())?;
        }

        writeln!(w, "struct {} {{", name.bold())?;

        match &layout {
            Some(layout) => write_detailed_fields(w, fields, layout, self.abi.max_align)?,
            None => write_fields(w, fields)?,
        }

        writeln!(w, "}}")
    }
}

/// Column widths shared by every field line of one record.
#[derive(Copy, Clone, Debug)]
struct Columns {
    name: usize,
    type_name: usize,
}

impl Columns {
    fn measure(fields: &[Field]) -> Self {
        let width = |f: fn(&Field) -> usize| fields.iter().map(f).max().unwrap_or(0);

        Self {
            name: width(|field| field.name.chars().count()),
            type_name: width(|field| ellipsize(&field.type_name).chars().count()),
        }
    }
}

fn write_fields(w: &mut dyn Write, fields: &[Field]) -> fmt::Result {
    let columns = Columns::measure(fields);

    for field in fields {
        let type_name = ellipsize(&field.type_name);

        if field.tag.is_empty() {
            writeln!(
                w,
                "    {:<name$} {}",
                field.name,
                type_name.bold(),
                name = columns.name
            )?;
        } else {
            writeln!(
                w,
                "    {:<name$} {} {}",
                field.name,
                pad(&type_name, columns.type_name).bold(),
                format!("`{}`", field.tag).yellow(),
                name = columns.name
            )?;
        }
    }

    Ok(())
}

fn write_separator(w: &mut dyn Write, title: &str) -> fmt::Result {
    let line = format!("── {title} ");
    let fill = SEPARATOR_WIDTH.saturating_sub(line.chars().count());

    writeln!(w, "{}{}", line.as_str().dimmed(), "─".repeat(fill).dimmed())
}

fn ellipsize(type_name: &str) -> String {
    if type_name.chars().count() <= MAX_TYPE_WIDTH {
        return type_name.into();
    }

    let mut short: String = type_name.chars().take(MAX_TYPE_WIDTH - 1).collect();
    short.push('…');
    short
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
