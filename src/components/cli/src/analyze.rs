use crate::{CliError, RunOptions};
use build_report::ReportBuilder;
use diagnostics::Diagnostics;
use record_decl::load_documents;
use report::Report;
use target::Target;
use target_layout::{AbiContext, StdSizes, TargetLayout};

/// A finished report together with the platform it was computed for.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub target: Target,
    pub abi: AbiContext,
    pub report: Report,
}

/// Selects the platform, loads every input and builds the report.
///
/// The platform is resolved first, so an unknown platform name fails
/// before any input is read.
pub fn analyze(options: &RunOptions, diagnostics: &Diagnostics) -> Result<Analysis, CliError> {
    let target = Target::select(options.arch.as_deref())?;
    let document = load_documents(&options.inputs)?;

    let abi = target.abi_context();
    let provider = StdSizes::for_target(&target);

    if !target.is_host() {
        tracing::debug!("computing layouts for {}, which isn't the host platform", target);
    }

    tracing::info!(
        "analyzing {} records for {}",
        document.record_count(),
        target
    );

    let report = ReportBuilder::new(&provider, abi, diagnostics).build_report(&document.packages);

    let unchecked = report.unchecked_records().count();
    if unchecked > 0 {
        tracing::info!("{} records have no determinate layout", unchecked);
    }

    Ok(Analysis {
        target,
        abi,
        report,
    })
}
