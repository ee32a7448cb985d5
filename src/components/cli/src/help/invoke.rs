use super::HelpCommand;
use crate::{CliError, Invoke, Outcome};
use indoc::formatdoc;
use itertools::Itertools;
use target::TargetArch;

impl Invoke for HelpCommand {
    fn invoke(self) -> Result<Outcome, CliError> {
        println!("{}", usage());
        Ok(Outcome::Success)
    }
}

fn usage() -> String {
    let platforms = TargetArch::ALL.iter().map(TargetArch::name).join(", ");

    formatdoc! {"
        usage: realign [options] <command> <input.json>...

        commands:
            check, c        report records whose fields order can be optimized
            view, v         show the layout of every record

        options:
            -s, --struct NAME   only show the record with this name
            -a, --arch NAME     platform to compute layouts for (default: host)
            -d, --detailed      draw every byte of each record
                --json          print the report as JSON
            -nc, --no-color     disable colored output
            -h, --help          show this message
            -v, --version       show version information

        platforms: {platforms}",
        platforms = platforms
    }
}

#[test]
fn test_usage_lists_platforms() {
    let usage = usage();

    assert!(usage.starts_with("usage: realign"));
    assert!(usage.contains("amd64"));
    assert!(usage.contains("wasm"));
}
