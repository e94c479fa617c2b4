use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use lookahead::outcome_filter::filter_by_outcome;

fn main() {
    let mut args = env::args().skip(1);
    let logfile = args.next().expect("usage: logfilter <logfile> [outcome]");
    let outcome = args.next().unwrap_or_else(|| "FAIL".to_string());

    let reader = BufReader::new(File::open(&logfile).expect("cant open log file"));
    let lines = reader
        .lines()
        .map(|line| line.expect("failed to read log line"));

    let kept = filter_by_outcome(lines, &outcome).expect("lookahead protocol violated");

    let mut writer = BufWriter::new(io::stdout());
    for line in kept {
        writeln!(writer, "{line}").expect("failed to write output");
    }
}
