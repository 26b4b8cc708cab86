use std::env;
use std::time::Instant;

use house_robber::strategies::{Memoized, Recursive, Rolling, Tabulated};
use house_robber::{Planner, RobStrategy, Solver};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("rob_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("House Robber Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs every strategy over increasing input sizes and checks that:");
    eprintln!(
        "  • Correctness: totals match the full-table baseline (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Performance: wall-clock time and memory scale as expected");
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: Wall-clock time in seconds (lower is better)");
    eprintln!("  • rss_delta_kib: Memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/5] Plain recursion (exponential, tiny inputs only)...");
    measurements.extend(run_strategy(&Recursive, &[8, 12, 16, 20, 24], &options, &mut sys));
    eprintln!();

    eprintln!("[2/5] Memoized recursion...");
    measurements.extend(run_strategy(
        &Memoized,
        &[256, 1024, 4096, 16384],
        &options,
        &mut sys,
    ));
    eprintln!();

    eprintln!("[3/5] Full-array tabulation...");
    measurements.extend(run_strategy(&Tabulated, LARGE_SIZES, &options, &mut sys));
    eprintln!();

    eprintln!("[4/5] Constant-space tabulation...");
    measurements.extend(run_strategy(&Rolling, LARGE_SIZES, &options, &mut sys));
    eprintln!();

    eprintln!("[5/5] Plan reconstruction with block checkpoints...");
    measurements.extend(run_plan(&options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("rob_probe output error: {err}");
        std::process::exit(1);
    }
}

const LARGE_SIZES: &[usize] = &[1_024, 16_384, 262_144, 1_048_576, 4_194_304];

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 1_048_576usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin rob_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum input length to verify via the full-table baseline (default: 1048576)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin rob_probe
  cargo run --release --bin rob_probe -- --format table --verify-limit 4096
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_strategy<S: RobStrategy>(
    strategy: &S,
    sizes: &[usize],
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    let total = sizes.len();
    let solver = Solver::new(strategy);
    sizes
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing size {}... ", idx + 1, total, len);
            let values = deterministic_values(len);
            let mut result = 0i64;
            let m = measure(strategy.name(), len, sys, || {
                let got = match solver.solve(&values) {
                    Ok(v) => v,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                result = got;
                verify_total(&values, got, options)
            });
            eprintln!(
                "{} total={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_plan(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let total = LARGE_SIZES.len();
    LARGE_SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing size {}... ", idx + 1, total, len);
            let values = deterministic_values(len);
            let mut chosen = 0usize;
            let m = measure("plan", len, sys, || {
                let plan = match Planner::new(&values).run() {
                    Ok(p) => p,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                chosen = plan.houses.len();
                if !plan.is_feasible(values.len()) {
                    return (
                        VerificationStatus::Failed,
                        Some("chosen positions are adjacent or out of range".to_string()),
                    );
                }
                match plan.sum_of(&values) {
                    Some(picked) if picked == plan.total => {}
                    Some(picked) => {
                        return (
                            VerificationStatus::Failed,
                            Some(format!("picked sum {picked} differs from total {}", plan.total)),
                        )
                    }
                    None => {
                        return (
                            VerificationStatus::Failed,
                            Some("plan refers to positions outside the input".to_string()),
                        )
                    }
                }
                verify_total(&values, plan.total, options)
            });
            eprintln!(
                "{} chosen={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                chosen,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn verify_total(
    values: &[i64],
    got: i64,
    options: &Options,
) -> (VerificationStatus, Option<String>) {
    if values.len() > options.verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    match Tabulated.best_total(values) {
        Some(baseline) if baseline == got => (VerificationStatus::Passed, None),
        Some(baseline) => (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {got}")),
        ),
        None => (
            VerificationStatus::Failed,
            Some("baseline produced no total".to_string()),
        ),
    }
}

fn print_summary(measurements: &[Measurement]) {
    let passed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Passed)
        .count();
    let failed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Failed)
        .count();
    let unchecked = measurements.len() - passed - failed;

    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ passed: {passed}");
    eprintln!("  ✗ failed: {failed}");
    eprintln!("  ○ not checked: {unchecked}");
    eprintln!();

    let mut scenarios: Vec<&'static str> = measurements.iter().map(|m| m.scenario).collect();
    scenarios.dedup();
    for scenario in scenarios {
        let ms: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.scenario == scenario)
            .collect();
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!(
            "  {scenario}: runs={}, max_time={max_time:.3}s, max_delta={max_mem} KiB",
            ms.len()
        );
    }
    eprintln!();

    if failed == 0 {
        eprintln!("✓ All verified runs passed.");
    } else {
        eprintln!("✗ {failed} run(s) failed. Please review the errors above.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);

    println!(
        "{:<col1$}  {:>10}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<10}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>10}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Values in [0, 100) with a fixed, irregular pattern.
fn deterministic_values(len: usize) -> Vec<i64> {
    (0..len).map(|i| ((i * 7_919 + 13) % 100) as i64).collect()
}
