use std::env;

use house_robber::{strategies::solve_with, Planner, StrategyKind};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("rob: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let result = if options.plan {
        Planner::new(&options.values).run().map(|plan| {
            let houses: Vec<String> = plan.houses.iter().map(|h| h.to_string()).collect();
            format!("{}\nhouses: {}", plan.total, houses.join(","))
        })
    } else {
        solve_with(options.strategy.unwrap_or_default(), &options.values)
            .map(|total| total.to_string())
    };

    match result {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("rob: {err}");
            std::process::exit(2);
        }
    }
}

#[derive(Debug)]
struct Options {
    strategy: Option<StrategyKind>,
    plan: bool,
    values: Vec<i64>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut strategy = None;
        let mut plan = false;
        let mut values = Vec::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--plan" {
                plan = true;
            } else if let Some(value) = arg.strip_prefix("--strategy=") {
                strategy = Some(value.parse()?);
            } else if arg == "--strategy" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --strategy".to_string())?
                    .into();
                strategy = Some(value.parse()?);
            } else if let Some(list) = arg.strip_prefix("--values=") {
                values.extend(parse_list(list)?);
            } else if arg == "--values" {
                let list = args
                    .next()
                    .ok_or_else(|| "missing value after --values".to_string())?
                    .into();
                values.extend(parse_list(&list)?);
            } else {
                values.push(parse_value(&arg)?);
            }
        }

        if plan && strategy.is_some() {
            return Err("--plan always uses the rolling frontier; drop --strategy".to_string());
        }

        Ok(Self {
            strategy,
            plan,
            values,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: rob [<options>] <value>...

Prints the maximum sum of pairwise non-adjacent values.

Options:
  --strategy <recursive|memoized|tabulated|rolling>   Strategy to use (default: rolling)
  --values <v1,v2,...>                                Comma-separated values
  --plan                                              Also print the chosen positions
                                                      (rolling frontier only; not combinable with --strategy)
  -h, --help                                          Print this help message

Examples:
  rob 2 7 9 3 1
  rob --plan --values 5,1,1,5
"
        );
    }
}

fn parse_list(list: &str) -> Result<Vec<i64>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_value)
        .collect()
}

fn parse_value(raw: &str) -> Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("'{raw}' is not an integer"))
}
