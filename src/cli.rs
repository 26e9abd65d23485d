use std::fmt::Debug;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bubble_sort_rs::parity::{self, Input, ParseInputError};
use bubble_sort_rs::stable::{rust_bubble, rust_bubble_trace, SortTrace};

/// Sample data of the built-in demonstrations.
const DEMO_NUMBERS: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];
const DEMO_WORDS: [&str; 4] = ["banana", "apple", "cherry", "date"];
const DEMO_TRACE: [i64; 5] = [5, 2, 8, 1, 9];
const DEMO_SORTED: [i64; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Parser)]
#[command(
    name = "bubble-demo",
    version,
    about = "Instrumented bubble sort and odd/even demonstrations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the built-in demonstrations (default)
    Demo,

    /// Sort integers and print the sort statistics
    Sort {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Sort in descending order
        #[arg(long)]
        reverse: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every intermediate state of the sort, one line per swap
    Trace {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Sort in descending order
        #[arg(long)]
        reverse: bool,
    },

    /// Classify numbers as odd, even or zero. Reads stdin interactively if none are given
    Parity {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
}

pub fn run(args: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&mut out),
        Command::Sort {
            values,
            reverse,
            json,
        } => {
            let result = rust_bubble::sort_instrumented(&values, reverse);
            if json {
                let rendered =
                    serde_json::to_string_pretty(&result).context("failed to render JSON")?;
                writeln!(out, "{rendered}")?;
            } else {
                writeln!(out, "{result}")?;
            }
            Ok(())
        }
        Command::Trace { values, reverse } => {
            write_trace(&mut out, rust_bubble_trace::trace(&values, reverse))
        }
        Command::Parity { numbers } if numbers.is_empty() => {
            run_parity_loop(io::stdin().lock(), &mut out)
        }
        Command::Parity { numbers } => {
            for n in numbers {
                write_parity_checks(&mut out, n)?;
            }
            Ok(())
        }
    }
}

fn run_demo(out: &mut impl Write) -> Result<()> {
    writeln!(out, "=== integer sort ===")?;
    writeln!(out, "input: {:?}", DEMO_NUMBERS)?;
    writeln!(out, "{}", rust_bubble::sort_instrumented(&DEMO_NUMBERS, false))?;

    writeln!(out, "\n=== descending sort ===")?;
    writeln!(out, "{}", rust_bubble::sort_instrumented(&DEMO_NUMBERS, true))?;

    writeln!(out, "\n=== string sort ===")?;
    writeln!(out, "input: {:?}", DEMO_WORDS)?;
    writeln!(out, "{}", rust_bubble::sort_instrumented(&DEMO_WORDS, false))?;

    writeln!(out, "\n=== sort steps ===")?;
    writeln!(out, "input: {:?}", DEMO_TRACE)?;
    write_trace(out, rust_bubble_trace::trace(&DEMO_TRACE, false))?;

    writeln!(out, "\n=== already sorted input ===")?;
    writeln!(out, "input: {:?}", DEMO_SORTED)?;
    writeln!(out, "{}", rust_bubble::sort_instrumented(&DEMO_SORTED, false))?;

    writeln!(out)?;
    run_parity_demo(out)
}

fn write_trace<T, F>(out: &mut impl Write, mut trace: SortTrace<T, F>) -> Result<()>
where
    T: Clone + Debug,
    F: FnMut(&T, &T) -> bool,
{
    for (step, state) in trace.by_ref().enumerate() {
        writeln!(
            out,
            "step {}: {:?} (comparisons: {}, swaps: {})",
            step + 1,
            state.state,
            state.comparisons,
            state.swaps
        )?;
    }

    let end = trace
        .finish()
        .context("trace stopped before the sort finished")?;
    writeln!(
        out,
        "result: {:?} (comparisons: {}, swaps: {})",
        end.sorted_data, end.stats.comparisons, end.stats.swaps
    )?;

    Ok(())
}

fn run_parity_demo(out: &mut impl Write) -> Result<()> {
    let numbers: Vec<i64> = (-3..=10).collect();

    writeln!(out, "=== odd/even checks ===")?;
    writeln!(out, "input: {:?}", numbers)?;
    for &n in &numbers {
        writeln!(
            out,
            "{n:3}: modulo odd? {:5} even? {:5} | bitwise odd? {:5} even? {:5} | division odd? {}",
            parity::is_odd_modulo(n),
            parity::is_even_modulo(n),
            parity::is_odd_bitwise(n),
            parity::is_even_bitwise(n),
            parity::is_odd_division(n),
        )?;
    }

    writeln!(out, "\n=== classification ===")?;
    for &n in &numbers {
        writeln!(out, "{}", parity::describe(n))?;
    }

    let batch = parity::batch_check(&numbers);
    writeln!(out, "\n=== batch ===")?;
    writeln!(out, "odd:  {:?}", batch.odd_numbers)?;
    writeln!(out, "even: {:?}", batch.even_numbers)?;
    writeln!(out, "zero: {:?}", batch.zeros)?;

    let stats = parity::parity_stats(&numbers);
    writeln!(out, "\n=== stats ===")?;
    writeln!(out, "total: {}", stats.total)?;
    writeln!(out, "odd:   {}", stats.odd_count)?;
    writeln!(out, "even:  {}", stats.even_count)?;
    writeln!(out, "zero:  {}", stats.zero_count)?;

    Ok(())
}

fn write_parity_checks(out: &mut impl Write, n: i64) -> Result<()> {
    writeln!(out, "result: {}", parity::describe(n))?;
    writeln!(
        out,
        "  modulo   - odd? {}, even? {}",
        parity::is_odd_modulo(n),
        parity::is_even_modulo(n)
    )?;
    writeln!(
        out,
        "  bitwise  - odd? {}, even? {}",
        parity::is_odd_bitwise(n),
        parity::is_even_bitwise(n)
    )?;
    writeln!(out, "  division - odd? {}", parity::is_odd_division(n))?;
    Ok(())
}

/// Prompts for integers until `q` or end of input. Invalid lines are reported and skipped.
fn run_parity_loop(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "enter an integer ('q' to quit): ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        // A line that is not UTF-8 has already been consumed, so it is reported like any
        // other malformed input.
        let parsed = match line {
            Ok(line) => parity::parse_input(&line),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                writeln!(out, "invalid input, please enter an integer")?;
                writeln!(out)?;
                continue;
            }
            Err(err) => return Err(err).context("failed to read stdin"),
        };

        match parsed {
            Ok(Input::Quit) => return Ok(()),
            Ok(Input::Number(n)) => write_parity_checks(out, n)?,
            Err(ParseInputError::OutOfRange { .. }) => {
                writeln!(out, "invalid input, the integer does not fit in 64 bits")?
            }
            Err(ParseInputError::InvalidInteger { .. }) => {
                writeln!(out, "invalid input, please enter an integer")?
            }
        }
        writeln!(out)?;
    }
}
