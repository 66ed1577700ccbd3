use std::io::{self, BufRead, Write};

use clap::Parser;
use expr_evaluator::{process, Evaluation, SAMPLES};

/// Evaluate infix arithmetic and show its postfix form and stack trace.
#[derive(Parser, Debug)]
#[command(name = "expr-evaluator", version)]
struct Args {
    /// Expression to evaluate. Reads expressions from stdin when omitted.
    expression: Option<String>,

    /// Do not print the evaluation trace.
    #[arg(long)]
    no_trace: bool,

    /// Evaluate the built-in sample expressions.
    #[arg(long, conflicts_with = "expression")]
    samples: bool,
}

/// Previously evaluated expressions of an interactive session.
#[derive(Default)]
struct History {
    entries: Vec<(String, String, String)>,
}

impl History {
    fn record(&mut self, input: &str, evaluation: &Evaluation) {
        if let Some(result) = evaluation.result_text() {
            self.entries
                .push((input.trim().to_string(), evaluation.postfix_text(), result));
        }
    }

    fn dump(&self, out: &mut impl Write) -> io::Result<()> {
        for (input, postfix, result) in &self.entries {
            writeln!(out, "> {}", input)?;
            writeln!(out, "  Postfix: {}", postfix)?;
            writeln!(out, "  Result: {}", result)?;
            writeln!(out)?;
        }

        Ok(())
    }
}

fn pretty_print_evaluation(
    out: &mut impl Write,
    evaluation: &Evaluation,
    show_trace: bool,
) -> io::Result<bool> {
    if let Some(e) = &evaluation.error {
        eprintln!("{} [{}]", e, e.kind());
        return Ok(false);
    }

    writeln!(out, "Postfix (RPN): {}", evaluation.postfix_text())?;
    if let Some(result) = evaluation.result_text() {
        writeln!(out, "Result: {}", result)?;
    }

    if show_trace {
        writeln!(out, "Evaluation trace:")?;
        for line in &evaluation.trace {
            let stack: Vec<String> = line
                .stack
                .iter()
                .map(|value| expr_evaluator::format::format_number(*value))
                .collect();
            writeln!(out, "  {:<32} [{}]", line.label, stack.join(", "))?;
        }
    }

    Ok(true)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let show_trace = !args.no_trace;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.samples {
        for sample in SAMPLES {
            writeln!(out, "> {}", sample.trim())?;
            pretty_print_evaluation(&mut out, &process(sample), show_trace)?;
            writeln!(out)?;
        }
        return Ok(());
    }

    if let Some(expression) = args.expression {
        let ok = pretty_print_evaluation(&mut out, &process(&expression), show_trace)?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    writeln!(out, "Please enter an expression to evaluate (Ctrl-D to quit):")?;
    out.flush()?;

    let mut history = History::default();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let evaluation = process(&line);
        pretty_print_evaluation(&mut out, &evaluation, show_trace)?;
        history.record(&line, &evaluation);
        out.flush()?;
    }

    writeln!(out, "History:")?;
    history.dump(&mut out)?;

    Ok(())
}
