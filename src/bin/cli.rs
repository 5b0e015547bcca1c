//! Interactive loan calculator shell.
//!
//! Read-validate-act loop over stdin: `P` prints the monthly payment,
//! `T` prints the amortization table, `Q` quits. Malformed or
//! out-of-range input prints a short message and returns to the menu;
//! the calculation functions only ever see validated terms.

use std::io::{self, BufRead, Write};

use loan_calculator_rs::{format_payment, format_schedule, LoanTerms, Schedule, TermsBounds};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let bounds = TermsBounds::default();

    loop {
        println!("\nLoan Calculator - Please choose an option.");
        println!("P - Payment");
        println!("T - Table");
        println!("Q - Quit");
        print!("Option: ");
        io::stdout().flush()?;

        let option = match lines.next() {
            Some(line) => line?.trim().to_uppercase(),
            None => break,
        };

        match option.as_str() {
            "Q" => {
                println!("Exiting the loan calculator");
                break;
            }
            "P" | "T" => {
                let terms = match read_terms(&mut lines, &bounds)? {
                    Some(terms) => terms,
                    None => continue,
                };

                if option == "P" {
                    println!(
                        "Monthly Payment: ${}",
                        format_payment(terms.payment())
                    );
                } else {
                    let schedule = Schedule::generate(&terms);
                    println!("{}", format_schedule(&schedule));
                }
            }
            _ => println!("Invalid option. Please try again."),
        }
    }

    Ok(())
}

/// prompt for the three loan inputs, re-validating each against the bounds
///
/// returns Ok(None) when any input is malformed, out of range, or stdin
/// is exhausted; the caller falls back to the menu
fn read_terms<B: BufRead>(
    lines: &mut io::Lines<B>,
    bounds: &TermsBounds,
) -> io::Result<Option<LoanTerms>> {
    let prompt = format!(
        "Enter loan amount ({} - {}): ",
        bounds.min_principal, bounds.max_principal
    );
    let principal: u64 = match prompt_integer(lines, &prompt, "Invalid amount.")? {
        Some(value) => value,
        None => return Ok(None),
    };

    let prompt = format!(
        "Enter interest rate ({} - {}): ",
        bounds.min_rate_percent, bounds.max_rate_percent
    );
    let rate: u32 = match prompt_integer(lines, &prompt, "Invalid rate.")? {
        Some(value) => value,
        None => return Ok(None),
    };

    let prompt = format!(
        "Enter number of months ({} - {}): ",
        bounds.min_term_months, bounds.max_term_months
    );
    let months: u32 = match prompt_integer(lines, &prompt, "Invalid months.")? {
        Some(value) => value,
        None => return Ok(None),
    };

    let terms = match LoanTerms::new(principal, rate, months) {
        Ok(terms) => terms,
        Err(err) => {
            println!("{err}");
            return Ok(None);
        }
    };

    match bounds.validate(&terms) {
        Ok(()) => Ok(Some(terms)),
        Err(err) => {
            println!("{err}");
            Ok(None)
        }
    }
}

/// read one non-negative integer, printing `message` on malformed input
fn prompt_integer<B: BufRead, T: std::str::FromStr>(
    lines: &mut io::Lines<B>,
    prompt: &str,
    message: &str,
) -> io::Result<Option<T>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let line = match lines.next() {
        Some(line) => line?,
        None => return Ok(None),
    };

    match line.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("{message} Please enter a valid integer.");
            Ok(None)
        }
    }
}
