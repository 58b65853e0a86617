//! Terminal input and output for the `train-finder` binary.
//!
//! Query fields missing from the command line are asked for interactively,
//! one prompt per field. Results go to the output as one line per train,
//! or as a JSON array in the timetable record format.

use std::io::{self, BufRead, Write};

use crate::data::to_record;
use crate::domain::{SortCriterion, Train};

/// The three query fields as typed by the user, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pub departure: String,
    pub arrival: String,
    pub criterion: String,
}

/// Fill in any missing query fields by prompting on `output` and reading
/// answers from `input`.
///
/// Fields already given are used as-is and not prompted for. Each answer
/// is the first whitespace-separated word on its line; a blank line or end
/// of input gives an empty field, which validation then rejects.
pub fn complete_query<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    departure: Option<String>,
    arrival: Option<String>,
    criterion: Option<String>,
) -> io::Result<RawQuery> {
    let departure = match departure {
        Some(d) => d,
        None => ask(input, output, "Departure station number: ")?,
    };
    let arrival = match arrival {
        Some(a) => a,
        None => ask(input, output, "Arrival station number: ")?,
    };
    let criterion = match criterion {
        Some(c) => c,
        None => {
            let prompt = format!("Criteria ({}): ", SortCriterion::choices());
            ask(input, output, &prompt)?
        }
    };

    Ok(RawQuery {
        departure,
        arrival,
        criterion,
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or_default().to_string())
}

/// Write trains one per line.
pub fn write_trains<W: Write>(output: &mut W, trains: &[Train]) -> io::Result<()> {
    for train in trains {
        writeln!(output, "{train}")?;
    }
    Ok(())
}

/// Write trains as a pretty-printed JSON array of timetable records.
pub fn write_trains_json<W: Write>(output: &mut W, trains: &[Train]) -> io::Result<()> {
    let records: Vec<_> = trains.iter().map(to_record).collect();
    serde_json::to_writer_pretty(&mut *output, &records)?;
    writeln!(output)
}
