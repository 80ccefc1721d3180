pub mod generate;
pub mod run;

use std::io::Read;

use bitbattery_core::RecordTable;

/// Read newline-delimited bit strings into a table.
///
/// `-` reads stdin. Blank lines are skipped; surrounding whitespace is
/// trimmed. Lines with characters outside {0,1} are kept — the battery
/// treats them as matching no pattern — and logged by the table loader.
pub fn load_table(input: &str) -> std::io::Result<RecordTable> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    let strings: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(RecordTable::from_strings(strings))
}
