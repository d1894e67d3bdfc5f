use crate::prelude::*;

use std::path::Path;

/// Parses one address per line. Blank lines are skipped, invalid lines are
/// dropped with a warning and duplicates are kept.
pub fn parse_recipients(raw: &str) -> Vec<Address> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match line.parse::<Address>() {
            Ok(address) => Some(address),
            Err(e) => {
                warn!("Skipping invalid recipient `{line}`: {e}");
                None
            }
        })
        .collect()
}

pub fn load_recipients(path: impl AsRef<Path>) -> Result<Vec<Address>, LoadRecipientsError> {
    let path = path.as_ref();
    let raw =
        std::fs::read_to_string(path).map_err(|underlying| LoadRecipientsError::Unreadable {
            path: path.to_path_buf(),
            underlying,
        })?;
    let recipients = parse_recipients(&raw);
    info!(
        "📒 Loaded {} recipients from {}",
        recipients.len(),
        path.display()
    );
    Ok(recipients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const A: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const B: &str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";

    #[test]
    fn keeps_order_and_duplicates() {
        let raw = format!("{A}\n{B}\n{A}\n");
        let recipients = parse_recipients(&raw);
        assert_eq!(recipients.len(), 3);
        assert_eq!(recipients[0], recipients[2]);
        assert_eq!(recipients[1], B.parse().unwrap());
    }

    #[test]
    fn drops_invalid_and_blank_lines() {
        let raw = format!("\n  {A}  \r\n0xAAA\nnot an address\n\n{B}");
        let recipients = parse_recipients(&raw);
        assert_eq!(recipients, vec![A.parse().unwrap(), B.parse().unwrap()]);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert!(parse_recipients("").is_empty());
        assert!(parse_recipients("\n\n  \n").is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{A}").unwrap();
        writeln!(file, "garbage").unwrap();
        let recipients = load_recipients(file.path()).unwrap();
        assert_eq!(recipients, vec![A.parse().unwrap()]);
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_recipients(dir.path().join("recipients.txt"));
        assert!(matches!(result, Err(LoadRecipientsError::Unreadable { .. })));
    }
}
