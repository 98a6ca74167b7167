//! Free-form text input.

use statmaster_stats::grouped::GroupedDatum;

/// Rejected input text.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    #[display("unexpected character {ch:?} at byte {offset}")]
    InvalidCharacter { ch: char, offset: usize },
    #[display("row {row}: expected `lower upper frequency`, found {found} field(s)")]
    FieldCount { row: usize, found: usize },
    #[display("row {row}: {token:?} is not a finite number")]
    InvalidBound { row: usize, token: String },
    #[display("row {row}: frequency {token:?} is not a non-negative integer")]
    InvalidFrequency { row: usize, token: String },
    #[display("row {row}: upper bound {upper} is below lower bound {lower}")]
    InvertedBounds { row: usize, lower: f64, upper: f64 },
    #[display("no classes in grouped table")]
    EmptyTable,
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Splits `text` on runs of commas and whitespace and keeps every token that
/// parses as a finite number.
///
/// Never fails: text without numbers yields an empty sample.
///
/// # Examples
///
/// ```
/// use statmaster_data::parser::parse_numbers;
///
/// assert_eq!(parse_numbers("1, 2.5  -3,,x, 4"), vec![1.0, 2.5, -3.0, 4.0]);
/// assert!(parse_numbers(" , ").is_empty());
/// ```
#[must_use]
pub fn parse_numbers(text: &str) -> Vec<f64> {
    let mut discarded = 0_usize;
    let values = text
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                discarded += 1;
                None
            }
        })
        .collect::<Vec<_>>();
    if discarded > 0 {
        tracing::debug!(discarded, kept = values.len(), "discarded non-numeric tokens");
    }
    values
}

/// Checks that `text` only contains digits, `,`, `.`, `-` and whitespace.
///
/// # Errors
///
/// [`ParseError::InvalidCharacter`] for the first character outside that set.
///
/// ```
/// use statmaster_data::parser::{ParseError, validate_input};
///
/// assert!(validate_input("12, 13.5\n-4").is_ok());
/// assert_eq!(
///     validate_input("12, a3"),
///     Err(ParseError::InvalidCharacter { ch: 'a', offset: 4 }),
/// );
/// ```
pub fn validate_input(text: &str) -> Result<(), ParseError> {
    match text
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, ',' | '.' | '-') || c.is_whitespace()))
    {
        Some((offset, ch)) => Err(ParseError::InvalidCharacter { ch, offset }),
        None => Ok(()),
    }
}

/// Parses a grouped frequency table, one `lower upper frequency` class per
/// line or `;`-separated segment. Blank rows are skipped; rows are numbered
/// from 1 in error messages.
///
/// # Errors
///
/// Any malformed row, or [`ParseError::EmptyTable`] if no class is given.
///
/// # Examples
///
/// ```
/// use statmaster_data::parser::parse_grouped_table;
///
/// let table = parse_grouped_table("0 10 2; 10 20 6\n20,30,2").unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[1].frequency, 6);
/// assert_eq!(table[2].upper, 30.0);
/// ```
pub fn parse_grouped_table(text: &str) -> Result<Vec<GroupedDatum>, ParseError> {
    let mut table = Vec::new();
    let rows = text
        .split(['\n', ';'])
        .map(str::trim)
        .filter(|row| !row.is_empty());
    for (idx, row) in rows.enumerate() {
        table.push(parse_grouped_row(idx + 1, row)?);
    }
    if table.is_empty() {
        return Err(ParseError::EmptyTable);
    }
    Ok(table)
}

fn parse_grouped_row(row: usize, text: &str) -> Result<GroupedDatum, ParseError> {
    let fields = text
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>();
    let [lower, upper, frequency] = fields[..] else {
        return Err(ParseError::FieldCount {
            row,
            found: fields.len(),
        });
    };

    let bound = |token: &str| match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidBound {
            row,
            token: token.to_owned(),
        }),
    };
    let lower = bound(lower)?;
    let upper = bound(upper)?;
    if upper < lower {
        return Err(ParseError::InvertedBounds { row, lower, upper });
    }
    let frequency = frequency
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidFrequency {
            row,
            token: frequency.to_owned(),
        })?;
    Ok(GroupedDatum::new(lower, upper, frequency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_discards_non_finite() {
        assert_eq!(parse_numbers("1 NaN inf 2 -inf 1e999"), vec![1.0, 2.0]);
    }

    #[test]
    fn test_parse_numbers_mixed_separators() {
        assert_eq!(parse_numbers("\t7,\n8 ,9"), vec![7.0, 8.0, 9.0]);
        assert!(parse_numbers("").is_empty());
        assert!(parse_numbers("abc, def").is_empty());
    }

    #[test]
    fn test_validate_input_offsets_are_bytes() {
        assert_eq!(
            validate_input("1 ۲"),
            Err(ParseError::InvalidCharacter { ch: '۲', offset: 2 })
        );
        assert_eq!(
            validate_input("1e5"),
            Err(ParseError::InvalidCharacter { ch: 'e', offset: 1 })
        );
        assert!(validate_input("").is_ok());
    }

    #[test]
    fn test_grouped_row_errors() {
        assert_eq!(
            parse_grouped_table("0 10 2\n10 20"),
            Err(ParseError::FieldCount { row: 2, found: 2 })
        );
        assert_eq!(
            parse_grouped_table("0 x 2"),
            Err(ParseError::InvalidBound {
                row: 1,
                token: "x".to_owned()
            })
        );
        assert_eq!(
            parse_grouped_table("0 10 -1"),
            Err(ParseError::InvalidFrequency {
                row: 1,
                token: "-1".to_owned()
            })
        );
        assert_eq!(
            parse_grouped_table("0 10 1.5"),
            Err(ParseError::InvalidFrequency {
                row: 1,
                token: "1.5".to_owned()
            })
        );
        assert_eq!(
            parse_grouped_table("10 0 1"),
            Err(ParseError::InvertedBounds {
                row: 1,
                lower: 10.0,
                upper: 0.0
            })
        );
        assert_eq!(parse_grouped_table(" ;\n "), Err(ParseError::EmptyTable));
    }

    #[test]
    fn test_grouped_blank_rows_are_skipped() {
        let table = parse_grouped_table("\n0 5 1\n\n5 10 3\n").unwrap();
        assert_eq!(
            table,
            vec![GroupedDatum::new(0.0, 5.0, 1), GroupedDatum::new(5.0, 10.0, 3)]
        );
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn parse_numbers_keeps_only_finite_values(text in "\\PC*") {
            prop_assert!(parse_numbers(&text).iter().all(|v| v.is_finite()));
        }

        #[test]
        fn validated_text_only_loses_malformed_tokens(text in "[0-9,. \\-]*") {
            prop_assert!(validate_input(&text).is_ok());
            let tokens = text
                .split(is_separator)
                .filter(|token| !token.is_empty())
                .count();
            prop_assert!(parse_numbers(&text).len() <= tokens);
        }
    }
}
