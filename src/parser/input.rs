// Comma-separated integer input

use super::errors::InputError;

/// Largest input the visualizer accepts
pub const MAX_ELEMENTS: usize = 20;

/// Input shown on startup and restored by reset
pub const DEFAULT_INPUT: &str = "7, 8, 5, 10, 6, 3, 2, 4, 1, 9";

pub const DEFAULT_VALUES: [i64; 10] = [7, 8, 5, 10, 6, 3, 2, 4, 1, 9];

/// Parse a comma-separated list of integers.
///
/// Segments are trimmed and empty ones dropped. The first segment that is
/// not a base-10 integer is reported by name.
pub fn parse_input(text: &str) -> Result<Vec<i64>, InputError> {
    let numbers = text
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment.parse::<i64>().map_err(|_| InputError::Parse {
                segment: segment.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate(&numbers)?;
    Ok(numbers)
}

/// Check that `values` holds between 1 and [`MAX_ELEMENTS`] numbers
pub fn validate(values: &[i64]) -> Result<(), InputError> {
    if values.is_empty() {
        return Err(InputError::Empty);
    }

    if values.len() > MAX_ELEMENTS {
        return Err(InputError::TooManyElements {
            count: values.len(),
            max: MAX_ELEMENTS,
        });
    }

    Ok(())
}

/// Render values back into input-line form (`"1, 2, 3"`)
pub fn format_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
