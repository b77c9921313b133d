#[derive(Debug, Fail)]
#[fail(display = "invalid duration {:?}, expected [H:[MM:]]SS", text)]
pub struct FormatError {
    text: String,
}

/// Parses a colon-delimited clock duration into a total number of seconds.
///
/// One to three fields are accepted, most significant first: `"45"` is
/// 45 seconds, `"1:50"` is 1 minute 50 seconds, `"1:10:20"` is 1 hour
/// 10 minutes 20 seconds. Fields are not bounded at 60, so `"90:00"`
/// simply means 90 minutes.
pub fn parse_duration(text: &str) -> Result<u64, FormatError> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() > 3 {
        return Err(FormatError { text: text.to_string() });
    }

    fields.iter().try_fold(0u64, |acc, field| {
        field.parse::<u64>()
            .map(|seconds| acc * 60 + seconds)
            .map_err(|_| FormatError { text: text.to_string() })
    })
}
