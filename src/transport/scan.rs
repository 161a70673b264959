//! Extraction of gateway-assigned identifiers from plain-text bodies.

fn leading_digits(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    Some(input.split_at(end))
}

/// Digits optionally wrapped in `[...]`, as printed by the branded gateway variant.
fn bracketed_digits(input: &str) -> Option<(&str, &str)> {
    match input.strip_prefix('[') {
        Some(rest) => {
            let (digits, rest) = leading_digits(rest)?;
            Some((digits, rest.strip_prefix(']')?))
        }
        None => leading_digits(input),
    }
}

/// `JOBID: <mobile>:<job>` at the start of the body.
pub fn job_pair(body: &str) -> Option<(&str, &str)> {
    let rest = body.trim_start().strip_prefix("JOBID:")?.trim_start();
    let (mobile, rest) = bracketed_digits(rest)?;
    let rest = rest.strip_prefix(':')?;
    let (job, _) = bracketed_digits(rest)?;
    Some((mobile, job))
}

/// Digits following the first occurrence of `marker`, whitespace allowed in between.
pub fn digits_after<'a>(body: &'a str, marker: &str) -> Option<&'a str> {
    let start = body.find(marker)? + marker.len();
    let (digits, _) = leading_digits(body[start..].trim_start())?;
    Some(digits)
}

/// The whole body as a non-negative decimal integer, surrounding whitespace ignored.
pub fn whole_number(body: &str) -> Option<u64> {
    let trimmed = body.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_pair_reads_bare_and_bracketed_forms() {
        assert_eq!(
            job_pair("JOBID: 15551234567:99881"),
            Some(("15551234567", "99881"))
        );
        assert_eq!(
            job_pair("JOBID: [919810601000]:[0042]\r\n"),
            Some(("919810601000", "0042"))
        );
        assert_eq!(job_pair("JOBID:1:2"), Some(("1", "2")));
    }

    #[test]
    fn job_pair_rejects_partial_tokens() {
        assert_eq!(job_pair("JOBID: 15551234567"), None);
        assert_eq!(job_pair("JOBID: 15551234567:"), None);
        assert_eq!(job_pair("JOBID: [155:99]"), None);
        assert_eq!(job_pair("OK 15551234567:99881"), None);
    }

    #[test]
    fn digits_after_finds_marker_anywhere() {
        assert_eq!(digits_after("BATCHID: 7781 queued", "BATCHID:"), Some("7781"));
        assert_eq!(digits_after("SERVICEID:4432", "SERVICEID:"), Some("4432"));
        assert_eq!(digits_after("SERVICEID:", "SERVICEID:"), None);
        assert_eq!(digits_after("nothing here", "BATCHID:"), None);
    }

    #[test]
    fn whole_number_is_strict() {
        assert_eq!(whole_number("42"), Some(42));
        assert_eq!(whole_number(" 42\r\n"), Some(42));
        assert_eq!(whole_number("+42"), None);
        assert_eq!(whole_number("abc"), None);
        assert_eq!(whole_number(""), None);
        assert_eq!(whole_number("99999999999999999999999"), None);
    }
}
