//! Argument normalization and value parsers.

use std::ffi::OsString;
use std::time::Duration;

/// Rewrite single-dash long flags (`-config`) to `--config`.
///
/// Short flags (`-v`) and anything already double-dashed are untouched, as
/// is the program name.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();

    normalized.extend(args.map(|arg| match arg.to_str() {
        Some(s) if s.starts_with('-') && !s.starts_with("--") && s.len() > 2 => {
            OsString::from(format!("-{}", s))
        }
        _ => arg,
    }));

    normalized
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Parse a timeout such as `30s`, `500ms`, `1m30s`, `1.5s` or a bare number
/// of seconds.
///
/// Accepts the units `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`, with
/// optional fractions, summed across components.
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("duration cannot be empty".to_string());
    }

    let duration = if value.bytes().all(|b| b.is_ascii_digit()) {
        let secs: u64 = value
            .parse()
            .map_err(|_| format!("duration '{}' is too large", value))?;
        Duration::from_secs(secs)
    } else {
        parse_components(value)?
    };

    if duration.is_zero() {
        return Err("duration must be greater than zero".to_string());
    }
    Ok(duration)
}

fn parse_components(value: &str) -> Result<Duration, String> {
    let too_large = || format!("duration '{}' is too large", value);
    let is_number = |c: char| c.is_ascii_digit() || c == '.';

    let mut total: u128 = 0;
    let mut rest = value;
    while !rest.is_empty() {
        let split = rest
            .find(|c: char| !is_number(c))
            .ok_or_else(|| format!("missing unit in duration '{}'", value))?;
        let (number, tail) = rest.split_at(split);
        let split = tail.find(is_number).unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(split);

        let scale = unit_nanos(unit).ok_or_else(|| {
            format!(
                "unknown duration unit '{}' (use ns, us, ms, s, m or h)",
                unit
            )
        })?;
        let nanos = component_nanos(number, scale)
            .ok_or_else(|| format!("invalid duration '{}'", value))?
            .ok_or_else(too_large)?;
        total = total.checked_add(nanos).ok_or_else(too_large)?;
        rest = tail;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| too_large())?;
    // remainder is below one second, so it fits
    let subsec = (total % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, subsec))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// Nanoseconds in `number` units of `scale`.
///
/// Outer `None` is a malformed number, inner `None` an overflow.
fn component_nanos(number: &str, scale: u128) -> Option<Option<u128>> {
    let (whole, frac) = match number.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (number, ""),
    };
    if (whole.is_empty() && frac.is_empty()) || frac.contains('.') {
        return None;
    }

    let whole_nanos = if whole.is_empty() {
        Some(0)
    } else {
        match whole.parse::<u128>() {
            Ok(n) => n.checked_mul(scale),
            Err(_) => return Some(None),
        }
    };

    // digits past nanosecond precision cannot change the result
    let frac = &frac[..frac.len().min(18)];
    let frac_nanos = if frac.is_empty() {
        0
    } else {
        let digits: u128 = frac.parse().ok()?;
        digits * scale / 10u128.pow(frac.len() as u32)
    };

    Some(whole_nanos.and_then(|n| n.checked_add(frac_nanos)))
}
