use super::Validator;

const MAX_LABEL_LEN: usize = 63;
const MAX_HOSTNAME_LEN: usize = 253;

/// Validate a dotted-quad IPv4 address literal.
///
/// Each of the four segments must be one to three ASCII digits with a value
/// of at most 255. Empty input is rejected.
pub fn is_ip(candidate: &str) -> bool {
    let mut segments = 0;

    for octet in candidate.split('.') {
        segments += 1;
        if segments > 4
            || octet.is_empty()
            || octet.len() > 3
            || !octet.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
        match octet.parse::<u16>() {
            Ok(value) if value <= 255 => {}
            _ => return false,
        }
    }

    segments == 4
}

/// Validate a DNS hostname.
///
/// One or more dot-separated labels of 1-63 ASCII alphanumerics or hyphens,
/// none starting or ending with a hyphen, 253 characters at most overall.
pub fn is_hostname(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    candidate.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsIp;

impl Validator for IsIp {
    fn test(&self, candidate: &str) -> bool {
        is_ip(candidate)
    }

    fn reason(&self) -> &str {
        "an IPv4 address"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsHostname;

impl Validator for IsHostname {
    fn test(&self, candidate: &str) -> bool {
        is_hostname(candidate)
    }

    fn reason(&self) -> &str {
        "a hostname"
    }
}
