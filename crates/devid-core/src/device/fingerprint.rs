/// Separator placed between the installation identifier and the pseudo-hardware id.
pub const FINGERPRINT_SEPARATOR: char = '|';

/// Build the string that gets digested into the device id.
///
/// The separator only joins two non-empty parts: the result never starts or
/// ends with a stray `|`. Returns an empty string when neither input is available.
pub fn compose_fingerprint_input(installation_id: &str, pseudo_hardware_id: Option<&str>) -> String {
    let pseudo = pseudo_hardware_id.unwrap_or_default();
    let mut input = String::with_capacity(installation_id.len() + 1 + pseudo.len());

    input.push_str(installation_id);
    if !installation_id.is_empty() && !pseudo.is_empty() {
        input.push(FINGERPRINT_SEPARATOR);
    }
    input.push_str(pseudo);

    input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_inputs_present() {
        assert_eq!(
            compose_fingerprint_input("abc123", Some("00ff")),
            "abc123|00ff"
        );
    }

    #[test]
    fn test_no_leading_separator_without_installation_id() {
        assert_eq!(compose_fingerprint_input("", Some("00ff")), "00ff");
    }

    #[test]
    fn test_no_trailing_separator_without_pseudo_id() {
        assert_eq!(compose_fingerprint_input("abc123", None), "abc123");
        assert_eq!(compose_fingerprint_input("abc123", Some("")), "abc123");
    }

    #[test]
    fn test_both_inputs_empty() {
        assert_eq!(compose_fingerprint_input("", None), "");
        assert_eq!(compose_fingerprint_input("", Some("")), "");
    }
}
