/// Strips every character that is not an ASCII digit.
///
/// Used both for query-string phone lookups and for comparing phone fields
/// of returned records.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
