/// WaafiPay wallet accounts are Somali MSISDNs: country code 252
/// followed by exactly nine digits, no plus sign or separators.
pub fn is_valid_msisdn(phone: &str) -> bool {
    phone.len() == 12 && phone.starts_with("252") && phone.chars().all(|c| c.is_ascii_digit())
}
