use urlencoding::encode;

/// Builds a WhatsApp deep link with the message pre-filled.
///
/// Keeps only digits and '+' from the configured number, the format
/// wa.me expects.
pub fn wa_link(number: &str, text: &str) -> String {
    let digits: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("https://wa.me/{}?text={}", digits, encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_is_stripped_to_digits() {
        let link = wa_link("+58 (412) 000-00-00", "hola");
        assert!(link.starts_with("https://wa.me/+584120000000?text="));
    }

    #[test]
    fn message_text_is_percent_encoded() {
        let link = wa_link("+584120000000", "Hola, me interesa el Teléfono X");
        assert_eq!(
            link,
            "https://wa.me/+584120000000?text=Hola%2C%20me%20interesa%20el%20Tel%C3%A9fono%20X"
        );
    }
}
