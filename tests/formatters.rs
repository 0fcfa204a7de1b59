#[cfg(test)]
mod tests {
    use catfeed::libs::formatter::{format_grams, format_meal, format_weight};
    use catfeed::libs::messages::Message;
    use catfeed::libs::schedule::NextMeal;
    use catfeed::msg_error_anyhow;

    #[test]
    fn test_format_grams() {
        assert_eq!(format_grams(150.0), "150g");
        assert_eq!(format_grams(0.0), "0g");
        assert_eq!(format_grams(1234.56), "1234.6g");
        assert_eq!(format_grams(87.26), "87.3g");
        assert_eq!(format_grams(2.5), "2.5g");
    }

    #[test]
    fn test_format_weight_unknown() {
        assert_eq!(format_weight(None), "--");
        assert_eq!(format_weight(Some(512.0)), "512g");
    }

    #[test]
    fn test_format_meal() {
        let meal = NextMeal {
            time: "07:00".parse().unwrap(),
            amount: 150,
        };
        assert_eq!(format_meal(&meal), "07:00 - 150g");
    }

    #[test]
    fn test_message_text() {
        assert_eq!(Message::EmptyCredentials.to_string(), "Please fill in all fields");
        assert_eq!(Message::WrongPassword(3).to_string(), "You entered the wrong password 3 times!");
        assert_eq!(
            Message::ContainerWeight(format_weight(Some(320.0))).to_string(),
            "The current weight of the container is: 320g"
        );
        assert_eq!(
            Message::DraftPreview {
                time: "07:30".to_string(),
                portion: 160
            }
            .to_string(),
            "Feed at 07:30 - 160g"
        );
    }

    #[test]
    fn test_error_macro_prefix() {
        let err = msg_error_anyhow!(Message::NoCatSelected);
        assert_eq!(err.to_string(), "❌ Please select a cat first");
    }
}
