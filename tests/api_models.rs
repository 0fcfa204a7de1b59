#[cfg(test)]
mod tests {
    use catfeed::api::auth::parse_access_token;
    use catfeed::api::cats::{uploaded_image_url, RawCat};
    use catfeed::api::feeder::{parse_history, parse_schedules, parse_weight};
    use catfeed::api::{error_message, ActionResponse, ApiError, RawId};
    use catfeed::libs::cat::{Cat, CatError};
    use serde_json::json;

    #[test]
    fn test_parse_schedules_normalises_ids() {
        let body = json!({
            "schedules": [
                { "id": 1, "time": "07:00", "amount": 150, "deviceId": "bc:f6:c1:98:4a:3a" },
                { "id": "abc", "time": "18:30", "amount": "120" }
            ]
        });
        let entries = parse_schedules(body).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[0].time.to_string(), "07:00");
        assert_eq!(entries[0].amount, 150);
        assert_eq!(entries[0].device_id.as_deref(), Some("bc:f6:c1:98:4a:3a"));
        assert_eq!(entries[1].id, "abc");
        assert_eq!(entries[1].amount, 120);
        assert_eq!(entries[1].device_id, None);
    }

    #[test]
    fn test_parse_schedules_skips_invalid_entries() {
        let body = json!({
            "schedules": [
                { "id": 1, "time": "25:00", "amount": 100 },
                { "id": 2, "time": "08:00", "amount": 0 },
                { "id": 3, "time": "08:00", "amount": -50 },
                { "id": 4, "time": "08:00", "amount": 12.5 },
                { "time": "08:00", "amount": 100 },
                { "id": 6, "time": "09:15", "amount": 90 },
                "garbage"
            ]
        });
        let entries = parse_schedules(body).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "6");
    }

    #[test]
    fn test_parse_schedules_missing_list() {
        assert!(parse_schedules(json!({})).unwrap().is_empty());
        assert!(parse_schedules(json!("oops")).is_err());
    }

    #[test]
    fn test_parse_history() {
        let body = json!({
            "history": [
                { "timestamp": "2023-05-20T08:30:00Z", "amount": 150 },
                { "timestamp": "", "amount": 150 },
                { "timestamp": "2023-05-20T17:15:00Z", "amount": -1 },
                { "timestamp": "2023-05-19T09:00:00Z", "amount": "75.5" }
            ]
        });
        let events = parse_history(body).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].timestamp, "2023-05-20T08:30:00Z");
        assert_eq!(events[0].amount, 150.0);
        assert_eq!(events[1].amount, 75.5);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight(json!({ "weight": 312.4 })).unwrap(), Some(312.4));
        assert_eq!(parse_weight(json!({ "weight": "200" })).unwrap(), Some(200.0));
        assert_eq!(parse_weight(json!({ "weight": null })).unwrap(), None);
        assert_eq!(parse_weight(json!({})).unwrap(), None);
    }

    #[test]
    fn test_raw_id() {
        assert_eq!(serde_json::from_value::<RawId>(json!(42)).unwrap().into_id(), Some("42".to_string()));
        assert_eq!(serde_json::from_value::<RawId>(json!(" x1 ")).unwrap().into_id(), Some("x1".to_string()));
        assert_eq!(serde_json::from_value::<RawId>(json!("")).unwrap().into_id(), None);
    }

    #[test]
    fn test_raw_cat_conversion() {
        let raw: RawCat = serde_json::from_value(json!({
            "id": 7,
            "name": " Luna ",
            "breed": "Persian",
            "weight": "4.1",
            "photo": "https://cdn.example.com/cat_7.jpg"
        }))
        .unwrap();
        let cat = Cat::try_from(raw).unwrap();

        assert_eq!(cat.id, "7");
        assert_eq!(cat.name, "Luna");
        assert_eq!(cat.weight, Some(4.1));
        assert_eq!(cat.image_url.as_deref(), Some("https://cdn.example.com/cat_7.jpg"));

        let raw: RawCat = serde_json::from_value(json!({ "name": "Nameless" })).unwrap();
        assert_eq!(Cat::try_from(raw), Err(CatError::MissingId));
    }

    #[test]
    fn test_uploaded_image_url_keys() {
        assert_eq!(uploaded_image_url(&json!({ "imageUrl": "a" })).as_deref(), Some("a"));
        assert_eq!(uploaded_image_url(&json!({ "secure_url": "c", "url": "b" })).as_deref(), Some("b"));
        assert_eq!(uploaded_image_url(&json!({ "secure_url": "c" })).as_deref(), Some("c"));
        assert_eq!(uploaded_image_url(&json!({})), None);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"message":"Invalid credentials"}"#).as_deref(), Some("Invalid credentials"));
        assert_eq!(
            error_message(r#"{"message":["email must be an email","password too short"]}"#).as_deref(),
            Some("email must be an email, password too short")
        );
        assert_eq!(error_message(r#"{"message":""}"#), None);
        assert_eq!(error_message("<html>Bad Gateway</html>"), None);
    }

    #[test]
    fn test_action_response() {
        let ok: ActionResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert_eq!(ok.into_result("Failed to dispense food"), Ok(()));

        let rejected: ActionResponse = serde_json::from_value(json!({ "success": false, "message": "Container empty" })).unwrap();
        assert_eq!(rejected.into_result("Failed to dispense food"), Err(ApiError::Rejected("Container empty".to_string())));

        let silent: ActionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(silent.into_result("Failed to dispense food"), Err(ApiError::Rejected("Failed to dispense food".to_string())));
    }

    #[test]
    fn test_parse_access_token() {
        assert_eq!(parse_access_token(r#"{"access_token":"tok"}"#), Ok("tok".to_string()));
        assert_eq!(
            parse_access_token(r#"{"token":"tok"}"#),
            Err(ApiError::InvalidResponse("No access token received".to_string()))
        );
        assert!(parse_access_token("not json").is_err());
    }
}
