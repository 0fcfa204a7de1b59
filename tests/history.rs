#[cfg(test)]
mod tests {
    use catfeed::libs::history::{aggregate_in, filter_groups, FeedingEvent, FeedingHistoryGroup, HistoryError};
    use catfeed::libs::view::View;
    use chrono::{FixedOffset, Utc};

    fn sample() -> Vec<FeedingEvent> {
        vec![
            FeedingEvent::new("2023-05-20T08:30:00Z", 150.0),
            FeedingEvent::new("2023-05-20T17:15:00Z", 150.0),
            FeedingEvent::new("2023-05-19T09:00:00Z", 150.0),
        ]
    }

    fn times(group: &FeedingHistoryGroup<Utc>) -> Vec<&str> {
        group.feedings.iter().map(|f| f.time.as_str()).collect()
    }

    #[test]
    fn test_groups_by_date() {
        let groups = aggregate_in(&sample(), &Utc);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key_string(), "2023-05-20");
        assert_eq!(times(&groups[0]), vec!["08:30 AM", "05:15 PM"]);
        assert_eq!(groups[0].feedings[0].amount, "150");
        assert_eq!(groups[1].key_string(), "2023-05-19");
        assert_eq!(times(&groups[1]), vec!["09:00 AM"]);
    }

    #[test]
    fn test_interleaved_dates_keep_insertion_order() {
        let events = vec![
            FeedingEvent::new("2023-05-20T08:30:00Z", 100.0),
            FeedingEvent::new("2023-05-19T09:00:00Z", 120.0),
            FeedingEvent::new("2023-05-20T17:15:00Z", 80.5),
        ];
        let groups = aggregate_in(&events, &Utc);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key_string(), "2023-05-20");
        assert_eq!(times(&groups[0]), vec!["08:30 AM", "05:15 PM"]);
        assert_eq!(groups[0].feedings[1].amount, "80.5");
        assert_eq!(groups[1].key_string(), "2023-05-19");
    }

    #[test]
    fn test_counts_are_preserved() {
        let events = sample();
        let groups = aggregate_in(&events, &Utc);
        let total: usize = groups.iter().map(|g| g.feedings.len()).sum();
        assert_eq!(total, events.len());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let events = sample();
        assert_eq!(aggregate_in(&events, &Utc), aggregate_in(&events, &Utc));
    }

    #[test]
    fn test_malformed_timestamp_is_skipped() {
        let events = vec![
            FeedingEvent::new("2023-05-20T08:30:00Z", 150.0),
            FeedingEvent::new("yesterday at noon", 150.0),
            FeedingEvent::new("2023-05-20T17:15:00Z", 150.0),
        ];
        let groups = aggregate_in(&events, &Utc);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].feedings.len(), 2);
    }

    #[test]
    fn test_timestamp_error_names_the_input() {
        let event = FeedingEvent::new("not-a-date", 10.0);
        assert_eq!(event.timestamp_in(&Utc), Err(HistoryError::MalformedRecord("not-a-date".to_string())));
    }

    #[test]
    fn test_empty_input_gives_no_groups() {
        assert!(aggregate_in(&[], &Utc).is_empty());
    }

    #[test]
    fn test_grouping_uses_viewer_zone() {
        // 23:30 UTC on the 19th is already the 20th in UTC+2
        let events = vec![FeedingEvent::new("2023-05-19T23:30:00Z", 150.0)];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let groups = aggregate_in(&events, &plus_two);

        assert_eq!(groups[0].key_string(), "2023-05-20");
        assert_eq!(groups[0].feedings[0].time, "01:30 AM");
    }

    #[test]
    fn test_offsetless_timestamp_is_local_wall_clock() {
        let events = vec![FeedingEvent::new("2023-05-20T08:30:00", 150.0)];
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        let groups = aggregate_in(&events, &minus_five);

        assert_eq!(groups[0].key_string(), "2023-05-20");
        assert_eq!(groups[0].feedings[0].time, "08:30 AM");
    }

    #[test]
    fn test_minute_precision_timestamps() {
        let events = vec![
            FeedingEvent::new("2023-05-20T08:30Z", 150.0),
            FeedingEvent::new("2023-05-20T19:45+02:00", 150.0),
            FeedingEvent::new("2023-05-20T21:00", 150.0),
        ];
        let groups = aggregate_in(&events, &Utc);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key_string(), "2023-05-20");
        assert_eq!(times(&groups[0]), vec!["08:30 AM", "05:45 PM", "09:00 PM"]);
    }

    #[test]
    fn test_date_only_timestamp_is_utc_midnight() {
        let events = vec![FeedingEvent::new("2023-05-20", 150.0)];

        let groups = aggregate_in(&events, &Utc);
        assert_eq!(groups[0].key_string(), "2023-05-20");
        assert_eq!(groups[0].feedings[0].time, "12:00 AM");

        // Midnight UTC is still the previous evening west of Greenwich
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        let groups = aggregate_in(&events, &minus_five);
        assert_eq!(groups[0].key_string(), "2023-05-19");
        assert_eq!(groups[0].feedings[0].time, "07:00 PM");
    }

    #[test]
    fn test_history_view_prints_groups() {
        let groups = aggregate_in(&sample(), &Utc);
        assert!(View::history(&groups).is_ok());
    }

    #[test]
    fn test_heading_format() {
        let groups = aggregate_in(&sample(), &Utc);
        assert_eq!(groups[0].heading(), "Saturday, May 20, 2023");
        assert_eq!(groups[1].heading(), "Friday, May 19, 2023");
    }

    #[test]
    fn test_filter_by_heading_or_key() {
        let groups = aggregate_in(&sample(), &Utc);

        let saturday = filter_groups(&groups, "SATURDAY");
        assert_eq!(saturday.len(), 1);
        assert_eq!(saturday[0].key_string(), "2023-05-20");

        assert_eq!(filter_groups(&groups, "2023-05-19").len(), 1);
        assert_eq!(filter_groups(&groups, "may").len(), 2);
        assert!(filter_groups(&groups, "june").is_empty());
        assert_eq!(filter_groups(&groups, "  ").len(), 2);
    }
}
