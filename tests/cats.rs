#[cfg(test)]
mod tests {
    use catfeed::libs::cat::{image_part_name, parse_weight, resolve, Cat, CatError, CatPatch, NewCat, BREEDS, OTHER_BREED};
    use std::path::Path;

    fn cat(id: &str, name: &str) -> Cat {
        Cat {
            id: id.to_string(),
            name: name.to_string(),
            breed: Some("Siamese".to_string()),
            weight: Some(4.2),
            image_url: None,
        }
    }

    #[test]
    fn test_validate_new_cat() {
        let new_cat = NewCat::validate("  Luna ", "Persian", "3.5").unwrap();
        assert_eq!(new_cat.name, "Luna");
        assert_eq!(new_cat.breed, "Persian");
        assert_eq!(new_cat.weight, 3.5);
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(NewCat::validate("", "Persian", "3"), Err(CatError::MissingName));
        assert_eq!(NewCat::validate("Luna", " ", "3"), Err(CatError::MissingBreed));
        assert_eq!(NewCat::validate("Luna", "Persian", ""), Err(CatError::MissingWeight));
    }

    #[test]
    fn test_parse_weight_rejects_non_positive() {
        assert_eq!(parse_weight("abc"), Err(CatError::InvalidWeight));
        assert_eq!(parse_weight("0"), Err(CatError::InvalidWeight));
        assert_eq!(parse_weight("-2"), Err(CatError::InvalidWeight));
        assert_eq!(parse_weight("NaN"), Err(CatError::InvalidWeight));
        assert_eq!(parse_weight(" 4.25 "), Ok(4.25));
    }

    #[test]
    fn test_breed_catalogue_ends_with_other() {
        assert_eq!(BREEDS.len(), 7);
        assert_eq!(BREEDS[BREEDS.len() - 1], OTHER_BREED);
    }

    #[test]
    fn test_apply_patch_only_touches_set_fields() {
        let mut luna = cat("1", "Luna");
        let patch = CatPatch {
            weight: Some(5.0),
            ..CatPatch::default()
        };
        assert!(!patch.is_empty());
        luna.apply(patch);

        assert_eq!(luna.name, "Luna");
        assert_eq!(luna.breed.as_deref(), Some("Siamese"));
        assert_eq!(luna.weight, Some(5.0));
        assert!(CatPatch::default().is_empty());
    }

    #[test]
    fn test_image_part_name() {
        assert_eq!(
            image_part_name("42", Path::new("/tmp/photo.PNG")),
            ("cat_42.png".to_string(), "image/png".to_string())
        );
        assert_eq!(
            image_part_name("7", Path::new("scan.tiff")),
            ("cat_7.jpg".to_string(), "image/jpg".to_string())
        );
        assert_eq!(
            image_part_name("7", Path::new("noext")),
            ("cat_7.jpg".to_string(), "image/jpg".to_string())
        );
    }

    #[test]
    fn test_resolve_prefers_requested_cat() {
        let cats = vec![cat("1", "Luna"), cat("2", "Milo")];
        assert_eq!(resolve(&cats, Some("2"), Some("1")).unwrap().name, "Milo");
        assert_eq!(resolve(&cats, Some("9"), Some("1")), Err(CatError::NotFound("9".to_string())));
    }

    #[test]
    fn test_resolve_falls_back_to_current_then_first() {
        let cats = vec![cat("1", "Luna"), cat("2", "Milo")];
        assert_eq!(resolve(&cats, None, Some("2")).unwrap().name, "Milo");
        assert_eq!(resolve(&cats, None, Some("gone")).unwrap().name, "Luna");
        assert_eq!(resolve(&cats, None, None).unwrap().name, "Luna");
        assert_eq!(resolve(&[], None, None), Err(CatError::NoCats));
    }
}
