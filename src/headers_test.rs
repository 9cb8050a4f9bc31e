use super::*;

mod new {
    use super::*;

    #[test]
    fn should_start_with_empty_headers_when_called() {
        // Arrange & Act
        let collection = HeaderCollection::new();

        // Assert
        assert!(collection.into_headers().is_empty());
    }
}

mod push {
    use super::*;

    #[test]
    fn should_store_once_given_header_is_regular() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Trace");
        collection.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Other");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some(&"X-Other".to_string())
        );
    }

    #[test]
    fn should_use_deduplicated_value_given_header_is_vary() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::VARY, "Origin");
        collection.push(header::VARY, "origin");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.get(header::VARY), Some(&"Origin".to_string()));
    }

    #[test]
    fn should_keep_insertion_order_given_several_headers() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        collection.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        collection.push(header::ACCESS_CONTROL_MAX_AGE, "60");

        // Assert
        let names: Vec<_> = collection.into_headers().into_keys().collect();
        assert_eq!(
            names,
            vec![
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                header::ACCESS_CONTROL_MAX_AGE,
            ]
        );
    }
}

mod add_vary {
    use super::*;

    #[test]
    fn should_remove_header_given_only_blank_entries() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.add_vary("  ");

        // Assert
        assert!(collection.into_headers().get(header::VARY).is_none());
    }
}

mod extend {
    use super::*;

    #[test]
    fn should_merge_vary_given_both_collections_have_it() {
        // Arrange
        let mut first = HeaderCollection::new();
        first.add_vary("Accept-Encoding");
        let mut second = HeaderCollection::new();
        second.add_vary("Origin");

        // Act
        first.extend(second);

        // Assert
        let headers = first.into_headers();
        assert_eq!(
            headers.get(header::VARY),
            Some(&"Accept-Encoding, Origin".to_string())
        );
    }
}
