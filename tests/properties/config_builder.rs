//! Property tests for config and deeplink construction.

use proptest::prelude::*;

use cargodham_deploy::{build_config, Deeplink};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The base URL is embedded verbatim as the third launcher argument.
    #[test]
    fn property_base_url_is_third_arg(url in any::<String>()) {
        let built = build_config(&url).unwrap();
        prop_assert_eq!(built.config.args().len(), 3);
        prop_assert_eq!(&built.config.args()[2], &url);
    }

    /// PROPERTY: Decoding the deeplink yields the config it was built from.
    #[test]
    fn property_deeplink_decodes_to_config(url in any::<String>()) {
        let built = build_config(&url).unwrap();
        let reparsed = Deeplink::parse(built.deeplink.as_str()).unwrap();
        prop_assert_eq!(reparsed.decode_config().unwrap(), built.config);
    }

    /// PROPERTY: Same input, same deeplink.
    #[test]
    fn property_build_is_deterministic(url in any::<String>()) {
        let a = build_config(&url).unwrap();
        let b = build_config(&url).unwrap();
        prop_assert_eq!(a.deeplink.as_str(), b.deeplink.as_str());
    }

    /// PROPERTY: Compact JSON is printable ASCII only.
    #[test]
    fn property_compact_json_is_printable_ascii(url in any::<String>()) {
        let built = build_config(&url).unwrap();
        let json = built.config.to_compact_json().unwrap();
        prop_assert!(json.chars().all(|c| (' '..='~').contains(&c)), "got {:?}", json);
        prop_assert!(built.deeplink.as_str().is_ascii());
    }
}
