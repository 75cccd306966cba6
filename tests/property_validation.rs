use couponstore_config::{ConfigLoader, ValidationPolicy};
use proptest::prelude::*;

fn block(port: i64, db_port: i64, cep: &str, expires_in: &str) -> String {
    format!(
        r#"
test:
  port: {port}
  database: {{ host: localhost, port: {db_port}, database: store, username: app, password: pw, dialect: postgres }}
  jwt: {{ secret: property-secret, expiresIn: "{expires_in}" }}
  email: {{ enabled: false }}
  admin: {{ email: admin@store.com, password: admin }}
  correios: {{ cepOrigem: "{cep}" }}
"#
    )
}

proptest! {
    /// Property: any in-range port round-trips exactly
    #[test]
    fn prop_valid_ports_round_trip(port in 1i64..=65_535, db_port in 1i64..=65_535) {
        let config = ConfigLoader::from_yaml_str(block(port, db_port, "01310-100", "1h"))
            .load("test")
            .unwrap();

        prop_assert_eq!(i64::from(config.port()), port);
        prop_assert_eq!(i64::from(config.database().port), db_port);
    }

    /// Property: ports outside 1-65535 are rejected and named
    #[test]
    fn prop_out_of_range_ports_rejected(
        db_port in prop_oneof![i64::MIN..=0, 65_536i64..=i64::MAX]
    ) {
        let err = ConfigLoader::from_yaml_str(block(3000, db_port, "01310-100", "1h"))
            .load("test")
            .unwrap_err();

        prop_assert_eq!(err.field(), Some("database.port"));
    }

    /// Property: well-formed postal codes are accepted verbatim
    #[test]
    fn prop_postal_codes_accepted(cep in "[0-9]{5}-[0-9]{3}") {
        let config = ConfigLoader::from_yaml_str(block(3000, 5432, &cep, "1h"))
            .with_policy(ValidationPolicy::lenient().with_required_cep_origem(true))
            .load("test")
            .unwrap();

        prop_assert_eq!(
            config.correios().cep_origem.as_ref().map(|c| c.as_str().to_string()),
            Some(cep)
        );
    }

    /// Property: anything that is not NNNNN-NNN is rejected
    #[test]
    fn prop_malformed_postal_codes_rejected(cep in "[a-z0-9 ]{1,12}") {
        let err = ConfigLoader::from_yaml_str(block(3000, 5432, &cep, "1h"))
            .load("test");

        // A blank value is an absent value under the lenient policy
        if cep.trim().is_empty() {
            prop_assert!(err.is_ok());
        } else {
            let err = err.unwrap_err();
            prop_assert_eq!(err.field(), Some("correios.cepOrigem"));
        }
    }

    /// Property: token lifetimes convert to the matching number of seconds
    #[test]
    fn prop_token_lifetime_seconds(count in 1u64..100_000, unit in prop::sample::select(vec!['s', 'm', 'h', 'd'])) {
        let expires_in = format!("{count}{unit}");
        let config = ConfigLoader::from_yaml_str(block(3000, 5432, "01310-100", &expires_in))
            .load("test")
            .unwrap();

        let multiplier = match unit {
            's' => 1,
            'm' => 60,
            'h' => 3_600,
            _ => 86_400,
        };
        prop_assert_eq!(config.jwt().expires_in.as_duration().as_secs(), count * multiplier);
        prop_assert_eq!(config.jwt().expires_in.as_str(), expires_in.as_str());
    }
}
