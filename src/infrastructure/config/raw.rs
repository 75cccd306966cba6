//! Unvalidated mirror of an environment block.
//!
//! Every field is optional so that a missing value reaches validation and
//! is reported by name, instead of surfacing as a deserializer error.
//! Scalars are read leniently: environment-variable overrides arrive as
//! parsed scalars (`123456` is a number), while the typed field may be a
//! string.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    #[serde(deserialize_with = "lenient::integer")]
    pub port: Option<i64>,
    pub database: RawDatabase,
    pub jwt: RawJwt,
    pub email: RawEmail,
    pub admin: RawAdmin,
    pub correios: RawCorreios,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawDatabase {
    #[serde(deserialize_with = "lenient::string")]
    pub host: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub port: Option<i64>,
    #[serde(deserialize_with = "lenient::string")]
    pub database: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub password: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub dialect: Option<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub logging: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawJwt {
    #[serde(deserialize_with = "lenient::string")]
    pub secret: Option<String>,
    #[serde(rename = "expiresIn", deserialize_with = "lenient::string")]
    pub expires_in: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawEmail {
    #[serde(deserialize_with = "lenient::boolean")]
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "lenient::string")]
    pub host: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub port: Option<i64>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub secure: Option<bool>,
    pub auth: RawEmailAuth,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawEmailAuth {
    #[serde(deserialize_with = "lenient::string")]
    pub user: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub pass: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAdmin {
    #[serde(deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCorreios {
    #[serde(deserialize_with = "lenient::string")]
    pub empresa: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub senha: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub token: Option<String>,
    #[serde(rename = "cepOrigem", deserialize_with = "lenient::string")]
    pub cep_origem: Option<String>,
}

mod lenient {
    use super::{Deserialize, Deserializer};
    use serde::de::Error;

    /// Any scalar the source may produce. Error messages built from this
    /// never include the value itself.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Bool(bool),
        Int(i64),
        UInt(u64),
        Float(f64),
        Str(String),
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Scalar>::deserialize(deserializer)
            .map_err(|_| D::Error::custom("expected a string"))?;
        Ok(value.map(|scalar| match scalar {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Str(s) => s,
        }))
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        let value = Option::<Scalar>::deserialize(deserializer)
            .map_err(|_| D::Error::custom("expected an integer"))?;
        match value {
            None => Ok(None),
            Some(Scalar::Int(n)) => Ok(Some(n)),
            Some(Scalar::UInt(n)) => Ok(Some(i64::try_from(n).unwrap_or(i64::MAX))),
            Some(Scalar::Str(s)) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom("expected an integer")),
            Some(_) => Err(D::Error::custom("expected an integer")),
        }
    }

    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        let value = Option::<Scalar>::deserialize(deserializer)
            .map_err(|_| D::Error::custom("expected a boolean"))?;
        match value {
            None => Ok(None),
            Some(Scalar::Bool(b)) => Ok(Some(b)),
            Some(Scalar::Str(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(D::Error::custom("expected a boolean")),
            },
            Some(_) => Err(D::Error::custom("expected a boolean")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default_to_none() {
        let raw: RawSettings = serde_yaml::from_str("port: 3000").unwrap();
        assert_eq!(raw.port, Some(3000));
        assert!(raw.jwt.secret.is_none());
        assert!(raw.database.port.is_none());
        assert!(raw.correios.cep_origem.is_none());
    }

    #[test]
    fn test_numeric_secret_is_read_as_string() {
        let raw: RawSettings = serde_yaml::from_str("database:\n  password: 123456").unwrap();
        assert_eq!(raw.database.password.as_deref(), Some("123456"));
    }

    #[test]
    fn test_camel_case_keys() {
        let camel: RawSettings =
            serde_yaml::from_str("jwt:\n  expiresIn: 7d\ncorreios:\n  cepOrigem: 01310-100").unwrap();
        assert_eq!(camel.jwt.expires_in.as_deref(), Some("7d"));
        assert_eq!(camel.correios.cep_origem.as_deref(), Some("01310-100"));

        // Only the source spelling is read
        let lower: RawSettings = serde_yaml::from_str("correios:\n  ceporigem: 01310-100").unwrap();
        assert_eq!(lower.correios.cep_origem, None);
    }

    #[test]
    fn test_quoted_port_and_flag() {
        let raw: RawSettings =
            serde_yaml::from_str("port: \"8080\"\ndatabase:\n  logging: \"true\"").unwrap();
        assert_eq!(raw.port, Some(8080));
        assert_eq!(raw.database.logging, Some(true));
    }

    #[test]
    fn test_type_error_does_not_echo_value() {
        let err = serde_yaml::from_str::<RawSettings>("port: [\"sup3r-s3cret\"]").unwrap_err();
        assert!(!err.to_string().contains("sup3r-s3cret"));
    }
}
