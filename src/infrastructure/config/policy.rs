/// Prefix carried by every secret in the distributed template.
pub const PLACEHOLDER_PREFIX: &str = "CHANGE_ME";

/// JWT secrets shorter than this are reported as weak.
pub const RECOMMENDED_JWT_SECRET_LEN: usize = 32;

/// Environment whose policy is strict by default.
pub const PRODUCTION: &str = "production";

/// Rules applied on top of the fixed field constraints.
///
/// The fixed constraints (ports in range, required fields present, formats)
/// always apply. The policy decides the parts that depend on where the
/// configuration is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    /// Fail when `correios.cepOrigem` is empty or absent.
    pub require_cep_origem: bool,

    /// Fail when a secret still carries the template placeholder.
    pub reject_placeholders: bool,

    /// Hard minimum length of `jwt.secret`. Zero disables the check; weak
    /// secrets are then only logged.
    pub min_jwt_secret_len: usize,
}

impl ValidationPolicy {
    /// Lenient policy used for development and test environments.
    pub const fn lenient() -> Self {
        Self {
            require_cep_origem: false,
            reject_placeholders: false,
            min_jwt_secret_len: 0,
        }
    }

    /// Strict policy used for production.
    pub const fn strict() -> Self {
        Self {
            require_cep_origem: false,
            reject_placeholders: true,
            min_jwt_secret_len: RECOMMENDED_JWT_SECRET_LEN,
        }
    }

    /// Default policy for an environment name.
    pub fn for_environment(environment: &str) -> Self {
        if environment.eq_ignore_ascii_case(PRODUCTION) {
            Self::strict()
        } else {
            Self::lenient()
        }
    }

    /// Require the Correios origin postal code.
    #[must_use]
    pub const fn with_required_cep_origem(mut self, required: bool) -> Self {
        self.require_cep_origem = required;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_per_environment() {
        assert_eq!(ValidationPolicy::for_environment("production"), ValidationPolicy::strict());
        assert_eq!(ValidationPolicy::for_environment("Production"), ValidationPolicy::strict());
        assert_eq!(ValidationPolicy::for_environment("development"), ValidationPolicy::lenient());
        assert_eq!(ValidationPolicy::for_environment("test"), ValidationPolicy::default());
    }

    #[test]
    fn test_required_cep_origem_builder() {
        let policy = ValidationPolicy::lenient().with_required_cep_origem(true);
        assert!(policy.require_cep_origem);
        assert!(!policy.reject_placeholders);
    }
}
