//! Property-based tests for the credential codec and token service

use chrono::{Duration, Utc};
use clinic_backend::backend::auth::{CredentialCodec, TokenError, TokenService};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn test_hash_verifies_only_its_password(
        password in "[a-zA-Z0-9]{6,20}",
        other in "[a-zA-Z0-9]{6,20}",
    ) {
        prop_assume!(password != other);
        let codec = CredentialCodec::new();
        let hash = codec.hash(&password).unwrap();

        prop_assert!(codec.verify(&hash, &password).unwrap());
        prop_assert!(!codec.verify(&hash, &other).unwrap());
    }
}

proptest! {
    #[test]
    fn test_token_round_trip(user_id in 1i64..i64::MAX) {
        let tokens = TokenService::new("proptest-secret", Duration::hours(1));
        let token = tokens.issue(user_id).unwrap();
        prop_assert_eq!(tokens.validate(&token).unwrap(), user_id);
    }

    #[test]
    fn test_expired_tokens_rejected(user_id in 1i64..1_000_000, hours_ago in 2i64..1000) {
        let tokens = TokenService::new("proptest-secret", Duration::hours(1));
        let token = tokens
            .issue_at(user_id, Utc::now() - Duration::hours(hours_ago))
            .unwrap();
        prop_assert_eq!(tokens.validate(&token), Err(TokenError::ExpiredToken));
    }

    #[test]
    fn test_tokens_from_other_keys_rejected(user_id in 1i64..1_000_000) {
        let issuer = TokenService::new("secret-a", Duration::hours(1));
        let verifier = TokenService::new("secret-b", Duration::hours(1));
        let token = issuer.issue(user_id).unwrap();
        prop_assert_eq!(verifier.validate(&token), Err(TokenError::InvalidToken));
    }
}
