//! # Integration Test Flows
//!
//! Tests that the sealed-envelope codec and the cookie-session adapter work
//! together correctly over a real transport implementation.
//!
//! ## Flows Tested
//!
//! 1. **Service → Jar → Service**: a full write/read round trip through the
//!    in-memory cookie jar, as a browser would replay it.
//! 2. **Hostile client**: the "client" edits its jar between requests and
//!    every forgery collapses to the empty payload.
//! 3. **Key rotation / multi-server drift**: tokens sealed under one key are
//!    rejected under another.
//! 4. **Lifecycle contract**: open/close/gc succeed, destroy is idempotent.

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;
    use rand::RngCore;

    use cookie_session::{
        CookieSessionService, CookieTransport, Expiry, MemoryCookieJar, SessionLifecycle,
    };
    use sealed_envelope::{EnvelopeConfig, HashAlgo, SealedEnvelope, UnsealOutcome};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn init_logging() {
        // Best-effort: a second init in the same process is fine to ignore.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn service_with_secret(secret: &str) -> CookieSessionService<MemoryCookieJar> {
        CookieSessionService::new(SealedEnvelope::with_secret(secret), MemoryCookieJar::new())
    }

    // =============================================================================
    // FLOW 1: full round trip through the jar
    // =============================================================================

    #[test]
    fn test_write_read_destroy_cycle() {
        init_logging();
        let service = service_with_secret("integration-secret");

        // First request: no cookie yet.
        assert!(service.read("sess-abc").is_empty());

        // Server writes session state; client's jar now holds the token.
        assert!(service.write("sess-abc", b"user=42;theme=dark"));

        // Next request: the jar replays the cookie and the payload survives.
        assert_eq!(service.read("sess-abc"), b"user=42;theme=dark");

        // Logout.
        assert!(service.destroy("sess-abc"));
        assert!(service.read("sess-abc").is_empty());
    }

    #[test]
    fn test_randomized_payload_round_trips() {
        let service = service_with_secret("integration-secret");
        let mut rng = rand::thread_rng();

        for _ in 0..32 {
            let mut payload = vec![0u8; (rng.next_u32() % 512) as usize];
            rng.fill_bytes(&mut payload);

            assert!(service.write("sess-rng", &payload));
            assert_eq!(service.read("sess-rng"), payload);
        }
    }

    #[test]
    fn test_storage_surface_over_jar() {
        let service = service_with_secret("integration-secret");

        assert!(!service.has("cart"));
        assert_eq!(service.get("cart", b"empty"), b"empty");

        assert!(service.make("cart", b"sku:9987,qty:2", Some(30)));
        assert!(service.has("cart"));
        assert_eq!(service.get("cart", b"empty"), b"sku:9987,qty:2");

        assert!(service.forget("cart"));
        assert!(!service.has("cart"));
    }

    // =============================================================================
    // FLOW 2: hostile client edits its jar
    // =============================================================================

    #[test]
    fn test_client_side_forgery_rejected() {
        let codec = SealedEnvelope::with_secret("integration-secret");
        let jar = MemoryCookieJar::new();
        let service = CookieSessionService::new(codec, jar);

        service.write("sess-abc", b"role=user");
        let token = service_jar_token(&service, "sess-abc");

        // The client flips every byte of the decoded blob in turn and
        // replays each forgery. None may survive.
        let raw = BASE64.decode(&token).unwrap();
        for i in 0..raw.len() {
            let mut forged = raw.clone();
            forged[i] ^= 0x80;
            replace_jar_token(&service, "sess-abc", &BASE64.encode(&forged));

            assert!(
                service.read("sess-abc").is_empty(),
                "forgery at byte {} accepted",
                i
            );
        }

        // The untouched token still verifies afterwards.
        replace_jar_token(&service, "sess-abc", &token);
        assert_eq!(service.read("sess-abc"), b"role=user");
    }

    #[test]
    fn test_truncated_and_garbage_cookies_rejected() {
        let service = service_with_secret("integration-secret");
        service.write("sess-abc", b"data");
        let token = service_jar_token(&service, "sess-abc");

        // Truncation below the tag length.
        replace_jar_token(&service, "sess-abc", &BASE64.encode(b"x"));
        assert!(service.read("sess-abc").is_empty());

        // Not base64 at all.
        replace_jar_token(&service, "sess-abc", "totally%%garbage");
        assert!(service.read("sess-abc").is_empty());

        // Sanity: the legitimate token still works.
        replace_jar_token(&service, "sess-abc", &token);
        assert_eq!(service.read("sess-abc"), b"data");
    }

    // =============================================================================
    // FLOW 3: key rotation / multi-server drift
    // =============================================================================

    #[test]
    fn test_token_does_not_survive_key_change() {
        let old_service = service_with_secret("deploy-2025-key");
        old_service.write("sess-abc", b"user=42");
        let token = service_jar_token(&old_service, "sess-abc");

        let new_service = service_with_secret("deploy-2026-key");
        replace_jar_token(&new_service, "sess-abc", &token);

        // Rotated key: the old session is simply gone, not an error.
        assert!(new_service.read("sess-abc").is_empty());
    }

    #[test]
    fn test_sha256_configuration_end_to_end() {
        let codec = SealedEnvelope::new(
            EnvelopeConfig::with_secret("integration-secret").algo(HashAlgo::Sha256),
        )
        .unwrap();
        let service = CookieSessionService::new(codec, MemoryCookieJar::new());

        service.write("sess-abc", b"compact-tag");
        assert_eq!(service.read("sess-abc"), b"compact-tag");

        // 32-byte tag on the wire: token decodes to payload + 32.
        let raw = BASE64
            .decode(service_jar_token(&service, "sess-abc"))
            .unwrap();
        assert_eq!(raw.len(), b"compact-tag".len() + 32);
    }

    // =============================================================================
    // FLOW 4: lifecycle contract
    // =============================================================================

    #[test]
    fn test_host_lifecycle_contract() {
        let service = service_with_secret("integration-secret");

        assert!(service.open("/tmp/sessions", "SESSID"));
        assert!(service.write("sess-abc", b"x"));
        assert!(service.gc(1440));
        assert!(service.destroy("sess-abc"));
        assert!(service.destroy("sess-abc"));
        assert!(service.close());
    }

    #[test]
    fn test_codec_outcomes_collapse_uniformly() {
        // The adapter boundary promises one observable outcome for all
        // three rejection reasons.
        let codec = SealedEnvelope::with_secret("integration-secret");

        let absent = codec.unseal(None);
        let malformed = codec.unseal(Some("!!!"));
        let short = codec.unseal(Some(&BASE64.encode(b"tiny")));
        let other_key = SealedEnvelope::with_secret("other").unseal(Some(&codec.seal(b"p")));

        assert_eq!(absent, UnsealOutcome::Absent);
        assert_eq!(malformed, UnsealOutcome::Malformed);
        assert_eq!(short, UnsealOutcome::Malformed);
        assert_eq!(other_key, UnsealOutcome::TagMismatch);

        for outcome in [absent, malformed, short, other_key] {
            assert!(outcome.into_payload().is_empty());
        }
    }

    // =============================================================================
    // HELPERS
    // =============================================================================

    /// Pull the raw token out of the service's jar, as the client sees it.
    fn service_jar_token(
        service: &CookieSessionService<MemoryCookieJar>,
        name: &str,
    ) -> String {
        service
            .transport()
            .get(name)
            .expect("jar holds a token")
    }

    /// Overwrite the jar entry, simulating a client editing its cookie.
    fn replace_jar_token(
        service: &CookieSessionService<MemoryCookieJar>,
        name: &str,
        token: &str,
    ) {
        service
            .transport()
            .set(name, token, Expiry::SessionLived);
    }
}
