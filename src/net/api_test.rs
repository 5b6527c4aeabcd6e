use super::*;

// =============================================================
// Base URL resolution
// =============================================================

#[test]
fn compile_time_override_wins() {
    let base = resolve_base_url(Some("https://staging.example.com/api/v1/"), "remity.io");
    assert_eq!(base, "https://staging.example.com/api/v1");
}

#[test]
fn remity_hostname_maps_to_production() {
    assert_eq!(resolve_base_url(None, "remity.io"), PRODUCTION_BASE);
    assert_eq!(resolve_base_url(None, "www.remity.io"), PRODUCTION_BASE);
}

#[test]
fn other_hostnames_fall_back_to_dev() {
    assert_eq!(resolve_base_url(None, "localhost"), DEV_BASE);
    assert_eq!(resolve_base_url(None, "127.0.0.1"), DEV_BASE);
    // A lookalike domain must not hit production.
    assert_eq!(resolve_base_url(None, "notremity.io"), DEV_BASE);
}

// =============================================================
// Form encoding
// =============================================================

#[test]
fn form_encode_plain_pairs() {
    let form = form_encode(&[("username", "user"), ("password", "secret")]);
    assert_eq!(form, "username=user&password=secret");
}

#[test]
fn form_encode_escapes_reserved_characters() {
    let form = form_encode(&[("username", "user@remity.io"), ("password", "p&ss wörd+")]);
    assert_eq!(
        form,
        "username=user%40remity.io&password=p%26ss%20w%C3%B6rd%2B"
    );
}

#[test]
fn form_encode_keeps_unreserved_characters() {
    let form = form_encode(&[("k", "a-b_c.d~e")]);
    assert_eq!(form, "k=a-b_c.d~e");
}
