use djt_details::props::DetailsProps;
use djt_details::support::NativeSupport;
use djt_details::widgets::details::DetailsState;

#[test]
fn test_starts_unresolved() {
    let support = NativeSupport::new();
    assert!(!support.is_resolved());
    assert!(!support.is_unsupported());
    assert_eq!(support.get(), None);
}

#[test]
fn test_first_resolution_wins() {
    let support = NativeSupport::new();
    support.resolve(true);
    assert_eq!(support.get(), Some(true));

    support.resolve(false);
    assert_eq!(support.get(), Some(true));
}

#[test]
fn test_unsupported_never_reverts() {
    let support = NativeSupport::new();
    support.resolve(false);
    assert!(support.is_unsupported());

    support.resolve(true);
    assert!(support.is_unsupported());
}

#[test]
fn test_clones_share_the_latch() {
    let support = NativeSupport::new();
    let clone = support.clone();

    clone.resolve(false);
    assert!(support.is_unsupported());
}

#[test]
fn test_resolved_unsupported_forces_fallback_on_new_instances() {
    let support = NativeSupport::new();
    support.resolve(false);

    // Even an explicit native preference cannot override the latch.
    let props = DetailsProps::new().native_implementation(true);
    let state = DetailsState::derive(&props, &support);
    assert!(!state.is_native_implementation);
}
