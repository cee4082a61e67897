use djt_details::props::{DetailsProps, FlagValue};
use djt_details::support::NativeSupport;
use djt_details::widgets::details::DetailsState;
use serde_json::json;

#[test]
fn test_visibility_defaults_to_true_when_omitted() {
    let state = DetailsState::derive(&DetailsProps::new(), &NativeSupport::new());
    assert!(state.is_visible);
}

#[test]
fn test_visibility_suppressed_by_zero_string() {
    let props = DetailsProps::new().is_visible("0");
    let state = DetailsState::derive(&props, &NativeSupport::new());
    assert!(!state.is_visible);
}

#[test]
fn test_visibility_suppressed_by_false() {
    let props = DetailsProps::new().is_visible(false);
    let state = DetailsState::derive(&props, &NativeSupport::new());
    assert!(!state.is_visible);
}

#[test]
fn test_visibility_kept_by_other_values() {
    // Only "0" and `false` are opt-out markers; even "false" is not one.
    for value in [
        FlagValue::from(true),
        FlagValue::from("1"),
        FlagValue::from("false"),
        FlagValue::from("yes"),
    ] {
        let props = DetailsProps::new().is_visible(value);
        let state = DetailsState::derive(&props, &NativeSupport::new());
        assert!(state.is_visible);
    }
}

#[test]
fn test_native_implementation_defaults_to_true() {
    let state = DetailsState::derive(&DetailsProps::new(), &NativeSupport::new());
    assert!(state.is_native_implementation);
}

#[test]
fn test_native_implementation_forced_off() {
    for value in [FlagValue::from("0"), FlagValue::from(false)] {
        let props = DetailsProps::new().native_implementation(value);
        let state = DetailsState::derive(&props, &NativeSupport::new());
        assert!(!state.is_native_implementation);
    }
}

#[test]
fn test_content_and_summary_default_to_empty() {
    let state = DetailsState::derive(&DetailsProps::new(), &NativeSupport::new());
    assert_eq!(state.content, "");
    assert_eq!(state.summary, "");
}

#[test]
fn test_css_class_defaults() {
    let state = DetailsState::derive(&DetailsProps::new(), &NativeSupport::new());
    assert_eq!(state.opened_class, "djt-details-opened");
    assert_eq!(state.closed_class, "djt-details-closed");
    assert_eq!(
        state.non_native_container_class,
        "djt-details-non-native-container"
    );
    assert_eq!(
        state.non_native_summary_class,
        "djt-details-non-native-summary"
    );
}

#[test]
fn test_css_class_overrides() {
    let props = DetailsProps::new()
        .opened_class("open")
        .closed_class("shut")
        .non_native_container_class("box")
        .non_native_summary_class("head");
    let state = DetailsState::derive(&props, &NativeSupport::new());
    assert_eq!(state.opened_class, "open");
    assert_eq!(state.closed_class, "shut");
    assert_eq!(state.non_native_container_class, "box");
    assert_eq!(state.non_native_summary_class, "head");
}

#[test]
fn test_props_from_json_value() {
    let props = DetailsProps::from_value(json!({
        "summary": "Header",
        "content": "<p>Body</p>",
        "isVisible": "0",
        "nativeImplementation": false,
        "openedClass": "open"
    }))
    .unwrap();

    assert_eq!(props.summary.as_deref(), Some("Header"));
    assert_eq!(props.content.as_deref(), Some("<p>Body</p>"));
    assert_eq!(props.is_visible, Some(FlagValue::Text("0".into())));
    assert_eq!(props.native_implementation, Some(FlagValue::Bool(false)));
    assert_eq!(props.opened_class.as_deref(), Some("open"));
}

#[test]
fn test_props_from_bad_value_is_an_error() {
    let result = DetailsProps::from_value(json!({ "isVisible": 3 }));
    assert!(result.is_err());
}
