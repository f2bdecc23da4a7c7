use acul_theme::{
    ApplyOutcome, EngineOptions, OmissionPolicy, RecordingTarget, ScreenContext, ThemeEngine,
    ThemeError, VariableMap,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn context(value: Value) -> ScreenContext {
    serde_json::from_value(value).expect("valid screen context")
}

fn primary_button(ctx: &ScreenContext) -> Option<String> {
    let mut style = VariableMap::new();
    ThemeEngine::new().apply(ctx, &mut style);
    style
        .get("--ul-theme-color-primary-button")
        .map(str::to_string)
}

#[test]
fn missing_or_null_branding_writes_nothing() {
    for ctx in [
        context(json!({ "screen": "login-id" })),
        context(json!({ "branding": null })),
    ] {
        let mut engine = ThemeEngine::new();
        let mut target = RecordingTarget::new();

        assert_eq!(engine.apply(&ctx, &mut target), ApplyOutcome::NoBranding);
        assert!(target.is_empty());
        assert!(engine.cache().is_empty());
    }
}

#[test]
fn organization_beats_theme_beats_settings() {
    let with_org = context(json!({
        "branding": {
            "settings": { "colors": { "primary": "A" } },
            "themes": { "default": { "colors": { "primary_button": "B" } } }
        },
        "organization": { "branding": { "colors": { "primary": "C" } } }
    }));
    assert_eq!(primary_button(&with_org).as_deref(), Some("C"));

    let without_org = context(json!({
        "branding": {
            "settings": { "colors": { "primary": "A" } },
            "themes": { "default": { "colors": { "primary_button": "B" } } }
        }
    }));
    assert_eq!(primary_button(&without_org).as_deref(), Some("B"));

    let settings_only = context(json!({
        "branding": { "settings": { "colors": { "primary": "A" } } }
    }));
    assert_eq!(primary_button(&settings_only).as_deref(), Some("A"));
}

#[test]
fn repeated_apply_writes_everything_again() {
    let ctx = context(json!({
        "branding": {
            "themes": {
                "default": {
                    "colors": { "header": "#1e212a", "body_text": "#1e212a" },
                    "widget": { "logo_url": "https://x/y.svg" }
                }
            }
        }
    }));
    let mut engine = ThemeEngine::new();
    let mut target = RecordingTarget::new();

    assert_eq!(engine.apply(&ctx, &mut target).written(), 3);
    assert_eq!(engine.apply(&ctx, &mut target).written(), 3);
    assert_eq!(target.len(), 6);

    assert_eq!(engine.update(&ctx, &mut target), ApplyOutcome::Unchanged);
    assert_eq!(target.len(), 6);
}

#[test]
fn full_theme_flattens_with_unit_conversion() {
    let ctx = context(json!({
        "branding": {
            "themes": {
                "default": {
                    "borders": {
                        "button_border_radius": 8,
                        "input_border_radius": "1em",
                        "show_widget_shadow": false
                    },
                    "fonts": {
                        "body_text_size": "150%",
                        "title_size": 50,
                        "subtitle_size": "2rem",
                        "title_bold": true,
                        "links_bold": false
                    },
                    "pageBackground": {
                        "background_color": "#000000",
                        "page_layout": "center"
                    },
                    "widget": {
                        "logo_url": "https://x/y.svg",
                        "logo_height": 52
                    }
                }
            }
        }
    }));

    let mut style = VariableMap::new();
    ThemeEngine::new().apply(&ctx, &mut style);

    let expected: VariableMap = [
        ("--ul-theme-border-button-border-radius", "8px"),
        ("--ul-theme-border-input-border-radius", "1em"),
        ("--ul-theme-border-show-widget-shadow", "false"),
        ("--ul-theme-font-body-text-size", "1.5rem"),
        ("--ul-theme-font-title-size", "0.5rem"),
        ("--ul-theme-font-subtitle-size", "2rem"),
        ("--ul-theme-font-links-weight", "400"),
        ("--ul-theme-font-title-weight", "700"),
        ("--ul-theme-page-bg-background-color", "#000000"),
        ("--ul-theme-page-bg-page-layout", "center"),
        ("--ul-theme-widget-logo-url", "\"https://x/y.svg\""),
        ("--ul-theme-widget-logo-height", "52px"),
    ]
    .into_iter()
    .collect();

    assert_eq!(style, expected);
    assert_eq!(style.get("--ul-theme-font-body-text-weight"), None);
}

#[test]
fn organization_logo_is_quoted() {
    let ctx = context(json!({
        "branding": {
            "themes": { "default": { "widget": { "logo_url": "https://x/theme.svg" } } }
        },
        "organization": { "branding": { "logoUrl": "https://x/org.svg" } }
    }));

    let mut style = VariableMap::new();
    ThemeEngine::new().apply(&ctx, &mut style);
    assert_eq!(
        style.get("--ul-theme-widget-logo-url"),
        Some("\"https://x/org.svg\"")
    );
}

#[test]
fn falsy_values_depend_on_policy() {
    let ctx = context(json!({
        "branding": {
            "themes": {
                "default": {
                    "colors": { "error": "" },
                    "borders": { "widget_corner_radius": 0 }
                }
            }
        }
    }));

    let falsy = ThemeEngine::new().compute(&ctx).unwrap();
    assert!(falsy.is_empty());

    let absent = ThemeEngine::with_options(EngineOptions {
        omission: OmissionPolicy::Absent,
    })
    .compute(&ctx)
    .unwrap();
    assert_eq!(absent.get("--ul-theme-color-error"), Some(""));
    assert_eq!(absent.get("--ul-theme-border-widget-corner-radius"), Some("0px"));
}

#[test]
fn malformed_payload_degrades_quietly() {
    let ctx = context(json!({
        "branding": {
            "settings": 42,
            "themes": {
                "default": {
                    "colors": { "header": { "nested": true }, "icons": "#65676e" },
                    "fonts": "big"
                }
            }
        },
        "organization": { "branding": { "colors": "red" } }
    }));

    let vars = ThemeEngine::new().compute(&ctx).unwrap();
    assert_eq!(
        vars,
        [("--ul-theme-color-icons", "#65676e")]
            .into_iter()
            .collect::<VariableMap>()
    );
}

#[test]
fn demo_context_loads_from_disk() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/login-id.json");
    let ctx = ScreenContext::load(&path).expect("demo context");

    assert_eq!(ctx.screen_name(), Some("login-id"));
    assert_eq!(ctx.page_title(), "Log in | Passkey Demo");
    assert!(ctx.passkey_only());

    let vars = ThemeEngine::new().compute(&ctx).unwrap();
    assert_eq!(vars.get("--ul-theme-color-primary-button"), Some("#ff5500"));
    assert_eq!(vars.get("--ul-theme-page-bg-background-color"), Some("#000000"));
    assert_eq!(
        vars.get("--ul-theme-widget-logo-url"),
        Some("\"https://cdn.example.com/settings-logo.svg\"")
    );
    assert_eq!(vars.get("--ul-theme-font-body-text-size"), Some("0.875rem"));
    assert_eq!(vars.get("--ul-theme-font-title-size"), Some("1.5rem"));
    assert_eq!(vars.get("--ul-theme-border-show-widget-shadow"), Some("true"));
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("src/lib.rs");
    let err = ScreenContext::load(&path).unwrap_err();
    assert!(matches!(err, ThemeError::UnsupportedFormat(ext) if ext == "rs"));
}
