//! Theme section flattening
//!
//! Each section of the default theme maps 1:1 onto a family of
//! `--ul-theme-*` custom properties. The vocabulary is closed, so every
//! section is described by a static table and flattened by one loop.

use crate::descriptor::{Section, ThemeSections};
use crate::format::Formatter;
use crate::value::OmissionPolicy;
use crate::variables::VariableMap;

/// One branding key and the variable it produces
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub key: &'static str,
    pub variable: &'static str,
    pub formatter: Formatter,
}

const fn entry(key: &'static str, variable: &'static str, formatter: Formatter) -> Entry {
    Entry {
        key,
        variable,
        formatter,
    }
}

use Formatter::{Flag, Pixels, Plain, Quoted, Rem, Weight};

pub const COLORS: &[Entry] = &[
    entry("primary_button", "--ul-theme-color-primary-button", Plain),
    entry("primary_button_label", "--ul-theme-color-primary-button-label", Plain),
    entry("secondary_button_border", "--ul-theme-color-secondary-button-border", Plain),
    entry("secondary_button_label", "--ul-theme-color-secondary-button-label", Plain),
    entry("base_focus_color", "--ul-theme-color-base-focus-color", Plain),
    entry("base_hover_color", "--ul-theme-color-base-hover-color", Plain),
    entry("links_focused_components", "--ul-theme-color-links-focused-components", Plain),
    entry("header", "--ul-theme-color-header", Plain),
    entry("body_text", "--ul-theme-color-body-text", Plain),
    entry("widget_background", "--ul-theme-color-widget-background", Plain),
    entry("widget_border", "--ul-theme-color-widget-border", Plain),
    entry("input_labels_placeholders", "--ul-theme-color-input-labels-placeholders", Plain),
    entry("input_filled_text", "--ul-theme-color-input-filled-text", Plain),
    entry("input_border", "--ul-theme-color-input-border", Plain),
    entry("input_filled_background", "--ul-theme-color-input-filled-background", Plain),
    entry("icons", "--ul-theme-color-icons", Plain),
    entry("focused_input_border", "--ul-theme-color-focused-input-border", Plain),
    entry("error", "--ul-theme-color-error", Plain),
    entry("success", "--ul-theme-color-success", Plain),
];

pub const BORDERS: &[Entry] = &[
    entry("button_border_radius", "--ul-theme-border-button-border-radius", Pixels),
    entry("button_border_weight", "--ul-theme-border-button-border-weight", Pixels),
    entry("buttons_style", "--ul-theme-border-buttons-style", Plain),
    entry("input_border_radius", "--ul-theme-border-input-border-radius", Pixels),
    entry("input_border_weight", "--ul-theme-border-input-border-weight", Pixels),
    entry("inputs_style", "--ul-theme-border-inputs-style", Plain),
    entry("show_widget_shadow", "--ul-theme-border-show-widget-shadow", Flag),
    entry("widget_border_weight", "--ul-theme-border-widget-border-weight", Pixels),
    entry("widget_corner_radius", "--ul-theme-border-widget-corner-radius", Pixels),
];

pub const FONTS: &[Entry] = &[
    entry("reference_text_size", "--ul-theme-font-reference-text-size", Rem),
    entry("body_text_size", "--ul-theme-font-body-text-size", Rem),
    entry("buttons_text_size", "--ul-theme-font-buttons-text-size", Rem),
    entry("input_labels_size", "--ul-theme-font-input-labels-size", Rem),
    entry("links_size", "--ul-theme-font-links-size", Rem),
    entry("title_size", "--ul-theme-font-title-size", Rem),
    entry("subtitle_size", "--ul-theme-font-subtitle-size", Rem),
    entry("body_text_bold", "--ul-theme-font-body-text-weight", Weight),
    entry("buttons_text_bold", "--ul-theme-font-buttons-text-weight", Weight),
    entry("input_labels_bold", "--ul-theme-font-input-labels-weight", Weight),
    entry("links_bold", "--ul-theme-font-links-weight", Weight),
    entry("title_bold", "--ul-theme-font-title-weight", Weight),
    entry("subtitle_bold", "--ul-theme-font-subtitle-weight", Weight),
    entry("body_url", "--ul-theme-font-body-url", Quoted),
    entry("buttons_url", "--ul-theme-font-buttons-url", Quoted),
    entry("input_labels_url", "--ul-theme-font-input-labels-url", Quoted),
    entry("links_url", "--ul-theme-font-links-url", Quoted),
    entry("title_url", "--ul-theme-font-title-url", Quoted),
    entry("subtitle_url", "--ul-theme-font-subtitle-url", Quoted),
];

pub const PAGE_BACKGROUND: &[Entry] = &[
    entry("background_color", "--ul-theme-page-bg-background-color", Plain),
    entry("background_image_url", "--ul-theme-page-bg-background-image-url", Quoted),
    entry("page_layout", "--ul-theme-page-bg-page-layout", Plain),
];

pub const WIDGET: &[Entry] = &[
    entry("logo_url", "--ul-theme-widget-logo-url", Quoted),
    entry("logo_height", "--ul-theme-widget-logo-height", Pixels),
    entry("logo_position", "--ul-theme-widget-logo-position", Plain),
    entry("header_text_alignment", "--ul-theme-widget-header-text-alignment", Plain),
    entry("social_buttons_layout", "--ul-theme-widget-social-buttons-layout", Plain),
];

/// Flatten one section through its table
pub fn flatten_section(section: &Section, table: &[Entry], policy: OmissionPolicy) -> VariableMap {
    let mut vars = VariableMap::new();
    for entry in table {
        let Some(value) = section.get(entry.key) else {
            continue;
        };
        if !entry.formatter.checks_absence_only() && !value.is_present(policy) {
            continue;
        }
        if let Some(css) = entry.formatter.format(value) {
            vars.insert(entry.variable, css);
        }
    }
    vars
}

pub fn flatten_colors(colors: &Section, policy: OmissionPolicy) -> VariableMap {
    flatten_section(colors, COLORS, policy)
}

pub fn flatten_borders(borders: &Section, policy: OmissionPolicy) -> VariableMap {
    flatten_section(borders, BORDERS, policy)
}

pub fn flatten_fonts(fonts: &Section, policy: OmissionPolicy) -> VariableMap {
    flatten_section(fonts, FONTS, policy)
}

pub fn flatten_page_background(page_background: &Section, policy: OmissionPolicy) -> VariableMap {
    flatten_section(page_background, PAGE_BACKGROUND, policy)
}

pub fn flatten_widget(widget: &Section, policy: OmissionPolicy) -> VariableMap {
    flatten_section(widget, WIDGET, policy)
}

/// Flatten every section of `theme`. Missing sections contribute nothing.
pub fn flatten_theme(theme: &ThemeSections, policy: OmissionPolicy) -> VariableMap {
    let sections: [(Option<&Section>, &[Entry]); 5] = [
        (theme.colors.as_ref(), COLORS),
        (theme.borders.as_ref(), BORDERS),
        (theme.fonts.as_ref(), FONTS),
        (theme.page_background(), PAGE_BACKGROUND),
        (theme.widget.as_ref(), WIDGET),
    ];

    let mut vars = VariableMap::new();
    for (section, table) in sections {
        if let Some(section) = section {
            vars.merge(flatten_section(section, table, policy));
        }
    }
    vars
}
