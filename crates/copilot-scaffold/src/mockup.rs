//! Per-family component mockups
//!
//! Each family has a fixed, hand-picked geometry. Mockups are illustrative
//! placeholders, not reproductions of the real design-system components.

use crate::drawable::{Corners, Drawable, FontStyle, Shadow, StrokeAlign};
use crate::family::{ButtonStyle, ComponentFamily};
use copilot_model::Rgb;

/// Primary brand colour (#0B63F6)
pub const PRIMARY: Rgb = Rgb::new(0.043, 0.388, 0.965);
/// Surface colour
pub const SURFACE: Rgb = Rgb::WHITE;
/// Text on surface
pub const ON_SURFACE: Rgb = Rgb::grey(0.11);
/// Outline colour
pub const OUTLINE: Rgb = Rgb::grey(0.46);
/// Hairline separators and light borders
pub const HAIRLINE: Rgb = Rgb::grey(0.9);

/// Width shared by the stacked mockups
pub const MOCKUP_WIDTH: f64 = 280.0;
const LIST_ROW_HEIGHT: f64 = 56.0;

/// Mockup for a component name
///
/// `label` replaces the family's placeholder label when given. Unclassified
/// components always show their raw name.
#[must_use]
pub fn mockup(component_name: &str, label: Option<&str>) -> Drawable {
    let family = ComponentFamily::classify(component_name);
    tracing::debug!(component = component_name, ?family, "Synthesising mockup");
    mockup_for(family, component_name, label)
}

/// Mockup for an already-classified family
#[must_use]
pub fn mockup_for(family: ComponentFamily, component_name: &str, label: Option<&str>) -> Drawable {
    let frame = Drawable::frame(component_name, MOCKUP_WIDTH, 56.0);
    match family {
        ComponentFamily::TextField { outlined } => text_field(frame, outlined, label),
        ComponentFamily::Button(style) => button(frame, style, label),
        ComponentFamily::Checkbox => checkbox(frame, label),
        ComponentFamily::List { rows } => list(frame, rows, label),
        ComponentFamily::Expansion => expansion(frame, label),
        ComponentFamily::Card => card(frame, label),
        ComponentFamily::Generic => generic(frame, component_name),
    }
}

fn text_field(frame: Drawable, outlined: bool, label: Option<&str>) -> Drawable {
    let mut frame = if outlined {
        frame.fill(SURFACE).stroke(OUTLINE, 1.0).radius(4.0)
    } else {
        frame
            .fill(Rgb::grey(0.96))
            .corners(Corners::top(4.0))
            .child(
                Drawable::rect("Active indicator", MOCKUP_WIDTH, 1.0)
                    .at(0.0, 55.0)
                    .fill(ON_SURFACE),
            )
    };
    frame.push(
        Drawable::text(label.unwrap_or("Label"), FontStyle::Regular, 12.0)
            .at(16.0, 8.0)
            .fill(Rgb::grey(0.6)),
    );
    frame.push(
        Drawable::text("Enter text...", FontStyle::Regular, 16.0)
            .at(16.0, 28.0)
            .fill(Rgb::grey(0.7)),
    );
    frame
}

fn button(frame: Drawable, style: ButtonStyle, label: Option<&str>) -> Drawable {
    let mut frame = Drawable {
        width: 120.0,
        height: 40.0,
        ..frame
    }
    .radius(20.0);
    let text_color = match style {
        ButtonStyle::Filled => {
            frame = frame.fill(PRIMARY);
            SURFACE
        }
        ButtonStyle::Outlined => {
            frame = frame.stroke(PRIMARY, 1.0);
            PRIMARY
        }
        ButtonStyle::Text => PRIMARY,
    };
    frame.child(
        Drawable::text(label.unwrap_or("Button"), FontStyle::Medium, 14.0)
            .at(35.0, 11.0)
            .fill(text_color),
    )
}

fn checkbox(frame: Drawable, label: Option<&str>) -> Drawable {
    Drawable {
        width: 200.0,
        height: 24.0,
        ..frame
    }
    .child(
        Drawable::rect("Box", 18.0, 18.0)
            .at(0.0, 3.0)
            .stroke(ON_SURFACE, 2.0)
            .radius(2.0),
    )
    .child(
        Drawable::text(label.unwrap_or("Checkbox label"), FontStyle::Regular, 14.0)
            .at(28.0, 3.0)
            .fill(ON_SURFACE),
    )
}

fn list(frame: Drawable, rows: u8, label: Option<&str>) -> Drawable {
    let mut frame = Drawable {
        height: LIST_ROW_HEIGHT * f64::from(rows),
        ..frame
    }
    .fill(SURFACE)
    .stroke(HAIRLINE, 1.0);

    for i in 0..rows {
        let text = match label {
            Some(label) if i == 0 => label.to_string(),
            _ => format!("List item {}", i + 1),
        };
        let mut row = Drawable::frame(format!("Row {}", i + 1), MOCKUP_WIDTH, LIST_ROW_HEIGHT)
            .at(0.0, f64::from(i) * LIST_ROW_HEIGHT)
            .child(
                Drawable::text(text, FontStyle::Regular, 14.0)
                    .at(16.0, 18.0)
                    .fill(ON_SURFACE),
            );
        if i + 1 < rows {
            row.push(
                Drawable::line("Separator", MOCKUP_WIDTH)
                    .at(0.0, LIST_ROW_HEIGHT - 1.0)
                    .stroke(HAIRLINE, 1.0),
            );
        }
        frame.push(row);
    }
    frame
}

fn expansion(frame: Drawable, label: Option<&str>) -> Drawable {
    let header = Drawable::frame("Header", MOCKUP_WIDTH, 48.0)
        .child(
            Drawable::text(
                label.unwrap_or("Expansion Panel Header"),
                FontStyle::Medium,
                14.0,
            )
            .at(16.0, 14.0)
            .fill(ON_SURFACE),
        )
        .child(
            Drawable::polygon("Chevron", 12.0, 8.0)
                .at(250.0, 20.0)
                .fill(Rgb::grey(0.5)),
        );

    Drawable {
        height: 120.0,
        ..frame
    }
    .fill(SURFACE)
    .stroke(HAIRLINE, 1.0)
    .radius(4.0)
    .child(header)
    .child(
        Drawable::text("Panel content goes here...", FontStyle::Regular, 12.0)
            .at(16.0, 64.0)
            .fill(Rgb::grey(0.6)),
    )
}

fn card(frame: Drawable, label: Option<&str>) -> Drawable {
    Drawable {
        height: 160.0,
        ..frame
    }
    .fill(SURFACE)
    .radius(12.0)
    .shadow(card_shadow())
    .child(
        Drawable::text(label.unwrap_or("Card Title"), FontStyle::Medium, 16.0)
            .at(16.0, 16.0)
            .fill(ON_SURFACE),
    )
    .child(
        Drawable::text(
            "Card content and\nadditional details...",
            FontStyle::Regular,
            14.0,
        )
        .at(16.0, 48.0)
        .fill(Rgb::grey(0.5)),
    )
}

/// Fixed elevation of card mockups
#[must_use]
pub fn card_shadow() -> Shadow {
    Shadow {
        color: Rgb::BLACK,
        alpha: 0.1,
        offset_x: 0.0,
        offset_y: 2.0,
        radius: 8.0,
    }
}

fn generic(frame: Drawable, label: &str) -> Drawable {
    frame
        .fill(Rgb::grey(0.95))
        .stroke(OUTLINE, 1.0)
        .stroke_align(StrokeAlign::Inside)
        .radius(4.0)
        .child(
            Drawable::text(label, FontStyle::Regular, 12.0)
                .at(16.0, 20.0)
                .fill(Rgb::grey(0.5)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::DrawKind;

    #[test]
    fn outlined_text_field_has_border_and_no_indicator() {
        let m = mockup("md-outlined-text-field", None);
        assert_eq!((m.width, m.height), (280.0, 56.0));
        assert_eq!(m.stroke_weight, 1.0);
        assert_eq!(m.texts(), vec!["Label", "Enter text..."]);
        assert!(m.children().iter().all(|c| c.name != "Active indicator"));
    }

    #[test]
    fn filled_text_field_has_bottom_indicator() {
        let m = mockup("md-filled-text-field", Some("Email"));
        assert_eq!(m.corners, Corners::top(4.0));
        assert_eq!(m.children()[0].name, "Active indicator");
        assert_eq!(m.texts(), vec!["Email", "Enter text..."]);
    }

    #[test]
    fn buttons_are_fixed_pills() {
        for name in ["md-filled-button", "md-outlined-button", "md-text-button"] {
            let m = mockup(name, None);
            assert_eq!((m.width, m.height), (120.0, 40.0), "{name}");
            assert_eq!(m.corners, Corners::uniform(20.0));
            assert_eq!(m.texts(), vec!["Button"]);
        }
        assert_eq!(mockup("md-filled-button", None).fills.len(), 1);
        assert!(mockup("md-text-button", None).fills.is_empty());
        assert!(mockup("md-text-button", None).strokes.is_empty());
        assert_eq!(mockup("md-outlined-button", None).strokes.len(), 1);
    }

    #[test]
    fn list_rows_and_separators() {
        let list = mockup("md-list", None);
        assert_eq!(list.height, 168.0);
        assert_eq!(list.children().len(), 3);
        let separators = list
            .walk()
            .filter(|d| matches!(d.kind, DrawKind::Line))
            .count();
        assert_eq!(separators, 2);

        let item = mockup("md-list-item", None);
        assert_eq!(item.height, 56.0);
        assert_eq!(item.children().len(), 1);
        assert!(item.walk().all(|d| !matches!(d.kind, DrawKind::Line)));
    }

    #[test]
    fn expansion_has_header_chevron_and_body() {
        let m = mockup("md-expansion-panel", None);
        assert_eq!(m.height, 120.0);
        assert!(m
            .walk()
            .any(|d| matches!(d.kind, DrawKind::Polygon { .. })));
        assert_eq!(
            m.texts(),
            vec!["Expansion Panel Header", "Panel content goes here..."]
        );
    }

    #[test]
    fn card_has_fixed_shadow() {
        let m = mockup("md-elevated-card", Some("Booking"));
        assert_eq!((m.width, m.height), (280.0, 160.0));
        assert_eq!(m.shadow, Some(card_shadow()));
        assert_eq!(m.texts()[0], "Booking");
    }

    #[test]
    fn unknown_component_is_labelled_with_raw_name() {
        let m = mockup("md-switch", None);
        assert_eq!(m.texts(), vec!["md-switch"]);
        assert_eq!(m.stroke_align, StrokeAlign::Inside);
        assert_eq!(m.name, "md-switch");

        let overridden = mockup("md-switch", Some("Notifications"));
        assert_eq!(overridden.texts(), vec!["md-switch"]);
    }
}
