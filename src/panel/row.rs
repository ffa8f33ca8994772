// Row renderer - one stored stack per row
//
// Column layout, left to right (widths in terminal cells):
//
//   [info][icon] label ........ [spoilage text][forbid][eject]
//    B     I                     3B             B       B
//
// The right-hand cluster (spoilage, forbid, eject) is excluded from the
// whole-row hover region so its own tooltips stay reachable.

use super::host::{ButtonGlyph, Highlight, InfoCard, Tone, Ui};
use super::{FrameEffects, PanelContext, StorageCommand};
use super::{BUTTON_WIDTH, ICON_WIDTH, LABEL_OFFSET, ROW_HEIGHT};
use crate::i18n::{keys, Strings};
use crate::world::{rot_rate_at_temperature, RotBand, Thing};
use ratatui::layout::Rect;

/// Width of the right-hand control cluster, in buttons
const CLUSTER_BUTTONS: u16 = 5;

/// Width of the spoilage countdown, in buttons
const SPOIL_TEXT_BUTTONS: u16 = 3;

/// Where a row goes: its index in display order and its horizontal extent
#[derive(Debug, Clone, Copy)]
pub struct RowSlot {
    pub index: usize,
    pub x: u16,
    pub width: u16,
}

/// Draw one row at `*cursor` and advance the cursor by one row height
///
/// Control activations are recorded in `effects`; nothing is mutated here.
pub fn draw_row<T: Thing>(
    ui: &mut dyn Ui,
    ctx: &PanelContext<'_>,
    thing: &T,
    slot: RowSlot,
    cursor: &mut u16,
    effects: &mut FrameEffects,
) {
    let y = *cursor;
    let row = Rect::new(slot.x, y, slot.width, ROW_HEIGHT);
    let right = slot.x.saturating_add(slot.width);
    let cluster_x = right.saturating_sub(CLUSTER_BUTTONS * BUTTON_WIDTH);
    let control = |n: u16| Rect::new(right.saturating_sub(n * BUTTON_WIDTH), y, BUTTON_WIDTH, ROW_HEIGHT);

    if ui.mouse_over(row) {
        ui.draw_highlight(row, Highlight::Selected);
    } else if slot.index % 2 == 1 {
        ui.draw_highlight(row, Highlight::Light);
    }

    let info = Rect::new(slot.x, y, BUTTON_WIDTH, ROW_HEIGHT);
    if ui.button(info, ButtonGlyph::Info) {
        ui.open_info_card(InfoCard {
            id: thing.id(),
            label: thing.label(),
            description: thing.description(),
        });
        effects.pending.add(thing.id());
    }
    ui.tooltip(info, ctx.strings.get(keys::INFO_CARD_TOOLTIP).to_string());

    let eject = control(1);
    if ui.button(eject, ButtonGlyph::Eject) {
        effects.commands.push(StorageCommand::Eject(thing.id()));
    }
    ui.tooltip(eject, ctx.strings.get(keys::EJECT_ITEM_TOOLTIP).to_string());

    let forbid = control(2);
    let allowed = !thing.is_forbidden(ctx.faction);
    let forbid_tip = if allowed {
        keys::NOT_FORBIDDEN_DESC
    } else {
        keys::FORBIDDEN_DESC
    };
    ui.tooltip(forbid, ctx.strings.get(forbid_tip).to_string());
    let mut checked = allowed;
    ui.checkbox(forbid, &mut checked);
    if checked != allowed {
        effects.commands.push(StorageCommand::SetForbidden {
            id: thing.id(),
            forbidden: !checked,
        });
    }

    if let Some(rot) = thing.rot() {
        let spoil = Rect::new(cluster_x, y, SPOIL_TEXT_BUTTONS * BUTTON_WIDTH, ROW_HEIGHT);
        let temperature = thing.ambient_temperature();
        let countdown = match rot.ticks_until_rot_at(temperature) {
            Some(ticks) => ctx.strings.ticks_to_period(ticks),
            None => ctx.strings.get(keys::ROT_HALTED).to_string(),
        };
        ui.label(spoil, &countdown, Tone::Normal);
        let tip = spoil_tooltip(ctx.strings, rot_rate_at_temperature(temperature), &countdown);
        ui.tooltip(spoil, tip);
    }

    ui.icon(
        Rect::new(slot.x.saturating_add(BUTTON_WIDTH), y, ICON_WIDTH, ROW_HEIGHT),
        thing.icon(),
    );

    let label_x = slot.x.saturating_add(LABEL_OFFSET);
    let label_rect = Rect::new(label_x, y, cluster_x.saturating_sub(label_x), ROW_HEIGHT);
    let label = ui.truncate(&thing.label(), label_rect.width);
    ui.label(label_rect, &label, Tone::Normal);

    let hover = Rect::new(slot.x, y, cluster_x.saturating_sub(slot.x), ROW_HEIGHT);
    if ui.mouse_over(hover) {
        ui.highlight_target(thing.id());
        ui.tooltip(row, thing.description());
    }

    *cursor = y.saturating_add(ROW_HEIGHT);
}

/// Tooltip for the spoilage countdown, by rot-rate band
pub fn spoil_tooltip(strings: &Strings, rate: f32, countdown: &str) -> String {
    match RotBand::classify(rate) {
        RotBand::Frozen => format!("{}.", strings.get(keys::CURRENTLY_FROZEN)),
        RotBand::Refrigerated => {
            format!("{}.", strings.format(keys::CURRENTLY_REFRIGERATED, countdown))
        }
        RotBand::NotRefrigerated => {
            format!("{}.", strings.format(keys::NOT_REFRIGERATED, countdown))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::testing::{Op, RecordingUi};
    use crate::world::{Category, Faction, RotState, StoredThing, ThingId};
    use ratatui::layout::Position;

    const WIDTH: u16 = 48;

    fn ctx(strings: &Strings) -> PanelContext<'_> {
        PanelContext {
            strings,
            faction: Faction::PLAYER,
            temperature_unit: Default::default(),
        }
    }

    fn slot(index: usize) -> RowSlot {
        RowSlot { index, x: 0, width: WIDTH }
    }

    fn potatoes() -> StoredThing {
        StoredThing::new(4, Category::Food, "potatoes")
            .with_count(30)
            .with_description("Starchy tubers.")
            .with_rot(RotState::new(120_000))
            .with_temperature(5.0)
    }

    fn render(ui: &mut RecordingUi, thing: &StoredThing, index: usize) -> FrameEffects {
        let strings = Strings::english();
        let mut effects = FrameEffects::default();
        let mut cursor = 3;
        draw_row(ui, &ctx(&strings), thing, slot(index), &mut cursor, &mut effects);
        assert_eq!(cursor, 3 + ROW_HEIGHT);
        effects
    }

    #[test]
    fn test_background_stripes() {
        let thing = potatoes();

        let mut even = RecordingUi::new();
        render(&mut even, &thing, 0);
        assert!(even.highlights().is_empty());

        let mut odd = RecordingUi::new();
        render(&mut odd, &thing, 1);
        assert_eq!(odd.highlights(), vec![Highlight::Light]);

        let mut hovered = RecordingUi::new().pointer_at(Position::new(20, 3));
        render(&mut hovered, &thing, 1);
        assert_eq!(hovered.highlights(), vec![Highlight::Selected]);
    }

    #[test]
    fn test_eject_records_command() {
        let thing = potatoes();
        let mut ui = RecordingUi::new().click_at(Position::new(WIDTH - 1, 3));
        let effects = render(&mut ui, &thing, 0);
        assert_eq!(effects.commands, vec![StorageCommand::Eject(ThingId(4))]);
        assert!(effects.pending.is_empty());
    }

    #[test]
    fn test_forbid_click_records_negated_checkbox() {
        let thing = potatoes();
        let mut ui = RecordingUi::new().click_at(Position::new(WIDTH - BUTTON_WIDTH - 1, 3));
        let effects = render(&mut ui, &thing, 0);
        assert_eq!(
            effects.commands,
            vec![StorageCommand::SetForbidden {
                id: ThingId(4),
                forbidden: true
            }]
        );

        let forbidden = potatoes().forbidden();
        let mut ui = RecordingUi::new().click_at(Position::new(WIDTH - BUTTON_WIDTH - 1, 3));
        let effects = render(&mut ui, &forbidden, 0);
        assert_eq!(
            effects.commands,
            vec![StorageCommand::SetForbidden {
                id: ThingId(4),
                forbidden: false
            }]
        );
    }

    #[test]
    fn test_forbid_tooltip_follows_state() {
        let strings = Strings::english();
        let mut ui = RecordingUi::new();
        render(&mut ui, &potatoes().forbidden(), 0);
        assert!(ui
            .tooltips()
            .contains(&strings.get(keys::FORBIDDEN_DESC).to_string()));
        assert!(ui.ops.contains(&Op::Checkbox(
            Rect::new(WIDTH - 2 * BUTTON_WIDTH, 3, BUTTON_WIDTH, ROW_HEIGHT),
            false
        )));
    }

    #[test]
    fn test_info_button_opens_card_and_queues_selection() {
        let thing = potatoes();
        let mut ui = RecordingUi::new().click_at(Position::new(1, 3));
        let effects = render(&mut ui, &thing, 0);
        assert_eq!(effects.pending.as_slice(), &[ThingId(4)]);
        assert!(effects.commands.is_empty());
        assert!(ui.ops.iter().any(|op| matches!(
            op,
            Op::InfoCard(card) if card.id == ThingId(4) && card.label == "potatoes x30"
        )));
    }

    #[test]
    fn test_spoilage_text_only_for_perishables() {
        let mut ui = RecordingUi::new();
        render(&mut ui, &potatoes(), 0);
        // 120 000 ticks at half rate
        assert!(ui.labels().contains(&"4 days".to_string()));
        assert!(ui
            .tooltips()
            .contains(&"Refrigerated: rots in 4 days.".to_string()));

        let steel = StoredThing::new(9, Category::Resource, "steel");
        let mut ui = RecordingUi::new();
        render(&mut ui, &steel, 0);
        assert_eq!(ui.labels(), vec!["steel".to_string()]);
    }

    #[test]
    fn test_halted_countdown() {
        let frozen = potatoes().with_temperature(-4.0);
        let mut ui = RecordingUi::new();
        render(&mut ui, &frozen, 0);
        assert!(ui.labels().contains(&"halted".to_string()));
        assert!(ui.tooltips().contains(&"Frozen, not rotting.".to_string()));
    }

    #[test]
    fn test_spoil_tooltip_bands() {
        let strings = Strings::english();
        assert_eq!(spoil_tooltip(&strings, 0.0005, "1 day"), "Frozen, not rotting.");
        assert_eq!(
            spoil_tooltip(&strings, 0.5, "1 day"),
            "Refrigerated: rots in 1 day."
        );
        assert_eq!(
            spoil_tooltip(&strings, 1.0, "1 day"),
            "Not refrigerated: rots in 1 day."
        );
        assert_eq!(
            spoil_tooltip(&strings, 0.999, "1 day"),
            "Not refrigerated: rots in 1 day."
        );
    }

    #[test]
    fn test_row_hover_highlights_target_with_description() {
        let mut ui = RecordingUi::new().pointer_at(Position::new(10, 3));
        render(&mut ui, &potatoes(), 0);
        assert!(ui.ops.contains(&Op::HighlightTarget(ThingId(4))));
        assert!(ui.tooltips().contains(&"Starchy tubers.".to_string()));
    }

    #[test]
    fn test_hover_over_controls_skips_description() {
        let mut ui = RecordingUi::new().pointer_at(Position::new(WIDTH - 1, 3));
        render(&mut ui, &potatoes(), 0);
        assert!(!ui.ops.contains(&Op::HighlightTarget(ThingId(4))));
        // Still highlighted as the row under the pointer
        assert_eq!(ui.highlights(), vec![Highlight::Selected]);
    }

    #[test]
    fn test_long_label_truncated_before_cluster() {
        let thing = StoredThing::new(1, Category::Manufactured, "a".repeat(80));
        let mut ui = RecordingUi::new();
        render(&mut ui, &thing, 0);
        let width = usize::from(WIDTH - CLUSTER_BUTTONS * BUTTON_WIDTH - LABEL_OFFSET);
        let label = &ui.labels()[0];
        assert_eq!(label.chars().count(), width);
        assert!(label.ends_with('…'));
    }
}
