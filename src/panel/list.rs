// List view - heading plus the scrollable rows
//
// Re-reads and re-sorts the storage contents on every call. Spoilage
// countdowns and forbidden flags change outside the panel's control, so a
// cached order could show stale rows.

use super::host::{Highlight, Tone, Ui};
use super::row::{draw_row, RowSlot};
use super::sort::sort_things;
use super::{FrameEffects, PanelContext, RenderState};
use super::{HEADING_HEIGHT, ROW_HEIGHT, SCROLLBAR_WIDTH};
use crate::i18n::keys;
use crate::world::{Storage, StorageVariant};
use ratatui::layout::Rect;

/// Draw the contents list of `storage` inside `bounds`
pub fn draw_contents<S: Storage>(
    ui: &mut dyn Ui,
    ctx: &PanelContext<'_>,
    storage: &S,
    bounds: Rect,
    state: &mut RenderState,
    effects: &mut FrameEffects,
) {
    let things = sort_things(storage.contents());
    let width = bounds.width.saturating_sub(SCROLLBAR_WIDTH);
    let mut cursor = bounds.y;

    let heading = Rect::new(bounds.x, cursor, width, 1);
    ui.label(heading, &heading_text(ctx, storage, things.len()), Tone::Heading);
    ui.separator(Rect::new(bounds.x, cursor.saturating_add(1), width, 1));
    if ui.mouse_over(heading) {
        ui.draw_highlight(heading, Highlight::Hover);
        ui.tooltip(
            heading,
            ctx.strings.get(keys::CONTAINED_ITEMS_DESC).to_string(),
        );
    }
    cursor = cursor.saturating_add(HEADING_HEIGHT);

    if things.is_empty() {
        ui.label(
            Rect::new(bounds.x, cursor, width, ROW_HEIGHT),
            ctx.strings.get(keys::NONE_BRACKETS),
            Tone::Muted,
        );
        return;
    }

    let rows = u16::try_from(things.len()).unwrap_or(u16::MAX);
    let outer = Rect::new(
        bounds.x,
        cursor,
        bounds.width,
        bounds.bottom().saturating_sub(cursor),
    );
    let content = Rect::new(bounds.x, cursor, width, ROW_HEIGHT.saturating_mul(rows));

    ui.begin_scroll_view(outer, &mut state.scroll, content);
    for (index, thing) in things.iter().enumerate() {
        let slot = RowSlot {
            index,
            x: bounds.x,
            width,
        };
        draw_row(ui, ctx, *thing, slot, &mut cursor, effects);
    }
    ui.end_scroll_view();
}

/// `Contents (12 / 40 items, 4°C)`; the temperature only for outdoor cellars
pub fn heading_text<S: Storage>(ctx: &PanelContext<'_>, storage: &S, count: usize) -> String {
    let mut text = format!(
        "{} ({} / {} {}",
        ctx.strings.get(keys::TAB_CONTENTS),
        count,
        storage.capacity(),
        ctx.strings.get(keys::ITEMS_LOWER)
    );
    if let StorageVariant::OutdoorCellar { temperature } = storage.variant() {
        text.push_str(", ");
        text.push_str(&ctx.strings.temperature(temperature, ctx.temperature_unit));
    }
    text.push(')');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Strings, TemperatureUnit};
    use crate::panel::testing::{Op, RecordingUi};
    use crate::world::{Category, Faction, Quality, Stockpile, StoredThing};
    use ratatui::layout::Position;

    const BOUNDS: Rect = Rect {
        x: 2,
        y: 3,
        width: 50,
        height: 12,
    };

    fn ctx(strings: &Strings) -> PanelContext<'_> {
        PanelContext {
            strings,
            faction: Faction::PLAYER,
            temperature_unit: TemperatureUnit::Celsius,
        }
    }

    fn cellar(count: u32) -> Stockpile {
        Stockpile::new(
            "Root cellar",
            StorageVariant::OutdoorCellar { temperature: 4.0 },
            10,
            4,
        )
        .stocked(
            (0..count).map(|i| StoredThing::new(i, Category::Resource, format!("stack {i:02}"))),
        )
    }

    fn render(ui: &mut RecordingUi, storage: &Stockpile) -> FrameEffects {
        let strings = Strings::english();
        let mut state = RenderState::default();
        let mut effects = FrameEffects::default();
        draw_contents(ui, &ctx(&strings), storage, BOUNDS, &mut state, &mut effects);
        effects
    }

    #[test]
    fn test_heading_shows_count_capacity_and_cellar_temperature() {
        let mut ui = RecordingUi::new();
        render(&mut ui, &cellar(12));
        assert_eq!(ui.labels()[0], "Contents (12 / 40 items, 4°C)");
    }

    #[test]
    fn test_heading_without_temperature_for_standard_storage() {
        let strings = Strings::english();
        let shelf = Stockpile::new("Shelf", StorageVariant::Standard, 3, 2);
        assert_eq!(
            heading_text(&ctx(&strings), &shelf, 0),
            "Contents (0 / 6 items)"
        );
    }

    #[test]
    fn test_heading_hover_shows_description() {
        let mut ui = RecordingUi::new().pointer_at(Position::new(5, 3));
        render(&mut ui, &cellar(1));
        assert!(ui
            .ops
            .contains(&Op::Highlight(Rect::new(2, 3, 49, 1), Highlight::Hover)));
        assert!(ui.tooltips()[0].starts_with("Things stored here."));
    }

    #[test]
    fn test_empty_storage_shows_placeholder_without_scroll_view() {
        let mut ui = RecordingUi::new();
        render(&mut ui, &cellar(0));
        assert_eq!(
            ui.ops.last(),
            Some(&Op::Label(Rect::new(2, 5, 49, 1), "(none)".to_string(), Tone::Muted))
        );
        assert!(!ui.opened_scroll_view());
    }

    #[test]
    fn test_scroll_view_sized_to_rows() {
        let mut ui = RecordingUi::new();
        render(&mut ui, &cellar(30));
        assert!(ui.ops.contains(&Op::BeginScroll {
            outer: Rect::new(2, 5, 50, 10),
            content: Rect::new(2, 5, 49, 30),
        }));
        assert_eq!(ui.ops.last(), Some(&Op::EndScroll));
    }

    #[test]
    fn test_rows_follow_sorted_order() {
        let pile = Stockpile::new("Shelf", StorageVariant::Standard, 3, 2).stocked([
            StoredThing::new(1, Category::Resource, "steel"),
            StoredThing::new(2, Category::Apparel, "parka").with_quality(Quality::Poor),
            StoredThing::new(3, Category::Meal, "simple meal"),
            StoredThing::new(4, Category::Apparel, "parka").with_quality(Quality::Masterwork),
        ]);
        let mut ui = RecordingUi::new();
        render(&mut ui, &pile);

        let icons: Vec<Rect> = ui
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Icon(rect, _) => Some(*rect),
                _ => None,
            })
            .collect();
        let ys: Vec<u16> = icons.iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![5, 6, 7, 8]);

        let labels: Vec<String> = ui.labels().into_iter().skip(1).collect();
        assert_eq!(
            labels,
            vec![
                "simple meal",
                "steel",
                "parka (masterwork)",
                "parka (poor)"
            ]
        );
    }

    #[test]
    fn test_scroll_state_persists_in_render_state() {
        let strings = Strings::english();
        let storage = cellar(30);
        let mut state = RenderState::default();
        let mut effects = FrameEffects::default();

        let mut ui = RecordingUi::new();
        draw_contents(&mut ui, &ctx(&strings), &storage, BOUNDS, &mut state, &mut effects);
        state.scroll.scroll_to_bottom();

        let mut ui = RecordingUi::new();
        draw_contents(&mut ui, &ctx(&strings), &storage, BOUNDS, &mut state, &mut effects);
        assert_eq!(state.scroll.offset(), 20);
    }
}
