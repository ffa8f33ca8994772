// Demo world: a handful of storages to run the contents panel against
//
// - Root cellar: outdoor cellar, 4 cells × 10, stocked with 12 stacks
// - Supply crate: hides its contents, 2 cells × 5
// - Shelf: an unbuilt frame, so the panel stays hidden for it

use crate::config::StorageSettings;
use crate::i18n::TICKS_PER_DAY;
use crate::world::{Category, Quality, RotState, Stockpile, StorageVariant, StoredThing};

/// Build the demo storages in tab order
pub fn world(settings: &StorageSettings) -> Vec<Stockpile> {
    vec![
        root_cellar(settings.root_cellar_temperature),
        supply_crate(settings.outdoor_temperature),
        Stockpile::new("Shelf", StorageVariant::Standard, 3, 2).as_frame(),
    ]
}

fn days(n: f64) -> u64 {
    (n * TICKS_PER_DAY as f64) as u64
}

fn root_cellar(temperature: f32) -> Stockpile {
    Stockpile::new(
        "Root cellar",
        StorageVariant::OutdoorCellar { temperature },
        10,
        4,
    )
    .stocked([
        StoredThing::new(1, Category::Food, "potatoes")
            .with_count(75)
            .with_icon('●')
            .with_description("Starchy tubers. Keep well in a cool cellar.")
            .with_rot(RotState::new(days(30.0)).with_progress(days(4.0))),
        StoredThing::new(2, Category::Food, "potatoes")
            .with_count(40)
            .with_icon('●')
            .with_description("Starchy tubers. Keep well in a cool cellar.")
            .with_rot(RotState::new(days(30.0)).with_progress(days(21.0))),
        StoredThing::new(3, Category::Food, "rice")
            .with_count(120)
            .with_icon('∴')
            .with_description("Raw rice. Needs cooking to be eaten without penalty.")
            .with_rot(RotState::new(days(40.0))),
        StoredThing::new(4, Category::Food, "corn")
            .with_count(60)
            .with_icon('♣')
            .with_description("Raw corn. Slow to spoil.")
            .with_rot(RotState::new(days(60.0)).with_progress(days(12.5))),
        StoredThing::new(5, Category::Food, "berries")
            .with_count(25)
            .with_icon('∘')
            .with_description("Wild berries. Edible raw, spoil quickly.")
            .with_rot(RotState::new(days(14.0)).with_progress(days(9.0))),
        StoredThing::new(6, Category::Food, "raw venison")
            .with_count(32)
            .with_icon('▲')
            .with_description("Meat from a deer.")
            .with_rot(RotState::new(days(2.0)).with_progress(days(0.5))),
        StoredThing::new(7, Category::Meal, "simple meal")
            .with_count(9)
            .with_icon('◊')
            .with_quality(Quality::Normal)
            .with_description("A simple meal quickly cooked from a few ingredients.")
            .with_rot(RotState::new(days(4.0)).with_progress(days(1.0))),
        StoredThing::new(8, Category::Meal, "fine meal")
            .with_count(4)
            .with_icon('◆')
            .with_quality(Quality::Good)
            .with_description("A complex dish assembled with care.")
            .with_rot(RotState::new(days(4.0))),
        StoredThing::new(9, Category::Meal, "pemmican")
            .with_count(50)
            .with_icon('■')
            .with_description("Dried meat and berries. Lasts a long time.")
            .with_rot(RotState::new(days(70.0))),
        StoredThing::new(10, Category::Medicine, "herbal medicine")
            .with_count(6)
            .with_icon('+')
            .with_description("A basic herbal remedy."),
        StoredThing::new(11, Category::Resource, "wood")
            .with_count(75)
            .with_icon('≡')
            .with_description("Logs of wood.")
            .with_hit_points(65, 65),
        StoredThing::new(12, Category::Resource, "cloth")
            .with_count(40)
            .with_icon('≈')
            .with_description("Woven plant fibers.")
            .with_hit_points(70, 100)
            .forbidden(),
    ])
}

fn supply_crate(temperature: f32) -> Stockpile {
    Stockpile::new("Supply crate", StorageVariant::Standard, 5, 2)
        .with_hidden_contents()
        .stocked(
            [
                StoredThing::new(20, Category::Resource, "steel")
                    .with_count(75)
                    .with_icon('▬')
                    .with_description("Refined iron, the backbone of construction."),
                StoredThing::new(21, Category::Resource, "components")
                    .with_count(12)
                    .with_icon('⚙')
                    .with_description("Mechanical parts for machines and electronics."),
                StoredThing::new(22, Category::Apparel, "parka")
                    .with_quality(Quality::Excellent)
                    .with_icon('Ω')
                    .with_description("A thick coat for cold weather.")
                    .with_hit_points(150, 160),
                StoredThing::new(23, Category::Apparel, "parka")
                    .with_quality(Quality::Poor)
                    .with_icon('Ω')
                    .with_description("A thick coat for cold weather.")
                    .with_hit_points(60, 160),
                StoredThing::new(24, Category::Weapon, "bolt-action rifle")
                    .with_quality(Quality::Masterwork)
                    .with_icon('╤')
                    .with_description("An old-fashioned rifle.")
                    .with_hit_points(100, 100),
                StoredThing::new(25, Category::Food, "survival meal pack")
                    .with_count(10)
                    .with_icon('▣')
                    .with_description("Preserved rations that never spoil."),
            ]
            .map(|thing| thing.with_temperature(temperature)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Storage;

    #[test]
    fn test_demo_world_layout() {
        let world = world(&StorageSettings::default());
        assert_eq!(world.len(), 3);

        let cellar = &world[0];
        assert_eq!(cellar.contents().len(), 12);
        assert_eq!(cellar.capacity(), 40);
        assert!(matches!(
            cellar.variant(),
            StorageVariant::OutdoorCellar { temperature } if temperature == 4.0
        ));

        assert!(world[1].concealed().is_some());
        assert!(world[2].is_frame());
    }
}
