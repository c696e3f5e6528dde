//! Battle configuration: who the player fields, what can appear in the
//! wild, and what starts in the bag. Loaded from RON data files or taken
//! from the built-in demo roster.

use crate::errors::{RosterError, RosterResult};
use crate::inventory::Inventory;
use schema::{ElementalType, ItemDefinition, MoveDefinition, SpeciesTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub player: SpeciesTemplate,
    #[serde(default)]
    pub player_name: Option<String>,
    pub encounters: Vec<SpeciesTemplate>,
    #[serde(default)]
    pub items: BTreeMap<String, ItemDefinition>,
}

impl Roster {
    /// Load a roster from a RON file and validate it.
    pub fn load(path: &Path) -> RosterResult<Roster> {
        let content = fs::read_to_string(path)?;
        let roster = Self::from_ron_str(&content)?;
        log::info!(
            "Loaded roster from {} ({} wild species, {} items)",
            path.display(),
            roster.encounters.len(),
            roster.items.len()
        );
        Ok(roster)
    }

    pub fn from_ron_str(content: &str) -> RosterResult<Roster> {
        let roster: Roster = ron::from_str(content)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Checks every template and item. Deserialized records never passed
    /// through their constructors, so this is where bad bounds are caught.
    pub fn validate(&self) -> RosterResult<()> {
        self.player.validate()?;
        if self.encounters.is_empty() {
            return Err(RosterError::EmptyEncounterTable);
        }
        for template in &self.encounters {
            template.validate()?;
        }
        for item in self.items.values() {
            item.validate()?;
        }
        Ok(())
    }

    pub fn inventory(&self) -> Inventory {
        Inventory::new(self.items.clone())
    }

    /// The default demo roster: one electric mouse against a fire lizard
    /// or a seed creature.
    pub fn builtin() -> Roster {
        let player = species(
            "Pikachu",
            100,
            vec![
                move_def("Thunder Shock", 18, ElementalType::Electric),
                move_def("Quick Attack", 16, ElementalType::Normal),
                move_def("Iron Tail", 20, ElementalType::Steel),
                move_def("Electro Ball", 22, ElementalType::Electric),
            ],
            vec![ElementalType::Electric],
        );

        let charmander = species(
            "Charmander",
            70,
            vec![
                move_def("Scratch", 14, ElementalType::Normal),
                move_def("Ember", 16, ElementalType::Fire),
            ],
            vec![ElementalType::Fire],
        );

        let bulbasaur = species(
            "Bulbasaur",
            75,
            vec![
                move_def("Tackle", 14, ElementalType::Normal),
                move_def("Vine Whip", 16, ElementalType::Grass),
            ],
            vec![ElementalType::Grass, ElementalType::Poison],
        );

        let mut items = BTreeMap::new();
        items.insert("potion".to_string(), item("Potion", 20, 3));
        items.insert("super-potion".to_string(), item("Super Potion", 50, 1));

        Roster {
            player,
            player_name: None,
            encounters: vec![charmander, bulbasaur],
            items,
        }
    }
}

fn move_def(name: &str, base_power: u16, elemental_type: ElementalType) -> Arc<MoveDefinition> {
    Arc::new(MoveDefinition {
        name: name.to_string(),
        base_power,
        elemental_type,
    })
}

fn species(
    name: &str,
    max_hp: u16,
    moves: Vec<Arc<MoveDefinition>>,
    types: Vec<ElementalType>,
) -> SpeciesTemplate {
    SpeciesTemplate {
        name: name.to_string(),
        max_hp,
        image_ref: format!("{}.png", name.to_lowercase()),
        moves,
        types,
    }
}

fn item(name: &str, heal_amount: u16, remaining_count: u32) -> ItemDefinition {
    ItemDefinition {
        name: name.to_string(),
        heal_amount,
        remaining_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::DefinitionError;

    const SAMPLE: &str = r#"(
        player: (
            name: "Eevee",
            max_hp: 90,
            image_ref: "eevee.png",
            moves: [
                (name: "Tackle", base_power: 14, elemental_type: Normal),
                (name: "Bite", base_power: 18, elemental_type: Normal),
            ],
            types: [Normal],
        ),
        player_name: Some("Fluffy"),
        encounters: [
            (
                name: "Oddish",
                max_hp: 60,
                moves: [(name: "Absorb", base_power: 12, elemental_type: Grass)],
                types: [Grass, Poison],
            ),
        ],
        items: {
            "potion": (name: "Potion", heal_amount: 20, remaining_count: 2),
        },
    )"#;

    #[test]
    fn test_builtin_roster_is_valid() {
        let roster = Roster::builtin();
        assert!(roster.validate().is_ok());
        assert_eq!(roster.encounters.len(), 2);
        assert_eq!(roster.inventory().remaining("potion"), 3);
        assert_eq!(roster.inventory().remaining("super-potion"), 1);
    }

    #[test]
    fn test_parse_sample_roster() {
        let roster = Roster::from_ron_str(SAMPLE).unwrap();

        assert_eq!(roster.player.name, "Eevee");
        assert_eq!(roster.player_name.as_deref(), Some("Fluffy"));
        assert_eq!(roster.encounters[0].name, "Oddish");
        assert_eq!(roster.encounters[0].image_ref, "");
        assert_eq!(roster.items["potion"].heal_amount, 20);
    }

    #[test]
    fn test_empty_encounter_table_is_rejected() {
        let mut roster = Roster::builtin();
        roster.encounters.clear();
        assert!(matches!(
            roster.validate(),
            Err(RosterError::EmptyEncounterTable)
        ));
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let broken = SAMPLE.replace("max_hp: 60", "max_hp: 0");
        assert!(matches!(
            Roster::from_ron_str(&broken),
            Err(RosterError::Definition(DefinitionError::InvalidTemplate { .. }))
        ));
    }

    #[test]
    fn test_malformed_ron_is_a_parse_error() {
        assert!(matches!(
            Roster::from_ron_str("(player: )"),
            Err(RosterError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = Roster::load(Path::new("data/does-not-exist.ron"));
        assert!(matches!(result, Err(RosterError::Io(_))));
    }

    #[test]
    fn test_shipped_roster_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/roster.ron");
        let roster = Roster::load(&path).unwrap();
        assert_eq!(roster.player.name, "Pikachu");
        assert_eq!(roster.encounters.len(), 2);
    }
}
