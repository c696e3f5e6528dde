use crate::battle::rng::RandomSource;
use crate::combatant::Combatant;
use crate::errors::{RosterError, RosterResult};
use schema::SpeciesTemplate;

/// Produces replacement opponents from a fixed table of wild species.
/// Every entry is equally likely; there is no level scaling.
///
/// Each species is stamped once up front, so drawing an opponent cannot fail.
#[derive(Debug, Clone)]
pub struct EncounterGenerator {
    prototypes: Vec<Combatant>,
}

impl EncounterGenerator {
    pub fn new(table: Vec<SpeciesTemplate>) -> RosterResult<Self> {
        if table.is_empty() {
            return Err(RosterError::EmptyEncounterTable);
        }
        let prototypes = table
            .iter()
            .map(|template| Combatant::instantiate(template, None))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { prototypes })
    }

    /// Species names in table order.
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.prototypes.iter().map(|prototype| prototype.species.as_str())
    }

    /// Pick a species uniformly at random and hand out a fresh combatant.
    pub fn generate(&self, rng: &mut dyn RandomSource) -> Combatant {
        let index = rng.pick_index(self.prototypes.len(), "encounter selection");
        self.prototypes[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::ScriptedRng;
    use crate::roster::Roster;

    #[test]
    fn test_generate_picks_by_roll() {
        let generator = EncounterGenerator::new(Roster::builtin().encounters).unwrap();
        let mut rng = ScriptedRng::new(vec![0.2, 0.8]);

        let first = generator.generate(&mut rng);
        let second = generator.generate(&mut rng);

        assert_eq!(first.name, "Charmander");
        assert_eq!(second.name, "Bulbasaur");
        assert_eq!(second.current_hp(), second.max_hp());
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert!(matches!(
            EncounterGenerator::new(vec![]),
            Err(RosterError::EmptyEncounterTable)
        ));
    }

    #[test]
    fn test_invalid_species_is_rejected() {
        let mut table = Roster::builtin().encounters;
        table[1].max_hp = 0;
        assert!(matches!(
            EncounterGenerator::new(table),
            Err(RosterError::Definition(_))
        ));
    }

    #[test]
    fn test_generated_opponents_start_fresh() {
        let generator = EncounterGenerator::new(Roster::builtin().encounters).unwrap();
        let mut rng = ScriptedRng::new(vec![0.2, 0.2]);

        let mut first = generator.generate(&mut rng);
        first.take_damage(500);
        let second = generator.generate(&mut rng);

        assert!(first.is_defeated());
        assert_eq!(second.name, "Charmander");
        assert_eq!(second.current_hp(), second.max_hp());
        assert_eq!(
            generator.species().collect::<Vec<_>>(),
            vec!["Charmander", "Bulbasaur"]
        );
    }
}
