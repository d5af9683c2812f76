use std::fmt;

use super::reference::{StateRef, STATES};

// ---------------------------------------------------------------------------
// Unit type
// ---------------------------------------------------------------------------

/// Which housing stock a dataset describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitType {
    #[default]
    AllUnits,
    NewerUnits,
}

impl UnitType {
    pub const ALL: [UnitType; 2] = [UnitType::AllUnits, UnitType::NewerUnits];

    /// Label shown in the picker.
    pub fn label(self) -> &'static str {
        match self {
            UnitType::AllUnits => "Allunits",
            UnitType::NewerUnits => "Newerunits",
        }
    }

    /// Token used in dataset file names.
    pub fn file_token(self) -> &'static str {
        match self {
            UnitType::AllUnits => "ALLunits",
            UnitType::NewerUnits => "NEWERunits",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Data category
// ---------------------------------------------------------------------------

/// Demographic breakdown a dataset contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    PersonsByAge,
    PublicSchoolChildren,
    SchoolAgeChildren,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::PersonsByAge,
        Category::PublicSchoolChildren,
        Category::SchoolAgeChildren,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::PersonsByAge => "Persons by Age",
            Category::PublicSchoolChildren => "Public School Children",
            Category::SchoolAgeChildren => "School Age Children",
        }
    }

    /// Short code used in dataset file names.
    pub fn code(self) -> &'static str {
        match self {
            Category::PersonsByAge => "pop",
            Category::PublicSchoolChildren => "psc",
            Category::SchoolAgeChildren => "sac",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The three pickers that pin down one dataset file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub state: &'static StateRef,
    pub unit_type: UnitType,
    pub category: Category,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            state: &STATES[0],
            unit_type: UnitType::default(),
            category: Category::default(),
        }
    }
}

impl Selection {
    /// Dataset identifier, e.g. `DM_pop_OHIO_ALLunits`.
    pub fn dataset_id(&self) -> String {
        format!(
            "DM_{}_{}_{}",
            self.category.code(),
            self.state.upper_name(),
            self.unit_type.file_token()
        )
    }

    /// File name of the dataset inside the data directory.
    pub fn dataset_file_name(&self) -> String {
        format!("{}.csv", self.dataset_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(state: &str, unit_type: UnitType, category: Category) -> Selection {
        Selection {
            state: StateRef::lookup(state).unwrap(),
            unit_type,
            category,
        }
    }

    #[test]
    fn ohio_persons_by_age_all_units() {
        let sel = selection("Ohio", UnitType::AllUnits, Category::PersonsByAge);
        assert_eq!(sel.dataset_id(), "DM_pop_OHIO_ALLunits");
        assert_eq!(sel.dataset_file_name(), "DM_pop_OHIO_ALLunits.csv");
    }

    #[test]
    fn spaces_are_preserved_in_state_token() {
        let sel = selection(
            "New Hampshire",
            UnitType::NewerUnits,
            Category::SchoolAgeChildren,
        );
        assert_eq!(sel.dataset_id(), "DM_sac_NEW HAMPSHIRE_NEWERunits");

        let sel = selection(
            "Washington D.C.",
            UnitType::AllUnits,
            Category::PublicSchoolChildren,
        );
        assert_eq!(sel.dataset_id(), "DM_psc_WASHINGTON D.C._ALLunits");
    }

    #[test]
    fn naming_is_pure_and_injective_over_all_selections() {
        let mut seen = std::collections::HashSet::new();
        for state in STATES {
            for unit_type in UnitType::ALL {
                for category in Category::ALL {
                    let sel = Selection {
                        state,
                        unit_type,
                        category,
                    };
                    let id = sel.dataset_id();
                    assert_eq!(id, sel.dataset_id());
                    assert!(seen.insert(id), "duplicate identifier");
                }
            }
        }
        assert_eq!(seen.len(), STATES.len() * 2 * 3);
    }

    #[test]
    fn labels_and_codes() {
        assert_eq!(UnitType::NewerUnits.label(), "Newerunits");
        assert_eq!(UnitType::NewerUnits.file_token(), "NEWERunits");
        let codes: Vec<_> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["pop", "psc", "sac"]);
        assert_eq!(Category::PublicSchoolChildren.to_string(), "Public School Children");
    }
}
