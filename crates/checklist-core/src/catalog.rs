//! Content Catalog
//!
//! The two fixed checklists (onboarding and offboarding). Everything here
//! is `'static` and never changes at runtime.

use std::collections::HashSet;

use crate::error::CatalogError;

/// A single checkable task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Stable identifier, unique across every catalog
    pub id: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

/// A titled group of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistSection {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub items: &'static [ChecklistItem],
}

/// Which checklist is being worked on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChecklistMode {
    #[default]
    Onboarding,
    Offboarding,
}

impl ChecklistMode {
    /// Tab order
    pub const ALL: [ChecklistMode; 2] = [ChecklistMode::Onboarding, ChecklistMode::Offboarding];

    pub fn as_str(self) -> &'static str {
        match self {
            ChecklistMode::Onboarding => "onboarding",
            ChecklistMode::Offboarding => "offboarding",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            ChecklistMode::Onboarding => "DEL 1: Onboarding",
            ChecklistMode::Offboarding => "DEL 2: Offboarding",
        }
    }
}

/// An ordered list of sections for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub mode: ChecklistMode,
    pub sections: &'static [ChecklistSection],
}

impl Catalog {
    /// Every item in catalog order
    pub fn items(&self) -> impl Iterator<Item = &'static ChecklistItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &'static str> {
        self.items().map(|item| item.id)
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    /// Subject line of the printed header ("Checklista system för ...")
    pub fn print_title(&self) -> &'static str {
        match self.mode {
            ChecklistMode::Onboarding => "ny personal",
            ChecklistMode::Offboarding => "avslut av tjänst",
        }
    }
}

/// Static catalog for a mode
pub fn catalog(mode: ChecklistMode) -> &'static Catalog {
    match mode {
        ChecklistMode::Onboarding => &ONBOARDING,
        ChecklistMode::Offboarding => &OFFBOARDING,
    }
}

/// Check ids are non-empty and unique across all given catalogs, and that
/// no section is empty.
pub fn validate(catalogs: &[&Catalog]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for catalog in catalogs {
        for section in catalog.sections {
            if section.items.is_empty() {
                return Err(CatalogError::EmptySection(section.title));
            }
            for item in section.items {
                if item.id.is_empty() {
                    return Err(CatalogError::EmptyId { section: section.title });
                }
                if !seen.insert(item.id) {
                    return Err(CatalogError::DuplicateId(item.id));
                }
            }
        }
    }
    Ok(())
}

static ONBOARDING: Catalog = Catalog {
    mode: ChecklistMode::Onboarding,
    sections: &[
        ChecklistSection {
            title: "1. Grundläggande administration",
            subtitle: Some("Vecka -2"),
            items: &[
                ChecklistItem {
                    id: "contract",
                    label: "Anställningsavtal",
                    description: Some("Signerat och registrerat i Personec/HR-system."),
                },
                ChecklistItem {
                    id: "edlevo_base",
                    label: "Edlevo",
                    description: Some("Medarbetaren kopplad till rätt skolenhet (VDS, Stocksund etc.). Detta är triggern för övriga system."),
                },
                ChecklistItem {
                    id: "it_account",
                    label: "IT-konto",
                    description: Some("Aktivering av danderyd.se-konto och e-postadress."),
                },
                ChecklistItem {
                    id: "google_account",
                    label: "Google-konto",
                    description: Some("Skol-IT"),
                },
            ],
        },
        ChecklistSection {
            title: "2. Systembehörigheter",
            subtitle: Some("Vecka -1"),
            items: &[
                ChecklistItem {
                    id: "prorenata_req",
                    label: "Prorenata (Journalsystem)",
                    description: Some("Beställning skickad till systemförvaltare (t.ex. Razia). Ange korrekt yrkesroll."),
                },
                ChecklistItem {
                    id: "edlevo_role",
                    label: "Edlevo/Schoolsoft",
                    description: Some("Tilldelning av pedagogisk/administrativ roll för de specifika skolenheterna."),
                },
                ChecklistItem {
                    id: "google_drive",
                    label: "Google Drive",
                    description: Some("Inbjudan till relevanta 'Delade enheter' (t.ex. Elevhälsa [Skolnamn])."),
                },
                ChecklistItem {
                    id: "distribution_lists",
                    label: "Distributionslistor",
                    description: Some("Tillägg i relevanta mailgrupper (Lärarlag, EHT, Centrala EHT)."),
                },
            ],
        },
        ChecklistSection {
            title: "3. På plats start",
            subtitle: Some("Dag 1"),
            items: &[
                ChecklistItem {
                    id: "keys",
                    label: "Passerkort/Nycklar",
                    description: Some("Kvittering av fysisk access."),
                },
                ChecklistItem {
                    id: "confidentiality",
                    label: "Sekretessförbindelse",
                    description: Some("Genomgång av lokala rutiner för tystnadsplikt och känsliga personuppgifter."),
                },
                ChecklistItem {
                    id: "equipment",
                    label: "Utrustning",
                    description: Some("Utlämning av dator och i vissa fall telefon."),
                },
            ],
        },
    ],
};

static OFFBOARDING: Catalog = Catalog {
    mode: ChecklistMode::Offboarding,
    sections: &[
        ChecklistSection {
            title: "1. Avslut av access",
            subtitle: Some("Senast sista arbetsdag"),
            items: &[
                ChecklistItem {
                    id: "off_prorenata",
                    label: "Prorenata",
                    description: Some("Inaktivering av användarkonto för att förhindra efteråtkomst."),
                },
                ChecklistItem {
                    id: "off_google",
                    label: "Google Drive",
                    description: Some("Borttagning från delade enheter. Kontrollera ägarskap av dokument."),
                },
                ChecklistItem {
                    id: "off_edlevo",
                    label: "Edlevo/Schoolsoft",
                    description: Some("Avslut av placering på den specifika skolenheten."),
                },
                ChecklistItem {
                    id: "off_lists",
                    label: "Distributionslistor",
                    description: Some("Borttagning från mailgrupper."),
                },
            ],
        },
        ChecklistSection {
            title: "2. Återtagande av resurser",
            subtitle: None,
            items: &[
                ChecklistItem {
                    id: "off_hardware",
                    label: "Hårdvara",
                    description: Some("Inlämning av dator, laddare och telefon."),
                },
                ChecklistItem {
                    id: "off_keys",
                    label: "Nycklar och passerkort",
                    description: Some("Avaktivering och inlämning av fysiska nycklar."),
                },
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &'static str) -> ChecklistItem {
        ChecklistItem { id, label: "label", description: None }
    }

    #[test]
    fn test_builtin_catalogs_are_valid() {
        let all: Vec<&Catalog> = ChecklistMode::ALL.iter().map(|m| catalog(*m)).collect();
        assert_eq!(validate(&all), Ok(()));
    }

    #[test]
    fn test_catalog_shapes() {
        let onboarding = catalog(ChecklistMode::Onboarding);
        let sizes: Vec<usize> = onboarding.sections.iter().map(|s| s.items.len()).collect();
        assert_eq!(sizes, vec![4, 4, 3]);
        assert_eq!(onboarding.item_count(), 11);

        let offboarding = catalog(ChecklistMode::Offboarding);
        let sizes: Vec<usize> = offboarding.sections.iter().map(|s| s.items.len()).collect();
        assert_eq!(sizes, vec![4, 2]);
        assert_eq!(offboarding.item_count(), 6);
        assert_eq!(offboarding.sections[1].subtitle, None);
    }

    #[test]
    fn test_item_ids_keep_catalog_order() {
        let ids: Vec<&str> = catalog(ChecklistMode::Offboarding).item_ids().collect();
        assert_eq!(
            ids,
            vec!["off_prorenata", "off_google", "off_edlevo", "off_lists", "off_hardware", "off_keys"]
        );
    }

    #[test]
    fn test_print_title() {
        assert_eq!(catalog(ChecklistMode::Onboarding).print_title(), "ny personal");
        assert_eq!(catalog(ChecklistMode::Offboarding).print_title(), "avslut av tjänst");
    }

    #[test]
    fn test_validate_rejects_duplicate_across_catalogs() {
        static A: [ChecklistItem; 1] = [ChecklistItem { id: "keys", label: "A", description: None }];
        static SECTIONS: [ChecklistSection; 1] = [ChecklistSection { title: "S", subtitle: None, items: &A }];
        let extra = Catalog { mode: ChecklistMode::Offboarding, sections: &SECTIONS };
        let result = validate(&[catalog(ChecklistMode::Onboarding), &extra]);
        assert_eq!(result, Err(CatalogError::DuplicateId("keys")));
    }

    #[test]
    fn test_validate_rejects_empty_id_and_empty_section() {
        let items: &'static [ChecklistItem] = Box::leak(Box::new([item("a"), item("")]));
        let sections: &'static [ChecklistSection] =
            Box::leak(Box::new([ChecklistSection { title: "Broken", subtitle: None, items }]));
        let broken = Catalog { mode: ChecklistMode::Onboarding, sections };
        assert_eq!(validate(&[&broken]), Err(CatalogError::EmptyId { section: "Broken" }));

        let sections: &'static [ChecklistSection] =
            Box::leak(Box::new([ChecklistSection { title: "Empty", subtitle: None, items: &[] }]));
        let empty = Catalog { mode: ChecklistMode::Onboarding, sections };
        assert_eq!(validate(&[&empty]), Err(CatalogError::EmptySection("Empty")));
    }
}
