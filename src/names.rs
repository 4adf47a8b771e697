//! Display names for Republican months and days.
//!
//! [`NameResolver`] is the seam for the reference data; [`StaticNames`] is the
//! built-in table of the historical calendar.

use serde::{Deserialize, Serialize};

use crate::consts::{COMPLEMENTARY_DAYS_LEAP, COMPLEMENTARY_MONTH};
use crate::types::{RepublicanDay, RepublicanMonth};

/// Names attached to a (day, month) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateNames {
    pub month:      String,
    pub month_of:   String,
    pub day:        String,
    pub dedication: String,
}

/// Error returned by a [`NameResolver`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No reference row for the ordinal pair.
    #[error("no names for day {day} of month {month}")]
    NotFound { day: u8, month: u8 },
}

/// Looks up the names of a day from its ordinals.
pub trait NameResolver {
    /// # Errors
    /// `LookupError::NotFound` when the reference data has no entry for the pair.
    fn lookup(&self, day: RepublicanDay, month: RepublicanMonth) -> Result<DateNames, LookupError>;
}

impl<T: NameResolver + ?Sized> NameResolver for &T {
    fn lookup(&self, day: RepublicanDay, month: RepublicanMonth) -> Result<DateNames, LookupError> {
        (**self).lookup(day, month)
    }
}

/// The historical names of the calendar, compiled into the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticNames;

impl NameResolver for StaticNames {
    fn lookup(&self, day: RepublicanDay, month: RepublicanMonth) -> Result<DateNames, LookupError> {
        let not_found = LookupError::NotFound {
            day:   day.get(),
            month: month.get(),
        };
        let month_index = usize::from(month.get()) - 1;
        let day_index = usize::from(day.get()) - 1;

        let (month_name, month_of) = *MONTHS.get(month_index).ok_or_else(|| not_found.clone())?;
        let dedication = if month.get() == COMPLEMENTARY_MONTH {
            FESTIVALS.get(day_index)
        } else {
            DEDICATIONS.get(month_index).and_then(|days| days.get(day_index))
        };
        let dedication = dedication.ok_or(not_found)?;

        Ok(DateNames {
            month:      month_name.to_owned(),
            month_of:   month_of.to_owned(),
            day:        DAY_NAMES[day_index % DAY_NAMES.len()].to_owned(),
            dedication: (*dedication).to_owned(),
        })
    }
}

/// Month names with their meaning
const MONTHS: [(&str, &str); 13] = [
    ("Vendémiaire", "Vintage"),
    ("Brumaire", "Mist"),
    ("Frimaire", "Frost"),
    ("Nivôse", "Snow"),
    ("Pluviôse", "Rain"),
    ("Ventôse", "Wind"),
    ("Germinal", "Germination"),
    ("Floréal", "Flowers"),
    ("Prairial", "Meadows"),
    ("Messidor", "Harvest"),
    ("Thermidor", "Heat"),
    ("Fructidor", "Fruit"),
    ("Sansculottides", "Complementary days"),
];

/// Days of the décade, the ten-day week
const DAY_NAMES: [&str; 10] = [
    "Primidi", "Duodi", "Tridi", "Quartidi", "Quintidi", "Sextidi", "Septidi", "Octidi", "Nonidi",
    "Décadi",
];

const FESTIVALS: [&str; COMPLEMENTARY_DAYS_LEAP as usize] = [
    "Fête de la Vertu",
    "Fête du Génie",
    "Fête du Travail",
    "Fête de l'Opinion",
    "Fête des Récompenses",
    "Fête de la Révolution",
];

#[rustfmt::skip]
const DEDICATIONS: [[&str; 30]; 12] = [
    // Vendémiaire
    [
        "Raisin", "Safran", "Châtaigne", "Colchique", "Cheval",
        "Balsamine", "Carotte", "Amaranthe", "Panais", "Cuve",
        "Pomme de terre", "Immortelle", "Potiron", "Réséda", "Âne",
        "Belle de nuit", "Citrouille", "Sarrasin", "Tournesol", "Pressoir",
        "Chanvre", "Pêche", "Navet", "Amaryllis", "Bœuf",
        "Aubergine", "Piment", "Tomate", "Orge", "Tonneau",
    ],
    // Brumaire
    [
        "Pomme", "Céleri", "Poire", "Betterave", "Oie",
        "Héliotrope", "Figue", "Scorsonère", "Alisier", "Charrue",
        "Salsifis", "Mâcre", "Topinambour", "Endive", "Dindon",
        "Chervis", "Cresson", "Dentelaire", "Grenade", "Herse",
        "Bacchante", "Azerole", "Garance", "Orange", "Faisan",
        "Pistache", "Macjonc", "Coing", "Cormier", "Rouleau",
    ],
    // Frimaire
    [
        "Raiponce", "Turneps", "Chicorée", "Nèfle", "Cochon",
        "Mâche", "Chou-fleur", "Miel", "Genièvre", "Pioche",
        "Cire", "Raifort", "Cèdre", "Sapin", "Chevreuil",
        "Ajonc", "Cyprès", "Lierre", "Sabine", "Hoyau",
        "Érable à sucre", "Bruyère", "Roseau", "Oseille", "Grillon",
        "Pignon", "Liège", "Truffe", "Olive", "Pelle",
    ],
    // Nivôse
    [
        "Tourbe", "Houille", "Bitume", "Soufre", "Chien",
        "Lave", "Terre végétale", "Fumier", "Salpêtre", "Fléau",
        "Granit", "Argile", "Ardoise", "Grès", "Lapin",
        "Silex", "Marne", "Pierre à chaux", "Marbre", "Van",
        "Pierre à plâtre", "Sel", "Fer", "Cuivre", "Chat",
        "Étain", "Plomb", "Zinc", "Mercure", "Crible",
    ],
    // Pluviôse
    [
        "Lauréole", "Mousse", "Fragon", "Perce-neige", "Taureau",
        "Laurier-thym", "Amadouvier", "Mézéréon", "Peuplier", "Coignée",
        "Ellébore", "Brocoli", "Laurier", "Avelinier", "Vache",
        "Buis", "Lichen", "If", "Pulmonaire", "Serpette",
        "Thlaspi", "Thimelé", "Chiendent", "Trainasse", "Lièvre",
        "Guède", "Noisetier", "Cyclamen", "Chélidoine", "Traîneau",
    ],
    // Ventôse
    [
        "Tussilage", "Cornouiller", "Violier", "Troène", "Bouc",
        "Asaret", "Alaterne", "Violette", "Marceau", "Bêche",
        "Narcisse", "Orme", "Fumeterre", "Vélar", "Chèvre",
        "Épinard", "Doronic", "Mouron", "Cerfeuil", "Cordeau",
        "Mandragore", "Persil", "Cochléaria", "Pâquerette", "Thon",
        "Pissenlit", "Sylvie", "Capillaire", "Frêne", "Plantoir",
    ],
    // Germinal
    [
        "Primevère", "Platane", "Asperge", "Tulipe", "Poule",
        "Bette", "Bouleau", "Jonquille", "Aulne", "Couvoir",
        "Pervenche", "Charme", "Morille", "Hêtre", "Abeille",
        "Laitue", "Mélèze", "Ciguë", "Radis", "Ruche",
        "Gainier", "Romaine", "Marronnier", "Roquette", "Pigeon",
        "Lilas", "Anémone", "Pensée", "Myrtille", "Greffoir",
    ],
    // Floréal
    [
        "Rose", "Chêne", "Fougère", "Aubépine", "Rossignol",
        "Ancolie", "Muguet", "Champignon", "Hyacinthe", "Râteau",
        "Rhubarbe", "Sainfoin", "Bâton-d'or", "Chamérops", "Ver à soie",
        "Consoude", "Pimprenelle", "Corbeille d'or", "Arroche", "Sarcloir",
        "Statice", "Fritillaire", "Bourrache", "Valériane", "Carpe",
        "Fusain", "Civette", "Buglosse", "Sénevé", "Houlette",
    ],
    // Prairial
    [
        "Luzerne", "Hémérocalle", "Trèfle", "Angélique", "Canard",
        "Mélisse", "Fromental", "Martagon", "Serpolet", "Faux",
        "Fraise", "Bétoine", "Pois", "Acacia", "Caille",
        "Œillet", "Sureau", "Pavot", "Tilleul", "Fourche",
        "Barbeau", "Camomille", "Chèvrefeuille", "Caille-lait", "Tanche",
        "Jasmin", "Verveine", "Thym", "Pivoine", "Chariot",
    ],
    // Messidor
    [
        "Seigle", "Avoine", "Oignon", "Véronique", "Mulet",
        "Romarin", "Concombre", "Échalote", "Absinthe", "Faucille",
        "Coriandre", "Artichaut", "Girofle", "Lavande", "Chamois",
        "Tabac", "Groseille", "Gesse", "Cerise", "Parc",
        "Menthe", "Cumin", "Haricot", "Orcanète", "Pintade",
        "Sauge", "Ail", "Vesce", "Blé", "Chalémie",
    ],
    // Thermidor
    [
        "Épeautre", "Bouillon blanc", "Melon", "Ivraie", "Bélier",
        "Prêle", "Armoise", "Carthame", "Mûre", "Arrosoir",
        "Panic", "Salicorne", "Abricot", "Basilic", "Brebis",
        "Guimauve", "Lin", "Amande", "Gentiane", "Écluse",
        "Carline", "Câprier", "Lentille", "Aunée", "Loutre",
        "Myrte", "Colza", "Lupin", "Coton", "Moulin",
    ],
    // Fructidor
    [
        "Prune", "Millet", "Lycoperdon", "Escourgeon", "Saumon",
        "Tubéreuse", "Sucrion", "Apocyn", "Réglisse", "Échelle",
        "Pastèque", "Fenouil", "Épine vinette", "Noix", "Truite",
        "Citron", "Cardère", "Nerprun", "Tagette", "Hotte",
        "Églantier", "Noisette", "Houblon", "Sorgho", "Écrevisse",
        "Bigarade", "Verge d'or", "Maïs", "Marron", "Panier",
    ],
];
