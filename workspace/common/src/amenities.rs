/// Amenities offered in the picker.
pub const AMENITIES: [&str; 8] = [
    "Gym",
    "Swimming Pool",
    "Garden",
    "Clubhouse",
    "Playground",
    "Power Backup",
    "Lift",
    "Security",
];

pub const AMENITIES_PLACEHOLDER: &str = "Select amenities";

/// Picked amenities, kept in the order of [`AMENITIES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenitySelection {
    picked: Vec<String>,
}

impl AmenitySelection {
    pub fn contains(&self, amenity: &str) -> bool {
        self.picked.iter().any(|a| a == amenity)
    }

    /// Ticks or unticks `amenity`.
    pub fn toggle(&mut self, amenity: &str) {
        if self.contains(amenity) {
            self.remove(amenity);
        } else {
            self.picked.push(amenity.to_string());
            // unknown names go last
            self.picked.sort_by_key(|a| {
                AMENITIES.iter().position(|known| *known == a.as_str()).unwrap_or(usize::MAX)
            });
        }
    }

    pub fn remove(&mut self, amenity: &str) {
        self.picked.retain(|a| a != amenity);
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.picked.iter().map(String::as_str)
    }

    /// Value of the hidden `Amenities` field.
    pub fn field_value(&self) -> String {
        self.picked.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_join() {
        let mut selection = AmenitySelection::default();
        assert_eq!(selection.field_value(), "");

        selection.toggle("Gym");
        selection.toggle("Garden");
        selection.toggle("Lift");
        assert_eq!(selection.field_value(), "Gym, Garden, Lift");

        selection.toggle("Garden");
        assert_eq!(selection.field_value(), "Gym, Lift");
        assert!(!selection.contains("Garden"));
    }

    #[test]
    fn test_join_follows_checkbox_order() {
        let mut ticked_late = AmenitySelection::default();
        for amenity in ["Security", "Lift", "Gym", "Swimming Pool"] {
            ticked_late.toggle(amenity);
        }
        let mut ticked_early = AmenitySelection::default();
        for amenity in ["Gym", "Swimming Pool", "Lift", "Security"] {
            ticked_early.toggle(amenity);
        }

        assert_eq!(ticked_late.field_value(), "Gym, Swimming Pool, Lift, Security");
        assert_eq!(ticked_late, ticked_early);

        ticked_late.toggle("Rooftop");
        ticked_late.toggle("Garden");
        assert_eq!(ticked_late.field_value(), "Gym, Swimming Pool, Garden, Lift, Security, Rooftop");
    }

    #[test]
    fn test_remove_tag() {
        let mut selection = AmenitySelection::default();
        selection.toggle("Swimming Pool");
        selection.remove("Swimming Pool");
        selection.remove("Gym");

        assert!(selection.is_empty());
        assert_eq!(selection.iter().count(), 0);
    }
}
