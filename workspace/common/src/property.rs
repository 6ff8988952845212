//! Property type options and the floor-number rule that depends on them.

/// Property types offered by the form, in display order.
pub const PROPERTY_TYPES: [&str; 3] = ["Apartment", "Independent House", "Villa"];

/// Types that have no floor number; the backend expects `Floor_No = 0` for them.
pub const FLOORLESS_PROPERTY_TYPES: [&str; 2] = ["Independent House", "Villa"];

pub fn is_floorless(property_type: &str) -> bool {
    FLOORLESS_PROPERTY_TYPES.contains(&property_type)
}

/// State of the `Floor_No` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorField {
    pub value: String,
    pub enabled: bool,
}

impl Default for FloorField {
    fn default() -> Self {
        Self {
            value: String::new(),
            enabled: true,
        }
    }
}

impl FloorField {
    /// Applies the rule for the selected property type: floor-less types pin
    /// the value to ground floor and lock the control.
    pub fn apply_property_type(&mut self, property_type: &str) {
        if is_floorless(property_type) {
            self.enabled = false;
            self.value = "0".to_string();
        } else {
            self.enabled = true;
        }
    }

    /// User input; ignored while the control is locked.
    pub fn set_value(&mut self, value: &str) {
        if self.enabled {
            self.value = value.to_string();
        }
    }

    pub fn placeholder(&self) -> &'static str {
        if self.enabled {
            "Floor number"
        } else {
            "Ground floor (auto-set)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floorless_types_force_ground_floor() {
        for property_type in ["Independent House", "Villa"] {
            let mut floor = FloorField::default();
            floor.set_value("7");

            floor.apply_property_type(property_type);

            assert_eq!(floor.value, "0");
            assert!(!floor.enabled);
            assert_eq!(floor.placeholder(), "Ground floor (auto-set)");

            floor.set_value("3");
            assert_eq!(floor.value, "0", "locked control must keep 0");
        }
    }

    #[test]
    fn test_apartment_reenables_floor() {
        let mut floor = FloorField::default();
        floor.apply_property_type("Villa");
        floor.apply_property_type("Apartment");

        assert!(floor.enabled);
        assert_eq!(floor.placeholder(), "Floor number");
        floor.set_value("12");
        assert_eq!(floor.value, "12");
    }

    #[test]
    fn test_is_floorless() {
        assert!(is_floorless("Villa"));
        assert!(!is_floorless("villa"));
        assert!(!is_floorless("Apartment"));
        assert!(!is_floorless(""));
    }
}
