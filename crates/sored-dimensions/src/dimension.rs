//! The three physical dimensions a component can carry and the key names
//! each has been stored under over time.

use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Diameter,
    Width,
}

impl Dimension {
    /// Display and resolution order.
    pub const ALL: [Dimension; 3] = [Dimension::Length, Dimension::Diameter, Dimension::Width];

    /// Canonical key holding the numeric value, e.g. `lengthValue`.
    #[must_use]
    pub fn value_key(self) -> &'static str {
        match self {
            Dimension::Length => "lengthValue",
            Dimension::Diameter => "diameterValue",
            Dimension::Width => "widthValue",
        }
    }

    /// Canonical key holding the unit, e.g. `lengthUnit`.
    #[must_use]
    pub fn unit_key(self) -> &'static str {
        match self {
            Dimension::Length => "lengthUnit",
            Dimension::Diameter => "diameterUnit",
            Dimension::Width => "widthUnit",
        }
    }

    /// Canonical key holding unparsed user input, e.g. `rawLengthInput`.
    #[must_use]
    pub fn raw_input_key(self) -> &'static str {
        match self {
            Dimension::Length => "rawLengthInput",
            Dimension::Diameter => "rawDiameterInput",
            Dimension::Width => "rawWidthInput",
        }
    }

    /// Short label used in size strings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Length => "L",
            Dimension::Diameter => "Ø",
            Dimension::Width => "W",
        }
    }

    /// Keys a legacy size object may use for the value, in priority order.
    #[must_use]
    pub fn value_candidates(self) -> &'static [&'static str] {
        match self {
            Dimension::Length => &["lengthValue", "length", "l", "comprimento"],
            Dimension::Diameter => &[
                "diameterValue",
                "diameter",
                "d",
                "diametro",
                "diameter_value",
            ],
            Dimension::Width => &["widthValue", "width", "w", "largura"],
        }
    }

    /// Keys a legacy size object may use for the unit, in priority order.
    #[must_use]
    pub fn unit_candidates(self) -> &'static [&'static str] {
        match self {
            Dimension::Length => &["lengthUnit", "length_unit", "lUnit", "l_unit"],
            Dimension::Diameter => &["diameterUnit", "diameter_unit", "dUnit", "d_unit"],
            Dimension::Width => &["widthUnit", "width_unit", "wUnit", "w_unit"],
        }
    }

    /// Keys a legacy size object may use for unparsed input.
    #[must_use]
    pub fn raw_input_candidates(self) -> &'static [&'static str] {
        match self {
            Dimension::Length => &["rawLengthInput", "raw_length_input"],
            Dimension::Diameter => &["rawDiameterInput", "raw_diameter_input"],
            Dimension::Width => &["rawWidthInput", "raw_width_input"],
        }
    }
}

/// One resolved dimension of a canonical component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionSlot {
    /// The number as found or coerced. `None` means no usable number, which
    /// is distinct from zero.
    pub value: Option<Number>,
    /// Empty when no unit is known.
    pub unit: String,
    /// Unparsed input, only kept while `value` is `None`.
    pub raw_input: Option<String>,
}

impl DimensionSlot {
    /// Numeric value as `f64`, if one was resolved.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_ref().and_then(Number::as_f64)
    }

    /// Whether either a number or a raw input is available.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.value.is_some() || self.raw_input.is_some()
    }
}

/// The typed result of normalizing a component's size data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedDimensions {
    pub length: DimensionSlot,
    pub diameter: DimensionSlot,
    pub width: DimensionSlot,
    /// Best-effort rendering of `sizeValue`, set only when no dimension could
    /// be extracted at all.
    pub raw_size_string: Option<String>,
}

impl NormalizedDimensions {
    #[must_use]
    pub fn slot(&self, dimension: Dimension) -> &DimensionSlot {
        match dimension {
            Dimension::Length => &self.length,
            Dimension::Diameter => &self.diameter,
            Dimension::Width => &self.width,
        }
    }

    pub fn slot_mut(&mut self, dimension: Dimension) -> &mut DimensionSlot {
        match dimension {
            Dimension::Length => &mut self.length,
            Dimension::Diameter => &mut self.diameter,
            Dimension::Width => &mut self.width,
        }
    }

    /// `true` when no slot has a number or a raw input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|&dimension| !self.slot(dimension).is_populated())
    }

    /// Writes the canonical fields over `component`, leaving every other key
    /// untouched. Raw inputs and `rawSizeString` are removed when not set so
    /// the result never carries stale values.
    pub fn overlay(&self, component: &mut Map<String, Value>) {
        for dimension in Dimension::ALL {
            let slot = self.slot(dimension);
            component.insert(
                dimension.value_key().to_string(),
                slot.value.clone().map_or(Value::Null, Value::Number),
            );
            component.insert(
                dimension.unit_key().to_string(),
                Value::String(slot.unit.clone()),
            );
            match &slot.raw_input {
                Some(raw) => {
                    component.insert(
                        dimension.raw_input_key().to_string(),
                        Value::String(raw.clone()),
                    );
                }
                None => {
                    component.remove(dimension.raw_input_key());
                }
            }
        }

        match &self.raw_size_string {
            Some(raw) => {
                component.insert("rawSizeString".to_string(), Value::String(raw.clone()));
            }
            None => {
                component.remove("rawSizeString");
            }
        }
    }
}
