use crate::dimension::BaseDimensions;

quantity_kind! {
    /// Heat capacity per unit mass
    SpecificEntropy, SpecificEntropyUnit {
        quantity_type: SpecificEntropy,
        base_unit: JoulePerKilogramKelvin,
        dimensions: BaseDimensions::SPECIFIC_ENTROPY,
        units: {
            CaloriePerGramKelvin = 1 => 4.184e3, { "en-US": ["cal/g.K"] },
            JoulePerKilogramDegreeCelsius = 2 => 1.0, { "en-US": ["J/kg.C"] },
            JoulePerKilogramKelvin = 3 => 1.0, { "en-US": ["J/kg.K"] },
            KilocaloriePerGramKelvin = 4 => 4.184e6, { "en-US": ["kcal/g.K"] },
            KilojoulePerKilogramDegreeCelsius = 5 => 1e3, { "en-US": ["kJ/kg.C"] },
            KilojoulePerKilogramKelvin = 6 => 1e3, { "en-US": ["kJ/kg.K"] },
            MegajoulePerKilogramDegreeCelsius = 7 => 1e6, { "en-US": ["MJ/kg.C"] },
            MegajoulePerKilogramKelvin = 8 => 1e6, { "en-US": ["MJ/kg.K"] },
        }
    }
}
