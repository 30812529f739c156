use crate::dimension::BaseDimensions;

quantity_kind! {
    /// Three-dimensional space occupied by a body
    Volume, VolumeUnit {
        quantity_type: Volume,
        base_unit: CubicMeter,
        dimensions: BaseDimensions::VOLUME,
        units: {
            Centiliter = 1 => 1e-5, { "en-US": ["cl"], "ru-RU": ["сл"] },
            CubicCentimeter = 2 => 1e-6, { "en-US": ["cm³"], "ru-RU": ["см³"] },
            CubicDecimeter = 3 => 1e-3, { "en-US": ["dm³"], "ru-RU": ["дм³"] },
            CubicFoot = 4 => 0.028316846592, { "en-US": ["ft³"], "ru-RU": ["фут³"] },
            CubicInch = 5 => 1.6387064e-5, { "en-US": ["in³"], "ru-RU": ["дюйм³"] },
            CubicKilometer = 6 => 1e9, { "en-US": ["km³"], "ru-RU": ["км³"] },
            CubicMeter = 7 => 1.0, { "en-US": ["m³"], "ru-RU": ["м³"] },
            CubicMillimeter = 8 => 1e-9, { "en-US": ["mm³"], "ru-RU": ["мм³"] },
            Deciliter = 9 => 1e-4, { "en-US": ["dl"], "ru-RU": ["дл"] },
            Hectoliter = 10 => 1e-1, { "en-US": ["hl"], "ru-RU": ["гл"] },
            ImperialGallon = 11 => 0.00454609, { "en-US": ["gal (imp.)"], "ru-RU": ["Английский галлон"] },
            Liter = 12 => 1e-3, { "en-US": ["l", "L"], "ru-RU": ["л"] },
            MetricCup = 13 => 2.5e-4, { "en-US": ["metric cup"] },
            Milliliter = 14 => 1e-6, { "en-US": ["ml", "mL"], "ru-RU": ["мл"] },
            UsGallon = 15 => 0.003785411784, { "en-US": ["gal (U.S.)"], "ru-RU": ["Американский галлон"] },
            UsOunce = 16 => 2.95735295625e-5, { "en-US": ["oz (U.S.)"], "ru-RU": ["Американская унция"] },
        }
    }
}
