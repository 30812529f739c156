use crate::dimension::BaseDimensions;

quantity_kind! {
    /// Extent of a two-dimensional surface
    Area, AreaUnit {
        quantity_type: Area,
        base_unit: SquareMeter,
        dimensions: BaseDimensions::AREA,
        units: {
            Acre = 1 => 4046.8564224, { "en-US": ["ac"], "ru-RU": ["акр"] },
            Hectare = 2 => 1e4, { "en-US": ["ha"], "ru-RU": ["га"] },
            SquareCentimeter = 3 => 1e-4, { "en-US": ["cm²"], "ru-RU": ["см²"] },
            SquareDecimeter = 4 => 1e-2, { "en-US": ["dm²"], "ru-RU": ["дм²"] },
            SquareFoot = 5 => 0.09290304, { "en-US": ["ft²"], "ru-RU": ["фут²"] },
            SquareInch = 6 => 0.00064516, { "en-US": ["in²"], "ru-RU": ["дюйм²"] },
            SquareKilometer = 7 => 1e6, { "en-US": ["km²"], "ru-RU": ["км²"] },
            SquareMeter = 8 => 1.0, { "en-US": ["m²"], "ru-RU": ["м²"] },
            SquareMicrometer = 9 => 1e-12, { "en-US": ["µm²"], "ru-RU": ["мкм²"] },
            SquareMile = 10 => 2_589_988.110336, { "en-US": ["mi²"], "ru-RU": ["миля²"] },
            SquareMillimeter = 11 => 1e-6, { "en-US": ["mm²"], "ru-RU": ["мм²"] },
            SquareYard = 12 => 0.83612736, { "en-US": ["yd²"], "ru-RU": ["ярд²"] },
        }
    }
}
