use crate::dimension::BaseDimensions;

quantity_kind! {
    /// Rate of change of position
    Speed, SpeedUnit {
        quantity_type: Speed,
        base_unit: MeterPerSecond,
        dimensions: BaseDimensions::SPEED,
        units: {
            CentimeterPerSecond = 1 => 1e-2, { "en-US": ["cm/s"], "ru-RU": ["см/с"] },
            FootPerMinute = 2 => 0.3048 / 60.0, { "en-US": ["ft/min"], "ru-RU": ["фут/мин"] },
            FootPerSecond = 3 => 0.3048, { "en-US": ["ft/s"], "ru-RU": ["фут/с"] },
            InchPerSecond = 4 => 2.54e-2, { "en-US": ["in/s"], "ru-RU": ["дюйм/с"] },
            KilometerPerHour = 5 => 1.0 / 3.6, { "en-US": ["km/h"], "ru-RU": ["км/ч"] },
            KilometerPerSecond = 6 => 1e3, { "en-US": ["km/s"], "ru-RU": ["км/с"] },
            Knot = 7 => 1852.0 / 3600.0, { "en-US": ["kn", "kt", "knot", "knots"], "ru-RU": ["уз."] },
            MeterPerMinute = 8 => 1.0 / 60.0, { "en-US": ["m/min"], "ru-RU": ["м/мин"] },
            MeterPerSecond = 9 => 1.0, { "en-US": ["m/s"], "ru-RU": ["м/с"] },
            MilePerHour = 10 => 0.44704, { "en-US": ["mph"], "ru-RU": ["миль/ч"] },
            MillimeterPerSecond = 11 => 1e-3, { "en-US": ["mm/s"], "ru-RU": ["мм/с"] },
        }
    }
}
