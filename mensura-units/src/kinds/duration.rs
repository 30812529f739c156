use crate::dimension::BaseDimensions;

quantity_kind! {
    /// Elapsed time
    Duration, DurationUnit {
        quantity_type: Duration,
        base_unit: Second,
        dimensions: BaseDimensions::TIME,
        units: {
            Day = 1 => 86_400.0, { "en-US": ["d", "day", "days"], "ru-RU": ["сут", "д"] },
            Hour = 2 => 3_600.0, { "en-US": ["h", "hr", "hrs", "hour", "hours"], "ru-RU": ["ч", "час"] },
            Microsecond = 3 => 1e-6, { "en-US": ["µs"], "ru-RU": ["мкс"] },
            Millisecond = 4 => 1e-3, { "en-US": ["ms"], "ru-RU": ["мс"] },
            Minute = 5 => 60.0, { "en-US": ["m", "min", "minute", "minutes"], "ru-RU": ["мин"] },
            Month30 = 6 => 30.0 * 86_400.0, { "en-US": ["mo", "month", "months"], "ru-RU": ["месяц"] },
            Nanosecond = 7 => 1e-9, { "en-US": ["ns"], "ru-RU": ["нс"] },
            Second = 8 => 1.0, { "en-US": ["s", "sec", "secs", "second", "seconds"], "ru-RU": ["с", "сек"] },
            Week = 9 => 7.0 * 86_400.0, { "en-US": ["wk", "week", "weeks"], "ru-RU": ["нед"] },
            Year365 = 10 => 365.0 * 86_400.0, { "en-US": ["yr", "year", "years"], "ru-RU": ["год"] },
        }
    }
}
