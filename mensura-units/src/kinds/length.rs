use crate::dimension::BaseDimensions;

quantity_kind! {
    /// Distance between two points
    Length, LengthUnit {
        quantity_type: Length,
        base_unit: Meter,
        dimensions: BaseDimensions::LENGTH,
        units: {
            Centimeter = 1 => 1e-2, { "en-US": ["cm"], "ru-RU": ["см"] },
            Decameter = 2 => 1e1, { "en-US": ["dam"], "ru-RU": ["дам"] },
            Decimeter = 3 => 1e-1, { "en-US": ["dm"], "ru-RU": ["дм"] },
            DtpPica = 4 => 1.0 / 236.220472441, { "en-US": ["pica"] },
            DtpPoint = 5 => (1.0 / 72.0) * 2.54e-2, { "en-US": ["pt"] },
            Fathom = 6 => 1.8288, { "en-US": ["fathom"] },
            Foot = 7 => 0.3048, { "en-US": ["ft", "'", "′"], "ru-RU": ["фут"] },
            Hand = 8 => 1.016e-1, { "en-US": ["h", "hh"] },
            Hectometer = 9 => 1e2, { "en-US": ["hm"], "ru-RU": ["гм"] },
            Inch = 10 => 2.54e-2, { "en-US": ["in", "\"", "″"], "ru-RU": ["дюйм"] },
            Kilometer = 11 => 1e3, { "en-US": ["km"], "ru-RU": ["км"] },
            Meter = 12 => 1.0, { "en-US": ["m"], "ru-RU": ["м"] },
            Microinch = 13 => 2.54e-8, { "en-US": ["µin"], "ru-RU": ["микродюйм"] },
            Micrometer = 14 => 1e-6, { "en-US": ["µm"], "ru-RU": ["мкм"] },
            Mil = 15 => 2.54e-5, { "en-US": ["mil"], "ru-RU": ["мил"] },
            Mile = 16 => 1609.344, { "en-US": ["mi"], "ru-RU": ["миля"] },
            Millimeter = 17 => 1e-3, { "en-US": ["mm"], "ru-RU": ["мм"] },
            Nanometer = 18 => 1e-9, { "en-US": ["nm"], "ru-RU": ["нм"] },
            NauticalMile = 19 => 1852.0, { "en-US": ["NM"], "ru-RU": ["мил"] },
            PrinterPica = 20 => 1.0 / 237.106301584, { "en-US": ["pica"] },
            PrinterPoint = 21 => (1.0 / 72.27) * 2.54e-2, { "en-US": ["pt"] },
            Shackle = 22 => 27.432, { "en-US": ["shackle"] },
            Twip = 23 => 1.0 / 56692.913386, { "en-US": ["twip"] },
            UsSurveyFoot = 24 => 1200.0 / 3937.0, { "en-US": ["ftUS"] },
            Yard = 25 => 0.9144, { "en-US": ["yd"], "ru-RU": ["ярд"] },
        }
    }
}
