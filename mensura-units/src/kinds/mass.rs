use crate::dimension::BaseDimensions;

quantity_kind! {
    /// Amount of matter
    Mass, MassUnit {
        quantity_type: Mass,
        base_unit: Kilogram,
        dimensions: BaseDimensions::MASS,
        units: {
            Centigram = 1 => 1e-5, { "en-US": ["cg"], "ru-RU": ["сг"] },
            Decagram = 2 => 1e-2, { "en-US": ["dag"], "ru-RU": ["даг"] },
            Decigram = 3 => 1e-4, { "en-US": ["dg"], "ru-RU": ["дг"] },
            Grain = 4 => 6.479891e-5, { "en-US": ["gr"] },
            Gram = 5 => 1e-3, { "en-US": ["g"], "ru-RU": ["г"] },
            Hectogram = 6 => 1e-1, { "en-US": ["hg"], "ru-RU": ["гг"] },
            Kilogram = 7 => 1.0, { "en-US": ["kg"], "ru-RU": ["кг"] },
            Kilotonne = 8 => 1e6, { "en-US": ["kt"], "ru-RU": ["кт"] },
            LongTon = 9 => 1016.0469088, { "en-US": ["long tn"], "ru-RU": ["тонна большая"] },
            Megatonne = 10 => 1e9, { "en-US": ["Mt"], "ru-RU": ["Мт"] },
            Microgram = 11 => 1e-9, { "en-US": ["µg"], "ru-RU": ["мкг"] },
            Milligram = 12 => 1e-6, { "en-US": ["mg"], "ru-RU": ["мг"] },
            Nanogram = 13 => 1e-12, { "en-US": ["ng"], "ru-RU": ["нг"] },
            Ounce = 14 => 0.028349523125, { "en-US": ["oz"] },
            Pound = 15 => 0.45359237, { "en-US": ["lb", "lbs", "lbm"], "ru-RU": ["фунт"] },
            ShortTon = 16 => 907.18474, { "en-US": ["short tn"], "ru-RU": ["тонна малая"] },
            Slug = 17 => 14.593903, { "en-US": ["slug"] },
            Stone = 18 => 6.35029318, { "en-US": ["st"] },
            Tonne = 19 => 1e3, { "en-US": ["t"], "ru-RU": ["т"] },
        }
    }
}
