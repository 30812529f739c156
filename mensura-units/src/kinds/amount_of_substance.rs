use crate::dimension::BaseDimensions;

quantity_kind! {
    /// Number of elementary entities, counted in moles
    AmountOfSubstance, AmountOfSubstanceUnit {
        quantity_type: AmountOfSubstance,
        base_unit: Mole,
        dimensions: BaseDimensions::AMOUNT,
        units: {
            Centimole = 1 => 1e-2, { "en-US": ["cmol"] },
            CentipoundMole = 2 => 453.59237e-2, { "en-US": ["clbmol"] },
            Decimole = 3 => 1e-1, { "en-US": ["dmol"] },
            DecipoundMole = 4 => 453.59237e-1, { "en-US": ["dlbmol"] },
            Kilomole = 5 => 1e3, { "en-US": ["kmol"] },
            KilopoundMole = 6 => 453.59237e3, { "en-US": ["klbmol"] },
            Megamole = 7 => 1e6, { "en-US": ["Mmol"] },
            Micromole = 8 => 1e-6, { "en-US": ["µmol"] },
            MicropoundMole = 9 => 453.59237e-6, { "en-US": ["µlbmol"] },
            Millimole = 10 => 1e-3, { "en-US": ["mmol"] },
            MillipoundMole = 11 => 453.59237e-3, { "en-US": ["mlbmol"] },
            Mole = 12 => 1.0, { "en-US": ["mol"] },
            Nanomole = 13 => 1e-9, { "en-US": ["nmol"] },
            NanopoundMole = 14 => 453.59237e-9, { "en-US": ["nlbmol"] },
            PoundMole = 15 => 453.59237, { "en-US": ["lbmol"] },
        }
    }
}
