//! Declarative quantity kinds
//!
//! `quantity_kind!` emits, for one kind:
//! - a `#[repr(i32)]` unit enum with the reserved `Undefined = 0` variant
//! - a zero-sized marker type implementing `QuantityKind`
//! - the kind's conversion table (built once, on first use)
//! - the kind's built-in abbreviations per culture
//!
//! ```ignore
//! quantity_kind! {
//!     /// Distance
//!     Length, LengthUnit {
//!         quantity_type: Length,
//!         base_unit: Meter,
//!         dimensions: BaseDimensions::LENGTH,
//!         units: {
//!             Meter = 1 => 1.0, { "en-US": ["m"], "ru-RU": ["м"] },
//!             Kilometer = 2 => 1e3, { "en-US": ["km"] },
//!         }
//!     }
//! }
//! ```

macro_rules! quantity_kind {
    (
        $(#[$meta:meta])*
        $kind:ident, $unit_enum:ident {
            quantity_type: $qt:ident,
            base_unit: $base:ident,
            dimensions: $dims:expr,
            units: {
                $(
                    $unit:ident = $value:literal => $factor:expr,
                    { $( $culture:literal : [ $( $abbr:literal ),* $(,)? ] ),* $(,)? }
                ),+ $(,)?
            } $(,)?
        }
    ) => {
        #[doc = concat!("Units of [`", stringify!($kind), "`]")]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[repr(i32)]
        pub enum $unit_enum {
            #[default]
            Undefined = 0,
            $( $unit = $value, )+
        }

        impl $crate::kind::UnitEnum for $unit_enum {
            const TYPE_NAME: &'static str = stringify!($unit_enum);
            const QUANTITY_TYPE: $crate::kind::QuantityType = $crate::kind::QuantityType::$qt;
            const UNDEFINED: Self = $unit_enum::Undefined;
            const ALL: &'static [Self] = &[ $( $unit_enum::$unit, )+ ];

            fn value(self) -> i32 {
                self as i32
            }

            fn from_value(value: i32) -> Option<Self> {
                match value {
                    0 => Some($unit_enum::Undefined),
                    $( $value => Some($unit_enum::$unit), )+
                    _ => None,
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $unit_enum::Undefined => "Undefined",
                    $( $unit_enum::$unit => stringify!($unit), )+
                }
            }
        }

        impl ::std::fmt::Display for $unit_enum {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", $crate::kind::UnitEnum::name(*self))
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $kind;

        impl $crate::kind::QuantityKind for $kind {
            type Unit = $unit_enum;

            const NAME: &'static str = stringify!($kind);
            const QUANTITY_TYPE: $crate::kind::QuantityType = $crate::kind::QuantityType::$qt;
            const BASE_UNIT: $unit_enum = $unit_enum::$base;
            const BASE_DIMENSIONS: $crate::dimension::BaseDimensions = $dims;

            fn conversion_table() -> &'static $crate::conversion::ConversionTable {
                static TABLE: ::std::sync::LazyLock<$crate::conversion::ConversionTable> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::conversion::ConversionTable::new(
                            $crate::kind::QuantityType::$qt,
                            $unit_enum::$base as i32,
                            &[ $(
                                (
                                    $unit_enum::$unit as i32,
                                    stringify!($unit),
                                    $crate::conversion::ConversionRule::linear($factor),
                                ),
                            )+ ],
                        )
                    });
                &TABLE
            }

            fn localizations() -> &'static [$crate::kind::UnitLocalization] {
                static LOCALIZATIONS: &[$crate::kind::UnitLocalization] = &[ $(
                    $crate::kind::UnitLocalization {
                        unit_value: $value,
                        entries: &[ $( ($culture, &[ $( $abbr ),* ]) ),* ],
                    },
                )+ ];
                LOCALIZATIONS
            }
        }
    };
}
