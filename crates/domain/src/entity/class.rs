//! Sensor classification enums understood by the host.
//!
//! Both enums use `snake_case` names on the wire and in configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_class {
    (
        $(#[doc = $doc:expr])*
        $name:ident, $err:ident {
            $($variant:ident => $text:literal,)+
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The `snake_case` wire name.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|class| class.as_str() == s)
                    .ok_or_else(|| ValidationError::$err(s.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(class: $name) -> Self {
                class.as_str()
            }
        }
    };
}

define_class!(
    /// What kind of quantity a sensor measures.
    SensorDeviceClass, UnknownDeviceClass {
        ApparentPower => "apparent_power",
        Aqi => "aqi",
        AtmosphericPressure => "atmospheric_pressure",
        Battery => "battery",
        CarbonDioxide => "carbon_dioxide",
        CarbonMonoxide => "carbon_monoxide",
        Current => "current",
        DataRate => "data_rate",
        DataSize => "data_size",
        Distance => "distance",
        Duration => "duration",
        Energy => "energy",
        Frequency => "frequency",
        Gas => "gas",
        Humidity => "humidity",
        Illuminance => "illuminance",
        Irradiance => "irradiance",
        Moisture => "moisture",
        Monetary => "monetary",
        Pm1 => "pm1",
        Pm10 => "pm10",
        Pm25 => "pm25",
        Power => "power",
        PowerFactor => "power_factor",
        Precipitation => "precipitation",
        Pressure => "pressure",
        ReactivePower => "reactive_power",
        SignalStrength => "signal_strength",
        SoundPressure => "sound_pressure",
        Speed => "speed",
        Temperature => "temperature",
        Timestamp => "timestamp",
        VolatileOrganicCompounds => "volatile_organic_compounds",
        Voltage => "voltage",
        Volume => "volume",
        Water => "water",
        Weight => "weight",
        WindSpeed => "wind_speed",
    }
);

define_class!(
    /// How the host should treat successive readings for statistics.
    SensorStateClass, UnknownStateClass {
        Measurement => "measurement",
        Total => "total",
        TotalIncreasing => "total_increasing",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_snake_case_device_class() {
        assert_eq!(
            "power_factor".parse::<SensorDeviceClass>(),
            Ok(SensorDeviceClass::PowerFactor)
        );
    }

    #[test]
    fn should_reject_unknown_device_class() {
        assert_eq!(
            "flux_capacitance".parse::<SensorDeviceClass>(),
            Err(ValidationError::UnknownDeviceClass(
                "flux_capacitance".to_string()
            ))
        );
    }

    #[test]
    fn should_reject_unknown_state_class() {
        assert!(matches!(
            "Measurement".parse::<SensorStateClass>(),
            Err(ValidationError::UnknownStateClass(_))
        ));
    }

    #[test]
    fn should_parse_every_displayed_name() {
        for class in SensorDeviceClass::ALL {
            assert_eq!(class.to_string().parse::<SensorDeviceClass>(), Ok(*class));
        }
        for class in SensorStateClass::ALL {
            assert_eq!(class.to_string().parse::<SensorStateClass>(), Ok(*class));
        }
    }

    #[test]
    fn should_serialize_as_wire_name() {
        let json = serde_json::to_string(&SensorStateClass::TotalIncreasing).unwrap();
        assert_eq!(json, "\"total_increasing\"");
        let class: SensorDeviceClass = serde_json::from_str("\"temperature\"").unwrap();
        assert_eq!(class, SensorDeviceClass::Temperature);
    }
}
