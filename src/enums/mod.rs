//! eBay domain vocabulary.
//!
//! Every enum here is declared as a table of `Variant => "WIRE_VALUE"`
//! through [`api_enum!`]. Each one gets:
//!
//! - `as_str()` and `Display`, yielding the wire value
//! - `FromStr`, failing with [`UnknownEnumValue`]
//! - serde (de)serialization as the wire value
//! - `ALL`, every variant in declaration order
//! - a conversion into [`QueryValue`](crate::clients::QueryValue)
//!
//! # Example
//!
//! ```rust
//! use ebay_api::enums::{ContentLanguage, Marketplace};
//!
//! assert_eq!(Marketplace::EbayUs.as_str(), "EBAY_US");
//! assert_eq!(ContentLanguage::DeAt.to_string(), "de-AT");
//! assert_eq!("EBAY_GB".parse::<Marketplace>().unwrap(), Marketplace::EbayGb);
//! assert!("EBAY_XX".parse::<Marketplace>().is_err());
//! ```

use thiserror::Error;

/// Error returned when a string is not a known value of an enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {enum_name}")]
pub struct UnknownEnumValue {
    /// Name of the enum the value was parsed as.
    pub enum_name: &'static str,
    /// The rejected value.
    pub value: String,
}

/// Declares a wire-string enum.
///
/// ```rust,ignore
/// api_enum! {
///     /// Listing format.
///     FormatType {
///         Auction => "AUCTION",
///         FixedPrice => "FIXED_PRICE",
///     }
/// }
/// ```
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[doc = concat!("`", $wire, "`")]
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the value as sent on the wire.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::enums::UnknownEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::enums::UnknownEnumValue {
                        enum_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for $crate::clients::QueryValue {
            fn from(value: $name) -> Self {
                Self::Scalar(value.as_str().to_string())
            }
        }
    };
}

pub(crate) use api_enum;

mod account;
mod fulfillment;
mod listing;
mod marketplace;
mod post_order;

pub use account::*;
pub use fulfillment::*;
pub use listing::*;
pub use marketplace::*;
pub use post_order::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_marketplace_wire_values() {
        assert_eq!(Marketplace::EbayUs.as_str(), "EBAY_US");
        assert_eq!(Marketplace::EbayMotors.to_string(), "EBAY_MOTORS");
        assert_eq!("EBAY_DE".parse::<Marketplace>(), Ok(Marketplace::EbayDe));
    }

    #[test]
    fn test_language_tags_differ_from_locales() {
        assert_eq!(ContentLanguage::EnUs.as_str(), "en-US");
        assert_eq!(Locale::EnUs.as_str(), "en_US");
        assert!("en_US".parse::<ContentLanguage>().is_err());
    }

    #[test]
    fn test_unknown_value_error() {
        let error = "NOPE".parse::<ShippingCarrier>().unwrap_err();
        assert_eq!(error.enum_name, "ShippingCarrier");
        assert_eq!(error.value, "NOPE");
        assert_eq!(error.to_string(), "'NOPE' is not a valid ShippingCarrier");
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let json = serde_json::to_string(&ReasonForRefund::BuyerCancel).unwrap();
        assert_eq!(json, "\"BUYER_CANCEL\"");

        let decision: Decision = serde_json::from_str("\"OFFER_PARTIAL_REFUND\"").unwrap();
        assert_eq!(decision, Decision::OfferPartialRefund);

        assert!(serde_json::from_str::<Decision>("\"offer_partial_refund\"").is_err());
    }

    #[test]
    fn test_metric_values_are_names() {
        assert_eq!(Metric::ClickThroughRate.as_str(), "CLICK_THROUGH_RATE");
        assert_eq!(Metric::ALL.len(), 11);
    }

    #[test]
    fn test_every_value_round_trips_through_from_str() {
        fn check<T>(all: &[T])
        where
            T: Copy + PartialEq + std::fmt::Debug + std::fmt::Display + std::str::FromStr,
        {
            let mut seen = HashSet::new();
            for value in all {
                let wire = value.to_string();
                assert!(seen.insert(wire.clone()), "duplicate wire value {wire}");
                assert_eq!(wire.parse::<T>().ok(), Some(*value));
            }
        }

        check(Marketplace::ALL);
        check(Locale::ALL);
        check(ContentLanguage::ALL);
        check(CountryCode::ALL);
        check(CurrencyCode::ALL);
        check(ReturnState::ALL);
        check(PackageType::ALL);
        check(PaymentMethodType::ALL);
        check(FeedScope::ALL);
    }

    #[test]
    fn test_enum_into_query_value() {
        let value: crate::clients::QueryValue = FeedScope::NewlyListed.into();
        assert_eq!(value.render(), "NEWLY_LISTED");
    }
}
