//! Order fulfillment, refund and shipping-package vocabulary.

use crate::enums::api_enum;

api_enum! {
    /// Carrier codes accepted in shipping fulfillments and return tracking.
    ShippingCarrier {
        AustraliaPost => "AUSTRALIA_POST",
        Bartolini => "BARTOLINI",
        CanadaPost => "CANADA_POST",
        Colissimo => "COLISSIMO",
        CollectPlus => "COLLECT_PLUS",
        Correos => "CORREOS",
        DeutschePost => "DEUTSCHE_POST",
        Dhl => "DHL",
        Fedex => "FEDEX",
        Hermes => "HERMES",
        LaPoste => "LA_POSTE",
        MondialRelay => "MONDIAL_RELAY",
        Mrw => "MRW",
        Nexive => "NEXIVE",
        Other => "OTHER",
        ParcelForce => "PARCEL_FORCE",
        Poste => "POSTE",
        RoyalMail => "ROYAL_MAIL",
        Seur => "SEUR",
        Unknown => "UNKNOWN",
        Ups => "UPS",
        Usps => "USPS",
    }
}

api_enum! {
    /// Reason given when issuing a refund through the Fulfillment API.
    ReasonForRefund {
        BuyerCancel => "BUYER_CANCEL",
        SellerCancel => "SELLER_CANCEL",
        ItemNotReceived => "ITEM_NOT_RECEIVED",
        BuyerReturn => "BUYER_RETURN",
        ItemNotAsDescribed => "ITEM_NOT_AS_DESCRIBED",
        OtherAdjustment => "OTHER_ADJUSTMENT",
        ShippingDiscount => "SHIPPING_DISCOUNT",
    }
}

api_enum! {
    /// Reason given for cancelling an order.
    CancelReason {
        AddressIssues => "ADDRESS_ISSUES",
        BuyerAskedCancel => "BUYER_ASKED_CANCEL",
        BuyerCancelOrAddressIssue => "BUYER_CANCEL_OR_ADDRESS_ISSUE",
        FoundCheaperPrice => "FOUND_CHEAPER_PRICE",
        OrderMistake => "ORDER_MISTAKE",
        OrderUnpaid => "ORDER_UNPAID",
        Other => "OTHER",
        OutOfStockOrCannotFulfill => "OUT_OF_STOCK_OR_CANNOT_FULFILL",
        PriceTooHigh => "PRICE_TOO_HIGH",
        Unknown => "UNKNOWN",
        WontArriveInTime => "WONT_ARRIVE_IN_TIME",
        WrongPaymentMethod => "WRONG_PAYMENT_METHOD",
        WrongShippingAddress => "WRONG_SHIPPING_ADDRESS",
        WrongShippingMethod => "WRONG_SHIPPING_METHOD",
    }
}

api_enum! {
    /// Package type of a shipment.
    PackageType {
        Letter => "LETTER",
        BulkyGoods => "BULKY_GOODS",
        Caravan => "CARAVAN",
        Cars => "CARS",
        Europallet => "EUROPALLET",
        ExpandableToughBags => "EXPANDABLE_TOUGH_BAGS",
        ExtraLargePack => "EXTRA_LARGE_PACK",
        Furniture => "FURNITURE",
        IndustryVehicles => "INDUSTRY_VEHICLES",
        LargeCanadaPostbox => "LARGE_CANADA_POSTBOX",
        LargeCanadaPostBubbleMailer => "LARGE_CANADA_POST_BUBBLE_MAILER",
        LargeEnvelope => "LARGE_ENVELOPE",
        MailingBox => "MAILING_BOX",
        MediumCanadaPostBox => "MEDIUM_CANADA_POST_BOX",
        MediumCanadaPostBubbleMailer => "MEDIUM_CANADA_POST_BUBBLE_MAILER",
        Motorbikes => "MOTORBIKES",
        OneWayPallet => "ONE_WAY_PALLET",
        PackageThickEnvelope => "PACKAGE_THICK_ENVELOPE",
        PaddedBags => "PADDED_BAGS",
        ParcelOrPaddedEnvelope => "PARCEL_OR_PADDED_ENVELOPE",
        Roll => "ROLL",
        SmallCanadaPostBox => "SMALL_CANADA_POST_BOX",
        SmallCanadaPostBubbleMailer => "SMALL_CANADA_POST_BUBBLE_MAILER",
        ToughBags => "TOUGH_BAGS",
        UpsLetter => "UPS_LETTER",
        UspsFlatRateEnvelope => "USPS_FLAT_RATE_ENVELOPE",
        UspsLargePack => "USPS_LARGE_PACK",
        VeryLargePack => "VERY_LARGE_PACK",
        WinePak => "WINE_PAK",
    }
}

api_enum! {
    LengthUnitOfMeasure {
        Inch => "INCH",
        Feet => "FEET",
        Centimeter => "CENTIMETER",
        Meter => "METER",
    }
}

api_enum! {
    WeightUnitOfMeasure {
        Pound => "POUND",
        Kilogram => "KILOGRAM",
        Ounce => "OUNCE",
        Gram => "GRAM",
    }
}
