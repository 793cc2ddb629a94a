//! Business policy and payments vocabulary of the Account API.

use crate::enums::api_enum;

api_enum! {
    /// Category group a business policy applies to.
    CategoryType {
        MotorsVehicles => "MOTORS_VEHICLES",
        AllExcludingMotorsVehicles => "ALL_EXCLUDING_MOTORS_VEHICLES",
    }
}

api_enum! {
    /// Unit of a `TimeDuration` value.
    TimeDurationUnit {
        Year => "YEAR",
        Month => "MONTH",
        Day => "DAY",
        Hour => "HOUR",
        CalendarDay => "CALENDAR_DAY",
        BusinessDay => "BUSINESS_DAY",
        Minute => "MINUTE",
        Second => "SECOND",
        Millisecond => "MILLISECOND",
    }
}

api_enum! {
    ShippingOptionType {
        Domestic => "DOMESTIC",
        International => "INTERNATIONAL",
    }
}

api_enum! {
    /// How shipping cost is determined for a fulfillment policy.
    ShippingCostType {
        Calculated => "CALCULATED",
        FlatRate => "FLAT_RATE",
        NotSpecified => "NOT_SPECIFIED",
    }
}

api_enum! {
    PaymentsProgramType {
        EbayPayments => "EBAY_PAYMENTS",
    }
}

api_enum! {
    PaymentsProgramStatus {
        OptedIn => "OPTED_IN",
        NotOptedIn => "NOT_OPTED_IN",
    }
}

api_enum! {
    /// Offline payment methods a payment policy may accept.
    PaymentMethodType {
        CashInPerson => "CASH_IN_PERSON",
        CashOnDelivery => "CASH_ON_DELIVERY",
        CashOnPickup => "CASH_ON_PICKUP",
        CashierCheck => "CASHIER_CHECK",
        CreditCard => "CREDIT_CARD",
        Escrow => "ESCROW",
        IntegratedMerchantCreditCard => "INTEGRATED_MERCHANT_CREDIT_CARD",
        LoanCheck => "LOAN_CHECK",
        MoneyOrder => "MONEY_ORDER",
        PaisaPay => "PAISA_PAY",
        PaisaPayEscrow => "PAISA_PAY_ESCROW",
        PaisaPayEscrowEmi => "PAISA_PAY_ESCROW_EMI",
        Paypal => "PAYPAL",
        PersonalCheck => "PERSONAL_CHECK",
        Other => "OTHER",
    }
}

api_enum! {
    RecipientAccountReferenceType {
        PaypalEmail => "PAYPAL_EMAIL",
    }
}

api_enum! {
    RefundMethod {
        MerchandiseCredit => "MERCHANDISE_CREDIT",
        MoneyBack => "MONEY_BACK",
    }
}

api_enum! {
    ReturnMethod {
        Exchange => "EXCHANGE",
        Replacement => "REPLACEMENT",
    }
}

api_enum! {
    /// Who pays return shipping.
    ReturnShippingCostPayer {
        Buyer => "BUYER",
        Seller => "SELLER",
    }
}

api_enum! {
    RegionType {
        Country => "COUNTRY",
        CountryRegion => "COUNTRY_REGION",
        StateOrProvince => "STATE_OR_PROVINCE",
        WorldRegion => "WORLD_REGION",
        Worldwide => "WORLDWIDE",
    }
}

api_enum! {
    StoreType {
        Store => "STORE",
        Warehouse => "WAREHOUSE",
    }
}
