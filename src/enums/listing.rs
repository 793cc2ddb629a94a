//! Listing, inventory, feed and analytics vocabulary.

use crate::enums::api_enum;

api_enum! {
    /// Item condition in the Inventory API.
    Condition {
        New => "NEW",
        LikeNew => "LIKE_NEW",
        NewOther => "NEW_OTHER",
        NewWithDefects => "NEW_WITH_DEFECTS",
        ManufacturerRefurbished => "MANUFACTURER_REFURBISHED",
        SellerRefurbished => "SELLER_REFURBISHED",
        UsedExcellent => "USED_EXCELLENT",
        UsedVeryGood => "USED_VERY_GOOD",
        UsedGood => "USED_GOOD",
        UsedAcceptable => "USED_ACCEPTABLE",
        ForPartsOrNotWorking => "FOR_PARTS_OR_NOT_WORKING",
    }
}

api_enum! {
    /// Listing format.
    FormatType {
        Auction => "AUCTION",
        FixedPrice => "FIXED_PRICE",
    }
}

api_enum! {
    /// Traffic report metrics of the Analytics API.
    Metric {
        ClickThroughRate => "CLICK_THROUGH_RATE",
        ListingImpressionStore => "LISTING_IMPRESSION_STORE",
        ListingImpressionTotal => "LISTING_IMPRESSION_TOTAL",
        ListingViewsSourceDirect => "LISTING_VIEWS_SOURCE_DIRECT",
        ListingViewsSourceOffEbay => "LISTING_VIEWS_SOURCE_OFF_EBAY",
        ListingViewsSourceOtherEbay => "LISTING_VIEWS_SOURCE_OTHER_EBAY",
        ListingViewsSourceSearchResultsPage => "LISTING_VIEWS_SOURCE_SEARCH_RESULTS_PAGE",
        ListingViewsSourceStore => "LISTING_VIEWS_SOURCE_STORE",
        ListingViewsTotal => "LISTING_VIEWS_TOTAL",
        SalesConversionRate => "SALES_CONVERSION_RATE",
        Transaction => "TRANSACTION",
    }
}

api_enum! {
    /// Which items a Buy Feed file covers.
    FeedScope {
        NewlyListed => "NEWLY_LISTED",
        AllActive => "ALL_ACTIVE",
    }
}
