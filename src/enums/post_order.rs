//! Vocabulary of the Post-Order API: returns, cases and inquiries.

use crate::enums::api_enum;

api_enum! {
    /// Whose side of a post-order case to search from.
    UserRoleFilter {
        Buyer => "BUYER",
        Seller => "SELLER",
    }
}

api_enum! {
    /// Case states accepted by the case search filter.
    CaseStatusFilter {
        Closed => "CLOSED",
        CsClosed => "CS_CLOSED",
        OnHold => "ON_HOLD",
        Open => "OPEN",
        Other => "OTHER",
        RefundAgreedButFailed => "REFUND_AGREED_BUT_FAILED",
        WaitingCs => "WAITING_CS",
        WaitingDelivery => "WAITING_DELIVERY",
    }
}

api_enum! {
    CaseSearchFieldGroup {
        Default => "DEFAULT",
        Summary => "SUMMARY",
    }
}

api_enum! {
    /// Inquiry states accepted by the inquiry search filter.
    InquiryStatusFilter {
        Closed => "CLOSED",
        ClosedWithEscalation => "CLOSED_WITH_ESCALATION",
        CsClosed => "CS_CLOSED",
        Open => "OPEN",
        Other => "OTHER",
        Pending => "PENDING",
        WaitingBuyerResponse => "WAITING_BUYER_RESPONSE",
        WaitingSellerResponse => "WAITING_SELLER_RESPONSE",
    }
}

api_enum! {
    InquirySearchFieldGroup {
        Default => "DEFAULT",
        Summary => "SUMMARY",
    }
}

api_enum! {
    /// Why a buyer opened a return.
    ReturnReason {
        ArrivedDamaged => "ARRIVED_DAMAGED",
        ArrivedLate => "ARRIVED_LATE",
        BuyerCancelOrder => "BUYER_CANCEL_ORDER",
        BuyerNoShow => "BUYER_NO_SHOW",
        BuyerNotScheduled => "BUYER_NOT_SCHEDULED",
        BuyerRefusedToPickup => "BUYER_REFUSED_TO_PICKUP",
        DefectiveItem => "DEFECTIVE_ITEM",
        DifferentFromListing => "DIFFERENT_FROM_LISTING",
        ExpiredItem => "EXPIRED_ITEM",
        FakeOrCounterfeit => "FAKE_OR_COUNTERFEIT",
        FoundBetterPrice => "FOUND_BETTER_PRICE",
        InStoreReturn => "IN_STORE_RETURN",
        MissingParts => "MISSING_PARTS",
        NoLongerNeedItem => "NO_LONGER_NEED_ITEM",
        NoReason => "NO_REASON",
        NotAsDescribed => "NOT_AS_DESCRIBED",
        OrderedAccidentally => "ORDERED_ACCIDENTALLY",
        OrderedDifferentItem => "ORDERED_DIFFERENT_ITEM",
        OrderedWrongItem => "ORDERED_WRONG_ITEM",
        Other => "OTHER",
        OutOfStock => "OUT_OF_STOCK",
        ReturningGift => "RETURNING_GIFT",
        ValetDeliveryIssues => "VALET_DELIVERY_ISSUES",
        ValetUnavailable => "VALET_UNAVAILABLE",
        WrongSize => "WRONG_SIZE",
    }
}

api_enum! {
    RequestType {
        Create => "CREATE",
        Request => "REQUEST",
        Unknown => "UNKNOWN",
    }
}

api_enum! {
    /// What the buyer wants out of a return.
    ReturnType {
        Exchange => "EXCHANGE",
        MoneyBack => "MONEY_BACK",
        Replacement => "REPLACEMENT",
        Unknown => "UNKNOWN",
    }
}

api_enum! {
    /// How much of a return record to fetch.
    GetReturnFieldGroup {
        Full => "FULL",
        None => "NONE",
        Summary => "SUMMARY",
    }
}

api_enum! {
    /// Why a seller escalates a return to eBay.
    EscalateReason {
        BuyerNoresponse => "BUYER_NORESPONSE",
        BuyerReturnedWrongItem => "BUYER_RETURNED_WRONG_ITEM",
        DisagreeWithReturnReason => "DISAGREE_WITH_RETURN_REASON",
        ItemNotReceived => "ITEM_NOT_RECEIVED",
        ItemReceivedInDifferentCondition => "ITEM_RECEIVED_IN_DIFFERENT_CONDITION",
        NewItemNotReceived => "NEW_ITEM_NOT_RECEIVED",
        NoRefundForReturnShipping => "NO_REFUND_FOR_RETURN_SHIPPING",
        NoRefundReceived => "NO_REFUND_RECEIVED",
        Other => "OTHER",
        ReceivedWrongItem => "RECEIVED_WRONG_ITEM",
        SellerNoResponse => "SELLER_NO_RESPONSE",
        TroubleCommunicationWithBuyer => "TROUBLE_COMMUNICATION_WITH_BUYER",
        TroubleCommunicationWithSeller => "TROUBLE_COMMUNICATION_WITH_SELLER",
    }
}

api_enum! {
    /// A seller decision on a return request.
    Decision {
        AcceptPartialRefund => "ACCEPT_PARTIAL_REFUND",
        AcceptReplacementOffer => "ACCEPT_REPLACEMENT_OFFER",
        Approve => "APPROVE",
        ApproveWithoutEbayLabel => "APPROVE_WITHOUT_EBAY_LABEL",
        Decline => "DECLINE",
        DeclinePartialRefund => "DECLINE_PARTIAL_REFUND",
        DeclineReplacementOffer => "DECLINE_REPLACEMENT_OFFER",
        OfferPartialRefund => "OFFER_PARTIAL_REFUND",
        OfferReplacement => "OFFER_REPLACEMENT",
        OfferReturn => "OFFER_RETURN",
        OfferReturnWithoutLabel => "OFFER_RETURN_WITHOUT_LABEL",
        ProvideRma => "PROVIDE_RMA",
        Unknown => "UNKNOWN",
    }
}

api_enum! {
    ReturnCountFilter {
        AllOpen => "ALL_OPEN",
        AllOpenReplacement => "ALL_OPEN_REPLACEMENT",
        AllOpenReturn => "ALL_OPEN_RETURN",
        Closed => "CLOSED",
        EbayPlus => "EBAY_PLUS",
        ItemDelivered => "ITEM_DELIVERED",
        ItemShipped => "ITEM_SHIPPED",
        ReturnStarted => "RETURN_STARTED",
        SellerActionDue => "SELLER_ACTION_DUE",
        SellerActionOverdue => "SELLER_ACTION_OVERDUE",
        SellerNoAction => "SELLER_NO_ACTION",
        Unknown => "UNKNOWN",
    }
}

api_enum! {
    /// Lifecycle state of a return.
    ReturnState {
        AutoRefundInitiated => "AUTO_REFUND_INITIATED",
        Closed => "CLOSED",
        Initial => "INITIAL",
        ItemDelivered => "ITEM_DELIVERED",
        ItemKept => "ITEM_KEPT",
        ItemReadyToShip => "ITEM_READY_TO_SHIP",
        ItemShipped => "ITEM_SHIPPED",
        LessThanAFullRefundIssued => "LESS_THAN_A_FULL_REFUND_ISSUED",
        PartialRefundAsPayoutInitiated => "PARTIAL_REFUND_AS_PAYOUT_INITIATED",
        PartialRefundDeclined => "PARTIAL_REFUND_DECLINED",
        PartialRefundFailed => "PARTIAL_REFUND_FAILED",
        PartialRefundInitiated => "PARTIAL_REFUND_INITIATED",
        PartialRefundNonPaypalInitiated => "PARTIAL_REFUND_NON_PAYPAL_INITIATED",
        PartialRefundRequested => "PARTIAL_REFUND_REQUESTED",
        PartialRefunded => "PARTIAL_REFUNDED",
        PayoutInitiated => "PAYOUT_INITIATED",
        RefundAsPayoutInitiated => "REFUND_AS_PAYOUT_INITIATED",
        RefundFailed => "REFUND_FAILED",
        RefundInitiated => "REFUND_INITIATED",
        RefundSentPendingConfirmation => "REFUND_SENT_PENDING_CONFIRMATION",
        RefundTimeout => "REFUND_TIMEOUT",
        Replaced => "REPLACED",
        ReplacementClosed => "REPLACEMENT_CLOSED",
        ReplacementDelivered => "REPLACEMENT_DELIVERED",
        ReplacementLabelPending => "REPLACEMENT_LABEL_PENDING",
        ReplacementLabelPendingTimeout => "REPLACEMENT_LABEL_PENDING_TIMEOUT",
        ReplacementLabelRequested => "REPLACEMENT_LABEL_REQUESTED",
        ReplacementLabelRequestedTimeout => "REPLACEMENT_LABEL_REQUESTED_TIMEOUT",
        ReplacementOfferPending => "REPLACEMENT_OFFER_PENDING",
        ReplacementRequestTimeout => "REPLACEMENT_REQUEST_TIMEOUT",
        ReplacementRequested => "REPLACEMENT_REQUESTED",
        ReplacementRmaPending => "REPLACEMENT_RMA_PENDING",
        ReplacementShipped => "REPLACEMENT_SHIPPED",
        ReplacementStarted => "REPLACEMENT_STARTED",
        ReturnLabelPending => "RETURN_LABEL_PENDING",
        ReturnLabelPendingTimeout => "RETURN_LABEL_PENDING_TIMEOUT",
        ReturnLabelRequested => "RETURN_LABEL_REQUESTED",
        ReturnLabelRequestedTimeout => "RETURN_LABEL_REQUESTED_TIMEOUT",
        ReturnRejected => "RETURN_REJECTED",
        ReturnRequestTimeout => "RETURN_REQUEST_TIMEOUT",
        ReturnRequested => "RETURN_REQUESTED",
        RmaPending => "RMA_PENDING",
        Unknown => "UNKNOWN",
    }
}

api_enum! {
    /// What an uploaded return file documents.
    FilePurpose {
        ItemRelated => "ITEM_RELATED",
        LabelRelated => "LABEL_RELATED",
        RefundRelated => "REFUND_RELATED",
        Unknown => "UNKNOWN",
    }
}

api_enum! {
    /// Line type of a return refund breakdown.
    RefundFeeType {
        DomesticShipping => "DOMESTIC_SHIPPING",
        ImportCharge => "IMPORT_CHARGE",
        InternationalShipping => "INTERNATIONAL_SHIPPING",
        ItemImportTax => "ITEM_IMPORT_TAX",
        ItemTax => "ITEM_TAX",
        OrderAdjustment => "ORDER_ADJUSTMENT",
        OriginalShipping => "ORIGINAL_SHIPPING",
        Other => "OTHER",
        PurchasePrice => "PURCHASE_PRICE",
        RefundFromPaypal => "REFUND_FROM_PAYPAL",
        ReturnShipping => "RETURN_SHIPPING",
        ShippingImportTax => "SHIPPING_IMPORT_TAX",
        ShippingTax => "SHIPPING_TAX",
    }
}

api_enum! {
    /// Activity recorded in a return's history.
    ActivityOption {
        AutoApproveRemorse => "AUTO_APPROVE_REMORSE",
        BuyerAcceptReplacementOffer => "BUYER_ACCEPT_REPLACEMENT_OFFER",
        BuyerAcceptsNonPaypalPartialRefund => "BUYER_ACCEPTS_NON_PAYPAL_PARTIAL_REFUND",
        BuyerAcceptsPartialRefund => "BUYER_ACCEPTS_PARTIAL_REFUND",
        BuyerCloseReturn => "BUYER_CLOSE_RETURN",
        BuyerCreateReturn => "BUYER_CREATE_RETURN",
        BuyerDeclinePartialRefund => "BUYER_DECLINE_PARTIAL_REFUND",
        BuyerDeclineReplacementOffer => "BUYER_DECLINE_REPLACEMENT_OFFER",
        BuyerEscalate => "BUYER_ESCALATE",
        BuyerMarkAsReceived => "BUYER_MARK_AS_RECEIVED",
        BuyerMarkRefundReceived => "BUYER_MARK_REFUND_RECEIVED",
        BuyerMarkReturnShipped => "BUYER_MARK_RETURN_SHIPPED",
        BuyerPrintShippingLabel => "BUYER_PRINT_SHIPPING_LABEL",
        BuyerProvideLabel => "BUYER_PROVIDE_LABEL",
        BuyerProvideTrackingInfo => "BUYER_PROVIDE_TRACKING_INFO",
        BuyerSendMessage => "BUYER_SEND_MESSAGE",
        BuyerUpdateTracking => "BUYER_UPDATE_TRACKING",
        BuyerVoidLabel => "BUYER_VOID_LABEL",
        ChargebackOpen => "CHARGEBACK_OPEN",
        DeleteFile => "DELETE_FILE",
        EmailShippingLabel => "EMAIL_SHIPPING_LABEL",
        ExternalClaimOpened => "EXTERNAL_CLAIM_OPENED",
        GeneralTimeOut => "GENERAL_TIME_OUT",
        NotifiedDelivered => "NOTIFIED_DELIVERED",
        NotifiedShipped => "NOTIFIED_SHIPPED",
        NotifyReplacementDelivered => "NOTIFY_REPLACEMENT_DELIVERED",
        NotifyReplacementShipped => "NOTIFY_REPLACEMENT_SHIPPED",
        NotifyUpdateRefundStatus => "NOTIFY_UPDATE_REFUND_STATUS",
        Other => "OTHER",
        ReminderBuyerToRespondReOffer => "REMINDER_BUYER_TO_RESPOND_RE_OFFER",
        ReminderBuyerToShip => "REMINDER_BUYER_TO_SHIP",
        ReminderForRefund => "REMINDER_FOR_REFUND",
        ReminderForRefundNoShipping => "REMINDER_FOR_REFUND_NO_SHIPPING",
        ReminderForRma => "REMINDER_FOR_RMA",
        ReminderForShipping => "REMINDER_FOR_SHIPPING",
        ReminderSellerToRespond => "REMINDER_SELLER_TO_RESPOND",
        ReminderSellerToShip => "REMINDER_SELLER_TO_SHIP",
        SellerApproveRequest => "SELLER_APPROVE_REQUEST",
        SellerDeclineRequest => "SELLER_DECLINE_REQUEST",
        SellerEscalate => "SELLER_ESCALATE",
        SellerIssueRefund => "SELLER_ISSUE_REFUND",
        SellerIssueStoreCreditRefund => "SELLER_ISSUE_STORE_CREDIT_REFUND",
        SellerMarkAsReceived => "SELLER_MARK_AS_RECEIVED",
        SellerMarkRefundSent => "SELLER_MARK_REFUND_SENT",
        SellerMarkReplacementShipped => "SELLER_MARK_REPLACEMENT_SHIPPED",
        SellerOfferPartialRefund => "SELLER_OFFER_PARTIAL_REFUND",
        SellerOfferReplacement => "SELLER_OFFER_REPLACEMENT",
        SellerOfferReturns => "SELLER_OFFER_RETURNS",
        SellerPrintShippingLabel => "SELLER_PRINT_SHIPPING_LABEL",
        SellerProvideLabel => "SELLER_PROVIDE_LABEL",
        SellerProvideRma => "SELLER_PROVIDE_RMA",
        SellerProvideTrackingInfo => "SELLER_PROVIDE_TRACKING_INFO",
        SellerRetryRefund => "SELLER_RETRY_REFUND",
        SellerSendMessage => "SELLER_SEND_MESSAGE",
        SellerUpdateTracking => "SELLER_UPDATE_TRACKING",
        SellerVoidLabel => "SELLER_VOID_LABEL",
        SubmitFile => "SUBMIT_FILE",
        SystemBuyerPartialRefundAsPayout => "SYSTEM_BUYER_PARTIAL_REFUND_AS_PAYOUT",
        SystemBuyerRefundAsPayout => "SYSTEM_BUYER_REFUND_AS_PAYOUT",
        SystemCloseReturn => "SYSTEM_CLOSE_RETURN",
        SystemCreateReturn => "SYSTEM_CREATE_RETURN",
        SystemImmediateRefund => "SYSTEM_IMMEDIATE_REFUND",
        TimeOutAfterDecline => "TIME_OUT_AFTER_DECLINE",
        TimeOutAfterRefunded => "TIME_OUT_AFTER_REFUNDED",
        TimeOutAfterRefundedAsPayout => "TIME_OUT_AFTER_REFUNDED_AS_PAYOUT",
        TimeOutAfterReplaced => "TIME_OUT_AFTER_REPLACED",
        TimeOutForAuthorize => "TIME_OUT_FOR_AUTHORIZE",
        TimeOutForAutoRefund => "TIME_OUT_FOR_AUTO_REFUND",
        TimeOutForBuyerRecoup => "TIME_OUT_FOR_BUYER_RECOUP",
        TimeOutForDelivery => "TIME_OUT_FOR_DELIVERY",
        TimeOutForEscalation => "TIME_OUT_FOR_ESCALATION",
        TimeOutForEscalationAfterSmir => "TIME_OUT_FOR_ESCALATION_AFTER_SMIR",
        TimeOutForItemReplaced => "TIME_OUT_FOR_ITEM_REPLACED",
        TimeOutForMarkRefundReceived => "TIME_OUT_FOR_MARK_REFUND_RECEIVED",
        TimeOutForMarkRefundSent => "TIME_OUT_FOR_MARK_REFUND_SENT",
        TimeOutForMassPayout => "TIME_OUT_FOR_MASS_PAYOUT",
        TimeOutForPayout => "TIME_OUT_FOR_PAYOUT",
        TimeOutForProvideLabel => "TIME_OUT_FOR_PROVIDE_LABEL",
        TimeOutForRefund => "TIME_OUT_FOR_REFUND",
        TimeOutForReplacementDeliveredItemNotReturned => "TIME_OUT_FOR_REPLACEMENT_DELIVERED_ITEM_NOT_RETURNED",
        TimeOutForReplacementShipped => "TIME_OUT_FOR_REPLACEMENT_SHIPPED",
        TimeOutForReturnShipping => "TIME_OUT_FOR_RETURN_SHIPPING",
        TimeOutForRma => "TIME_OUT_FOR_RMA",
        TimeOutForSellerInvoice => "TIME_OUT_FOR_SELLER_INVOICE",
        TimeOutForSellerPayout => "TIME_OUT_FOR_SELLER_PAYOUT",
        TimeOutForShipmentTracking => "TIME_OUT_FOR_SHIPMENT_TRACKING",
        TimeOutForShipping => "TIME_OUT_FOR_SHIPPING",
        TimeOutForShippingSystemClose => "TIME_OUT_FOR_SHIPPING_SYSTEM_CLOSE",
    }
}
