//! Marketplace, locale, country and currency vocabulary.

use crate::enums::api_enum;

api_enum! {
    /// An eBay marketplace, sent as `X-EBAY-C-MARKETPLACE-ID`.
    Marketplace {
        EbayUs => "EBAY_US",
        EbayMotors => "EBAY_MOTORS",
        EbayCa => "EBAY_CA",
        EbayGb => "EBAY_GB",
        EbayAu => "EBAY_AU",
        EbayAt => "EBAY_AT",
        EbayBe => "EBAY_BE",
        EbayFr => "EBAY_FR",
        EbayDe => "EBAY_DE",
        EbayIt => "EBAY_IT",
        EbayNl => "EBAY_NL",
        EbayEs => "EBAY_ES",
        EbayCh => "EBAY_CH",
        EbayTw => "EBAY_TW",
        EbayCz => "EBAY_CZ",
        EbayDk => "EBAY_DK",
        EbayFi => "EBAY_FI",
        EbayGr => "EBAY_GR",
        EbayHk => "EBAY_HK",
        EbayHu => "EBAY_HU",
        EbayIn => "EBAY_IN",
        EbayId => "EBAY_ID",
        EbayIe => "EBAY_IE",
        EbayIl => "EBAY_IL",
        EbayMy => "EBAY_MY",
        EbayNz => "EBAY_NZ",
        EbayNo => "EBAY_NO",
        EbayPh => "EBAY_PH",
        EbayPl => "EBAY_PL",
        EbayPt => "EBAY_PT",
        EbayPr => "EBAY_PR",
        EbayRu => "EBAY_RU",
        EbaySg => "EBAY_SG",
        EbayZa => "EBAY_ZA",
        EbaySe => "EBAY_SE",
        EbayTh => "EBAY_TH",
        EbayVn => "EBAY_VN",
        EbayCn => "EBAY_CN",
        EbayPe => "EBAY_PE",
        EbayJp => "EBAY_JP",
    }
}

api_enum! {
    /// A locale in `ll_CC` form, used by listing and inventory payloads.
    Locale {
        EnUs => "en_US",
        EnCa => "en_CA",
        FrCa => "fr_CA",
        EnGb => "en_GB",
        EnAu => "en_AU",
        EnIn => "en_IN",
        DeAt => "de_AT",
        FrBe => "fr_BE",
        FrFr => "fr_FR",
        DeDe => "de_DE",
        ItIt => "it_IT",
        NlBe => "nl_BE",
        NlNl => "nl_NL",
        EsEs => "es_ES",
        DeCh => "de_CH",
        FiFi => "fi_FI",
        ZhHk => "zh_HK",
        HuHu => "hu_HU",
        EnPh => "en_PH",
        PlPl => "pl_PL",
        PtPt => "pt_PT",
        RuRu => "ru_RU",
        EnSg => "en_SG",
        EnIe => "en_IE",
        EnMy => "en_MY",
    }
}

api_enum! {
    /// A language tag in `ll-CC` form, sent as `Content-Language` or `Accept-Language`.
    ContentLanguage {
        DeAt => "de-AT",
        DeCh => "de-CH",
        DeDe => "de-DE",
        EnAu => "en-AU",
        EnCa => "en-CA",
        EnGb => "en-GB",
        EnIe => "en-IE",
        EnPh => "en-PH",
        EnUs => "en-US",
        EsEs => "es-ES",
        FrBe => "fr-BE",
        FrCa => "fr-CA",
        FrFr => "fr-FR",
        ItIt => "it-IT",
        NlBe => "nl-BE",
        NlNl => "nl-NL",
        PlPl => "pl-PL",
        ThTh => "th-TH",
        ZhHk => "zh-HK",
        ZhTw => "zh-TW",
    }
}

api_enum! {
    /// ISO 3166-1 alpha-2 country code.
    CountryCode {
        Ad => "AD",
        Ae => "AE",
        Af => "AF",
        Ag => "AG",
        Ai => "AI",
        Al => "AL",
        Am => "AM",
        An => "AN",
        Ao => "AO",
        Aq => "AQ",
        Ar => "AR",
        As => "AS",
        At => "AT",
        Au => "AU",
        Aw => "AW",
        Ax => "AX",
        Az => "AZ",
        Ba => "BA",
        Bb => "BB",
        Bd => "BD",
        Be => "BE",
        Bf => "BF",
        Bg => "BG",
        Bh => "BH",
        Bi => "BI",
        Bj => "BJ",
        Bl => "BL",
        Bm => "BM",
        Bn => "BN",
        Bo => "BO",
        Bq => "BQ",
        Br => "BR",
        Bs => "BS",
        Bt => "BT",
        Bv => "BV",
        Bw => "BW",
        By => "BY",
        Bz => "BZ",
        Ca => "CA",
        Cc => "CC",
        Cd => "CD",
        Cf => "CF",
        Cg => "CG",
        Ch => "CH",
        Ci => "CI",
        Ck => "CK",
        Cl => "CL",
        Cm => "CM",
        Cn => "CN",
        Co => "CO",
        Cr => "CR",
        Cu => "CU",
        Cv => "CV",
        Cw => "CW",
        Cx => "CX",
        Cy => "CY",
        Cz => "CZ",
        De => "DE",
        Dj => "DJ",
        Dk => "DK",
        Dm => "DM",
        Do => "DO",
        Dz => "DZ",
        Ec => "EC",
        Ee => "EE",
        Eg => "EG",
        Eh => "EH",
        Er => "ER",
        Es => "ES",
        Et => "ET",
        Fi => "FI",
        Fj => "FJ",
        Fk => "FK",
        Fm => "FM",
        Fo => "FO",
        Fr => "FR",
        Ga => "GA",
        Gb => "GB",
        Gd => "GD",
        Ge => "GE",
        Gf => "GF",
        Gg => "GG",
        Gh => "GH",
        Gi => "GI",
        Gl => "GL",
        Gm => "GM",
        Gn => "GN",
        Gp => "GP",
        Gq => "GQ",
        Gr => "GR",
        Gs => "GS",
        Gt => "GT",
        Gu => "GU",
        Gw => "GW",
        Gy => "GY",
        Hk => "HK",
        Hm => "HM",
        Hn => "HN",
        Hr => "HR",
        Ht => "HT",
        Hu => "HU",
        Id => "ID",
        Ie => "IE",
        Il => "IL",
        Im => "IM",
        In => "IN",
        Io => "IO",
        Iq => "IQ",
        Ir => "IR",
        Is => "IS",
        It => "IT",
        Je => "JE",
        Jm => "JM",
        Jo => "JO",
        Jp => "JP",
        Ke => "KE",
        Kg => "KG",
        Kh => "KH",
        Ki => "KI",
        Km => "KM",
        Kn => "KN",
        Kp => "KP",
        Kr => "KR",
        Kw => "KW",
        Ky => "KY",
        Kz => "KZ",
        La => "LA",
        Lb => "LB",
        Lc => "LC",
        Li => "LI",
        Lk => "LK",
        Lr => "LR",
        Ls => "LS",
        Lt => "LT",
        Lu => "LU",
        Lv => "LV",
        Ly => "LY",
        Ma => "MA",
        Mc => "MC",
        Md => "MD",
        Me => "ME",
        Mf => "MF",
        Mg => "MG",
        Mh => "MH",
        Mk => "MK",
        Ml => "ML",
        Mm => "MM",
        Mn => "MN",
        Mo => "MO",
        Mp => "MP",
        Mq => "MQ",
        Mr => "MR",
        Ms => "MS",
        Mt => "MT",
        Mu => "MU",
        Mv => "MV",
        Mw => "MW",
        Mx => "MX",
        My => "MY",
        Mz => "MZ",
        Na => "NA",
        Nc => "NC",
        Ne => "NE",
        Nf => "NF",
        Ng => "NG",
        Ni => "NI",
        Nl => "NL",
        No => "NO",
        Np => "NP",
        Nr => "NR",
        Nu => "NU",
        Nz => "NZ",
        Om => "OM",
        Pa => "PA",
        Pe => "PE",
        Pf => "PF",
        Pg => "PG",
        Ph => "PH",
        Pk => "PK",
        Pl => "PL",
        Pm => "PM",
        Pn => "PN",
        Pr => "PR",
        Ps => "PS",
        Pt => "PT",
        Pw => "PW",
        Py => "PY",
        Qa => "QA",
        Re => "RE",
        Ro => "RO",
        Rs => "RS",
        Ru => "RU",
        Rw => "RW",
        Sa => "SA",
        Sb => "SB",
        Sc => "SC",
        Sd => "SD",
        Se => "SE",
        Sg => "SG",
        Sh => "SH",
        Si => "SI",
        Sj => "SJ",
        Sk => "SK",
        Sl => "SL",
        Sm => "SM",
        Sn => "SN",
        So => "SO",
        Sr => "SR",
        St => "ST",
        Sv => "SV",
        Sx => "SX",
        Sy => "SY",
        Sz => "SZ",
        Tc => "TC",
        Td => "TD",
        Tf => "TF",
        Tg => "TG",
        Th => "TH",
        Tj => "TJ",
        Tk => "TK",
        Tl => "TL",
        Tm => "TM",
        Tn => "TN",
        To => "TO",
        Tr => "TR",
        Tt => "TT",
        Tv => "TV",
        Tw => "TW",
        Tz => "TZ",
        Ua => "UA",
        Ug => "UG",
        Um => "UM",
        Us => "US",
        Uy => "UY",
        Uz => "UZ",
        Va => "VA",
        Vc => "VC",
        Ve => "VE",
        Vg => "VG",
        Vi => "VI",
        Vn => "VN",
        Vu => "VU",
        Wf => "WF",
        Ws => "WS",
        Ye => "YE",
        Yt => "YT",
        Za => "ZA",
        Zm => "ZM",
        Zw => "ZW",
    }
}

api_enum! {
    /// ISO 4217 currency code.
    CurrencyCode {
        Aed => "AED",
        Afn => "AFN",
        All => "ALL",
        Amd => "AMD",
        Ang => "ANG",
        Aoa => "AOA",
        Ars => "ARS",
        Aud => "AUD",
        Awg => "AWG",
        Azn => "AZN",
        Bam => "BAM",
        Bbd => "BBD",
        Bdt => "BDT",
        Bgn => "BGN",
        Bhd => "BHD",
        Bif => "BIF",
        Bmd => "BMD",
        Bnd => "BND",
        Bob => "BOB",
        Brl => "BRL",
        Bsd => "BSD",
        Btn => "BTN",
        Bwp => "BWP",
        Byr => "BYR",
        Bzd => "BZD",
        Cad => "CAD",
        Cdf => "CDF",
        Chf => "CHF",
        Clp => "CLP",
        Cny => "CNY",
        Cop => "COP",
        Crc => "CRC",
        Cup => "CUP",
        Cve => "CVE",
        Czk => "CZK",
        Djf => "DJF",
        Dkk => "DKK",
        Dop => "DOP",
        Dzd => "DZD",
        Egp => "EGP",
        Ern => "ERN",
        Etb => "ETB",
        Eur => "EUR",
        Fjd => "FJD",
        Fkp => "FKP",
        Gbp => "GBP",
        Gel => "GEL",
        Ghs => "GHS",
        Gip => "GIP",
        Gmd => "GMD",
        Gnf => "GNF",
        Gtq => "GTQ",
        Gyd => "GYD",
        Hkd => "HKD",
        Hnl => "HNL",
        Hrk => "HRK",
        Htg => "HTG",
        Huf => "HUF",
        Idr => "IDR",
        Ils => "ILS",
        Inr => "INR",
        Iqd => "IQD",
        Irr => "IRR",
        Isk => "ISK",
        Jmd => "JMD",
        Jod => "JOD",
        Jpy => "JPY",
        Kes => "KES",
        Kgs => "KGS",
        Khr => "KHR",
        Kmf => "KMF",
        Kpw => "KPW",
        Krw => "KRW",
        Kwd => "KWD",
        Kyd => "KYD",
        Kzt => "KZT",
        Lak => "LAK",
        Lbp => "LBP",
        Lkr => "LKR",
        Lrd => "LRD",
        Lsl => "LSL",
        Ltl => "LTL",
        Lyd => "LYD",
        Mad => "MAD",
        Mdl => "MDL",
        Mga => "MGA",
        Mkd => "MKD",
        Mmk => "MMK",
        Mnt => "MNT",
        Mop => "MOP",
        Mro => "MRO",
        Mur => "MUR",
        Mvr => "MVR",
        Mwk => "MWK",
        Mxn => "MXN",
        Myr => "MYR",
        Mzn => "MZN",
        Nad => "NAD",
        Ngn => "NGN",
        Nio => "NIO",
        Nok => "NOK",
        Npr => "NPR",
        Nzd => "NZD",
        Omr => "OMR",
        Pab => "PAB",
        Pen => "PEN",
        Pgk => "PGK",
        Php => "PHP",
        Pkr => "PKR",
        Pln => "PLN",
        Pyg => "PYG",
        Qar => "QAR",
        Ron => "RON",
        Rsd => "RSD",
        Rub => "RUB",
        Rwf => "RWF",
        Sar => "SAR",
        Sbd => "SBD",
        Scr => "SCR",
        Sdg => "SDG",
        Sek => "SEK",
        Sgd => "SGD",
        Shp => "SHP",
        Sll => "SLL",
        Sos => "SOS",
        Srd => "SRD",
        Std => "STD",
        Syp => "SYP",
        Szl => "SZL",
        Thb => "THB",
        Tjs => "TJS",
        Tmt => "TMT",
        Tnd => "TND",
        Top => "TOP",
        Try => "TRY",
        Ttd => "TTD",
        Twd => "TWD",
        Tzs => "TZS",
        Uah => "UAH",
        Ugx => "UGX",
        Usd => "USD",
        Uyu => "UYU",
        Uzs => "UZS",
        Vef => "VEF",
        Vnd => "VND",
        Vuv => "VUV",
        Wst => "WST",
        Xaf => "XAF",
        Xcd => "XCD",
        Xof => "XOF",
        Xpf => "XPF",
        Yer => "YER",
        Zar => "ZAR",
        Zmw => "ZMW",
        Zwl => "ZWL",
    }
}
