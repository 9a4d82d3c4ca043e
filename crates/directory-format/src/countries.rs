//! ISO 3166-1 country table.
//!
//! Maps alpha-2 codes to alpha-3 codes, English short names, and E.164
//! country calling codes. Regions that share a calling code (NANP, the
//! Russian zone, ...) each list the shared code.

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    /// E.164 calling code, `0` where none is assigned.
    pub calling_code: u16,
}

const fn c(alpha2: &'static str, alpha3: &'static str, name: &'static str, calling_code: u16) -> Country {
    Country {
        alpha2,
        alpha3,
        name,
        calling_code,
    }
}

/// All ISO 3166-1 countries, ordered by alpha-2 code.
pub const COUNTRIES: &[Country] = &[
    c("AD", "AND", "Andorra", 376),
    c("AE", "ARE", "United Arab Emirates", 971),
    c("AF", "AFG", "Afghanistan", 93),
    c("AG", "ATG", "Antigua & Barbuda", 1),
    c("AI", "AIA", "Anguilla", 1),
    c("AL", "ALB", "Albania", 355),
    c("AM", "ARM", "Armenia", 374),
    c("AO", "AGO", "Angola", 244),
    c("AQ", "ATA", "Antarctica", 672),
    c("AR", "ARG", "Argentina", 54),
    c("AS", "ASM", "American Samoa", 1),
    c("AT", "AUT", "Austria", 43),
    c("AU", "AUS", "Australia", 61),
    c("AW", "ABW", "Aruba", 297),
    c("AX", "ALA", "Åland Islands", 358),
    c("AZ", "AZE", "Azerbaijan", 994),
    c("BA", "BIH", "Bosnia & Herzegovina", 387),
    c("BB", "BRB", "Barbados", 1),
    c("BD", "BGD", "Bangladesh", 880),
    c("BE", "BEL", "Belgium", 32),
    c("BF", "BFA", "Burkina Faso", 226),
    c("BG", "BGR", "Bulgaria", 359),
    c("BH", "BHR", "Bahrain", 973),
    c("BI", "BDI", "Burundi", 257),
    c("BJ", "BEN", "Benin", 229),
    c("BL", "BLM", "St. Barthélemy", 590),
    c("BM", "BMU", "Bermuda", 1),
    c("BN", "BRN", "Brunei", 673),
    c("BO", "BOL", "Bolivia", 591),
    c("BQ", "BES", "Caribbean Netherlands", 599),
    c("BR", "BRA", "Brazil", 55),
    c("BS", "BHS", "Bahamas", 1),
    c("BT", "BTN", "Bhutan", 975),
    c("BV", "BVT", "Bouvet Island", 0),
    c("BW", "BWA", "Botswana", 267),
    c("BY", "BLR", "Belarus", 375),
    c("BZ", "BLZ", "Belize", 501),
    c("CA", "CAN", "Canada", 1),
    c("CC", "CCK", "Cocos (Keeling) Islands", 61),
    c("CD", "COD", "Congo - Kinshasa", 243),
    c("CF", "CAF", "Central African Republic", 236),
    c("CG", "COG", "Congo - Brazzaville", 242),
    c("CH", "CHE", "Switzerland", 41),
    c("CI", "CIV", "Côte d’Ivoire", 225),
    c("CK", "COK", "Cook Islands", 682),
    c("CL", "CHL", "Chile", 56),
    c("CM", "CMR", "Cameroon", 237),
    c("CN", "CHN", "China", 86),
    c("CO", "COL", "Colombia", 57),
    c("CR", "CRI", "Costa Rica", 506),
    c("CU", "CUB", "Cuba", 53),
    c("CV", "CPV", "Cape Verde", 238),
    c("CW", "CUW", "Curaçao", 599),
    c("CX", "CXR", "Christmas Island", 61),
    c("CY", "CYP", "Cyprus", 357),
    c("CZ", "CZE", "Czechia", 420),
    c("DE", "DEU", "Germany", 49),
    c("DJ", "DJI", "Djibouti", 253),
    c("DK", "DNK", "Denmark", 45),
    c("DM", "DMA", "Dominica", 1),
    c("DO", "DOM", "Dominican Republic", 1),
    c("DZ", "DZA", "Algeria", 213),
    c("EC", "ECU", "Ecuador", 593),
    c("EE", "EST", "Estonia", 372),
    c("EG", "EGY", "Egypt", 20),
    c("EH", "ESH", "Western Sahara", 212),
    c("ER", "ERI", "Eritrea", 291),
    c("ES", "ESP", "Spain", 34),
    c("ET", "ETH", "Ethiopia", 251),
    c("FI", "FIN", "Finland", 358),
    c("FJ", "FJI", "Fiji", 679),
    c("FK", "FLK", "Falkland Islands", 500),
    c("FM", "FSM", "Micronesia", 691),
    c("FO", "FRO", "Faroe Islands", 298),
    c("FR", "FRA", "France", 33),
    c("GA", "GAB", "Gabon", 241),
    c("GB", "GBR", "United Kingdom", 44),
    c("GD", "GRD", "Grenada", 1),
    c("GE", "GEO", "Georgia", 995),
    c("GF", "GUF", "French Guiana", 594),
    c("GG", "GGY", "Guernsey", 44),
    c("GH", "GHA", "Ghana", 233),
    c("GI", "GIB", "Gibraltar", 350),
    c("GL", "GRL", "Greenland", 299),
    c("GM", "GMB", "Gambia", 220),
    c("GN", "GIN", "Guinea", 224),
    c("GP", "GLP", "Guadeloupe", 590),
    c("GQ", "GNQ", "Equatorial Guinea", 240),
    c("GR", "GRC", "Greece", 30),
    c("GS", "SGS", "South Georgia & South Sandwich Islands", 500),
    c("GT", "GTM", "Guatemala", 502),
    c("GU", "GUM", "Guam", 1),
    c("GW", "GNB", "Guinea-Bissau", 245),
    c("GY", "GUY", "Guyana", 592),
    c("HK", "HKG", "Hong Kong SAR China", 852),
    c("HM", "HMD", "Heard & McDonald Islands", 0),
    c("HN", "HND", "Honduras", 504),
    c("HR", "HRV", "Croatia", 385),
    c("HT", "HTI", "Haiti", 509),
    c("HU", "HUN", "Hungary", 36),
    c("ID", "IDN", "Indonesia", 62),
    c("IE", "IRL", "Ireland", 353),
    c("IL", "ISR", "Israel", 972),
    c("IM", "IMN", "Isle of Man", 44),
    c("IN", "IND", "India", 91),
    c("IO", "IOT", "British Indian Ocean Territory", 246),
    c("IQ", "IRQ", "Iraq", 964),
    c("IR", "IRN", "Iran", 98),
    c("IS", "ISL", "Iceland", 354),
    c("IT", "ITA", "Italy", 39),
    c("JE", "JEY", "Jersey", 44),
    c("JM", "JAM", "Jamaica", 1),
    c("JO", "JOR", "Jordan", 962),
    c("JP", "JPN", "Japan", 81),
    c("KE", "KEN", "Kenya", 254),
    c("KG", "KGZ", "Kyrgyzstan", 996),
    c("KH", "KHM", "Cambodia", 855),
    c("KI", "KIR", "Kiribati", 686),
    c("KM", "COM", "Comoros", 269),
    c("KN", "KNA", "St. Kitts & Nevis", 1),
    c("KP", "PRK", "North Korea", 850),
    c("KR", "KOR", "South Korea", 82),
    c("KW", "KWT", "Kuwait", 965),
    c("KY", "CYM", "Cayman Islands", 1),
    c("KZ", "KAZ", "Kazakhstan", 7),
    c("LA", "LAO", "Laos", 856),
    c("LB", "LBN", "Lebanon", 961),
    c("LC", "LCA", "St. Lucia", 1),
    c("LI", "LIE", "Liechtenstein", 423),
    c("LK", "LKA", "Sri Lanka", 94),
    c("LR", "LBR", "Liberia", 231),
    c("LS", "LSO", "Lesotho", 266),
    c("LT", "LTU", "Lithuania", 370),
    c("LU", "LUX", "Luxembourg", 352),
    c("LV", "LVA", "Latvia", 371),
    c("LY", "LBY", "Libya", 218),
    c("MA", "MAR", "Morocco", 212),
    c("MC", "MCO", "Monaco", 377),
    c("MD", "MDA", "Moldova", 373),
    c("ME", "MNE", "Montenegro", 382),
    c("MF", "MAF", "St. Martin", 590),
    c("MG", "MDG", "Madagascar", 261),
    c("MH", "MHL", "Marshall Islands", 692),
    c("MK", "MKD", "North Macedonia", 389),
    c("ML", "MLI", "Mali", 223),
    c("MM", "MMR", "Myanmar (Burma)", 95),
    c("MN", "MNG", "Mongolia", 976),
    c("MO", "MAC", "Macao SAR China", 853),
    c("MP", "MNP", "Northern Mariana Islands", 1),
    c("MQ", "MTQ", "Martinique", 596),
    c("MR", "MRT", "Mauritania", 222),
    c("MS", "MSR", "Montserrat", 1),
    c("MT", "MLT", "Malta", 356),
    c("MU", "MUS", "Mauritius", 230),
    c("MV", "MDV", "Maldives", 960),
    c("MW", "MWI", "Malawi", 265),
    c("MX", "MEX", "Mexico", 52),
    c("MY", "MYS", "Malaysia", 60),
    c("MZ", "MOZ", "Mozambique", 258),
    c("NA", "NAM", "Namibia", 264),
    c("NC", "NCL", "New Caledonia", 687),
    c("NE", "NER", "Niger", 227),
    c("NF", "NFK", "Norfolk Island", 672),
    c("NG", "NGA", "Nigeria", 234),
    c("NI", "NIC", "Nicaragua", 505),
    c("NL", "NLD", "Netherlands", 31),
    c("NO", "NOR", "Norway", 47),
    c("NP", "NPL", "Nepal", 977),
    c("NR", "NRU", "Nauru", 674),
    c("NU", "NIU", "Niue", 683),
    c("NZ", "NZL", "New Zealand", 64),
    c("OM", "OMN", "Oman", 968),
    c("PA", "PAN", "Panama", 507),
    c("PE", "PER", "Peru", 51),
    c("PF", "PYF", "French Polynesia", 689),
    c("PG", "PNG", "Papua New Guinea", 675),
    c("PH", "PHL", "Philippines", 63),
    c("PK", "PAK", "Pakistan", 92),
    c("PL", "POL", "Poland", 48),
    c("PM", "SPM", "St. Pierre & Miquelon", 508),
    c("PN", "PCN", "Pitcairn Islands", 64),
    c("PR", "PRI", "Puerto Rico", 1),
    c("PS", "PSE", "Palestinian Territories", 970),
    c("PT", "PRT", "Portugal", 351),
    c("PW", "PLW", "Palau", 680),
    c("PY", "PRY", "Paraguay", 595),
    c("QA", "QAT", "Qatar", 974),
    c("RE", "REU", "Réunion", 262),
    c("RO", "ROU", "Romania", 40),
    c("RS", "SRB", "Serbia", 381),
    c("RU", "RUS", "Russia", 7),
    c("RW", "RWA", "Rwanda", 250),
    c("SA", "SAU", "Saudi Arabia", 966),
    c("SB", "SLB", "Solomon Islands", 677),
    c("SC", "SYC", "Seychelles", 248),
    c("SD", "SDN", "Sudan", 249),
    c("SE", "SWE", "Sweden", 46),
    c("SG", "SGP", "Singapore", 65),
    c("SH", "SHN", "St. Helena", 290),
    c("SI", "SVN", "Slovenia", 386),
    c("SJ", "SJM", "Svalbard & Jan Mayen", 47),
    c("SK", "SVK", "Slovakia", 421),
    c("SL", "SLE", "Sierra Leone", 232),
    c("SM", "SMR", "San Marino", 378),
    c("SN", "SEN", "Senegal", 221),
    c("SO", "SOM", "Somalia", 252),
    c("SR", "SUR", "Suriname", 597),
    c("SS", "SSD", "South Sudan", 211),
    c("ST", "STP", "São Tomé & Príncipe", 239),
    c("SV", "SLV", "El Salvador", 503),
    c("SX", "SXM", "Sint Maarten", 1),
    c("SY", "SYR", "Syria", 963),
    c("SZ", "SWZ", "Eswatini", 268),
    c("TC", "TCA", "Turks & Caicos Islands", 1),
    c("TD", "TCD", "Chad", 235),
    c("TF", "ATF", "French Southern Territories", 262),
    c("TG", "TGO", "Togo", 228),
    c("TH", "THA", "Thailand", 66),
    c("TJ", "TJK", "Tajikistan", 992),
    c("TK", "TKL", "Tokelau", 690),
    c("TL", "TLS", "Timor-Leste", 670),
    c("TM", "TKM", "Turkmenistan", 993),
    c("TN", "TUN", "Tunisia", 216),
    c("TO", "TON", "Tonga", 676),
    c("TR", "TUR", "Türkiye", 90),
    c("TT", "TTO", "Trinidad & Tobago", 1),
    c("TV", "TUV", "Tuvalu", 688),
    c("TW", "TWN", "Taiwan", 886),
    c("TZ", "TZA", "Tanzania", 255),
    c("UA", "UKR", "Ukraine", 380),
    c("UG", "UGA", "Uganda", 256),
    c("UM", "UMI", "U.S. Outlying Islands", 1),
    c("US", "USA", "United States", 1),
    c("UY", "URY", "Uruguay", 598),
    c("UZ", "UZB", "Uzbekistan", 998),
    c("VA", "VAT", "Vatican City", 39),
    c("VC", "VCT", "St. Vincent & Grenadines", 1),
    c("VE", "VEN", "Venezuela", 58),
    c("VG", "VGB", "British Virgin Islands", 1),
    c("VI", "VIR", "U.S. Virgin Islands", 1),
    c("VN", "VNM", "Vietnam", 84),
    c("VU", "VUT", "Vanuatu", 678),
    c("WF", "WLF", "Wallis & Futuna", 681),
    c("WS", "WSM", "Samoa", 685),
    c("YE", "YEM", "Yemen", 967),
    c("YT", "MYT", "Mayotte", 262),
    c("ZA", "ZAF", "South Africa", 27),
    c("ZM", "ZMB", "Zambia", 260),
    c("ZW", "ZWE", "Zimbabwe", 263),
];

/// Looks up a country by alpha-2 code (case-insensitive).
#[must_use]
pub fn by_alpha2(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.alpha2.eq_ignore_ascii_case(code))
}

/// Looks up a country by alpha-3 code (case-insensitive).
#[must_use]
pub fn by_alpha3(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.alpha3.eq_ignore_ascii_case(code))
}

/// Looks up a country by its exact display name (case-insensitive).
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Country> {
    let wanted = name.trim().to_lowercase();
    COUNTRIES
        .iter()
        .find(|country| country.name.to_lowercase() == wanted)
}

/// E.164 calling code for an alpha-2 region, if one is assigned.
#[must_use]
pub fn calling_code(alpha2: &str) -> Option<u16> {
    by_alpha2(alpha2)
        .map(|country| country.calling_code)
        .filter(|code| *code > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in COUNTRIES.windows(2) {
            assert!(
                pair[0].alpha2 < pair[1].alpha2,
                "{} must sort before {}",
                pair[0].alpha2,
                pair[1].alpha2
            );
        }
    }

    #[test]
    fn alpha3_codes_are_unique() {
        let mut codes: Vec<&str> = COUNTRIES.iter().map(|c| c.alpha3).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn looks_up_by_each_key() {
        assert_eq!(by_alpha2("de").map(|c| c.alpha3), Some("DEU"));
        assert_eq!(by_alpha3("usa").map(|c| c.alpha2), Some("US"));
        assert_eq!(by_name("NEW ZEALAND").map(|c| c.alpha2), Some("NZ"));
        assert!(by_alpha3("XXX").is_none());
    }

    #[test]
    fn calling_codes() {
        assert_eq!(calling_code("DE"), Some(49));
        assert_eq!(calling_code("us"), Some(1));
        assert_eq!(calling_code("BV"), None);
        assert_eq!(calling_code("ZZ"), None);
    }
}
