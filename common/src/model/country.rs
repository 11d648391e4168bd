/// An entry of the nationality select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, the value sent to the backend.
    pub code: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_NATIONALITY: &str = "AE";

const fn entry(code: &'static str, label: &'static str) -> Country {
    Country { code, label }
}

pub const COUNTRIES: &[Country] = &[
    entry("AE", "United Arab Emirates"),
    entry("AF", "Afghanistan"),
    entry("AR", "Argentina"),
    entry("AU", "Australia"),
    entry("BD", "Bangladesh"),
    entry("BH", "Bahrain"),
    entry("BR", "Brazil"),
    entry("CA", "Canada"),
    entry("CH", "Switzerland"),
    entry("CN", "China"),
    entry("DE", "Germany"),
    entry("DZ", "Algeria"),
    entry("EG", "Egypt"),
    entry("ES", "Spain"),
    entry("ET", "Ethiopia"),
    entry("FR", "France"),
    entry("GB", "United Kingdom"),
    entry("GH", "Ghana"),
    entry("GR", "Greece"),
    entry("ID", "Indonesia"),
    entry("IE", "Ireland"),
    entry("IN", "India"),
    entry("IQ", "Iraq"),
    entry("IR", "Iran"),
    entry("IT", "Italy"),
    entry("JO", "Jordan"),
    entry("JP", "Japan"),
    entry("KE", "Kenya"),
    entry("KR", "South Korea"),
    entry("KW", "Kuwait"),
    entry("LB", "Lebanon"),
    entry("LK", "Sri Lanka"),
    entry("MA", "Morocco"),
    entry("MX", "Mexico"),
    entry("MY", "Malaysia"),
    entry("NG", "Nigeria"),
    entry("NL", "Netherlands"),
    entry("NP", "Nepal"),
    entry("NZ", "New Zealand"),
    entry("OM", "Oman"),
    entry("PH", "Philippines"),
    entry("PK", "Pakistan"),
    entry("PL", "Poland"),
    entry("PS", "Palestine"),
    entry("PT", "Portugal"),
    entry("QA", "Qatar"),
    entry("RO", "Romania"),
    entry("RU", "Russia"),
    entry("SA", "Saudi Arabia"),
    entry("SD", "Sudan"),
    entry("SE", "Sweden"),
    entry("SG", "Singapore"),
    entry("SY", "Syria"),
    entry("TH", "Thailand"),
    entry("TN", "Tunisia"),
    entry("TR", "Turkey"),
    entry("UA", "Ukraine"),
    entry("UG", "Uganda"),
    entry("US", "United States"),
    entry("VN", "Vietnam"),
    entry("YE", "Yemen"),
    entry("ZA", "South Africa"),
];

pub fn find(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}

/// Display label for a code, falling back to the code itself.
pub fn label_for(code: &str) -> &str {
    find(code).map_or(code, |country| country.label)
}
