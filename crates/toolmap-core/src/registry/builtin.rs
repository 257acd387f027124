//! The built-in tool table.

use super::types::{ToolConfig, UrlTemplate};
use crate::enumerate::{Axis, EnumerationStrategy};

const HEIGHTS_CM: [i64; 17] = [
    150, 152, 155, 157, 160, 162, 165, 167, 170, 172, 175, 177, 180, 182, 185, 187, 190,
];

const WEIGHTS_KG: [i64; 16] = [
    45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95, 100, 105, 110, 115, 120,
];

const BIRTH_YEARS: [i64; 26] = [
    1960, 1962, 1964, 1966, 1968, 1970, 1972, 1974, 1976, 1978, 1980, 1982, 1984, 1986, 1988,
    1990, 1992, 1994, 1996, 1998, 2000, 2002, 2004, 2006, 2008, 2010,
];

const MONTHS: [i64; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

const DAYS: [i64; 7] = [1, 5, 10, 15, 20, 25, 28];

/// Units offered on the `from` side of the unit converter.
pub const UNITS_FROM: [&str; 5] = ["meters", "feet", "kilograms", "pounds", "celsius"];

/// Units offered on the `to` side of the unit converter.
pub const UNITS_TO: [&str; 5] = ["feet", "meters", "pounds", "kilograms", "fahrenheit"];

const UNIT_VALUES: [i64; 5] = [1, 5, 10, 50, 100];

const CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "JPY", "CAD"];

const AMOUNTS: [i64; 5] = [1, 10, 100, 500, 1000];

const TIMEZONES: [&str; 4] = ["UTC", "EST", "PST", "CET"];

const DATETIMES: [&str; 2] = ["2024-01-15T09:00", "2024-06-15 14:30"];

const IPS: [&str; 3] = ["8.8.8.8", "1.1.1.1", "216.58.214.14"];

const QR_TEXTS: [&str; 3] = [
    "https://example.com",
    "Hello World",
    "WIFI:S:MyNetwork;T:WPA;P:secret;;",
];

/// All built-in tools, in sitemap order.
pub fn tools() -> Vec<ToolConfig> {
    vec![
        ToolConfig::new(
            "bmi-calculator",
            "BMI Calculator",
            "health",
            "Body mass index from height and weight",
        )
        .with_template(UrlTemplate::index(
            "/tools/bmi-calculator",
            "Calculate your body mass index",
            "health",
        ))
        .with_template(UrlTemplate::new(
            "/tools/bmi-calculator/[height]/[weight]",
            &["height", "weight"],
            "BMI for a height in cm and weight in kg",
            "health",
        ))
        .with_template(UrlTemplate::new(
            "/tools/bmi-calculator/[height]-cm-[weight]-kg",
            &["height", "weight"],
            "BMI for a height and weight, readable form",
            "health",
        ))
        .with_values("height", HEIGHTS_CM)
        .with_values("weight", WEIGHTS_KG)
        .with_enumeration(EnumerationStrategy::pair(
            Axis::raw("height", 10),
            Axis::raw("weight", 10),
        )),
        ToolConfig::new(
            "age-calculator",
            "Age Calculator",
            "date-time",
            "Exact age in years, months and days from a birth date",
        )
        .with_template(UrlTemplate::index(
            "/tools/age-calculator",
            "Calculate your exact age",
            "date-time",
        ))
        .with_template(UrlTemplate::new(
            "/tools/age-calculator/[year]/[month]/[day]",
            &["year", "month", "day"],
            "Age for a birth date",
            "date-time",
        ))
        .with_template(UrlTemplate::new(
            "/tools/age-calculator/[year]-[month]-[day]",
            &["year", "month", "day"],
            "Age for a birth date, readable form",
            "date-time",
        ))
        .with_values("year", BIRTH_YEARS)
        .with_values("month", MONTHS)
        .with_values("day", DAYS)
        .with_enumeration(EnumerationStrategy::triple(
            Axis::raw("year", 20),
            Axis::raw("month", 6),
            Axis::raw("day", 4),
        )),
        ToolConfig::new(
            "unit-converter",
            "Unit Converter",
            "conversion",
            "Convert length, weight and temperature units",
        )
        .with_template(UrlTemplate::index(
            "/tools/unit-converter",
            "Convert between units",
            "conversion",
        ))
        .with_template(UrlTemplate::new(
            "/tools/unit-converter/[from]/to/[to]/[value]",
            &["from", "to", "value"],
            "Convert a value between two units",
            "conversion",
        ))
        .with_template(UrlTemplate::new(
            "/tools/unit-converter/[value]-[from]-to-[to]",
            &["value", "from", "to"],
            "Convert a value between two units, readable form",
            "conversion",
        ))
        .with_values("from", UNITS_FROM)
        .with_values("to", UNITS_TO)
        .with_values("value", UNIT_VALUES)
        .with_enumeration(EnumerationStrategy::triple(
            Axis::raw("from", 4),
            Axis::raw("to", 4),
            Axis::raw("value", 5),
        )),
        ToolConfig::new(
            "currency-converter",
            "Currency Converter",
            "finance",
            "Convert amounts between currencies",
        )
        .with_template(UrlTemplate::index(
            "/tools/currency-converter",
            "Convert between currencies",
            "finance",
        ))
        .with_template(UrlTemplate::new(
            "/tools/currency-converter/[from]/to/[to]/[amount]",
            &["from", "to", "amount"],
            "Convert an amount between two currencies",
            "finance",
        ))
        .with_values("from", CURRENCIES)
        .with_values("to", CURRENCIES)
        .with_values("amount", AMOUNTS)
        .with_enumeration(EnumerationStrategy::triple(
            Axis::raw("from", 4),
            Axis::raw("to", 4),
            Axis::raw("amount", 5),
        )),
        ToolConfig::new(
            "timezone-converter",
            "Time Zone Converter",
            "date-time",
            "Convert a date and time between time zones",
        )
        .with_template(UrlTemplate::index(
            "/tools/timezone-converter",
            "Convert between time zones",
            "date-time",
        ))
        .with_template(UrlTemplate::new(
            "/tools/timezone-converter/[from]/to/[to]/[datetime]",
            &["from", "to", "datetime"],
            "Convert a date and time between two zones",
            "date-time",
        ))
        .with_values("from", TIMEZONES)
        .with_values("to", TIMEZONES)
        .with_values("datetime", DATETIMES)
        .with_enumeration(EnumerationStrategy::triple(
            Axis::raw("from", 3),
            Axis::raw("to", 3),
            Axis::encoded("datetime", 2),
        )),
        ToolConfig::new(
            "ip-lookup",
            "IP Lookup",
            "network",
            "Location and network details for an IP address",
        )
        .with_template(UrlTemplate::index(
            "/tools/ip-lookup",
            "Look up an IP address",
            "network",
        ))
        .with_template(UrlTemplate::new(
            "/tools/ip-lookup/[ip]",
            &["ip"],
            "Details for one IP address",
            "network",
        ))
        .with_values("ip", IPS)
        .with_enumeration(EnumerationStrategy::single(Axis::raw("ip", 3))),
        ToolConfig::new(
            "qr-generator",
            "QR Code Generator",
            "generator",
            "Generate QR codes for links, text and Wi-Fi credentials",
        )
        .with_template(UrlTemplate::index(
            "/tools/qr-generator",
            "Create a QR code",
            "generator",
        ))
        .with_template(UrlTemplate::new(
            "/tools/qr-generator/create/[text]",
            &["text"],
            "QR code for a given text",
            "generator",
        ))
        .with_values("text", QR_TEXTS)
        .with_enumeration(EnumerationStrategy::single(Axis::encoded("text", 3))),
        ToolConfig::new(
            "password-generator",
            "Password Generator",
            "security",
            "Generate strong random passwords",
        )
        .with_template(UrlTemplate::index(
            "/tools/password-generator",
            "Generate a secure password",
            "security",
        )),
        ToolConfig::new(
            "text-case-converter",
            "Text Case Converter",
            "text",
            "Convert text between upper, lower, title and camel case",
        )
        .with_template(UrlTemplate::index(
            "/tools/text-case-converter",
            "Change the case of text",
            "text",
        )),
        ToolConfig::new(
            "base64-encoder",
            "Base64 Encoder/Decoder",
            "developer",
            "Encode and decode Base64 strings",
        )
        .with_template(UrlTemplate::index(
            "/tools/base64-encoder",
            "Encode or decode Base64",
            "developer",
        )),
    ]
}
