use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Gbp,
    Eur,
}

impl Currency {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '$' => Some(Self::Usd),
            '£' => Some(Self::Gbp),
            '€' => Some(Self::Eur),
            _ => None,
        }
    }
}

/// Structured salary band in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    pub currency: Option<Currency>,
}

impl SalaryRange {
    /// Parses display strings such as `"$120k - $150k"`, `"$95,000"` or
    /// `"£40k to £55k"`. Returns `None` for text without a leading amount.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.replace(" to ", "-").replace('–', "-");
        let mut parts = normalized.split('-');
        let first = parse_amount(parts.next()?)?;
        let second = match parts.next() {
            Some(part) => Some(parse_amount(part)?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }

        let (low, high) = match second {
            Some(other) => (first.0.min(other.0), first.0.max(other.0)),
            None => (first.0, first.0),
        };
        let currency = first.1.or(second.and_then(|other| other.1));

        Some(Self {
            min: low,
            max: high,
            currency,
        })
    }
}

fn parse_amount(raw: &str) -> Option<(u64, Option<Currency>)> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let (currency, rest) = match chars.next().and_then(Currency::from_symbol) {
        Some(currency) => (Some(currency), chars.as_str().trim_start()),
        None => (None, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .unwrap_or(rest.len());
    let (number, suffix) = rest.split_at(digits_end);
    let number: String = number.chars().filter(|c| *c != ',').collect();
    if number.is_empty() {
        return None;
    }
    let value: f64 = number.parse().ok()?;

    let multiplier = match suffix.trim_start().chars().next() {
        Some('k' | 'K') => 1_000.0,
        Some('m' | 'M') => 1_000_000.0,
        _ => 1.0,
    };

    Some(((value * multiplier).round() as u64, currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thousand_suffixed_ranges() {
        let range = SalaryRange::parse("$120k - $150k").expect("range parses");
        assert_eq!(range.min, 120_000);
        assert_eq!(range.max, 150_000);
        assert_eq!(range.currency, Some(Currency::Usd));
    }

    #[test]
    fn parses_plain_and_single_amounts() {
        let range = SalaryRange::parse("$95,000 - $110,000").expect("range parses");
        assert_eq!((range.min, range.max), (95_000, 110_000));

        let single = SalaryRange::parse("€1.5M").expect("single amount parses");
        assert_eq!((single.min, single.max), (1_500_000, 1_500_000));
        assert_eq!(single.currency, Some(Currency::Eur));
    }

    #[test]
    fn accepts_word_separators_and_reversed_bounds() {
        let range = SalaryRange::parse("£55k to £40k").expect("range parses");
        assert_eq!((range.min, range.max), (40_000, 55_000));
        assert_eq!(range.currency, Some(Currency::Gbp));
    }

    #[test]
    fn rejects_text_without_amounts() {
        assert!(SalaryRange::parse("Competitive").is_none());
        assert!(SalaryRange::parse("").is_none());
        assert!(SalaryRange::parse("$1k - $2k - $3k").is_none());
    }
}
