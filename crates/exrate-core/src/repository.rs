use crate::{Currency, ValidationError};

/// Codes requested when nothing else is configured.
///
/// `CZK` (the target) and `XYZ` (unknown to the bank) are kept on purpose;
/// neither ever matches a quote, so they are dropped from the result.
pub const DEFAULT_SOURCE_CURRENCIES: [&str; 9] =
    ["USD", "EUR", "CZK", "JPY", "KES", "RUB", "THB", "TRY", "XYZ"];

/// Supplies the currencies a caller is interested in.
pub trait CurrencyRepository: Send + Sync {
    fn source_currencies(&self) -> Vec<Currency>;
}

/// Fixed, in-memory currency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCurrencyRepository {
    currencies: Vec<Currency>,
}

impl StaticCurrencyRepository {
    pub fn new(currencies: Vec<Currency>) -> Self {
        Self { currencies }
    }

    /// Validates every raw code; the first invalid one fails the whole list.
    pub fn parse<I, S>(codes: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let currencies = codes
            .into_iter()
            .map(|code| Currency::parse(code.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(currencies))
    }
}

impl Default for StaticCurrencyRepository {
    fn default() -> Self {
        let currencies = DEFAULT_SOURCE_CURRENCIES
            .iter()
            .filter_map(|code| Currency::parse(code).ok())
            .collect();
        Self::new(currencies)
    }
}

impl CurrencyRepository for StaticCurrencyRepository {
    fn source_currencies(&self) -> Vec<Currency> {
        self.currencies.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_is_fully_valid() {
        let repository = StaticCurrencyRepository::default();
        assert_eq!(
            repository.source_currencies().len(),
            DEFAULT_SOURCE_CURRENCIES.len()
        );
    }

    #[test]
    fn default_list_carries_target_currency() {
        let currencies = StaticCurrencyRepository::default().source_currencies();
        assert!(currencies.contains(&Currency::target()));
    }

    #[test]
    fn parse_rejects_any_invalid_code() {
        let err = StaticCurrencyRepository::parse(["usd", "euro"]).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidCurrency { .. }));
    }

    #[test]
    fn empty_list_is_allowed() {
        let repository = StaticCurrencyRepository::parse(Vec::<String>::new()).expect("valid");
        assert!(repository.source_currencies().is_empty());
    }
}
