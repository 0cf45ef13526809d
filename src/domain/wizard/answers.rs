//! Answers collected by the wizard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;
use crate::domain::verdict::DecisionPolicy;

use super::errors::MissingAnswer;
use super::motive::Motive;
use super::price_input::PriceInput;

/// The user's in-progress answers. Default is all-unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Answers {
    item: String,
    price: PriceInput,
    motive: Option<Motive>,
    accept_throw: Option<bool>,
}

impl Answers {
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Filtered price text.
    pub fn price_text(&self) -> &str {
        self.price.text()
    }

    /// Clamped price.
    pub fn price(&self) -> Money {
        self.price.amount()
    }

    pub fn motive(&self) -> Option<Motive> {
        self.motive
    }

    pub fn accept_throw(&self) -> Option<bool> {
        self.accept_throw
    }

    /// Answers still required to leave the input step, in display order.
    pub fn missing_for_commitment(&self) -> Vec<MissingAnswer> {
        let mut missing = Vec::new();
        if self.item.trim().is_empty() {
            missing.push(MissingAnswer::Item);
        }
        if self.price().is_zero() {
            missing.push(MissingAnswer::Price);
        }
        if self.motive.is_none() {
            missing.push(MissingAnswer::Motive);
        }
        missing
    }

    pub fn is_ready_for_commitment(&self) -> bool {
        self.missing_for_commitment().is_empty()
    }

    pub(super) fn set_item(&mut self, item: String) {
        self.item = item;
    }

    pub(super) fn set_price(&mut self, raw: &str, policy: &DecisionPolicy) -> Money {
        self.price = PriceInput::from_raw(raw, policy);
        self.price.amount()
    }

    pub(super) fn set_motive(&mut self, motive: Motive) {
        self.motive = Some(motive);
    }

    pub(super) fn set_accept_throw(&mut self, accept: bool) {
        self.accept_throw = Some(accept);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Answers {
        let mut answers = Answers::default();
        answers.set_item("sneakers".to_string());
        answers.set_price("199", &DecisionPolicy::default());
        answers.set_motive(Motive::A1);
        answers
    }

    #[test]
    fn default_is_all_unset() {
        let answers = Answers::default();
        assert_eq!(answers.item(), "");
        assert_eq!(answers.price_text(), "");
        assert_eq!(answers.price(), Money::ZERO);
        assert_eq!(answers.motive(), None);
        assert_eq!(answers.accept_throw(), None);
    }

    #[test]
    fn empty_answers_miss_everything() {
        assert_eq!(
            Answers::default().missing_for_commitment(),
            vec![MissingAnswer::Item, MissingAnswer::Price, MissingAnswer::Motive]
        );
    }

    #[test]
    fn filled_answers_are_ready() {
        assert!(filled().is_ready_for_commitment());
    }

    #[test]
    fn whitespace_item_counts_as_missing() {
        let mut answers = filled();
        answers.set_item("   \t".to_string());
        assert_eq!(answers.missing_for_commitment(), vec![MissingAnswer::Item]);
    }

    #[test]
    fn unparseable_price_counts_as_missing() {
        let mut answers = filled();
        answers.set_price("1.2.3", &DecisionPolicy::default());
        assert_eq!(answers.price_text(), "1.2.3");
        assert_eq!(answers.missing_for_commitment(), vec![MissingAnswer::Price]);
    }

    #[test]
    fn item_is_stored_verbatim() {
        let mut answers = Answers::default();
        answers.set_item("  membership ".to_string());
        assert_eq!(answers.item(), "  membership ");
    }
}
