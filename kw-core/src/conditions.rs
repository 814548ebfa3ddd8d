use kw_api::{
    CONDITION_TRUE,
    Condition,
};

// Anything that can answer "has the controller finished reconciling this?" from its own status.
// Objects with no status yet are never ready.
pub trait Ready {
    fn is_ready(&self) -> bool;
}

pub fn has_condition(conds: &[Condition], type_: &str, status: &str) -> bool {
    conds.iter().any(|c| c.is(type_, status))
}

pub fn has_true_condition(conds: &[Condition], type_: &str) -> bool {
    has_condition(conds, type_, CONDITION_TRUE)
}

// Some controllers (Istio in particular) aren't consistent about how they capitalize the status
pub fn has_true_condition_ignore_case(conds: &[Condition], type_: &str) -> bool {
    conds
        .iter()
        .any(|c| c.type_ == type_ && c.status.eq_ignore_ascii_case(CONDITION_TRUE))
}

#[cfg(test)]
mod tests {
    use kw_api::{
        CONDITION_FALSE,
        READY_CONDITION,
    };
    use rstest::*;

    use super::*;

    #[fixture]
    fn conds() -> Vec<Condition> {
        vec![Condition::new("Synced", CONDITION_FALSE), Condition::new(READY_CONDITION, CONDITION_TRUE)]
    }

    #[rstest]
    fn test_has_condition(conds: Vec<Condition>) {
        assert!(has_condition(&conds, "Synced", CONDITION_FALSE));
        assert!(!has_condition(&conds, "Synced", CONDITION_TRUE));
        assert!(!has_condition(&conds, "Missing", CONDITION_TRUE));
    }

    #[rstest]
    fn test_has_true_condition(conds: Vec<Condition>) {
        assert!(has_true_condition(&conds, READY_CONDITION));
        assert!(!has_true_condition(&conds, "Synced"));
        assert!(!has_true_condition(&[], READY_CONDITION));
    }

    #[rstest]
    #[case::lower("true", true)]
    #[case::title("True", true)]
    #[case::upper("TRUE", true)]
    #[case::other("False", false)]
    fn test_has_true_condition_ignore_case(#[case] status: &str, #[case] expected: bool) {
        let conds = vec![Condition::new(READY_CONDITION, status)];
        assert_eq!(has_true_condition_ignore_case(&conds, READY_CONDITION), expected);
        assert!(!has_true_condition(&conds, "Reconciled"));
    }
}
