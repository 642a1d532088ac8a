use decicalc::{Calculator, evaluate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rendering_is_idempotent(s in r"[0-9]{1,20}(\.[0-9]{0,10})?([eE][+-]?[0-9]{1,3})?") {
        let once = evaluate(&s).unwrap();
        let twice = evaluate(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sum_matches_closed_form(n in 0u64..200) {
        let result = evaluate(&format!("sum(0,{n},i)")).unwrap();
        prop_assert_eq!(result, (n * (n + 1) / 2).to_string());
    }

    #[test]
    fn adding_then_subtracting_is_identity(a in r"-?[0-9]{1,15}(\.[0-9]{1,8})?",
                                           b in r"-?[0-9]{1,15}(\.[0-9]{1,8})?") {
        let result = evaluate(&format!("({a})+({b})-({b})==({a})")).unwrap();
        prop_assert_eq!(result, "1");
    }

    #[test]
    fn session_keeps_every_binding(values in prop::collection::vec(0i64..1_000_000, 1..10)) {
        let mut calculator = Calculator::new();
        for (index, value) in values.iter().enumerate() {
            calculator.evaluate(&format!("v{index} = {value}")).unwrap();
        }
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(calculator.evaluate(&format!("v{index}")).unwrap(), value.to_string());
        }
    }
}
