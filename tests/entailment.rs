use tfl_entail::{
    config::Palette,
    generic::random::MinimalPCG32,
    parse::parse_formula,
    procedures::{
        entailment::{Engine, Verdict},
        generate::random_formula,
    },
    structures::{
        atom::{Alphabet, Atom},
        formula::Formula,
        valuation::Valuation,
    },
};

fn formulas(texts: &[&str]) -> Vec<Formula> {
    texts.iter().map(|text| parse_formula(text).unwrap()).collect()
}

fn formula(text: &str) -> Formula {
    parse_formula(text).unwrap()
}

/// Entailment by truth table, over the default alphabet.
fn truth_table_entails(premises: &[Formula], conclusion: &Formula) -> bool {
    let alphabet = Alphabet::default();
    let entails = Valuation::all_over(alphabet.atoms()).all(|valuation| {
        !premises
            .iter()
            .all(|premise| premise.evaluate(&valuation) == Some(true))
            || conclusion.evaluate(&valuation) == Some(true)
    });
    entails
}

mod properties {
    use super::*;

    #[test]
    fn reflexivity() {
        let engine = Engine::default();
        let mut rng = MinimalPCG32::from_u64(101);
        for _ in 0..200 {
            let f = random_formula(&mut rng, 3, &Alphabet::default(), &Palette::full(), 0.25);
            assert_eq!(engine.is_entailed(&[f.clone()], &f), Ok(true), "{f}");
        }
    }

    #[test]
    fn formula_and_negation_contradict() {
        let engine = Engine::default();
        let mut rng = MinimalPCG32::from_u64(102);
        for _ in 0..200 {
            let f = random_formula(&mut rng, 3, &Alphabet::default(), &Palette::full(), 0.25);
            let premises = [f.clone(), Formula::not(f.clone())];
            assert_eq!(engine.is_contradictory(&premises), Ok(true), "{f}");
        }
    }

    #[test]
    fn determinism() {
        let engine = Engine::default();
        let premises = formulas(&["(P → (Q ∨ R))", "(¬Q)"]);
        let conclusion = formula("(P → R)");

        let first = engine.entailment(&premises, &conclusion).unwrap();
        // Unrelated checks between the two do not change the result.
        for _ in 0..5 {
            let _ = engine.is_entailed(&formulas(&["(S ↔ P)"]), &formula("(¬S)"));
        }
        let second = engine.entailment(&premises, &conclusion).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, Verdict::Entailed);
    }

    #[test]
    fn de_morgan() {
        let engine = Engine::default();
        let mut rng = MinimalPCG32::from_u64(103);
        for _ in 0..50 {
            let a = random_formula(&mut rng, 2, &Alphabet::default(), &Palette::full(), 0.25);
            let b = random_formula(&mut rng, 2, &Alphabet::default(), &Palette::full(), 0.25);

            let not_and = Formula::not(Formula::and(a.clone(), b.clone()));
            let or_nots = Formula::or(Formula::not(a.clone()), Formula::not(b.clone()));

            assert_eq!(engine.is_entailed(&[not_and.clone()], &or_nots), Ok(true));
            assert_eq!(engine.is_entailed(&[or_nots], &not_and), Ok(true));
        }
    }

    #[test]
    fn agrees_with_truth_tables() {
        let engine = Engine::default();
        let mut rng = MinimalPCG32::from_u64(104);
        let mut entailed = 0;

        for _ in 0..300 {
            let premises = (0..2)
                .map(|_| random_formula(&mut rng, 2, &Alphabet::default(), &Palette::full(), 0.25))
                .collect::<Vec<_>>();
            let conclusion = random_formula(&mut rng, 2, &Alphabet::default(), &Palette::full(), 0.25);

            let expected = truth_table_entails(&premises, &conclusion);
            assert_eq!(engine.is_entailed(&premises, &conclusion), Ok(expected));
            if expected {
                entailed += 1;
            }
        }

        // Both outcomes are exercised.
        assert!(0 < entailed && entailed < 300);
    }

    #[test]
    fn countermodels_are_countermodels() {
        let engine = Engine::default();
        let mut rng = MinimalPCG32::from_u64(105);

        for _ in 0..300 {
            let premises = (0..2)
                .map(|_| random_formula(&mut rng, 2, &Alphabet::default(), &Palette::full(), 0.25))
                .collect::<Vec<_>>();
            let conclusion = random_formula(&mut rng, 2, &Alphabet::default(), &Palette::full(), 0.25);

            if let Verdict::NotEntailed { countermodel } =
                engine.entailment(&premises, &conclusion).unwrap()
            {
                for premise in &premises {
                    assert_eq!(premise.evaluate(&countermodel), Some(true));
                }
                assert_eq!(conclusion.evaluate(&countermodel), Some(false));
            }
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn hypothetical_syllogism() {
        let engine = Engine::default();
        let premises = ["(P → Q)", "(Q → R)", "P"];

        assert_eq!(engine.is_entailed_text(&premises, "R"), Ok(true));
        assert_eq!(engine.is_entailed_text(&premises[..2], "R"), Ok(false));
        assert_eq!(engine.is_minimal_text(&premises, "R"), Ok(true));
    }

    #[test]
    fn contradiction() {
        let engine = Engine::default();
        assert_eq!(engine.is_contradictory_text(&["P", "(¬P)"]), Ok(true));
        assert_eq!(engine.is_contradictory_text(&["P", "(¬Q)"]), Ok(false));
    }

    #[test]
    fn disjunction_elimination() {
        let engine = Engine::default();
        assert_eq!(
            engine.is_entailed_text(&["(P ∨ Q)", "(P → R)", "(Q → R)"], "R"),
            Ok(true)
        );
        assert_eq!(engine.is_entailed_text(&["(P ∨ Q)", "(P → R)"], "R"), Ok(false));
    }

    #[test]
    fn ascii_and_unicode_agree() {
        let engine = Engine::default();
        assert_eq!(
            engine.is_entailed_text(&["(P | Q)", "(P -> R)", "(Q -> R)"], "R"),
            Ok(true)
        );
        assert_eq!(engine.is_entailed_text(&["(P <-> Q)", "~Q"], "(~P)"), Ok(true));
    }

    #[test]
    fn custom_alphabet() {
        let alphabet: Alphabet = "rain, wet".parse().unwrap();
        let engine = Engine::new(tfl_entail::oracle::VarisatOracle, alphabet);

        assert_eq!(engine.is_entailed_text(&["(rain → wet)", "rain"], "wet"), Ok(true));
        assert!(engine.is_entailed_text(&["P"], "P").is_err());

        let Verdict::NotEntailed { countermodel } = engine
            .entailment(&formulas(&["(rain → wet)"]), &formula("rain"))
            .unwrap()
        else {
            panic!("expected a countermodel");
        };
        assert_eq!(countermodel.value_of(&Atom::from("rain")), Some(false));
    }
}
