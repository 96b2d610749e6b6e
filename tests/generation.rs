use tfl_entail::{
    config::{Config, Palette},
    generic::random::MinimalPCG32,
    procedures::{
        entailment::Engine,
        generate::random_formula,
        search::{generate_batch, generate_problem},
    },
    structures::{
        atom::Alphabet,
        formula::BinaryConnective,
        problem::ProblemRecord,
    },
};

mod formulas {
    use super::*;

    #[test]
    fn basic_palette_is_respected() {
        let mut rng = MinimalPCG32::from_u64(301);
        let palette = Palette::new(false, &[BinaryConnective::And, BinaryConnective::Implies]);

        for _ in 0..5_000 {
            let f = random_formula(&mut rng, 2, &Alphabet::default(), &palette, 0.25);
            assert!(!f.has_negation(), "{f}");
            for connective in f.binary_connectives() {
                assert!(
                    matches!(connective, BinaryConnective::And | BinaryConnective::Implies),
                    "{f}"
                );
            }
        }
    }

    #[test]
    fn depth_is_bounded() {
        let mut rng = MinimalPCG32::from_u64(302);
        for depth in 0..5 {
            for _ in 0..200 {
                let f = random_formula(&mut rng, depth, &Alphabet::default(), &Palette::full(), 0.25);
                assert!(f.depth() <= depth);
            }
        }
    }
}

mod problems {
    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.max_attempts.set(10_000).unwrap();
        config
    }

    #[test]
    fn accepted_problems_hold_invariants() {
        let engine = Engine::default();
        let config = config();
        let mut rng = MinimalPCG32::from_u64(303);

        for index in 0..10 {
            let problem = generate_problem(&engine, &config, &mut rng, &format!("test_{index}")).unwrap();

            assert!(!problem.has_duplicate_premises());
            assert!(!problem.has_trivial_conclusion());
            assert_eq!(engine.is_entailed(&problem.premises, &problem.conclusion), Ok(true));
            assert_eq!(engine.is_contradictory(&problem.premises), Ok(false));
            assert_eq!(engine.is_minimal(&problem.premises, &problem.conclusion), Ok(true));
        }
    }

    #[test]
    fn basic_problems() {
        let engine = Engine::default();
        let mut config = config();
        config.palette = Palette::basic();

        for problem in generate_batch(&engine, &config, 5, 304).unwrap() {
            for formula in problem.premises.iter().chain([&problem.conclusion]) {
                assert!(!formula.has_negation());
                assert!(formula.depth() <= 2);
            }
        }
    }

    #[test]
    fn batches_are_reproducible() {
        let engine = Engine::default();
        let mut config = config();

        let one = generate_batch(&engine, &config, 8, 305).unwrap();
        let two = generate_batch(&engine, &config, 8, 305).unwrap();
        config.workers.set(3).unwrap();
        let three = generate_batch(&engine, &config, 8, 305).unwrap();

        assert_eq!(one, two);
        assert_eq!(one, three);
        assert_ne!(one, generate_batch(&engine, &config, 8, 306).unwrap());
    }

    #[test]
    fn records() {
        let engine = Engine::default();
        let config = config();

        for problem in generate_batch(&engine, &config, 4, 307).unwrap() {
            let record = problem.to_record();
            assert_eq!(record.difficulty.depth, 2);
            assert_eq!(record.difficulty.length, problem.premises.len() + 1);

            let json = serde_json::to_string(&record).unwrap();
            let read: ProblemRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(read.into_problem(Some(&Alphabet::default())), Ok(problem));
        }
    }
}
