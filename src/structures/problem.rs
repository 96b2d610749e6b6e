/*!
Problems, and their records.

A problem is a collection of premises, a conclusion, and metadata on how the problem was generated.

Problems are created by the [search](crate::procedures::search) procedures, validated by an [engine](crate::procedures::entailment::Engine), and then handed to the caller.
For exchange, a problem is written as a [ProblemRecord], which serializes (with serde) to:

```json
{
  "id": "entailment_001",
  "premises": ["(P → Q)", "(Q → R)", "P"],
  "conclusion": "R",
  "difficulty": { "depth": 2, "length": 4 }
}
```

Where the depth is the depth bound used during generation and the length is the number of premises plus one (for the conclusion).

```rust
# use tfl_entail::structures::problem::ProblemRecord;
let json = r#"{"id":"test_005","premises":["(P ∨ Q)","(P -> R)","(Q → R)"],"conclusion":"R","difficulty":{"depth":1,"length":4}}"#;
let record: ProblemRecord = serde_json::from_str(json).unwrap();
let problem = record.into_problem(None).unwrap();

assert_eq!(problem.premise_count(), 3);
assert_eq!(problem.to_record().premises[1], "(P → R)");
```
*/

use serde::{Deserialize, Serialize};

use crate::{
    parse::{parse_formula, parse_formula_in},
    structures::{atom::Alphabet, formula::Formula},
    types::err::ParseError,
};

/// A problem: do the premises entail the conclusion?
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// An identifier for the problem.
    pub id: String,

    /// The premises, which should be distinct.
    pub premises: Vec<Formula>,

    /// The conclusion.
    pub conclusion: Formula,

    /// The depth bound used to generate the problem.
    pub depth: usize,
}

impl Problem {
    pub fn premise_count(&self) -> usize {
        self.premises.len()
    }

    /// The number of formulas in the problem.
    pub fn length(&self) -> usize {
        self.premises.len() + 1
    }

    /// Whether some premise occurs more than once.
    pub fn has_duplicate_premises(&self) -> bool {
        self.premises
            .iter()
            .enumerate()
            .any(|(index, premise)| self.premises[..index].contains(premise))
    }

    /// Whether the conclusion is (syntactically) one of the premises.
    pub fn has_trivial_conclusion(&self) -> bool {
        self.premises.contains(&self.conclusion)
    }

    /// The record of the problem, with formulas in the canonical notation.
    pub fn to_record(&self) -> ProblemRecord {
        ProblemRecord {
            id: self.id.clone(),
            premises: self.premises.iter().map(|p| p.to_string()).collect(),
            conclusion: self.conclusion.to_string(),
            difficulty: Difficulty {
                depth: self.depth,
                length: self.length(),
            },
        }
    }
}

/// The difficulty of a problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub depth: usize,
    pub length: usize,
}

/// The exchange form of a problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub id: String,
    pub premises: Vec<String>,
    pub conclusion: String,
    pub difficulty: Difficulty,
}

impl ProblemRecord {
    /// Parses the formulas of the record, optionally requiring all atoms to belong to some alphabet.
    pub fn into_problem(self, alphabet: Option<&Alphabet>) -> Result<Problem, ParseError> {
        let parse = |text: &str| match alphabet {
            Some(alphabet) => parse_formula_in(text, alphabet),
            None => parse_formula(text),
        };

        let premises = self
            .premises
            .iter()
            .map(|premise| parse(premise))
            .collect::<Result<Vec<_>, _>>()?;
        let conclusion = parse(&self.conclusion)?;

        Ok(Problem {
            id: self.id,
            premises,
            conclusion,
            depth: self.difficulty.depth,
        })
    }
}
