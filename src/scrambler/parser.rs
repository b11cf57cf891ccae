use super::{
    Direction, Instruction, MovePosition, ReversePositions, RotatePosition, RotateSteps,
    SwapLetter, SwapPosition,
};
use anyhow::Context;
use regex::{Captures, Regex};
use std::{fmt, str::FromStr};

lazy_static! {
    static ref SWAP_POSITION: Regex =
        Regex::new(r"^swap position (\d+) with position (\d+)$").unwrap();
    static ref SWAP_LETTER: Regex = Regex::new(r"^swap letter (\w) with letter (\w)$").unwrap();
    static ref ROTATE_STEPS: Regex = Regex::new(r"^rotate (left|right) (\d+) steps?$").unwrap();
    static ref ROTATE_POSITION: Regex =
        Regex::new(r"^rotate based on position of letter (\w)$").unwrap();
    static ref REVERSE_POSITIONS: Regex =
        Regex::new(r"^reverse positions (\d+) through (\d+)$").unwrap();
    static ref MOVE_POSITION: Regex =
        Regex::new(r"^move position (\d+) to position (\d+)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line matches none of the instruction grammars.
    Unrecognised(String),
    /// The line has the shape of an instruction but an operand doesn't convert.
    Operand { line: String, operand: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unrecognised(line) => write!(f, "Unrecognised instruction: {:?}", line),
            Self::Operand { line, operand } => {
                write!(f, "Invalid operand {:?} in instruction {:?}", operand, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseError::Unrecognised(word.to_owned())),
        }
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        if let Some(caps) = SWAP_POSITION.captures(line) {
            return Ok(SwapPosition {
                x: index(line, &caps, 1)?,
                y: index(line, &caps, 2)?,
            }
            .into());
        }
        if let Some(caps) = SWAP_LETTER.captures(line) {
            return Ok(SwapLetter {
                a: letter(line, &caps, 1)?,
                b: letter(line, &caps, 2)?,
            }
            .into());
        }
        if let Some(caps) = ROTATE_STEPS.captures(line) {
            let direction = caps[1].parse().map_err(|_| operand_error(line, &caps[1]))?;
            return Ok(RotateSteps {
                direction,
                steps: index(line, &caps, 2)?,
            }
            .into());
        }
        if let Some(caps) = ROTATE_POSITION.captures(line) {
            return Ok(RotatePosition {
                letter: letter(line, &caps, 1)?,
            }
            .into());
        }
        if let Some(caps) = REVERSE_POSITIONS.captures(line) {
            return Ok(ReversePositions {
                x: index(line, &caps, 1)?,
                y: index(line, &caps, 2)?,
            }
            .into());
        }
        if let Some(caps) = MOVE_POSITION.captures(line) {
            return Ok(MovePosition {
                x: index(line, &caps, 1)?,
                y: index(line, &caps, 2)?,
            }
            .into());
        }

        Err(ParseError::Unrecognised(line.to_owned()))
    }
}

/// Parses one instruction per line, skipping blank lines. Fails on the first
/// line that isn't an instruction.
pub fn parse(string: impl AsRef<str>) -> anyhow::Result<Vec<Instruction>> {
    let mut instructions = vec![];

    for (line_pos, line) in string.as_ref().lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let instruction: Instruction = line
            .parse()
            .with_context(|| format!("Couldn't parse the instruction at line {}", line_pos + 1))?;

        instructions.push(instruction);
    }

    Ok(instructions)
}

fn operand_error(line: &str, operand: &str) -> ParseError {
    ParseError::Operand {
        line: line.to_owned(),
        operand: operand.to_owned(),
    }
}

fn index(line: &str, caps: &Captures, group: usize) -> Result<usize, ParseError> {
    let operand = &caps[group];
    operand.parse().map_err(|_| operand_error(line, operand))
}

fn letter(line: &str, caps: &Captures, group: usize) -> Result<char, ParseError> {
    let operand = &caps[group];
    let mut chars = operand.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(operand_error(line, operand)),
    }
}
